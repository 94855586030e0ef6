use std::path::Path;

/// Literal marker that excludes a path from checking when it appears anywhere
/// in the path string. Case-sensitive substring match, not a glob: a file named
/// `fixtures_helper.rb` outside any test tree is excluded as well.
pub const FIXTURES_MARKER: &str = "fixtures";

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Drops everything under (or named like) a test-fixtures tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturesFilter;

impl FileFilter for FixturesFilter {
    fn should_include(&self, path: &Path) -> bool {
        !path.to_string_lossy().contains(FIXTURES_MARKER)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
