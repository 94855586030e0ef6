mod directory;
mod filter;
mod resolver;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, FixturesFilter, FIXTURES_MARKER};
pub use resolver::{PathResolver, normalize_separators, resolve_paths};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching regular files.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
