//! File classification.
//!
//! Files are partitioned by successive passes in a fixed priority order; each
//! pass removes what it matched, so every file lands in exactly one category.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Basenames of dependency descriptors (`Puppetfile`, `Modulefile`, `Rakefile`,
/// `Gemfile`). Anchored at the end only, like the librarian tools expect.
static DEPENDENCY_DESCRIPTOR: LazyLock<Regex> = LazyLock::new(|| {
    // SAFETY: pattern is a static string
    Regex::new(r"(?:Puppet|Module|Rake|Gem)file$").expect("valid dependency descriptor pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Manifest,
    Template,
    Script,
    ScriptTemplate,
    DataYaml,
    DataJson,
    DependencyDescriptor,
    Unrecognized,
}

impl Category {
    /// Categories that are handed to a checker, in dispatch order.
    pub const CHECKED: [Self; 7] = [
        Self::Manifest,
        Self::Template,
        Self::Script,
        Self::ScriptTemplate,
        Self::DataYaml,
        Self::DataJson,
        Self::DependencyDescriptor,
    ];

    pub const ALL: [Self; 8] = [
        Self::Manifest,
        Self::Template,
        Self::Script,
        Self::ScriptTemplate,
        Self::DataYaml,
        Self::DataJson,
        Self::DependencyDescriptor,
        Self::Unrecognized,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manifest => "manifest",
            Self::Template => "template",
            Self::Script => "script",
            Self::ScriptTemplate => "script template",
            Self::DataYaml => "yaml data",
            Self::DataJson => "json data",
            Self::DependencyDescriptor => "dependency descriptor",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Whether `path` matches this category's own pattern.
    ///
    /// Patterns can overlap (`Puppetfile.rb` is both a script and a
    /// dependency descriptor); precedence is applied by [`classify`], not here.
    /// `Unrecognized` matches everything.
    #[must_use]
    pub fn matches(self, path: &Path) -> bool {
        let ext = path.extension().and_then(OsStr::to_str);
        match self {
            Self::Manifest => ext == Some("pp"),
            Self::Template => ext == Some("epp"),
            Self::Script => ext == Some("rb"),
            Self::ScriptTemplate => ext == Some("erb"),
            Self::DataYaml => matches!(ext, Some("yaml" | "yml")),
            Self::DataJson => ext == Some("json"),
            Self::DependencyDescriptor => path
                .file_name()
                .and_then(OsStr::to_str)
                .is_some_and(|name| DEPENDENCY_DESCRIPTOR.is_match(name)),
            Self::Unrecognized => true,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of [`classify`]: one file list per category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    buckets: [Vec<PathBuf>; Category::ALL.len()],
}

impl Classification {
    #[must_use]
    pub fn files(&self, category: Category) -> &[PathBuf] {
        &self.buckets[category.index()]
    }

    #[must_use]
    pub fn unrecognized(&self) -> &[PathBuf] {
        self.files(Category::Unrecognized)
    }

    /// Non-empty checked categories in dispatch order.
    pub fn checked(&self) -> impl Iterator<Item = (Category, &[PathBuf])> {
        Category::CHECKED
            .into_iter()
            .map(|c| (c, self.files(c)))
            .filter(|(_, files)| !files.is_empty())
    }

    /// Total number of classified files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }
}

/// Partition `files` into categories.
#[must_use]
pub fn classify(files: Vec<PathBuf>) -> Classification {
    let mut classification = Classification::default();
    let mut remaining = files;

    for category in Category::CHECKED {
        let (matched, rest): (Vec<_>, Vec<_>) =
            remaining.into_iter().partition(|f| category.matches(f));
        if !matched.is_empty() {
            debug!(%category, count = matched.len(), "classified files");
        }
        classification.buckets[category.index()] = matched;
        remaining = rest;
    }

    if !remaining.is_empty() {
        debug!(count = remaining.len(), "unrecognized files");
    }
    classification.buckets[Category::Unrecognized.index()] = remaining;
    classification
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
