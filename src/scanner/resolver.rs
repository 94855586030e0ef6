use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::debug;

use super::{DirectoryScanner, FileFilter, FileScanner, FixturesFilter};
use crate::error::{PuppetCheckError, Result};

/// Expands input paths into the deduplicated list of regular files to check.
pub struct PathResolver<F: FileFilter> {
    scanner: DirectoryScanner<F>,
    filter: F,
}

impl Default for PathResolver<FixturesFilter> {
    fn default() -> Self {
        Self::new(FixturesFilter)
    }
}

impl<F: FileFilter + Copy> PathResolver<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            scanner: DirectoryScanner::new(filter),
            filter,
        }
    }
}

impl<F: FileFilter> PathResolver<F> {
    /// Resolve `paths` into files.
    ///
    /// Directories are walked recursively, regular files are taken as-is and
    /// anything else (missing paths, sockets, ...) is skipped without error.
    ///
    /// # Errors
    /// Returns [`PuppetCheckError::NoFilesFound`] when nothing is left after
    /// filtering. The message lists the inputs exactly as supplied.
    pub fn resolve(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let unique_inputs: IndexSet<&PathBuf> = paths.iter().collect();
        let mut files: IndexSet<PathBuf> = IndexSet::new();

        for path in unique_inputs {
            if path.is_dir() {
                for file in self.scanner.scan(path)? {
                    files.insert(normalize_separators(&file));
                }
            } else if path.is_file() {
                if self.filter.should_include(path) {
                    files.insert(normalize_separators(path));
                }
            } else {
                debug!(path = %path.display(), "skipping path that is neither a file nor a directory");
            }
        }

        if files.is_empty() {
            return Err(PuppetCheckError::NoFilesFound {
                paths: join_inputs(paths),
            });
        }

        debug!(count = files.len(), "resolved input paths");
        Ok(files.into_iter().collect())
    }
}

/// Resolve with the default fixtures exclusion.
///
/// # Errors
/// See [`PathResolver::resolve`].
pub fn resolve_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    PathResolver::default().resolve(paths)
}

/// Collapse runs of `/` into a single separator (`a//b///c` becomes `a/b/c`).
/// Non UTF-8 paths are returned unchanged.
#[must_use]
pub fn normalize_separators(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if !s.contains("//") {
        return path.to_path_buf();
    }

    let mut out = String::with_capacity(s.len());
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }
    PathBuf::from(out)
}

fn join_inputs(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
