use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::{EXIT_CHECK_FAILED, EXIT_SUCCESS};

/// Marker that starts every rendered diagnostic, so reports can be scanned
/// without knowing each checker's own output format.
pub const DIAGNOSTIC_PREFIX: &str = "-- ";

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Clean,
    Warning(String),
    Error(String),
}

/// A file plus the checker message that put it in its bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub path: PathBuf,
    pub message: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{DIAGNOSTIC_PREFIX}{}", self.path.display())?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl RunStatus {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Success => EXIT_SUCCESS,
            Self::Failure => EXIT_CHECK_FAILED,
        }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Accumulated outcome of one run: errors, warnings, clean and ignored files.
///
/// A path lands in at most one of the four buckets. The first verdict recorded
/// for a path wins; later ones for the same path are dropped.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
    clean: Vec<Diagnostic>,
    ignored: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl ResultSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checker verdict for `path`.
    ///
    /// Returns `false` if the path already had an outcome and the verdict was
    /// dropped.
    pub fn record(&mut self, path: &Path, verdict: Verdict) -> bool {
        if !self.seen.insert(path.to_path_buf()) {
            return false;
        }
        let path = path.to_path_buf();
        match verdict {
            Verdict::Clean => self.clean.push(Diagnostic {
                path,
                message: None,
            }),
            Verdict::Warning(message) => self.warnings.push(Diagnostic {
                path,
                message: Some(message),
            }),
            Verdict::Error(message) => self.errors.push(Diagnostic {
                path,
                message: Some(message),
            }),
        }
        true
    }

    /// Record a file that no checker handles.
    pub fn ignore(&mut self, path: &Path) -> bool {
        if !self.seen.insert(path.to_path_buf()) {
            return false;
        }
        self.ignored.push(path.to_path_buf());
        true
    }

    /// Append `other` after the entries already present, keeping the
    /// one-bucket-per-path rule.
    pub fn merge(&mut self, other: Self) {
        for d in other.errors {
            let message = d.message.unwrap_or_default();
            self.record(&d.path, Verdict::Error(message));
        }
        for d in other.warnings {
            let message = d.message.unwrap_or_default();
            self.record(&d.path, Verdict::Warning(message));
        }
        for d in other.clean {
            self.record(&d.path, Verdict::Clean);
        }
        for path in other.ignored {
            self.ignore(&path);
        }
    }

    #[must_use]
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    #[must_use]
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    #[must_use]
    pub fn clean(&self) -> &[Diagnostic] {
        &self.clean
    }

    #[must_use]
    pub fn ignored(&self) -> &[PathBuf] {
        &self.ignored
    }

    /// Number of files with an outcome, ignored ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    #[must_use]
    pub fn status(&self, fail_on_warning: bool) -> RunStatus {
        if !self.errors.is_empty() || (fail_on_warning && !self.warnings.is_empty()) {
            RunStatus::Failure
        } else {
            RunStatus::Success
        }
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod tests;
