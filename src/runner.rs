use std::io::Write;
use std::path::PathBuf;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::category::{Category, Classification, classify};
use crate::checker::CheckerTable;
use crate::config::Config;
use crate::error::Result;
use crate::output::{CheckProgress, ColorMode};
use crate::results::{ResultSet, RunStatus, Verdict};
use crate::scanner::PathResolver;
use crate::smoke::SmokeCheck;
use crate::{EXIT_CHECK_FAILED, EXIT_SUCCESS};

/// Heading written before the cause of a failed smoke check.
pub const SMOKE_ERROR_HEADING: &str = "There was a smoke check error:";

/// What a finished run reports back to the caller.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub status: RunStatus,
    pub results: ResultSet,
    /// Cause of a failed smoke check.
    ///
    /// Text reports already end with it; structured reports leave it to the
    /// caller.
    pub smoke_error: Option<String>,
}

/// Drives one check run: resolve, classify, dispatch, report, smoke.
pub struct Runner {
    config: Config,
    checkers: CheckerTable,
    smoke: Option<Box<dyn SmokeCheck>>,
    color: ColorMode,
    quiet: bool,
}

impl Runner {
    #[must_use]
    pub fn new(config: Config, checkers: CheckerTable) -> Self {
        Self {
            config,
            checkers,
            smoke: None,
            color: ColorMode::Auto,
            quiet: false,
        }
    }

    /// Smoke check to run after a successful check, if enabled in the config.
    #[must_use]
    pub fn with_smoke(mut self, smoke: Option<Box<dyn SmokeCheck>>) -> Self {
        self.smoke = smoke;
        self
    }

    #[must_use]
    pub const fn with_color(mut self, color: ColorMode) -> Self {
        self.color = color;
        self
    }

    /// Hide the progress bar.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Check `paths` and write the report to `out`.
    ///
    /// Every call starts from an empty [`ResultSet`].
    ///
    /// # Errors
    /// Returns [`crate::PuppetCheckError::NoFilesFound`] before anything is
    /// written when `paths` contain no files, and I/O or serialization errors
    /// from writing the report.
    pub fn run(&self, paths: &[PathBuf], out: &mut impl Write) -> Result<RunOutcome> {
        // 1. Resolve inputs to files
        let files = PathResolver::default().resolve(paths)?;
        info!(files = files.len(), "resolved input paths");

        // 2. Classify
        let classification = classify(files);

        // 3. Dispatch every non-empty category to its checker
        let mut results = self.check_all(&classification);

        // 4. Unrecognized files are reported, never checked
        for path in classification.unrecognized() {
            results.ignore(path);
        }

        // 5. Report
        let formatter = self.config.output_format.formatter(self.color);
        out.write_all(formatter.format(&results)?.as_bytes())?;

        // 6. Status and smoke check
        let status = results.status(self.config.options.fail_on_warning);
        let smoke_error = if status.is_success() {
            self.smoke_phase()
        } else {
            None
        };
        if let Some(cause) = &smoke_error
            && !self.config.output_format.is_structured()
        {
            writeln!(out, "{SMOKE_ERROR_HEADING}\n{cause}")?;
        }
        let exit_code = if status.is_success() && smoke_error.is_none() {
            EXIT_SUCCESS
        } else {
            EXIT_CHECK_FAILED
        };

        Ok(RunOutcome {
            exit_code,
            status,
            results,
            smoke_error,
        })
    }

    fn check_all(&self, classification: &Classification) -> ResultSet {
        let checked: Vec<(Category, &[PathBuf])> = classification.checked().collect();
        let total = checked.iter().map(|(_, files)| files.len() as u64).sum();
        let progress = CheckProgress::new(
            total,
            self.quiet || self.config.output_format.is_structured(),
        );

        let results = if self.config.parallel {
            // Partial sets are merged in dispatch order.
            let partials: Vec<ResultSet> = checked
                .into_par_iter()
                .map(|(category, files)| {
                    let mut partial = ResultSet::new();
                    self.check_category(category, files, &mut partial, &progress);
                    partial
                })
                .collect();
            partials.into_iter().fold(ResultSet::new(), |mut acc, partial| {
                acc.merge(partial);
                acc
            })
        } else {
            let mut results = ResultSet::new();
            for (category, files) in checked {
                self.check_category(category, files, &mut results, &progress);
            }
            results
        };

        progress.finish();
        results
    }

    fn check_category(
        &self,
        category: Category,
        files: &[PathBuf],
        results: &mut ResultSet,
        progress: &CheckProgress,
    ) {
        progress.set_category(category.name());
        debug!(%category, files = files.len(), "dispatching category");
        if let Some(checker) = self.checkers.get(category) {
            checker.check(files, &self.config.options, results);
        } else {
            warn!(%category, "no checker registered");
            for file in files {
                results.record(file, Verdict::Error(format!("no checker for {category} files")));
            }
        }
        progress.inc_by(files.len() as u64);
    }

    fn smoke_phase(&self) -> Option<String> {
        let settings = &self.config.smoke;
        if !settings.enabled {
            return None;
        }
        let Some(smoke) = &self.smoke else {
            debug!("smoke check enabled but no smoke check tool is available");
            return None;
        };

        smoke.smoke(&settings.nodes, &settings.config).err()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
