mod data;
mod puppet;
mod ruby;
mod tool;

#[cfg(test)]
pub(crate) mod test_support;

pub use data::{JsonChecker, METADATA_FILE_NAME, YamlChecker};
pub use puppet::{EppChecker, ManifestChecker};
pub use ruby::{ErbChecker, RubyChecker};
pub use tool::{SystemToolRunner, ToolCommand, ToolOutput, ToolRunner};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};

use tracing::{debug, warn};

use crate::category::Category;
use crate::config::Options;
use crate::results::{ResultSet, Verdict};

/// Validates the files of one category.
pub trait Checker: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce the verdict for a single file.
    fn check_file(&self, path: &Path, options: &Options) -> Verdict;

    /// Check `files` and record exactly one verdict per file into `results`.
    fn check(&self, files: &[PathBuf], options: &Options, results: &mut ResultSet) {
        for file in files {
            let verdict = self.check_file(file, options);
            debug!(checker = self.name(), path = %file.display(), ?verdict, "checked file");
            results.record(file, verdict);
        }
    }
}

/// Fixed mapping from every checked [`Category`] to its checker.
pub struct CheckerTable {
    checkers: Vec<Box<dyn Checker>>,
}

impl CheckerTable {
    /// Build a table by asking `make` for each checked category, in dispatch
    /// order.
    pub fn from_fn(mut make: impl FnMut(Category) -> Box<dyn Checker>) -> Self {
        Self {
            checkers: Category::CHECKED.into_iter().map(&mut make).collect(),
        }
    }

    /// The standard checkers, running external tools through `runner`.
    #[must_use]
    pub fn builtin(runner: Arc<dyn ToolRunner>) -> Self {
        Self::from_fn(|category| -> Box<dyn Checker> {
            match category {
                Category::Manifest => Box::new(ManifestChecker::new(Arc::clone(&runner))),
                Category::Template => Box::new(EppChecker::new(Arc::clone(&runner))),
                Category::Script | Category::DependencyDescriptor => {
                    Box::new(RubyChecker::new(Arc::clone(&runner)))
                }
                Category::ScriptTemplate => Box::new(ErbChecker::new(Arc::clone(&runner))),
                Category::DataYaml => Box::new(YamlChecker),
                Category::DataJson => Box::new(JsonChecker),
                // Never handed to a checker.
                Category::Unrecognized => unreachable!("unrecognized files are not checked"),
            }
        })
    }

    /// Replace the checker of one category.
    ///
    /// # Panics
    /// Panics for [`Category::Unrecognized`], which has no checker.
    #[must_use]
    pub fn with(mut self, category: Category, checker: Box<dyn Checker>) -> Self {
        assert!(
            category != Category::Unrecognized,
            "unrecognized files are not checked"
        );
        self.checkers[category.index()] = checker;
        self
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&dyn Checker> {
        self.checkers.get(category.index()).map(|checker| &**checker)
    }
}

impl Default for CheckerTable {
    fn default() -> Self {
        Self::builtin(Arc::new(SystemToolRunner))
    }
}

/// Run `command`, turning a failure to start into a message naming the tool.
fn run_tool(runner: &dyn ToolRunner, command: &ToolCommand) -> Result<ToolOutput, String> {
    debug!(command = %command.display(), "running tool");
    runner
        .run(command)
        .map_err(|e| format!("could not run `{}`: {e}", command.program))
}

/// Outcome of a style linter: `Some(message)` when it reported anything.
///
/// Linters differ in whether offences change the exit status, so either a
/// failing status or any output counts as a finding. A linter that cannot be
/// started reports nothing; `unavailable` makes sure that is logged only once.
fn lint_findings(
    runner: &dyn ToolRunner,
    command: &ToolCommand,
    unavailable: &Once,
) -> Option<String> {
    let output = match run_tool(runner, command) {
        Ok(output) => output,
        Err(message) => {
            unavailable.call_once(|| warn!(%message, "style linter unavailable, skipping"));
            return None;
        }
    };
    let message = output.combined();
    if output.success && message.is_empty() {
        None
    } else if message.is_empty() {
        Some(format!("`{}` failed without output", command.program))
    } else {
        Some(message)
    }
}

/// Path argument for a tool.
fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
