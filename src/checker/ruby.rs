use std::path::Path;
use std::sync::{Arc, Once};

use super::puppet::failure_message;
use super::{Checker, ToolCommand, ToolRunner, lint_findings, path_arg, run_tool};
use crate::config::Options;
use crate::results::Verdict;

const RUBY: &str = "ruby";
const RUBOCOP: &str = "rubocop";
const ERB: &str = "erb";

/// `ruby -c` syntax check, reading the source from stdin when `source` is set.
fn ruby_syntax(runner: &dyn ToolRunner, path: &Path, source: Option<Vec<u8>>) -> Option<String> {
    let command = match source {
        Some(source) => ToolCommand::new(RUBY).arg("-c").stdin(source),
        None => ToolCommand::new(RUBY).arg("-c").arg(path_arg(path)),
    };
    match run_tool(runner, &command) {
        Ok(output) if output.success => None,
        Ok(output) => Some(failure_message(&output.combined(), RUBY)),
        Err(message) => Some(message),
    }
}

/// Checks Ruby scripts and dependency descriptors (`Gemfile`, `Rakefile`,
/// `Puppetfile`, `Modulefile`), which are all plain Ruby.
pub struct RubyChecker {
    runner: Arc<dyn ToolRunner>,
    lint_unavailable: Once,
}

impl RubyChecker {
    #[must_use]
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            runner,
            lint_unavailable: Once::new(),
        }
    }
}

impl Checker for RubyChecker {
    fn name(&self) -> &'static str {
        "ruby"
    }

    fn check_file(&self, path: &Path, options: &Options) -> Verdict {
        if let Some(message) = ruby_syntax(&*self.runner, path, None) {
            return Verdict::Error(message);
        }
        if !options.style_check {
            return Verdict::Clean;
        }

        let lint = ToolCommand::new(RUBOCOP)
            .args(["--format", "emacs"])
            .args(&options.style_linter_args)
            .arg(path_arg(path));
        lint_findings(&*self.runner, &lint, &self.lint_unavailable)
            .map_or(Verdict::Clean, Verdict::Warning)
    }
}

/// Checks ERB templates: `erb` extracts the Ruby code, which `ruby -c` then
/// validates from stdin.
pub struct ErbChecker {
    runner: Arc<dyn ToolRunner>,
}

impl ErbChecker {
    #[must_use]
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self { runner }
    }
}

impl Checker for ErbChecker {
    fn name(&self) -> &'static str {
        "erb"
    }

    fn check_file(&self, path: &Path, _options: &Options) -> Verdict {
        let extract = ToolCommand::new(ERB)
            .args(["-P", "-x", "-T", "-"])
            .arg(path_arg(path));
        let source = match run_tool(&*self.runner, &extract) {
            Ok(output) if output.success => output.stdout,
            Ok(output) => return Verdict::Error(failure_message(&output.combined(), ERB)),
            Err(message) => return Verdict::Error(message),
        };

        ruby_syntax(&*self.runner, path, Some(source.into_bytes()))
            .map_or(Verdict::Clean, Verdict::Error)
    }
}

#[cfg(test)]
#[path = "ruby_tests.rs"]
mod tests;
