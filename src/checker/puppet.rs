use std::path::Path;
use std::sync::{Arc, Once};

use super::{Checker, ToolCommand, ToolRunner, lint_findings, path_arg, run_tool};
use crate::config::Options;
use crate::results::Verdict;

const PUPPET: &str = "puppet";
const PUPPET_LINT: &str = "puppet-lint";

/// Validates manifests with `puppet parser validate` and, when style checking
/// is on, lints them with `puppet-lint`.
pub struct ManifestChecker {
    runner: Arc<dyn ToolRunner>,
    lint_unavailable: Once,
}

impl ManifestChecker {
    #[must_use]
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            runner,
            lint_unavailable: Once::new(),
        }
    }

    fn validate_command(path: &Path, options: &Options) -> ToolCommand {
        let mut command = ToolCommand::new(PUPPET).args(["parser", "validate"]);
        if options.future_parser {
            command = command.args(["--parser", "future"]);
        }
        command.arg(path_arg(path))
    }
}

impl Checker for ManifestChecker {
    fn name(&self) -> &'static str {
        "manifest"
    }

    fn check_file(&self, path: &Path, options: &Options) -> Verdict {
        let output = match run_tool(&*self.runner, &Self::validate_command(path, options)) {
            Ok(output) => output,
            Err(message) => return Verdict::Error(message),
        };
        if !output.success {
            return Verdict::Error(failure_message(&output.combined(), PUPPET));
        }

        // The parser reports deprecations on a passing file as `Warning:` lines.
        let mut findings: Vec<String> = output
            .combined()
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with("Warning:"))
            .map(str::to_string)
            .collect();

        if options.style_check {
            let lint = ToolCommand::new(PUPPET_LINT)
                .args(&options.linter_args)
                .arg(path_arg(path));
            findings.extend(lint_findings(&*self.runner, &lint, &self.lint_unavailable));
        }

        if findings.is_empty() {
            Verdict::Clean
        } else {
            Verdict::Warning(findings.join("\n"))
        }
    }
}

/// Validates embedded Puppet templates with `puppet epp validate`.
pub struct EppChecker {
    runner: Arc<dyn ToolRunner>,
}

impl EppChecker {
    #[must_use]
    pub fn new(runner: Arc<dyn ToolRunner>) -> Self {
        Self { runner }
    }
}

impl Checker for EppChecker {
    fn name(&self) -> &'static str {
        "template"
    }

    fn check_file(&self, path: &Path, _options: &Options) -> Verdict {
        let command = ToolCommand::new(PUPPET)
            .args(["epp", "validate"])
            .arg(path_arg(path));
        match run_tool(&*self.runner, &command) {
            Ok(output) if output.success => Verdict::Clean,
            Ok(output) => Verdict::Error(failure_message(&output.combined(), PUPPET)),
            Err(message) => Verdict::Error(message),
        }
    }
}

/// Message for a failed validation, falling back to a generic one when the
/// tool printed nothing.
pub(super) fn failure_message(output: &str, program: &str) -> String {
    if output.is_empty() {
        format!("`{program}` reported a failure without output")
    } else {
        output.to_string()
    }
}

#[cfg(test)]
#[path = "puppet_tests.rs"]
mod tests;
