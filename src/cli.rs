use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;
use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "puppet-check")]
#[command(
    author,
    version,
    about = "Syntax and style checks for Puppet manifests, templates, Ruby and data files"
)]
#[command(long_about = "Classifies the files of a Puppet repository and runs the \
    matching syntax and style checker for each kind.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Configuration or usage error (including no files found)\n  \
    2 - Errors found, warnings with --fail-on-warning, or a failed smoke check")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Run style linters on files that pass syntax validation
    #[arg(short, long)]
    pub style: bool,

    /// Fail the run when any warning is reported
    #[arg(long)]
    pub fail_on_warning: bool,

    /// Validate manifests with the future parser
    #[arg(long)]
    pub future: bool,

    /// Extra puppet-lint arguments, comma separated (e.g. --no-80chars-check)
    #[arg(long, value_name = "ARGS", value_delimiter = ',', allow_hyphen_values = true)]
    pub puppet_lint: Option<Vec<String>>,

    /// Extra rubocop arguments, comma separated (e.g. --except,Style/Documentation)
    #[arg(long, value_name = "ARGS", value_delimiter = ',', allow_hyphen_values = true)]
    pub rubocop: Option<Vec<String>>,

    /// Compile catalogs with octocatalog-diff after a clean check
    #[arg(long)]
    pub smoke: bool,

    /// Nodes to compile during the smoke check, comma separated
    #[arg(long, value_name = "NODES", value_delimiter = ',')]
    pub octonodes: Option<Vec<String>>,

    /// octocatalog-diff configuration file
    #[arg(long, value_name = "PATH")]
    pub octoconfig: Option<PathBuf>,

    /// Check categories concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Output format [possible values: text, json, yaml]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Layer the command line over `config`. Flags only switch features on;
    /// list arguments replace the configured lists.
    pub fn apply_overrides(&self, config: &mut Config) {
        let options = &mut config.options;
        options.style_check |= self.style;
        options.fail_on_warning |= self.fail_on_warning;
        options.future_parser |= self.future;
        if let Some(args) = &self.puppet_lint {
            options.linter_args.clone_from(args);
        }
        if let Some(args) = &self.rubocop {
            options.style_linter_args.clone_from(args);
        }

        config.parallel |= self.parallel;
        if let Some(format) = self.format {
            config.output_format = format;
        }

        config.smoke.enabled |= self.smoke;
        if let Some(nodes) = &self.octonodes {
            config.smoke.nodes.clone_from(nodes);
        }
        if let Some(path) = &self.octoconfig {
            config.smoke.config.clone_from(path);
        }
    }

    /// Log filter directive for the verbosity flags.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
