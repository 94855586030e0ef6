use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PuppetCheckError, Result};
use crate::output::OutputFormat;

pub const DEFAULT_SMOKE_NODE: &str = "localhost.localdomain";
pub const DEFAULT_SMOKE_CONFIG: &str = ".octocatalog-diff.cfg.rb";

/// Checking options handed to every checker.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Options {
    /// Run style linters on files that pass syntax validation.
    pub style_check: bool,

    /// Warnings fail the run.
    pub fail_on_warning: bool,

    /// Validate manifests with the future parser grammar.
    pub future_parser: bool,

    /// Extra flags for the manifest style linter (puppet-lint).
    pub linter_args: Vec<String>,

    /// Extra flags for the script style linter (rubocop).
    pub style_linter_args: Vec<String>,
}

/// Catalog compilation against reference nodes, run after a clean check.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SmokeConfig {
    pub enabled: bool,
    pub nodes: Vec<String>,
    pub config: PathBuf,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            nodes: vec![DEFAULT_SMOKE_NODE.to_string()],
            config: PathBuf::from(DEFAULT_SMOKE_CONFIG),
        }
    }
}

/// Contents of `.puppet-check.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub options: Options,

    /// Check categories concurrently.
    pub parallel: bool,

    pub output_format: OutputFormat,

    pub smoke: SmokeConfig,
}

/// Semantic checks that TOML deserialization cannot express.
///
/// # Errors
/// Returns [`PuppetCheckError::Config`] describing the first problem found.
pub fn validate_config(config: &Config) -> Result<()> {
    if config.smoke.enabled && config.smoke.nodes.is_empty() {
        return Err(PuppetCheckError::Config(
            "smoke.nodes cannot be empty when smoke checks are enabled".to_string(),
        ));
    }

    if let Some(i) = config.smoke.nodes.iter().position(|n| n.trim().is_empty()) {
        return Err(PuppetCheckError::Config(format!(
            "smoke.nodes[{i}] cannot be empty"
        )));
    }

    if config.smoke.config.as_os_str().is_empty() {
        return Err(PuppetCheckError::Config(
            "smoke.config cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
