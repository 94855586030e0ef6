//! Catalog compilation run after a clean check.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::checker::{SystemToolRunner, ToolCommand, ToolRunner};

pub const OCTOCATALOG_DIFF: &str = "octocatalog-diff";
pub const OCTOCATALOG_CONFIG_ENV: &str = "OCTOCATALOG_DIFF_CONFIG_FILE";

/// Compiles catalogs for reference nodes.
pub trait SmokeCheck: Send + Sync {
    /// # Errors
    /// Returns the cause of the first node that fails to compile.
    fn smoke(&self, nodes: &[String], config: &Path) -> Result<(), String>;
}

/// Smoke check backed by `octocatalog-diff --catalog-only`.
pub struct OctocatalogDiff {
    program: PathBuf,
    runner: Arc<dyn ToolRunner>,
}

impl OctocatalogDiff {
    #[must_use]
    pub fn new(program: impl Into<PathBuf>, runner: Arc<dyn ToolRunner>) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Locate `octocatalog-diff` on `PATH`. `None` when it is not installed.
    #[must_use]
    pub fn detect() -> Option<Self> {
        match which::which(OCTOCATALOG_DIFF) {
            Ok(program) => {
                debug!(path = %program.display(), "found smoke check tool");
                Some(Self::new(program, Arc::new(SystemToolRunner)))
            }
            Err(e) => {
                debug!(error = %e, "smoke check tool not found");
                None
            }
        }
    }

    fn command(&self, node: &str, config: &Path) -> ToolCommand {
        ToolCommand::new(self.program.to_string_lossy())
            .args(["--catalog-only", "-n", node])
            .env(OCTOCATALOG_CONFIG_ENV, config.to_string_lossy())
    }
}

impl SmokeCheck for OctocatalogDiff {
    fn smoke(&self, nodes: &[String], config: &Path) -> Result<(), String> {
        for node in nodes {
            info!(node = %node, "compiling catalog");
            let command = self.command(node, config);
            let output = self
                .runner
                .run(&command)
                .map_err(|e| format!("could not run `{}`: {e}", command.program))?;
            if !output.success {
                let cause = output.combined();
                return Err(if cause.is_empty() {
                    format!("catalog compilation failed for node {node}")
                } else {
                    cause
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "smoke_tests.rs"]
mod tests;
