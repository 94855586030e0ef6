mod json;
mod progress;
mod report;
mod text;
mod yaml;

pub use json::JsonFormatter;
pub use progress::CheckProgress;
pub use report::StructuredReport;
pub use text::{ColorMode, TextFormatter};
pub use yaml::YamlFormatter;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::results::ResultSet;

/// Trait for rendering a run's results.
pub trait OutputFormatter {
    /// Format the results into a string.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    fn format(&self, results: &ResultSet) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl OutputFormat {
    #[must_use]
    pub const fn is_structured(self) -> bool {
        !matches!(self, Self::Text)
    }

    /// Formatter for this format. `color` only affects text output.
    #[must_use]
    pub fn formatter(self, color: ColorMode) -> Box<dyn OutputFormatter + Send + Sync> {
        match self {
            Self::Text => Box::new(TextFormatter::new(color)),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
