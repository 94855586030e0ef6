use serde::Serialize;

use crate::results::ResultSet;

/// Document shared by the machine-readable formats. Empty buckets are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructuredReport {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub clean: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignored: Vec<String>,
}

impl From<&ResultSet> for StructuredReport {
    fn from(results: &ResultSet) -> Self {
        Self {
            errors: results.errors().iter().map(ToString::to_string).collect(),
            warnings: results.warnings().iter().map(ToString::to_string).collect(),
            clean: results.clean().iter().map(ToString::to_string).collect(),
            ignored: results
                .ignored()
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}
