use crate::error::Result;
use crate::results::ResultSet;

use super::{OutputFormatter, StructuredReport};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        let report = StructuredReport::from(results);
        let mut output = serde_json::to_string_pretty(&report)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
