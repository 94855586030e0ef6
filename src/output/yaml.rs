use crate::error::Result;
use crate::results::ResultSet;

use super::{OutputFormatter, StructuredReport};

pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, results: &ResultSet) -> Result<String> {
        Ok(serde_yaml::to_string(&StructuredReport::from(results))?)
    }
}

#[cfg(test)]
#[path = "yaml_tests.rs"]
mod tests;
