//! In-process checks for YAML and JSON data files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use super::Checker;
use crate::config::Options;
use crate::results::Verdict;

/// Module metadata file that gets structural checks on top of parsing.
pub const METADATA_FILE_NAME: &str = "metadata.json";

const METADATA_REQUIRED_KEYS: [&str; 6] = [
    "name",
    "version",
    "author",
    "summary",
    "source",
    "dependencies",
];

fn read(path: &Path) -> Result<String, Verdict> {
    fs::read_to_string(path).map_err(|e| Verdict::Error(format!("could not read file: {e}")))
}

fn verdict(errors: Vec<String>, warnings: Vec<String>) -> Verdict {
    if !errors.is_empty() {
        Verdict::Error(errors.join("\n"))
    } else if !warnings.is_empty() {
        Verdict::Warning(warnings.join("\n"))
    } else {
        Verdict::Clean
    }
}

/// Parses YAML (hieradata and friends); with style checking, keys left with
/// no value are reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlChecker;

impl Checker for YamlChecker {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn check_file(&self, path: &Path, options: &Options) -> Verdict {
        let content = match read(path) {
            Ok(content) => content,
            Err(verdict) => return verdict,
        };
        if content.trim().is_empty() {
            return Verdict::Clean;
        }
        // A file may hold several `---` separated documents.
        let documents: Vec<YamlValue> = match serde_yaml::Deserializer::from_str(&content)
            .map(YamlValue::deserialize)
            .collect()
        {
            Ok(documents) => documents,
            Err(e) => return Verdict::Error(e.to_string()),
        };

        let mut warnings = Vec::new();
        if options.style_check {
            let mut keys = Vec::new();
            for document in &documents {
                collect_null_keys(document, "", &mut keys);
            }
            if !keys.is_empty() {
                warnings.push(format!("keys with no value: {}", keys.join(", ")));
            }
        }
        verdict(Vec::new(), warnings)
    }
}

/// Dotted paths of mapping keys whose value is null, in document order.
fn collect_null_keys(value: &YamlValue, prefix: &str, out: &mut Vec<String>) {
    let YamlValue::Mapping(mapping) = value else {
        return;
    };
    for (key, value) in mapping {
        let key = match key {
            YamlValue::String(s) => s.clone(),
            other => serde_yaml::to_string(other)
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        };
        let full = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            YamlValue::Null => out.push(full),
            YamlValue::Mapping(_) => collect_null_keys(value, &full, out),
            _ => {}
        }
    }
}

/// Parses JSON; `metadata.json` additionally gets its required fields and
/// dependency list checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonChecker;

impl Checker for JsonChecker {
    fn name(&self) -> &'static str {
        "json"
    }

    fn check_file(&self, path: &Path, options: &Options) -> Verdict {
        let content = match read(path) {
            Ok(content) => content,
            Err(verdict) => return verdict,
        };
        let document: JsonValue = match serde_json::from_str(&content) {
            Ok(document) => document,
            Err(e) => return Verdict::Error(e.to_string()),
        };

        let is_metadata = path
            .file_name()
            .is_some_and(|name| name == METADATA_FILE_NAME);
        if !is_metadata {
            return Verdict::Clean;
        }

        let errors = metadata_errors(&document);
        let mut warnings = Vec::new();
        if options.style_check && document.get("license").is_none() {
            warnings.push("license field is missing".to_string());
        }
        verdict(errors, warnings)
    }
}

fn metadata_errors(document: &JsonValue) -> Vec<String> {
    let Some(object) = document.as_object() else {
        return vec!["metadata must be a JSON object".to_string()];
    };

    let mut errors: Vec<String> = METADATA_REQUIRED_KEYS
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| format!("required field `{key}` is missing"))
        .collect();

    if let Some(dependencies) = object.get("dependencies") {
        match dependencies.as_array() {
            Some(list) => errors.extend(dependency_errors(list)),
            None => errors.push("`dependencies` must be an array".to_string()),
        }
    }
    errors
}

fn dependency_errors(dependencies: &[JsonValue]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();
    for (i, dependency) in dependencies.iter().enumerate() {
        match dependency.get("name").and_then(JsonValue::as_str) {
            Some(name) => {
                if !names.insert(name) {
                    errors.push(format!("duplicate dependency `{name}`"));
                }
            }
            None => errors.push(format!("dependencies[{i}] has no name")),
        }
    }
    errors
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
