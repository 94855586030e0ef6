use thiserror::Error;

#[derive(Error, Debug)]
pub enum PuppetCheckError {
    /// Every supplied path was missing, excluded, or empty. Carries the
    /// original input list, comma-joined.
    #[error("puppet-check: no files found in supplied paths {paths}.")]
    NoFilesFound { paths: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlSerialize(#[from] serde_yaml::Error),
}

impl PuppetCheckError {
    /// Short, stable name of the error kind (used in debug logs).
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::NoFilesFound { .. } => "NoFilesFound",
            Self::Config(_) => "Config",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::YamlSerialize(_) => "YamlSerialize",
        }
    }
}

pub type Result<T> = std::result::Result<T, PuppetCheckError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
