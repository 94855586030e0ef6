use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PuppetCheckError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{Config, validate_config};

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    /// Returns an error if a config file exists but cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".puppet-check.toml";
pub const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.puppet-check.toml` in the current directory
/// 2. `config.toml` in the platform user config directory
///    (`~/.config/puppet-check/config.toml` on Linux)
/// 3. `Config::default()` if neither exists
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn parse_config(path: &Path, content: &str) -> Result<Config> {
        debug!(path = %path.display(), "loading configuration");
        let config: Config = toml::from_str(content)?;
        validate_config(&config)?;
        Ok(config)
    }

    fn candidates(&self) -> impl Iterator<Item = PathBuf> {
        let local = self.fs.working_dir().map(|dir| dir.join(LOCAL_CONFIG_NAME));
        let user = self
            .fs
            .user_config_dir()
            .map(|dir| dir.join(USER_CONFIG_NAME));
        local.into_iter().chain(user)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        for path in self.candidates() {
            if let Some(content) = self.fs.read_config(&path)? {
                return Self::parse_config(&path, &content);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content = self.fs.read_config(path)?.ok_or_else(|| {
            PuppetCheckError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            ))
        })?;
        Self::parse_config(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
