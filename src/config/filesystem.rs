//! Where configuration files come from. Swapped for an in-memory map in tests.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

pub trait FileSystem {
    /// Contents of `path`, or `None` when there is no such file.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn read_config(&self, path: &Path) -> io::Result<Option<String>>;

    /// Directory searched for `.puppet-check.toml`.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user configuration directory (`~/.config/puppet-check` on Linux).
    fn user_config_dir(&self) -> Option<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_config(&self, path: &Path) -> io::Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "puppet-check")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
