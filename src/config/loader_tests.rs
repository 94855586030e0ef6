use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
    unreadable: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/puppet-check")),
            unreadable: None,
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable = Some(path.into());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_config(&self, path: &Path) -> std::io::Result<Option<String>> {
        if self.unreadable.as_deref() == Some(path) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        Ok(self.files.get(path).cloned())
    }

    fn working_dir(&self) -> Option<PathBuf> {
        Some(self.current_dir.clone())
    }

    fn user_config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new().with_file("/project/.puppet-check.toml", "style_check = true");
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert!(config.options.style_check);
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/puppet-check/config.toml",
        "fail_on_warning = true",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert!(config.options.fail_on_warning);
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.puppet-check.toml", "future_parser = true")
        .with_file(
            "/home/user/.config/puppet-check/config.toml",
            "fail_on_warning = true",
        );
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();

    assert!(config.options.future_parser);
    assert!(!config.options.fail_on_warning);
}

#[test]
fn missing_user_config_dir_is_fine() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);

    assert!(loader.load().is_ok());
}

#[test]
fn load_from_path_reads_explicit_file() {
    let fs = MockFileSystem::new().with_file("/ci/check.toml", "[smoke]\nenabled = true\n");
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load_from_path(Path::new("/ci/check.toml")).unwrap();

    assert!(config.smoke.enabled);
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();

    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().contains("/nope.toml"));
}

#[test]
fn invalid_toml_is_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.puppet-check.toml", "style_check = ");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();

    assert_eq!(err.error_type(), "TomlParse");
}

#[test]
fn semantic_errors_are_reported() {
    let fs = MockFileSystem::new().with_file(
        "/project/.puppet-check.toml",
        "[smoke]\nenabled = true\nnodes = []\n",
    );
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();

    assert_eq!(err.error_type(), "Config");
}

#[test]
fn unreadable_config_is_io_error() {
    let fs = MockFileSystem::new().with_unreadable("/project/.puppet-check.toml");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();

    assert_eq!(err.error_type(), "Io");
}
