#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the puppet-check binary.
#[macro_export]
macro_rules! puppet_check {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("puppet-check"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.puppet-check.toml`.
    pub fn create_config(&self, content: &str) {
        self.create_file(".puppet-check.toml", content);
    }

    /// Lays out a small module whose data files are all valid and need no
    /// external tools.
    pub fn create_clean_module(&self) {
        self.create_file("metadata.json", VALID_METADATA);
        self.create_file("data/common.yaml", "---\nntp::servers:\n  - 0.pool.ntp.org\n");
        self.create_file("README.md", "# ntp\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

pub const VALID_METADATA: &str = r#"{
  "name": "acme-ntp",
  "version": "1.0.0",
  "author": "acme",
  "summary": "Manages ntp",
  "license": "Apache-2.0",
  "source": "https://example.com/acme-ntp",
  "dependencies": []
}"#;

/// Hieradata with a key left empty; only a style warning.
pub const YAML_WITH_NULL: &str = "---\nntp::servers:\nntp::enabled: true\n";

pub const BROKEN_JSON: &str = "{\"name\": ";
