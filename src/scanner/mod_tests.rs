use std::path::Path;

use super::*;
use tempfile::TempDir;

struct AcceptAllFilter;

impl FileFilter for AcceptAllFilter {
    fn should_include(&self, _path: &Path) -> bool {
        true
    }
}

#[test]
fn directory_scanner_is_a_file_scanner() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("init.pp"), "class foo {}").unwrap();

    let scanner: &dyn FileScanner = &DirectoryScanner::new(AcceptAllFilter);
    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 1);
}

#[test]
fn resolve_paths_uses_fixtures_filter() {
    let temp_dir = TempDir::new().unwrap();
    let fixtures = temp_dir.path().join("spec/fixtures/modules");
    std::fs::create_dir_all(&fixtures).unwrap();
    std::fs::write(fixtures.join("init.pp"), "").unwrap();
    std::fs::write(temp_dir.path().join("site.pp"), "").unwrap();

    let files = resolve_paths(&[temp_dir.path().to_path_buf()]).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("site.pp"));
}
