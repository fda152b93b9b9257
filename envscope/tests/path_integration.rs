//! Path handling through the vault, including a non-native path style.

mod common;

use std::path::Path;
use std::time::Duration;

use common::TestVault;
use envscope::{ConflictPolicy, PathStyle, Settings, Vault};
use tempfile::tempdir;

fn windows_vault(data: &Path) -> Vault {
    let settings = Settings {
        data_dir: data.to_path_buf(),
        working_dir: "C:\\Users\\me".into(),
        path_style: PathStyle::Windows,
        follow_symlinks: false,
        busy_timeout: Duration::from_millis(1000),
        conflict_policy: ConflictPolicy::SkipOnce,
        color: false,
    };
    Vault::open(settings).unwrap()
}

#[test]
#[cfg(not(windows))]
fn test_windows_style_is_case_insensitive() {
    let temp = tempdir().unwrap();
    let mut vault = windows_vault(temp.path());

    vault
        .set("TOKEN", "t", Path::new("C:\\Users\\Me\\Project"))
        .unwrap();
    let found = vault
        .get("TOKEN", Path::new("c:\\users\\me\\project\\src"))
        .unwrap()
        .unwrap();
    assert_eq!(found.value, "t");
    assert_eq!(found.source_path.as_str(), "C:\\Users\\Me\\Project");
}

#[test]
#[cfg(not(windows))]
fn test_windows_style_relative_and_separators() {
    let temp = tempdir().unwrap();
    let mut vault = windows_vault(temp.path());

    let scope = vault.set("K", "v", Path::new("repo/./a/../b")).unwrap();
    assert_eq!(scope.as_str(), "C:\\Users\\me\\repo\\b");
    assert!(vault
        .get("K", Path::new("C:/Users/me/repo/b/c"))
        .unwrap()
        .is_some());
    assert!(vault.get("K", Path::new("C:\\Users\\me\\repo\\bc")).unwrap().is_none());
}

#[test]
fn test_dot_segments_collapse() {
    let mut t = TestVault::new();
    let a = t.dir("a");
    t.dir("b");

    let scope = t.vault.set("K", "v", &t.path("b/../a/./")).unwrap();
    assert_eq!(scope.as_str(), t.canonical(&a));
}

#[test]
#[cfg(unix)]
fn test_symlinks_kept_when_not_following() {
    let temp = tempdir().unwrap();
    let root = std::fs::canonicalize(temp.path()).unwrap();
    let real = root.join("real");
    let link = root.join("link");
    std::fs::create_dir(&real).unwrap();
    std::os::unix::fs::symlink(&real, &link).unwrap();

    let settings = Settings {
        data_dir: root.join("data"),
        working_dir: root.clone(),
        path_style: PathStyle::native(),
        follow_symlinks: false,
        busy_timeout: Duration::from_millis(1000),
        conflict_policy: ConflictPolicy::SkipOnce,
        color: false,
    };
    let mut vault = Vault::open(settings).unwrap();

    let scope = vault.set("K", "v", &link).unwrap();
    assert_eq!(scope.as_path(), link.as_path());
    assert!(vault.get("K", &real).unwrap().is_none());
}
