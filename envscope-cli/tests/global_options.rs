//! Tests for global options and configuration layering through the CLI.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_show_data_dir_flag() {
    let env = TestEnv::new();
    env.command()
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_show_data_dir_env() {
    let env = TestEnv::new();
    env.command_bare()
        .env("ENVSCOPE_DATA_DIR", &env.data_dir)
        .arg("show-data-dir")
        .assert()
        .success()
        .stdout(format!("{}\n", env.data_dir.display()));
}

#[test]
fn test_data_dirs_are_isolated() {
    let env = TestEnv::new();
    let app = env.create_dir("app");
    env.set("PROJ_ISOLATED", "v", &app);

    env.command_bare()
        .arg("--data-dir")
        .arg(env.path().join("elsewhere"))
        .args(["get", "PROJ_ISOLATED", "--path"])
        .arg(&app)
        .assert()
        .code(1);
}

#[test]
fn test_invalid_config_file_exits_7() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "unknown_field: true\n").unwrap();

    env.command()
        .args(["list"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_zero_busy_timeout_exits_7() {
    let env = TestEnv::new();
    env.command()
        .args(["--busy-timeout", "0", "list"])
        .assert()
        .failure()
        .code(7);
}

#[test]
#[cfg(unix)]
fn test_config_file_disables_symlink_following() {
    let env = TestEnv::new();
    let real = env.create_dir("real");
    let link = env.path().join("link");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.data_dir.join("config.yaml"), "follow_symlinks: false\n").unwrap();

    env.set("PROJ_LINKED", "v", &link);
    env.command()
        .args(["get", "PROJ_LINKED", "--path"])
        .arg(&real)
        .assert()
        .code(1);
    assert_eq!(env.get("PROJ_LINKED", &link), "v");
}
