//! Integration tests for trust, untrust, trusted and status.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_status_untrusted_exits_1() {
    let env = TestEnv::new();
    let app = env.create_dir("app");

    env.command()
        .arg("status")
        .arg(&app)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("not trusted (not-trusted)"));
}

#[test]
fn test_trust_covers_subdirectories() {
    let env = TestEnv::new();
    let app = env.create_dir("app");
    let deep = env.create_dir("app/src/bin");

    env.command()
        .arg("trust")
        .arg(&app)
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Trusted {}", app.display())));

    env.command()
        .arg("status")
        .arg(&deep)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("via {}", app.display())));
}

#[test]
fn test_trust_missing_directory_fails() {
    let env = TestEnv::new();
    env.command()
        .arg("trust")
        .arg(env.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_replaced_directory_needs_retrust() {
    let env = TestEnv::new();
    let app = env.create_dir("app");
    env.trust(&app);

    std::fs::rename(&app, env.path().join("app-old")).unwrap();
    std::fs::create_dir(&app).unwrap();

    env.command()
        .arg("status")
        .arg(&app)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("inode-mismatch"));

    env.trust(&app);
    env.command().arg("status").arg(&app).assert().success();
}

#[test]
fn test_untrust_and_trusted_listing() {
    let env = TestEnv::new();
    let alpha = env.create_dir("alpha");
    let beta = env.create_dir("beta");
    env.trust(&beta);
    env.trust(&alpha);

    let output = env.command().args(["trusted", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let paths: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["path"].as_str().unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![alpha.to_str().unwrap(), beta.to_str().unwrap()]
    );

    env.command().arg("untrust").arg(&alpha).assert().success();
    env.command()
        .arg("untrust")
        .arg(&alpha)
        .assert()
        .failure()
        .code(1);

    env.command()
        .args(["trusted", "--show-full-paths"])
        .assert()
        .success()
        .stdout(predicate::str::contains(beta.to_str().unwrap()))
        .stdout(predicate::str::contains(alpha.to_str().unwrap()).not());
}
