use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use tempfile::TempDir;

static CLI_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn envscope(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("envscope").expect("failed to locate envscope binary");
    cmd.arg("--data-dir").arg(data_dir.path().join("data"));
    cmd.stdout(Stdio::null()).stderr(Stdio::null());
    cmd
}

fn run(mut cmd: Command, what: &str) {
    let status = cmd.status().expect("failed to execute envscope");
    assert!(status.success(), "envscope {what} failed");
}

fn set_secret(data_dir: &TempDir, key: &str, path: &Path) {
    let mut cmd = envscope(data_dir);
    cmd.args(["--quiet", "set", key, "value", "--path"]).arg(path);
    run(cmd, "set");
}

/// A tree `d0/d1/.../d9` with secrets at every level and the root trusted.
fn prepare_tree(data_dir: &TempDir) -> std::path::PathBuf {
    let mut path = data_dir.path().join("tree");
    std::fs::create_dir_all(&path).expect("failed to create bench tree");

    let mut cmd = envscope(data_dir);
    cmd.args(["--quiet", "trust"]).arg(&path);
    run(cmd, "trust");

    for level in 0..10 {
        path = path.join(format!("d{level}"));
        std::fs::create_dir_all(&path).expect("failed to create bench path");
        for key in 0..5 {
            set_secret(data_dir, &format!("KEY_{level}_{key}"), &path);
        }
    }
    path
}

fn bench_cli_startup(c: &mut Criterion) {
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let mut cmd =
                Command::cargo_bin("envscope").expect("failed to locate envscope binary");
            let output = cmd.arg("--version").output().expect("failed to run envscope");
            black_box(output);
        });
    });
}

fn bench_cli_set(c: &mut Criterion) {
    let data_dir = TempDir::new().expect("failed to create temp dir");

    c.bench_function("cli_set", |b| {
        b.iter(|| {
            let counter = CLI_COUNTER.fetch_add(1, Ordering::Relaxed);
            let path = data_dir.path().join(format!("cli-set-{counter}"));
            set_secret(&data_dir, "BENCH_KEY", &path);
        });
    });
}

fn bench_cli_hook(c: &mut Criterion) {
    c.bench_function("cli_hook_deep_tree", |b| {
        b.iter_batched(
            || {
                let data_dir = TempDir::new().expect("failed to create temp dir");
                let leaf = prepare_tree(&data_dir);
                (data_dir, leaf)
            },
            |(data_dir, leaf)| {
                let mut cmd = envscope(&data_dir);
                cmd.args(["hook", "--shell", "bash", "--path"]).arg(&leaf);
                let status = cmd.status().expect("failed to execute envscope hook");
                black_box(status.success());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(cli_benches, bench_cli_startup, bench_cli_set, bench_cli_hook);
criterion_main!(cli_benches);
