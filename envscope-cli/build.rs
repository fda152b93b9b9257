//! Build script for envscope-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("envscope")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Directory-scoped secrets with trust-gated shell loading")
        .long_about(
            "Attach secrets to directories, inherit them in subdirectories and load \
             them into the shell only inside trusted directories",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ENVSCOPE_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the database busy timeout (in milliseconds)")
                .value_name("MILLIS")
                .global(true),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("set")
                .about("Store a secret for a directory")
                .long_about("Store a secret at a directory scope, read from stdin when no value is given"),
            Command::new("get")
                .about("Print the secret visible from a directory")
                .long_about("Resolve a secret through the directory's ancestors; deeper scopes win"),
            Command::new("list")
                .about("List secrets visible from a directory")
                .long_about("List visible secrets, or every scope and its entries with --all"),
            Command::new("remove")
                .about("Delete a secret or block from exactly one directory")
                .long_about("Delete the entry stored at exactly this directory, exposing any ancestor value"),
            Command::new("block")
                .about("Block an inherited secret at and below a directory")
                .long_about("Store a tombstone that hides an inherited secret in this subtree"),
            Command::new("export")
                .about("Print the visible secrets as export statements, dotenv or JSON")
                .long_about("Render the resolved secrets for a shell, a .env file or JSON"),
            Command::new("trust")
                .about("Trust a directory and everything below it")
                .long_about("Allow the shell hook to load secrets in this directory and its subdirectories"),
            Command::new("untrust")
                .about("Revoke trust for a directory")
                .long_about("Remove the trust grant recorded for exactly this directory"),
            Command::new("trusted")
                .about("List trusted directories")
                .long_about("Display every trust grant with the time it was recorded"),
            Command::new("status")
                .about("Report whether a directory is trusted")
                .long_about("Exit with status 1 when the directory is not covered by a valid trust grant"),
            Command::new("hook")
                .about("Print the shell commands for entering a directory")
                .long_about("Diff the directory's secrets against what is loaded and print unsets and exports"),
            Command::new("hook-reset")
                .about("Forget which secrets the hook has loaded")
                .long_about("Delete the hook state so the next hook run starts fresh"),
            Command::new("show-data-dir")
                .about("Show the resolved data directory path")
                .long_about("Display the path to the envscope data directory"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("envscope.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
