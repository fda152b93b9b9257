//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BlockCommand, CompletionsCommand, ExportCommand, GetCommand, HookCommand, HookResetCommand,
    ListCommand, RemoveCommand, SetCommand, ShowDataDirCommand, StatusCommand, TrustCommand,
    TrustedCommand, UntrustCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Directory-scoped secrets with trust-gated shell loading.
#[derive(Parser)]
#[command(name = "envscope")]
#[command(
    version,
    about = "Directory-scoped secrets with trust-gated shell loading",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ENVSCOPE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the database busy timeout (in milliseconds)
    #[arg(long, value_name = "MILLIS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Store a secret for a directory
    Set(SetCommand),

    /// Print the secret visible from a directory
    Get(GetCommand),

    /// List secrets visible from a directory
    List(ListCommand),

    /// Delete a secret or block from exactly one directory
    Remove(RemoveCommand),

    /// Block an inherited secret at and below a directory
    Block(BlockCommand),

    /// Print the visible secrets as export statements, dotenv or JSON
    Export(ExportCommand),

    /// Trust a directory and everything below it
    Trust(TrustCommand),

    /// Revoke trust for a directory
    Untrust(UntrustCommand),

    /// List trusted directories
    Trusted(TrustedCommand),

    /// Report whether a directory is trusted
    Status(StatusCommand),

    /// Print the shell commands for entering a directory
    Hook(HookCommand),

    /// Forget which secrets the hook has loaded
    HookReset(HookResetCommand),

    /// Show the resolved data directory path
    ShowDataDir(ShowDataDirCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
