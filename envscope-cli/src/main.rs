//! Main entry point for the envscope CLI.
//!
//! Secrets are attached to directories and inherited by subdirectories:
//! - `set` / `get` / `list` / `remove` / `block`: manage scoped secrets
//! - `trust` / `untrust` / `trusted` / `status`: manage trusted directories
//! - `hook`: print the shell commands for the current directory

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = envscope::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        no_color: cli.no_color,
    };

    let result = match cli.command {
        cli::Command::Set(cmd) => cmd.execute(&global),
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Remove(cmd) => cmd.execute(&global),
        cli::Command::Block(cmd) => cmd.execute(&global),
        cli::Command::Export(cmd) => cmd.execute(&global),
        cli::Command::Trust(cmd) => cmd.execute(&global),
        cli::Command::Untrust(cmd) => cmd.execute(&global),
        cli::Command::Trusted(cmd) => cmd.execute(&global),
        cli::Command::Status(cmd) => cmd.execute(&global),
        cli::Command::Hook(cmd) => cmd.execute(&global),
        cli::Command::HookReset(cmd) => cmd.execute(&global),
        cli::Command::ShowDataDir(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
