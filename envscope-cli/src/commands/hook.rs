//! Hook command implementation.
//!
//! This module implements the `hook` command, which the shell runs on every
//! directory change and evaluates. Commands go to stdout and the one-line
//! summary to stderr. The command always succeeds: a failing hook must not
//! break the prompt, so problems are reported as warnings.

use crate::error::CliError;
use crate::utils::{open_vault, stderr_color, target_dir, GlobalOptions};
use clap::Args;
use envscope::{HookOptions, ShellType};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

/// Print the shell commands for entering a directory.
#[derive(Args)]
pub struct HookCommand {
    /// Shell to generate commands for (default: detected from the environment)
    #[arg(long, value_enum)]
    pub shell: Option<ShellType>,

    /// Directory being entered (default: current directory)
    #[arg(long, value_name = "PATH")]
    pub path: Option<PathBuf>,
}

impl HookCommand {
    /// Execute the hook command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut vault = match open_vault(global) {
            Ok(vault) => vault,
            Err(e) => {
                warn(global, &e.to_string());
                return Ok(());
            }
        };

        let options = HookOptions::new(self.shell.unwrap_or_else(ShellType::detect))
            .with_live_env(live_env())
            .with_color(stderr_color(global));
        let outcome = vault.hook(&target_dir(self.path), &options);
        if let Err(e) = vault.close() {
            log::debug!("closing store after hook: {e}");
        }

        if let Some(ref warning) = outcome.warning {
            warn(global, warning);
        }
        if !outcome.commands.is_empty() {
            write_script(&mut std::io::stdout().lock(), &outcome.script());
        }
        if let Some(ref message) = outcome.message {
            if !global.quiet {
                eprintln!("{message}");
            }
        }
        Ok(())
    }
}

/// The process environment, skipping entries that are not valid UTF-8.
fn live_env() -> HashMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Writes the script, logging rather than failing when stdout is gone.
fn write_script<W: Write>(out: &mut W, script: &str) -> bool {
    match writeln!(out, "{script}").and_then(|()| out.flush()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("could not write hook script: {e}");
            false
        }
    }
}

fn warn(global: &GlobalOptions, message: &str) {
    if !global.quiet {
        eprintln!("envscope: warning: {message}");
    }
}
