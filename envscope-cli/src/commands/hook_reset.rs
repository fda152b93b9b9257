//! Hook reset command implementation.

use crate::error::CliError;
use crate::utils::{open_vault, GlobalOptions};
use clap::Args;

/// Forget which secrets the hook has loaded.
///
/// The next hook invocation treats every resolved secret as new. Variables
/// already exported into running shells are left alone.
#[derive(Args)]
pub struct HookResetCommand {}

impl HookResetCommand {
    /// Execute the hook-reset command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let vault = open_vault(global)?;
        let existed = vault.reset_hook_state()?;

        if !global.quiet {
            if existed {
                eprintln!("Hook state cleared");
            } else {
                eprintln!("No hook state to clear");
            }
        }
        Ok(())
    }
}
