//! Shell hook support.
//!
//! On every directory change the shell asks for the commands that bring its
//! environment in line with the new directory's secrets. The hook remembers
//! what it exported last time in a [`HookState`], diffs that against the new
//! resolution and emits unsets before sets.
//!
//! Variables the user set themselves are not clobbered silently: what happens
//! to them is governed by [`ConflictPolicy`].

mod diff;
mod message;
mod state;

use std::collections::HashMap;

use serde::Serialize;

use crate::output::ShellType;
use crate::trust::NotTrustedReason;

pub use diff::{compute_diff, generate_shell_commands, ConflictPolicy, HookDiff, LoadedSecret};
pub use message::format_message;
pub use state::{apply_diff, HookState, HookStateFile, HOOK_STATE_FILE};

/// Inputs to a hook invocation besides the directory.
#[derive(Debug, Clone)]
pub struct HookOptions {
    /// Shell the commands are generated for.
    pub shell: ShellType,
    /// The shell's current environment.
    pub live_env: HashMap<String, String>,
    /// Whether the summary line may use color.
    pub use_color: bool,
}

impl HookOptions {
    /// Options for `shell` with an empty environment and no color.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self {
            shell,
            live_env: HashMap::new(),
            use_color: false,
        }
    }

    /// Sets the live environment.
    #[must_use]
    pub fn with_live_env(mut self, live_env: HashMap<String, String>) -> Self {
        self.live_env = live_env;
        self
    }

    /// Enables or disables color.
    #[must_use]
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }
}

/// Result of a hook invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HookOutcome {
    /// Shell commands to evaluate, unsets first.
    pub commands: Vec<String>,
    /// Summary line for the user, if anything changed.
    pub message: Option<String>,
    /// Whether the directory is trusted.
    pub trusted: bool,
    /// Why it is not, when untrusted.
    pub not_trusted_reason: Option<NotTrustedReason>,
    /// Secrets exported by this invocation.
    pub loaded_secrets: Vec<LoadedSecret>,
    /// Keys removed by this invocation.
    pub unloaded_keys: Vec<String>,
    /// Set when the invocation failed and produced no commands.
    pub warning: Option<String>,
}

impl HookOutcome {
    /// An outcome that changes nothing and carries `warning`.
    #[must_use]
    pub fn failed(warning: String) -> Self {
        Self {
            warning: Some(warning),
            ..Self::default()
        }
    }

    /// The commands joined into one script.
    #[must_use]
    pub fn script(&self) -> String {
        self.commands.join("\n")
    }
}
