//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `set`: Store a secret for a directory
//! - `get`: Print the secret visible from a directory
//! - `list`: List visible secrets, or every scope with `--all`
//! - `remove`: Delete an entry from exactly one directory
//! - `block`: Block an inherited secret
//! - `export`: Print visible secrets as export statements, dotenv or JSON
//! - `trust` / `untrust`: Grant or revoke trust
//! - `trusted`: List trusted directories
//! - `status`: Report whether a directory is trusted
//! - `hook`: Print the shell commands for entering a directory
//! - `hook_reset`: Forget the hook state
//! - `show_data_dir`: Show resolved data directory path
//! - `completions`: Generate shell completion scripts

pub mod block;
pub mod completions;
pub mod export;
pub mod get;
pub mod hook;
pub mod hook_reset;
pub mod list;
pub mod remove;
pub mod set;
pub mod show_data_dir;
pub mod status;
pub mod trust;
pub mod trusted;
pub mod untrust;

pub use block::BlockCommand;
pub use completions::CompletionsCommand;
pub use export::ExportCommand;
pub use get::GetCommand;
pub use hook::HookCommand;
pub use hook_reset::HookResetCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use set::SetCommand;
pub use show_data_dir::ShowDataDirCommand;
pub use status::StatusCommand;
pub use trust::TrustCommand;
pub use trusted::TrustedCommand;
pub use untrust::UntrustCommand;
