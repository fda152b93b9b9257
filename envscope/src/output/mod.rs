//! Output formatting for resolved secrets.
//!
//! A resolved map can be rendered as shell export statements, a dotenv file
//! or JSON. Every format lists keys in sorted order.

mod formatters;
mod shell;

use crate::error::Result;
use crate::secrets::ResolvedMap;

pub use formatters::{DotenvFormatter, ExportFormatter, JsonFormatter};
pub use shell::ShellType;

/// Renders a resolved map.
pub trait OutputFormatter {
    /// Format the resolved secrets into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be represented in the format.
    fn format(&self, secrets: &ResolvedMap) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// Dotenv (`.env` file) format.
    Dotenv,
    /// JSON object keyed by secret name.
    Json,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
