//! Output formatter implementations.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::secrets::ResolvedMap;

use super::{OutputFormatter, ShellType};

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, secrets: &ResolvedMap) -> Result<String> {
        let exports: Vec<String> = secrets
            .values()
            .map(|s| self.shell.format_set(&s.key, &s.value))
            .collect();
        Ok(exports.join("\n"))
    }
}

/// Formatter for dotenv (`.env` file) format.
///
/// Values are double-quoted with `\` and `"` escaped. Dotenv has no portable
/// multi-line syntax, so values containing line breaks are rejected.
pub struct DotenvFormatter;

impl OutputFormatter for DotenvFormatter {
    fn format(&self, secrets: &ResolvedMap) -> Result<String> {
        let mut lines = Vec::with_capacity(secrets.len());
        for secret in secrets.values() {
            if secret.value.contains(['\n', '\r']) {
                return Err(Error::ValueContainsNewline {
                    key: secret.key.clone(),
                });
            }
            let escaped = secret.value.replace('\\', "\\\\").replace('"', "\\\"");
            lines.push(format!("{}=\"{escaped}\"", secret.key));
        }
        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonEntry<'a> {
    value: &'a str,
    source: &'a str,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, secrets: &ResolvedMap) -> Result<String> {
        let entries: BTreeMap<&str, JsonEntry<'_>> = secrets
            .values()
            .map(|s| {
                (
                    s.key.as_str(),
                    JsonEntry {
                        value: &s.value,
                        source: s.source_path.as_str(),
                    },
                )
            })
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }
}
