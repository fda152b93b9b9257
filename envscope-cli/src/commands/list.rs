//! List command implementation.
//!
//! This module implements the `list` command, which displays the secrets
//! visible from a directory, or with `--all` every scope in the store.

use crate::error::CliError;
use crate::utils::{format_timestamp, open_vault, shorten_path, target_dir, GlobalOptions};
use clap::{Args, ValueEnum};
use envscope::secrets::{ScopeSummary, SecretValue};
use envscope::ResolvedSecret;
use std::io::Write;
use std::path::PathBuf;

/// Placeholder shown instead of secret values.
const HIDDEN: &str = "********";

/// List secrets visible from a directory.
#[derive(Args)]
pub struct ListCommand {
    /// Directory to resolve from (default: current directory)
    #[arg(long, value_name = "PATH", conflicts_with = "all")]
    pub path: Option<PathBuf>,

    /// List every scope and its own entries, blocks included
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "table", ignore_case = true)]
    pub format: ListFormat,

    /// Show secret values instead of a placeholder
    #[arg(long)]
    pub show_values: bool,

    /// Show full paths instead of shortened forms
    #[arg(long)]
    pub show_full_paths: bool,
}

/// Output format for list command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut vault = open_vault(global)?;

        if self.all {
            let scopes = vault.scopes()?;
            vault.close()?;
            match self.format {
                ListFormat::Table => self.scopes_as_table(&scopes),
                ListFormat::Json => self.scopes_as_json(&scopes),
            }
        } else {
            let secrets = vault.list(&target_dir(self.path.clone()))?;
            vault.close()?;
            match self.format {
                ListFormat::Table => self.secrets_as_table(&secrets),
                ListFormat::Json => self.secrets_as_json(&secrets),
            }
        }
    }

    fn display_value<'a>(&self, value: &'a str) -> &'a str {
        if self.show_values {
            value
        } else {
            HIDDEN
        }
    }

    fn display_path(&self, path: &envscope::CanonicalPath) -> String {
        if self.show_full_paths {
            path.to_string()
        } else {
            shorten_path(path.as_path())
        }
    }

    fn secrets_as_table(&self, secrets: &[ResolvedSecret]) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "KEY\tVALUE\tSOURCE")?;
        for secret in secrets {
            writeln!(
                handle,
                "{}\t{}\t{}",
                secret.key,
                self.display_value(&secret.value),
                self.display_path(&secret.source_path),
            )?;
        }
        Ok(())
    }

    fn secrets_as_json(&self, secrets: &[ResolvedSecret]) -> Result<(), CliError> {
        let json_data: Vec<serde_json::Value> = secrets
            .iter()
            .map(|s| {
                serde_json::json!({
                    "key": s.key,
                    "value": self.show_values.then_some(s.value.as_str()),
                    "source": s.source_path.as_str(),
                })
            })
            .collect();
        write_json(&json_data)
    }

    fn scopes_as_table(&self, scopes: &[ScopeSummary]) -> Result<(), CliError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();

        writeln!(handle, "SCOPE\tKEY\tVALUE\tUPDATED_AT")?;
        for scope in scopes {
            for entry in &scope.entries {
                let value = match entry.value {
                    SecretValue::Value(ref v) => self.display_value(v),
                    SecretValue::Tombstone => "<blocked>",
                };
                writeln!(
                    handle,
                    "{}\t{}\t{}\t{}",
                    self.display_path(&scope.path),
                    entry.key,
                    value,
                    format_timestamp(entry.updated_at),
                )?;
            }
        }
        Ok(())
    }

    fn scopes_as_json(&self, scopes: &[ScopeSummary]) -> Result<(), CliError> {
        let json_data: Vec<serde_json::Value> = scopes
            .iter()
            .map(|scope| {
                let entries: Vec<serde_json::Value> = scope
                    .entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "key": e.key,
                            "blocked": e.value.is_tombstone(),
                            "value": e.value.as_value().filter(|_| self.show_values),
                            "updated_at": format_timestamp(e.updated_at),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "scope": scope.path.as_str(),
                    "entries": entries,
                })
            })
            .collect();
        write_json(&json_data)
    }
}

/// Pretty-print a JSON value to stdout.
fn write_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    serde_json::to_writer_pretty(&mut handle, value)
        .map_err(|e| CliError::Io(std::io::Error::new(std::io::ErrorKind::Other, e)))?;
    writeln!(handle)?;
    Ok(())
}
