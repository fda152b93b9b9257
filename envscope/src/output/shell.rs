//! Shell detection and quoting.

use std::env;
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shells that can receive environment updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from the process environment.
    ///
    /// See [`ShellType::detect_from`] for the precedence.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from(|name| env::var(name).ok())
    }

    /// Detect a shell from an environment lookup.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` (a path like `/bin/bash`)
    /// 5. Bash
    ///
    /// # Examples
    ///
    /// ```
    /// use envscope::output::ShellType;
    ///
    /// let shell = ShellType::detect_from(|name| {
    ///     (name == "SHELL").then(|| "/usr/bin/fish".to_string())
    /// });
    /// assert_eq!(shell, ShellType::Fish);
    /// ```
    pub fn detect_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if lookup("ZSH_VERSION").is_some() {
            return Self::Zsh;
        }
        if lookup("FISH_VERSION").is_some() {
            return Self::Fish;
        }
        if lookup("PSModulePath").is_some() {
            return Self::PowerShell;
        }

        match lookup("SHELL") {
            Some(shell) if shell.contains("zsh") => Self::Zsh,
            Some(shell) if shell.contains("fish") => Self::Fish,
            Some(shell) if shell.contains("pwsh") || shell.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Parse a shell name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Lowercase shell name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
            Self::Fish => "fish",
            Self::PowerShell => "powershell",
        }
    }

    /// A command assigning and exporting `value` to `var`.
    ///
    /// Values are always quoted, so any content is safe.
    ///
    /// # Examples
    ///
    /// ```
    /// use envscope::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_set("A", "it's"), r"export A=$'it\'s'");
    /// assert_eq!(ShellType::Fish.format_set("A", "it's"), r"set -gx A 'it\'s'");
    /// assert_eq!(ShellType::PowerShell.format_set("A", "it's"), "$env:A = 'it''s'");
    /// ```
    #[must_use]
    pub fn format_set(self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", ansi_c_quote(value)),
            Self::Fish => format!("set -gx {var} {}", fish_quote(value)),
            Self::PowerShell => format!("$env:{var} = {}", powershell_quote(value)),
        }
    }

    /// A command removing `var` from the environment.
    #[must_use]
    pub fn format_unset(self, var: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("unset {var}"),
            Self::Fish => format!("set -e {var}"),
            Self::PowerShell => format!("Remove-Item Env:{var} -ErrorAction SilentlyContinue"),
        }
    }
}

impl fmt::Display for ShellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bash/zsh `$'...'` quoting.
fn ansi_c_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 3);
    quoted.push_str("$'");
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Fish single quoting. Fish still reads `\\` and `\'` as escapes inside
/// single quotes, so both characters are escaped.
fn fish_quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// `PowerShell` verbatim string: single quotes are doubled.
fn powershell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
