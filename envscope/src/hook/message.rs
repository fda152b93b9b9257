//! One-line hook summaries.

use colored::Colorize;

use super::diff::HookDiff;

/// Summarizes a diff for the shell, or `None` when it did nothing visible.
///
/// # Examples
///
/// ```
/// use envscope::hook::{format_message, HookDiff};
///
/// let diff = HookDiff {
///     unset: vec!["OLD".into()],
///     skipped: vec!["PATH_HINT".into()],
///     ..HookDiff::default()
/// };
/// assert_eq!(
///     format_message(&diff, false).as_deref(),
///     Some("envscope: unloaded 1, skipped 1 (already set)")
/// );
/// assert_eq!(format_message(&HookDiff::default(), false), None);
/// ```
#[must_use]
pub fn format_message(diff: &HookDiff, use_color: bool) -> Option<String> {
    let mut parts = Vec::new();
    match diff.set.len() {
        0 => {}
        1 => parts.push("loaded 1 secret".to_string()),
        n => parts.push(format!("loaded {n} secrets")),
    }
    if !diff.unset.is_empty() {
        parts.push(format!("unloaded {}", diff.unset.len()));
    }
    if !diff.skipped.is_empty() {
        parts.push(format!("skipped {} (already set)", diff.skipped.len()));
    }
    if parts.is_empty() {
        return None;
    }

    let line = format!("envscope: {}", parts.join(", "));
    Some(if use_color {
        line.dimmed().to_string()
    } else {
        line
    })
}
