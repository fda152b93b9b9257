//! Lexical path normalization.
//!
//! This module turns user input into an absolute, separator-normalized path
//! string without touching the filesystem:
//! - Expanding tilde (~) to the home directory
//! - Joining relative input onto an explicit working directory
//! - Resolving `.` and `..` components (`..` at the root stays at the root)
//! - Normalizing Windows input (`\\?\` prefix, `/` separators, drive case)

use crate::error::{Error, Result};

use super::style::PathStyle;

const VERBATIM_PREFIX: &str = r"\\?\";

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined, the home
/// directory is not valid UTF-8, or the input uses `~user` syntax.
///
/// # Examples
///
/// ```
/// use envscope::path::normalize::expand_tilde;
///
/// let expanded = expand_tilde("~/project").unwrap();
/// assert!(expanded.ends_with("project"));
///
/// assert_eq!(expand_tilde("/absolute").unwrap(), "/absolute");
/// ```
pub fn expand_tilde(input: &str) -> Result<String> {
    if !input.starts_with('~') {
        return Ok(input.to_string());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: input.into(),
        reason: "cannot determine home directory".to_string(),
    })?;
    let home = home.to_str().ok_or_else(|| Error::InvalidPath {
        path: home.clone(),
        reason: "home directory is not valid UTF-8".to_string(),
    })?;

    if input == "~" {
        Ok(home.to_string())
    } else if input.starts_with("~/") || input.starts_with("~\\") {
        Ok(format!("{home}{}", &input[1..]))
    } else {
        Err(Error::InvalidPath {
            path: input.into(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Normalize `input` to an absolute path under `style`.
///
/// Relative input is joined onto `base`, which must itself be absolute. On
/// Windows a root-relative path (`\foo`) takes the drive of `base`.
///
/// # Errors
///
/// Returns `InvalidPath` if `base` is not absolute, or if the input is a
/// Windows UNC path or a drive-relative path such as `C:foo`.
///
/// # Examples
///
/// ```
/// use envscope::path::normalize::lexical_normalize;
/// use envscope::path::PathStyle;
///
/// let p = lexical_normalize(PathStyle::Posix, "/home/me", "../you/./x").unwrap();
/// assert_eq!(p, "/home/you/x");
///
/// let p = lexical_normalize(PathStyle::Windows, r"C:\work", r"c:/Users\me\..").unwrap();
/// assert_eq!(p, r"C:\Users");
/// ```
pub fn lexical_normalize(style: PathStyle, base: &str, input: &str) -> Result<String> {
    let input = strip_verbatim(style, input);

    if let Some((root, rest)) = split_absolute(style, input) {
        return Ok(join(style, &root, collapse(style, rest, Vec::new())));
    }

    if style == PathStyle::Windows {
        reject_unsupported_windows_form(input)?;
    }

    let base = strip_verbatim(style, base);
    let (root, base_rest) = split_absolute(style, base).ok_or_else(|| Error::InvalidPath {
        path: base.into(),
        reason: "working directory must be absolute".to_string(),
    })?;

    let root_relative =
        style == PathStyle::Windows && input.starts_with(|c: char| style.is_separator(c));
    let segments = if root_relative {
        Vec::new()
    } else {
        collapse(style, base_rest, Vec::new())
    };

    Ok(join(style, &root, collapse(style, input, segments)))
}

fn strip_verbatim(style: PathStyle, input: &str) -> &str {
    match style {
        PathStyle::Windows => match input.strip_prefix(VERBATIM_PREFIX) {
            Some(rest) if PathStyle::Windows.root_len(rest).is_some() => rest,
            _ => input,
        },
        PathStyle::Posix => input,
    }
}

fn split_absolute(style: PathStyle, input: &str) -> Option<(String, &str)> {
    let len = style.root_len(input)?;
    let root = match style {
        PathStyle::Posix => "/".to_string(),
        PathStyle::Windows => format!("{}:\\", input[..1].to_ascii_uppercase()),
    };
    Some((root, &input[len..]))
}

fn reject_unsupported_windows_form(input: &str) -> Result<()> {
    let bytes = input.as_bytes();
    let is_unc = bytes.len() >= 2
        && PathStyle::Windows.is_separator(char::from(bytes[0]))
        && PathStyle::Windows.is_separator(char::from(bytes[1]));
    if is_unc {
        return Err(Error::InvalidPath {
            path: input.into(),
            reason: "UNC paths are not supported".to_string(),
        });
    }

    let is_drive_relative = bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':';
    if is_drive_relative {
        return Err(Error::InvalidPath {
            path: input.into(),
            reason: "drive-relative paths are not supported".to_string(),
        });
    }

    Ok(())
}

fn collapse<'a>(style: PathStyle, rest: &'a str, mut segments: Vec<&'a str>) -> Vec<&'a str> {
    for segment in rest.split(|c: char| style.is_separator(c)) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments
}

fn join(style: PathStyle, root: &str, segments: Vec<&str>) -> String {
    let mut out = String::from(root);
    out.push_str(&segments.join(&style.separator().to_string()));
    out
}
