//! Platform path conventions.
//!
//! Canonical paths are plain strings interpreted under a [`PathStyle`]. Making
//! the style explicit lets the Windows rules (drive roots, backslashes,
//! case-insensitive comparison) be exercised on any host.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How paths are spelled and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// `/`-separated, single root, case-sensitive.
    Posix,
    /// `\`-separated, drive-letter roots (`C:\`), case-insensitive.
    Windows,
}

impl PathStyle {
    /// The style of the platform this binary was built for.
    ///
    /// # Examples
    ///
    /// ```
    /// use envscope::path::PathStyle;
    ///
    /// #[cfg(unix)]
    /// assert_eq!(PathStyle::native(), PathStyle::Posix);
    /// ```
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Whether this style matches the host, i.e. the filesystem can be asked
    /// about paths of this style.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == Self::native()
    }

    /// The canonical separator.
    #[must_use]
    pub const fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates segments in user input.
    ///
    /// Windows accepts both `/` and `\`.
    #[must_use]
    pub const fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '\\' || c == '/',
        }
    }

    /// Folds a canonical path into its comparison key.
    ///
    /// # Examples
    ///
    /// ```
    /// use envscope::path::PathStyle;
    ///
    /// assert_eq!(PathStyle::Windows.fold(r"C:\Users\Me"), r"c:\users\me");
    /// assert_eq!(PathStyle::Posix.fold("/Home/Me"), "/Home/Me");
    /// ```
    #[must_use]
    pub fn fold(self, path: &str) -> Cow<'_, str> {
        match self {
            Self::Posix => Cow::Borrowed(path),
            Self::Windows => Cow::Owned(path.to_lowercase()),
        }
    }

    /// Length of the root prefix of a canonical path, if it has one.
    ///
    /// The root is `/` for POSIX and `X:\` for Windows.
    #[must_use]
    pub fn root_len(self, path: &str) -> Option<usize> {
        match self {
            Self::Posix => path.starts_with('/').then_some(1),
            Self::Windows => {
                let bytes = path.as_bytes();
                let is_drive_root = bytes.len() >= 3
                    && bytes[0].is_ascii_alphabetic()
                    && bytes[1] == b':'
                    && self.is_separator(char::from(bytes[2]));
                is_drive_root.then_some(3)
            }
        }
    }

    /// Whether a canonical path is a filesystem root.
    #[must_use]
    pub fn is_root(self, path: &str) -> bool {
        self.root_len(path) == Some(path.len())
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::Windows => write!(f, "windows"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators() {
        assert_eq!(PathStyle::Posix.separator(), '/');
        assert_eq!(PathStyle::Windows.separator(), '\\');
        assert!(PathStyle::Windows.is_separator('/'));
        assert!(!PathStyle::Posix.is_separator('\\'));
    }

    #[test]
    fn test_root_detection() {
        assert!(PathStyle::Posix.is_root("/"));
        assert!(!PathStyle::Posix.is_root("/home"));
        assert_eq!(PathStyle::Posix.root_len("relative"), None);

        assert!(PathStyle::Windows.is_root(r"C:\"));
        assert!(!PathStyle::Windows.is_root(r"C:\Users"));
        assert_eq!(PathStyle::Windows.root_len(r"d:\x"), Some(3));
        assert_eq!(PathStyle::Windows.root_len(r"\x"), None);
        assert_eq!(PathStyle::Windows.root_len("C:"), None);
    }

    #[test]
    fn test_fold_is_case_insensitive_only_on_windows() {
        assert_eq!(PathStyle::Windows.fold(r"C:\A"), PathStyle::Windows.fold(r"c:\a"));
        assert_ne!(PathStyle::Posix.fold("/A"), PathStyle::Posix.fold("/a"));
    }
}
