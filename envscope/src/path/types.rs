//! Canonical path type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;

use crate::error::{Error, Result};

use super::normalize::lexical_normalize;
use super::relationship;
use super::style::PathStyle;

/// An absolute, normalized path under a known [`PathStyle`].
///
/// Equality, hashing and ordering use the folded form, so on Windows
/// `C:\Users` and `c:\users` are the same path.
///
/// # Examples
///
/// ```
/// use envscope::path::{CanonicalPath, PathStyle};
///
/// let a = CanonicalPath::parse(PathStyle::Windows, r"C:\Users").unwrap();
/// let b = CanonicalPath::parse(PathStyle::Windows, r"c:\users").unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), r"C:\Users");
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalPath {
    value: String,
    style: PathStyle,
}

impl CanonicalPath {
    /// Parse an absolute path, normalizing it lexically.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the input is not absolute under `style`.
    pub fn parse(style: PathStyle, input: &str) -> Result<Self> {
        let stripped = input.strip_prefix(r"\\?\").filter(|_| style == PathStyle::Windows);
        if style.root_len(stripped.unwrap_or(input)).is_none() {
            return Err(Error::InvalidPath {
                path: input.into(),
                reason: format!("not an absolute {style} path"),
            });
        }
        let value = lexical_normalize(style, input, input)?;
        Ok(Self { value, style })
    }

    pub(crate) fn from_normalized(style: PathStyle, value: String) -> Self {
        Self { value, style }
    }

    /// The path as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The path as a [`Path`] for filesystem calls.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        Path::new(&self.value)
    }

    /// The style this path is interpreted under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The folded comparison key stored alongside the path.
    #[must_use]
    pub fn match_key(&self) -> String {
        self.style.fold(&self.value).into_owned()
    }

    /// Number of segments below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        relationship::depth(self.style, &self.value)
    }

    /// Whether this is a filesystem root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.style.is_root(&self.value)
    }

    /// The parent directory; a root returns itself.
    #[must_use]
    pub fn parent(&self) -> Self {
        Self::from_normalized(
            self.style,
            relationship::parent(self.style, &self.value).to_string(),
        )
    }

    /// Whether `self` equals `other` or contains it.
    #[must_use]
    pub fn is_ancestor_of(&self, other: &Self) -> bool {
        relationship::is_ancestor_of(self.style, &self.value, &other.value)
    }

    /// This path and all its ancestors, root first.
    #[must_use]
    pub fn ancestors(&self) -> Vec<Self> {
        relationship::ancestors(self.style, &self.value)
            .into_iter()
            .map(|p| Self::from_normalized(self.style, p.to_string()))
            .collect()
    }

    /// Consume the path, returning the string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.value
    }
}

impl PartialEq for CanonicalPath {
    fn eq(&self, other: &Self) -> bool {
        self.style == other.style && self.style.fold(&self.value) == other.style.fold(&other.value)
    }
}

impl Eq for CanonicalPath {}

impl Hash for CanonicalPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.style.hash(state);
        self.style.fold(&self.value).hash(state);
    }
}

impl PartialOrd for CanonicalPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CanonicalPath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.style
            .fold(&self.value)
            .cmp(&other.style.fold(&other.value))
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl fmt::Display for CanonicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<Path> for CanonicalPath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}
