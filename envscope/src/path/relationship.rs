//! Path ancestry on canonical path strings.
//!
//! Everything here is purely lexical and expects canonical input (absolute,
//! separator-normalized, no `.`/`..`). Comparisons use [`PathStyle::fold`], so
//! Windows paths compare case-insensitively.

use super::style::PathStyle;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use envscope::path::{PathRelationship, PathStyle};
///
/// assert_eq!(
///     PathRelationship::between(PathStyle::Posix, "/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// assert_eq!(
///     PathRelationship::between(PathStyle::Posix, "/home/user", "/home/username"),
///     PathRelationship::Unrelated
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is a strict ancestor of the second.
    Ancestor,

    /// The first path is a strict descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two canonical paths.
    ///
    /// Matching is segment-exact: `/a/b` is not an ancestor of `/a/bc`.
    #[must_use]
    pub fn between(style: PathStyle, path1: &str, path2: &str) -> Self {
        let p1 = style.fold(path1);
        let p2 = style.fold(path2);

        if p1 == p2 {
            Self::Same
        } else if contains_folded(style, &p1, &p2) {
            Self::Ancestor
        } else if contains_folded(style, &p2, &p1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }
}

/// Whether `ancestor` equals `path` or contains it.
///
/// # Examples
///
/// ```
/// use envscope::path::relationship::is_ancestor_of;
/// use envscope::path::PathStyle;
///
/// assert!(is_ancestor_of(PathStyle::Posix, "/", "/etc"));
/// assert!(is_ancestor_of(PathStyle::Posix, "/etc", "/etc"));
/// assert!(!is_ancestor_of(PathStyle::Posix, "/et", "/etc"));
/// assert!(is_ancestor_of(PathStyle::Windows, r"C:\Users", r"c:\users\me"));
/// ```
#[must_use]
pub fn is_ancestor_of(style: PathStyle, ancestor: &str, path: &str) -> bool {
    let a = style.fold(ancestor);
    let p = style.fold(path);
    a == p || contains_folded(style, &a, &p)
}

fn contains_folded(style: PathStyle, ancestor: &str, path: &str) -> bool {
    if path.len() <= ancestor.len() || !path.starts_with(ancestor) {
        return false;
    }
    // Roots already end with a separator.
    ancestor.ends_with(style.separator())
        || path[ancestor.len()..].starts_with(style.separator())
}

/// The parent of a canonical path. A root is its own parent.
///
/// # Examples
///
/// ```
/// use envscope::path::relationship::parent;
/// use envscope::path::PathStyle;
///
/// assert_eq!(parent(PathStyle::Posix, "/a/b"), "/a");
/// assert_eq!(parent(PathStyle::Posix, "/a"), "/");
/// assert_eq!(parent(PathStyle::Posix, "/"), "/");
/// assert_eq!(parent(PathStyle::Windows, r"C:\a"), r"C:\");
/// ```
#[must_use]
pub fn parent(style: PathStyle, path: &str) -> &str {
    let Some(root_len) = style.root_len(path) else {
        return path;
    };
    if path.len() <= root_len {
        return path;
    }
    match path.rfind(style.separator()) {
        Some(idx) if idx >= root_len => &path[..idx],
        _ => &path[..root_len],
    }
}

/// Every ancestor of `path` including itself, ordered root first.
///
/// # Examples
///
/// ```
/// use envscope::path::relationship::ancestors;
/// use envscope::path::PathStyle;
///
/// assert_eq!(ancestors(PathStyle::Posix, "/a/b"), vec!["/", "/a", "/a/b"]);
/// ```
#[must_use]
pub fn ancestors(style: PathStyle, path: &str) -> Vec<&str> {
    let mut chain = vec![path];
    let mut current = path;
    loop {
        let next = parent(style, current);
        if next == current {
            break;
        }
        chain.push(next);
        current = next;
    }
    chain.reverse();
    chain
}

/// Number of segments below the root. A root has depth 0.
#[must_use]
pub fn depth(style: PathStyle, path: &str) -> usize {
    let root_len = style.root_len(path).unwrap_or(0);
    path[root_len..]
        .split(style.separator())
        .filter(|segment| !segment.is_empty())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_all_variants() {
        let s = PathStyle::Posix;
        assert_eq!(PathRelationship::between(s, "/a", "/a/b"), PathRelationship::Ancestor);
        assert_eq!(PathRelationship::between(s, "/a/b", "/a"), PathRelationship::Descendant);
        assert_eq!(PathRelationship::between(s, "/a", "/a"), PathRelationship::Same);
        assert_eq!(PathRelationship::between(s, "/a", "/b"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_partial_segment_is_not_ancestor() {
        let s = PathStyle::Posix;
        assert!(!is_ancestor_of(s, "/home/user", "/home/username"));
        assert!(!is_ancestor_of(s, "/home/user", "/home/use"));
        assert!(is_ancestor_of(s, "/home/user", "/home/user/x"));
    }

    #[test]
    fn test_root_is_ancestor_of_everything() {
        assert!(is_ancestor_of(PathStyle::Posix, "/", "/anything/deep"));
        assert!(is_ancestor_of(PathStyle::Windows, r"C:\", r"C:\Users"));
        assert!(!is_ancestor_of(PathStyle::Windows, r"C:\", r"D:\Users"));
    }

    #[test]
    fn test_posix_is_case_sensitive() {
        assert!(!is_ancestor_of(PathStyle::Posix, "/Home", "/home/me"));
        assert_eq!(
            PathRelationship::between(PathStyle::Posix, "/A", "/a"),
            PathRelationship::Unrelated
        );
    }

    #[test]
    fn test_windows_is_case_insensitive() {
        let s = PathStyle::Windows;
        assert!(is_ancestor_of(s, r"C:\Users\Me", r"c:\USERS\me\project"));
        assert_eq!(
            PathRelationship::between(s, r"C:\Users", r"c:\users"),
            PathRelationship::Same
        );
        assert!(!is_ancestor_of(s, r"C:\Users\Me", r"C:\Users\Mel"));
    }

    #[test]
    fn test_parent_reaches_root_fixpoint() {
        assert_eq!(parent(PathStyle::Posix, "/"), "/");
        assert_eq!(parent(PathStyle::Windows, r"C:\"), r"C:\");
        assert_eq!(parent(PathStyle::Windows, r"C:\a\b"), r"C:\a");
    }

    #[test]
    fn test_ancestors_shallow_to_deep() {
        assert_eq!(ancestors(PathStyle::Posix, "/"), vec!["/"]);
        assert_eq!(
            ancestors(PathStyle::Windows, r"C:\x\y"),
            vec![r"C:\", r"C:\x", r"C:\x\y"]
        );
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth(PathStyle::Posix, "/"), 0);
        assert_eq!(depth(PathStyle::Posix, "/a/b/c"), 3);
        assert_eq!(depth(PathStyle::Windows, r"C:\"), 0);
        assert_eq!(depth(PathStyle::Windows, r"C:\a"), 1);
    }
}
