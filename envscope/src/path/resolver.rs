//! Path resolution against an explicit working directory.
//!
//! This module provides the `PathResolver` type, which turns user-supplied
//! paths into [`CanonicalPath`]s.

use std::path::Path;

use crate::error::{Error, Result};
use crate::path::canonicalize::{self, path_to_str};
use crate::path::normalize::{expand_tilde, lexical_normalize};
use crate::path::style::PathStyle;
use crate::path::types::CanonicalPath;

/// Canonicalizes paths and answers ancestry questions.
///
/// Relative input is resolved against the resolver's working directory,
/// never the process's current directory.
///
/// # Examples
///
/// ```no_run
/// use envscope::path::{PathResolver, PathStyle};
/// use std::path::Path;
///
/// let resolver = PathResolver::new(PathStyle::native(), Path::new("/home/me")).unwrap();
///
/// let lexical = resolver.canonicalize(Path::new("./src/../docs"), false).unwrap();
/// assert_eq!(lexical.as_str(), "/home/me/docs");
///
/// let real = resolver.resolve_existing(Path::new("/tmp")).unwrap();
/// assert!(real.as_path().is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver {
    style: PathStyle,
    working_dir: String,
}

impl PathResolver {
    /// Create a resolver for `style` rooted at `working_dir`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if `working_dir` is not absolute under `style` or
    /// is not valid UTF-8.
    pub fn new(style: PathStyle, working_dir: &Path) -> Result<Self> {
        let dir = path_to_str(working_dir)?;
        let canonical = CanonicalPath::parse(style, dir)?;
        Ok(Self {
            style,
            working_dir: canonical.into_string(),
        })
    }

    /// The style paths are interpreted under.
    #[must_use]
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// The directory relative input is resolved against.
    #[must_use]
    pub fn working_dir(&self) -> &str {
        &self.working_dir
    }

    /// Canonicalize `path`.
    ///
    /// Tilde is expanded, relative input is made absolute and `.`/`..` are
    /// resolved lexically. With `follow_symlinks`, symlinks are resolved
    /// through the filesystem; a path that does not exist falls back to the
    /// lexical result. Paths of a non-native style are never looked up.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid UTF-8, cannot be normalized,
    /// or if the filesystem lookup fails for a reason other than "not found".
    pub fn canonicalize(&self, path: &Path, follow_symlinks: bool) -> Result<CanonicalPath> {
        let lexical = self.lexical(path)?;
        if !follow_symlinks || !self.style.is_native() {
            return Ok(lexical);
        }

        match canonicalize::try_canonicalize(lexical.as_path())? {
            Some(real) => self.from_filesystem(&real),
            None => Ok(lexical),
        }
    }

    /// Canonicalize a path that must exist, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the path does not exist, `PermissionDenied`
    /// if it cannot be inspected, and `InvalidPath` when the resolver's style
    /// is not the host's.
    pub fn resolve_existing(&self, path: &Path) -> Result<CanonicalPath> {
        let lexical = self.lexical(path)?;
        if !self.style.is_native() {
            return Err(Error::InvalidPath {
                path: lexical.as_path().to_path_buf(),
                reason: format!("cannot inspect {} paths on this host", self.style),
            });
        }
        let real = canonicalize::canonicalize(lexical.as_path())?;
        self.from_filesystem(&real)
    }

    /// The ancestor chain of `path`, root first, including `path`.
    #[must_use]
    pub fn ancestors(&self, path: &CanonicalPath) -> Vec<CanonicalPath> {
        path.ancestors()
    }

    /// Whether `ancestor` equals `path` or contains it.
    #[must_use]
    pub fn is_ancestor_of(&self, ancestor: &CanonicalPath, path: &CanonicalPath) -> bool {
        ancestor.is_ancestor_of(path)
    }

    fn lexical(&self, path: &Path) -> Result<CanonicalPath> {
        let expanded = expand_tilde(path_to_str(path)?)?;
        let normalized = lexical_normalize(self.style, &self.working_dir, &expanded)?;
        Ok(CanonicalPath::from_normalized(self.style, normalized))
    }

    fn from_filesystem(&self, real: &Path) -> Result<CanonicalPath> {
        let normalized = lexical_normalize(self.style, &self.working_dir, path_to_str(real)?)?;
        Ok(CanonicalPath::from_normalized(self.style, normalized))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn posix(dir: &str) -> PathResolver {
        PathResolver::new(PathStyle::Posix, Path::new(dir)).unwrap()
    }

    #[test]
    fn test_relative_working_dir_rejected() {
        assert!(PathResolver::new(PathStyle::Posix, Path::new("relative")).is_err());
    }

    #[test]
    fn test_lexical_uses_working_dir_not_process_cwd() {
        let resolver = posix("/srv/app");
        let p = resolver
            .canonicalize(Path::new("config/../bin"), false)
            .unwrap();
        assert_eq!(p.as_str(), "/srv/app/bin");
    }

    #[test]
    fn test_windows_style_canonicalize() {
        let resolver = PathResolver::new(PathStyle::Windows, Path::new(r"c:\work")).unwrap();
        let p = resolver.canonicalize(Path::new("sub/Dir"), true).unwrap();
        assert_eq!(p.as_str(), r"C:\work\sub\Dir");
        assert!(resolver.resolve_existing(Path::new("x")).is_err());
    }

    #[test]
    #[cfg(unix)]
    fn test_follow_symlinks_resolves_link() {
        let temp = tempdir().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        let target = base.join("real");
        let link = base.join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let resolver = PathResolver::new(PathStyle::Posix, &base).unwrap();
        let followed = resolver.canonicalize(Path::new("link"), true).unwrap();
        assert_eq!(followed.as_path(), target.as_path());

        let lexical = resolver.canonicalize(Path::new("link"), false).unwrap();
        assert_eq!(lexical.as_path(), link.as_path());
    }

    #[test]
    #[cfg(unix)]
    fn test_follow_symlinks_missing_falls_back_to_lexical() {
        let temp = tempdir().unwrap();
        let base = fs::canonicalize(temp.path()).unwrap();
        let resolver = PathResolver::new(PathStyle::Posix, &base).unwrap();

        let p = resolver.canonicalize(Path::new("missing/./dir"), true).unwrap();
        assert_eq!(p.as_path(), base.join("missing/dir").as_path());
    }

    #[test]
    #[cfg(unix)]
    fn test_resolve_existing_missing_is_error() {
        let temp = tempdir().unwrap();
        let resolver = PathResolver::new(PathStyle::Posix, temp.path()).unwrap();
        let err = resolver.resolve_existing(Path::new("nope")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_ancestors_via_resolver() {
        let resolver = posix("/");
        let p = resolver.canonicalize(Path::new("/a/b"), false).unwrap();
        let chain = resolver.ancestors(&p);
        assert_eq!(chain.len(), 3);
        assert!(resolver.is_ancestor_of(&chain[0], &p));
        assert!(!resolver.is_ancestor_of(&p, &chain[1]));
    }
}
