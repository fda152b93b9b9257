//! Filesystem-backed canonicalization.
//!
//! These helpers ask the filesystem for the real path of an entry, following
//! symlinks, and translate the I/O failures into library errors.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path does not exist (`PathNotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - Any other I/O error occurs (`Io`)
///
/// # Examples
///
/// ```no_run
/// use envscope::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| io_error_for(path, e))
}

/// Translate an I/O failure on `path` into a library error.
///
/// `NotFound` and `PermissionDenied` keep the path; everything else is `Io`.
pub(crate) fn io_error_for(path: &Path, err: std::io::Error) -> Error {
    match err.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        ErrorKind::PermissionDenied => Error::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    }
}

/// Attempt to canonicalize a path, returning `None` if it doesn't exist.
///
/// # Errors
///
/// Returns an error only for failures other than "not found".
///
/// # Examples
///
/// ```no_run
/// use envscope::path::canonicalize::try_canonicalize;
/// use std::path::Path;
///
/// assert!(try_canonicalize(Path::new("/tmp")).unwrap().is_some());
/// assert!(try_canonicalize(Path::new("/nonexistent")).unwrap().is_none());
/// ```
pub fn try_canonicalize(path: &Path) -> Result<Option<PathBuf>> {
    match canonicalize(path) {
        Ok(canonical) => Ok(Some(canonical)),
        Err(Error::PathNotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Borrow a path as UTF-8.
///
/// # Errors
///
/// Returns `InvalidPath` if the path is not valid UTF-8.
pub fn path_to_str(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_canonicalize_nonexistent() {
        let result = canonicalize(Path::new("/nonexistent/path/xyz"));
        assert!(matches!(result.unwrap_err(), Error::PathNotFound { .. }));
    }

    #[test]
    fn test_try_canonicalize_existing() {
        let temp = tempdir().unwrap();
        let result = try_canonicalize(temp.path()).unwrap();
        assert_eq!(result, Some(fs::canonicalize(temp.path()).unwrap()));
    }

    #[test]
    fn test_try_canonicalize_nonexistent() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("does-not-exist");
        assert_eq!(try_canonicalize(&missing).unwrap(), None);
    }

    #[test]
    #[cfg(unix)]
    fn test_canonicalize_symlink() {
        let temp = tempdir().unwrap();
        let target = temp.path().join("target");
        let link = temp.path().join("link");
        fs::create_dir(&target).unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let canonical = canonicalize(&link).unwrap();
        assert_eq!(canonical, fs::canonicalize(&target).unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_path_to_str_rejects_invalid_utf8() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let bad = Path::new(OsStr::from_bytes(b"/tmp/\xff"));
        assert!(matches!(
            path_to_str(bad).unwrap_err(),
            Error::InvalidPath { .. }
        ));
    }
}
