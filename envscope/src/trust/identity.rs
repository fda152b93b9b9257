//! Filesystem identity tokens.
//!
//! A token changes when a directory is deleted and recreated at the same
//! path, which is what makes stale trust detectable.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::path::canonicalize::io_error_for;

/// Reads the identity token of `path`.
///
/// On Unix this is `"<dev>:<ino>"`. On Windows, where inode numbers are not
/// exposed through std, it is the creation time in 100ns ticks.
///
/// # Errors
///
/// Returns `PathNotFound` or `PermissionDenied` when the path cannot be
/// inspected, or `Io` for other failures.
///
/// # Examples
///
/// ```no_run
/// use envscope::trust::read_identity;
/// use std::path::Path;
///
/// let token = read_identity(Path::new("/tmp")).unwrap();
/// assert!(!token.is_empty());
/// ```
pub fn read_identity(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path).map_err(|e| io_error_for(path, e))?;
    token_from(path, &metadata)
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn token_from(_path: &Path, metadata: &fs::Metadata) -> Result<String> {
    use std::os::unix::fs::MetadataExt;
    Ok(format!("{}:{}", metadata.dev(), metadata.ino()))
}

#[cfg(windows)]
#[allow(clippy::unnecessary_wraps)]
fn token_from(_path: &Path, metadata: &fs::Metadata) -> Result<String> {
    use std::os::windows::fs::MetadataExt;
    Ok(metadata.creation_time().to_string())
}

#[cfg(not(any(unix, windows)))]
fn token_from(path: &Path, metadata: &fs::Metadata) -> Result<String> {
    let created = metadata.created().map_err(|e| io_error_for(path, e))?;
    let since_epoch = created
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap_or_default();
    Ok(since_epoch.as_nanos().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_identity_is_stable() {
        let temp = tempdir().unwrap();
        let first = read_identity(temp.path()).unwrap();
        let second = read_identity(temp.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_identity_missing_path() {
        let temp = tempdir().unwrap();
        let err = read_identity(&temp.path().join("gone")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_identity_changes_when_directory_replaced() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("project");
        fs::create_dir(&dir).unwrap();
        let before = read_identity(&dir).unwrap();

        // Keep the old directory alive so its inode cannot be reused
        fs::rename(&dir, temp.path().join("project.old")).unwrap();
        fs::create_dir(&dir).unwrap();

        assert_ne!(before, read_identity(&dir).unwrap());
    }

    #[test]
    #[cfg(unix)]
    fn test_unix_token_format() {
        let temp = tempdir().unwrap();
        let token = read_identity(temp.path()).unwrap();
        let (dev, ino) = token.split_once(':').unwrap();
        assert!(dev.parse::<u64>().is_ok());
        assert!(ino.parse::<u64>().is_ok());
    }
}
