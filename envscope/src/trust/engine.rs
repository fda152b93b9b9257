//! Trust grants and checks.

use std::path::Path;

use crate::error::Result;
use crate::path::{CanonicalPath, PathResolver};
use crate::store::Storage;

use super::identity::read_identity;
use super::types::{NotTrustedReason, TrustGrant, TrustRecord, TrustStatus};

/// Reads a directory's identity token.
pub type IdentityReader = fn(&Path) -> Result<String>;

/// Authorizes directories for automatic secret loading.
///
/// A trusted directory also covers its descendants. Each grant remembers the
/// directory's filesystem identity; a grant whose directory has since been
/// replaced no longer counts.
///
/// # Examples
///
/// ```no_run
/// use envscope::path::{PathResolver, PathStyle};
/// use envscope::store::{Store, StoreConfig};
/// use envscope::trust::TrustEngine;
/// use std::path::Path;
///
/// let paths = PathResolver::new(PathStyle::native(), Path::new("/")).unwrap();
/// let mut store = Store::new(StoreConfig::new("/tmp/envscope.db"));
/// let mut trust = TrustEngine::new(&mut store, &paths);
///
/// trust.trust(Path::new("/srv/app")).unwrap();
/// assert!(trust.is_trusted(Path::new("/srv/app/web")).unwrap().is_trusted());
/// ```
pub struct TrustEngine<'a, S: ?Sized> {
    storage: &'a mut S,
    paths: &'a PathResolver,
    identity: IdentityReader,
}

impl<'a, S: Storage + ?Sized> TrustEngine<'a, S> {
    /// Creates an engine reading identities from the filesystem.
    pub fn new(storage: &'a mut S, paths: &'a PathResolver) -> Self {
        Self {
            storage,
            paths,
            identity: read_identity,
        }
    }

    /// Replaces the identity reader.
    #[must_use]
    pub fn with_identity_reader(mut self, reader: IdentityReader) -> Self {
        self.identity = reader;
        self
    }

    /// Trusts an existing directory, replacing any earlier grant for it.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the directory does not exist, or any storage
    /// or filesystem error.
    pub fn trust(&mut self, path: &Path) -> Result<TrustGrant> {
        let target = self.paths.resolve_existing(path)?;
        let inode = (self.identity)(target.as_path())?;
        let record = self.storage.add_trust_record(&target, &inode)?;
        log::debug!("trusted {} ({})", record.path, record.inode);
        Ok(TrustGrant {
            path: record.path,
            inode: record.inode,
        })
    }

    /// Revokes the grant for exactly `path`. Returns whether one existed.
    ///
    /// The directory need not exist any more.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized or storage fails.
    pub fn untrust(&mut self, path: &Path) -> Result<bool> {
        let target = self.paths.canonicalize(path, true)?;
        self.storage.remove_trust_record(&target)
    }

    /// Checks whether `path` is covered by a valid grant.
    ///
    /// Candidates are tried deepest first, equal depths in byte order of the
    /// path. A stale or vanished candidate does not stop the search, since an
    /// ancestor grant may still be valid.
    ///
    /// # Errors
    ///
    /// Returns an error for storage failures and for filesystem failures
    /// other than "not found".
    pub fn is_trusted(&mut self, path: &Path) -> Result<TrustStatus> {
        let target = match self.paths.resolve_existing(path) {
            Ok(target) => target,
            Err(e) if e.is_not_found() => {
                return Ok(TrustStatus::NotTrusted {
                    reason: NotTrustedReason::PathNotFound,
                })
            }
            Err(e) => return Err(e),
        };
        self.check_canonical(&target)
    }

    /// Like [`TrustEngine::is_trusted`] for an already-resolved directory.
    ///
    /// # Errors
    ///
    /// Returns an error for storage failures and for filesystem failures
    /// other than "not found".
    pub fn check_canonical(&mut self, target: &CanonicalPath) -> Result<TrustStatus> {
        let mut candidates = self.storage.get_ancestor_trust_records(target)?;
        if candidates.is_empty() {
            return Ok(TrustStatus::NotTrusted {
                reason: NotTrustedReason::NotTrusted,
            });
        }

        candidates.sort_by(|a, b| {
            b.path
                .depth()
                .cmp(&a.path.depth())
                .then_with(|| a.path.as_str().cmp(b.path.as_str()))
        });

        for candidate in candidates {
            match (self.identity)(candidate.path.as_path()) {
                Ok(current) if current == candidate.inode => {
                    log::debug!("{target} trusted via {}", candidate.path);
                    return Ok(TrustStatus::Trusted {
                        trusted_path: candidate.path,
                    });
                }
                Ok(_) => log::debug!("trust for {} is stale", candidate.path),
                Err(e) if e.is_not_found() => {
                    log::debug!("trusted directory {} is gone", candidate.path);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(TrustStatus::NotTrusted {
            reason: NotTrustedReason::InodeMismatch,
        })
    }

    /// Every grant, ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn list(&mut self) -> Result<Vec<TrustRecord>> {
        let mut records = self.storage.get_all_trust_records()?;
        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}
