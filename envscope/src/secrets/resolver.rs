//! Scope merging and secret reads/writes.

use std::path::Path;

use crate::error::Result;
use crate::path::{CanonicalPath, PathResolver};
use crate::store::Storage;

use super::key::validate_key;
use super::types::{ResolvedMap, ResolvedSecret, ScopeEntry, ScopeSummary, SecretValue};

/// Merge scope definitions into the secrets visible from the deepest scope.
///
/// Scopes are applied shallow to deep (by depth, then folded path). A value
/// sets or overrides its key; a tombstone removes the key from the result.
/// The caller supplies only scopes on one ancestor chain.
///
/// # Examples
///
/// ```
/// use envscope::path::{CanonicalPath, PathStyle};
/// use envscope::secrets::merge_scopes;
/// use envscope::{ScopeEntry, SecretValue};
/// use std::time::SystemTime;
///
/// let root = CanonicalPath::parse(PathStyle::Posix, "/root").unwrap();
/// let app = CanonicalPath::parse(PathStyle::Posix, "/root/app").unwrap();
/// let entry = |scope: &CanonicalPath, value: SecretValue| ScopeEntry {
///     scope_path: scope.clone(),
///     key: "DB".into(),
///     value,
///     updated_at: SystemTime::now(),
/// };
///
/// let merged = merge_scopes(vec![
///     (app.clone(), vec![entry(&app, SecretValue::Tombstone)]),
///     (root.clone(), vec![entry(&root, SecretValue::Value("x".into()))]),
/// ]);
/// assert!(merged.is_empty());
/// ```
pub fn merge_scopes<I>(scopes: I) -> ResolvedMap
where
    I: IntoIterator<Item = (CanonicalPath, Vec<ScopeEntry>)>,
{
    let mut ordered: Vec<_> = scopes.into_iter().collect();
    ordered.sort_by(|(a, _), (b, _)| a.depth().cmp(&b.depth()).then_with(|| a.cmp(b)));

    let mut resolved = ResolvedMap::new();
    for (scope, entries) in ordered {
        for entry in entries {
            match entry.value {
                SecretValue::Tombstone => {
                    resolved.remove(&entry.key);
                }
                SecretValue::Value(value) => {
                    resolved.insert(
                        entry.key.clone(),
                        ResolvedSecret {
                            key: entry.key,
                            value,
                            source_path: scope.clone(),
                        },
                    );
                }
            }
        }
    }
    resolved
}

/// Reads and writes secrets for directories.
///
/// # Examples
///
/// ```no_run
/// use envscope::path::{PathResolver, PathStyle};
/// use envscope::secrets::SecretResolver;
/// use envscope::store::{Store, StoreConfig};
/// use std::path::Path;
///
/// let paths = PathResolver::new(PathStyle::native(), Path::new("/srv")).unwrap();
/// let mut store = Store::new(StoreConfig::new("/tmp/envscope.db"));
/// let mut secrets = SecretResolver::new(&mut store, &paths);
///
/// secrets.set("DB_URL", "postgres://localhost", Path::new("/srv/app")).unwrap();
/// let found = secrets.get("DB_URL", Path::new("/srv/app/web")).unwrap();
/// assert_eq!(found.unwrap().value, "postgres://localhost");
/// ```
pub struct SecretResolver<'a, S: ?Sized> {
    storage: &'a mut S,
    paths: &'a PathResolver,
    follow_symlinks: bool,
}

impl<'a, S: Storage + ?Sized> SecretResolver<'a, S> {
    /// Creates a resolver that follows symlinks when canonicalizing.
    pub fn new(storage: &'a mut S, paths: &'a PathResolver) -> Self {
        Self {
            storage,
            paths,
            follow_symlinks: true,
        }
    }

    /// Sets whether directories are canonicalized through symlinks.
    #[must_use]
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Canonicalize a directory the way every operation here does.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized.
    pub fn canonical_dir(&self, dir: &Path) -> Result<CanonicalPath> {
        self.paths.canonicalize(dir, self.follow_symlinks)
    }

    /// Every secret visible from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be canonicalized or storage fails.
    pub fn resolve(&mut self, dir: &Path) -> Result<ResolvedMap> {
        let target = self.canonical_dir(dir)?;
        self.resolve_canonical(&target)
    }

    /// Every secret visible from an already-canonical directory.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn resolve_canonical(&mut self, target: &CanonicalPath) -> Result<ResolvedMap> {
        let scopes = self.storage.get_ancestor_scope_paths(target)?;
        let mut chain = Vec::with_capacity(scopes.len());
        for scope in scopes {
            let entries = self.storage.get_scope_secrets(&scope)?;
            chain.push((scope, entries));
        }
        Ok(merge_scopes(chain))
    }

    /// The secret `key` as seen from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any resolution error.
    pub fn get(&mut self, key: &str, dir: &Path) -> Result<Option<ResolvedSecret>> {
        validate_key(key)?;
        Ok(self.resolve(dir)?.remove(key))
    }

    /// Every secret visible from `dir`, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails.
    pub fn list(&mut self, dir: &Path) -> Result<Vec<ResolvedSecret>> {
        Ok(self.resolve(dir)?.into_values().collect())
    }

    /// Stores `value` for `key` at `scope`. Returns the canonical scope.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn set(&mut self, key: &str, value: &str, scope: &Path) -> Result<CanonicalPath> {
        self.write(key, &SecretValue::Value(value.to_string()), scope)
    }

    /// Stores a tombstone for `key` at `scope`, hiding inherited values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn block(&mut self, key: &str, scope: &Path) -> Result<CanonicalPath> {
        self.write(key, &SecretValue::Tombstone, scope)
    }

    /// Deletes the entry (value or tombstone) for `key` at exactly `scope`.
    ///
    /// Returns whether an entry existed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn remove(&mut self, key: &str, scope: &Path) -> Result<bool> {
        validate_key(key)?;
        let scope = self.canonical_dir(scope)?;
        self.storage.remove_key(&scope, key)
    }

    /// Every scope with its own entries, ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn scopes(&mut self) -> Result<Vec<ScopeSummary>> {
        let mut summaries = Vec::new();
        for path in self.storage.get_all_scope_paths()? {
            let entries = self.storage.get_scope_secrets(&path)?;
            summaries.push(ScopeSummary { path, entries });
        }
        summaries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(summaries)
    }

    fn write(&mut self, key: &str, value: &SecretValue, scope: &Path) -> Result<CanonicalPath> {
        validate_key(key)?;
        let scope = self.canonical_dir(scope)?;
        self.storage.set_secret(&scope, key, value)?;
        log::debug!("stored {key} at {scope}");
        Ok(scope)
    }
}
