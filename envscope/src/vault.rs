//! The library entry point.
//!
//! A [`Vault`] ties the path resolver, the store and the engines together
//! under one [`Settings`] value.

use std::path::Path;
use std::time::SystemTime;

use crate::config::Settings;
use crate::error::Result;
use crate::hook::{
    apply_diff, compute_diff, format_message, generate_shell_commands, HookOptions, HookOutcome,
    HookState, HookStateFile,
};
use crate::path::{CanonicalPath, PathResolver};
use crate::secrets::{ResolvedMap, ResolvedSecret, ScopeSummary, SecretResolver};
use crate::store::{Storage, Store};
use crate::trust::{TrustEngine, TrustGrant, TrustRecord, TrustStatus};

/// Directory-scoped secrets with trust-gated shell loading.
///
/// The store opens on first use and closes on [`Vault::close`] or drop.
///
/// # Examples
///
/// ```no_run
/// use envscope::config::ConfigBuilder;
/// use envscope::Vault;
/// use std::path::Path;
///
/// let settings = ConfigBuilder::new().build().unwrap();
/// let mut vault = Vault::open(settings).unwrap();
///
/// vault.set("DB", "x", Path::new("/root")).unwrap();
/// vault.block("DB", Path::new("/root/app/tests")).unwrap();
/// assert!(vault.get("DB", Path::new("/root/app")).unwrap().is_some());
/// assert!(vault.get("DB", Path::new("/root/app/tests")).unwrap().is_none());
/// vault.close().unwrap();
/// ```
pub struct Vault<S: Storage = Store> {
    settings: Settings,
    paths: PathResolver,
    storage: S,
    state_file: HookStateFile,
}

impl Vault<Store> {
    /// A vault backed by the database in `settings.data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the working directory is not absolute.
    pub fn open(settings: Settings) -> Result<Self> {
        let store = Store::new(settings.store_config());
        Self::with_storage(settings, store)
    }
}

impl<S: Storage> Vault<S> {
    /// A vault over an arbitrary storage backend.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPath` if the working directory is not absolute.
    pub fn with_storage(settings: Settings, storage: S) -> Result<Self> {
        Ok(Self {
            paths: settings.path_resolver()?,
            state_file: settings.hook_state_file(),
            settings,
            storage,
        })
    }

    /// The settings in effect.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The path resolver in effect.
    #[must_use]
    pub fn paths(&self) -> &PathResolver {
        &self.paths
    }

    /// Canonicalizes `path` the way secret operations do.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized.
    pub fn canonicalize(&self, path: &Path) -> Result<CanonicalPath> {
        self.paths.canonicalize(path, self.settings.follow_symlinks)
    }

    fn secrets(&mut self) -> SecretResolver<'_, S> {
        SecretResolver::new(&mut self.storage, &self.paths)
            .follow_symlinks(self.settings.follow_symlinks)
    }

    fn trust_engine(&mut self) -> TrustEngine<'_, S> {
        TrustEngine::new(&mut self.storage, &self.paths)
    }

    /// Every secret visible from `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be canonicalized or storage fails.
    pub fn resolve(&mut self, dir: &Path) -> Result<ResolvedMap> {
        self.secrets().resolve(dir)
    }

    /// The secret `key` as seen from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any resolution error.
    pub fn get(&mut self, key: &str, dir: &Path) -> Result<Option<ResolvedSecret>> {
        self.secrets().get(key, dir)
    }

    /// Every secret visible from `dir`, sorted by key.
    ///
    /// # Errors
    ///
    /// Returns an error if resolution fails.
    pub fn list(&mut self, dir: &Path) -> Result<Vec<ResolvedSecret>> {
        self.secrets().list(dir)
    }

    /// Every scope with its own entries.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn scopes(&mut self) -> Result<Vec<ScopeSummary>> {
        self.secrets().scopes()
    }

    /// Stores `value` for `key` at `scope`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn set(&mut self, key: &str, value: &str, scope: &Path) -> Result<CanonicalPath> {
        self.secrets().set(key, value, scope)
    }

    /// Blocks inheritance of `key` at and below `scope`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn block(&mut self, key: &str, scope: &Path) -> Result<CanonicalPath> {
        self.secrets().block(key, scope)
    }

    /// Deletes the entry for `key` at exactly `scope`. Returns whether one
    /// existed.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKeyFormat` for a malformed key, or any storage error.
    pub fn remove(&mut self, key: &str, scope: &Path) -> Result<bool> {
        self.secrets().remove(key, scope)
    }

    /// Trusts an existing directory and its subtree.
    ///
    /// # Errors
    ///
    /// Returns `PathNotFound` if the directory does not exist, or any storage
    /// or filesystem error.
    pub fn trust(&mut self, path: &Path) -> Result<TrustGrant> {
        self.trust_engine().trust(path)
    }

    /// Revokes trust for exactly `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be canonicalized or storage fails.
    pub fn untrust(&mut self, path: &Path) -> Result<bool> {
        self.trust_engine().untrust(path)
    }

    /// Whether `path` is covered by a valid trust grant.
    ///
    /// # Errors
    ///
    /// Returns an error for storage or unexpected filesystem failures.
    pub fn is_trusted(&mut self, path: &Path) -> Result<TrustStatus> {
        self.trust_engine().is_trusted(path)
    }

    /// Every trust grant, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if storage fails.
    pub fn list_trusted(&mut self) -> Result<Vec<TrustRecord>> {
        self.trust_engine().list()
    }

    /// Runs the shell hook for `cwd` against the persisted hook state.
    ///
    /// Never fails: on any error the outcome carries a warning and no
    /// commands, and the stored state is left as it was.
    pub fn hook(&mut self, cwd: &Path, options: &HookOptions) -> HookOutcome {
        let run = self.state_file.load().and_then(|previous| {
            let (outcome, next) = self.try_hook(cwd, &previous, options)?;
            self.state_file.save(&next)?;
            Ok(outcome)
        });
        run.unwrap_or_else(|e| {
            log::warn!("hook for {} failed: {e}", cwd.display());
            HookOutcome::failed(e.to_string())
        })
    }

    /// Runs the shell hook against caller-held state.
    ///
    /// Returns the outcome and the state to pass next time. On error the
    /// outcome carries a warning and `previous` is returned unchanged.
    pub fn hook_with_state(
        &mut self,
        cwd: &Path,
        previous: &HookState,
        options: &HookOptions,
    ) -> (HookOutcome, HookState) {
        self.try_hook(cwd, previous, options).unwrap_or_else(|e| {
            log::warn!("hook for {} failed: {e}", cwd.display());
            (HookOutcome::failed(e.to_string()), previous.clone())
        })
    }

    fn try_hook(
        &mut self,
        cwd: &Path,
        previous: &HookState,
        options: &HookOptions,
    ) -> Result<(HookOutcome, HookState)> {
        let dir = self.canonicalize(cwd)?;
        let status = self.trust_engine().is_trusted(cwd)?;

        // Untrusted directories resolve to nothing, so anything loaded earlier
        // is unloaded
        let resolved = if status.is_trusted() {
            self.secrets().resolve_canonical(&dir)?
        } else {
            log::debug!("{dir} is not trusted: {:?}", status.reason());
            ResolvedMap::new()
        };

        let diff = compute_diff(
            previous,
            &resolved,
            &options.live_env,
            self.settings.conflict_policy,
        );
        let next = apply_diff(previous, &diff, &dir, SystemTime::now());

        let outcome = HookOutcome {
            commands: generate_shell_commands(&diff, options.shell),
            message: format_message(&diff, options.use_color && self.settings.color),
            trusted: status.is_trusted(),
            not_trusted_reason: status.reason(),
            loaded_secrets: diff.set,
            unloaded_keys: diff.unset,
            warning: None,
        };
        Ok((outcome, next))
    }

    /// Forgets what the hook has loaded. Returns whether state existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file cannot be removed.
    pub fn reset_hook_state(&self) -> Result<bool> {
        self.state_file.clear()
    }

    /// The persisted hook state.
    ///
    /// # Errors
    ///
    /// Returns an error if the state file cannot be read.
    pub fn hook_state(&self) -> Result<HookState> {
        self.state_file.load()
    }

    /// Closes the store. Idempotent; later store operations fail with
    /// `StoreClosed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection does not close cleanly.
    pub fn close(&mut self) -> Result<()> {
        self.storage.close()
    }
}
