#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # envscope
//!
//! A library for directory-scoped secrets with trust-gated shell loading.
//!
//! Secrets are attached to directories and resolved for any working
//! directory by walking its ancestor chain: deeper scopes override shallower
//! ones, and a tombstone blocks inheritance below its scope. A shell hook
//! loads the resolved secrets into the environment, but only inside
//! directories the user has explicitly trusted.
//!
//! ## Core Types
//!
//! - [`Vault`]: the entry point tying everything together
//! - [`path::PathResolver`] and [`path::CanonicalPath`]: platform-aware paths
//! - [`secrets::SecretResolver`]: scope merging
//! - [`trust::TrustEngine`]: trust grants with staleness detection
//! - [`hook`]: diffing and shell commands for directory changes
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use envscope::path::{CanonicalPath, PathStyle};
//!
//! let home = CanonicalPath::parse(PathStyle::Posix, "/home/user").unwrap();
//! let project = CanonicalPath::parse(PathStyle::Posix, "/home/user/app").unwrap();
//! let other = CanonicalPath::parse(PathStyle::Posix, "/home/username").unwrap();
//!
//! assert!(home.is_ancestor_of(&project));
//! assert!(!home.is_ancestor_of(&other));
//! ```

pub mod config;
pub mod error;
pub mod hook;
pub mod logging;
pub mod output;
pub mod path;
pub mod secrets;
pub mod store;
pub mod trust;
pub mod vault;

// Re-export key types at crate root for convenience
pub use config::{ConfigBuilder, Settings};
pub use error::{Error, Result};
pub use hook::{ConflictPolicy, HookOptions, HookOutcome, HookState};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, ShellType};
pub use path::{CanonicalPath, PathRelationship, PathResolver, PathStyle};
pub use secrets::{ResolvedMap, ResolvedSecret, ScopeEntry, SecretValue};
pub use store::{Store, StoreConfig};
pub use trust::{NotTrustedReason, TrustStatus};
pub use vault::Vault;
