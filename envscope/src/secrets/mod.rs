//! Directory-scoped secrets.
//!
//! A secret is attached to a scope (a directory) and is visible from that
//! directory and everything beneath it. Resolving a directory walks its
//! ancestor chain from the root down: deeper definitions override shallower
//! ones, and a tombstone hides a key at and below its scope until a deeper
//! scope sets it again.
//!
//! # Examples
//!
//! Given `/root → {DB=x}`, `/root/app → {API=parent}` and
//! `/root/app/tests → {API=<tombstone>}`, resolving `/root/app/tests` yields
//! only `DB` (from `/root`), while `/root/app` yields both `DB` and `API`.

mod key;
mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use key::{is_conventional_key, is_valid_key, validate_key};
pub use resolver::{merge_scopes, SecretResolver};
pub use types::{ResolvedMap, ResolvedSecret, ScopeEntry, ScopeSummary, SecretValue};
