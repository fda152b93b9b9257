//! Trust-gated loading.
//!
//! Secrets are only loaded into a shell automatically inside a trusted
//! directory. Trust granted on a directory covers its whole subtree and is
//! bound to the directory's filesystem identity, so a directory that is
//! deleted and recreated must be trusted again.

mod engine;
mod identity;
mod types;

pub use engine::{IdentityReader, TrustEngine};
pub use identity::read_identity;
pub use types::{NotTrustedReason, TrustGrant, TrustRecord, TrustStatus};
