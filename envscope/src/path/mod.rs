//! Path canonicalization and ancestry.
//!
//! Every directory the library stores or looks up is first turned into a
//! [`CanonicalPath`]: absolute, separator-normalized, with `.` and `..`
//! resolved. Paths are strings interpreted under an explicit [`PathStyle`],
//! so the Windows rules (drive roots, `\`, case-insensitive comparison) are
//! independent of the host.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Lexical only: tilde expansion, joining onto the resolver's working
//! directory, and `.`/`..` resolution. `..` at a root stays at the root.
//!
//! ## Canonicalization
//!
//! Optionally follows symlinks through the filesystem. A path that does not
//! exist keeps its lexical form; [`PathResolver::resolve_existing`] is the
//! strict variant.
//!
//! ## Ancestry
//!
//! Ancestor checks are segment-exact, and a root is its own parent.
//!
//! ```
//! use envscope::path::{PathRelationship, PathStyle};
//!
//! let rel = PathRelationship::between(PathStyle::Posix, "/home/user", "/home/user/project");
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod relationship;
pub mod resolver;
mod style;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use relationship::PathRelationship;
pub use resolver::PathResolver;
pub use style::PathStyle;
pub use types::CanonicalPath;
