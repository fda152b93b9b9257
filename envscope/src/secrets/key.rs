//! Secret key validation.

use crate::error::{Error, Result};

/// Whether `key` matches `^[A-Za-z_][A-Za-z0-9_]*$`.
///
/// # Examples
///
/// ```
/// use envscope::secrets::is_valid_key;
///
/// assert!(is_valid_key("DATABASE_URL"));
/// assert!(is_valid_key("_private"));
/// assert!(!is_valid_key("9LIVES"));
/// assert!(!is_valid_key("WITH-DASH"));
/// assert!(!is_valid_key(""));
/// ```
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Validates a key, failing with [`Error::InvalidKeyFormat`].
///
/// Both cases are accepted; upper-case is only a convention.
///
/// # Errors
///
/// Returns `InvalidKeyFormat` if the key does not match the allowed pattern.
pub fn validate_key(key: &str) -> Result<()> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(Error::InvalidKeyFormat {
            key: key.to_string(),
        })
    }
}

/// Whether a valid key follows the upper-case convention.
#[must_use]
pub fn is_conventional_key(key: &str) -> bool {
    is_valid_key(key) && !key.chars().any(|c| c.is_ascii_lowercase())
}
