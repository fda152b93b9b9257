//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound on the busy timeout; a hook must never hang a shell for long.
pub const MAX_BUSY_TIMEOUT_MS: u64 = 60_000;

/// Validates merged configuration.
///
/// # Examples
///
/// ```
/// use envscope::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// let zero = Config { busy_timeout_ms: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(timeout) = config.busy_timeout_ms {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "busy_timeout_ms".into(),
                    message: "timeout must be greater than 0".into(),
                });
            }
            if timeout > MAX_BUSY_TIMEOUT_MS {
                return Err(Error::Validation {
                    field: "busy_timeout_ms".into(),
                    message: format!("timeout must be at most {MAX_BUSY_TIMEOUT_MS}"),
                });
            }
        }
        Ok(())
    }
}
