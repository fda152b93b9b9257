//! Configuration merging.

use crate::config::schema::{Config, HookConfig};

/// Merges configuration layers.
///
/// # Examples
///
/// ```
/// use envscope::config::{Config, ConfigMerger};
///
/// let low = Config { busy_timeout_ms: Some(100), ..Default::default() };
/// let high = Config { busy_timeout_ms: Some(200), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.busy_timeout_ms, Some(200));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `source` into `target`; every field `source` sets wins.
    ///
    /// The `hook` section merges field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.follow_symlinks.is_some() {
            target.follow_symlinks = source.follow_symlinks;
        }

        if source.busy_timeout_ms.is_some() {
            target.busy_timeout_ms = source.busy_timeout_ms;
        }

        if let Some(ref source_hook) = source.hook {
            let hook = target.hook.get_or_insert_with(HookConfig::default);
            if source_hook.conflict_policy.is_some() {
                hook.conflict_policy = source_hook.conflict_policy;
            }
            if source_hook.color.is_some() {
                hook.color = source_hook.color;
            }
        }
    }
}
