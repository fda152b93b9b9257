//! Builder producing [`Settings`] from every configuration layer.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::config::Settings;
use crate::error::Result;
use crate::path::PathStyle;
use crate::store::{default_data_dir, DEFAULT_BUSY_TIMEOUT};

/// Collects configuration layers and resolves them into [`Settings`].
///
/// # Examples
///
/// ```
/// use envscope::config::{Config, ConfigBuilder};
/// use std::path::Path;
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_data_dir(Path::new("/tmp/envscope"))
///     .with_working_dir(Path::new("/tmp"))
///     .with_config(Config { follow_symlinks: Some(false), ..Default::default() })
///     .build()
///     .unwrap();
/// assert!(!settings.follow_symlinks);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    data_dir: Option<PathBuf>,
    working_dir: Option<PathBuf>,
    path_style: Option<PathStyle>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// A builder that reads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `dir` as the data directory, ahead of `ENVSCOPE_DATA_DIR`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Resolves relative paths against `dir` instead of the process cwd.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Interprets paths in `style` instead of the platform's.
    #[must_use]
    pub fn with_path_style(mut self, style: PathStyle) -> Self {
        self.path_style = Some(style);
        self
    }

    /// Applies `config` on top of every other layer.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Ignores the user config file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignores environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merges the layers and validates the result.
    ///
    /// Precedence, lowest first: defaults, `<data_dir>/config.yaml`,
    /// environment variables, [`ConfigBuilder::with_config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a layer cannot be read or parsed, if the merged
    /// values are invalid, or if no data directory can be determined.
    pub fn build(self) -> Result<Settings> {
        let data_dir = match self.data_dir {
            Some(dir) => dir,
            None => match (!self.skip_env).then(EnvironmentConfig::data_dir).flatten() {
                Some(dir) => dir,
                None => default_data_dir()?,
            },
        };
        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => env::current_dir()?,
        };

        let mut config = Config::default();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(&data_dir)? {
                ConfigMerger::merge_into(&mut config, &source.config);
            }
        }
        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }
        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;

        let hook = config.hook.unwrap_or_default();
        Ok(Settings {
            data_dir,
            working_dir,
            path_style: self.path_style.unwrap_or_else(PathStyle::native),
            follow_symlinks: config.follow_symlinks.unwrap_or(true),
            busy_timeout: config
                .busy_timeout_ms
                .map_or(DEFAULT_BUSY_TIMEOUT, Duration::from_millis),
            conflict_policy: hook.conflict_policy.unwrap_or_default(),
            color: hook.color.unwrap_or(true),
        })
    }
}
