//! Layered configuration.
//!
//! Settings are resolved from, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. The user config file, `<data_dir>/config.yaml`
//! 3. Environment variables (`ENVSCOPE_*`, `NO_COLOR`)
//! 4. Programmatic overrides (via `ConfigBuilder::with_config`)
//!
//! The data directory itself comes from `ConfigBuilder::with_data_dir`, then
//! `ENVSCOPE_DATA_DIR`, then the platform config directory.
//!
//! # Examples
//!
//! ```no_run
//! use envscope::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new().build().unwrap();
//! println!("data in {}", settings.data_dir.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
mod settings;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, HookConfig};
pub use settings::Settings;
pub use validator::ConfigValidator;
