//! Configuration builder.
//!
//! Collects configuration from files, the environment and programmatic
//! overrides, merges it in precedence order and validates the result.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from all configured sources.
///
/// # Examples
///
/// ```
/// use bookings::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         maximum_lock_wait_seconds: Some(12),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.maximum_lock_wait_seconds, Some(12));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Vec<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory project configuration discovery starts from.
    ///
    /// Defaults to the current working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the data directory holding the user `config.yaml`.
    ///
    /// Defaults to `~/.bookings`.
    #[must_use]
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Skips all configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips `BOOKINGS_*` environment overrides.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Adds a programmatic override, applied after every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Loads, merges and validates the configuration.
    ///
    /// Each file is validated on its own first, so errors name the file
    /// they came from.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// variable is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config)?;
                log::debug!("loaded configuration from {}", source.path.display());
            }
            config = ConfigMerger::merge(sources);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for overrides in &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
