//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading bookings configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "bookings.yaml";

/// Private project configuration file name, overriding [`PROJECT_CONFIG_FILE`].
pub const LOCAL_CONFIG_FILE: &str = "bookings.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use bookings::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.bookings/config.yaml` (precedence 1)
    /// 2. `bookings.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `bookings.local.yaml` in the same directory (precedence 3)
    ///
    /// The `data_dir` parameter allows overriding where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, data_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(data_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(data_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match data_dir {
            Some(dir) => dir.join("config.yaml"),
            None => crate::database::default_data_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either file.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "maximum_lock_wait_seconds: 9\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.maximum_lock_wait_seconds, Some(9));
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "disable_autoinit: false\n").unwrap();
        fs::write(temp_dir.path().join(LOCAL_CONFIG_FILE), "disable_autoinit: true\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[0].precedence, 2);
        assert_eq!(configs[1].config.disable_autoinit, Some(true));
    }

    #[test]
    fn test_discover_stops_at_first_config() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("child");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "maximum_lock_wait_seconds: 3\n")
            .unwrap();

        let configs = ConfigLoader::discover_project_configs(&child).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].config.maximum_lock_wait_seconds, Some(3));
    }

    #[test]
    fn test_load_all_reads_user_config_from_data_dir() {
        let data_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        fs::write(data_dir.path().join("config.yaml"), "session:\n  lifetime_hours: 1\n").unwrap();
        fs::write(work_dir.path().join(PROJECT_CONFIG_FILE), "disable_autoinit: true\n").unwrap();

        let sources = ConfigLoader::load_all(work_dir.path(), Some(data_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
