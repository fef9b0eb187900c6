//! Configuration system for bookings.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of every source
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BOOKINGS_*`)
//! 3. Private project config (`bookings.local.yaml`)
//! 4. Project config (`bookings.yaml`)
//! 5. User config (`~/.bookings/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use bookings::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/site"))
//!     .build()
//!     .unwrap();
//!
//! for room in config.room_catalog() {
//!     println!("{} {}", room.id(), room.name());
//! }
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use bookings::config::{Config, ConfigBuilder, FormsConfig};
//!
//! let custom = Config {
//!     forms: Some(FormsConfig { first_name_min_length: Some(2) }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.first_name_min_length(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, FormsConfig, RoomConfig, SessionConfig};
pub use self::validator::ConfigValidator;
