//! Database configuration and connection parameters.
//!
//! This module provides configuration types for database connections,
//! including path resolution, lock and session timeouts, and the rooms
//! seeded into a fresh store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::room::{default_rooms, Room};

/// File name of the bookings database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "bookings.db";

/// Default lifetime of a visitor session.
pub const DEFAULT_SESSION_LIFETIME: Duration = Duration::from_secs(24 * 60 * 60);

/// Configuration for database connections.
///
/// # Examples
///
/// ```
/// use bookings::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/bookings.db")
///     .with_busy_timeout(Duration::from_secs(10))
///     .with_session_lifetime(Duration::from_secs(3600));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Busy timeout for database lock contention.
    pub busy_timeout: Duration,
    /// Whether to automatically create the database if it doesn't exist.
    pub auto_create: bool,
    /// How long a session value stays readable after it was last written.
    pub session_lifetime: Duration,
    /// Rooms inserted into the catalog when missing.
    pub rooms: Vec<Room>,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default settings.
    ///
    /// Default settings:
    /// - `busy_timeout`: 5000ms
    /// - `auto_create`: true
    /// - `session_lifetime`: 24 hours
    /// - `rooms`: General's Quarters and Major's Suite
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: Duration::from_millis(5000),
            auto_create: true,
            session_lifetime: DEFAULT_SESSION_LIFETIME,
            rooms: default_rooms(),
        }
    }

    /// Sets the busy timeout duration.
    ///
    /// The busy timeout determines how long the database connection will
    /// wait when encountering a locked database before returning an error.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Sets the session lifetime.
    #[must_use]
    pub fn with_session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    /// Sets the rooms seeded into the catalog.
    #[must_use]
    pub fn with_rooms(mut self, rooms: Vec<Room>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Refuses to create a database that does not exist yet.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// Returns the default data directory, `~/.bookings`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "home_directory".into(),
        message: "Cannot determine home directory".into(),
    })?;
    Ok(home.join(".bookings"))
}

/// Resolves the database path using environment variables or defaults.
///
/// The resolution order is:
/// 1. `$BOOKINGS_DATA_DIR/bookings.db` if `BOOKINGS_DATA_DIR` is set
/// 2. `~/.bookings/bookings.db` otherwise
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined and
/// `BOOKINGS_DATA_DIR` is not set.
pub fn resolve_database_path() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("BOOKINGS_DATA_DIR") {
        Ok(PathBuf::from(data_dir).join(DATABASE_FILE_NAME))
    } else {
        Ok(default_data_dir()?.join(DATABASE_FILE_NAME))
    }
}
