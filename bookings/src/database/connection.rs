//! Database connection management.
//!
//! This module provides the main database connection type with proper
//! initialization and PRAGMA settings for concurrent `SQLite` access.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;

/// A database connection wrapper with configuration.
///
/// Each `Database` owns one `SQLite` connection. Separate processes or
/// threads open their own `Database` on the same file; WAL mode and the
/// busy timeout let them share it.
///
/// # Examples
///
/// ```no_run
/// use bookings::database::{Database, DatabaseConfig};
///
/// let config = DatabaseConfig::new("/tmp/bookings.db");
/// let db = Database::open(config).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    pub(super) config: DatabaseConfig,
}

impl Database {
    /// Opens a database connection with the given configuration.
    ///
    /// This function will:
    /// - Create the parent directory if `auto_create` is enabled
    /// - Open the database with appropriate flags
    /// - Set WAL mode, busy timeout and foreign key enforcement
    /// - Initialize or verify the database schema
    /// - Seed any configured rooms missing from the catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The database does not exist and `auto_create` is disabled
    /// - The database file cannot be opened
    /// - The parent directory cannot be created
    /// - PRAGMA settings cannot be applied
    /// - Schema initialization or verification fails
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        if !config.path.exists() {
            if !config.auto_create {
                return Err(Error::DataDirectoryNotFound {
                    path: config
                        .path
                        .parent()
                        .map_or_else(|| config.path.clone(), std::path::Path::to_path_buf),
                });
            }
            if let Some(parent) = config.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let flags = if config.auto_create {
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_NO_MUTEX
        } else {
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX
        };

        let conn = Connection::open_with_flags(&config.path, flags)?;

        // busy_timeout first so the WAL switch itself waits on a locked file
        conn.busy_timeout(config.busy_timeout)?;
        // PRAGMA journal_mode returns a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;")?;

        super::migrations::check_schema_compatibility(&conn)?;
        super::migrations::seed_rooms(&conn, &config.rooms)?;

        log::debug!("opened bookings database at {}", config.path.display());
        Ok(Self { conn, config })
    }

    /// Returns a reference to the underlying `SQLite` connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Returns the configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
