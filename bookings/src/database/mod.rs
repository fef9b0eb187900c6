//! Database layer for persistent storage of rooms, reservations and
//! sessions.
//!
//! This module provides a SQLite-based storage layer covering connection
//! management, schema versioning, the room catalog, reservations with
//! their restrictions, and per-visitor session values.
//!
//! # Examples
//!
//! ```no_run
//! use bookings::database::{Database, DatabaseConfig};
//! use bookings::DateRange;
//!
//! let config = DatabaseConfig::new("/tmp/bookings.db");
//! let mut db = Database::open(config).unwrap();
//!
//! for room in Database::list_rooms(db.connection()).unwrap() {
//!     println!("{} {}", room.id(), room.name());
//! }
//!
//! let range = DateRange::parse("2050-03-01", "2050-03-04").unwrap();
//! db.block_room(1, &range).unwrap();
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
mod sessions;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{
    default_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DEFAULT_SESSION_LIFETIME,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema, seed_rooms};
