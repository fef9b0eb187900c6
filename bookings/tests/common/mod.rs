//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the bookings library.

use bookings::database::{Database, DatabaseConfig};
use bookings::{ContactDetails, DateRange, FormFields};
use std::path::{Path, PathBuf};

/// Creates a test database in a fresh temporary directory.
///
/// The directory is leaked so the file outlives the returned handle.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = open_at(&path);

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Opens another handle on an existing database file.
#[allow(dead_code)]
pub fn open_at(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Path of the file behind `db`.
#[allow(dead_code)]
pub fn path_of(db: &Database) -> PathBuf {
    db.config().path.clone()
}

/// Parses an inclusive date range.
#[allow(dead_code)]
pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).unwrap()
}

/// Contact details that pass the reservation form.
#[allow(dead_code)]
pub fn contact() -> ContactDetails {
    ContactDetails {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: String::new(),
    }
}

/// Form fields carrying [`contact`].
#[allow(dead_code)]
pub fn valid_fields() -> FormFields {
    contact().to_fields()
}
