//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::reservation::ContactDetails;

/// Creates a temporary test database seeded with the default rooms.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    db
}

/// Contact details that pass the reservation form.
#[must_use]
pub fn sample_contact() -> ContactDetails {
    ContactDetails {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        phone: "555-0100".into(),
    }
}
