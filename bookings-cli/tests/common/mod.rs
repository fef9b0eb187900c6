//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Shortcuts for the steps of a booking

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the binary reads that must not leak in from the host.
const ISOLATED_ENV: [&str; 8] = [
    "BOOKINGS_DATA_DIR",
    "BOOKINGS_BUSY_TIMEOUT",
    "BOOKINGS_DISABLE_AUTOINIT",
    "BOOKINGS_SESSION",
    "BOOKINGS_LOG_MODE",
    "BOOKINGS_SESSION_LIFETIME_HOURS",
    "BOOKINGS_FIRST_NAME_MIN_LENGTH",
    "BOOKINGS_MAXIMUM_LOCK_WAIT_SECONDS",
];

/// Test environment with isolated data directory.
///
/// This struct provides an isolated test environment with:
/// - A temporary directory used as the working directory
/// - A separate data directory for the bookings database
/// - Helper methods for common CLI operations
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the bookings data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on first use.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("bookings-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The command runs inside the temporary directory with the host's
    /// bookings environment variables removed.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("bookings").expect("Failed to find bookings binary");
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command builder for a named session.
    pub fn session(&self, session: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--session").arg(session);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Path of the bookings database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("bookings.db")
    }

    /// Write a project configuration file into the working directory.
    pub fn write_project_config(&self, yaml: &str) {
        std::fs::write(self.temp_path.join("bookings.yaml"), yaml)
            .expect("Failed to write project config");
    }

    /// Pick a room and dates for `session`, asserting success.
    pub fn book_room(&self, session: &str, room: i64, start: &str, end: &str) {
        self.session(session)
            .args(["book-room", "--room", &room.to_string()])
            .args(["--start", start, "--end", end])
            .assert()
            .success();
    }

    /// Submit a valid contact form for `session`.
    pub fn make_reservation(&self, session: &str) -> assert_cmd::assert::Assert {
        self.session(session)
            .arg("make-reservation")
            .args(["--first-name", "Ada"])
            .args(["--last-name", "Lovelace"])
            .args(["--email", "ada@example.com"])
            .assert()
    }

    /// Count the rows of a table in the bookings database.
    pub fn count_rows(&self, table: &str) -> i64 {
        let conn = rusqlite::Connection::open(self.database_path())
            .expect("Failed to open bookings database");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("Failed to count rows")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
