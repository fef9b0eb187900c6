//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management and output
//! formatting.

use crate::error::CliError;
use bookings::database::{resolve_database_path, DATABASE_FILE_NAME};
use bookings::{
    Config, ConfigBuilder, Database, DatabaseConfig, DateRange, FormValidator, Reservation,
    ReservationFlow, SessionId,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,

    /// Session id carrying the reservation draft.
    pub session: String,

    /// Print results as JSON.
    pub json: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration files
/// 3. Built-in defaults (lowest priority)
///
/// Global options are applied on top when the database is opened.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the database path from global options.
fn database_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match global.data_dir {
        Some(ref data_dir) => Ok(data_dir.join(DATABASE_FILE_NAME)),
        None => resolve_database_path().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = database_path(global)?;

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), |s| Duration::from_secs(s.into()));

    let mut db_config = DatabaseConfig::new(db_path)
        .with_busy_timeout(busy_timeout)
        .with_session_lifetime(config.session_lifetime())
        .with_rooms(config.room_catalog());
    if global.disable_autoinit || config.autoinit_disabled() {
        db_config = db_config.without_auto_create();
    }

    // DataDirectoryNotFound maps to NoDataDirectory
    Database::open(db_config).map_err(CliError::from)
}

/// Parse the `--session` option.
pub fn session_id(global: &GlobalOptions) -> Result<SessionId, CliError> {
    SessionId::new(global.session.as_str())
        .map_err(|_| CliError::InvalidArguments("--session cannot be empty".into()))
}

/// Parse a `--start`/`--end` pair.
pub fn parse_range(start: &str, end: &str) -> Result<DateRange, CliError> {
    DateRange::parse(start, end).map_err(CliError::from)
}

/// Run `f` against a booking flow for the current session.
///
/// The flow writes bookings through one database handle and keeps the
/// session draft through a second handle on the same file.
pub fn with_flow<T>(
    global: &GlobalOptions,
    f: impl FnOnce(&mut ReservationFlow<'_, Database>, &SessionId) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let config = load_configuration(global)?;
    let session = session_id(global)?;
    let mut db = open_database(global, &config)?;
    let sessions = open_database(global, &config)?;
    log::debug!("session {session} using {}", db.config().path.display());

    let mut flow = ReservationFlow::new(&mut db, &sessions)
        .with_validator(FormValidator::reservation_form(config.first_name_min_length()));
    f(&mut flow, &session)
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(bookings::Error::from)?;
    println!("{json}");
    Ok(())
}

/// Print a reservation as labelled lines.
pub fn print_reservation(reservation: &Reservation) {
    let range = reservation.range();
    let contact = reservation.contact();
    if let Some(id) = reservation.id() {
        println!("Reservation: {id}");
    }
    println!("Room: {}", reservation.room().name());
    println!("Arrival: {}", bookings::date::format_date(range.start()));
    println!("Departure: {}", bookings::date::format_date(range.end()));
    println!("Name: {} {}", contact.first_name, contact.last_name);
    println!("Email: {}", contact.email);
    if !contact.phone.is_empty() {
        println!("Phone: {}", contact.phone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(session: &str) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir: Some(PathBuf::from("/tmp/bookings-test")),
            busy_timeout: None,
            disable_autoinit: false,
            session: session.into(),
            json: false,
        }
    }

    #[test]
    fn test_database_path_uses_data_dir() {
        assert_eq!(
            database_path(&global("s")).unwrap(),
            PathBuf::from("/tmp/bookings-test/bookings.db")
        );
    }

    #[test]
    fn test_session_id_rejects_blank() {
        assert!(matches!(
            session_id(&global(" ")),
            Err(CliError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_parse_range_rejects_reversed() {
        assert!(parse_range("2050-01-03", "2050-01-01").is_err());
    }
}
