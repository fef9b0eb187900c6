//! Database schema management and migrations.
//!
//! This module handles database schema initialization, version checking,
//! and seeding of the room catalog.

use rusqlite::{params, Connection};

use crate::error::{Error, Result};
use crate::room::Room;

use super::operations::now_unix;
use super::schema::{
    CREATE_METADATA_TABLE, CREATE_OVERLAP_TRIGGER, CREATE_RESERVATIONS_TABLE,
    CREATE_RESERVATION_ROOM_INDEX, CREATE_RESTRICTIONS_TABLE, CREATE_RESTRICTION_DATES_INDEX,
    CREATE_ROOMS_TABLE, CREATE_SESSIONS_TABLE, CREATE_SESSION_EXPIRY_INDEX,
    CURRENT_SCHEMA_VERSION, INSERT_ROOM, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// This function creates all tables, indices, the overlap trigger and
/// metadata for a fresh database.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use bookings::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    conn.execute(CREATE_METADATA_TABLE, [])?;

    conn.execute(CREATE_ROOMS_TABLE, [])?;
    conn.execute(CREATE_RESERVATIONS_TABLE, [])?;
    conn.execute(CREATE_RESTRICTIONS_TABLE, [])?;
    conn.execute(CREATE_SESSIONS_TABLE, [])?;

    conn.execute(CREATE_RESTRICTION_DATES_INDEX, [])?;
    conn.execute(CREATE_RESERVATION_ROOM_INDEX, [])?;
    conn.execute(CREATE_SESSION_EXPIRY_INDEX, [])?;

    conn.execute(CREATE_OVERLAP_TRIGGER, [])?;

    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;

    log::info!("initialized bookings schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than
/// "no rows returned" (which indicates version 0).
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
/// - `Err(_)` if a database error occurs
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value
            .parse::<i32>()
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => {
            // "no such table" on a brand new file
            if let rusqlite::Error::SqliteFailure(ref sqlite_err, _) = e {
                if sqlite_err.code == rusqlite::ErrorCode::Unknown {
                    return Ok(0);
                }
            }
            Err(e.into())
        }
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database (version 0) is initialized; any other version than
/// [`CURRENT_SCHEMA_VERSION`] is rejected.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] if the stored version is
/// older or newer than this library understands, or an error if schema
/// initialization or the version query fails.
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;

    if version == 0 {
        initialize_schema(conn)?;
    } else if version != CURRENT_SCHEMA_VERSION {
        log::warn!(
            "database schema version {version} does not match supported version {CURRENT_SCHEMA_VERSION}"
        );
        return Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION.unsigned_abs(),
            found: version.unsigned_abs(),
        });
    }

    Ok(())
}

/// Inserts any of `rooms` missing from the catalog.
///
/// Rooms are inserted in slice order; an id that is already present keeps
/// its stored name and position.
///
/// # Errors
///
/// Returns an error if an insert fails.
pub fn seed_rooms(conn: &Connection, rooms: &[Room]) -> Result<usize> {
    let now = now_unix();
    let mut inserted = 0;
    let mut stmt = conn.prepare(INSERT_ROOM)?;
    for room in rooms {
        inserted += stmt.execute(params![room.id(), room.name(), now])?;
    }
    if inserted > 0 {
        log::debug!("seeded {inserted} room(s) into the catalog");
    }
    Ok(inserted)
}
