//! Database schema definitions and SQL constants.
//!
//! Dates are stored as `YYYY-MM-DD` text, whose lexical order matches
//! calendar order, so range comparisons can be done directly in SQL.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Message raised by the overlap trigger on `room_restrictions`.
pub const OVERLAP_VIOLATION: &str = "room_restriction_overlap";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
///
/// `seq` records insertion order, which is the order rooms are listed in.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        seq INTEGER PRIMARY KEY AUTOINCREMENT,
        id INTEGER NOT NULL UNIQUE,
        room_name TEXT NOT NULL,
        created_at INTEGER NOT NULL
    )";

/// SQL statement to create the reservations table.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        created_at INTEGER NOT NULL,
        CHECK (start_date <= end_date)
    )";

/// SQL statement to create the room restrictions table.
pub const CREATE_RESTRICTIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS room_restrictions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_date TEXT NOT NULL,
        end_date TEXT NOT NULL,
        room_id INTEGER NOT NULL REFERENCES rooms(id),
        reservation_id INTEGER REFERENCES reservations(id),
        created_at INTEGER NOT NULL,
        CHECK (start_date <= end_date)
    )";

/// SQL statement to create the sessions table.
pub const CREATE_SESSIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS sessions (
        session_id TEXT NOT NULL,
        key TEXT NOT NULL,
        value TEXT NOT NULL,
        expires_at INTEGER NOT NULL,
        PRIMARY KEY (session_id, key)
    )";

/// Trigger rejecting a restriction that overlaps another on the same room.
///
/// This is the per-room exclusion constraint: whichever of two concurrent
/// bookings inserts second is aborted.
pub const CREATE_OVERLAP_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS trg_room_restrictions_no_overlap
    BEFORE INSERT ON room_restrictions
    WHEN EXISTS (
        SELECT 1 FROM room_restrictions
        WHERE room_id = NEW.room_id
          AND start_date <= NEW.end_date
          AND NEW.start_date <= end_date
    )
    BEGIN
        SELECT RAISE(ABORT, 'room_restriction_overlap');
    END";

/// Index backing the overlap query.
pub const CREATE_RESTRICTION_DATES_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_room_restrictions_room_dates ON room_restrictions(room_id, start_date, end_date)";

/// Index on reservations by room.
pub const CREATE_RESERVATION_ROOM_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room ON reservations(room_id)";

/// Index used when purging expired sessions.
pub const CREATE_SESSION_EXPIRY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_sessions_expires ON sessions(expires_at)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to seed a room, leaving existing rows untouched.
pub const INSERT_ROOM: &str =
    "INSERT OR IGNORE INTO rooms (id, room_name, created_at) VALUES (?, ?, ?)";
