//! Database operations for rooms, reservations and restrictions.
//!
//! Read and write helpers take a plain `&Connection` so they can run either
//! directly or inside a transaction (a `Transaction` derefs to its
//! connection).

use rusqlite::types::Type;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::availability::RestrictionQuery;
use crate::date::{format_date, parse_date, DateRange};
use crate::error::{Error, Result};
use crate::reservation::{ContactDetails, Reservation, ReservationId, Restriction};
use crate::room::{Room, RoomCatalog, RoomId};

use super::connection::Database;
use super::schema::OVERLAP_VIOLATION;

const SELECT_ROOMS: &str = "SELECT id, room_name FROM rooms ORDER BY seq";

const SELECT_ROOM: &str = "SELECT id, room_name FROM rooms WHERE id = ?";

const COUNT_OVERLAPPING: &str = r"
    SELECT COUNT(*) FROM room_restrictions
    WHERE room_id = ?1 AND start_date <= ?3 AND ?2 <= end_date
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations
    (first_name, last_name, email, phone, start_date, end_date, room_id, created_at)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

const INSERT_RESTRICTION: &str = r"
    INSERT INTO room_restrictions
    (start_date, end_date, room_id, reservation_id, created_at)
    VALUES (?, ?, ?, ?, ?)
";

const SELECT_RESERVATION: &str = r"
    SELECT r.id, r.first_name, r.last_name, r.email, r.phone,
           r.start_date, r.end_date, r.room_id, rm.room_name
    FROM reservations r
    JOIN rooms rm ON rm.id = r.room_id
    WHERE r.id = ?
";

const SELECT_RESTRICTIONS_FOR_ROOM: &str = r"
    SELECT id, room_id, start_date, end_date, reservation_id
    FROM room_restrictions
    WHERE room_id = ?
    ORDER BY start_date
";

const COUNT_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations";

/// Current time as Unix epoch seconds, for `created_at` and expiry columns.
pub(super) fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// Returns `true` if `err` is the overlap trigger aborting an insert.
pub(super) fn is_overlap_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.code == ErrorCode::ConstraintViolation && msg.contains(OVERLAP_VIOLATION)
    )
}

/// Maps a row that stored data cannot be decoded from to
/// [`Error::DatabaseCorruption`].
fn decode_error(err: rusqlite::Error) -> Error {
    match err {
        rusqlite::Error::FromSqlConversionFailure(idx, _, cause) => Error::DatabaseCorruption {
            details: format!("column {idx}: {cause}"),
        },
        other => Error::Persistence(other),
    }
}

fn date_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<chrono::NaiveDate> {
    let text: String = row.get(idx)?;
    parse_date(&text).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn range_columns(row: &rusqlite::Row<'_>, start: usize, end: usize) -> rusqlite::Result<DateRange> {
    DateRange::new(date_column(row, start)?, date_column(row, end)?)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(start, Type::Text, Box::new(e)))
}

fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room::new(row.get(0)?, row.get::<_, String>(1)?))
}

/// Expects: id, first, last, email, phone, start, end, `room_id`, `room_name`
fn row_to_reservation(row: &rusqlite::Row<'_>) -> rusqlite::Result<Reservation> {
    let id: ReservationId = row.get(0)?;
    let contact = ContactDetails {
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
    };
    let range = range_columns(row, 5, 6)?;
    let room = Room::new(row.get(7)?, row.get::<_, String>(8)?);

    Reservation::builder(room, range)
        .contact(contact)
        .id(id)
        .build()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(e)))
}

fn row_to_restriction(row: &rusqlite::Row<'_>) -> rusqlite::Result<Restriction> {
    Ok(Restriction {
        id: Some(row.get(0)?),
        room_id: row.get(1)?,
        range: range_columns(row, 2, 3)?,
        reservation_id: row.get(4)?,
    })
}

impl Database {
    /// Lists the room catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Looks up one room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room(conn: &Connection, room_id: RoomId) -> Result<Option<Room>> {
        Ok(conn
            .query_row(SELECT_ROOM, [room_id], row_to_room)
            .optional()?)
    }

    /// Counts restrictions on `room_id` overlapping `range` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_overlapping_restrictions(
        conn: &Connection,
        room_id: RoomId,
        range: &DateRange,
    ) -> Result<usize> {
        let count: i64 = conn.query_row(
            COUNT_OVERLAPPING,
            params![room_id, format_date(range.start()), format_date(range.end())],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Inserts a reservation row and returns its new id.
    ///
    /// Intended to run inside the booking transaction; it does not open one
    /// of its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including when the room does
    /// not exist.
    pub fn insert_reservation(conn: &Connection, reservation: &Reservation) -> Result<ReservationId> {
        let contact = reservation.contact();
        let range = reservation.range();
        conn.execute(
            INSERT_RESERVATION,
            params![
                contact.first_name,
                contact.last_name,
                contact.email,
                contact.phone,
                format_date(range.start()),
                format_date(range.end()),
                reservation.room_id(),
                now_unix(),
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Inserts a restriction row and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNoLongerAvailable`] if the restriction overlaps
    /// an existing one on the same room, or [`Error::Persistence`] for any
    /// other failure.
    pub fn insert_restriction(conn: &Connection, restriction: &Restriction) -> Result<i64> {
        conn.execute(
            INSERT_RESTRICTION,
            params![
                format_date(restriction.range.start()),
                format_date(restriction.range.end()),
                restriction.room_id,
                restriction.reservation_id,
                now_unix(),
            ],
        )
        .map_err(|e| {
            if is_overlap_violation(&e) {
                Error::RoomNoLongerAvailable {
                    room_id: restriction.room_id,
                    range: restriction.range,
                }
            } else {
                Error::Persistence(e)
            }
        })?;
        Ok(conn.last_insert_rowid())
    }

    /// Fetches a committed reservation with its room.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if the stored row cannot be
    /// decoded, or an error if the query fails.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        conn.query_row(SELECT_RESERVATION, [id], row_to_reservation)
            .optional()
            .map_err(decode_error)
    }

    /// Lists the restrictions on a room, earliest first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DatabaseCorruption`] if a stored row cannot be
    /// decoded, or an error if the query fails.
    pub fn list_restrictions(conn: &Connection, room_id: RoomId) -> Result<Vec<Restriction>> {
        let mut stmt = conn.prepare(SELECT_RESTRICTIONS_FOR_ROOM)?;
        let restrictions = stmt
            .query_map([room_id], row_to_restriction)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(decode_error)?;
        Ok(restrictions)
    }

    /// Counts committed reservations.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_reservations(conn: &Connection) -> Result<usize> {
        let count: i64 = conn.query_row(COUNT_RESERVATIONS, [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Blocks a room for a range without a reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] for an unknown room, or
    /// [`Error::RoomNoLongerAvailable`] if the range is already restricted.
    pub fn block_room(&mut self, room_id: RoomId, range: &DateRange) -> Result<i64> {
        let tx = self.begin_transaction()?;
        if Self::get_room(&tx, room_id)?.is_none() {
            return Err(Error::RoomNotFound { room_id });
        }
        let id = Self::insert_restriction(&tx, &Restriction::block(room_id, *range))?;
        tx.commit()?;
        log::info!("blocked room {room_id} for {range}");
        Ok(id)
    }
}

impl RoomCatalog for Connection {
    fn list(&self) -> Result<Vec<Room>> {
        Database::list_rooms(self)
    }

    fn get(&self, room_id: RoomId) -> Result<Option<Room>> {
        Database::get_room(self, room_id)
    }
}

impl RestrictionQuery for Connection {
    fn query_overlap(&self, room_id: RoomId, range: &DateRange) -> Result<usize> {
        Database::count_overlapping_restrictions(self, room_id, range)
    }
}
