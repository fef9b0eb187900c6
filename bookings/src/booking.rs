//! Atomic booking commit.
//!
//! Committing a draft re-checks availability and writes the reservation and
//! its restriction inside one `IMMEDIATE` transaction. Either both rows are
//! stored or neither is.

use rusqlite::Connection;

use crate::availability::AvailabilityEngine;
use crate::database::Database;
use crate::draft::ReservationDraft;
use crate::error::{Error, Result};
use crate::reservation::{Reservation, Restriction};

/// Persists completed drafts as reservations.
///
/// # Examples
///
/// ```no_run
/// use bookings::database::{Database, DatabaseConfig};
/// use bookings::{BookingCommitter, ContactDetails, DateRange, ReservationDraft, Room};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/bookings.db")).unwrap();
/// let range = DateRange::parse("2050-01-01", "2050-01-03").unwrap();
///
/// let mut draft = ReservationDraft::for_room(Room::new(1, "General's Quarters"), range);
/// draft.contact = ContactDetails {
///     first_name: "Ada".into(),
///     last_name: "Lovelace".into(),
///     email: "ada@example.com".into(),
///     phone: String::new(),
/// };
///
/// let reservation = BookingCommitter::new(&mut db).commit(&draft).unwrap();
/// assert!(reservation.id().is_some());
/// ```
pub struct BookingCommitter<'a> {
    db: &'a mut Database,
}

impl<'a> BookingCommitter<'a> {
    /// Creates a committer writing to `db`.
    #[must_use]
    pub fn new(db: &'a mut Database) -> Self {
        Self { db }
    }

    /// Commits `draft`, returning the stored reservation with its id.
    ///
    /// Failures never retry and never leave a partial write behind.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveDraft`] if the draft has no room or range.
    /// - [`Error::Validation`] if a required contact field is blank.
    /// - [`Error::RoomNotFound`] if the room left the catalog.
    /// - [`Error::RoomNoLongerAvailable`] if another booking took the room.
    /// - [`Error::LockTimeout`] if the write lock could not be acquired.
    /// - [`Error::Persistence`] for any other storage failure.
    pub fn commit(&mut self, draft: &ReservationDraft) -> Result<Reservation> {
        let reservation = draft.to_reservation()?;
        let room_id = reservation.room_id();
        let range = reservation.range();

        let id = self.db.with_transaction(|tx| {
            let conn: &Connection = tx;
            let engine = AvailabilityEngine::new(conn, conn);
            if !engine.search_room(room_id, &range)? {
                return Err(Error::RoomNoLongerAvailable { room_id, range });
            }

            let id = Database::insert_reservation(conn, &reservation)?;
            Database::insert_restriction(conn, &Restriction::for_reservation(room_id, range, id))?;
            Ok(id)
        });

        match id {
            Ok(id) => {
                log::info!("committed reservation {id} for room {room_id} ({range})");
                Ok(reservation.with_id(id))
            }
            Err(e) => {
                if e.is_conflict() {
                    log::warn!("room {room_id} was taken for {range} before commit");
                }
                Err(e)
            }
        }
    }
}
