//! Availability search.
//!
//! A room is available for a range when no stored restriction for that room
//! overlaps it. The same predicate answers both a whole-catalog search and a
//! single-room check, and is re-run by the booking committer inside its
//! write transaction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::date::DateRange;
use crate::error::{Error, Result};
use crate::room::{Room, RoomCatalog, RoomId};

/// Query over stored room restrictions.
#[cfg_attr(test, mockall::automock)]
pub trait RestrictionQuery {
    /// Counts restrictions on `room_id` that share at least one day with
    /// `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn query_overlap(&self, room_id: RoomId, range: &DateRange) -> Result<usize>;
}

/// Answers availability questions against a catalog and a restriction store.
///
/// The engine is read-only; it never creates or removes restrictions.
///
/// # Examples
///
/// ```
/// use bookings::{AvailabilityEngine, DateRange, Room};
/// use bookings::availability::RestrictionQuery;
///
/// struct NothingBooked;
///
/// impl RestrictionQuery for NothingBooked {
///     fn query_overlap(&self, _: i64, _: &DateRange) -> bookings::Result<usize> {
///         Ok(0)
///     }
/// }
///
/// let rooms = vec![Room::new(1, "General's Quarters"), Room::new(2, "Major's Suite")];
/// let engine = AvailabilityEngine::new(&rooms, &NothingBooked);
///
/// let range = DateRange::parse("2050-01-01", "2050-01-02").unwrap();
/// assert_eq!(engine.search(&range).unwrap().len(), 2);
/// assert!(engine.search_room(1, &range).unwrap());
/// ```
pub struct AvailabilityEngine<'a, C: ?Sized, Q: ?Sized> {
    catalog: &'a C,
    restrictions: &'a Q,
}

impl<'a, C, Q> AvailabilityEngine<'a, C, Q>
where
    C: RoomCatalog + ?Sized,
    Q: RestrictionQuery + ?Sized,
{
    /// Creates an engine over the given catalog and restriction store.
    #[must_use]
    pub const fn new(catalog: &'a C, restrictions: &'a Q) -> Self {
        Self {
            catalog,
            restrictions,
        }
    }

    /// Returns every room free for the whole of `range`, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or restriction store cannot be read.
    pub fn search(&self, range: &DateRange) -> Result<Vec<Room>> {
        let mut available = Vec::new();
        for room in self.catalog.list()? {
            if self.is_free(room.id(), range)? {
                available.push(room);
            }
        }
        log::debug!(
            "{} room(s) available for {range}",
            available.len()
        );
        Ok(available)
    }

    /// Returns `true` if `room_id` is free for the whole of `range`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] for an id the catalog does not know,
    /// or an error if either store cannot be read.
    pub fn search_room(&self, room_id: RoomId, range: &DateRange) -> Result<bool> {
        if self.catalog.get(room_id)?.is_none() {
            return Err(Error::RoomNotFound { room_id });
        }
        self.is_free(room_id, range)
    }

    /// Single-room check shaped for a JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`AvailabilityEngine::search_room`].
    pub fn report(&self, room_id: RoomId, range: &DateRange) -> Result<AvailabilityReport> {
        let ok = self.search_room(room_id, range)?;
        Ok(AvailabilityReport::new(ok, room_id, range))
    }

    fn is_free(&self, room_id: RoomId, range: &DateRange) -> Result<bool> {
        Ok(self.restrictions.query_overlap(room_id, range)? == 0)
    }
}

/// Result of a single-room availability check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// Whether the room is free.
    pub ok: bool,
    /// Human-readable verdict.
    pub message: String,
    /// The room checked.
    pub room_id: RoomId,
    /// First day checked.
    pub start_date: NaiveDate,
    /// Last day checked.
    pub end_date: NaiveDate,
}

impl AvailabilityReport {
    fn new(ok: bool, room_id: RoomId, range: &DateRange) -> Self {
        Self {
            ok,
            message: if ok { "Available!" } else { "Unavailable" }.to_string(),
            room_id,
            start_date: range.start(),
            end_date: range.end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::default_rooms;
    use mockall::predicate::eq;

    fn range() -> DateRange {
        DateRange::parse("2050-01-01", "2050-01-02").unwrap()
    }

    #[test]
    fn test_search_all_free() {
        let rooms = default_rooms();
        let mut query = MockRestrictionQuery::new();
        query.expect_query_overlap().returning(|_, _| Ok(0));

        let engine = AvailabilityEngine::new(&rooms, &query);
        let available = engine.search(&range()).unwrap();
        assert_eq!(available, rooms);
    }

    #[test]
    fn test_search_skips_restricted_room() {
        let rooms = default_rooms();
        let mut query = MockRestrictionQuery::new();
        query
            .expect_query_overlap()
            .with(eq(1), eq(range()))
            .returning(|_, _| Ok(1));
        query
            .expect_query_overlap()
            .with(eq(2), eq(range()))
            .returning(|_, _| Ok(0));

        let engine = AvailabilityEngine::new(&rooms, &query);
        let available = engine.search(&range()).unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id(), 2);
    }

    #[test]
    fn test_search_room_unknown_id() {
        let rooms = default_rooms();
        let mut query = MockRestrictionQuery::new();
        query.expect_query_overlap().never();

        let engine = AvailabilityEngine::new(&rooms, &query);
        let err = engine.search_room(99, &range()).unwrap_err();
        assert!(matches!(err, Error::RoomNotFound { room_id: 99 }));
    }

    #[test]
    fn test_search_propagates_store_errors() {
        let rooms = default_rooms();
        let mut query = MockRestrictionQuery::new();
        query
            .expect_query_overlap()
            .returning(|_, _| Err(rusqlite::Error::InvalidQuery.into()));

        let engine = AvailabilityEngine::new(&rooms, &query);
        assert!(matches!(
            engine.search(&range()),
            Err(Error::Persistence(_))
        ));
    }

    #[test]
    fn test_report_messages() {
        let rooms = default_rooms();
        let mut query = MockRestrictionQuery::new();
        query
            .expect_query_overlap()
            .with(eq(1), eq(range()))
            .returning(|_, _| Ok(0));
        query
            .expect_query_overlap()
            .with(eq(2), eq(range()))
            .returning(|_, _| Ok(3));

        let engine = AvailabilityEngine::new(&rooms, &query);

        let free = engine.report(1, &range()).unwrap();
        assert!(free.ok);
        assert_eq!(free.message, "Available!");
        assert_eq!(free.start_date, range().start());

        let taken = engine.report(2, &range()).unwrap();
        assert!(!taken.ok);
        assert_eq!(taken.message, "Unavailable");
    }

    #[test]
    fn test_report_serializes_dates_in_layout() {
        let report = AvailabilityReport::new(true, 1, &range());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["start_date"], "2050-01-01");
        assert_eq!(json["end_date"], "2050-01-02");
        assert_eq!(json["room_id"], 1);
    }
}
