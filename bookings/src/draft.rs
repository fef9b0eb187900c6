//! Reservation drafts and the session-driven booking flow.
//!
//! A visitor builds a reservation over several stateless requests. The
//! partially filled [`ReservationDraft`] lives in the visitor's session
//! between requests and moves through [`DraftStage`]s:
//!
//! ```text
//! Empty -> RoomSelected -> ContactPending -> Committed
//! ```
//!
//! [`ReservationFlow`] implements each request against a database and a
//! [`SessionStore`].

use serde::{Deserialize, Serialize};

use crate::availability::{AvailabilityEngine, AvailabilityReport};
use crate::booking::BookingCommitter;
use crate::database::Database;
use crate::date::DateRange;
use crate::error::{Error, Result};
use crate::forms::{FormFields, FormValidator, ValidationResult, DEFAULT_FIRST_NAME_MIN_LENGTH};
use crate::reservation::{ContactDetails, Reservation};
use crate::room::{Room, RoomCatalog, RoomId};
use crate::session::{SessionId, SessionStore};

/// Session key holding the in-flight draft.
pub const DRAFT_KEY: &str = "reservation";

/// Session key holding the last committed reservation until it is shown.
pub const SUMMARY_KEY: &str = "reservation_summary";

/// Where a draft is in the booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStage {
    /// Only the requested dates are known.
    Empty,
    /// A room has been picked for the dates.
    RoomSelected,
    /// The contact form has been shown and awaits a valid submission.
    ContactPending,
    /// The reservation has been stored.
    Committed,
}

/// An in-flight reservation held in a visitor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    /// Requested dates.
    pub range: Option<DateRange>,
    /// Picked room.
    pub room: Option<Room>,
    /// Contact details as last submitted.
    #[serde(default)]
    pub contact: ContactDetails,
    /// Lifecycle stage.
    pub stage: DraftStage,
}

impl ReservationDraft {
    /// A draft holding only the requested dates.
    #[must_use]
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range: Some(range),
            room: None,
            contact: ContactDetails::default(),
            stage: DraftStage::Empty,
        }
    }

    /// A draft with a room picked for `range`.
    #[must_use]
    pub fn for_room(room: Room, range: DateRange) -> Self {
        Self {
            range: Some(range),
            room: Some(room),
            contact: ContactDetails::default(),
            stage: DraftStage::RoomSelected,
        }
    }

    /// Id of the picked room, if any.
    #[must_use]
    pub fn room_id(&self) -> Option<RoomId> {
        self.room.as_ref().map(Room::id)
    }

    /// Builds the reservation this draft describes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveDraft`] if the room or dates are missing,
    /// or [`Error::Validation`] if a required contact field is blank.
    pub fn to_reservation(&self) -> Result<Reservation> {
        let (Some(room), Some(range)) = (&self.room, self.range) else {
            return Err(Error::NoActiveDraft);
        };
        Reservation::builder(room.clone(), range)
            .contact(self.contact.clone())
            .build()
    }
}

/// Result of submitting the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form had errors; the draft keeps the submitted values.
    Invalid {
        /// The draft as saved back to the session.
        draft: ReservationDraft,
        /// Per-field errors to redisplay.
        validation: ValidationResult,
    },
    /// The reservation was stored.
    Committed(Reservation),
}

/// The booking flow for one database and session store.
///
/// # Examples
///
/// ```no_run
/// use bookings::database::{Database, DatabaseConfig};
/// use bookings::{DateRange, FormFields, MemorySessionStore, ReservationFlow, SessionId, SubmitOutcome};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/bookings.db")).unwrap();
/// let sessions = MemorySessionStore::default();
/// let session = SessionId::new("visitor").unwrap();
/// let mut flow = ReservationFlow::new(&mut db, &sessions);
///
/// let range = DateRange::parse("2050-06-01", "2050-06-03").unwrap();
/// let rooms = flow.search(&session, &range).unwrap();
/// flow.choose_room(&session, rooms[0].id()).unwrap();
/// flow.resume(&session).unwrap();
///
/// let fields = FormFields::new()
///     .with("first_name", "Ada")
///     .with("last_name", "Lovelace")
///     .with("email", "ada@example.com");
/// match flow.submit(&session, &fields).unwrap() {
///     SubmitOutcome::Committed(reservation) => println!("booked #{:?}", reservation.id()),
///     SubmitOutcome::Invalid { validation, .. } => println!("{:?}", validation.errors),
/// }
/// ```
pub struct ReservationFlow<'a, S: SessionStore> {
    db: &'a mut Database,
    sessions: &'a S,
    validator: FormValidator,
}

impl<'a, S: SessionStore> ReservationFlow<'a, S> {
    /// Creates a flow using the default reservation form rules.
    #[must_use]
    pub fn new(db: &'a mut Database, sessions: &'a S) -> Self {
        Self {
            db,
            sessions,
            validator: FormValidator::reservation_form(DEFAULT_FIRST_NAME_MIN_LENGTH),
        }
    }

    /// Replaces the contact form rules.
    #[must_use]
    pub fn with_validator(mut self, validator: FormValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Lists the room catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read.
    pub fn rooms(&self) -> Result<Vec<Room>> {
        self.db.connection().list()
    }

    /// Finds the rooms free for `range`.
    ///
    /// When at least one is free the session gets a fresh draft holding the
    /// dates, replacing any earlier draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the stores cannot be read or written.
    pub fn search(&self, session: &SessionId, range: &DateRange) -> Result<Vec<Room>> {
        let conn = self.db.connection();
        let rooms = AvailabilityEngine::new(conn, conn).search(range)?;
        if rooms.is_empty() {
            log::debug!("no availability for {range}");
        } else {
            self.save(session, &ReservationDraft::for_range(*range))?;
        }
        Ok(rooms)
    }

    /// Checks one room for `range` without touching the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] for an unknown room, or an error if
    /// the stores cannot be read.
    pub fn check(&self, room_id: RoomId, range: &DateRange) -> Result<AvailabilityReport> {
        let conn = self.db.connection();
        AvailabilityEngine::new(conn, conn).report(room_id, range)
    }

    /// Picks a room for the dates held by the session draft.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveDraft`] if the session holds no dates.
    /// - [`Error::RoomNotFound`] for an unknown room.
    /// - [`Error::RoomUnavailable`] if the room is taken for those dates.
    pub fn choose_room(&self, session: &SessionId, room_id: RoomId) -> Result<ReservationDraft> {
        let range = self
            .draft(session)?
            .and_then(|draft| draft.range)
            .ok_or(Error::NoActiveDraft)?;
        self.pick(session, room_id, range)
    }

    /// Picks a room and dates in one step, replacing any draft.
    ///
    /// # Errors
    ///
    /// - [`Error::RoomNotFound`] for an unknown room.
    /// - [`Error::RoomUnavailable`] if the room is taken for those dates.
    pub fn book_room(
        &self,
        session: &SessionId,
        room_id: RoomId,
        range: &DateRange,
    ) -> Result<ReservationDraft> {
        self.pick(session, room_id, *range)
    }

    /// Opens the contact form for the session draft.
    ///
    /// The room name is refreshed from the catalog. If the room has been
    /// removed, the draft is discarded.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveDraft`] if no room has been picked.
    /// - [`Error::RoomNotFound`] if the picked room no longer exists.
    pub fn resume(&self, session: &SessionId) -> Result<ReservationDraft> {
        let mut draft = self.draft(session)?.ok_or(Error::NoActiveDraft)?;
        let room_id = match (&draft.room, draft.stage) {
            (Some(room), DraftStage::RoomSelected | DraftStage::ContactPending) => room.id(),
            _ => return Err(Error::NoActiveDraft),
        };

        let Some(room) = self.db.connection().get(room_id)? else {
            self.sessions.clear(session, DRAFT_KEY)?;
            log::warn!("discarded draft for session {session}: room {room_id} is gone");
            return Err(Error::RoomNotFound { room_id });
        };

        draft.room = Some(room);
        draft.stage = DraftStage::ContactPending;
        self.save(session, &draft)?;
        Ok(draft)
    }

    /// Submits the contact form.
    ///
    /// A draft that has a room but has not been resumed yet is resumed
    /// first. Invalid input is stored back into the draft and returned as
    /// [`SubmitOutcome::Invalid`]. Valid input is committed; the draft is
    /// then cleared and the reservation saved as the session summary.
    ///
    /// # Errors
    ///
    /// - [`Error::NoActiveDraft`] if no room has been picked.
    /// - [`Error::RoomNotFound`] if the picked room no longer exists.
    /// - [`Error::RoomNoLongerAvailable`] if the room was booked meanwhile;
    ///   the draft stays pending with the submitted contact details.
    /// - Storage errors from the commit.
    pub fn submit(&mut self, session: &SessionId, fields: &FormFields) -> Result<SubmitOutcome> {
        let mut draft = self.resume(session)?;
        draft.contact = ContactDetails::from_fields(fields);

        let validation = self.validator.validate(fields);
        if !validation.is_valid() {
            self.save(session, &draft)?;
            return Ok(SubmitOutcome::Invalid { draft, validation });
        }

        match BookingCommitter::new(&mut *self.db).commit(&draft) {
            Ok(reservation) => {
                self.sessions.clear(session, DRAFT_KEY)?;
                self.sessions.store(session, SUMMARY_KEY, &reservation)?;
                Ok(SubmitOutcome::Committed(reservation))
            }
            Err(e) => {
                self.save(session, &draft)?;
                Err(e)
            }
        }
    }

    /// Removes and returns the last committed reservation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoActiveDraft`] if there is nothing to show.
    pub fn take_summary(&self, session: &SessionId) -> Result<Reservation> {
        self.sessions
            .take(session, SUMMARY_KEY)?
            .ok_or(Error::NoActiveDraft)
    }

    /// Returns the session draft without changing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the session store cannot be read.
    pub fn draft(&self, session: &SessionId) -> Result<Option<ReservationDraft>> {
        self.sessions.load(session, DRAFT_KEY)
    }

    fn pick(&self, session: &SessionId, room_id: RoomId, range: DateRange) -> Result<ReservationDraft> {
        let conn = self.db.connection();
        let room = conn.get(room_id)?.ok_or(Error::RoomNotFound { room_id })?;
        if !AvailabilityEngine::new(conn, conn).search_room(room_id, &range)? {
            return Err(Error::RoomUnavailable { room_id, range });
        }

        let draft = ReservationDraft::for_room(room, range);
        self.save(session, &draft)?;
        log::debug!("session {session} picked room {room_id} for {range}");
        Ok(draft)
    }

    fn save(&self, session: &SessionId, draft: &ReservationDraft) -> Result<()> {
        self.sessions.store(session, DRAFT_KEY, draft)
    }
}
