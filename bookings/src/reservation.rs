//! Reservation and restriction types.
//!
//! A [`Reservation`] is a guest's claim on a room for a [`DateRange`]. Each
//! committed reservation owns exactly one [`Restriction`], the record that
//! makes the room unavailable for those days.

use serde::{Deserialize, Serialize};

use crate::date::DateRange;
use crate::error::{Error, Result};
use crate::forms::FormFields;
use crate::room::{Room, RoomId};

/// Identifier assigned to a reservation when it is committed.
pub type ReservationId = i64;

/// Guest contact details collected by the reservation form.
///
/// Values may be incomplete while a draft is being filled in; the builder
/// for [`Reservation`] insists on the required ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    /// Guest first name.
    pub first_name: String,
    /// Guest last name.
    pub last_name: String,
    /// Guest email address.
    pub email: String,
    /// Guest phone number, optional.
    #[serde(default)]
    pub phone: String,
}

impl ContactDetails {
    /// Form field carrying the first name.
    pub const FIRST_NAME: &'static str = "first_name";
    /// Form field carrying the last name.
    pub const LAST_NAME: &'static str = "last_name";
    /// Form field carrying the email address.
    pub const EMAIL: &'static str = "email";
    /// Form field carrying the phone number.
    pub const PHONE: &'static str = "phone";

    /// Reads contact details out of submitted form fields.
    ///
    /// Missing fields become empty strings; values are kept as submitted so
    /// the form can be redisplayed verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookings::{ContactDetails, FormFields};
    ///
    /// let fields = FormFields::new()
    ///     .with("first_name", "Ada")
    ///     .with("email", "ada@example.com");
    /// let contact = ContactDetails::from_fields(&fields);
    /// assert_eq!(contact.first_name, "Ada");
    /// assert_eq!(contact.last_name, "");
    /// ```
    #[must_use]
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            first_name: fields.get(Self::FIRST_NAME).to_string(),
            last_name: fields.get(Self::LAST_NAME).to_string(),
            email: fields.get(Self::EMAIL).to_string(),
            phone: fields.get(Self::PHONE).to_string(),
        }
    }

    /// Converts the details back into form fields, for pre-filling a form.
    #[must_use]
    pub fn to_fields(&self) -> FormFields {
        FormFields::new()
            .with(Self::FIRST_NAME, &self.first_name)
            .with(Self::LAST_NAME, &self.last_name)
            .with(Self::EMAIL, &self.email)
            .with(Self::PHONE, &self.phone)
    }

    fn require(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        Ok(())
    }
}

/// A reservation of one room for a range of days.
///
/// `id` is `None` until the reservation has been committed.
///
/// # Examples
///
/// ```
/// use bookings::{ContactDetails, DateRange, Reservation, Room};
///
/// let range = DateRange::parse("2050-01-01", "2050-01-02").unwrap();
/// let contact = ContactDetails {
///     first_name: "Ada".into(),
///     last_name: "Lovelace".into(),
///     email: "ada@example.com".into(),
///     phone: String::new(),
/// };
///
/// let reservation = Reservation::builder(Room::new(1, "General's Quarters"), range)
///     .contact(contact)
///     .build()
///     .unwrap();
/// assert!(reservation.id().is_none());
/// assert_eq!(reservation.room_id(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    id: Option<ReservationId>,
    room: Room,
    range: DateRange,
    contact: ContactDetails,
}

impl Reservation {
    /// Starts building a reservation for `room` over `range`.
    #[must_use]
    pub fn builder(room: Room, range: DateRange) -> ReservationBuilder {
        ReservationBuilder {
            id: None,
            room,
            range,
            contact: ContactDetails::default(),
        }
    }

    /// Returns the committed id, if any.
    #[must_use]
    pub const fn id(&self) -> Option<ReservationId> {
        self.id
    }

    /// Returns the reserved room.
    #[must_use]
    pub const fn room(&self) -> &Room {
        &self.room
    }

    /// Returns the reserved room's id.
    #[must_use]
    pub const fn room_id(&self) -> RoomId {
        self.room.id()
    }

    /// Returns the reserved days.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }

    /// Returns the guest contact details.
    #[must_use]
    pub const fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    /// Returns a copy carrying the id assigned by the store.
    #[must_use]
    pub fn with_id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }
}

/// Builder for [`Reservation`].
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    id: Option<ReservationId>,
    room: Room,
    range: DateRange,
    contact: ContactDetails,
}

impl ReservationBuilder {
    /// Sets the guest contact details.
    #[must_use]
    pub fn contact(mut self, contact: ContactDetails) -> Self {
        self.contact = contact;
        self
    }

    /// Sets the id of an already committed reservation.
    #[must_use]
    pub const fn id(mut self, id: ReservationId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builds the reservation.
    ///
    /// First name, last name and email must not be blank. Values are kept
    /// as submitted. The phone number is optional.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first required contact
    /// field that is blank.
    pub fn build(self) -> Result<Reservation> {
        ContactDetails::require(ContactDetails::FIRST_NAME, &self.contact.first_name)?;
        ContactDetails::require(ContactDetails::LAST_NAME, &self.contact.last_name)?;
        ContactDetails::require(ContactDetails::EMAIL, &self.contact.email)?;

        Ok(Reservation {
            id: self.id,
            room: self.room,
            range: self.range,
            contact: self.contact,
        })
    }
}

/// A range of days during which a room cannot be booked.
///
/// Restrictions created by booking reference their reservation; a
/// restriction without one is an owner block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Row id once stored.
    pub id: Option<i64>,
    /// The restricted room.
    pub room_id: RoomId,
    /// The restricted days.
    pub range: DateRange,
    /// The reservation this restriction belongs to, if any.
    pub reservation_id: Option<ReservationId>,
}

impl Restriction {
    /// Restriction owned by a committed reservation.
    #[must_use]
    pub const fn for_reservation(
        room_id: RoomId,
        range: DateRange,
        reservation_id: ReservationId,
    ) -> Self {
        Self {
            id: None,
            room_id,
            range,
            reservation_id: Some(reservation_id),
        }
    }

    /// Restriction with no owning reservation.
    #[must_use]
    pub const fn block(room_id: RoomId, range: DateRange) -> Self {
        Self {
            id: None,
            room_id,
            range,
            reservation_id: None,
        }
    }

    /// Returns `true` if this restriction is an owner block.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        self.reservation_id.is_none()
    }
}
