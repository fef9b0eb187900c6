#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # bookings
//!
//! A library for room availability search and reservation booking.
//!
//! This library provides the core of a small hotel booking site: a room
//! catalog, availability search over stored restrictions, a reservation
//! draft carried between requests in a visitor session, contact form
//! validation, and an atomic commit that re-checks availability before
//! storing a reservation with its restriction.
//!
//! ## Core Types
//!
//! - [`DateRange`]: Inclusive range of stay dates
//! - [`Room`] and [`RoomCatalog`]: Bookable rooms
//! - [`AvailabilityEngine`]: Whole-catalog and single-room availability
//! - [`ReservationDraft`] and [`ReservationFlow`]: The session-driven flow
//! - [`FormValidator`]: Contact form rules
//! - [`BookingCommitter`]: Atomic reservation commit
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use bookings::{DateRange, FormFields, FormValidator};
//!
//! let stay = DateRange::parse("2050-01-01", "2050-01-03").unwrap();
//! let other = DateRange::parse("2050-01-03", "2050-01-05").unwrap();
//! assert!(stay.overlaps(&other));
//!
//! let fields = FormFields::new().with("first_name", "Jo");
//! let result = FormValidator::reservation_form(3).validate(&fields);
//! assert!(!result.is_valid());
//! ```

pub mod availability;
pub mod booking;
pub mod config;
pub mod database;
pub mod date;
pub mod draft;
pub mod error;
pub mod forms;
pub mod logging;
pub mod reservation;
pub mod room;
pub mod session;

// Re-export key types at crate root for convenience
pub use availability::{AvailabilityEngine, AvailabilityReport};
pub use booking::BookingCommitter;
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use date::DateRange;
pub use draft::{DraftStage, ReservationDraft, ReservationFlow, SubmitOutcome};
pub use error::{Error, Result};
pub use forms::{FormErrors, FormFields, FormValidator, ValidationResult};
pub use logging::{init_logger, LogLevel, Logger};
pub use reservation::{ContactDetails, Reservation, ReservationId, Restriction};
pub use room::{Room, RoomCatalog, RoomId};
pub use session::{MemorySessionStore, SessionId, SessionStore};
