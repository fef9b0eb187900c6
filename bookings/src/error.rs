//! Error types for the bookings library.
//!
//! This module provides the error hierarchy for availability search,
//! reservation drafting and booking, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

use crate::date::DateRange;
use crate::room::RoomId;

/// Result type alias for operations that may fail with a bookings error.
///
/// # Examples
///
/// ```
/// use bookings::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the bookings library.
#[derive(Debug, Error)]
pub enum Error {
    /// A date range whose start falls after its end.
    #[error("invalid date range {start} to {end}: {reason}")]
    InvalidRange {
        /// The requested start date, as given.
        start: String,
        /// The requested end date, as given.
        end: String,
        /// The reason the range is invalid.
        reason: String,
    },

    /// A date string that does not follow the `YYYY-MM-DD` layout.
    #[error("invalid date '{value}': {reason}")]
    InvalidDate {
        /// The rejected input.
        value: String,
        /// The reason the date could not be parsed.
        reason: String,
    },

    /// The requested room does not exist in the catalog.
    #[error("room {room_id} not found")]
    RoomNotFound {
        /// The unknown room id.
        room_id: RoomId,
    },

    /// The room was already booked for some day of the range when it was picked.
    #[error("room {room_id} is unavailable for {range}")]
    RoomUnavailable {
        /// The room that was picked.
        room_id: RoomId,
        /// The range the room was picked for.
        range: DateRange,
    },

    /// The session holds no draft far enough along for the requested step.
    #[error("no active reservation draft in session")]
    NoActiveDraft,

    /// Another booking claimed the room between selection and commit.
    #[error("room {room_id} is no longer available for {range}")]
    RoomNoLongerAvailable {
        /// The room that was being booked.
        room_id: RoomId,
        /// The range that was being booked.
        range: DateRange,
    },

    /// The reservation store failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A session value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A database lock timeout occurred.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: u32,
        /// The schema version found in the database.
        found: u32,
    },
}

impl Error {
    /// Whether the visitor can recover by going back and picking again.
    ///
    /// These are the failures a web front end answers with a redirect and a
    /// flash message rather than an error page.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookings::Error;
    ///
    /// assert!(Error::NoActiveDraft.is_user_correctable());
    /// assert!(!Error::LockTimeout { seconds: 5 }.is_user_correctable());
    /// ```
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::InvalidRange { .. }
                | Self::InvalidDate { .. }
                | Self::RoomNotFound { .. }
                | Self::RoomUnavailable { .. }
                | Self::NoActiveDraft
                | Self::RoomNoLongerAvailable { .. }
                | Self::Validation { .. }
        )
    }

    /// Short message suitable for flashing to the visitor after a redirect.
    #[must_use]
    pub fn flash_message(&self) -> &'static str {
        match self {
            Self::InvalidRange { .. } | Self::InvalidDate { .. } => "Can't parse the requested dates",
            Self::RoomNotFound { .. } => "Room not found",
            Self::RoomUnavailable { .. } => "Unavailable",
            Self::NoActiveDraft => "Can't get reservation from session",
            Self::RoomNoLongerAvailable { .. } => {
                "Sorry, that room was just booked for those dates"
            }
            Self::Validation { .. } => "Please correct the highlighted fields",
            _ => "Can't save the reservation right now",
        }
    }

    /// Check if error indicates the booking lost a race for the room.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::RoomUnavailable { .. } | Self::RoomNoLongerAvailable { .. }
        )
    }
}
