//! Configuration validation.
//!
//! This module checks that configured values are usable before any of them
//! reach the database or the booking flow.

use crate::config::schema::{Config, RoomConfig};
use crate::error::{Error, Result};
use std::collections::HashSet;

/// Maximum length of a room name.
pub const MAX_ROOM_NAME_LENGTH: usize = 255;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use bookings::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref rooms) = config.rooms {
            Self::validate_rooms(rooms)?;
        }

        if let Some(hours) = config.session.as_ref().and_then(|s| s.lifetime_hours) {
            if hours == 0 {
                return Err(Error::Validation {
                    field: "session.lifetime_hours".into(),
                    message: "Session lifetime must be greater than 0".into(),
                });
            }
        }

        if let Some(length) = config.forms.as_ref().and_then(|f| f.first_name_min_length) {
            if length == 0 {
                return Err(Error::Validation {
                    field: "forms.first_name_min_length".into(),
                    message: "Minimum length must be greater than 0".into(),
                });
            }
        }

        if let Some(timeout) = config.maximum_lock_wait_seconds {
            if timeout == 0 {
                return Err(Error::Validation {
                    field: "maximum_lock_wait_seconds".into(),
                    message: "Timeout must be greater than 0".into(),
                });
            }
        }

        Ok(())
    }

    fn validate_rooms(rooms: &[RoomConfig]) -> Result<()> {
        if rooms.is_empty() {
            return Err(Error::Validation {
                field: "rooms".into(),
                message: "At least one room must be configured".into(),
            });
        }

        let mut seen = HashSet::new();
        for room in rooms {
            if room.id <= 0 {
                return Err(Error::Validation {
                    field: "rooms".into(),
                    message: format!("Room id must be positive, got {}", room.id),
                });
            }
            if !seen.insert(room.id) {
                return Err(Error::Validation {
                    field: "rooms".into(),
                    message: format!("Duplicate room id {}", room.id),
                });
            }
            Self::validate_room_name(&room.name)?;
        }
        Ok(())
    }

    fn validate_room_name(name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: "rooms.name".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if trimmed.contains('\0') {
            return Err(Error::Validation {
                field: "rooms.name".into(),
                message: "Cannot contain null bytes".into(),
            });
        }
        if trimmed.chars().count() > MAX_ROOM_NAME_LENGTH {
            return Err(Error::Validation {
                field: "rooms.name".into(),
                message: format!("Cannot exceed {MAX_ROOM_NAME_LENGTH} characters"),
            });
        }
        Ok(())
    }
}
