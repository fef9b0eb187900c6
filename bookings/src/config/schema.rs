//! Configuration schema definitions.
//!
//! This module defines the configuration structure for bookings: the room
//! catalog, session lifetime, contact form rules and lock behavior.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::forms::DEFAULT_FIRST_NAME_MIN_LENGTH;
use crate::room::{default_rooms, Room, RoomId};

/// Default session lifetime in hours.
pub const DEFAULT_SESSION_LIFETIME_HOURS: u64 = 24;

/// Default maximum wait for the database write lock, in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from several
/// sources can be merged. The accessor methods fill in defaults.
///
/// # Examples
///
/// ```
/// use bookings::config::{Config, SessionConfig};
/// use std::time::Duration;
///
/// let config = Config {
///     session: Some(SessionConfig { lifetime_hours: Some(2) }),
///     ..Default::default()
/// };
/// assert_eq!(config.session_lifetime(), Duration::from_secs(2 * 3600));
/// assert_eq!(config.first_name_min_length(), 3);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rooms seeded into the catalog.
    pub rooms: Option<Vec<RoomConfig>>,

    /// Visitor session settings.
    pub session: Option<SessionConfig>,

    /// Contact form settings.
    pub forms: Option<FormsConfig>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,
}

impl Config {
    /// The configured rooms, or the default pair when none are configured.
    #[must_use]
    pub fn room_catalog(&self) -> Vec<Room> {
        self.rooms.as_ref().map_or_else(default_rooms, |rooms| {
            rooms.iter().map(|r| Room::new(r.id, r.name.clone())).collect()
        })
    }

    /// How long session values stay readable after being written.
    #[must_use]
    pub fn session_lifetime(&self) -> Duration {
        let hours = self
            .session
            .as_ref()
            .and_then(|s| s.lifetime_hours)
            .unwrap_or(DEFAULT_SESSION_LIFETIME_HOURS);
        Duration::from_secs(hours.saturating_mul(3600))
    }

    /// Minimum length of the first name on the reservation form.
    #[must_use]
    pub fn first_name_min_length(&self) -> usize {
        self.forms
            .as_ref()
            .and_then(|f| f.first_name_min_length)
            .unwrap_or(DEFAULT_FIRST_NAME_MIN_LENGTH)
    }

    /// Maximum wait for the database write lock.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Whether a missing database should be treated as an error.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// A room entry in the configuration file.
///
/// ```yaml
/// rooms:
///   - id: 1
///     name: General's Quarters
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RoomConfig {
    /// Room id; must be positive and unique.
    pub id: RoomId,
    /// Display name; must not be blank.
    pub name: String,
}

/// Visitor session settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Hours a session value stays readable after being written.
    pub lifetime_hours: Option<u64>,
}

/// Contact form settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FormsConfig {
    /// Minimum number of characters in the first name.
    pub first_name_min_length: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.room_catalog(), default_rooms());
        assert_eq!(config.session_lifetime(), Duration::from_secs(24 * 3600));
        assert_eq!(config.first_name_min_length(), 3);
        assert_eq!(config.lock_wait(), Duration::from_secs(5));
        assert!(!config.autoinit_disabled());
    }

    #[test]
    fn test_config_deny_unknown_fields() {
        let yaml = r"
maximum_lock_wait_seconds: 5
unknown_field: value
";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_nested_deny_unknown_fields() {
        let yaml = r"
session:
  lifetime_minutes: 5
";
        let result: Result<Config, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_complete_config() {
        let yaml = r"
disable_autoinit: true
maximum_lock_wait_seconds: 10
rooms:
  - id: 1
    name: General's Quarters
  - id: 3
    name: Colonel's Loft
session:
  lifetime_hours: 12
forms:
  first_name_min_length: 2
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.autoinit_disabled());
        assert_eq!(config.lock_wait(), Duration::from_secs(10));
        assert_eq!(config.session_lifetime(), Duration::from_secs(12 * 3600));
        assert_eq!(config.first_name_min_length(), 2);

        let rooms = config.room_catalog();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[1], Room::new(3, "Colonel's Loft"));
    }
}
