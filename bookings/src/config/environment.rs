//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `BOOKINGS_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;
use std::str::FromStr;

/// Overrides `session.lifetime_hours`.
pub const SESSION_LIFETIME_HOURS_ENV: &str = "BOOKINGS_SESSION_LIFETIME_HOURS";
/// Overrides `forms.first_name_min_length`.
pub const FIRST_NAME_MIN_LENGTH_ENV: &str = "BOOKINGS_FIRST_NAME_MIN_LENGTH";
/// Overrides `maximum_lock_wait_seconds`.
pub const MAXIMUM_LOCK_WAIT_SECONDS_ENV: &str = "BOOKINGS_MAXIMUM_LOCK_WAIT_SECONDS";
/// Overrides `disable_autoinit`.
pub const DISABLE_AUTOINIT_ENV: &str = "BOOKINGS_DISABLE_AUTOINIT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use bookings::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric hours, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(SESSION_LIFETIME_HOURS_ENV) {
            let hours = Self::parse_number(SESSION_LIFETIME_HOURS_ENV, &val)?;
            config
                .session
                .get_or_insert_with(Default::default)
                .lifetime_hours = Some(hours);
        }

        if let Ok(val) = env::var(FIRST_NAME_MIN_LENGTH_ENV) {
            let length = Self::parse_number(FIRST_NAME_MIN_LENGTH_ENV, &val)?;
            config
                .forms
                .get_or_insert_with(Default::default)
                .first_name_min_length = Some(length);
        }

        if let Ok(val) = env::var(MAXIMUM_LOCK_WAIT_SECONDS_ENV) {
            config.maximum_lock_wait_seconds =
                Some(Self::parse_number(MAXIMUM_LOCK_WAIT_SECONDS_ENV, &val)?);
        }

        if let Ok(val) = env::var(DISABLE_AUTOINIT_ENV) {
            config.disable_autoinit = Some(Self::parse_bool(DISABLE_AUTOINIT_ENV, &val)?);
        }

        Ok(())
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
