//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, FormsConfig, SessionConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use bookings::config::{Config, ConfigMerger};
///
/// let low = Config { maximum_lock_wait_seconds: Some(1), ..Default::default() };
/// let high = Config { maximum_lock_wait_seconds: Some(9), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(9));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Rooms: the whole list is replaced, never combined
    /// - Session and form settings: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.rooms.is_some() {
            target.rooms.clone_from(&source.rooms);
        }

        if let Some(ref source_session) = source.session {
            target.session = Some(match &target.session {
                Some(target_session) => SessionConfig {
                    lifetime_hours: source_session
                        .lifetime_hours
                        .or(target_session.lifetime_hours),
                },
                None => source_session.clone(),
            });
        }

        if let Some(ref source_forms) = source.forms {
            target.forms = Some(match &target.forms {
                Some(target_forms) => FormsConfig {
                    first_name_min_length: source_forms
                        .first_name_min_length
                        .or(target_forms.first_name_min_length),
                },
                None => source_forms.clone(),
            });
        }
    }
}
