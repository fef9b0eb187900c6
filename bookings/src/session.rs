//! Per-visitor session storage.
//!
//! Each request carries an opaque [`SessionId`] chosen by the transport
//! layer. Values are stored as JSON under string keys and expire after the
//! store's session lifetime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Opaque identifier of a visitor session.
///
/// # Examples
///
/// ```
/// use bookings::SessionId;
///
/// let id = SessionId::new("abc123").unwrap();
/// assert_eq!(id.as_str(), "abc123");
/// assert!(SessionId::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Creates a session id from a non-blank string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the id is empty or only whitespace.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::Validation {
                field: "session".into(),
                message: "Session id cannot be empty".into(),
            });
        }
        Ok(Self(id))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key/value storage scoped to a session.
///
/// Writing a value (re)starts its expiry clock. Expired values read as
/// absent.
pub trait SessionStore {
    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_value(&self, session: &SessionId, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn put_value(&self, session: &SessionId, key: &str, value: Value) -> Result<()>;

    /// Removes the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn clear(&self, session: &SessionId, key: &str) -> Result<()>;

    /// Reads and decodes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the stored value does not decode
    /// as `T`, or an error from the backing store.
    fn load<T: DeserializeOwned>(&self, session: &SessionId, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        self.get_value(session, key)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(Error::from)
    }

    /// Encodes and stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if `value` cannot be encoded, or an
    /// error from the backing store.
    fn store<T: Serialize>(&self, session: &SessionId, key: &str, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        self.put_value(session, key, serde_json::to_value(value)?)
    }

    /// Reads, decodes and removes the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::load`] and [`SessionStore::clear`].
    fn take<T: DeserializeOwned>(&self, session: &SessionId, key: &str) -> Result<Option<T>>
    where
        Self: Sized,
    {
        let value = self.load(session, key)?;
        if value.is_some() {
            self.clear(session, key)?;
        }
        Ok(value)
    }
}

#[derive(Debug)]
struct Entry {
    value: Value,
    expires_at: i64,
}

/// In-process session store.
///
/// Suitable for a single long-running process and for tests.
///
/// # Examples
///
/// ```
/// use bookings::{MemorySessionStore, SessionId, SessionStore};
///
/// let store = MemorySessionStore::default();
/// let session = SessionId::new("visitor-1").unwrap();
///
/// store.store(&session, "greeting", &"hello").unwrap();
/// let value: Option<String> = store.take(&session, "greeting").unwrap();
/// assert_eq!(value.as_deref(), Some("hello"));
/// assert!(store.get_value(&session, "greeting").unwrap().is_none());
/// ```
#[derive(Debug)]
pub struct MemorySessionStore {
    lifetime: Duration,
    entries: Mutex<HashMap<(SessionId, String), Entry>>,
}

impl MemorySessionStore {
    /// Creates a store whose values expire `lifetime` after being written.
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            lifetime,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<(SessionId, String), Entry>> {
        // a panic while holding the lock leaves the map itself intact
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new(crate::database::DEFAULT_SESSION_LIFETIME)
    }
}

impl SessionStore for MemorySessionStore {
    fn get_value(&self, session: &SessionId, key: &str) -> Result<Option<Value>> {
        let now = chrono::Utc::now().timestamp();
        let entries = self.lock();
        Ok(entries
            .get(&(session.clone(), key.to_string()))
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.value.clone()))
    }

    fn put_value(&self, session: &SessionId, key: &str, value: Value) -> Result<()> {
        let now = chrono::Utc::now().timestamp();
        let expires_at = now.saturating_add(i64::try_from(self.lifetime.as_secs()).unwrap_or(i64::MAX));
        let mut entries = self.lock();
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert((session.clone(), key.to_string()), Entry { value, expires_at });
        Ok(())
    }

    fn clear(&self, session: &SessionId, key: &str) -> Result<()> {
        self.lock().remove(&(session.clone(), key.to_string()));
        Ok(())
    }
}
