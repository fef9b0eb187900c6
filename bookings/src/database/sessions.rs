//! `SQLite`-backed session storage.

use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::error::Result;
use crate::session::{SessionId, SessionStore};

use super::connection::Database;
use super::operations::now_unix;

const SELECT_SESSION_VALUE: &str = r"
    SELECT value FROM sessions
    WHERE session_id = ? AND key = ? AND expires_at > ?
";

const UPSERT_SESSION_VALUE: &str = r"
    INSERT OR REPLACE INTO sessions (session_id, key, value, expires_at)
    VALUES (?, ?, ?, ?)
";

const DELETE_SESSION_VALUE: &str = "DELETE FROM sessions WHERE session_id = ? AND key = ?";

const DELETE_EXPIRED_SESSIONS: &str = "DELETE FROM sessions WHERE expires_at <= ?";

impl Database {
    /// Removes expired session values, returning how many were deleted.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn purge_expired_sessions(&self) -> Result<usize> {
        Ok(self.conn.execute(DELETE_EXPIRED_SESSIONS, [now_unix()])?)
    }

    fn session_expiry(&self) -> i64 {
        let lifetime = i64::try_from(self.config.session_lifetime.as_secs()).unwrap_or(i64::MAX);
        now_unix().saturating_add(lifetime)
    }
}

impl SessionStore for Database {
    fn get_value(&self, session: &SessionId, key: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                SELECT_SESSION_VALUE,
                params![session.as_str(), key, now_unix()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(raw.map(|text| serde_json::from_str(&text)).transpose()?)
    }

    fn put_value(&self, session: &SessionId, key: &str, value: Value) -> Result<()> {
        let purged = self.purge_expired_sessions()?;
        if purged > 0 {
            log::debug!("purged {purged} expired session value(s)");
        }
        self.conn.execute(
            UPSERT_SESSION_VALUE,
            params![
                session.as_str(),
                key,
                serde_json::to_string(&value)?,
                self.session_expiry()
            ],
        )?;
        Ok(())
    }

    fn clear(&self, session: &SessionId, key: &str) -> Result<()> {
        self.conn
            .execute(DELETE_SESSION_VALUE, params![session.as_str(), key])?;
        Ok(())
    }
}
