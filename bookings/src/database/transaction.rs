//! Transaction management utilities.

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Begins an `IMMEDIATE` transaction.
    ///
    /// The write lock is taken up front, so checks made inside the
    /// transaction stay valid until it commits. Waiting longer than the busy
    /// timeout for the lock yields [`Error::LockTimeout`].
    ///
    /// Dropping the returned transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if the lock cannot be acquired in
    /// time, or [`Error::Persistence`] for other failures.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use bookings::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/bookings.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// let rooms = Database::list_rooms(&tx).unwrap();
    /// tx.commit().unwrap();
    /// # let _ = rooms;
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let seconds = self.config.busy_timeout.as_secs();
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| map_busy(e, seconds))
    }

    /// Runs `f` inside an `IMMEDIATE` transaction, committing on success.
    ///
    /// # Errors
    ///
    /// Returns any error from `f` (after rolling back), or an error from
    /// beginning or committing the transaction.
    pub fn with_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let seconds = self.config.busy_timeout.as_secs();
        let tx = self.begin_transaction()?;
        let value = f(&tx)?;
        tx.commit().map_err(|e| map_busy(e, seconds))?;
        Ok(value)
    }
}

/// Maps `SQLITE_BUSY`/`SQLITE_LOCKED` to [`Error::LockTimeout`].
pub(super) fn map_busy(err: rusqlite::Error, seconds: u64) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if matches!(e.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked) =>
        {
            Error::LockTimeout { seconds }
        }
        _ => Error::Persistence(err),
    }
}
