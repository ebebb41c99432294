//! Core wardrobe store — thread-safe DuckDB wrapper with one accessor
//! module per logical collection.

mod catalog;
mod faq;
pub(crate) mod helpers;
mod images;
mod leaderboard;
mod likes;
mod profile;
mod settings;

use crate::error::{StorageError, StorageResult};
use crate::schema::{Collection, ensure_schema};
use duckdb::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::warn;

/// Transaction access mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

impl AccessMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Thread-safe handle to the wardrobe database.
///
/// Opened once at startup and cloned into whatever layer needs it; clones
/// share one connection. There is no implicit global — a failed open leaves
/// nothing cached, so the caller is free to retry.
#[derive(Clone)]
pub struct WardrobeStore {
    conn: Arc<Mutex<Connection>>,
}

impl WardrobeStore {
    /// Open (or create) the database at the given path and bring its schema
    /// up to date.
    pub fn open(path: &Path) -> StorageResult<Self> {
        let conn = crate::open_wardrobe_db(path)?;
        ensure_schema(&conn)
            .map_err(|e| StorageError::Unavailable(format!("schema migration failed: {e}")))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| StorageError::Unavailable(e.to_string()))?;
        ensure_schema(&conn)
            .map_err(|e| StorageError::Unavailable(format!("schema migration failed: {e}")))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Acquire the connection lock, recovering from poison if a prior
    /// operation panicked while holding it.
    pub(crate) fn lock_conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|poisoned| {
            warn!("recovering store lock from poisoned mutex");
            poisoned.into_inner()
        })
    }

    /// Run one operation against one collection.
    ///
    /// This is the only place a transaction is opened. Write mode brackets
    /// the operation in `BEGIN`/`COMMIT` (rolled back on failure), so a
    /// read-modify-write closure is atomic against every other writer.
    /// Engine failures are logged and mapped to
    /// [`StorageError::Operation`] with the collection and mode attached.
    pub(crate) fn with_collection<T>(
        &self,
        collection: Collection,
        mode: AccessMode,
        op: impl FnOnce(&Connection) -> duckdb::Result<T>,
    ) -> StorageResult<T> {
        let conn = self.lock_conn();
        let result = match mode {
            AccessMode::Read => op(&conn),
            AccessMode::Write => conn.execute_batch("BEGIN TRANSACTION").and_then(|_| {
                match op(&conn) {
                    Ok(value) => conn.execute_batch("COMMIT").map(|_| value),
                    Err(e) => {
                        let _ = conn.execute_batch("ROLLBACK");
                        Err(e)
                    }
                }
            }),
        };

        result.map_err(|source| {
            warn!(
                collection = collection.name(),
                mode = mode.as_str(),
                error = %source,
                "storage operation failed"
            );
            StorageError::Operation {
                collection: collection.name(),
                mode: mode.as_str(),
                source,
            }
        })
    }

    /// Append-only migration ledger, ordered by version.
    pub fn migration_history(&self) -> StorageResult<Vec<(i64, String)>> {
        self.with_collection(Collection::Migrations, AccessMode::Read, |conn| {
            let mut stmt =
                conn.prepare("SELECT version, applied_at FROM migrations ORDER BY version")?;
            let rows: Vec<(i64, String)> = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
                .filter_map(|r| r.ok())
                .collect();
            Ok(rows)
        })
    }

    /// Checkpoint the database to flush the WAL and reclaim space.
    pub fn maintenance(&self) -> StorageResult<()> {
        let conn = self.lock_conn();
        conn.execute_batch("CHECKPOINT")?;
        Ok(())
    }
}
