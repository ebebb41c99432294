//! Embedded, schema-versioned object store for the wardrobe app.
//!
//! A single DuckDB database holds one table per logical collection: the
//! garment catalog, per-item like flags, the referral leaderboard, cached
//! media, and a handful of fixed-key settings (theme, language, profile,
//! preferences, referral code, installation id).
//!
//! # Architecture
//!
//! - The schema is a declarative registry of collections and secondary
//!   indexes, replayed idempotently on open; each version bump is recorded
//!   in an append-only migration ledger
//! - All transactions are opened in one place, so every accessor shares the
//!   same error shape and logging
//! - Getters degrade to documented defaults when the engine fails; setters
//!   and balance-affecting mutators propagate errors

mod error;
mod schema;
mod seed;
mod store;

pub use error::{StorageError, StorageResult};
pub use schema::{Collection, SCHEMA_VERSION, apply_registry, ensure_schema};
pub use seed::ensure_seeded;
pub use store::{AccessMode, WardrobeStore};

use tracing::warn;

/// Open the wardrobe database with stale WAL recovery and resource limits.
///
/// If the initial open fails and a `.wal` file exists alongside the
/// database, it is removed and the open is retried once — an unclean
/// shutdown can leave a WAL file that prevents reopening. Any remaining
/// failure is reported as [`StorageError::Unavailable`] so the caller can
/// surface it once and retry later.
pub fn open_wardrobe_db(path: &std::path::Path) -> StorageResult<duckdb::Connection> {
    let conn = match duckdb::Connection::open(path) {
        Ok(c) => c,
        Err(first_err) => {
            let wal_path = path.with_extension(
                path.extension()
                    .map(|ext| format!("{}.wal", ext.to_string_lossy()))
                    .unwrap_or_else(|| "wal".to_string()),
            );
            if wal_path.exists() {
                warn!(
                    wal = %wal_path.display(),
                    "open failed, removing stale WAL and retrying"
                );
                if std::fs::remove_file(&wal_path).is_ok() {
                    let c = duckdb::Connection::open(path)
                        .map_err(|e| StorageError::Unavailable(e.to_string()))?;
                    apply_resource_limits(&c)?;
                    return Ok(c);
                }
            }
            return Err(StorageError::Unavailable(first_err.to_string()));
        }
    };
    apply_resource_limits(&conn)?;
    Ok(conn)
}

/// Cap memory and threads. DuckDB defaults to ~80% of system RAM and all
/// cores, far more than a settings-and-catalog store needs.
fn apply_resource_limits(conn: &duckdb::Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA memory_limit='256MB'; PRAGMA threads=2;")
        .map_err(|e| StorageError::Unavailable(e.to_string()))?;
    Ok(())
}
