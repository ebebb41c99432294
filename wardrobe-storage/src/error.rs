//! Error types for the wardrobe store.

use thiserror::Error;

/// All errors that can surface from store operations.
///
/// Absence of a key is never an error: point lookups return `Option` or a
/// documented default instead.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The engine could not be opened at all (quota, corruption, locked
    /// file). Fatal to every accessor until the open is retried.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A single transaction failed. Recoverable — the caller may retry.
    #[error("{mode} operation on {collection} failed: {source}")]
    Operation {
        collection: &'static str,
        mode: &'static str,
        #[source]
        source: duckdb::Error,
    },

    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;
