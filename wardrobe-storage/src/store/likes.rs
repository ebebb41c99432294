//! Per-item like flags.

use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use duckdb::params;

impl WardrobeStore {
    /// Whether an item is liked. Unknown items are simply not liked.
    pub fn like_status(&self, item_id: i64) -> bool {
        self.with_collection(Collection::Likes, AccessMode::Read, |conn| {
            match conn.query_row(
                "SELECT status FROM likes WHERE item_id = ?",
                params![item_id],
                |row| row.get(0),
            ) {
                Ok(status) => Ok(Some(status)),
                Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .unwrap_or_default()
        .unwrap_or(false)
    }

    pub fn set_like_status(&self, item_id: i64, status: bool) -> StorageResult<()> {
        self.with_collection(Collection::Likes, AccessMode::Write, |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO likes (item_id, status) VALUES (?, ?)",
                params![item_id, status],
            )?;
            Ok(())
        })
    }
}
