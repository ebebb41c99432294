//! Cached media blobs, stored base64-encoded.

use super::helpers::{next_id, now_millis};
use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use duckdb::params;
use wardrobe_model::CachedImage;

impl WardrobeStore {
    /// Append an image, stamping it with the current time. Returns its id.
    pub fn save_image(&self, data: &str) -> StorageResult<i64> {
        self.with_collection(Collection::Images, AccessMode::Write, |conn| {
            let id = next_id(conn, "images")?;
            conn.execute(
                "INSERT INTO images (id, data, timestamp) VALUES (?, ?, ?)",
                params![id, data, now_millis()],
            )?;
            Ok(id)
        })
    }

    /// A single image's payload, `None` when unknown or unreadable.
    pub fn image(&self, id: i64) -> Option<String> {
        self.with_collection(Collection::Images, AccessMode::Read, |conn| {
            match conn.query_row(
                "SELECT data FROM images WHERE id = ?",
                params![id],
                |row| row.get(0),
            ) {
                Ok(data) => Ok(Some(data)),
                Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
                Err(e) => Err(e),
            }
        })
        .unwrap_or_default()
    }

    /// Every cached image, newest first via the timestamp index.
    pub fn all_images(&self) -> Vec<CachedImage> {
        self.with_collection(Collection::Images, AccessMode::Read, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, data, timestamp FROM images ORDER BY timestamp DESC, id ASC",
            )?;
            let images: Vec<CachedImage> = stmt
                .query_map([], |row| {
                    Ok(CachedImage {
                        id: row.get(0)?,
                        data: row.get(1)?,
                        timestamp: row.get(2)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();
            Ok(images)
        })
        .unwrap_or_default()
    }

    /// Upsert an image with a caller-chosen id and timestamp (fixtures).
    pub fn put_image(&self, image: &CachedImage) -> StorageResult<()> {
        self.with_collection(Collection::Images, AccessMode::Write, |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO images (id, data, timestamp) VALUES (?, ?, ?)",
                params![image.id, image.data, image.timestamp],
            )?;
            Ok(())
        })
    }
}
