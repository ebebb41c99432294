//! Help-center entries: full scans and bulk refresh.

use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use duckdb::params;
use wardrobe_model::FaqEntry;

fn row_to_entry(row: &duckdb::Row<'_>) -> duckdb::Result<FaqEntry> {
    Ok(FaqEntry {
        id: row.get(0)?,
        question: row.get(1)?,
        answer: row.get(2)?,
        category: row.get(3)?,
    })
}

impl WardrobeStore {
    /// Every FAQ entry, ordered by id. Degrades to empty.
    pub fn faqs(&self) -> Vec<FaqEntry> {
        self.with_collection(Collection::Faq, AccessMode::Read, |conn| {
            let mut stmt =
                conn.prepare("SELECT id, question, answer, category FROM faq ORDER BY id")?;
            let entries: Vec<FaqEntry> = stmt
                .query_map([], |row| row_to_entry(row))?
                .filter_map(|r| r.ok())
                .collect();
            Ok(entries)
        })
        .unwrap_or_default()
    }

    /// FAQ entries in one category, via the category index.
    pub fn faqs_in_category(&self, category: &str) -> Vec<FaqEntry> {
        self.with_collection(Collection::Faq, AccessMode::Read, |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, question, answer, category FROM faq WHERE category = ? ORDER BY id",
            )?;
            let entries: Vec<FaqEntry> = stmt
                .query_map(params![category], |row| row_to_entry(row))?
                .filter_map(|r| r.ok())
                .collect();
            Ok(entries)
        })
        .unwrap_or_default()
    }

    /// Replace the whole collection: clear, then bulk-insert, in one
    /// transaction. An interrupted refresh never leaves a half-empty list.
    pub fn replace_faqs(&self, entries: &[FaqEntry]) -> StorageResult<()> {
        self.with_collection(Collection::Faq, AccessMode::Write, |conn| {
            conn.execute("DELETE FROM faq", [])?;
            let mut stmt = conn
                .prepare("INSERT INTO faq (id, question, answer, category) VALUES (?, ?, ?, ?)")?;
            for entry in entries {
                stmt.execute(params![entry.id, entry.question, entry.answer, entry.category])?;
            }
            Ok(())
        })
    }
}
