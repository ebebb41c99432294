//! Garment catalog: paginated brand-filtered scans and item writes.

use super::helpers::next_id;
use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use duckdb::params;
use wardrobe_model::{CatalogItem, CatalogPage};

/// WHERE clause for a case-insensitive brand substring match. Empty search
/// keeps the scan unfiltered.
fn brand_filter_clause(search: &str) -> String {
    if search.is_empty() {
        return String::new();
    }
    let escaped = search.replace('\'', "''");
    format!(" WHERE brand ILIKE '%{escaped}%'")
}

impl WardrobeStore {
    /// One page of the catalog.
    ///
    /// The scan is ordered by id (insertion order), so concatenating pages
    /// of the same size walks every item exactly once. `next_cursor` is
    /// `page + 1` while filtered items remain past this page. Degrades to
    /// an empty page on engine failure.
    pub fn catalog_page(&self, page: u32, page_size: u32, search: &str) -> CatalogPage {
        if page_size == 0 {
            return CatalogPage::empty();
        }

        self.with_collection(Collection::CatalogItems, AccessMode::Read, |conn| {
            let where_clause = brand_filter_clause(search);

            let total: i64 = conn.query_row(
                &format!("SELECT COUNT(*) FROM catalog_items{where_clause}"),
                [],
                |row| row.get(0),
            )?;

            let offset = i64::from(page) * i64::from(page_size);
            let mut stmt = conn.prepare(&format!(
                "SELECT id, brand, price, image, date FROM catalog_items{where_clause} \
                 ORDER BY id LIMIT {page_size} OFFSET {offset}"
            ))?;
            let items: Vec<CatalogItem> = stmt
                .query_map([], |row| {
                    Ok(CatalogItem {
                        id: row.get(0)?,
                        brand: row.get(1)?,
                        price: row.get(2)?,
                        image: row.get(3)?,
                        date: row.get(4)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();

            let next_cursor = if total > offset + items.len() as i64 {
                Some(page + 1)
            } else {
                None
            };

            Ok(CatalogPage { items, next_cursor })
        })
        .unwrap_or_else(|_| CatalogPage::empty())
    }

    /// Insert a new item, allocating its id inside the write transaction.
    pub fn add_catalog_item(
        &self,
        brand: &str,
        price: f64,
        image: &str,
        date: &str,
    ) -> StorageResult<i64> {
        self.with_collection(Collection::CatalogItems, AccessMode::Write, |conn| {
            let id = next_id(conn, "catalog_items")?;
            conn.execute(
                "INSERT INTO catalog_items (id, brand, price, image, date) VALUES (?, ?, ?, ?, ?)",
                params![id, brand, price, image, date],
            )?;
            Ok(id)
        })
    }

    /// Upsert an item under its own id (fixtures and imports).
    pub fn put_catalog_item(&self, item: &CatalogItem) -> StorageResult<()> {
        self.with_collection(Collection::CatalogItems, AccessMode::Write, |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO catalog_items (id, brand, price, image, date) \
                 VALUES (?, ?, ?, ?, ?)",
                params![item.id, item.brand, item.price, item.image, item.date],
            )?;
            Ok(())
        })
    }

    /// Total item count, used by the seeder's emptiness probe.
    pub fn catalog_count(&self) -> StorageResult<i64> {
        self.with_collection(Collection::CatalogItems, AccessMode::Read, |conn| {
            conn.query_row("SELECT COUNT(*) FROM catalog_items", [], |row| row.get(0))
        })
    }
}
