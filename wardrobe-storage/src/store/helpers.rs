//! Shared helpers for collection accessors.

use duckdb::{Connection, params};

/// Current time in milliseconds since Unix epoch.
pub(crate) fn now_millis() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Allocate the next id for an auto-id collection. Must run inside the
/// insert's write transaction so two writers never mint the same id.
pub(crate) fn next_id(conn: &Connection, table: &str) -> duckdb::Result<i64> {
    conn.query_row(
        &format!("SELECT COALESCE(MAX(id), 0) + 1 FROM {table}"),
        [],
        |row| row.get(0),
    )
}

/// Point lookup of a fixed-key (single-slot) collection. Absence is a
/// value, not an error.
pub(crate) fn read_slot(
    conn: &Connection,
    table: &str,
    slot: &str,
    column: &str,
) -> duckdb::Result<Option<String>> {
    match conn.query_row(
        &format!("SELECT {column} FROM {table} WHERE slot = ?"),
        params![slot],
        |row| row.get(0),
    ) {
        Ok(value) => Ok(Some(value)),
        Err(duckdb::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Upsert the single row of a fixed-key collection.
pub(crate) fn write_slot(
    conn: &Connection,
    table: &str,
    slot: &str,
    column: &str,
    value: &str,
) -> duckdb::Result<()> {
    conn.execute(
        &format!("INSERT OR REPLACE INTO {table} (slot, {column}) VALUES (?, ?)"),
        params![slot, value],
    )?;
    Ok(())
}
