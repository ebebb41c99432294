//! Referral leaderboard: sorted top-N scans and create-or-increment bumps.

use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use duckdb::params;
use wardrobe_model::LeaderboardEntry;

impl WardrobeStore {
    /// Top `n` referrers by points, descending. Ties break on `user_id`
    /// ascending so rankings are stable across scans. Degrades to empty.
    pub fn leaderboard_top(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.with_collection(Collection::Leaderboard, AccessMode::Read, |conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT user_id, name, referrals, points FROM leaderboard \
                 ORDER BY points DESC, user_id ASC LIMIT {n}"
            ))?;
            let entries: Vec<LeaderboardEntry> = stmt
                .query_map([], |row| {
                    Ok(LeaderboardEntry {
                        user_id: row.get(0)?,
                        name: row.get(1)?,
                        referrals: row.get(2)?,
                        points: row.get(3)?,
                    })
                })?
                .filter_map(|r| r.ok())
                .collect();
            Ok(entries)
        })
        .unwrap_or_default()
    }

    /// Credit a referrer: a first bump creates the entry with one referral,
    /// later bumps increment both referrals and points. Lookup and write
    /// share one transaction.
    pub fn bump_leaderboard(&self, user_id: &str, points_delta: i64) -> StorageResult<()> {
        self.with_collection(Collection::Leaderboard, AccessMode::Write, |conn| {
            let existing = match conn.query_row(
                "SELECT name, referrals, points FROM leaderboard WHERE user_id = ?",
                params![user_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            ) {
                Ok(found) => Some(found),
                Err(duckdb::Error::QueryReturnedNoRows) => None,
                Err(e) => return Err(e),
            };

            let (name, referrals, points) = match existing {
                Some((name, referrals, points)) => (name, referrals + 1, points + points_delta),
                None => (format!("User {user_id}"), 1, points_delta),
            };

            conn.execute(
                "INSERT OR REPLACE INTO leaderboard (user_id, name, referrals, points) \
                 VALUES (?, ?, ?, ?)",
                params![user_id, name, referrals, points],
            )?;
            Ok(())
        })
    }

    /// Upsert a full entry (fixtures and imports).
    pub fn put_leaderboard_entry(&self, entry: &LeaderboardEntry) -> StorageResult<()> {
        self.with_collection(Collection::Leaderboard, AccessMode::Write, |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO leaderboard (user_id, name, referrals, points) \
                 VALUES (?, ?, ?, ?)",
                params![entry.user_id, entry.name, entry.referrals, entry.points],
            )?;
            Ok(())
        })
    }
}
