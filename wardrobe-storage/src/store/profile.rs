//! Aggregate user profile and the rewards balance it carries.

use super::helpers::{read_slot, write_slot};
use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use tracing::warn;
use wardrobe_model::UserProfile;

const PROFILE_SLOT: &str = "user_profile";

/// Decode a stored profile, tolerating missing fields and corrupt rows.
fn decode_profile(raw: Option<String>) -> UserProfile {
    match raw {
        Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            warn!(error = %e, "corrupt profile record, using defaults");
            UserProfile::default()
        }),
        None => UserProfile::default(),
    }
}

impl WardrobeStore {
    /// The installation's profile, defaults when unset or unreadable.
    pub fn profile(&self) -> UserProfile {
        let raw = self
            .with_collection(Collection::Profile, AccessMode::Read, |conn| {
                read_slot(conn, "profile", PROFILE_SLOT, "data_json")
            })
            .unwrap_or_default();
        decode_profile(raw)
    }

    pub fn set_profile(&self, profile: &UserProfile) -> StorageResult<()> {
        let json = serde_json::to_string(profile)?;
        self.with_collection(Collection::Profile, AccessMode::Write, |conn| {
            write_slot(conn, "profile", PROFILE_SLOT, "data_json", &json)
        })
    }

    /// Current rewards balance, 0 when no profile exists.
    pub fn rewards(&self) -> i64 {
        self.profile().rewards
    }

    /// Adjust the rewards balance and return the new value.
    ///
    /// Read and write share one transaction; concurrent adjustments never
    /// lose an update. Failures propagate — a balance must never be
    /// silently fabricated.
    pub fn update_rewards(&self, delta: i64) -> StorageResult<i64> {
        self.with_collection(Collection::Profile, AccessMode::Write, |conn| {
            let mut profile = decode_profile(read_slot(conn, "profile", PROFILE_SLOT, "data_json")?);
            profile.rewards += delta;
            let json = serde_json::to_string(&profile)
                .map_err(|e| duckdb::Error::ToSqlConversionFailure(Box::new(e)))?;
            write_slot(conn, "profile", PROFILE_SLOT, "data_json", &json)?;
            Ok(profile.rewards)
        })
    }

    /// Increment the visit counter and return the new count.
    pub fn record_visit(&self) -> StorageResult<i64> {
        self.with_collection(Collection::Profile, AccessMode::Write, |conn| {
            let mut profile = decode_profile(read_slot(conn, "profile", PROFILE_SLOT, "data_json")?);
            profile.visits += 1;
            let json = serde_json::to_string(&profile)
                .map_err(|e| duckdb::Error::ToSqlConversionFailure(Box::new(e)))?;
            write_slot(conn, "profile", PROFILE_SLOT, "data_json", &json)?;
            Ok(profile.visits)
        })
    }
}
