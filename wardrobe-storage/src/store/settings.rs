//! Fixed-key settings: theme, language, preferences, referral code, and
//! the per-installation identifier.

use super::helpers::{read_slot, write_slot};
use super::{AccessMode, WardrobeStore};
use crate::error::StorageResult;
use crate::schema::Collection;
use tracing::warn;
use uuid::Uuid;
use wardrobe_model::Preferences;

const THEME_SLOT: &str = "current_theme";
const LANGUAGE_SLOT: &str = "current_language";
const PREFERENCES_SLOT: &str = "preferences";
const REFERRAL_SLOT: &str = "referral_code";
const INSTALLATION_SLOT: &str = "installation_id";

const DEFAULT_THEME: &str = "default";
const DEFAULT_LANGUAGE: &str = "ar";

impl WardrobeStore {
    /// Active UI theme name, `"default"` when unset or unreadable.
    pub fn theme(&self) -> String {
        self.with_collection(Collection::Themes, AccessMode::Read, |conn| {
            read_slot(conn, "themes", THEME_SLOT, "value")
        })
        .unwrap_or_default()
        .unwrap_or_else(|| DEFAULT_THEME.to_string())
    }

    pub fn set_theme(&self, theme: &str) -> StorageResult<()> {
        self.with_collection(Collection::Themes, AccessMode::Write, |conn| {
            write_slot(conn, "themes", THEME_SLOT, "value", theme)
        })
    }

    /// Active locale, `"ar"` when unset or unreadable.
    pub fn language(&self) -> String {
        self.with_collection(Collection::Language, AccessMode::Read, |conn| {
            read_slot(conn, "language", LANGUAGE_SLOT, "value")
        })
        .unwrap_or_default()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
    }

    pub fn set_language(&self, language: &str) -> StorageResult<()> {
        self.with_collection(Collection::Language, AccessMode::Write, |conn| {
            write_slot(conn, "language", LANGUAGE_SLOT, "value", language)
        })
    }

    /// Persisted UI preferences, falling back to defaults field by field.
    pub fn preferences(&self) -> Preferences {
        let raw = self
            .with_collection(Collection::Preferences, AccessMode::Read, |conn| {
                read_slot(conn, "preferences", PREFERENCES_SLOT, "data_json")
            })
            .unwrap_or_default();

        match raw {
            Some(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                warn!(error = %e, "corrupt preferences record, using defaults");
                Preferences::default()
            }),
            None => Preferences::default(),
        }
    }

    pub fn set_preferences(&self, prefs: &Preferences) -> StorageResult<()> {
        let json = serde_json::to_string(prefs)?;
        self.with_collection(Collection::Preferences, AccessMode::Write, |conn| {
            write_slot(conn, "preferences", PREFERENCES_SLOT, "data_json", &json)
        })
    }

    /// This installation's referral code, `None` until one is assigned.
    pub fn referral_code(&self) -> Option<String> {
        self.with_collection(Collection::Referral, AccessMode::Read, |conn| {
            read_slot(conn, "referral", REFERRAL_SLOT, "code")
        })
        .unwrap_or_default()
    }

    pub fn set_referral_code(&self, code: &str) -> StorageResult<()> {
        self.with_collection(Collection::Referral, AccessMode::Write, |conn| {
            write_slot(conn, "referral", REFERRAL_SLOT, "code", code)
        })
    }

    /// Stable per-installation identifier.
    ///
    /// Mints, persists, and returns a fresh v4 UUID on first use — lookup
    /// and insert share one write transaction, so concurrent first calls
    /// agree on the same id.
    pub fn installation_id(&self) -> StorageResult<String> {
        self.with_collection(Collection::Installation, AccessMode::Write, |conn| {
            if let Some(existing) = read_slot(conn, "installation", INSTALLATION_SLOT, "value")? {
                return Ok(existing);
            }
            let fresh = Uuid::new_v4().to_string();
            write_slot(conn, "installation", INSTALLATION_SLOT, "value", &fresh)?;
            Ok(fresh)
        })
    }

    /// Overwrite the installation identifier (fixtures and imports).
    pub fn set_installation_id(&self, id: &str) -> StorageResult<()> {
        self.with_collection(Collection::Installation, AccessMode::Write, |conn| {
            write_slot(conn, "installation", INSTALLATION_SLOT, "value", id)
        })
    }
}
