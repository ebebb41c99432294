//! Typed records for the wardrobe store's collections.
//!
//! Every collection stores one of these shapes. Fallback values live in the
//! `Default` impls rather than being re-derived at each call site, so a
//! record read from an older database fills its missing fields uniformly.

use serde::{Deserialize, Serialize};

/// A single garment in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: i64,
    pub brand: String,
    pub price: f64,
    pub image: String,
    pub date: String,
}

/// One page of a catalog scan.
///
/// `next_cursor` is the next page number when more filtered items remain,
/// `None` on the last page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub next_cursor: Option<u32>,
}

impl CatalogPage {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_cursor: None,
        }
    }
}

/// A ranked referrer on the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub referrals: i64,
    pub points: i64,
}

/// A help-center entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: String,
}

/// A cached media blob, stored base64-encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedImage {
    pub id: i64,
    pub data: String,
    pub timestamp: i64,
}

/// Aggregate per-installation profile: visit counters, reward balance, flags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub visits: i64,
    pub rewards: i64,
    pub onboarded: bool,
}

/// UI preferences persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub items_per_page: u32,
    pub show_theme_slider: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            items_per_page: 10,
            show_theme_slider: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_defaults_are_zeroed() {
        let profile = UserProfile::default();
        assert_eq!(profile.visits, 0);
        assert_eq!(profile.rewards, 0);
        assert!(!profile.onboarded);
    }

    #[test]
    fn preferences_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.items_per_page, 10);
        assert!(prefs.show_theme_slider);
    }

    #[test]
    fn profile_fills_missing_fields_from_defaults() {
        let profile: UserProfile = serde_json::from_str(r#"{"rewards": 42}"#).unwrap();
        assert_eq!(profile.rewards, 42);
        assert_eq!(profile.visits, 0);
        assert!(!profile.onboarded);
    }

    #[test]
    fn preferences_fill_missing_fields_from_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"show_theme_slider": false}"#).unwrap();
        assert!(!prefs.show_theme_slider);
        assert_eq!(prefs.items_per_page, 10);
    }

    #[test]
    fn catalog_page_round_trips() {
        let page = CatalogPage {
            items: vec![CatalogItem {
                id: 1,
                brand: "Atlas Weave".into(),
                price: 299.99,
                image: "/images/item1.jpg".into(),
                date: "2023-03-15".into(),
            }],
            next_cursor: Some(1),
        };
        let json = serde_json::to_string(&page).unwrap();
        let back: CatalogPage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, page);
    }
}
