//! First-run fixture population.
//!
//! The probe is the catalog collection: a non-empty catalog means the store
//! has already been seeded (or is in real use) and the whole pass is a
//! no-op, so calling this on every startup is safe.

use crate::error::StorageResult;
use crate::store::WardrobeStore;
use tracing::info;
use wardrobe_model::{CachedImage, CatalogItem, FaqEntry, LeaderboardEntry, Preferences, UserProfile};

const FIXTURE_THEME: &str = "default";
const FIXTURE_LANGUAGE: &str = "ar";
const FIXTURE_REFERRAL_CODE: &str = "WELCOME2024";
const FIXTURE_INSTALLATION_ID: &str = "demo-install-0001";
const FIXTURE_STARTING_REWARDS: i64 = 100;

/// Like flags for the fixture catalog, keyed by item id.
const FIXTURE_LIKES: &[(i64, bool)] = &[(1, true), (2, false), (3, true), (4, false), (5, true)];

/// Seed every collection with deterministic fixtures when the catalog is
/// empty. Returns whether a seeding pass ran.
pub fn ensure_seeded(store: &WardrobeStore) -> StorageResult<bool> {
    if store.catalog_count()? > 0 {
        return Ok(false);
    }

    for item in fixture_catalog() {
        store.put_catalog_item(&item)?;
    }
    for entry in fixture_leaderboard() {
        store.put_leaderboard_entry(&entry)?;
    }
    store.replace_faqs(&fixture_faqs())?;
    for &(item_id, status) in FIXTURE_LIKES {
        store.set_like_status(item_id, status)?;
    }
    for image in fixture_images() {
        store.put_image(&image)?;
    }

    store.set_theme(FIXTURE_THEME)?;
    store.set_language(FIXTURE_LANGUAGE)?;
    store.set_profile(&UserProfile {
        visits: 0,
        rewards: FIXTURE_STARTING_REWARDS,
        onboarded: false,
    })?;
    store.set_referral_code(FIXTURE_REFERRAL_CODE)?;
    store.set_preferences(&Preferences::default())?;
    store.set_installation_id(FIXTURE_INSTALLATION_ID)?;

    info!("seeded store with fixture data");
    Ok(true)
}

fn fixture_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            brand: "Atlas Weave".into(),
            price: 299.99,
            image: "/images/item1.jpg".into(),
            date: "2023-03-15".into(),
        },
        CatalogItem {
            id: 2,
            brand: "Mirage Modest".into(),
            price: 349.99,
            image: "/images/item2.jpg".into(),
            date: "2023-03-16".into(),
        },
        CatalogItem {
            id: 3,
            brand: "Cedar Thread".into(),
            price: 279.99,
            image: "/images/item3.jpg".into(),
            date: "2023-03-17".into(),
        },
        CatalogItem {
            id: 4,
            brand: "Saffron Fold".into(),
            price: 399.99,
            image: "/images/item4.jpg".into(),
            date: "2023-03-18".into(),
        },
        CatalogItem {
            id: 5,
            brand: "Ivory Drape".into(),
            price: 329.99,
            image: "/images/item5.jpg".into(),
            date: "2023-03-19".into(),
        },
    ]
}

fn fixture_leaderboard() -> Vec<LeaderboardEntry> {
    (1..=5i64)
        .map(|rank| LeaderboardEntry {
            user_id: format!("user-{rank}"),
            name: format!("User {rank}"),
            referrals: 2 * (6 - rank),
            points: 100 * (6 - rank),
        })
        .collect()
}

fn fixture_faqs() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            id: 1,
            question: "How can I track my order?".into(),
            answer: "Open your account page and choose \"Track order\".".into(),
            category: "orders".into(),
        },
        FaqEntry {
            id: 2,
            question: "What is the return policy?".into(),
            answer: "Unworn items can be returned within 30 days of delivery.".into(),
            category: "returns".into(),
        },
        FaqEntry {
            id: 3,
            question: "Do you ship internationally?".into(),
            answer: "Yes, to most countries — details are shown at checkout.".into(),
            category: "shipping".into(),
        },
    ]
}

fn fixture_images() -> Vec<CachedImage> {
    (1..=5i64)
        .map(|n| CachedImage {
            id: n,
            data: format!("fixture-image-{n}"),
            timestamp: 1_700_000_000_000 + n,
        })
        .collect()
}
