//! Declarative collection registry and versioned schema migrations.
//!
//! The registry is an ordered list of collections, each with its DDL and
//! secondary indexes. Every statement uses `IF NOT EXISTS`, so the whole
//! registry is replayed on every version bump — creating something that
//! already exists is a no-op, never an error. Migrations are additive only;
//! there is no downgrade path.

use crate::error::StorageResult;
use duckdb::{Connection, params};
use tracing::info;

/// Current schema version. Bumped whenever a collection or index is added;
/// a database behind this version replays the registry and records the
/// transition in the `migrations` ledger.
pub const SCHEMA_VERSION: i64 = 12;

/// Logical collections, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Themes,
    Profile,
    Likes,
    CatalogItems,
    Referral,
    Leaderboard,
    Images,
    Installation,
    Language,
    Preferences,
    Migrations,
    Faq,
}

impl Collection {
    /// Backing table name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Themes => "themes",
            Self::Profile => "profile",
            Self::Likes => "likes",
            Self::CatalogItems => "catalog_items",
            Self::Referral => "referral",
            Self::Leaderboard => "leaderboard",
            Self::Images => "images",
            Self::Installation => "installation",
            Self::Language => "language",
            Self::Preferences => "preferences",
            Self::Migrations => "migrations",
            Self::Faq => "faq",
        }
    }
}

/// A non-unique secondary index over one column.
pub(crate) struct IndexDef {
    pub name: &'static str,
    pub column: &'static str,
}

/// One registry entry: a collection, its DDL, and its secondary indexes.
pub(crate) struct CollectionDef {
    pub collection: Collection,
    pub ddl: &'static str,
    pub indexes: &'static [IndexDef],
}

const THEMES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS themes (
    slot VARCHAR PRIMARY KEY,
    value VARCHAR NOT NULL
);
"#;

const PROFILE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS profile (
    slot VARCHAR PRIMARY KEY,
    data_json TEXT NOT NULL
);
"#;

const LIKES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS likes (
    item_id BIGINT PRIMARY KEY,
    status BOOLEAN NOT NULL
);
"#;

const CATALOG_ITEMS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS catalog_items (
    id BIGINT PRIMARY KEY,
    brand VARCHAR NOT NULL,
    price DOUBLE NOT NULL,
    image VARCHAR NOT NULL,
    date VARCHAR NOT NULL
);
"#;

const REFERRAL_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS referral (
    slot VARCHAR PRIMARY KEY,
    code VARCHAR NOT NULL
);
"#;

const LEADERBOARD_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS leaderboard (
    user_id VARCHAR PRIMARY KEY,
    name VARCHAR NOT NULL,
    referrals BIGINT NOT NULL,
    points BIGINT NOT NULL
);
"#;

const IMAGES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS images (
    id BIGINT PRIMARY KEY,
    data TEXT NOT NULL,
    timestamp BIGINT NOT NULL
);
"#;

const INSTALLATION_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS installation (
    slot VARCHAR PRIMARY KEY,
    value VARCHAR NOT NULL
);
"#;

const LANGUAGE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS language (
    slot VARCHAR PRIMARY KEY,
    value VARCHAR NOT NULL
);
"#;

const PREFERENCES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS preferences (
    slot VARCHAR PRIMARY KEY,
    data_json TEXT NOT NULL
);
"#;

/// Migration ledger — append-only audit trail of schema version bumps.
const MIGRATIONS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS migrations (
    version BIGINT PRIMARY KEY,
    applied_at VARCHAR NOT NULL
);
"#;

const FAQ_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS faq (
    id BIGINT PRIMARY KEY,
    question VARCHAR NOT NULL,
    answer VARCHAR NOT NULL,
    category VARCHAR NOT NULL
);
"#;

pub(crate) const REGISTRY: &[CollectionDef] = &[
    CollectionDef {
        collection: Collection::Themes,
        ddl: THEMES_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Profile,
        ddl: PROFILE_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Likes,
        ddl: LIKES_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::CatalogItems,
        ddl: CATALOG_ITEMS_DDL,
        indexes: &[IndexDef {
            name: "idx_catalog_items_brand",
            column: "brand",
        }],
    },
    CollectionDef {
        collection: Collection::Referral,
        ddl: REFERRAL_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Leaderboard,
        ddl: LEADERBOARD_DDL,
        indexes: &[IndexDef {
            name: "idx_leaderboard_points",
            column: "points",
        }],
    },
    CollectionDef {
        collection: Collection::Images,
        ddl: IMAGES_DDL,
        indexes: &[IndexDef {
            name: "idx_images_timestamp",
            column: "timestamp",
        }],
    },
    CollectionDef {
        collection: Collection::Installation,
        ddl: INSTALLATION_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Language,
        ddl: LANGUAGE_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Preferences,
        ddl: PREFERENCES_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Migrations,
        ddl: MIGRATIONS_DDL,
        indexes: &[],
    },
    CollectionDef {
        collection: Collection::Faq,
        ddl: FAQ_DDL,
        indexes: &[IndexDef {
            name: "idx_faq_category",
            column: "category",
        }],
    },
];

/// Replay the full registry. Safe to call any number of times.
pub fn apply_registry(conn: &Connection) -> StorageResult<()> {
    for def in REGISTRY {
        conn.execute_batch(def.ddl)?;
        for index in def.indexes {
            conn.execute_batch(&format!(
                "CREATE INDEX IF NOT EXISTS {} ON {}({});",
                index.name,
                def.collection.name(),
                index.column
            ))?;
        }
    }
    Ok(())
}

/// Bring the database up to [`SCHEMA_VERSION`].
///
/// Bootstraps the migration ledger, compares the stored version, and when
/// behind replays the registry and appends a `{version, applied_at}` row.
/// Prior collections and their data are never touched.
pub fn ensure_schema(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(MIGRATIONS_DDL)?;

    let stored: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM migrations",
        [],
        |row| row.get(0),
    )?;

    if stored < SCHEMA_VERSION {
        apply_registry(conn)?;
        conn.execute(
            "INSERT OR REPLACE INTO migrations (version, applied_at) VALUES (?, ?)",
            params![SCHEMA_VERSION, chrono::Utc::now().to_rfc3339()],
        )?;
        info!(from = stored, to = SCHEMA_VERSION, "schema migrated");
    }

    Ok(())
}
