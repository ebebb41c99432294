use pretty_assertions::assert_eq;
use wardrobe_storage::{SCHEMA_VERSION, WardrobeStore, apply_registry, ensure_schema, ensure_seeded};

// ── Schema & migrations ──────────────────────────────────────────

#[test]
fn registry_replay_is_idempotent() {
    let conn = duckdb::Connection::open_in_memory().unwrap();
    apply_registry(&conn).unwrap();
    apply_registry(&conn).unwrap();
}

#[test]
fn ensure_schema_records_one_version_row() {
    let conn = duckdb::Connection::open_in_memory().unwrap();
    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn fresh_store_ledger_holds_current_version() {
    let store = WardrobeStore::open_in_memory().unwrap();
    let history = store.migration_history().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].0, SCHEMA_VERSION);
    assert!(!history[0].1.is_empty());
}

// ── Seeding ──────────────────────────────────────────────────────

#[test]
fn seeding_populates_every_collection() {
    let store = WardrobeStore::open_in_memory().unwrap();
    assert!(ensure_seeded(&store).unwrap());

    let page = store.catalog_page(0, 10, "");
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.next_cursor, None);

    assert_eq!(store.theme(), "default");
    assert_eq!(store.language(), "ar");
    assert_eq!(store.rewards(), 100);
    assert_eq!(store.referral_code(), Some("WELCOME2024".to_string()));
    assert_eq!(store.installation_id().unwrap(), "demo-install-0001");
    assert_eq!(store.faqs().len(), 3);
    assert_eq!(store.all_images().len(), 5);

    let top = store.leaderboard_top(10);
    assert_eq!(top.len(), 5);
    let points: Vec<i64> = top.iter().map(|e| e.points).collect();
    assert_eq!(points, vec![500, 400, 300, 200, 100]);

    assert!(store.like_status(1));
    assert!(!store.like_status(2));
}

#[test]
fn seeding_twice_is_a_noop() {
    let store = WardrobeStore::open_in_memory().unwrap();
    assert!(ensure_seeded(&store).unwrap());
    assert!(!ensure_seeded(&store).unwrap());

    assert_eq!(store.catalog_page(0, 10, "").items.len(), 5);
    assert_eq!(store.faqs().len(), 3);
}

#[test]
fn nonempty_catalog_blocks_seeding() {
    let store = WardrobeStore::open_in_memory().unwrap();
    store
        .add_catalog_item("Own Brand", 10.0, "/own.jpg", "2024-01-01")
        .unwrap();

    assert!(!ensure_seeded(&store).unwrap());
    assert_eq!(store.catalog_page(0, 10, "").items.len(), 1);
    assert_eq!(store.referral_code(), None);
}

#[test]
fn likes_override_after_seeding() {
    let store = WardrobeStore::open_in_memory().unwrap();
    ensure_seeded(&store).unwrap();

    store.set_like_status(3, true).unwrap();
    assert!(store.like_status(3));
    assert!(!store.like_status(4));
}

#[test]
fn seeded_catalog_paginates_in_stable_order() {
    let store = WardrobeStore::open_in_memory().unwrap();
    ensure_seeded(&store).unwrap();

    let first = store.catalog_page(0, 2, "");
    assert_eq!(first.items.len(), 2);
    assert_eq!(first.next_cursor, Some(1));

    let second = store.catalog_page(1, 2, "");
    assert_eq!(second.items.len(), 2);
    assert_eq!(second.next_cursor, Some(2));

    let third = store.catalog_page(2, 2, "");
    assert_eq!(third.items.len(), 1);
    assert_eq!(third.next_cursor, None);

    let ids: Vec<i64> = first
        .items
        .iter()
        .chain(second.items.iter())
        .chain(third.items.iter())
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// ── Reopen ───────────────────────────────────────────────────────

#[test]
fn reopen_preserves_data_and_skips_reseed() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("wardrobe.db");

    {
        let store = WardrobeStore::open(&db_path).unwrap();
        assert!(ensure_seeded(&store).unwrap());
        store.set_theme("noir").unwrap();
        store.update_rewards(50).unwrap();
        store.maintenance().unwrap();
    }

    let store = WardrobeStore::open(&db_path).unwrap();
    assert!(!ensure_seeded(&store).unwrap());

    assert_eq!(store.theme(), "noir");
    assert_eq!(store.rewards(), 150);
    assert_eq!(store.catalog_page(0, 10, "").items.len(), 5);

    // A second open did not record a second migration
    assert_eq!(store.migration_history().unwrap().len(), 1);
}

#[test]
fn open_failure_reports_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    // A directory at the database path cannot be opened as a database
    let blocked = dir.path().join("blocked.db");
    std::fs::create_dir(&blocked).unwrap();

    let result = WardrobeStore::open(&blocked);
    assert!(matches!(
        result,
        Err(wardrobe_storage::StorageError::Unavailable(_))
    ));
}
