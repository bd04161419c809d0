use std::{fs, sync::Arc};

use chrono::NaiveDate;
use expense_analytics::{CategoryStore, ExpenseStore, FixedClock, StoreError, SummaryService};
use expense_domain::{CategorySet, ExpenseDraft, ExpenseId};
use expense_storage_json::{JsonCategoryStore, JsonExpenseStore, StoragePaths};
use tempfile::tempdir;

fn fixed_store(dir: &std::path::Path) -> JsonExpenseStore {
    let clock = FixedClock::on(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
    JsonExpenseStore::with_clock(StoragePaths::in_dir(dir).expenses, Arc::new(clock))
}

#[test]
fn missing_expense_file_lists_nothing() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn add_update_delete_roundtrip() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());

    let added = store
        .add(ExpenseDraft::new("Lunch", 12.5, Some("Food".into())))
        .expect("add");
    assert_eq!(
        added.created_at,
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap().and_hms_opt(0, 0, 0)
    );

    let updated = store
        .update(&added.id, ExpenseDraft::new("Brunch", 18.0, None))
        .expect("update");
    assert_eq!(updated.id, added.id);
    assert_eq!(updated.created_at, added.created_at);

    let listed = store.list().expect("list");
    assert_eq!(listed, vec![updated]);

    store.delete(&added.id).expect("delete");
    assert!(store.list().expect("list").is_empty());
}

#[test]
fn unknown_ids_report_not_found() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());
    let missing = ExpenseId::new("nope");

    assert!(matches!(store.delete(&missing), Err(StoreError::NotFound(_))));
    assert!(matches!(
        store.update(&missing, ExpenseDraft::new("x", 1.0, None)),
        Err(StoreError::NotFound(_))
    ));
}

#[test]
fn corrupt_expense_file_is_unavailable() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());
    fs::write(store.path(), "[{").expect("write");

    assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
}

#[test]
fn server_style_records_load_leniently() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());
    fs::write(
        store.path(),
        r#"[
            {"id": 1, "title": "Tea", "amount": 3, "category": "Food", "created_at": "2025-02-01T08:00:00"},
            {"id": 2, "title": "Odd", "amount": "n/a", "category": null, "created_at": null}
        ]"#,
    )
    .expect("write");

    let records = store.list().expect("list");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_str(), "1");
    assert_eq!(records[1].amount, 0.0);
    assert!(records[1].created_at.is_none());
}

#[test]
fn monthly_total_sums_matching_month() {
    let dir = tempdir().expect("tempdir");
    let store = fixed_store(dir.path());
    fs::write(
        store.path(),
        r#"[
            {"id": "a", "amount": 10, "created_at": "2025-02-01"},
            {"id": "b", "amount": 5.5, "created_at": "2025-02-28T23:59:59"},
            {"id": "c", "amount": 99, "created_at": "2025-03-01"},
            {"id": "d", "amount": 7}
        ]"#,
    )
    .expect("write");

    assert_eq!(store.monthly_total(2025, 2).expect("total"), 15.5);
    assert_eq!(store.monthly_total(2024, 2).expect("total"), 0.0);
    assert!(store.monthly_total(2025, 13).is_err());
}

#[test]
fn category_store_persists_custom_labels_only() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCategoryStore::new(StoragePaths::in_dir(dir.path()).categories);
    assert_eq!(store.load().expect("load"), CategorySet::new());

    let set = CategorySet::from_custom(["Gym", "Pets"]);
    store.save(&set).expect("save");

    let raw = fs::read_to_string(store.path()).expect("read");
    assert!(!raw.contains("Food"));
    assert_eq!(store.load().expect("load"), set);
}

#[test]
fn category_store_skips_colliding_labels() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCategoryStore::new(dir.path().join("categories.json"));
    fs::write(store.path(), r#"{"custom": ["Gym", "Rent", "Gym"]}"#).expect("write");

    let loaded = store.load().expect("load");
    assert_eq!(loaded.custom(), ["Gym".to_string()]);
}
