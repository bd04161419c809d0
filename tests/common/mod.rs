use std::{fs, path::PathBuf, sync::Mutex};

use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated data directory plus a (not yet existing) config path inside it.
pub fn setup_test_env() -> (PathBuf, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let data_dir = base.join("data");
    fs::create_dir_all(&data_dir).expect("create data dir");
    (data_dir, base.join("config.json"))
}

/// Seeds `expenses.json` with the three-record dashboard scenario.
#[allow(dead_code)]
pub fn seed_scenario(data_dir: &std::path::Path) {
    fs::write(
        data_dir.join("expenses.json"),
        r#"[
  {"id": 1, "title": "Groceries", "amount": 100, "category": "Food", "created_at": "2025-01-15T09:00:00"},
  {"id": 2, "title": "Takeaway", "amount": 50, "category": "Food", "created_at": "2025-02-10T19:30:00"},
  {"id": 3, "title": "Deposit", "amount": 25, "category": "Rent", "created_at": "2025-02-20T12:00:00"}
]"#,
    )
    .expect("seed expenses");
}
