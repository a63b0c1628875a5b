use std::path::{Path, PathBuf};
use std::sync::Mutex;

use envelope_core::{core::LedgerStore, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated store backed by a unique directory for each test.
pub fn setup_store() -> (LedgerStore, PathBuf) {
    let base = setup_base_dir();
    (open_store(&base), base)
}

/// Reserves a unique directory without opening a store on it.
pub fn setup_base_dir() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Opens (or reopens) a store over an existing base directory.
pub fn open_store(base: &Path) -> LedgerStore {
    let storage = JsonStorage::new(Some(base.to_path_buf())).expect("create json storage backend");
    LedgerStore::open(Box::new(storage)).expect("open ledger store")
}

/// Known two-month fixture: January with renamed pots and budgets 300/200,
/// one expense in each pot; February empty with its own budgets.
pub const TWO_MONTH_FIXTURE: &str = r#"{
  "schemaVersion": 1,
  "activeMonthKey": "2026-01",
  "activePotId": "potA",
  "months": {
    "2026-01": {
      "pots": {
        "potA": { "name": "Groceries", "startingBudget": 300.0 },
        "potB": { "name": "Fun", "startingBudget": 200.0 }
      },
      "transactions": [
        {
          "id": "7f2f2c1e-58a3-4f2b-9a44-8c8f5ad1a001",
          "potId": "potA",
          "amount": 45.5,
          "note": "Supermarket",
          "timestamp": "2026-01-10T09:30:00Z"
        },
        {
          "id": "7f2f2c1e-58a3-4f2b-9a44-8c8f5ad1a002",
          "potId": "potB",
          "amount": 12.0,
          "note": "Cinema",
          "timestamp": "2026-01-12T20:00:00Z"
        }
      ]
    },
    "2026-02": {
      "pots": {
        "potA": { "name": "Groceries", "startingBudget": 310.0 },
        "potB": { "name": "Fun", "startingBudget": 190.0 }
      },
      "transactions": []
    }
  }
}"#;
