use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use once_cell::sync::Lazy;
use tally_core::{
    ledger::{ConfirmationGate, LedgerStore},
    storage::JsonStorage,
};
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Scripted stand-in for the interactive confirmation gate.
pub struct ScriptedGate {
    answer: bool,
    pub asked: usize,
}

impl ScriptedGate {
    pub fn yes() -> Self {
        Self {
            answer: true,
            asked: 0,
        }
    }

    pub fn no() -> Self {
        Self {
            answer: false,
            asked: 0,
        }
    }
}

impl ConfirmationGate for ScriptedGate {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.asked += 1;
        self.answer
    }
}

/// Creates a store backed by a unique temp directory; the directory path is
/// returned so the blob can be reopened or inspected.
pub fn temp_store() -> (LedgerStore, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let storage = JsonStorage::new(Some(base.clone())).expect("create json storage backend");
    (LedgerStore::load(Box::new(storage)), base)
}

/// Reloads a store from the same directory, simulating a process restart.
pub fn reopen_store(base: &Path) -> LedgerStore {
    let storage = JsonStorage::new(Some(base.to_path_buf())).expect("reopen json storage backend");
    LedgerStore::load(Box::new(storage))
}
