//! In-memory key-value boundary
//!
//! Stands in for web storage: single-key operations are serialized, and a
//! batch applied through `apply` becomes visible to readers all at once.
//! One instance models the cross-tab boundary (share the Arc between tab
//! services) or a tab-local boundary (one instance per tab).

use crate::domain::storage::{StorageBoundary, StorageOp};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};

/// RwLock-backed key-value store
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty boundary
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBoundary for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.data.read().get(key).cloned()
    }

    fn apply(&self, ops: &[StorageOp]) -> anyhow::Result<()> {
        // Whole batch under one write lock: readers see none or all of it
        let mut data = self.data.write();
        for op in ops {
            match op {
                StorageOp::Set(key, value) => {
                    data.insert(key.clone(), value.clone());
                }
                StorageOp::Remove(key) => {
                    data.remove(key);
                }
            }
        }
        Ok(())
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.data
            .read()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
