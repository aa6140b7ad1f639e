//! In-memory settings repository
//!
//! Holds the client-side snapshot of the tenant's settings. The snapshot is
//! empty and unloaded until the first REST fetch completes and installs it
//! via `replace_all`; resolution falls back to defaults until then.

use crate::contract::SettingEntry;
use crate::domain::repository::SettingsRepository;
use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

struct StoreState {
    entries: Vec<SettingEntry>,
    loaded: bool,
}

/// Snapshot-backed in-memory repository
pub struct InMemorySettingsRepository {
    state: RwLock<StoreState>,
}

impl InMemorySettingsRepository {
    /// Create an empty, not-yet-loaded store
    pub fn new() -> Self {
        Self {
            state: RwLock::new(StoreState {
                entries: Vec::new(),
                loaded: false,
            }),
        }
    }

    /// Create a store with an already-installed snapshot
    pub fn preloaded(entries: Vec<SettingEntry>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                entries,
                loaded: true,
            }),
        }
    }
}

impl Default for InMemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for InMemorySettingsRepository {
    async fn upsert(&self, entry: &SettingEntry) -> Result<SettingEntry> {
        let mut state = self.state.write();
        state.entries.retain(|e| e.key != entry.key);
        state.entries.push(entry.clone());
        Ok(entry.clone())
    }

    async fn find_by_key(&self, key: &str) -> Result<Vec<SettingEntry>> {
        let state = self.state.read();
        Ok(state
            .entries
            .iter()
            .filter(|e| e.key == key)
            .cloned()
            .collect())
    }

    async fn find_by_category(&self, category: &str) -> Result<Vec<SettingEntry>> {
        let state = self.state.read();
        Ok(state
            .entries
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<SettingEntry>> {
        Ok(self.state.read().entries.clone())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut state = self.state.write();
        let before = state.entries.len();
        state.entries.retain(|e| e.key != key);
        Ok(state.entries.len() != before)
    }

    async fn replace_all(&self, entries: Vec<SettingEntry>) -> Result<()> {
        let mut state = self.state.write();
        state.entries = entries;
        state.loaded = true;
        Ok(())
    }

    async fn is_loaded(&self) -> Result<bool> {
        Ok(self.state.read().loaded)
    }
}
