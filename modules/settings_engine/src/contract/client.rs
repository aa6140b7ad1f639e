//! Native client trait for consumers of the settings engine
//!
//! View code and other modules talk to the engine through this trait.
//! NO HTTP - direct function calls.

use super::{error::SettingsError, model::{ResolvedValue, SettingEntry}};
use async_trait::async_trait;

/// Settings engine API
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Get all entries, optionally filtered by category
    async fn get_all(&self, category: Option<&str>) -> Result<Vec<SettingEntry>, SettingsError>;

    /// Get a single entry by exact key
    async fn get_by_key(&self, key: &str) -> Result<SettingEntry, SettingsError>;

    /// Create or replace an entry (wholesale replacement)
    async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<SettingEntry, SettingsError>;

    /// Delete an entry by key
    async fn delete(&self, key: &str) -> Result<(), SettingsError>;

    /// Resolve the effective value for a key
    ///
    /// Merges any stored partial override over the compiled-in default for
    /// the key's value shape. Falls back to the default when the store has
    /// not finished loading; callers re-resolve on change notifications.
    async fn resolve(&self, category: &str, key: &str) -> Result<ResolvedValue, SettingsError>;
}
