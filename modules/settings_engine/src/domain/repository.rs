//! Repository trait for the settings store
//!
//! The trait defines the interface over the store snapshot.
//! The in-memory implementation is in infra/storage/memory.rs

use crate::contract::SettingEntry;
use anyhow::Result;
use async_trait::async_trait;

/// Repository over the tenant's settings snapshot
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Create or replace an entry (wholesale replacement by key)
    async fn upsert(&self, entry: &SettingEntry) -> Result<SettingEntry>;

    /// Find all entries whose key matches exactly
    ///
    /// Returns every match so callers can observe duplicate keys; a healthy
    /// store never holds more than one entry per key.
    async fn find_by_key(&self, key: &str) -> Result<Vec<SettingEntry>>;

    /// Find all entries in a category
    async fn find_by_category(&self, category: &str) -> Result<Vec<SettingEntry>>;

    /// List all entries
    async fn list_all(&self) -> Result<Vec<SettingEntry>>;

    /// Delete an entry by key; returns whether anything was removed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Install a fetched snapshot and mark the store loaded
    async fn replace_all(&self, entries: Vec<SettingEntry>) -> Result<()>;

    /// Whether the initial snapshot load has completed
    async fn is_loaded(&self) -> Result<bool>;
}
