//! Domain service - store orchestration and resolution

use crate::config::Config;
use crate::contract::{ResolvedValue, SettingEntry, SettingKind, SettingsError};
use super::events::{ChangeNotifier, SettingEvent};
use super::merge;
use super::repository::SettingsRepository;
use std::sync::Arc;

/// Domain service for the settings engine
pub struct Service {
    repo: Arc<dyn SettingsRepository>,
    notifier: Arc<dyn ChangeNotifier>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        repo: Arc<dyn SettingsRepository>,
        notifier: Arc<dyn ChangeNotifier>,
        config: Config,
    ) -> Self {
        Self {
            repo,
            notifier,
            config,
        }
    }

    // ===== Store Operations =====

    /// Get all entries, optionally filtered by category
    pub async fn get_all(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<SettingEntry>, SettingsError> {
        match category {
            Some(category) => self
                .repo
                .find_by_category(category)
                .await
                .map_err(|_| SettingsError::Internal),
            None => self.repo.list_all().await.map_err(|_| SettingsError::Internal),
        }
    }

    /// Get a single entry by exact key
    pub async fn get_by_key(&self, key: &str) -> Result<SettingEntry, SettingsError> {
        let mut matches = self
            .repo
            .find_by_key(key)
            .await
            .map_err(|_| SettingsError::Internal)?;

        match matches.len() {
            0 => Err(SettingsError::NotFound {
                key: key.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => Err(SettingsError::DuplicateKey {
                key: key.to_string(),
                count,
            }),
        }
    }

    /// Create or replace an entry
    ///
    /// The stored value is replaced wholesale; a replace keeps the original
    /// creation timestamp.
    pub async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<SettingEntry, SettingsError> {
        self.validate_coordinates(category, key)?;

        let encoded_len = value.to_string().len();
        if encoded_len > self.config.max_value_size {
            return Err(SettingsError::Validation {
                message: format!(
                    "setting value for '{}' is {} bytes, limit is {}",
                    key, encoded_len, self.config.max_value_size
                ),
            });
        }

        let existing = self
            .repo
            .find_by_key(key)
            .await
            .map_err(|_| SettingsError::Internal)?;
        let is_new = existing.is_empty();

        let now = chrono::Utc::now();
        let entry = SettingEntry {
            key: key.to_string(),
            category: category.to_string(),
            value,
            created_at: existing
                .first()
                .map(|e| e.created_at)
                .unwrap_or(now),
            updated_at: now,
        };

        let result = self
            .repo
            .upsert(&entry)
            .await
            .map_err(|_| SettingsError::Internal)?;

        // Change propagation is best-effort; a consumer that misses an event
        // converges on the next resolution after the following one.
        if let Err(e) = self
            .notifier
            .notify(SettingEvent::upserted(&result, is_new))
            .await
        {
            tracing::warn!(key, error = %e, "failed to publish setting change event");
        }

        Ok(result)
    }

    /// Delete an entry by key
    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let removed = self
            .repo
            .delete(key)
            .await
            .map_err(|_| SettingsError::Internal)?;

        if !removed {
            return Err(SettingsError::NotFound {
                key: key.to_string(),
            });
        }

        if let Err(e) = self
            .notifier
            .notify(SettingEvent::deleted(key.to_string()))
            .await
        {
            tracing::warn!(key, error = %e, "failed to publish setting change event");
        }

        Ok(())
    }

    /// Install a freshly fetched snapshot and mark the store loaded
    pub async fn load_snapshot(&self, entries: Vec<SettingEntry>) -> Result<(), SettingsError> {
        let entry_count = entries.len();
        self.repo
            .replace_all(entries)
            .await
            .map_err(|_| SettingsError::Internal)?;

        tracing::info!(entry_count, "settings snapshot installed");

        if let Err(e) = self
            .notifier
            .notify(SettingEvent::snapshot_replaced(entry_count))
            .await
        {
            tracing::warn!(error = %e, "failed to publish snapshot event");
        }

        Ok(())
    }

    // ===== Resolution =====

    /// Resolve the effective value for a key
    ///
    /// Pure with respect to the current store snapshot. Returns the
    /// compiled-in default while the initial load is still in flight;
    /// callers re-resolve when a change event arrives.
    pub async fn resolve(
        &self,
        category: &str,
        key: &str,
    ) -> Result<ResolvedValue, SettingsError> {
        self.validate_coordinates(category, key)?;

        let kind = SettingKind::for_key(key).ok_or_else(|| SettingsError::KindNotRegistered {
            key: key.to_string(),
        })?;

        let loaded = self
            .repo
            .is_loaded()
            .await
            .map_err(|_| SettingsError::Internal)?;
        if !loaded {
            tracing::debug!(key, "store not loaded yet, resolving to default");
            return Ok(kind.default_value());
        }

        let matches = self
            .repo
            .find_by_key(key)
            .await
            .map_err(|_| SettingsError::Internal)?;

        match matches.len() {
            0 => Ok(merge::resolve_value(kind, None)),
            1 => Ok(merge::resolve_value(kind, Some(&matches[0].value))),
            count => {
                tracing::warn!(key, count, "duplicate setting key detected during resolution");
                Err(SettingsError::DuplicateKey {
                    key: key.to_string(),
                    count,
                })
            }
        }
    }

    // ===== Helper Methods =====

    /// Validate category/key coordinates
    ///
    /// Keys are expected, not enforced, to be namespaced by category.
    fn validate_coordinates(&self, category: &str, key: &str) -> Result<(), SettingsError> {
        if category.is_empty() {
            return Err(SettingsError::Validation {
                message: "category cannot be empty".to_string(),
            });
        }
        if key.is_empty() {
            return Err(SettingsError::Validation {
                message: "key cannot be empty".to_string(),
            });
        }
        if self.config.strict_key_namespacing && !key.starts_with(&format!("{}.", category)) {
            tracing::warn!(category, key, "setting key is not namespaced by its category");
        }
        Ok(())
    }
}
