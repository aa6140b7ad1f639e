//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{ResolvedValue, SettingEntry, SettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// Used by view code and sibling modules without any transport overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn get_all(&self, category: Option<&str>) -> Result<Vec<SettingEntry>, SettingsError> {
        self.service.get_all(category).await
    }

    async fn get_by_key(&self, key: &str) -> Result<SettingEntry, SettingsError> {
        self.service.get_by_key(key).await
    }

    async fn upsert(
        &self,
        category: &str,
        key: &str,
        value: serde_json::Value,
    ) -> Result<SettingEntry, SettingsError> {
        self.service.upsert(category, key, value).await
    }

    async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.service.delete(key).await
    }

    async fn resolve(&self, category: &str, key: &str) -> Result<ResolvedValue, SettingsError> {
        self.service.resolve(category, key).await
    }
}
