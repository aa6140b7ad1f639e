//! Common test utilities for settings engine tests

use settings_engine::contract::SettingEntry;
use settings_engine::config::Config;
use settings_engine::domain::{NoOpChangeNotifier, Service};
use settings_engine::infra::storage::InMemorySettingsRepository;
use std::sync::Arc;

/// Build an entry with fresh timestamps
pub fn entry(key: &str, category: &str, value: serde_json::Value) -> SettingEntry {
    let now = chrono::Utc::now();
    SettingEntry {
        key: key.to_string(),
        category: category.to_string(),
        value,
        created_at: now,
        updated_at: now,
    }
}

/// Service over a store with an installed snapshot
pub fn service_with_snapshot(entries: Vec<SettingEntry>) -> Service {
    Service::new(
        Arc::new(InMemorySettingsRepository::preloaded(entries)),
        Arc::new(NoOpChangeNotifier),
        Config::default(),
    )
}

/// Service over an empty store whose initial load has not completed
pub fn service_unloaded() -> Service {
    Service::new(
        Arc::new(InMemorySettingsRepository::new()),
        Arc::new(NoOpChangeNotifier),
        Config::default(),
    )
}
