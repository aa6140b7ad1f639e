/// Domain events for the settings engine
///
/// Consumers holding resolved values re-resolve when a change event arrives;
/// resolution itself never blocks on the store (convergence over time).

use crate::contract::SettingEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Change events emitted by the settings store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SettingEvent {
    /// Entry was created or replaced
    SettingUpserted(SettingUpsertedEvent),
    /// Entry was deleted
    SettingDeleted(SettingDeletedEvent),
    /// The full snapshot was replaced (initial load or refetch)
    SnapshotReplaced(SnapshotReplacedEvent),
}

/// Event data for an entry upsert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingUpsertedEvent {
    /// Setting key
    pub key: String,
    /// Category grouping
    pub category: String,
    /// Whether this was a create or a replace
    pub is_new: bool,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for an entry deletion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingDeletedEvent {
    /// Setting key
    pub key: String,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

/// Event data for a snapshot replacement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotReplacedEvent {
    /// Number of entries in the new snapshot
    pub entry_count: usize,
    /// Timestamp of the event
    pub timestamp: DateTime<Utc>,
}

impl SettingEvent {
    /// Create a new SettingUpserted event
    pub fn upserted(entry: &SettingEntry, is_new: bool) -> Self {
        SettingEvent::SettingUpserted(SettingUpsertedEvent {
            key: entry.key.clone(),
            category: entry.category.clone(),
            is_new,
            timestamp: Utc::now(),
        })
    }

    /// Create a new SettingDeleted event
    pub fn deleted(key: String) -> Self {
        SettingEvent::SettingDeleted(SettingDeletedEvent {
            key,
            timestamp: Utc::now(),
        })
    }

    /// Create a new SnapshotReplaced event
    pub fn snapshot_replaced(entry_count: usize) -> Self {
        SettingEvent::SnapshotReplaced(SnapshotReplacedEvent {
            entry_count,
            timestamp: Utc::now(),
        })
    }
}

/// Notifier trait for publishing change events to interested consumers
#[async_trait::async_trait]
pub trait ChangeNotifier: Send + Sync {
    /// Publish a change event
    async fn notify(&self, event: SettingEvent) -> anyhow::Result<()>;
}

/// No-op notifier for testing or when change propagation is disabled
pub struct NoOpChangeNotifier;

#[async_trait::async_trait]
impl ChangeNotifier for NoOpChangeNotifier {
    async fn notify(&self, _event: SettingEvent) -> anyhow::Result<()> {
        // No-op: events are not propagated
        Ok(())
    }
}
