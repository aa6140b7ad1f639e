/// Session lifecycle events
///
/// `ReloadRequired` is the reinitialization signal: after a successful
/// impersonation handshake every consumer of tenant/auth state must be
/// fully remounted, because in-memory contexts may still cache the previous
/// tenant. The signal fires only after the storage batch has committed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle events published by the session service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Primary session created
    LoggedIn {
        /// Tenant of the new primary session
        tenant_id: Uuid,
    },
    /// Primary session destroyed
    LoggedOut,
    /// Impersonated session installed; full remount required
    ReloadRequired {
        /// Tenant of the impersonated session
        tenant_id: Uuid,
    },
    /// Tab-local impersonated session ended
    ImpersonationEnded,
}

/// Sink for session lifecycle events
///
/// Synchronous by design: the publish happens inside the same event-loop
/// turn as the state change it reports.
pub trait SessionEventSink: Send + Sync {
    /// Publish an event
    fn publish(&self, event: SessionEvent);
}

/// No-op sink for testing or headless use
pub struct NoOpEventSink;

impl SessionEventSink for NoOpEventSink {
    fn publish(&self, _event: SessionEvent) {
        // No-op: events are not propagated
    }
}
