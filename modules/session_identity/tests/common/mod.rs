//! Common test utilities for session identity tests
//!
//! Models a browser: one shared cross-tab boundary, any number of open
//! tabs, each tab owning its own tab-local boundary and service instance.

use parking_lot::RwLock;
use session_identity::config::Config;
use session_identity::contract::{Credentials, TokenGrant, UserIdentity};
use session_identity::domain::{MockAuthGateway, Service, SessionEvent, SessionEventSink};
use session_identity::infra::storage::MemoryStorage;
use std::sync::Arc;
use uuid::Uuid;

/// Event sink that records every published event
#[derive(Default)]
pub struct RecordingSink {
    pub events: RwLock<Vec<SessionEvent>>,
}

impl SessionEventSink for RecordingSink {
    fn publish(&self, event: SessionEvent) {
        self.events.write().push(event);
    }
}

/// One open tab: its service, its tab boundary, its event sink
pub struct Tab {
    pub service: Service,
    pub storage: Arc<MemoryStorage>,
    pub sink: Arc<RecordingSink>,
}

/// A simulated browser with a shared boundary and a shared auth gateway
pub struct TestBrowser {
    pub shared: Arc<MemoryStorage>,
    pub auth: MockAuthGateway,
}

impl TestBrowser {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(MemoryStorage::new()),
            auth: MockAuthGateway::new(),
        }
    }

    /// Open a fresh tab against the shared boundary
    pub fn open_tab(&self) -> Tab {
        let storage = Arc::new(MemoryStorage::new());
        let sink = Arc::new(RecordingSink::default());
        let service = Service::new(
            self.shared.clone(),
            storage.clone(),
            Arc::new(self.auth.clone()),
            sink.clone(),
            Config::default(),
        );
        Tab {
            service,
            storage,
            sink,
        }
    }
}

/// Identity for a tenant user with a fresh tenant id
pub fn user(email: &str) -> UserIdentity {
    UserIdentity {
        id: Uuid::new_v4(),
        email: email.to_string(),
        tenant_id: Uuid::new_v4(),
    }
}

/// Token grant carrying a refresh token
pub fn grant(access_token: &str, user: UserIdentity) -> TokenGrant {
    TokenGrant {
        access_token: access_token.to_string(),
        refresh_token: Some(format!("{}-refresh", access_token)),
        user,
    }
}

/// Token grant without a refresh token
pub fn grant_without_refresh(access_token: &str, user: UserIdentity) -> TokenGrant {
    TokenGrant {
        access_token: access_token.to_string(),
        refresh_token: None,
        user,
    }
}

/// Operator credentials matching a programmed login grant
pub fn operator_credentials() -> Credentials {
    Credentials {
        email: "operator@console.test".to_string(),
        password: "hunter2".to_string(),
    }
}
