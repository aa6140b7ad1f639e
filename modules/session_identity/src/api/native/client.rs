//! Native client implementation - wraps the domain service for in-process calls

use crate::contract::{Credentials, Session, SessionApi, SessionError, SessionState};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Native client implementation that directly calls the domain service
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
impl SessionApi for NativeClient {
    fn state(&self) -> SessionState {
        self.service.state()
    }

    fn active_session(&self) -> Option<Session> {
        self.service.active_session()
    }

    fn tenant_id(&self) -> Option<Uuid> {
        self.service.tenant_id()
    }

    async fn login(&self, credentials: &Credentials) -> Result<Session, SessionError> {
        self.service.login(credentials).await
    }

    fn logout(&self) {
        self.service.logout()
    }

    async fn begin_impersonation(&self, token: &str) -> Result<Session, SessionError> {
        self.service.begin_impersonation(token).await
    }

    fn end_impersonation(&self) -> SessionState {
        self.service.end_impersonation()
    }
}
