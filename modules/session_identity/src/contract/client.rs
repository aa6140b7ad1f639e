//! Native client trait for consumers of session identity
//!
//! Tenant/auth consuming code reads identity through this trait.
//! NO HTTP - direct function calls.

use super::{error::SessionError, model::{Credentials, Session, SessionState}};
use async_trait::async_trait;
use uuid::Uuid;

/// Session identity API
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Composed state across both isolation boundaries
    fn state(&self) -> SessionState;

    /// The session tenant-identity reads must use (impersonated wins)
    fn active_session(&self) -> Option<Session>;

    /// Tenant identity of the active session
    fn tenant_id(&self) -> Option<Uuid>;

    /// Create the primary session in the cross-tab boundary
    async fn login(&self, credentials: &Credentials) -> Result<Session, SessionError>;

    /// Destroy the primary session; the impersonated boundary is untouched
    fn logout(&self);

    /// One-shot impersonation handshake installing a tab-local session
    async fn begin_impersonation(&self, token: &str) -> Result<Session, SessionError>;

    /// Clear the tab-local boundary; control returns to the primary state
    fn end_impersonation(&self) -> SessionState;
}
