//! Domain service - dual-scope session state machine

use crate::config::Config;
use crate::contract::{
    Credentials, Session, SessionError, SessionScope, SessionState, UserIdentity,
};
use super::auth::{AuthError, AuthGateway};
use super::events::{SessionEvent, SessionEventSink};
use super::storage::{
    StorageBoundary, StorageOp, ACCESS_TOKEN_KEY, IMPERSONATED_FLAG_KEY, REFRESH_TOKEN_KEY,
    SESSION_KEYS, TENANT_ID_KEY, USER_KEY,
};
use std::sync::Arc;

/// Domain service for session identity
///
/// Holds exactly one handle per isolation boundary: `shared` (cross-tab,
/// owned by the primary session) and `tab` (tab-local, owned by the
/// impersonated session). Operations on one scope never touch the other
/// handle. A browser tab corresponds to one service instance; several
/// instances may share the same `shared` boundary.
pub struct Service {
    shared: Arc<dyn StorageBoundary>,
    tab: Arc<dyn StorageBoundary>,
    auth: Arc<dyn AuthGateway>,
    events: Arc<dyn SessionEventSink>,
    config: Config,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        shared: Arc<dyn StorageBoundary>,
        tab: Arc<dyn StorageBoundary>,
        auth: Arc<dyn AuthGateway>,
        events: Arc<dyn SessionEventSink>,
        config: Config,
    ) -> Self {
        Self {
            shared,
            tab,
            auth,
            events,
            config,
        }
    }

    // ===== State Reads =====

    /// Composed session state across both boundaries
    pub fn state(&self) -> SessionState {
        let primary = self.read_primary();
        let impersonated = self.read_impersonated();

        match (primary, impersonated) {
            (None, None) => SessionState::NoSession,
            (Some(primary), None) => SessionState::PrimaryActive(primary),
            (None, Some(impersonated)) => SessionState::ImpersonatedActive(impersonated),
            (Some(primary), Some(impersonated)) => {
                SessionState::PrimaryAndImpersonatedActive {
                    primary,
                    impersonated,
                }
            }
        }
    }

    /// The session tenant-identity reads must use
    ///
    /// Impersonated strictly overrides primary within this tab.
    pub fn active_session(&self) -> Option<Session> {
        self.state().active_session().cloned()
    }

    /// Tenant identity of the active session
    pub fn tenant_id(&self) -> Option<uuid::Uuid> {
        self.active_session().map(|s| s.tenant_id())
    }

    // ===== Primary Session Lifecycle =====

    /// Create the primary session via normal login
    ///
    /// Writes only the cross-tab boundary. Rejected inside an impersonated
    /// tab: the operator must end impersonation first.
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, SessionError> {
        if self.tab.get(IMPERSONATED_FLAG_KEY).as_deref() == Some("true") {
            return Err(SessionError::Conflict {
                reason: "cannot log in while this tab is impersonating a tenant".to_string(),
            });
        }
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            return Err(SessionError::Validation {
                message: "email and password are required".to_string(),
            });
        }

        let grant = self.auth.login(credentials).await.map_err(|err| match err {
            AuthError::Unauthorized(message) => SessionError::Unauthorized { message },
            other => SessionError::Unauthorized {
                message: other.to_string(),
            },
        })?;

        let session = Session {
            scope: SessionScope::Primary,
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            user: grant.user,
        };
        self.write_session(self.shared.as_ref(), &session, false)?;

        tracing::info!(tenant_id = %session.tenant_id(), "primary session established");
        self.events.publish(SessionEvent::LoggedIn {
            tenant_id: session.tenant_id(),
        });
        Ok(session)
    }

    /// Destroy the primary session
    ///
    /// Clears only primary-scope storage; an impersonated session in this
    /// tab keeps running in its own boundary.
    pub fn logout(&self) {
        let ops: Vec<StorageOp> = SESSION_KEYS.iter().map(|k| StorageOp::remove(k)).collect();
        if let Err(err) = self.shared.apply(&ops) {
            tracing::warn!(error = %err, "failed to clear primary session storage");
            return;
        }
        tracing::info!("primary session cleared");
        self.events.publish(SessionEvent::LoggedOut);
    }

    // ===== Impersonation Handshake =====

    /// One-shot handshake installing an impersonated session in this tab
    ///
    /// The token is exchanged with the auth collaborator exactly once; a
    /// consumed token is rejected by the collaborator and surfaced as a
    /// handshake failure, never replayed. All storage writes happen in one
    /// atomic batch after the exchange succeeds, so a failed handshake
    /// leaves the tab-local boundary untouched, and the reload signal only
    /// fires once the full triple is observable.
    pub async fn begin_impersonation(&self, token: &str) -> Result<Session, SessionError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(SessionError::Validation {
                message: "impersonation token is required".to_string(),
            });
        }
        if token.len() > self.config.max_token_length {
            return Err(SessionError::Validation {
                message: format!(
                    "impersonation token exceeds {} bytes",
                    self.config.max_token_length
                ),
            });
        }

        let grant = self.auth.impersonate(token).await.map_err(|err| {
            tracing::warn!(error = %err, "impersonation handshake failed");
            SessionError::Handshake {
                message: handshake_message(&err),
            }
        })?;

        let session = Session {
            scope: SessionScope::Impersonated,
            access_token: grant.access_token,
            refresh_token: grant.refresh_token,
            user: grant.user,
        };
        self.write_session(self.tab.as_ref(), &session, true)?;

        tracing::info!(tenant_id = %session.tenant_id(), "impersonated session installed");
        self.events.publish(SessionEvent::ReloadRequired {
            tenant_id: session.tenant_id(),
        });
        Ok(session)
    }

    /// End impersonation and return to whatever primary state exists
    pub fn end_impersonation(&self) -> SessionState {
        let ops: Vec<StorageOp> = SESSION_KEYS.iter().map(|k| StorageOp::remove(k)).collect();
        if let Err(err) = self.tab.apply(&ops) {
            tracing::warn!(error = %err, "failed to clear impersonated session storage");
        } else {
            tracing::info!("impersonated session cleared");
            self.events.publish(SessionEvent::ImpersonationEnded);
        }
        self.state()
    }

    // ===== Helper Methods =====

    /// Commit a session to its boundary as one atomic batch
    ///
    /// An absent refresh token removes any stale stored one rather than
    /// leaving it behind.
    fn write_session(
        &self,
        boundary: &dyn StorageBoundary,
        session: &Session,
        impersonated: bool,
    ) -> Result<(), SessionError> {
        let user_json = serde_json::to_string(&session.user).map_err(|err| {
            SessionError::Storage {
                message: format!("failed to serialize user record: {}", err),
            }
        })?;

        let mut ops = vec![
            StorageOp::set(ACCESS_TOKEN_KEY, session.access_token.clone()),
            match &session.refresh_token {
                Some(refresh) => StorageOp::set(REFRESH_TOKEN_KEY, refresh.clone()),
                None => StorageOp::remove(REFRESH_TOKEN_KEY),
            },
            StorageOp::set(USER_KEY, user_json),
            StorageOp::set(TENANT_ID_KEY, session.tenant_id().to_string()),
        ];
        if impersonated {
            ops.push(StorageOp::set(IMPERSONATED_FLAG_KEY, "true"));
        }

        boundary.apply(&ops).map_err(|err| SessionError::Storage {
            message: format!("failed to write session storage: {}", err),
        })
    }

    fn read_primary(&self) -> Option<Session> {
        read_session(self.shared.as_ref(), SessionScope::Primary)
    }

    fn read_impersonated(&self) -> Option<Session> {
        if self.tab.get(IMPERSONATED_FLAG_KEY).as_deref() != Some("true") {
            return None;
        }
        read_session(self.tab.as_ref(), SessionScope::Impersonated)
    }
}

/// Read a session back from a boundary
///
/// Requires the access token and a decodable user record; anything less is
/// treated as no session. The tenant id always derives from the user
/// record, a stale `tenantId` key never wins.
fn read_session(boundary: &dyn StorageBoundary, scope: SessionScope) -> Option<Session> {
    let access_token = boundary.get(ACCESS_TOKEN_KEY)?;
    let user_json = boundary.get(USER_KEY)?;
    let user: UserIdentity = match serde_json::from_str(&user_json) {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(error = %err, ?scope, "undecodable user record in session storage");
            return None;
        }
    };

    if let Some(stored) = boundary.get(TENANT_ID_KEY) {
        if stored != user.tenant_id.to_string() {
            tracing::warn!(?scope, "stored tenantId disagrees with user record");
        }
    }

    Some(Session {
        scope,
        access_token,
        refresh_token: boundary.get(REFRESH_TOKEN_KEY),
        user,
    })
}

/// User-displayable message for a failed handshake
fn handshake_message(err: &AuthError) -> String {
    match err {
        AuthError::TokenRejected(_) => {
            "the impersonation link is invalid or has expired".to_string()
        }
        AuthError::Unauthorized(_) => "the impersonation request was not authorized".to_string(),
        AuthError::Network(_) => {
            "could not reach the authentication service, please retry".to_string()
        }
    }
}
