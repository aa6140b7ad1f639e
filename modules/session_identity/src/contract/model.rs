//! Contract models for session identity

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which isolation boundary a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionScope {
    /// Cross-tab session created at normal login
    Primary,
    /// Tab-local session created via the impersonation handshake
    Impersonated,
}

/// Identity record for the authenticated user
///
/// Serialized as JSON under the `user` storage key, so serde derives are
/// part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// User id
    pub id: Uuid,
    /// Login email
    pub email: String,
    /// Tenant the user belongs to
    pub tenant_id: Uuid,
}

/// An authenticated session bound to one isolation boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Isolation boundary this session lives in
    pub scope: SessionScope,
    /// Opaque bearer token
    pub access_token: String,
    /// Optional refresh token
    pub refresh_token: Option<String>,
    /// Authenticated user
    pub user: UserIdentity,
}

impl Session {
    /// Tenant identity, derived from the user record
    ///
    /// Invariant: always equals `user.tenant_id`.
    pub fn tenant_id(&self) -> Uuid {
        self.user.tenant_id
    }
}

/// Composed session state across both isolation boundaries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Neither boundary holds a session
    NoSession,
    /// Only the cross-tab primary session is active
    PrimaryActive(Session),
    /// Only the tab-local impersonated session is active
    ImpersonatedActive(Session),
    /// Both coexist, each in its own boundary
    PrimaryAndImpersonatedActive {
        primary: Session,
        impersonated: Session,
    },
}

impl SessionState {
    /// The session tenant-identity reads must use
    ///
    /// Within a tab the impersonated session is a strict override of the
    /// primary one, never a merge.
    pub fn active_session(&self) -> Option<&Session> {
        match self {
            Self::NoSession => None,
            Self::PrimaryActive(session) => Some(session),
            Self::ImpersonatedActive(session) => Some(session),
            Self::PrimaryAndImpersonatedActive { impersonated, .. } => Some(impersonated),
        }
    }
}

/// Login input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Token triple returned by the auth collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenGrant {
    /// Opaque bearer token
    pub access_token: String,
    /// Optional refresh token; absence clears any stale stored one
    pub refresh_token: Option<String>,
    /// Authenticated user
    pub user: UserIdentity,
}
