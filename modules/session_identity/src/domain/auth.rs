//! Auth collaborator abstraction
//!
//! The gateway exchanges credentials or a short-lived impersonation token
//! for a token grant. Token rejection (expired, invalid, already consumed,
//! endpoint unavailable) is kept distinguishable from a generic network
//! failure.

use crate::contract::{Credentials, TokenGrant};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Error type for auth gateway operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("token rejected: {0}")]
    TokenRejected(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("network failure: {0}")]
    Network(String),
}

/// Trait for communicating with the external auth service
///
/// Each handshake invokes `impersonate` exactly once; this module never
/// retries on its own, so a consumed token surfaces as a rejection.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange login credentials for a token grant
    async fn login(&self, credentials: &Credentials) -> Result<TokenGrant, AuthError>;

    /// Exchange a short-lived impersonation token for a token grant
    ///
    /// Single-shot per token: the collaborator may reject a token that was
    /// already exchanged.
    async fn impersonate(&self, token: &str) -> Result<TokenGrant, AuthError>;
}

/// Mock implementation of AuthGateway for testing
///
/// Grants are programmed per token/credential; tokens are consumed on first
/// exchange and a call counter makes single-shot behavior assertable.
#[derive(Clone, Default)]
pub struct MockAuthGateway {
    inner: Arc<RwLock<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// token -> grant
    impersonation_grants: HashMap<String, TokenGrant>,
    /// email -> (password, grant)
    login_grants: HashMap<String, (String, TokenGrant)>,
    consumed: HashSet<String>,
    next_network_failure: Option<String>,
    impersonate_calls: usize,
    login_calls: usize,
}

impl MockAuthGateway {
    /// Create an empty mock gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Program a grant for an impersonation token
    pub fn add_impersonation_grant(&self, token: &str, grant: TokenGrant) {
        self.inner
            .write()
            .impersonation_grants
            .insert(token.to_string(), grant);
    }

    /// Program a grant for a login
    pub fn add_login_grant(&self, email: &str, password: &str, grant: TokenGrant) {
        self.inner
            .write()
            .login_grants
            .insert(email.to_string(), (password.to_string(), grant));
    }

    /// Fail the next call with a network error
    pub fn fail_next_with_network_error(&self, message: &str) {
        self.inner.write().next_network_failure = Some(message.to_string());
    }

    /// Number of impersonate exchanges performed
    pub fn impersonate_call_count(&self) -> usize {
        self.inner.read().impersonate_calls
    }

    /// Number of login exchanges performed
    pub fn login_call_count(&self) -> usize {
        self.inner.read().login_calls
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<TokenGrant, AuthError> {
        let mut state = self.inner.write();
        state.login_calls += 1;

        if let Some(message) = state.next_network_failure.take() {
            return Err(AuthError::Network(message));
        }

        match state.login_grants.get(&credentials.email) {
            Some((password, grant)) if *password == credentials.password => Ok(grant.clone()),
            _ => Err(AuthError::Unauthorized("invalid email or password".to_string())),
        }
    }

    async fn impersonate(&self, token: &str) -> Result<TokenGrant, AuthError> {
        let mut state = self.inner.write();
        state.impersonate_calls += 1;

        if let Some(message) = state.next_network_failure.take() {
            return Err(AuthError::Network(message));
        }

        if state.consumed.contains(token) {
            return Err(AuthError::TokenRejected("token already consumed".to_string()));
        }

        match state.impersonation_grants.get(token).cloned() {
            Some(grant) => {
                state.consumed.insert(token.to_string());
                Ok(grant)
            }
            None => Err(AuthError::TokenRejected("invalid or expired token".to_string())),
        }
    }
}
