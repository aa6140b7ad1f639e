//! Session Identity Module
//!
//! Dual-scope authentication state for the tenant console: a primary
//! operator session in cross-tab storage can coexist with an impersonated
//! tenant session confined to tab-local storage. The two scopes never read
//! or write each other; within a tab the impersonated session strictly
//! overrides the primary one.

// Public exports
pub mod contract;
pub use contract::{
    client::SessionApi, error::SessionError, Credentials, Session, SessionScope, SessionState,
    TokenGrant, UserIdentity,
};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
