//! Contract layer - public API for consumers of session identity
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SessionApi;
pub use error::SessionError;
pub use model::{Credentials, Session, SessionScope, SessionState, TokenGrant, UserIdentity};
