//! Domain layer - session state machine and impersonation handshake

pub mod auth;
pub mod events;
pub mod service;
pub mod storage;

pub use auth::{AuthError, AuthGateway, MockAuthGateway};
pub use events::{NoOpEventSink, SessionEvent, SessionEventSink};
pub use service::Service;
pub use storage::{StorageBoundary, StorageOp};
