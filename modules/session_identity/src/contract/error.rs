//! Contract error types for session identity
//!
//! These errors are transport-agnostic and shared by all callers.

/// Session identity domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Malformed input caught before any collaborator call
    Validation {
        /// Validation error message
        message: String,
    },
    /// Operation conflicts with the current session state
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// The impersonation handshake failed
    ///
    /// Covers expired/invalid/consumed tokens, unavailable endpoints and
    /// network failures; the message is user-displayable and the tab-local
    /// boundary is left untouched.
    Handshake {
        /// User-displayable failure message
        message: String,
    },
    /// Login rejected by the auth collaborator
    Unauthorized {
        /// User-displayable failure message
        message: String,
    },
    /// Storage boundary write or serialization failure
    Storage {
        /// Failure message
        message: String,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { message } => {
                write!(f, "validation error: {}", message)
            }
            Self::Conflict { reason } => {
                write!(f, "conflict: {}", reason)
            }
            Self::Handshake { message } => {
                write!(f, "impersonation failed: {}", message)
            }
            Self::Unauthorized { message } => {
                write!(f, "login failed: {}", message)
            }
            Self::Storage { message } => {
                write!(f, "session storage error: {}", message)
            }
        }
    }
}

impl std::error::Error for SessionError {}
