//! Contract error types for the settings engine
//!
//! These errors are transport-agnostic and shared by all callers.

/// Settings engine domain errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Setting entry not found
    NotFound {
        /// Setting key
        key: String,
    },
    /// Configuration integrity violation: more than one entry shares a key
    ///
    /// Keys are supposed to be unique within a tenant; when duplicates are
    /// observed, resolution refuses to pick one silently.
    DuplicateKey {
        /// Ambiguous setting key
        key: String,
        /// Number of entries sharing the key
        count: usize,
    },
    /// Validation error (empty key/category, malformed override payload)
    Validation {
        /// Validation error message
        message: String,
    },
    /// Key has no compiled-in value shape
    KindNotRegistered {
        /// Setting key
        key: String,
    },
    /// Internal error
    Internal,
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { key } => {
                write!(f, "setting not found: {}", key)
            }
            Self::DuplicateKey { key, count } => {
                write!(f, "configuration integrity error: {} entries share key '{}'", count, key)
            }
            Self::Validation { message } => {
                write!(f, "validation error: {}", message)
            }
            Self::KindNotRegistered { key } => {
                write!(f, "no value shape registered for key: {}", key)
            }
            Self::Internal => {
                write!(f, "internal error")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
