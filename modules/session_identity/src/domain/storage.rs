//! Storage boundary abstraction
//!
//! A boundary is an independently-addressable key-value namespace with
//! explicit ownership: the cross-tab boundary belongs to the primary
//! session, the tab-local boundary to the impersonated one. No code path
//! may write across scopes; the "never cross-write" invariant is enforced
//! by handing each owner only its own boundary handle.
//!
//! Implementations are in infra/storage/memory.rs

use std::collections::BTreeMap;

/// Storage key for the bearer token
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the optional refresh token
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Storage key for the JSON-serialized user identity
pub const USER_KEY: &str = "user";
/// Storage key for the derived tenant id
pub const TENANT_ID_KEY: &str = "tenantId";
/// Storage key flagging the tab-local boundary as authoritative
pub const IMPERSONATED_FLAG_KEY: &str = "impersonated";

/// Every key a session occupies in its boundary
pub const SESSION_KEYS: &[&str] = &[
    ACCESS_TOKEN_KEY,
    REFRESH_TOKEN_KEY,
    USER_KEY,
    TENANT_ID_KEY,
    IMPERSONATED_FLAG_KEY,
];

/// A single write operation in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp {
    Set(String, String),
    Remove(String),
}

impl StorageOp {
    /// Set `key` to `value`
    pub fn set(key: &str, value: impl Into<String>) -> Self {
        Self::Set(key.to_string(), value.into())
    }

    /// Remove `key`
    pub fn remove(key: &str) -> Self {
        Self::Remove(key.to_string())
    }
}

/// One key-value namespace with serialized writes
///
/// `apply` commits a whole batch atomically with respect to readers: a
/// concurrent `get` or `snapshot` observes either none or all of the
/// batch's operations, never a subset.
pub trait StorageBoundary: Send + Sync {
    /// Read a single key
    fn get(&self, key: &str) -> Option<String>;

    /// Apply a batch of operations atomically
    fn apply(&self, ops: &[StorageOp]) -> anyhow::Result<()>;

    /// Full copy of the boundary's contents
    fn snapshot(&self) -> BTreeMap<String, String>;
}
