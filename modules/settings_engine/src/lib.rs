//! Settings Engine Module
//!
//! Tenant-scoped settings resolution for the tenant console. Stored entries
//! are partial overrides merged over compiled-in defaults per settings kind,
//! and resolved values drive locale-sensitive display formatting (currency,
//! dates).

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, CurrencyFormatOptions, DateFormatOptions,
    ResolvedValue, SettingEntry, SettingKind, SymbolPosition,
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
