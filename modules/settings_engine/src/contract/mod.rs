//! Contract layer - public API for consumers of the settings engine
//!
//! This layer contains transport-agnostic models and the native client trait.

pub mod client;
pub mod error;
pub mod model;

pub use client::SettingsApi;
pub use error::SettingsError;
pub use model::{
    CurrencyFormatOptions, DateFormatOptions, ResolvedValue, SettingEntry, SettingKind,
    SymbolPosition,
};
