//! Contract models for the settings engine
//!
//! Stored entries carry an opaque JSON payload; resolved values are fully
//! populated typed records, one shape per settings kind.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored configuration entry, scoped to one tenant
///
/// Entries are replaced wholesale on update, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingEntry {
    /// Unique key within the tenant (e.g. "finance.currency")
    pub key: String,
    /// Category grouping (e.g. "finance", "clients", "hr")
    pub category: String,
    /// Stored value as JSON; treated as a partial override during resolution
    pub value: serde_json::Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Placement of the currency symbol relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// Fully-populated currency formatting options
///
/// Invariant: a resolved record always has every field present. Partial
/// overrides from storage are merged over [`CurrencyFormatOptions::default`],
/// never used bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormatOptions {
    /// ISO-like currency code
    pub code: String,
    /// Display glyph
    pub symbol: String,
    /// Symbol placement
    pub position: SymbolPosition,
    /// Decimal point used in rendered output
    pub decimal_separator: String,
    /// Grouping separator used in rendered output
    pub thousand_separator: String,
    /// Number of fractional digits
    pub decimals: u32,
}

impl Default for CurrencyFormatOptions {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            position: SymbolPosition::Before,
            decimal_separator: ".".to_string(),
            thousand_separator: ",".to_string(),
            decimals: 2,
        }
    }
}

/// Fully-populated date formatting options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormatOptions {
    /// Display pattern using DD/MM/YYYY tokens
    pub pattern: String,
}

impl Default for DateFormatOptions {
    fn default() -> Self {
        Self {
            pattern: "MM/DD/YYYY".to_string(),
        }
    }
}

/// The value shape a setting key resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKind {
    Currency,
    DateFormat,
}

impl SettingKind {
    /// Look up the registered kind for a setting key
    ///
    /// Returns None for keys without a compiled-in value shape.
    pub fn for_key(key: &str) -> Option<Self> {
        match key {
            "finance.currency" => Some(Self::Currency),
            "finance.date_format" => Some(Self::DateFormat),
            _ => None,
        }
    }

    /// The compiled-in default record for this kind
    pub fn default_value(&self) -> ResolvedValue {
        match self {
            Self::Currency => ResolvedValue::Currency(CurrencyFormatOptions::default()),
            Self::DateFormat => ResolvedValue::DateFormat(DateFormatOptions::default()),
        }
    }
}

/// A fully-populated resolved configuration record
///
/// Tagged per value shape so an incomplete stored override can never produce
/// a partially-undefined record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Currency(CurrencyFormatOptions),
    DateFormat(DateFormatOptions),
}

impl ResolvedValue {
    /// Unwrap the currency options, if this record is a currency shape
    pub fn as_currency(&self) -> Option<&CurrencyFormatOptions> {
        match self {
            Self::Currency(opts) => Some(opts),
            _ => None,
        }
    }

    /// Unwrap the date format options, if this record is a date shape
    pub fn as_date_format(&self) -> Option<&DateFormatOptions> {
        match self {
            Self::DateFormat(opts) => Some(opts),
            _ => None,
        }
    }
}
