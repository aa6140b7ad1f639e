//! Merge of partial stored overrides over compiled-in defaults
//!
//! One explicit merge function per settings kind. The output is always a
//! fully-populated record: fields missing from the stored payload keep their
//! default, and a payload that cannot be read at all falls back to the
//! default record wholesale (safe local fallback, logged).

use crate::contract::{
    CurrencyFormatOptions, DateFormatOptions, ResolvedValue, SettingKind, SymbolPosition,
};
use serde::Deserialize;

/// Partial currency override as stored by the backend
///
/// Payloads originate from the REST backend and may use camelCase field
/// names; both spellings are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrencyOverride {
    code: Option<String>,
    symbol: Option<String>,
    position: Option<SymbolPosition>,
    #[serde(alias = "decimalSeparator")]
    decimal_separator: Option<String>,
    #[serde(alias = "thousandSeparator")]
    thousand_separator: Option<String>,
    decimals: Option<u32>,
}

/// Partial date-format override
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DateFormatOverride {
    pattern: Option<String>,
}

/// Merge a stored override (if any) over the default record for `kind`
///
/// Total over all inputs: never panics, never returns a partial record.
pub fn resolve_value(kind: SettingKind, stored: Option<&serde_json::Value>) -> ResolvedValue {
    match stored {
        None => kind.default_value(),
        Some(value) => match kind {
            SettingKind::Currency => ResolvedValue::Currency(merge_currency(value)),
            SettingKind::DateFormat => ResolvedValue::DateFormat(merge_date_format(value)),
        },
    }
}

fn merge_currency(stored: &serde_json::Value) -> CurrencyFormatOptions {
    let defaults = CurrencyFormatOptions::default();
    let partial: CurrencyOverride = match serde_json::from_value(stored.clone()) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(error = %err, "malformed currency override, using defaults");
            return defaults;
        }
    };

    CurrencyFormatOptions {
        code: partial.code.unwrap_or(defaults.code),
        symbol: partial.symbol.unwrap_or(defaults.symbol),
        position: partial.position.unwrap_or(defaults.position),
        decimal_separator: partial.decimal_separator.unwrap_or(defaults.decimal_separator),
        thousand_separator: partial.thousand_separator.unwrap_or(defaults.thousand_separator),
        decimals: partial.decimals.unwrap_or(defaults.decimals),
    }
}

fn merge_date_format(stored: &serde_json::Value) -> DateFormatOptions {
    let defaults = DateFormatOptions::default();
    let partial: DateFormatOverride = match serde_json::from_value(stored.clone()) {
        Ok(p) => p,
        Err(err) => {
            tracing::warn!(error = %err, "malformed date format override, using defaults");
            return defaults;
        }
    };

    DateFormatOptions {
        pattern: partial.pattern.unwrap_or(defaults.pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_retains_default_fields() {
        let resolved = resolve_value(
            SettingKind::Currency,
            Some(&json!({"symbol": "€", "position": "after"})),
        );

        let opts = match resolved {
            ResolvedValue::Currency(opts) => opts,
            _ => panic!("Expected currency shape"),
        };
        assert_eq!(opts.code, "USD");
        assert_eq!(opts.symbol, "€");
        assert_eq!(opts.position, SymbolPosition::After);
        assert_eq!(opts.decimal_separator, ".");
        assert_eq!(opts.thousand_separator, ",");
        assert_eq!(opts.decimals, 2);
    }

    #[test]
    fn test_merge_accepts_camel_case_payloads() {
        let resolved = resolve_value(
            SettingKind::Currency,
            Some(&json!({"thousandSeparator": ".", "decimalSeparator": ","})),
        );

        let opts = match resolved {
            ResolvedValue::Currency(opts) => opts,
            _ => panic!("Expected currency shape"),
        };
        assert_eq!(opts.thousand_separator, ".");
        assert_eq!(opts.decimal_separator, ",");
    }

    #[test]
    fn test_missing_override_yields_default_verbatim() {
        let resolved = resolve_value(SettingKind::Currency, None);
        assert_eq!(
            resolved,
            ResolvedValue::Currency(CurrencyFormatOptions::default())
        );
    }

    #[test]
    fn test_malformed_override_falls_back_to_defaults() {
        let resolved = resolve_value(SettingKind::Currency, Some(&json!({"decimals": "two"})));
        assert_eq!(
            resolved,
            ResolvedValue::Currency(CurrencyFormatOptions::default())
        );
    }

    #[test]
    fn test_date_format_merge() {
        let resolved = resolve_value(
            SettingKind::DateFormat,
            Some(&json!({"pattern": "DD/MM/YYYY"})),
        );
        assert_eq!(
            resolved,
            ResolvedValue::DateFormat(DateFormatOptions {
                pattern: "DD/MM/YYYY".to_string()
            })
        );
    }
}
