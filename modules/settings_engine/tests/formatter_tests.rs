//! Property-style tests for currency formatting
//!
//! Covers the round-trip bound and separator-collision safety across a grid
//! of separator pairs, including multi-character and digit-free variants.

use settings_engine::contract::{CurrencyFormatOptions, SymbolPosition};
use settings_engine::domain::formatter::{format_currency, parse_amount};

fn options(
    thousand: &str,
    decimal: &str,
    decimals: u32,
    position: SymbolPosition,
) -> CurrencyFormatOptions {
    CurrencyFormatOptions {
        code: "USD".to_string(),
        symbol: "$".to_string(),
        position,
        decimal_separator: decimal.to_string(),
        thousand_separator: thousand.to_string(),
        decimals,
    }
}

const AMOUNTS: &[f64] = &[
    0.0,
    1.0,
    -1.0,
    0.004,
    0.005,
    42.42,
    999.999,
    1234.5,
    -1234.5,
    99_999.99,
    1_000_000.5,
    -87_654_321.125,
];

// Separator pairs exercising the collision cases: swapped ".", ",",
// space grouping, multi-character separators and no grouping at all.
const SEPARATORS: &[(&str, &str)] = &[
    (",", "."),
    (".", ","),
    (" ", ","),
    ("'", "."),
    (" - ", "::"),
    ("", "."),
];

#[test]
fn test_round_trip_bound() {
    for &(thousand, decimal) in SEPARATORS {
        for decimals in 0..=4u32 {
            for &amount in AMOUNTS {
                for position in [SymbolPosition::Before, SymbolPosition::After] {
                    let opts = options(thousand, decimal, decimals, position);
                    let rendered = format_currency(amount, &opts);
                    let parsed = parse_amount(&rendered, &opts).unwrap_or_else(|| {
                        panic!("failed to parse back {:?} ({:?})", rendered, opts)
                    });

                    let bound = 10f64.powi(-(decimals as i32)) + 1e-9;
                    assert!(
                        (parsed - amount).abs() <= bound,
                        "amount {} rendered {:?} parsed {} exceeds bound {}",
                        amount,
                        rendered,
                        parsed,
                        bound
                    );
                }
            }
        }
    }
}

#[test]
fn test_separator_collision_structural_shape() {
    // European separators: grouping "." and decimal ","
    let opts = options(".", ",", 2, SymbolPosition::Before);
    assert_eq!(format_currency(1234.5, &opts), "$1.234,50");

    // Reverse direction must be just as safe
    let opts = options(",", ".", 2, SymbolPosition::Before);
    assert_eq!(format_currency(1234.5, &opts), "$1,234.50");
}

#[test]
fn test_grouping_respects_digit_boundaries() {
    let opts = options(",", ".", 0, SymbolPosition::Before);
    assert_eq!(format_currency(1.0, &opts), "$1");
    assert_eq!(format_currency(12.0, &opts), "$12");
    assert_eq!(format_currency(123.0, &opts), "$123");
    assert_eq!(format_currency(1234.0, &opts), "$1,234");
    assert_eq!(format_currency(12345.0, &opts), "$12,345");
    assert_eq!(format_currency(123456.0, &opts), "$123,456");
    assert_eq!(format_currency(1234567.0, &opts), "$1,234,567");
}

#[test]
fn test_no_grouping_when_separator_empty() {
    let opts = options("", ".", 2, SymbolPosition::Before);
    assert_eq!(format_currency(1234567.89, &opts), "$1234567.89");
}

#[test]
fn test_symbol_position_round_trip() {
    let before = options(",", ".", 2, SymbolPosition::Before);
    let after = options(",", ".", 2, SymbolPosition::After);

    assert_eq!(format_currency(1500.5, &before), "$1,500.50");
    assert_eq!(format_currency(1500.5, &after), "1,500.50$");
    assert_eq!(parse_amount("$1,500.50", &before), Some(1500.5));
    assert_eq!(parse_amount("1,500.50$", &after), Some(1500.5));
}
