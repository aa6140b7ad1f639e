//! Locale-sensitive value formatting
//!
//! Pure functions over fully-populated option records produced by
//! resolution. Numbers are rendered into a locale-neutral intermediate form
//! using private-use placeholder characters for the grouping separator and
//! decimal point, then the placeholders are substituted with the configured
//! separators. The two substitutions cannot interfere with each other, even
//! when the configured separators swap "." and "," or span several
//! characters.

use crate::contract::{CurrencyFormatOptions, DateFormatOptions, SymbolPosition};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

/// Placeholder for the grouping separator in the intermediate form
const GROUP_TOKEN: char = '\u{F8F0}';
/// Placeholder for the decimal point in the intermediate form
const DECIMAL_TOKEN: char = '\u{F8F1}';

/// Sentinel rendered for non-finite amounts (NaN, infinities)
///
/// Formatting never panics; amounts outside the representable decimal range
/// normalize to the same sentinel.
pub const NON_FINITE_SENTINEL: &str = "n/a";

/// Format an amount as a display string per the given currency options
///
/// Rounds half-to-even at `options.decimals` fractional digits. The result
/// is a one-way projection; use [`parse_amount`] to recover the numeric
/// value to within `10^-decimals`.
pub fn format_currency(amount: f64, options: &CurrencyFormatOptions) -> String {
    let Some(intermediate) = render_fixed(amount, options.decimals) else {
        return NON_FINITE_SENTINEL.to_string();
    };

    // Placeholder substitution; order cannot matter because the tokens are
    // private-use characters that never occur in digits or in each other.
    let number = intermediate
        .replace(GROUP_TOKEN, &options.thousand_separator)
        .replace(DECIMAL_TOKEN, &options.decimal_separator);

    match options.position {
        SymbolPosition::Before => format!("{}{}", options.symbol, number),
        SymbolPosition::After => format!("{}{}", number, options.symbol),
    }
}

/// Inverse of the separator substitution
///
/// Recovers the numeric value from a string produced by [`format_currency`]
/// with the same options. Returns None for the non-finite sentinel or a
/// string that does not match the options' shape.
pub fn parse_amount(rendered: &str, options: &CurrencyFormatOptions) -> Option<f64> {
    if rendered == NON_FINITE_SENTINEL {
        return None;
    }

    let number = match options.position {
        SymbolPosition::Before => rendered.strip_prefix(options.symbol.as_str())?,
        SymbolPosition::After => rendered.strip_suffix(options.symbol.as_str())?,
    };
    let (negative, digits) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };
    let (int_raw, frac) = if options.decimals > 0 {
        digits.rsplit_once(options.decimal_separator.as_str())?
    } else {
        (digits, "")
    };
    let int_digits: String = if options.thousand_separator.is_empty() {
        int_raw.to_string()
    } else {
        int_raw.split(options.thousand_separator.as_str()).collect()
    };

    let mut canonical = String::new();
    if negative {
        canonical.push('-');
    }
    canonical.push_str(&int_digits);
    if !frac.is_empty() {
        canonical.push('.');
        canonical.push_str(frac);
    }
    canonical.parse::<f64>().ok()
}

/// Format a date per the given options
///
/// Pattern tokens DD, MM and YYYY map to day, month and four-digit year.
/// Any other characters are rendered verbatim.
pub fn format_date(date: NaiveDate, options: &DateFormatOptions) -> String {
    // Escape stray '%' before token mapping so arbitrary stored patterns
    // cannot produce an invalid chrono specifier.
    let pattern = options
        .pattern
        .replace('%', "%%")
        .replace("YYYY", "%Y")
        .replace("MM", "%m")
        .replace("DD", "%d");
    date.format(&pattern).to_string()
}

/// Render `amount` with exactly `decimals` fractional digits in the
/// locale-neutral intermediate form, rounding half-to-even
///
/// Returns None for non-finite input or input outside the decimal range.
fn render_fixed(amount: f64, decimals: u32) -> Option<String> {
    if !amount.is_finite() {
        return None;
    }
    let value = Decimal::from_f64_retain(amount)?;
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);

    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    let digit_count = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digit_count - i) % 3 == 0 {
            out.push(GROUP_TOKEN);
        }
        out.push(ch);
    }
    if decimals > 0 {
        out.push(DECIMAL_TOKEN);
        out.push_str(frac_part);
        for _ in frac_part.len()..decimals as usize {
            out.push('0');
        }
    }
    Some(out)
}
