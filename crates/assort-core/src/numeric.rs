//! Numeric normalizer — pulls an amount (float) and a quantity (integer) out of
//! loosely formatted supplier text, plus a standalone exact-decimal helper.

use crate::error::NormalizationError;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::str::FromStr;

/// First `digits[.digits]` token. ASCII digits only.
static AMOUNT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("amount token regex is valid"));

/// Largest scale a [`Decimal`] can carry.
const MAX_PRECISION: u32 = 28;

/// What to do when an amount field holds no numeric token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountPolicy {
    /// Fail the record with [`NormalizationError::MissingAmount`].
    #[default]
    Strict,
    /// Substitute `0.0` and log a warning.
    Lenient,
}

// ---------------------------------------------------------------------------
// Amount
// ---------------------------------------------------------------------------

/// First numeric token of `raw`, with commas read as decimal points.
///
/// `"0,75 L"` → `0.75`; `"6 x 0.75L"` → `6.0` (the first number wins).
pub fn first_amount(raw: &str) -> Option<f64> {
    let normalized = raw.replace(',', ".");
    let token = AMOUNT_TOKEN.find(&normalized)?;
    token.as_str().parse().ok()
}

/// Extract the base product amount from `raw`, applying `policy` when there is
/// nothing to extract. `field` names the source field for error context.
pub fn amount(
    raw: Option<&str>,
    field: &str,
    policy: AmountPolicy,
) -> Result<f64, NormalizationError> {
    if let Some(value) = raw.and_then(first_amount) {
        return Ok(value);
    }
    match policy {
        AmountPolicy::Strict => Err(NormalizationError::MissingAmount {
            field: field.to_string(),
            raw: raw.map(str::to_string),
        }),
        AmountPolicy::Lenient => {
            tracing::warn!(field, raw = ?raw, "no numeric amount; defaulting to 0.0");
            Ok(0.0)
        }
    }
}

// ---------------------------------------------------------------------------
// Quantity
// ---------------------------------------------------------------------------

/// Parse-int semantics: optional leading whitespace and sign, then the leading
/// run of ASCII digits. No digits (or no input) yields `0`. Saturates at the
/// `i64` bounds.
pub fn quantity(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else { return 0 };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude = rest[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

// ---------------------------------------------------------------------------
// Decimal utility
// ---------------------------------------------------------------------------

/// Normalize a human-formatted number to a fixed-precision [`Decimal`].
///
/// Whitespace is stripped and commas become points. When several separators
/// remain, the last one is the decimal point and the others are thousands
/// separators (`"1.234.567,891"` → `1234567.89`). The result is truncated
/// toward zero to `precision` places and always carries exactly that scale.
pub fn normalize_decimal(raw: &str, precision: u32) -> Result<Decimal, NormalizationError> {
    let invalid = || NormalizationError::InvalidDecimal {
        raw: raw.to_string(),
    };

    let compact: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let (sign, unsigned) = match compact.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", compact.strip_prefix('+').unwrap_or(compact.as_str())),
    };

    let (integer, fraction) = match unsigned.rsplit_once('.') {
        Some((head, tail)) => (head.replace('.', ""), tail),
        None => (unsigned.to_string(), ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        return Err(invalid());
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(&integer) || !all_digits(fraction) {
        return Err(invalid());
    }

    let integer = if integer.is_empty() { "0" } else { integer.as_str() };
    let canonical = if fraction.is_empty() {
        format!("{sign}{integer}")
    } else {
        format!("{sign}{integer}.{fraction}")
    };

    let precision = precision.min(MAX_PRECISION);
    let mut value = Decimal::from_str(&canonical)
        .map_err(|_| invalid())?
        .round_dp_with_strategy(precision, RoundingStrategy::ToZero);
    value.rescale(precision);
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
