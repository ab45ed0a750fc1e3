//! Numeric coercion of display strings.
//!
//! Backend values arrive as text: `"1,234"`, `"-0.52"`, `"삼성전자"`, `"-"` or
//! nothing at all. [`coerce`] classifies a value once so sorting, formatting
//! and aggregation agree on what counts as a number.

use std::cmp::Ordering;
use std::str::FromStr;

use rust_decimal::Decimal;

/// Classification of a single display value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coerced {
    /// Parsed numeric value with separators removed
    Number(Decimal),
    /// Non-empty value that is not a number
    Text,
    /// Missing, blank, or the `-` placeholder
    Empty,
}

impl Coerced {
    pub fn is_numeric(&self) -> bool {
        matches!(self, Coerced::Number(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Coerced::Empty)
    }

    pub fn numeric_value(&self) -> Option<Decimal> {
        match self {
            Coerced::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Rank used when two values of different classes meet in a sort:
    /// numbers, then text, then empties.
    pub(crate) fn class_rank(&self) -> u8 {
        match self {
            Coerced::Number(_) => 0,
            Coerced::Text => 1,
            Coerced::Empty => 2,
        }
    }
}

/// Classifies a display value.
///
/// Thousands separators and surrounding whitespace are ignored, a leading
/// `-` makes the number negative, and an empty or `-` value is never read as
/// zero.
///
/// # Examples
///
/// ```
/// use krx_dashboard_core::numeric::{coerce, Coerced};
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce(Some("-1,234")), Coerced::Number(Decimal::new(-1234, 0)));
/// assert_eq!(coerce(Some("-")), Coerced::Empty);
/// assert_eq!(coerce(Some("KOSPI 200")), Coerced::Text);
/// ```
pub fn coerce(value: Option<&str>) -> Coerced {
    let Some(raw) = value else {
        return Coerced::Empty;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return Coerced::Empty;
    }
    match parse_decimal(trimmed) {
        Some(number) => Coerced::Number(number),
        None => Coerced::Text,
    }
}

/// Parses a separator-grouped number, returning `None` for anything else.
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let cleaned: String = value.trim().chars().filter(|c| *c != ',').collect();
    let unsigned = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    // rust_decimal accepts `_` digit separators; the backend never sends them
    if unsigned.is_empty() || unsigned.contains('_') {
        return None;
    }
    Decimal::from_str(unsigned)
        .ok()
        .or_else(|| Decimal::from_scientific(unsigned).ok())
}

/// Numeric value of `value`, or zero when it is not a number.
///
/// Aggregates treat unparseable cells as contributing nothing.
pub fn decimal_or_zero(value: Option<&str>) -> Decimal {
    coerce(value).numeric_value().unwrap_or(Decimal::ZERO)
}

/// Orders two coerced values ascending: numbers compare numerically, text
/// compares ordinally on the raw strings, and mixed classes fall back to
/// [`Coerced::class_rank`].
pub fn compare_coerced(a: (&Coerced, Option<&str>), b: (&Coerced, Option<&str>)) -> Ordering {
    match (a.0, b.0) {
        (Coerced::Number(x), Coerced::Number(y)) => x.cmp(y),
        (Coerced::Text, Coerced::Text) => a.1.unwrap_or("").cmp(b.1.unwrap_or("")),
        (Coerced::Empty, Coerced::Empty) => Ordering::Equal,
        (x, y) => x.class_rank().cmp(&y.class_rank()),
    }
}
