//! Display formatting for table cells and summary cards.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::numeric::{coerce, Coerced};

const JO: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0); // 10^12
const EOK: Decimal = Decimal::from_parts(100_000_000, 0, 0, false, 0); // 10^8

/// Placeholder rendered for empty cells.
pub const EMPTY_CELL: &str = "-";

/// Direction of a change value, used to pick the cell colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl Trend {
    /// Classifies a signed display value. Text and empty cells are flat.
    pub fn of(value: Option<&str>) -> Self {
        match coerce(value).numeric_value() {
            Some(v) if v > Decimal::ZERO => Trend::Up,
            Some(v) if v < Decimal::ZERO => Trend::Down,
            _ => Trend::Flat,
        }
    }

    /// Arrow shown in front of the magnitude, empty when flat.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Up => "▲",
            Trend::Down => "▼",
            Trend::Flat => "",
        }
    }
}

/// Groups the integer part of `value` with `,` separators.
///
/// Trailing fractional zeros are dropped; the remaining digits are kept.
pub fn group_number(value: Decimal) -> String {
    let text = value.normalize().to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a cell: numbers are regrouped, text passes through, empties
/// become `-`.
pub fn format_grouped(value: Option<&str>) -> String {
    match coerce(value) {
        Coerced::Number(number) => group_number(number),
        Coerced::Text => value.map(str::trim).unwrap_or_default().to_string(),
        Coerced::Empty => EMPTY_CELL.to_string(),
    }
}

/// Formats a large amount with Korean units: `조` from 10^12, `억` from
/// 10^8, plain grouping below that.
pub fn format_korean_amount(value: Decimal) -> String {
    if value >= JO {
        format!("{:.2}조", round_half_up(value / JO))
    } else if value >= EOK {
        format!("{:.2}억", round_half_up(value / EOK))
    } else {
        group_number(value.round_dp(3))
    }
}

fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Amount expressed in whole `억` (10^8), as the market-cap columns show it.
pub fn format_in_eok(value: Option<&str>) -> String {
    match coerce(value) {
        Coerced::Number(number) => group_number(
            (number / EOK).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        ),
        Coerced::Text => value.map(str::trim).unwrap_or_default().to_string(),
        Coerced::Empty => EMPTY_CELL.to_string(),
    }
}

/// Change versus previous close: arrow plus grouped magnitude.
pub fn format_change(value: Option<&str>) -> String {
    match coerce(value) {
        Coerced::Number(number) => {
            let trend = Trend::of(value);
            let magnitude = group_number(number.abs());
            match trend {
                Trend::Flat => magnitude,
                _ => format!("{} {}", trend.arrow(), magnitude),
            }
        }
        Coerced::Text => value.map(str::trim).unwrap_or_default().to_string(),
        Coerced::Empty => EMPTY_CELL.to_string(),
    }
}

/// Fluctuation rate with an explicit sign for gains.
pub fn format_rate(value: Option<&str>) -> String {
    match coerce(value) {
        Coerced::Number(number) if number > Decimal::ZERO => {
            format!("+{}%", number.normalize())
        }
        Coerced::Number(number) => format!("{}%", number.normalize()),
        Coerced::Text => value.map(str::trim).unwrap_or_default().to_string(),
        Coerced::Empty => EMPTY_CELL.to_string(),
    }
}
