//! Aggregates behind the summary cards.
//!
//! Cells that are not numbers contribute zero to sums and averages and are
//! skipped when picking movers or counting breadth.

use krx_dashboard_market_data::Record;
use rust_decimal::Decimal;

use crate::numeric::{coerce, decimal_or_zero};

/// Sum of `key` over `rows`, saturating at the `Decimal` bounds.
pub fn sum_column<R: Record>(rows: &[R], key: &str) -> Decimal {
    rows.iter()
        .map(|row| decimal_or_zero(row.field(key)))
        .fold(Decimal::ZERO, |total, value| total.saturating_add(value))
}

/// Mean of `key` over all rows, `None` for an empty slice.
pub fn average_column<R: Record>(rows: &[R], key: &str) -> Option<Decimal> {
    if rows.is_empty() {
        return None;
    }
    Some(sum_column(rows, key) / Decimal::from(rows.len()))
}

fn extreme_by<'a, R, F>(rows: &'a [R], key: &str, replace: F) -> Option<&'a R>
where
    R: Record,
    F: Fn(Decimal, Decimal) -> bool,
{
    let mut best: Option<(Decimal, &R)> = None;
    for row in rows {
        let Some(value) = coerce(row.field(key)).numeric_value() else {
            continue;
        };
        match best {
            Some((current, _)) if !replace(value, current) => {}
            _ => best = Some((value, row)),
        }
    }
    best.map(|(_, row)| row)
}

/// Row with the largest numeric `key`; the first one wins ties.
pub fn top_by<'a, R: Record>(rows: &'a [R], key: &str) -> Option<&'a R> {
    extreme_by(rows, key, |candidate, current| candidate > current)
}

/// Row with the smallest numeric `key`; the first one wins ties.
pub fn bottom_by<'a, R: Record>(rows: &'a [R], key: &str) -> Option<&'a R> {
    extreme_by(rows, key, |candidate, current| candidate < current)
}

/// Advancers, decliners and unchanged rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Breadth {
    pub up: usize,
    pub down: usize,
    pub steady: usize,
}

pub fn breadth<R: Record>(rows: &[R], key: &str) -> Breadth {
    rows.iter()
        .filter_map(|row| coerce(row.field(key)).numeric_value())
        .fold(Breadth::default(), |mut acc, value| {
            if value > Decimal::ZERO {
                acc.up += 1;
            } else if value < Decimal::ZERO {
                acc.down += 1;
            } else {
                acc.steady += 1;
            }
            acc
        })
}

/// A named row picked out for a card, with the value it was picked by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub name: String,
    /// Raw display value of the ranking column
    pub value: String,
}

impl Highlight {
    fn of<R: Record>(row: &R, name_key: &str, value_key: &str) -> Self {
        Self {
            name: row.field(name_key).unwrap_or("-").to_string(),
            value: row.field(value_key).unwrap_or("-").to_string(),
        }
    }
}

/// Index dashboard and quotation cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IndexSummary {
    pub count: usize,
    pub average_fluctuation: Option<Decimal>,
    pub top_gainer: Option<Highlight>,
    pub worst_loser: Option<Highlight>,
    pub breadth: Breadth,
}

impl IndexSummary {
    /// Summary of index quotes (`idxNm` / `fltRt`).
    pub fn of_indices<R: Record>(rows: &[R]) -> Self {
        Self::compute(rows, "idxNm", "fltRt")
    }

    pub fn compute<R: Record>(rows: &[R], name_key: &str, rate_key: &str) -> Self {
        Self {
            count: rows.len(),
            average_fluctuation: average_column(rows, rate_key),
            top_gainer: top_by(rows, rate_key).map(|r| Highlight::of(r, name_key, rate_key)),
            worst_loser: bottom_by(rows, rate_key).map(|r| Highlight::of(r, name_key, rate_key)),
            breadth: breadth(rows, rate_key),
        }
    }
}

/// Column keys a [`TradingSummary`] reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradingKeys {
    pub name: &'static str,
    /// Column the top mover is ranked by
    pub mover: &'static str,
    pub volume: &'static str,
    pub value: &'static str,
    /// Extra total shown on the fourth card (market cap, open interest)
    pub extra_total: Option<&'static str>,
}

pub const STOCK_SUMMARY_KEYS: TradingKeys = TradingKeys {
    name: "isuNm",
    mover: "flucRt",
    volume: "accTrdvol",
    value: "accTrdval",
    extra_total: Some("mktcap"),
};

pub const BOND_SUMMARY_KEYS: TradingKeys = TradingKeys {
    name: "isuNm",
    mover: "cmpprevddPrc",
    volume: "accTrdvol",
    value: "accTrdval",
    extra_total: None,
};

pub const DERIVATIVE_SUMMARY_KEYS: TradingKeys = TradingKeys {
    name: "isuNm",
    mover: "cmpprevddPrc",
    volume: "accTrdvol",
    value: "accTrdval",
    extra_total: Some("accOpnintQty"),
};

pub const PRODUCT_SUMMARY_KEYS: TradingKeys = TradingKeys {
    name: "isuNm",
    mover: "flucRt",
    volume: "accTrdvol",
    value: "accTrdval",
    extra_total: Some("mktcap"),
};

pub const COMMODITY_SUMMARY_KEYS: TradingKeys = TradingKeys {
    name: "isuNm",
    mover: "flucRt",
    volume: "accTrdvol",
    value: "accTrdval",
    extra_total: None,
};

/// Stock, bond, derivative, product and commodity cards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TradingSummary {
    pub count: usize,
    pub total_volume: Decimal,
    pub total_value: Decimal,
    pub top_mover: Option<Highlight>,
    pub extra_total: Option<Decimal>,
}

impl TradingSummary {
    pub fn compute<R: Record>(rows: &[R], keys: &TradingKeys) -> Self {
        Self {
            count: rows.len(),
            total_volume: sum_column(rows, keys.volume),
            total_value: sum_column(rows, keys.value),
            top_mover: top_by(rows, keys.mover).map(|r| Highlight::of(r, keys.name, keys.mover)),
            extra_total: keys.extra_total.map(|key| sum_column(rows, key)),
        }
    }
}
