//! Column sort engine.
//!
//! Sorting never mutates its input and is stable in both directions.
//! Values are classified with [`coerce`]: numbers compare numerically, text
//! compares ordinally, and when classes differ numbers come before text and
//! text before empties. That class order holds for both directions; only
//! comparisons inside a class are reversed, so `-` and missing cells always
//! end up at the bottom.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use krx_dashboard_market_data::Record;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::numeric::{coerce, compare_coerced, Coerced};

/// Sort direction for the active column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Header indicator for the active column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort direction: {0}")]
pub struct ParseSortDirectionError(pub String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

/// Active sort column and direction. `key == None` keeps backend order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn ascending(key: impl Into<String>) -> Self {
        Self::new(key, SortDirection::Ascending)
    }

    /// Header click: the active column flips direction, any other column
    /// becomes active in ascending order.
    pub fn toggle(&mut self, key: &str) {
        if self.key.as_deref() == Some(key) {
            self.direction = self.direction.toggled();
        } else {
            self.key = Some(key.to_string());
            self.direction = SortDirection::Ascending;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key.as_deref() == Some(key)
    }

    /// Arrow for `key`'s header, empty unless it is the active column.
    pub fn indicator(&self, key: &str) -> &'static str {
        if self.is_active(key) {
            self.direction.arrow()
        } else {
            ""
        }
    }
}

fn compare_classified(
    a: (&Coerced, Option<&str>),
    b: (&Coerced, Option<&str>),
    direction: SortDirection,
) -> Ordering {
    let ordering = compare_coerced(a, b);
    let same_class = a.0.class_rank() == b.0.class_rank();
    if same_class && direction == SortDirection::Descending {
        ordering.reverse()
    } else {
        ordering
    }
}

/// Compares two raw cell values under `direction`.
pub fn compare_values(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    compare_classified((&coerce(a), a), (&coerce(b), b), direction)
}

/// Returns the permutation that sorts `records` by `key`.
pub fn sort_indices<R: Record>(records: &[R], key: &str, direction: SortDirection) -> Vec<usize> {
    let keyed: Vec<(Coerced, Option<&str>)> = records
        .iter()
        .map(|record| {
            let value = record.field(key);
            (coerce(value), value)
        })
        .collect();

    let mut indices: Vec<usize> = (0..records.len()).collect();
    // slice::sort_by is stable
    indices.sort_by(|&i, &j| {
        compare_classified(
            (&keyed[i].0, keyed[i].1),
            (&keyed[j].0, keyed[j].1),
            direction,
        )
    });
    indices
}

/// Sorted copy of `records`.
pub fn sort_records<R: Record + Clone>(records: &[R], key: &str, direction: SortDirection) -> Vec<R> {
    sort_indices(records, key, direction)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}

/// Sorted copy per `state`; without an active column the order is kept.
pub fn apply_sort<R: Record + Clone>(records: &[R], state: &SortState) -> Vec<R> {
    match state.key.as_deref() {
        Some(key) => sort_records(records, key, state.direction),
        None => records.to_vec(),
    }
}
