//! Filter, page and date mirrored into a URL query string.
//!
//! Parsing is lenient: a malformed value falls back to its default instead
//! of rejecting the whole query, so a hand-edited link still opens.

use std::str::FromStr;

use chrono::NaiveDate;
use krx_dashboard_market_data::{BasDate, NameFilter};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::dates::{default_query_date, parse_picker_date, to_picker, validate_query_date, DateProvider};

const MATCH_EXACT: &str = "exact";
const MATCH_PARTIAL: &str = "partial";

/// Wire form: every value optional and kept as text until interpreted.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    market: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search: Option<String>,
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    match_mode: Option<String>,
}

/// Shareable view state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    /// Market code as typed in the query; interpreted per vertical
    pub market: Option<String>,
    pub date: Option<NaiveDate>,
    /// 1-based page
    pub page: usize,
    pub search: Option<NameFilter>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            market: None,
            date: None,
            page: 1,
            search: None,
        }
    }
}

impl QueryState {
    /// Parses a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let raw: RawQuery = match serde_urlencoded::from_str(query) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Ignoring malformed query '{}': {}", query, e);
                return Self::default();
            }
        };

        let partial = raw
            .match_mode
            .as_deref()
            .map(|m| m.trim().eq_ignore_ascii_case(MATCH_PARTIAL))
            .unwrap_or(false);

        Self {
            market: raw
                .market
                .map(|m| m.trim().to_string())
                .filter(|m| !m.is_empty()),
            date: raw.date.as_deref().and_then(|d| parse_picker_date(d).ok()),
            page: raw
                .page
                .as_deref()
                .and_then(|p| p.trim().parse::<usize>().ok())
                .filter(|p| *p >= 1)
                .unwrap_or(1),
            search: raw
                .search
                .as_deref()
                .and_then(|term| NameFilter::new(term, partial)),
        }
    }

    /// Serializes to a query string without the leading `?`. Defaults are
    /// left out.
    pub fn to_query(&self) -> String {
        let raw = RawQuery {
            market: self.market.clone(),
            date: self.date.map(to_picker),
            page: (self.page > 1).then(|| self.page.to_string()),
            search: self.search.as_ref().map(|f| f.term().to_string()),
            match_mode: self.search.as_ref().map(|f| {
                if f.is_partial() {
                    MATCH_PARTIAL.to_string()
                } else {
                    MATCH_EXACT.to_string()
                }
            }),
        };
        serde_urlencoded::to_string(&raw).unwrap_or_default()
    }

    /// The market parsed for one vertical; unknown codes read as `None`.
    pub fn market<M: FromStr>(&self) -> Option<M> {
        self.market.as_deref().and_then(|m| m.parse().ok())
    }

    /// The query date, falling back to the default when it is missing or in
    /// the future.
    pub fn resolve_date<P: DateProvider + ?Sized>(&self, dates: &P) -> BasDate {
        self.date
            .and_then(|d| validate_query_date(d, dates).ok())
            .unwrap_or_else(|| default_query_date(dates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::FixedDates;
    use krx_dashboard_market_data::BondMarket;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let state = QueryState {
            market: Some("TREASURY".to_string()),
            date: Some(ymd(2024, 12, 27)),
            page: 3,
            search: NameFilter::new("국고채 3년", true),
        };
        let query = state.to_query();
        assert_eq!(QueryState::from_query(&query), state);
    }

    #[test]
    fn test_defaults_are_omitted() {
        assert_eq!(QueryState::default().to_query(), "");
        let state = QueryState {
            date: Some(ymd(2024, 1, 5)),
            ..QueryState::default()
        };
        assert_eq!(state.to_query(), "date=2024-01-05");
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let state = QueryState::from_query("?page=abc&date=yesterday&search=%20%20");
        assert_eq!(state.page, 1);
        assert_eq!(state.date, None);
        assert_eq!(state.search, None);

        assert_eq!(QueryState::from_query("page=0").page, 1);
    }

    #[test]
    fn test_exact_match_is_default() {
        let state = QueryState::from_query("search=%EC%82%BC%EC%84%B1");
        assert_eq!(state.search, Some(NameFilter::Exact("삼성".to_string())));
    }

    #[test]
    fn test_market_per_vertical() {
        let state = QueryState::from_query("market=small");
        assert_eq!(state.market::<BondMarket>(), Some(BondMarket::Small));

        let state = QueryState::from_query("market=NYSE");
        assert_eq!(state.market::<BondMarket>(), None);
    }

    #[test]
    fn test_resolve_date() {
        let dates = FixedDates(ymd(2024, 12, 30));
        let state = QueryState::from_query("date=2024-12-27");
        assert_eq!(state.resolve_date(&dates).to_param(), "20241227");

        let future = QueryState::from_query("date=2025-06-01");
        assert_eq!(future.resolve_date(&dates).to_param(), "20241229");
    }
}
