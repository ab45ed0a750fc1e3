//! Core error types for the dashboard.
//!
//! Fetch failures never surface here: the adapter folds them into
//! [`Fetched`](krx_dashboard_market_data::Fetched). These errors cover user
//! input that is rejected before any request is made.

use chrono::NaiveDate;
use krx_dashboard_market_data::ParseMarketError;
use thiserror::Error;

/// Type alias for Result using [`InputError`].
pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The date input does not parse as `YYYY-MM-DD`.
    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    /// The backend has no data for days that have not happened yet.
    #[error("Date {date} is in the future (today is {today})")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    /// A market code that does not belong to the selected vertical.
    #[error(transparent)]
    UnknownMarket(#[from] ParseMarketError),
}
