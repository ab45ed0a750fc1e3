//! Query dates.
//!
//! "Today" is injected through [`DateProvider`] so the default query date
//! and future-date validation can be tested with a fixed clock.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use krx_dashboard_market_data::BasDate;

use crate::errors::{InputError, Result};

/// Timezone the exchange calendar runs on.
pub const MARKET_TZ: Tz = chrono_tz::Asia::Seoul;

/// Format of the date picker input.
pub const PICKER_DATE_FORMAT: &str = "%Y-%m-%d";

/// Source of the current market date.
pub trait DateProvider {
    fn today(&self) -> NaiveDate;
}

/// Wall-clock dates in [`MARKET_TZ`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDates;

impl DateProvider for SystemDates {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&MARKET_TZ).date_naive()
    }
}

/// A clock stopped at one date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDates(pub NaiveDate);

impl DateProvider for FixedDates {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date a page queries before the user picks one: yesterday, the most
/// recent day with a complete trading record.
pub fn default_query_date<P: DateProvider + ?Sized>(dates: &P) -> BasDate {
    let today = dates.today();
    BasDate::new(today.pred_opt().unwrap_or(today))
}

/// Parses picker input (`YYYY-MM-DD`).
pub fn parse_picker_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), PICKER_DATE_FORMAT).map_err(|_| {
        InputError::InvalidDate {
            input: input.to_string(),
        }
    })
}

/// Formats a date for the picker.
pub fn to_picker(date: NaiveDate) -> String {
    date.format(PICKER_DATE_FORMAT).to_string()
}

/// Accepts any date up to and including today.
pub fn validate_query_date<P: DateProvider + ?Sized>(date: NaiveDate, dates: &P) -> Result<BasDate> {
    let today = dates.today();
    if date > today {
        return Err(InputError::FutureDate { date, today });
    }
    Ok(BasDate::new(date))
}

/// Parses and validates picker input in one step.
pub fn query_date_from_input<P: DateProvider + ?Sized>(input: &str, dates: &P) -> Result<BasDate> {
    validate_query_date(parse_picker_date(input)?, dates)
}
