use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// Wire format of every date parameter the backend accepts.
pub const BAS_DATE_FORMAT: &str = "%Y%m%d";

/// A trading date as the backend expects it (`YYYYMMDD`, no separators).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BasDate(NaiveDate);

impl BasDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Builds a date from its parts, `None` when the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parses the compact `YYYYMMDD` form.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDate::parse_from_str(value.trim(), BAS_DATE_FORMAT).map(Self)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `YYYYMMDD` string sent in query parameters.
    pub fn to_param(&self) -> String {
        self.0.format(BAS_DATE_FORMAT).to_string()
    }
}

impl fmt::Display for BasDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for BasDate {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for BasDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<BasDate> for NaiveDate {
    fn from(date: BasDate) -> Self {
        date.0
    }
}
