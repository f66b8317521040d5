mod calendar;
mod consts;
pub mod convert;
pub mod gregorian;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use calendar::DateError;
pub use consts::*;
pub use convert::saka_to_julian_day as julian_day_from_saka;
pub use types::{Day, Month, MonthIndex, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A date in the Saka (Indian National) calendar.
///
/// Always valid: the year is within `MIN_YEAR..=MAX_YEAR` and the day fits the
/// month's length in that year. Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, "month.get()", "day.get()")]
pub struct SakaDate {
    year:  i32,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {} to {})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid day: {} (must be {}-{})", "_0", MIN_DAY, LONG_MONTH_DAYS)]
    DayOutOfRange(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl SakaDate {
    /// Creates a validated Saka date from plain numbers
    ///
    /// # Errors
    /// Returns `ParseError` if the year is out of range, the month is not in
    /// `1..=12`, or the day does not exist in that month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Self::validate_year(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a Saka date from typed components, re-checking the day against
    /// the month length of `year`
    ///
    /// # Errors
    /// Returns `ParseError` if the year is out of range or the day does not fit.
    pub fn from_parts(year: i32, month: Month, day: Day) -> Result<Self, ParseError> {
        let year = Self::validate_year(year)?;
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Checks whether `(year, month, day)` names a supported Saka date
    pub fn is_valid(year: i32, month: u8, day: u8) -> bool {
        Self::new(year, month, day).is_ok()
    }

    /// Returns the Saka year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1 is Chaitra)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Returns `(year, month, day)` as plain numbers
    pub const fn to_ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    fn validate_year(year: i32) -> Result<i32, ParseError> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(year)
        } else {
            Err(ParseError::InvalidYear(year))
        }
    }
}

impl FromStr for SakaDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading separator is the sign of a negative year
        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(format!(
                "Expected 2 {} separators, found {}",
                DATE_SEPARATOR,
                parts.len() - 1
            )));
        }

        let magnitude = Self::parse_i32(parts[0])?;
        let year = if negative { -magnitude } else { magnitude };
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::new(year, month, day)
    }
}

impl SakaDate {
    /// Parses an unsigned run of digits; signs belong to the date syntax, not the number
    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl TryFrom<(i32, u8, u8)> for SakaDate {
    type Error = ParseError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl Serialize for SakaDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SakaDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
