use crate::consts::{ERA_START, LONG_MONTH_DAYS, MAX_MONTH, MIN_DAY, MONTHS_IN_YEAR, MONTH_NAMES};
use crate::convert::month_length;
use crate::gregorian;
use crate::prelude::*;
use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A one-based Saka month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Chaitra, the first month
    pub const CHAITRA: Self = Self(NonZeroU8::MIN);
    /// Phalguna, the last month
    pub const PHALGUNA: Self = Self(NonZeroU8::MIN.saturating_add(MAX_MONTH - 1));

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Month for a zero-based index. Indices outside `0..12` wrap around the year,
    /// so `12` is Chaitra again and `-1` is Phalguna.
    pub const fn from_index(index: MonthIndex) -> Self {
        let (_, within_year) = index.normalize();
        Self(NonZeroU8::MIN.saturating_add(within_year))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index of this month (Chaitra is `0`)
    #[inline]
    pub const fn index(self) -> MonthIndex {
        MonthIndex(self.0.get() as i32 - 1)
    }

    /// Transliterated name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.0.get() as usize - 1]
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A zero-based month offset, counted from Chaitra.
///
/// Unlike [`Month`], any value is allowed: offsets past the end of the year
/// carry into following years and negative offsets borrow from earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
pub struct MonthIndex(i32);

impl MonthIndex {
    /// Wraps a zero-based month offset; 0 is Chaitra
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw offset
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Splits the offset into whole years and an index within the year (`0..12`),
    /// using floor division so negative offsets land in earlier years.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn normalize(self) -> (i32, u8) {
        let months = MONTHS_IN_YEAR as i32;
        (self.0.div_euclid(months), self.0.rem_euclid(months) as u8)
    }
}

/// A day value guaranteed to be valid for a given Saka year and month
/// Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// First day of any month
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and valid for the given Saka year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            year,
            month: month.get(),
            day: value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Builds a day that is already known to be in range; values are clamped to `1..=255`.
    pub(crate) const fn saturating(value: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(value.saturating_sub(MIN_DAY)))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the widest month length can be checked
        if !(MIN_DAY..=LONG_MONTH_DAYS).contains(&value) {
            return Err(ParseError::DayOutOfRange(value));
        }
        Ok(Self::saturating(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// A Saka year is leap when its Chaitra has 31 days, i.e. when the Gregorian
/// year it begins in is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    gregorian::is_leap_year(year.saturating_add(ERA_START))
}

/// Number of days in a month of the given Saka year.
pub fn days_in_month(year: i32, month: Month) -> u8 {
    month_length(year, month.index())
}

/// Number of days in the given Saka year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    365 + u16::from(is_leap_year(year))
}
