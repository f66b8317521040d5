//! Calendar operations on [`SakaDate`]: conversion to and from Gregorian dates
//! and Julian Day Numbers, era bounds, and date arithmetic.
//!
//! Every operation validates its result. Arithmetic keeps the day of the month
//! and fails rather than clamping when that day does not exist in the target
//! month (Chaitra 31 shifted into a year whose Chaitra has 30 days).

use crate::consts::{DAYS_IN_WEEK, MAX_YEAR, MIN_YEAR, MONTHS_IN_YEAR, SHORT_MONTH_DAYS, WEEKDAY_NAMES};
use crate::convert::{saka_to_julian_day, to_saka_date};
use crate::gregorian::{self, date_from_julian_day, gregorian_from_jdn, jdn_from_gregorian};
use crate::types::{self, Day, Month, MonthIndex};
use crate::{ParseError, SakaDate};
use tracing::{debug, trace};

/// Error type for conversions and date arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Julian Day outside `SakaDate::MIN..=SakaDate::MAX`.
    #[error("Julian Day {0} is outside the supported range")]
    JulianDayOutOfRange(i64),

    /// Gregorian input that does not name a real date.
    #[error("Invalid Gregorian date: {year}-{month:02}-{day:02}")]
    InvalidGregorian { year: i32, month: u8, day: u8 },

    /// Arithmetic overflowed before a date could be formed.
    #[error("Date arithmetic overflowed")]
    Overflow,

    /// Resulting date is not a valid Saka date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SakaDate {
    /// Earliest supported date, Chaitra 1 of `MIN_YEAR`
    pub const MIN: Self = Self {
        year:  MIN_YEAR,
        month: Month::CHAITRA,
        day:   Day::FIRST,
    };

    /// Latest supported date, Phalguna 30 of `MAX_YEAR`
    pub const MAX: Self = Self {
        year:  MAX_YEAR,
        month: Month::PHALGUNA,
        day:   Day::saturating(SHORT_MONTH_DAYS),
    };

    /// Converts a proleptic Gregorian date.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorian` for a date that does not exist and
    /// `DateError::JulianDayOutOfRange` for one outside the supported era.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !gregorian::is_valid(year, month, day) {
            trace!(year, month, day, "rejected invalid Gregorian date");
            return Err(DateError::InvalidGregorian { year, month, day });
        }
        Self::check_jdn(jdn_from_gregorian(year, month, day))?;

        let (saka_year, saka_month, saka_day) = to_saka_date(year, month, day);
        Ok(Self::new(saka_year, saka_month.get(), saka_day)?)
    }

    /// Converts a Julian Day Number.
    ///
    /// # Errors
    /// Returns `DateError::JulianDayOutOfRange` if `jdn` is before [`SakaDate::MIN`]
    /// or after [`SakaDate::MAX`].
    pub fn from_jdn(jdn: i64) -> Result<Self, DateError> {
        Self::check_jdn(jdn)?;
        let (year, month, day) = gregorian_from_jdn(jdn);
        let (saka_year, saka_month, saka_day) = to_saka_date(year, month, day);
        Ok(Self::new(saka_year, saka_month.get(), saka_day)?)
    }

    /// Real-valued Julian Day of this date
    pub fn julian_day(&self) -> f64 {
        saka_to_julian_day(self.year, self.month, self.day.get())
    }

    /// Julian Day Number of this date
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_jdn(&self) -> i64 {
        self.julian_day().round() as i64
    }

    /// Proleptic Gregorian `(year, month, day)` of this date
    pub fn to_gregorian(&self) -> (i32, u8, u8) {
        date_from_julian_day(self.julian_day())
    }

    fn check_jdn(jdn: i64) -> Result<i64, DateError> {
        if (Self::MIN.to_jdn()..=Self::MAX.to_jdn()).contains(&jdn) {
            Ok(jdn)
        } else {
            trace!(jdn, "Julian Day out of range");
            Err(DateError::JulianDayOutOfRange(jdn))
        }
    }

    /// Number of months in the year, always 12
    pub const fn months_in_year(&self) -> u8 {
        MONTHS_IN_YEAR
    }

    /// Number of days in the week
    pub const fn days_in_week(&self) -> u8 {
        DAYS_IN_WEEK
    }

    /// Length of this date's month
    pub fn days_in_month(&self) -> u8 {
        types::days_in_month(self.year, self.month)
    }

    /// Length of this date's year (365 or 366)
    pub fn days_in_year(&self) -> u16 {
        types::days_in_year(self.year)
    }

    /// Whether this date's year has a 31-day Chaitra
    pub fn is_leap_year(&self) -> bool {
        types::is_leap_year(self.year)
    }

    /// One-based day of the Saka year; Chaitra 1 is `1`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_year(&self) -> u16 {
        let new_year = Self {
            year:  self.year,
            month: Month::CHAITRA,
            day:   Day::FIRST,
        };
        (self.to_jdn() - new_year.to_jdn() + 1) as u16
    }

    /// ISO day of the week, Monday is `1` and Sunday is `7`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn day_of_week(&self) -> u8 {
        (self.to_jdn().rem_euclid(i64::from(DAYS_IN_WEEK)) + 1) as u8
    }

    /// Transliterated name of the weekday (Somvar through Ravivar)
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[usize::from(self.day_of_week() - 1)]
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `DateError::JulianDayOutOfRange` if the result leaves the supported era.
    pub fn add_days(&self, days: i64) -> Result<Self, DateError> {
        let jdn = self.to_jdn().checked_add(days).ok_or(DateError::Overflow)?;
        Self::from_jdn(jdn)
    }

    /// Moves the date by a signed number of months, keeping the day of the month.
    ///
    /// # Errors
    /// Returns `DateError::Parse` if the day does not exist in the target month
    /// or the target year is out of range.
    #[allow(clippy::cast_possible_truncation)]
    pub fn add_months(&self, months: i32) -> Result<Self, DateError> {
        let months_per_year = i64::from(MONTHS_IN_YEAR);
        let total = i64::from(self.year) * months_per_year
            + i64::from(self.month.index().get())
            + i64::from(months);
        let year = i32::try_from(total.div_euclid(months_per_year)).map_err(|_| DateError::Overflow)?;
        let month = Month::from_index(MonthIndex::new(total.rem_euclid(months_per_year) as i32));

        Self::from_parts(year, month, self.day).map_err(|err| {
            debug!(from = %self, months, %err, "month shift rejected");
            DateError::from(err)
        })
    }

    /// Moves the date by a signed number of years, keeping the month and day.
    ///
    /// # Errors
    /// Returns `DateError::Parse` if the day does not exist in the target year
    /// (Chaitra 31 into a year with a 30-day Chaitra) or the target year is out
    /// of range.
    pub fn add_years(&self, years: i32) -> Result<Self, DateError> {
        let year = self.year.checked_add(years).ok_or(DateError::Overflow)?;

        Self::from_parts(year, self.month, self.day).map_err(|err| {
            debug!(from = %self, target_year = year, %err, "year shift rejected");
            DateError::from(err)
        })
    }
}
