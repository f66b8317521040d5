//! Proleptic Gregorian calendar and Julian Day Number arithmetic.
//!
//! Years are astronomical: 1 BCE is `0`, 2 BCE is `-1`. Day counts use
//! Howard Hinnant's `days_from_civil` / `civil_from_days` algorithms, which are
//! exact for every representable year.
//! See: <https://howardhinnant.github.io/date_algorithms.html>

use crate::consts::{CENTURY_CYCLE, GREGORIAN_CYCLE, GREGORIAN_DAYS_IN_MONTH, LEAP_YEAR_CYCLE, MIN_DAY};

/// Julian Day Number of 1970-01-01
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Days from 0000-03-01 to 1970-01-01
const CIVIL_EPOCH_SHIFT: i64 = 719_468;
/// Days in one 400-year Gregorian cycle
const DAYS_PER_ERA: i64 = 146_097;

const FEBRUARY: u8 = 2;
const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Returns `true` if `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in a Gregorian month. `month` must be in `1..=12`.
pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        GREGORIAN_DAYS_IN_MONTH[month as usize]
    }
}

/// Checks that `(year, month, day)` names a real Gregorian date.
pub fn is_valid(year: i32, month: u8, day: u8) -> bool {
    (1..=12).contains(&month) && (MIN_DAY..=days_in_month(year, month)).contains(&day)
}

/// Julian Day Number of a Gregorian date.
///
/// The input is not validated; out-of-range months or days give an
/// unspecified (but non-panicking) result.
pub fn jdn_from_gregorian(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= FEBRUARY);
    let era = y.div_euclid(i64::from(GREGORIAN_CYCLE));
    let yoe = y - era * i64::from(GREGORIAN_CYCLE); // [0, 399]
    let m = i64::from(month);
    let mp = if m > 2 { m - 3 } else { m + 9 }; // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

    era * DAYS_PER_ERA + doe - CIVIL_EPOCH_SHIFT + UNIX_EPOCH_JDN
}

/// Gregorian `(year, month, day)` of a Julian Day Number.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn gregorian_from_jdn(jdn: i64) -> (i32, u8, u8) {
    let z = jdn - UNIX_EPOCH_JDN + CIVIL_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let month = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = yoe + era * i64::from(GREGORIAN_CYCLE) + i64::from(month <= 2);

    (year as i32, month as u8, day as u8)
}

/// Julian Day of a Gregorian date as a real-valued day count.
///
/// Always a whole number; the `f64` form lets callers mix in fractional
/// offsets the way the Saka conversions do.
#[allow(clippy::cast_precision_loss)]
pub fn julian_day_of(year: i32, month: u8, day: u8) -> f64 {
    jdn_from_gregorian(year, month, day) as f64
}

/// Gregorian `(year, month, day)` of a real-valued Julian Day, rounded to the
/// nearest whole day.
#[allow(clippy::cast_possible_truncation)]
pub fn date_from_julian_day(jd: f64) -> (i32, u8, u8) {
    gregorian_from_jdn(jd.round() as i64)
}
