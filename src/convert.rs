//! Conversion primitives between the Gregorian and Saka calendars.
//!
//! These functions are total and unchecked: they assume their inputs already
//! name real dates and return an unspecified value otherwise. [`SakaDate`]
//! validates before calling into them.
//!
//! The forward ([`saka_to_julian_day`]) and inverse ([`to_saka_date`])
//! directions each derive the month boundaries on their own; they are kept
//! in agreement by the round-trip tests below.
//!
//! [`SakaDate`]: crate::SakaDate

use crate::consts::{ERA_START, LONG_MONTHS_AFTER_CHAITRA, LONG_MONTH_DAYS, SHORT_MONTH_DAYS, YEAR_START};
use crate::gregorian::{is_leap_year, julian_day_of};
use crate::types::{Month, MonthIndex};

/// Days from the end of Chaitra up to the following Gregorian January 1
/// (Vaisakha through Pausa 10).
const DAYS_AFTER_CHAITRA_TO_JANUARY: i32 = 31 * 5 + 30 * 3 + 10;

/// Days in Vaisakha through Bhadra combined
const LONG_MONTHS_SPAN: i32 = LONG_MONTHS_AFTER_CHAITRA * LONG_MONTH_DAYS as i32;

/// Length of Chaitra for a year that begins in `gregorian_year`.
const fn chaitra_length(gregorian_year: i32) -> u8 {
    if is_leap_year(gregorian_year) { LONG_MONTH_DAYS } else { SHORT_MONTH_DAYS }
}

/// Length of a Saka month.
///
/// `year` is offset by [`ERA_START`] before the Gregorian leap test, so pass
/// the Saka year. Indices outside `0..12` are folded into neighbouring years
/// first.
pub fn month_length(year: i32, month: MonthIndex) -> u8 {
    let (carry, index) = month.normalize();
    let year = year.saturating_add(carry);

    if index == 0 {
        chaitra_length(year.saturating_add(ERA_START))
    } else if index <= 5 {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

/// Saka year number before the new-year boundary is taken into account.
///
/// This is correct for dates on or after the Saka new year (March 21/22) and
/// one too high for dates before it; [`saka_year_of`] applies the correction.
pub const fn nominal_saka_year(gregorian_year: i32) -> i32 {
    gregorian_year.saturating_sub(ERA_START)
}

/// Julian Day of a Saka date.
///
/// `day` is not checked against the month length.
pub fn saka_to_julian_day(year: i32, month: Month, day: u8) -> f64 {
    let gregorian_year = year.saturating_add(ERA_START);

    let (leap_month, year_start) = if is_leap_year(gregorian_year) {
        (LONG_MONTH_DAYS, julian_day_of(gregorian_year, 3, 21))
    } else {
        (SHORT_MONTH_DAYS, julian_day_of(gregorian_year, 3, 22))
    };

    let month = i32::from(month.get());
    let day_offset = f64::from(day) - 1.0;

    if month == 1 {
        return year_start + day_offset;
    }

    let mut jd = year_start + f64::from(leap_month);
    let long_months = (month - 2).min(LONG_MONTHS_AFTER_CHAITRA);
    jd += f64::from(long_months * i32::from(LONG_MONTH_DAYS));
    if month >= 8 {
        jd += f64::from((month - 7) * i32::from(SHORT_MONTH_DAYS));
    }

    jd + day_offset
}

/// Saka `(year, month, day)` of a Gregorian date.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_saka_date(gregorian_year: i32, gregorian_month: u8, gregorian_day: u8) -> (i32, Month, u8) {
    let start_of_year = julian_day_of(gregorian_year, 1, 1);
    let this_day = julian_day_of(gregorian_year, gregorian_month, gregorian_day);
    // Zero-based, January 1 is 0
    let mut day_of_year = (this_day - start_of_year).floor() as i32;

    let mut saka_year = nominal_saka_year(gregorian_year);
    let leap_month;
    if day_of_year < YEAR_START {
        // Tail of the Saka year that began in the previous Gregorian year
        saka_year = saka_year.saturating_sub(1);
        leap_month = i32::from(chaitra_length(gregorian_year.saturating_sub(1)));
        day_of_year += leap_month + DAYS_AFTER_CHAITRA_TO_JANUARY;
    } else {
        leap_month = i32::from(chaitra_length(gregorian_year));
        day_of_year -= YEAR_START;
    }

    let (index, day) = if day_of_year < leap_month {
        (0, day_of_year + 1)
    } else {
        let remaining = day_of_year - leap_month;
        if remaining < LONG_MONTHS_SPAN {
            (remaining / 31 + 1, remaining % 31 + 1)
        } else {
            let remaining = remaining - LONG_MONTHS_SPAN;
            (remaining / 30 + 6, remaining % 30 + 1)
        }
    };

    // `from_index` folds an index of 12 back onto Chaitra. The decomposition
    // above tops out at 11 (Phalguna 30 at day 365 of a leap year), so that
    // wrap never fires here.
    let month = Month::from_index(MonthIndex::new(index));

    (saka_year, month, day as u8)
}

/// Saka year of a Gregorian date, with the new-year boundary applied.
pub fn saka_year_of(gregorian_year: i32, gregorian_month: u8, gregorian_day: u8) -> i32 {
    to_saka_date(gregorian_year, gregorian_month, gregorian_day).0
}

/// Saka month and day of a Gregorian date.
pub fn saka_month_and_day_of(gregorian_year: i32, gregorian_month: u8, gregorian_day: u8) -> (Month, u8) {
    let (_, month, day) = to_saka_date(gregorian_year, gregorian_month, gregorian_day);
    (month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gregorian::{date_from_julian_day, is_valid};
    use crate::test_utils::month;

    #[test]
    fn test_month_length_cases() {
        struct TestCase {
            year:        i32,
            index:       i32,
            expected:    u8,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1999,
                index:       0,
                expected:    30,
                description: "Chaitra, 2077 is not a leap year",
            },
            TestCase {
                year:        1922,
                index:       0,
                expected:    31,
                description: "Chaitra, 2000 is a leap year",
            },
            TestCase {
                year:        1822,
                index:       0,
                expected:    30,
                description: "Chaitra, 1900 is not a leap year",
            },
            TestCase {
                year:        1922,
                index:       1,
                expected:    31,
                description: "Vaisakha",
            },
            TestCase {
                year:        1922,
                index:       5,
                expected:    31,
                description: "Bhadra",
            },
            TestCase {
                year:        1922,
                index:       6,
                expected:    30,
                description: "Asvina",
            },
            TestCase {
                year:        1922,
                index:       11,
                expected:    30,
                description: "Phalguna",
            },
            TestCase {
                year:        1921,
                index:       12,
                expected:    31,
                description: "index 12 is Chaitra of the next year (1922)",
            },
            TestCase {
                year:        1923,
                index:       -12,
                expected:    31,
                description: "index -12 is Chaitra of the previous year (1922)",
            },
            TestCase {
                year:        1922,
                index:       -1,
                expected:    30,
                description: "index -1 is Phalguna of the previous year",
            },
        ];

        for case in &cases {
            assert_eq!(
                month_length(case.year, MonthIndex::new(case.index)),
                case.expected,
                "month_length({}, {}): {}",
                case.year,
                case.index,
                case.description
            );
        }
    }

    #[test]
    fn test_month_length_sum_matches_gregorian_year() {
        for year in -200..=3000 {
            let total: u32 = (0..12).map(|i| u32::from(month_length(year, MonthIndex::new(i)))).sum();
            let expected = if is_leap_year(year + ERA_START) { 366 } else { 365 };
            assert_eq!(total, expected, "Saka year {year}");
        }
    }

    #[test]
    fn test_leap_propagation() {
        for year in 1800..=2200 {
            let chaitra = month_length(year, MonthIndex::new(0));
            assert_eq!(chaitra == 31, is_leap_year(year + ERA_START), "Saka year {year}");
        }
    }

    #[test]
    fn test_new_year_scenarios() {
        assert_eq!(to_saka_date(2000, 3, 21), (1922, Month::CHAITRA, 1));
        assert_eq!(to_saka_date(2000, 3, 20), (1921, Month::PHALGUNA, 30));
        assert_eq!(to_saka_date(1999, 3, 22), (1921, Month::CHAITRA, 1));
        assert_eq!(to_saka_date(1999, 3, 21), (1920, Month::PHALGUNA, 30));
    }

    #[test]
    fn test_known_dates() {
        // 1957-03-22, the day the calendar was adopted
        assert_eq!(to_saka_date(1957, 3, 22), (1879, Month::CHAITRA, 1));
        // 1992-09-02 is Bhadra 11, 1914
        assert_eq!(to_saka_date(1992, 9, 2), (1914, month(6), 11));
        // Jan 1 falls in Pausa
        assert_eq!(to_saka_date(2024, 1, 1), (1945, month(10), 11));
        // Dec 31 of a leap year
        assert_eq!(to_saka_date(2024, 12, 31), (1946, month(10), 10));
    }

    #[test]
    fn test_julian_day_from_saka_scenario() {
        let jd = saka_to_julian_day(1922, Month::CHAITRA, 1);
        assert!((jd - julian_day_of(2000, 3, 21)).abs() < f64::EPSILON);

        let jd = saka_to_julian_day(1921, Month::CHAITRA, 1);
        assert!((jd - julian_day_of(1999, 3, 22)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_saka_to_julian_day_month_starts() {
        // Saka 1922 begins 2000-03-21 with a 31-day Chaitra
        let expected = [
            (1, (2000, 3, 21)),
            (2, (2000, 4, 21)),
            (3, (2000, 5, 22)),
            (6, (2000, 8, 23)),
            (7, (2000, 9, 23)),
            (8, (2000, 10, 23)),
            (10, (2000, 12, 22)),
            (11, (2001, 1, 21)),
            (12, (2001, 2, 20)),
        ];

        for (m, gregorian) in expected {
            let jd = saka_to_julian_day(1922, month(m), 1);
            assert_eq!(date_from_julian_day(jd), gregorian, "start of month {m}");
        }
    }

    #[test]
    fn test_nominal_year_differs_before_new_year() {
        assert_eq!(nominal_saka_year(2000), 1922);
        assert_eq!(saka_year_of(2000, 3, 21), 1922);
        assert_eq!(saka_year_of(2000, 3, 20), 1921);
        assert_eq!(saka_year_of(2000, 1, 1), 1921);
    }

    #[test]
    fn test_boundary_continuity() {
        // 2000 is a leap year, 1999 and 2001 are not
        for gregorian_year in [1999, 2000, 2001, 1900, 2100] {
            let first = saka_to_julian_day(nominal_saka_year(gregorian_year), Month::CHAITRA, 1);
            let (y, m, d) = date_from_julian_day(first - 1.0);
            let (saka_year, saka_month, saka_day) = to_saka_date(y, m, d);

            assert_eq!(saka_year, nominal_saka_year(gregorian_year) - 1);
            assert_eq!(saka_month, Month::PHALGUNA);
            assert_eq!(saka_day, 30);

            let (y, m, d) = date_from_julian_day(first);
            assert_eq!(
                to_saka_date(y, m, d),
                (nominal_saka_year(gregorian_year), Month::CHAITRA, 1)
            );
        }
    }

    #[test]
    fn test_month_and_day_in_range_for_every_gregorian_day() {
        for year in [1899, 1900, 1999, 2000, 2023, 2024] {
            for m in 1..=12 {
                for d in 1..=31 {
                    if !is_valid(year, m, d) {
                        continue;
                    }
                    let (saka_year, saka_month, saka_day) = to_saka_date(year, m, d);
                    let length = month_length(saka_year, saka_month.index());
                    assert!(
                        (1..=length).contains(&saka_day),
                        "{year}-{m:02}-{d:02} gave day {saka_day} of month {saka_month}"
                    );
                    assert_eq!(saka_month_and_day_of(year, m, d), (saka_month, saka_day));
                }
            }
        }
    }

    #[test]
    fn test_round_trip_every_day() {
        for year in -50..=9999 {
            for index in 0..12 {
                let saka_month = Month::from_index(MonthIndex::new(index));
                for day in 1..=month_length(year, saka_month.index()) {
                    let jd = saka_to_julian_day(year, saka_month, day);
                    let (gy, gm, gd) = date_from_julian_day(jd);
                    assert_eq!(
                        to_saka_date(gy, gm, gd),
                        (year, saka_month, day),
                        "Saka {year}-{saka_month}-{day} via {gy}-{gm}-{gd}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_consecutive_days_are_contiguous() {
        let start = saka_to_julian_day(1900, Month::CHAITRA, 1);
        let mut previous = to_saka_date(1978, 3, 22);
        assert_eq!(previous, (1900, Month::CHAITRA, 1));
        for offset in 1..(366 * 8) {
            let (y, m, d) = date_from_julian_day(start + f64::from(offset));
            let current = to_saka_date(y, m, d);
            let (prev_year, prev_month, prev_day) = previous;
            let expected = if prev_day < month_length(prev_year, prev_month.index()) {
                (prev_year, prev_month, prev_day + 1)
            } else if prev_month == Month::PHALGUNA {
                (prev_year + 1, Month::CHAITRA, 1)
            } else {
                (prev_year, Month::from_index(MonthIndex::new(prev_month.index().get() + 1)), 1)
            };
            assert_eq!(current, expected, "after {previous:?}");
            previous = current;
        }
    }

    #[test]
    fn test_extreme_gregorian_years_saturate() {
        // January 1 is Pausa 11 and December 31 is Pausa 10 in every year
        assert_eq!(to_saka_date(i32::MIN, 1, 1), (i32::MIN, month(10), 11));
        assert_eq!(to_saka_date(i32::MAX, 12, 31), (i32::MAX - ERA_START, month(10), 10));
        assert_eq!(saka_year_of(i32::MIN, 3, 1), i32::MIN);
        assert_eq!(saka_month_and_day_of(i32::MIN + 1, 1, 1), (month(10), 11));
    }
}
