//! Shared constructors for unit tests.

use crate::{Day, Month, SakaDate};

pub fn saka(year: i32, month: u8, day: u8) -> SakaDate {
    SakaDate::new(year, month, day).expect("invalid Saka date in test fixture")
}

pub fn month(value: u8) -> Month {
    Month::new(value).expect("invalid month in test fixture")
}

pub fn day(value: u8, year: i32, month_value: u8) -> Day {
    Day::new(value, year, month(month_value)).expect("invalid day in test fixture")
}
