/// Gregorian year in which Saka year 0 begins (78 CE)
pub const ERA_START: i32 = 78;

/// Zero-based Gregorian day-of-year on which the Saka year begins
/// (March 22, or March 21 in a Gregorian leap year)
pub const YEAR_START: i32 = 80;

/// Earliest supported Saka year (inclusive)
/// The first day of this year is the first whole Saka year after Julian Day 0.
pub const MIN_YEAR: i32 = -4790;

/// Latest supported Saka year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Number of months in every Saka year
pub const MONTHS_IN_YEAR: u8 = 12;

/// Maximum valid month (Phalguna)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Length of Chaitra in a year overlapping a Gregorian leap year, and of Vaisakha through Bhadra
pub const LONG_MONTH_DAYS: u8 = 31;
/// Length of Chaitra in a common year, and of Asvina through Phalguna
pub const SHORT_MONTH_DAYS: u8 = 30;

/// Number of 31-day months following Chaitra (Vaisakha through Bhadra)
pub(crate) const LONG_MONTHS_AFTER_CHAITRA: i32 = 5;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Transliterated month names, Chaitra first
pub const MONTH_NAMES: [&str; 12] = [
    "Chaitra",
    "Vaisakha",
    "Jyaistha",
    "Asadha",
    "Sravana",
    "Bhadra",
    "Asvina",
    "Kartika",
    "Agrahayana",
    "Pausa",
    "Magha",
    "Phalguna",
];

/// Transliterated weekday names, Monday (Somvar) first to match ISO numbering
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Somvar",
    "Mangalvar",
    "Budhavar",
    "Brihaspativar",
    "Shukravar",
    "Shanivar",
    "Ravivar",
];

/// Date component separator (`YYYY-MM-DD`)
pub const DATE_SEPARATOR: char = '-';
