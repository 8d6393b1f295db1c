//! `Date`: a solar (Gregorian) calendar date.
//!
//! Dates are stored as a serial number of days since an epoch, which makes
//! day differences plain integer subtraction: there is no time of day, no
//! time zone and therefore no daylight-saving discontinuity to miscount.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900.
//! * The valid date range is 1899-12-01 to 2200-01-31.  The two edge months
//!   only exist so that month grids of 1900 and 2199 can show their padding
//!   weeks.  The lunar table covers part of the range; see [`crate::lunar`].

use std::str::FromStr;

use lb_core::errors::{Error, Result};
use lb_core::utilities::data_parsers::parse_iso_date;
use lb_core::{DayCount, Year};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::weekday::Weekday;

/// A Gregorian calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// First year a [`Date`] can hold.  Only its December is in range.
pub const MIN_YEAR: Year = 1899;

/// Last year a [`Date`] can hold.  Only its January is in range.
pub const MAX_YEAR: Year = 2200;

impl Date {
    /// Minimum valid date: December 1, 1899.
    pub const MIN: Date = Date(-30);

    /// Maximum valid date: January 31, 2200.
    pub const MAX: Date = Date(109_604);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Self::from_serial(serial_from_ymd(year, month, day))
    }

    /// The first day of the given month.
    pub fn first_of_month(year: Year, month: u8) -> Result<Self> {
        Self::from_ymd(year, month, 1)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        self.ymd().0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, _, _) = self.ymd();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Jan 1, 1900 (serial 1) is a Monday.
        Weekday::from_days_since_monday(self.0 - 1)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: DayCount) -> Result<Self> {
        Self::from_serial(self.0 + n)
    }

    /// The following day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The preceding day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Advance by `n` months, clamping the day to the end of the target
    /// month (Jan 31 + 1 month = Feb 28/29).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (y, m, d) = self.ymd();
        let (new_y, new_m) = shift_month(y, m, n);
        if !(MIN_YEAR..=MAX_YEAR).contains(&new_y) {
            return Err(Error::Date(format!("year {new_y} out of range")));
        }
        let new_d = d.min(days_in_month(new_y, new_m));
        Self::from_serial(serial_from_ymd(new_y, new_m, new_d))
    }

    /// Return the number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: Date) -> DayCount {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = self.ymd();
        Date(serial_from_ymd(y, m, 1))
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = DayCount;
    fn sub(self, rhs: Date) -> DayCount {
        self.0 - rhs.0
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)?;
        Date::from_ymd(Year::from(y), m, d)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "chrono")]
impl From<Date> for chrono::NaiveDate {
    fn from(date: Date) -> Self {
        let (y, m, d) = date.ymd();
        match chrono::NaiveDate::from_ymd_opt(y, u32::from(m), u32::from(d)) {
            Some(n) => n,
            None => unreachable!("every Date is a valid Gregorian date"),
        }
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(value.year(), value.month() as u8, value.day() as u8)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Shift `(year, month)` by `n` months.
pub(crate) fn shift_month(year: Year, month: u8, n: i32) -> (Year, u8) {
    let zero_based = year * 12 + i32::from(month) - 1 + n;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u8)
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1900-01-01,
/// so December 1899 maps to `-30..=0`.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year;
    // Days in years 1900..year
    let mut serial = (y - 1900) * 365;
    // Leap years in [1900, year)
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += i32::from(MONTH_OFFSET[month as usize - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day)
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    let mut y = (serial - 1).div_euclid(366) + 1900;
    while serial >= serial_from_ymd(y + 1, 1, 1) {
        y += 1;
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_epoch() {
        assert_eq!(date(1900, 1, 1).serial(), 1);
        assert_eq!(date(1899, 12, 31).serial(), 0);
        assert_eq!(date(1899, 12, 1), Date::MIN);
        assert_eq!(date(2199, 12, 31).serial(), 109_573);
        assert_eq!(date(2200, 1, 31), Date::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1899, 12, 1),
            (1899, 12, 31),
            (1900, 1, 1),
            (1900, 12, 31),
            (2000, 2, 29),
            (2100, 2, 28),
            (2024, 2, 10),
            (2199, 12, 31),
        ];
        for (y, m, d) in dates {
            assert_eq!(date(y, m, d).ymd(), (y, m, d), "{y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(Date::from_ymd(1899, 11, 30).is_err());
        assert!(Date::from_ymd(1898, 12, 31).is_err());
        assert!(Date::from_ymd(2200, 2, 1).is_err());
        assert!(Date::from_ymd(2201, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2100, 2, 29).is_err());
        assert!(Date::from_ymd(2024, 13, 1).is_err());
        assert!(Date::from_ymd(2024, 4, 31).is_err());
        assert!(Date::from_ymd(2024, 4, 0).is_err());
        assert!(Date::from_serial(-31).is_err());
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
        assert_eq!(date(2024, 9, 1).weekday(), Weekday::Sunday);
        assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(1899, 12, 31).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_add_months_clamps() {
        assert_eq!(date(2023, 1, 31).add_months(1).unwrap(), date(2023, 2, 28));
        assert_eq!(date(2024, 1, 31).add_months(1).unwrap(), date(2024, 2, 29));
        assert_eq!(date(2024, 1, 15).add_months(-1).unwrap(), date(2023, 12, 15));
        assert_eq!(date(2024, 12, 1).add_months(13).unwrap(), date(2026, 1, 1));
        assert_eq!(date(1900, 1, 31).add_months(-1).unwrap(), date(1899, 12, 31));
        assert!(date(1899, 12, 1).add_months(-1).is_err());
    }

    #[test]
    fn test_month_boundaries() {
        let d = date(2024, 2, 15);
        assert_eq!(d.end_of_month(), date(2024, 2, 29));
        assert_eq!(d.start_of_month(), date(2024, 2, 1));
        assert_eq!(d.day_of_year(), 46);
        assert_eq!(date(2024, 12, 31).day_of_year(), 366);
    }

    #[test]
    fn test_arithmetic() {
        let d = date(2023, 1, 1);
        assert_eq!(d.add_days(31).unwrap(), date(2023, 2, 1));
        assert_eq!(date(2023, 2, 1) - d, 31);
        assert_eq!(d.days_until(date(2022, 12, 31)), -1);
        assert_eq!(d.pred().unwrap(), date(2022, 12, 31));
        assert!(Date::MAX.succ().is_err());
    }

    #[test]
    fn test_display_and_parse() {
        let d = date(2024, 2, 10);
        assert_eq!(d.to_string(), "2024-02-10");
        assert_eq!(format!("{d:?}"), "Date(2024-02-10)");
        assert_eq!("2024-02-10".parse::<Date>().unwrap(), d);
        assert!("2023-02-29".parse::<Date>().is_err());
    }

    #[test]
    fn test_serde_as_iso_string() {
        let d = date(1990, 5, 28);
        assert_eq!(serde_json::to_string(&d).unwrap(), r#""1990-05-28""#);
        assert_eq!(serde_json::from_str::<Date>(r#""1990-05-28""#).unwrap(), d);
        assert!(serde_json::from_str::<Date>(r#""1990-13-28""#).is_err());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month(2024, 1, -1), (2023, 12));
        assert_eq!(shift_month(2024, 12, 1), (2025, 1));
        assert_eq!(shift_month(2024, 6, 0), (2024, 6));
        assert_eq!(shift_month(2024, 3, -27), (2021, 12));
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_conversion() {
        let d = date(2024, 2, 29);
        let n = chrono::NaiveDate::from(d);
        assert_eq!(n, chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(Date::try_from(n).unwrap(), d);
        let too_late = chrono::NaiveDate::from_ymd_opt(2300, 1, 1).unwrap();
        assert!(Date::try_from(too_late).is_err());
    }
}
