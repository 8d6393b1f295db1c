//! Chinese lunar calendar: conversion between lunar and solar dates.
//!
//! The conversion is driven entirely by the packed table in [`table`], which
//! covers lunar years 1900–2100 (solar 1900-01-31 to 2101-01-28).  Month
//! lengths and leap months cannot be derived by rule, so every validity check
//! goes through the table.
//!
//! # Examples
//!
//! ```
//! use lb_time::lunar::{lunar_to_solar, solar_to_lunar, LunarDate};
//! use lb_time::Date;
//!
//! let new_year = lunar_to_solar(2024, 1, 1, false).unwrap();
//! assert_eq!(new_year, Date::from_ymd(2024, 2, 10).unwrap());
//!
//! let lunar = solar_to_lunar(new_year).unwrap();
//! assert_eq!(lunar, LunarDate::new(2024, 1, 1));
//! assert_eq!(lunar.label(), Some("正月".to_owned()));
//! ```

use lb_core::errors::{Error, Result};
use lb_core::Year;
use serde::{Deserialize, Serialize};

use crate::date::Date;

pub mod fmt;
pub mod table;

pub use table::{FIRST_YEAR, LAST_YEAR};

// ── LunarDate ─────────────────────────────────────────────────────────────────

/// A date in the Chinese lunar calendar.
///
/// The fields are plain data and are not validated on construction; a value
/// read back from storage may name a day that does not exist.  Use
/// [`LunarDate::validate`] or [`LunarDate::to_solar`] to check it against the
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunarDate {
    /// Lunar year (the solar year in which its first month begins).
    pub year: Year,
    /// Month number, 1–12.
    pub month: u8,
    /// Day of the month, 1–30.
    pub day: u8,
    /// Whether this is the leap (intercalary) month of that number.
    #[serde(default)]
    pub is_leap_month: bool,
}

impl LunarDate {
    /// A date in an ordinary (non-leap) month.
    pub fn new(year: Year, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month: false,
        }
    }

    /// A date in the leap month numbered `month`.
    pub fn leap(year: Year, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            is_leap_month: true,
        }
    }

    /// Convert to the solar date it falls on.
    pub fn to_solar(&self) -> Result<Date> {
        lunar_to_solar(self.year, self.month, self.day, self.is_leap_month)
    }

    /// Convert a solar date to its lunar equivalent.
    pub fn from_solar(date: Date) -> Result<Self> {
        solar_to_lunar(date)
    }

    /// Check that this date exists in the lunar table.
    pub fn validate(&self) -> Result<()> {
        self.to_solar().map(|_| ())
    }

    /// Month name such as `"正月"`, `"冬月"` or `"闰六月"`.
    pub fn month_name(&self) -> Option<String> {
        fmt::month(self.month, self.is_leap_month)
    }

    /// Day name such as `"初一"` or `"廿五"`.
    pub fn day_name(&self) -> Option<&'static str> {
        fmt::day(self.day)
    }

    /// Whether this is the first day of a lunar month.
    pub fn is_first_day_of_month(&self) -> bool {
        self.day == 1
    }

    /// Short calendar-cell label: the month name on the first day of a
    /// month, the day name otherwise.
    pub fn label(&self) -> Option<String> {
        if self.is_first_day_of_month() {
            self.month_name()
        } else {
            self.day_name().map(str::to_owned)
        }
    }

    /// Sexagenary name of the year, e.g. `"甲辰"`.
    pub fn sexagenary_year(&self) -> String {
        fmt::sexagenary_year(self.year)
    }

    /// Zodiac animal of the year, e.g. `"龙"`.
    pub fn zodiac(&self) -> &'static str {
        fmt::zodiac(self.year)
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.month_name(), self.day_name()) {
            (Some(m), Some(d)) => write!(f, "{}年{m}{d}", self.year),
            _ => write!(
                f,
                "{}-{}{:02}-{:02}",
                self.year,
                if self.is_leap_month { "L" } else { "" },
                self.month,
                self.day
            ),
        }
    }
}

// ── LunarYear ─────────────────────────────────────────────────────────────────

/// One lunar year of the table: its months, their lengths, and where the
/// year starts on the solar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarYear {
    year: Year,
    info: u32,
    start: i32,
}

/// One month of a [`LunarYear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarMonth {
    /// Month number, 1–12.
    pub number: u8,
    /// Whether this is the leap month.
    pub is_leap: bool,
    /// Number of days, 29 or 30.
    pub days: u8,
    /// Solar date of the month's first day.
    pub first_day: Date,
}

impl LunarYear {
    /// Look up a lunar year in the table.
    pub fn new(year: Year) -> Result<Self> {
        let idx = table_index(year)?;
        Ok(Self {
            year,
            info: table::LUNAR_INFO[idx],
            start: table::YEAR_START_SERIALS[idx],
        })
    }

    /// The lunar year that contains the given solar date.
    pub fn containing(date: Date) -> Result<Self> {
        let serial = date.serial();
        let starts = &table::YEAR_START_SERIALS;
        if serial < starts[0] {
            return Err(unsupported(FIRST_YEAR - 1));
        }
        // Index of the first year starting after `serial`, minus one.
        let idx = starts.partition_point(|&s| s <= serial) - 1;
        if idx >= table::LUNAR_INFO.len() {
            return Err(unsupported(LAST_YEAR + 1));
        }
        Self::new(FIRST_YEAR + idx as Year)
    }

    /// The year number.
    pub fn year(&self) -> Year {
        self.year
    }

    /// The leap month's number, if the year has one.
    pub fn leap_month(&self) -> Option<u8> {
        match table::leap_month(self.info) {
            0 => None,
            m => Some(m),
        }
    }

    /// Number of days in the given month, or `None` if the year has no such
    /// month.
    pub fn month_days(&self, month: u8, is_leap: bool) -> Option<u8> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if is_leap {
            (self.leap_month() == Some(month)).then(|| table::leap_month_days(self.info))
        } else {
            Some(table::month_days(self.info, month))
        }
    }

    /// Total number of days in the year.
    pub fn days(&self) -> u16 {
        table::year_days(self.info)
    }

    /// Solar date of lunar new year's day.
    pub fn first_day(&self) -> Result<Date> {
        Date::from_serial(self.start)
    }

    /// Months in calendar order, the leap month right after its namesake.
    pub fn months(&self) -> impl Iterator<Item = LunarMonth> + '_ {
        let leap = self.leap_month();
        let mut serial = self.start;
        (1..=12u8)
            .flat_map(move |m| {
                let ordinary = Some((m, false));
                let intercalary = (leap == Some(m)).then_some((m, true));
                ordinary.into_iter().chain(intercalary)
            })
            .filter_map(move |(number, is_leap)| {
                let days = self.month_days(number, is_leap)?;
                let first_day = Date::from_serial(serial).ok()?;
                serial += i32::from(days);
                Some(LunarMonth {
                    number,
                    is_leap,
                    days,
                    first_day,
                })
            })
    }

    /// Days from new year's day to the first day of the given month.
    fn month_offset(&self, month: u8, is_leap: bool) -> i32 {
        let leap = self.leap_month();
        let mut offset = 0;
        for m in 1..month {
            offset += i32::from(table::month_days(self.info, m));
            if leap == Some(m) {
                offset += i32::from(table::leap_month_days(self.info));
            }
        }
        if is_leap {
            offset += i32::from(table::month_days(self.info, month));
        }
        offset
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

/// Convert a lunar date to the solar date it falls on.
///
/// # Errors
/// * [`Error::UnsupportedYearRange`] if `year` is outside 1900–2100.
/// * [`Error::InvalidLunarDate`] if `month` is outside 1–12, if a leap month
///   is requested that the year does not have, or if `day` is past the end of
///   the month.
///
/// ```
/// use lb_time::lunar::lunar_to_solar;
/// use lb_time::Date;
///
/// assert_eq!(lunar_to_solar(1990, 5, 5, false).unwrap(), Date::from_ymd(1990, 5, 28).unwrap());
/// assert!(lunar_to_solar(2024, 13, 1, false).is_err());
/// ```
pub fn lunar_to_solar(year: Year, month: u8, day: u8, is_leap_month: bool) -> Result<Date> {
    let lunar_year = LunarYear::new(year)?;
    let invalid = || Error::InvalidLunarDate {
        year,
        month,
        day,
        leap: is_leap_month,
    };
    let days = lunar_year
        .month_days(month, is_leap_month)
        .ok_or_else(invalid)?;
    if day == 0 || day > days {
        return Err(invalid());
    }
    let serial = lunar_year.start + lunar_year.month_offset(month, is_leap_month) + i32::from(day) - 1;
    Date::from_serial(serial)
}

/// Convert a solar date to its lunar equivalent.
///
/// # Errors
/// [`Error::UnsupportedYearRange`] if the date lies outside
/// [`supported_solar_range`].
pub fn solar_to_lunar(date: Date) -> Result<LunarDate> {
    let lunar_year = LunarYear::containing(date)?;
    let month = lunar_year
        .months()
        .take_while(|m| m.first_day <= date)
        .last()
        .ok_or_else(|| unsupported(lunar_year.year))?;
    Ok(LunarDate {
        year: lunar_year.year,
        month: month.number,
        day: (date - month.first_day + 1) as u8,
        is_leap_month: month.is_leap,
    })
}

/// First and last solar dates covered by the lunar table.
pub fn supported_solar_range() -> std::ops::RangeInclusive<Date> {
    let first = table::YEAR_START_SERIALS[0];
    let last = table::YEAR_START_SERIALS[table::LUNAR_INFO.len()] - 1;
    match (Date::from_serial(first), Date::from_serial(last)) {
        (Ok(a), Ok(b)) => a..=b,
        _ => unreachable!("table bounds lie inside the Date range"),
    }
}

fn table_index(year: Year) -> Result<usize> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(unsupported(year));
    }
    Ok((year - FIRST_YEAR) as usize)
}

fn unsupported(year: Year) -> Error {
    Error::UnsupportedYearRange {
        year,
        min: FIRST_YEAR,
        max: LAST_YEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_points() {
        let data = [
            ((2024, 1, 1), (2024, 2, 10)),
            ((1990, 5, 5), (1990, 5, 28)),
            ((2000, 8, 15), (2000, 9, 12)),
            ((2025, 1, 1), (2025, 1, 29)),
            ((1900, 1, 1), (1900, 1, 31)),
        ];
        for ((ly, lm, ld), (y, m, d)) in data {
            assert_eq!(lunar_to_solar(ly, lm, ld, false).unwrap(), date(y, m, d));
            assert_eq!(solar_to_lunar(date(y, m, d)).unwrap(), LunarDate::new(ly, lm, ld));
        }
    }

    #[test]
    fn leap_month_2017() {
        // 2017 has a leap sixth month starting 2017-07-23.
        let y = LunarYear::new(2017).unwrap();
        assert_eq!(y.leap_month(), Some(6));
        assert_eq!(y.months().count(), 13);
        assert_eq!(lunar_to_solar(2017, 6, 1, true).unwrap(), date(2017, 7, 23));
        assert_eq!(solar_to_lunar(date(2017, 7, 22)).unwrap(), LunarDate::new(2017, 6, 29));
        assert_eq!(solar_to_lunar(date(2017, 7, 23)).unwrap(), LunarDate::leap(2017, 6, 1));
        assert_eq!(solar_to_lunar(date(2017, 8, 22)).unwrap(), LunarDate::new(2017, 7, 1));
    }

    #[test]
    fn rejects_nonexistent_dates() {
        assert!(matches!(
            lunar_to_solar(2024, 13, 1, false),
            Err(Error::InvalidLunarDate { month: 13, .. })
        ));
        assert!(matches!(
            lunar_to_solar(2024, 0, 1, false),
            Err(Error::InvalidLunarDate { .. })
        ));
        // 2024 has no leap month.
        assert!(matches!(
            lunar_to_solar(2024, 6, 1, true),
            Err(Error::InvalidLunarDate { leap: true, .. })
        ));
        assert!(matches!(
            lunar_to_solar(2024, 1, 31, false),
            Err(Error::InvalidLunarDate { .. })
        ));
        assert!(matches!(
            lunar_to_solar(2024, 1, 0, false),
            Err(Error::InvalidLunarDate { .. })
        ));
    }

    #[test]
    fn rejects_years_outside_table() {
        assert!(matches!(
            lunar_to_solar(1899, 1, 1, false),
            Err(Error::UnsupportedYearRange { year: 1899, .. })
        ));
        assert!(matches!(
            lunar_to_solar(2101, 1, 1, false),
            Err(Error::UnsupportedYearRange { year: 2101, .. })
        ));
        assert!(matches!(
            solar_to_lunar(date(1900, 1, 30)),
            Err(Error::UnsupportedYearRange { year: 1899, .. })
        ));
        assert!(matches!(
            solar_to_lunar(date(2101, 1, 29)),
            Err(Error::UnsupportedYearRange { year: 2101, .. })
        ));
    }

    #[test]
    fn supported_range_bounds() {
        let range = supported_solar_range();
        assert_eq!(*range.start(), date(1900, 1, 31));
        assert_eq!(*range.end(), date(2101, 1, 28));
        assert_eq!(solar_to_lunar(*range.end()).unwrap().year, 2100);
    }

    #[test]
    fn year_boundary_belongs_to_previous_lunar_year() {
        // The day before lunar new year 2024 is the last day of lunar 2023.
        let eve = solar_to_lunar(date(2024, 2, 9)).unwrap();
        assert_eq!((eve.year, eve.month, eve.day), (2023, 12, 30));
        let jan = solar_to_lunar(date(2024, 1, 15)).unwrap();
        assert_eq!((jan.year, jan.month), (2023, 12));
    }

    #[test]
    fn labels() {
        let first = solar_to_lunar(date(2024, 2, 10)).unwrap();
        assert_eq!(first.month_name().as_deref(), Some("正月"));
        assert_eq!(first.day_name(), Some("初一"));
        assert!(first.is_first_day_of_month());
        assert_eq!(first.label().as_deref(), Some("正月"));

        let mid_autumn = solar_to_lunar(date(2024, 9, 17)).unwrap();
        assert_eq!(mid_autumn.label().as_deref(), Some("十五"));
        assert_eq!(mid_autumn.to_string(), "2024年八月十五");
        assert_eq!(mid_autumn.sexagenary_year(), "甲辰");
        assert_eq!(mid_autumn.zodiac(), "龙");
    }

    #[test]
    fn months_cover_the_whole_year() {
        for year in [1900, 1984, 2017, 2023, 2100] {
            let y = LunarYear::new(year).unwrap();
            let total: u16 = y.months().map(|m| u16::from(m.days)).sum();
            assert_eq!(total, y.days(), "lunar year {year}");
            let next_start = y.first_day().unwrap().serial() + i32::from(y.days());
            assert_eq!(next_start, table::YEAR_START_SERIALS[(year - FIRST_YEAR) as usize + 1]);
        }
    }

    #[test]
    fn serde_shape() {
        let d = LunarDate::leap(2023, 2, 10);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"year":2023,"month":2,"day":10,"isLeapMonth":true}"#);
        let plain: LunarDate = serde_json::from_str(r#"{"year":1990,"month":5,"day":5}"#).unwrap();
        assert_eq!(plain, LunarDate::new(1990, 5, 5));
    }
}
