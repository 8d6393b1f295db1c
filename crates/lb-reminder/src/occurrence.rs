//! Solar occurrences of a recurring lunar anniversary.
//!
//! An anniversary is a lunar `(month, day)` pair.  It always recurs in the
//! ordinary month of that number, never in a leap month, and a 30th-day
//! anniversary falls on the 29th in years where that month is short.

use lb_core::errors::{Error, Result};
use lb_core::Year;
use lb_time::{Date, LunarYear};

/// Solar date of the anniversary `(month, day)` within lunar year
/// `lunar_year`.
///
/// # Errors
/// * [`Error::InvalidLunarDate`] if `month` is outside 1–12 or `day` outside
///   1–30.
/// * [`Error::UnsupportedYearRange`] if the lunar year is not tabulated.
///
/// ```
/// use lb_reminder::occurrence::occurrence_in_lunar_year;
/// use lb_time::Date;
///
/// // Lunar 2024's twelfth month has 29 days.
/// assert_eq!(
///     occurrence_in_lunar_year(12, 30, 2024).unwrap(),
///     Date::from_ymd(2025, 1, 28).unwrap(),
/// );
/// ```
pub fn occurrence_in_lunar_year(month: u8, day: u8, lunar_year: Year) -> Result<Date> {
    let invalid = || Error::InvalidLunarDate {
        year: lunar_year,
        month,
        day,
        leap: false,
    };
    if !(1..=30).contains(&day) {
        return Err(invalid());
    }
    let year = LunarYear::new(lunar_year)?;
    let month_days = year.month_days(month, false).ok_or_else(invalid)?;
    lb_time::lunar_to_solar(lunar_year, month, day.min(month_days), false)
}

/// Nearest solar date on or after `reference` on which the anniversary
/// `(month, day)` falls.
///
/// The lunar years `reference.year() - 1`, `reference.year()` and
/// `reference.year() + 1` are searched; the previous lunar year matters
/// because its last months overlap the start of the solar year.  The earliest
/// candidate not before `reference` wins.  If none qualifies (only possible
/// at the end of the lunar table) the same-year candidate is returned, or
/// failing that the latest one that converted.
///
/// # Errors
/// The conversion error of the same-year candidate when no candidate
/// converts at all.
pub fn next_solar_occurrence(month: u8, day: u8, reference: Date) -> Result<Date> {
    let ref_year = reference.year();
    let mut candidates: Vec<(Year, Date)> = Vec::with_capacity(3);
    let mut same_year_error = None;

    for lunar_year in ref_year - 1..=ref_year + 1 {
        match occurrence_in_lunar_year(month, day, lunar_year) {
            Ok(candidate) => {
                log::trace!("lunar {month}/{day} in {lunar_year}: {candidate}");
                candidates.push((lunar_year, candidate));
            }
            Err(e) => {
                log::trace!("lunar {month}/{day} in {lunar_year}: {e}");
                if lunar_year == ref_year || same_year_error.is_none() {
                    same_year_error = Some(e);
                }
            }
        }
    }

    let upcoming = candidates
        .iter()
        .map(|&(_, d)| d)
        .filter(|&d| d >= reference)
        .min();
    let same_year = candidates
        .iter()
        .find(|&&(y, _)| y == ref_year)
        .map(|&(_, d)| d);
    let latest = candidates.iter().map(|&(_, d)| d).max();

    match upcoming.or(same_year).or(latest) {
        Some(d) => Ok(d),
        None => Err(same_year_error.unwrap_or(Error::InvalidLunarDate {
            year: ref_year,
            month,
            day,
            leap: false,
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn occurrence_uses_the_ordinary_month() {
        // 2017 has a leap sixth month; anniversaries stay in the ordinary one.
        assert_eq!(occurrence_in_lunar_year(6, 1, 2017).unwrap(), date(2017, 6, 24));
    }

    #[test]
    fn day_thirty_clamps() {
        // Lunar 2025's twelfth month has 29 days.
        assert_eq!(occurrence_in_lunar_year(12, 30, 2025).unwrap(), date(2026, 2, 16));
        assert_eq!(occurrence_in_lunar_year(12, 29, 2025).unwrap(), date(2026, 2, 16));
    }

    #[test]
    fn rejects_bad_anniversaries() {
        assert!(matches!(
            occurrence_in_lunar_year(13, 1, 2024),
            Err(Error::InvalidLunarDate { .. })
        ));
        assert!(matches!(
            occurrence_in_lunar_year(1, 31, 2024),
            Err(Error::InvalidLunarDate { .. })
        ));
        assert!(matches!(
            occurrence_in_lunar_year(1, 0, 2024),
            Err(Error::InvalidLunarDate { .. })
        ));
        assert!(matches!(
            next_solar_occurrence(0, 1, date(2024, 6, 1)),
            Err(Error::InvalidLunarDate { .. })
        ));
    }

    #[test]
    fn next_occurrence_basic() {
        // Lunar 6/10 was 2024-07-15; after that the next is 2025-07-04.
        assert_eq!(next_solar_occurrence(6, 10, date(2024, 7, 1)).unwrap(), date(2024, 7, 15));
        assert_eq!(next_solar_occurrence(6, 10, date(2024, 7, 15)).unwrap(), date(2024, 7, 15));
        assert_eq!(next_solar_occurrence(6, 10, date(2024, 7, 16)).unwrap(), date(2025, 7, 4));
    }

    #[test]
    fn previous_lunar_year_can_be_next() {
        // 2025-01-10 is in lunar 2024; lunar 12/15 of 2024 is 2025-01-14.
        assert_eq!(next_solar_occurrence(12, 15, date(2025, 1, 10)).unwrap(), date(2025, 1, 14));
    }

    #[test]
    fn end_of_table_falls_back() {
        // Lunar 2101 is not tabulated, so the same-year occurrence stands in.
        let got = next_solar_occurrence(1, 1, date(2100, 12, 31)).unwrap();
        assert_eq!(got, date(2100, 2, 9));
        assert!(next_solar_occurrence(1, 1, date(2150, 1, 1)).is_err());
    }
}
