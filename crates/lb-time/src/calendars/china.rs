//! Mainland China holiday calendar.
//!
//! Holidays are resolved in this order, first match wins:
//!
//! 1. the State Council schedule for the year, when one is tabulated;
//! 2. fixed solar dates: New Year's Day, Labour Day, Children's Day and the
//!    National Day week;
//! 3. fixed lunar dates in ordinary (non-leap) months: the first week of the
//!    year, Lantern, Dragon Boat, Mid-Autumn and Double Ninth;
//! 4. lunar new year's eve, whichever day the twelfth month ends on.
//!
//! Qingming follows a solar term rather than a fixed date, so it is only
//! reported for years with an official schedule.

use lb_core::errors::Result;
use lb_core::Year;

use crate::calendar::{Holiday, HolidayCalendar, HolidaySource};
use crate::date::Date;
use crate::festival::Festival::{self, *};
use crate::lunar::solar_to_lunar;

/// A contiguous official break, inclusive on both ends, within one year.
#[derive(Debug, Clone, Copy)]
struct OfficialBreak {
    festival: Festival,
    start: (u8, u8),
    end: (u8, u8),
}

const fn brk(festival: Festival, start: (u8, u8), end: (u8, u8)) -> OfficialBreak {
    OfficialBreak {
        festival,
        start,
        end,
    }
}

const OFFICIAL_2024: &[OfficialBreak] = &[
    brk(NewYearsDay, (1, 1), (1, 1)),
    brk(SpringFestival, (2, 10), (2, 17)),
    brk(QingmingFestival, (4, 4), (4, 6)),
    brk(LabourDay, (5, 1), (5, 5)),
    brk(DragonBoatFestival, (6, 8), (6, 10)),
    brk(MidAutumnFestival, (9, 15), (9, 17)),
    brk(NationalDay, (10, 1), (10, 7)),
];

const OFFICIAL_2025: &[OfficialBreak] = &[
    brk(NewYearsDay, (1, 1), (1, 1)),
    brk(SpringFestival, (1, 28), (2, 4)),
    brk(QingmingFestival, (4, 4), (4, 6)),
    brk(LabourDay, (5, 1), (5, 5)),
    brk(DragonBoatFestival, (5, 31), (6, 2)),
    brk(NationalDayAndMidAutumn, (10, 1), (10, 8)),
];

const OFFICIAL_2026: &[OfficialBreak] = &[
    brk(NewYearsDay, (1, 1), (1, 3)),
    brk(SpringFestival, (2, 15), (2, 23)),
    brk(QingmingFestival, (4, 4), (4, 6)),
    brk(LabourDay, (5, 1), (5, 5)),
    brk(DragonBoatFestival, (6, 19), (6, 21)),
    brk(MidAutumnFestival, (9, 25), (9, 27)),
    brk(NationalDay, (10, 1), (10, 7)),
];

/// Years with a published schedule.
const OFFICIAL: &[(Year, &[OfficialBreak])] = &[
    (2024, OFFICIAL_2024),
    (2025, OFFICIAL_2025),
    (2026, OFFICIAL_2026),
];

/// Mainland China public holidays and traditional festivals.
///
/// # Examples
///
/// ```
/// use lb_time::calendars::china::China;
/// use lb_time::{Date, HolidayCalendar};
///
/// let cal = China;
/// assert_eq!(cal.holiday_label(Date::from_ymd(2024, 2, 10).unwrap()), Some("春节"));
/// assert_eq!(cal.holiday_label(Date::from_ymd(2024, 3, 12).unwrap()), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct China;

impl China {
    /// Whether a State Council schedule is tabulated for `year`.
    pub fn has_official_schedule(year: Year) -> bool {
        official_schedule(year).is_some()
    }

    fn official(date: Date) -> Option<Festival> {
        let (y, m, d) = date.ymd();
        official_schedule(y)?
            .iter()
            .find(|b| (b.start..=b.end).contains(&(m, d)))
            .map(|b| b.festival)
    }

    fn solar_rule(date: Date) -> Option<Festival> {
        match (date.month(), date.day_of_month()) {
            (1, 1) => Some(NewYearsDay),
            (5, 1) => Some(LabourDay),
            (6, 1) => Some(ChildrensDay),
            (10, 1..=7) => Some(NationalDay),
            _ => None,
        }
    }

    fn lunar_rule(date: Date) -> Option<Festival> {
        let lunar = solar_to_lunar(date).ok()?;
        if lunar.is_leap_month {
            return None;
        }
        match (lunar.month, lunar.day) {
            (1, 1..=7) => Some(SpringFestival),
            (1, 15) => Some(LanternFestival),
            (5, 5) => Some(DragonBoatFestival),
            (8, 15) => Some(MidAutumnFestival),
            (9, 9) => Some(DoubleNinthFestival),
            _ => None,
        }
    }

    fn is_lunar_new_years_eve(date: Date) -> bool {
        date.succ()
            .and_then(solar_to_lunar)
            .map(|next| next.month == 1 && next.day == 1 && !next.is_leap_month)
            .unwrap_or(false)
    }
}

impl HolidayCalendar for China {
    fn name(&self) -> &str {
        "China"
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        let found = |festival, source| Some(Holiday { festival, source });

        if let Some(f) = Self::official(date) {
            return found(f, HolidaySource::Official);
        }
        log::trace!("{date}: no official holiday, trying generic rules");
        if let Some(f) = Self::solar_rule(date) {
            return found(f, HolidaySource::SolarRule);
        }
        if !crate::lunar::supported_solar_range().contains(&date) {
            log::debug!("{date} lies outside the lunar table, no lunar holidays");
            return None;
        }
        if let Some(f) = Self::lunar_rule(date) {
            return found(f, HolidaySource::LunarRule);
        }
        if Self::is_lunar_new_years_eve(date) {
            return found(SpringFestivalEve, HolidaySource::LunarNewYearsEve);
        }
        None
    }
}

fn official_schedule(year: Year) -> Option<&'static [OfficialBreak]> {
    OFFICIAL
        .iter()
        .find(|(y, _)| *y == year)
        .map(|(_, breaks)| *breaks)
}

/// Every holiday of a solar year in date order, as reported by [`China`].
pub fn holidays_in_year(year: Year) -> Result<Vec<(Date, Holiday)>> {
    let first = Date::from_ymd(year, 1, 1)?;
    let last = Date::from_ymd(year, 12, 31)?;
    Ok(China.holidays_between(first, last))
}
