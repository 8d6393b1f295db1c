//! # lb-time
//!
//! Solar dates, lunar/solar conversion, and holiday calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `HolidayCalendar` trait and the empty calendar.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// `Date` type.
pub mod date;

/// `Festival`: named holidays and festivals.
pub mod festival;

/// Chinese lunar calendar and its conversion table.
pub mod lunar;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Holiday, HolidayCalendar, HolidaySource, NoHolidays};
pub use calendars::China;
pub use date::Date;
pub use festival::Festival;
pub use lunar::{lunar_to_solar, solar_to_lunar, LunarDate, LunarYear};
pub use weekday::Weekday;

/// Holiday label of a solar date under the mainland China calendar.
///
/// ```
/// use lb_time::{holiday_label, Date};
///
/// assert_eq!(holiday_label(Date::from_ymd(2024, 10, 1).unwrap()), Some("国庆节"));
/// ```
pub fn holiday_label(date: Date) -> Option<&'static str> {
    China.holiday_label(date)
}
