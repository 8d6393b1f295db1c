//! # lunar-birthday
//!
//! Birthday reminders for dates kept on the Chinese lunar calendar.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `lb-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use lunar_birthday::prelude::*;
//!
//! let records = vec![
//!     BirthdayRecord::new("1", "Grandma", "grandmother", LunarDate::new(1948, 8, 15)).unwrap(),
//! ];
//! let today = Date::from_ymd(2024, 9, 10).unwrap();
//!
//! let upcoming = reminders_with(&Settings::default(), &records, today).unwrap();
//! assert_eq!(upcoming[0].solar_date, Date::from_ymd(2024, 9, 17).unwrap());
//! assert_eq!(upcoming[0].age(), 76);
//!
//! let grid = month_grid_with(&Settings::default(), 2024, 9, &records).unwrap();
//! assert_eq!(grid.cells().len(), 42);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, settings and parsing helpers.
pub use lb_core as core;

/// Solar dates, lunar conversion and holiday calendars.
pub use lb_time as time;

/// Birthday records, reminders and month grids.
pub use lb_reminder as reminder;

pub use lb_core::{Error, Result, Settings};
pub use lb_reminder::{
    build_month_grid, next_solar_occurrence, reminder_list, BirthdayRecord, CalendarCell,
    MonthGrid, UpcomingOccurrence,
};
pub use lb_time::{holiday_label, lunar_to_solar, solar_to_lunar, Date, LunarDate};

/// The reminder list for `reference`, looking as far ahead as
/// `settings.reminder_horizon_days`.
///
/// # Errors
/// [`Error::InvalidArgument`] if the settings do not validate.
pub fn reminders_with<'a>(
    settings: &Settings,
    records: &'a [BirthdayRecord],
    reference: Date,
) -> Result<Vec<UpcomingOccurrence<'a>>> {
    settings.validate()?;
    let list = reminder_list(records, reference, settings.reminder_horizon_days);
    log::debug!(
        "{} of {} birthdays within {} days of {reference}",
        list.len(),
        records.len(),
        settings.reminder_horizon_days
    );
    Ok(list)
}

/// The month grid for `year`/`month`, with holidays if
/// `settings.show_holidays` is set.
///
/// # Errors
/// [`Error::InvalidArgument`] if the settings do not validate, or a date
/// error if the month lies outside the supported range.
pub fn month_grid_with<'a>(
    settings: &Settings,
    year: lb_core::Year,
    month: u8,
    records: &'a [BirthdayRecord],
) -> Result<MonthGrid<'a>> {
    settings.validate()?;
    build_month_grid(year, month, records, settings.show_holidays)
}

/// Everything an application usually needs, for glob import.
pub mod prelude {
    pub use crate::{month_grid_with, reminders_with};
    pub use lb_core::{Error, Result, Settings, Year};
    pub use lb_reminder::{
        build_month_grid, next_solar_occurrence, reminder_list, BirthdayRecord, CalendarCell,
        MonthGrid, UpcomingOccurrence,
    };
    pub use lb_time::{
        holiday_label, lunar_to_solar, solar_to_lunar, Date, Festival, HolidayCalendar,
        LunarDate,
    };
}
