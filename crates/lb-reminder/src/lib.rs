//! # lb-reminder
//!
//! Birthday records, next-occurrence search, the upcoming-birthdays list and
//! month grids.
//!
//! Every query takes the records and an explicit reference date; nothing
//! reads the clock or keeps state between calls.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// 42-cell month grids.
pub mod grid;

/// Solar occurrences of lunar anniversaries.
pub mod occurrence;

/// `BirthdayRecord`.
pub mod record;

/// The upcoming-birthdays list.
pub mod reminder;

pub use grid::{
    build_month_grid, build_month_grid_with, CalendarCell, MonthGrid, GRID_CELLS, GRID_YEARS,
};
pub use occurrence::{next_solar_occurrence, occurrence_in_lunar_year};
pub use record::BirthdayRecord;
pub use reminder::{reminder_list, UpcomingOccurrence};
