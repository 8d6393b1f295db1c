//! Month grids for a wall-calendar view.
//!
//! A grid always has six Sunday-first weeks.  It opens with the tail of the
//! previous month, so that the first of the month lands under its weekday,
//! and is padded at the end with the head of the following month.  Only
//! cells of the displayed month are annotated.

use std::collections::HashMap;

use lb_core::errors::{Error, Result};
use lb_core::Year;
use lb_time::date::{MAX_YEAR, MIN_YEAR};
use lb_time::{
    solar_to_lunar, China, Date, Holiday, HolidayCalendar, LunarDate, NoHolidays, Weekday,
};
use serde::Serialize;

use crate::occurrence::occurrence_in_lunar_year;
use crate::record::BirthdayRecord;

/// Number of cells in a grid: six weeks of seven days.
pub const GRID_CELLS: usize = 42;

/// Solar years a grid can be built for.  The date range reaches one month
/// further on each side for the padding.
pub const GRID_YEARS: std::ops::RangeInclusive<Year> = MIN_YEAR + 1..=MAX_YEAR - 1;

/// One day of a [`MonthGrid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell<'a> {
    /// The solar date shown.
    pub solar_date: Date,
    /// `false` for the padding days of the neighbouring months.
    pub belongs_to_displayed_month: bool,
    /// The lunar date, when annotated and inside the lunar table.
    pub lunar_date: Option<LunarDate>,
    /// Month name on the first lunar day, day name otherwise.
    pub lunar_label: Option<String>,
    /// Holiday on this day, if holidays are shown.
    pub holiday: Option<Holiday>,
    /// Birthdays falling on this day, in input order.
    pub occurrences_on_this_day: Vec<&'a BirthdayRecord>,
}

impl<'a> CalendarCell<'a> {
    fn padding(solar_date: Date) -> Self {
        Self {
            solar_date,
            belongs_to_displayed_month: false,
            lunar_date: None,
            lunar_label: None,
            holiday: None,
            occurrences_on_this_day: Vec::new(),
        }
    }

    /// Holiday label, e.g. `"中秋节"`.
    pub fn holiday_label(&self) -> Option<&'static str> {
        self.holiday.map(|h| h.label())
    }

    /// Whether any birthday falls on this day.
    pub fn has_birthdays(&self) -> bool {
        !self.occurrences_on_this_day.is_empty()
    }

    /// Age `record` turns on this day: the solar year minus the lunar birth
    /// year, as in the reminder list.
    pub fn age_on(&self, record: &BirthdayRecord) -> Year {
        self.solar_date.year() - record.lunar_birth.year
    }

    /// Birthdays on this day, each with the age reached.
    pub fn birthdays_with_age(&self) -> impl Iterator<Item = (&'a BirthdayRecord, Year)> + '_ {
        self.occurrences_on_this_day
            .iter()
            .map(move |&r| (r, self.age_on(r)))
    }
}

/// A 42-cell month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid<'a> {
    year: Year,
    month: u8,
    cells: Vec<CalendarCell<'a>>,
}

impl<'a> MonthGrid<'a> {
    /// Displayed solar year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Displayed solar month, 1–12.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// All cells, Sunday-first, row by row.
    pub fn cells(&self) -> &[CalendarCell<'a>] {
        &self.cells
    }

    /// Column headers of a Sunday-first week: `"日"`, `"一"`, …, `"六"`.
    pub fn weekday_headers() -> [&'static str; 7] {
        std::array::from_fn(|col| Weekday::from_days_since_monday(col as i32 - 1).chinese_name())
    }

    /// The six rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell<'a>]> {
        self.cells.chunks(7)
    }

    /// Cells of the displayed month only.
    pub fn days_in_month(&self) -> impl Iterator<Item = &CalendarCell<'a>> {
        self.cells.iter().filter(|c| c.belongs_to_displayed_month)
    }

    /// The cell showing `date`, if it is on the grid.
    pub fn cell(&self, date: Date) -> Option<&CalendarCell<'a>> {
        let first = self.cells.first()?.solar_date;
        let idx = usize::try_from(first.days_until(date)).ok()?;
        self.cells.get(idx)
    }
}

/// Build the grid for `year`/`month` with the mainland China holidays, or
/// with none when `holidays_enabled` is `false`.
///
/// # Errors
/// [`lb_core::Error::Date`] if `month` is not in `1..=12` or `year` is
/// outside [`GRID_YEARS`].  Individual records never fail the grid.
pub fn build_month_grid(
    year: Year,
    month: u8,
    records: &[BirthdayRecord],
    holidays_enabled: bool,
) -> Result<MonthGrid<'_>> {
    if holidays_enabled {
        build_month_grid_with(year, month, records, &China)
    } else {
        build_month_grid_with(year, month, records, &NoHolidays)
    }
}

/// Build the grid for `year`/`month`, taking holidays from `calendar`.
pub fn build_month_grid_with<'a>(
    year: Year,
    month: u8,
    records: &'a [BirthdayRecord],
    calendar: &dyn HolidayCalendar,
) -> Result<MonthGrid<'a>> {
    if !GRID_YEARS.contains(&year) {
        return Err(Error::Date(format!(
            "no month grid for year {year}, expected [{}, {}]",
            GRID_YEARS.start(),
            GRID_YEARS.end()
        )));
    }
    let first = Date::first_of_month(year, month)?;
    let lead = i32::from(first.weekday().sunday_based_index());
    let start = first.add_days(-lead)?;

    let mut birthdays = birthdays_in_month(year, month, records);
    let mut cells = Vec::with_capacity(GRID_CELLS);
    for offset in 0..GRID_CELLS as i32 {
        let solar_date = start.add_days(offset)?;
        if solar_date.year() != year || solar_date.month() != month {
            cells.push(CalendarCell::padding(solar_date));
            continue;
        }
        let lunar_date = solar_to_lunar(solar_date).ok();
        cells.push(CalendarCell {
            solar_date,
            belongs_to_displayed_month: true,
            lunar_date,
            lunar_label: lunar_date.and_then(|l| l.label()),
            holiday: calendar.holiday(solar_date),
            occurrences_on_this_day: birthdays.remove(&solar_date).unwrap_or_default(),
        });
    }

    Ok(MonthGrid { year, month, cells })
}

/// Birthdays of the solar month `year`/`month`, keyed by date.
///
/// The lunar years `year - 1` and `year` together cover every day of any
/// solar month.  A record keeps only its earliest date in the month.
fn birthdays_in_month(
    year: Year,
    month: u8,
    records: &[BirthdayRecord],
) -> HashMap<Date, Vec<&BirthdayRecord>> {
    let mut by_date: HashMap<Date, Vec<&BirthdayRecord>> = HashMap::new();
    for record in records {
        let (m, d) = record.anniversary();
        let mut earliest: Option<Date> = None;
        let mut converted = false;
        let mut error = None;
        for lunar_year in [year - 1, year] {
            match occurrence_in_lunar_year(m, d, lunar_year) {
                Ok(date) => {
                    converted = true;
                    if date.year() == year && date.month() == month {
                        earliest = Some(earliest.map_or(date, |e| e.min(date)));
                    }
                }
                Err(e) => error = Some(e),
            }
        }
        match (earliest, error) {
            (Some(date), _) => by_date.entry(date).or_default().push(record),
            (None, Some(e)) if !converted => {
                log::warn!("skipping birthday record {:?} in {year}-{month:02}: {e}", record.id);
            }
            _ => {}
        }
    }
    by_date
}
