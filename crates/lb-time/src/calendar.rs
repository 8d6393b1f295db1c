//! `HolidayCalendar` trait and the empty calendar.
//!
//! A holiday calendar knows which solar dates carry a public holiday or
//! traditional festival, and where that answer came from.

use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::festival::Festival;

/// Where a holiday answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HolidaySource {
    /// A year-specific schedule published by the government.
    Official,
    /// A holiday fixed on the solar calendar.
    SolarRule,
    /// A festival fixed on the lunar calendar.
    LunarRule,
    /// The eve of lunar new year.
    LunarNewYearsEve,
}

/// A holiday on a particular date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Which holiday.
    pub festival: Festival,
    /// Which rule produced it.
    pub source: HolidaySource,
}

impl Holiday {
    /// Display label, e.g. `"春节"`.
    pub fn label(&self) -> &'static str {
        self.festival.name()
    }
}

/// A holiday calendar.
///
/// Implementations must be total: dates they know nothing about yield
/// `None`, never a panic.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"China"`).
    fn name(&self) -> &str;

    /// The holiday falling on `date`, if any.
    fn holiday(&self, date: Date) -> Option<Holiday>;

    /// Label of the holiday falling on `date`, if any.
    fn holiday_label(&self, date: Date) -> Option<&'static str> {
        self.holiday(date).map(|h| h.label())
    }

    /// Return `true` if `date` carries a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday(date).is_some()
    }

    /// Every holiday in `[from, to]`, in date order.
    fn holidays_between(&self, from: Date, to: Date) -> Vec<(Date, Holiday)> {
        let mut out = Vec::new();
        let mut d = from;
        while d <= to {
            if let Some(h) = self.holiday(d) {
                out.push((d, h));
            }
            match d.succ() {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        out
    }
}

/// A calendar without any holidays, used when holiday display is off.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn name(&self) -> &str {
        "None"
    }

    fn holiday(&self, _date: Date) -> Option<Holiday> {
        None
    }
}
