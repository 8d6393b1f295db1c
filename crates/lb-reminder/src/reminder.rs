//! The "upcoming birthdays" list.

use lb_core::{DayCount, Year};
use lb_time::Date;
use serde::Serialize;

use crate::occurrence::next_solar_occurrence;
use crate::record::BirthdayRecord;

/// A record's next birthday, relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingOccurrence<'a> {
    /// The record this occurrence belongs to.
    pub record: &'a BirthdayRecord,
    /// Solar date of the occurrence.
    pub solar_date: Date,
    /// Whole days from the reference date; `0` means today.
    pub days_until: DayCount,
}

impl UpcomingOccurrence<'_> {
    /// Age reached on this birthday, counted as the difference between the
    /// occurrence's solar year and the lunar birth year.
    pub fn age(&self) -> Year {
        self.solar_date.year() - self.record.lunar_birth.year
    }

    /// Whether the birthday falls on the reference date itself.
    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }
}

/// Records whose next birthday is at most `horizon_days` after `reference`,
/// nearest first.
///
/// Records with equal distance keep their input order.  A record whose lunar
/// birthday cannot be converted is left out and logged; it never fails the
/// whole list.
pub fn reminder_list(
    records: &[BirthdayRecord],
    reference: Date,
    horizon_days: u32,
) -> Vec<UpcomingOccurrence<'_>> {
    let horizon = DayCount::try_from(horizon_days).unwrap_or(DayCount::MAX);
    let mut upcoming: Vec<UpcomingOccurrence<'_>> = records
        .iter()
        .filter_map(|record| {
            let (month, day) = record.anniversary();
            match next_solar_occurrence(month, day, reference) {
                Ok(solar_date) => Some(UpcomingOccurrence {
                    record,
                    solar_date,
                    days_until: reference.days_until(solar_date),
                }),
                Err(e) => {
                    log::warn!("skipping birthday record {:?}: {e}", record.id);
                    None
                }
            }
        })
        .filter(|o| (0..=horizon).contains(&o.days_until))
        .collect();
    upcoming.sort_by_key(|o| o.days_until);
    upcoming
}
