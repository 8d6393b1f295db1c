//! `Weekday`: day-of-week enum.

/// Day of the week.
///
/// Variants carry the ISO 8601 ordinal (Monday = 1, Sunday = 7).  Month grids
/// start their weeks on Sunday; use [`Weekday::sunday_based_index`] there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

const ALL: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// The weekday `days` days after a Monday (negative counts go back).
    pub fn from_days_since_monday(days: i32) -> Self {
        ALL[days.rem_euclid(7) as usize]
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Column of this weekday in a Sunday-first week: 0 = Sunday … 6 = Saturday.
    pub fn sunday_based_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Single-character Chinese column header (`"日"`, `"一"`, …, `"六"`).
    pub fn chinese_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "一",
            Weekday::Tuesday => "二",
            Weekday::Wednesday => "三",
            Weekday::Thursday => "四",
            Weekday::Friday => "五",
            Weekday::Saturday => "六",
            Weekday::Sunday => "日",
        }
    }
}
