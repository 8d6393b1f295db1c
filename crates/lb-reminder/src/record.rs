//! Birthday records as kept by the embedding application.

use lb_core::errors::Result;
use lb_time::LunarDate;
use serde::{Deserialize, Serialize};

/// One person's lunar birthday.
///
/// Only `lunar_birth.month` and `lunar_birth.day` recur; the year is kept
/// for age display.  Records are immutable inputs: nothing here caches a
/// solar date, so every query recomputes occurrences from the lunar fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayRecord {
    /// Stable identifier assigned by the store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Relationship to the user, free text.
    #[serde(default)]
    pub relationship: String,
    /// Birth date on the lunar calendar.
    pub lunar_birth: LunarDate,
}

impl BirthdayRecord {
    /// Build a record, rejecting lunar birth dates that do not exist.
    ///
    /// ```
    /// use lb_reminder::BirthdayRecord;
    /// use lb_time::LunarDate;
    ///
    /// assert!(BirthdayRecord::new("1", "Mum", "mother", LunarDate::new(1960, 8, 15)).is_ok());
    /// assert!(BirthdayRecord::new("2", "Nobody", "", LunarDate::new(1960, 13, 1)).is_err());
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        relationship: impl Into<String>,
        lunar_birth: LunarDate,
    ) -> Result<Self> {
        lunar_birth.validate()?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            relationship: relationship.into(),
            lunar_birth,
        })
    }

    /// The recurring lunar `(month, day)`.
    pub fn anniversary(&self) -> (u8, u8) {
        (self.lunar_birth.month, self.lunar_birth.day)
    }
}
