//! User-facing settings that shape reminder and grid queries.
//!
//! [`Settings`] is a plain value: the embedding application loads it (for
//! example from JSON kept next to the birthday store), validates it, and
//! passes it into each query.  Nothing in the workspace holds a global copy,
//! so two queries with different settings never interfere.

use serde::{Deserialize, Serialize};

use crate::ensure;
use crate::errors::Result;

/// Default reminder horizon, in days.
pub const DEFAULT_REMINDER_HORIZON_DAYS: u32 = 14;

/// Largest accepted reminder horizon.  The next occurrence of a yearly
/// anniversary is never further away than one lunar leap year.
pub const MAX_REMINDER_HORIZON_DAYS: u32 = 384;

/// Settings for reminder and calendar queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// How many days ahead the reminder list looks (inclusive).
    pub reminder_horizon_days: u32,
    /// Whether month grids carry holiday labels.
    pub show_holidays: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reminder_horizon_days: DEFAULT_REMINDER_HORIZON_DAYS,
            show_holidays: true,
        }
    }
}

impl Settings {
    /// Settings with the given horizon and holidays shown.
    pub fn with_horizon(days: u32) -> Self {
        Self {
            reminder_horizon_days: days,
            ..Self::default()
        }
    }

    /// Check that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.reminder_horizon_days <= MAX_REMINDER_HORIZON_DAYS,
            "reminder horizon {} exceeds {} days",
            self.reminder_horizon_days,
            MAX_REMINDER_HORIZON_DAYS
        );
        Ok(())
    }
}
