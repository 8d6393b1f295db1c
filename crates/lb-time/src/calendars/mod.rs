//! Concrete holiday calendars.

/// Mainland China holidays.
pub mod china;

pub use china::China;
