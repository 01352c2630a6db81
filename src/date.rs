//! Hijri date values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calendar::HijriCalendar;
use crate::error::CalendarError;

/// A date in the Hijri calendar.
///
/// Dates order by year, then month, then day. A `HijriDate` is plain data:
/// whether it exists depends on the calendar (and its adjustments), so use
/// [`HijriDate::try_new`] or [`HijriCalendar::is_valid_hijri_date`] to check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HijriDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    /// Creates a date without validation.
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        HijriDate { year, month, day }
    }

    /// Creates a date that exists in `calendar`.
    ///
    /// # Errors
    /// * [`CalendarError::InvalidDateComponents`] for a bad month or day, or year zero
    /// * [`CalendarError::DateOutOfRange`] for a year outside the Umm al-Qura table
    ///   when the calendar uses it
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        calendar: &HijriCalendar,
    ) -> Result<Self, CalendarError> {
        calendar.validate(year, month, day)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
