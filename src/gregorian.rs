//! Gregorian calendar dates.

use std::fmt;

use crate::error::CalendarError;
use crate::julian_day::{
    gregorian_to_julian_day, julian_day_to_gregorian, julian_day_to_mjd, mjd_to_julian_day,
};
use crate::weekday::Weekday;

/// Days in each month for non-leap years
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns true if the given Gregorian year is a leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Returns the number of days in a Gregorian month, or 0 for an invalid month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// A date in the Gregorian calendar.
///
/// Values built with [`GregorianDate::new`] are always real calendar days.
/// Values produced from a Julian Day before the 1582 cutover carry Julian
/// calendar components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u32,
    day: u32,
}

impl GregorianDate {
    /// Creates a validated date.
    ///
    /// # Errors
    /// [`CalendarError::InvalidDateComponents`] if the month is not 1-12 or the
    /// day does not exist in that month.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_components(format!(
                "Gregorian month {month} is not between 1 and 12"
            )));
        }
        let last = days_in_month(year, month);
        if day == 0 || day > last {
            return Err(CalendarError::invalid_components(format!(
                "{year:04}-{month:02} has {last} days, got day {day}"
            )));
        }
        Ok(GregorianDate { year, month, day })
    }

    /// The date on a Julian Day Number.
    pub fn from_julian_day(jd: i32) -> Self {
        let (year, month, day) = julian_day_to_gregorian(jd);
        GregorianDate { year, month, day }
    }

    /// The date on a Modified Julian Day.
    pub fn from_mjd(mjd: i32) -> Self {
        Self::from_julian_day(mjd_to_julian_day(mjd))
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Julian Day Number of this date.
    pub fn julian_day(&self) -> i32 {
        gregorian_to_julian_day(self.year, self.month, self.day)
    }

    /// Modified Julian Day of this date.
    pub fn mjd(&self) -> i32 {
        julian_day_to_mjd(self.julian_day())
    }

    pub fn weekday(&self) -> Weekday {
        Weekday::from_julian_day(self.julian_day())
    }

    /// The date `days` days later (or earlier, if negative).
    pub fn add_days(&self, days: i32) -> Self {
        Self::from_julian_day(self.julian_day() + days)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        GregorianDate {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

#[cfg(feature = "chrono")]
impl GregorianDate {
    /// Converts to a chrono date, if chrono can represent it.
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}
