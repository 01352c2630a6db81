//! Hijri calendar conversion.
//!
//! A [`HijriCalendar`] converts between Gregorian and Hijri dates. With the
//! default [`ConversionMethod::UmmAlQura`] it reads month starts from the
//! Umm al-Qura table for Julian Days inside the table and for years the table
//! covers, and falls back to the tabular algorithm everywhere else. With
//! [`ConversionMethod::Tabular`] it never consults the table.
//!
//! The calendar owns its copy of the month-start table, so a calendar
//! produced by the adjustment engine reflects the overrides in force when it
//! was built.

use std::sync::Arc;

use crate::date::HijriDate;
use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::julian_day::{julian_day_to_mjd, mjd_to_julian_day};
use crate::options::{CalendarOptions, ConversionMethod};
use crate::tabular;
use crate::ummalqura::{self, LAST_MONTH_DAYS, TABLE_LEN};
use crate::weekday::Weekday;

/// A Hijri calendar.
#[derive(Debug, Clone)]
pub struct HijriCalendar {
    options: CalendarOptions,
    month_starts: Arc<[i32]>,
}

impl Default for HijriCalendar {
    fn default() -> Self {
        Self::new(CalendarOptions::default())
    }
}

impl HijriCalendar {
    /// Creates a calendar over the published Umm al-Qura table.
    pub fn new(options: CalendarOptions) -> Self {
        Self::with_month_starts(options, Arc::from(&ummalqura::base_table()[..]))
    }

    /// Creates a calendar that uses only the tabular algorithm.
    pub fn tabular() -> Self {
        Self::new(CalendarOptions::tabular())
    }

    pub(crate) fn with_month_starts(options: CalendarOptions, month_starts: Arc<[i32]>) -> Self {
        debug_assert_eq!(month_starts.len(), TABLE_LEN);
        HijriCalendar {
            options,
            month_starts,
        }
    }

    pub fn options(&self) -> CalendarOptions {
        self.options
    }

    pub fn method(&self) -> ConversionMethod {
        self.options.method
    }

    /// The month-start table (MJD values) this calendar converts with.
    pub fn month_starts(&self) -> &[i32] {
        &self.month_starts
    }

    /// First JD covered by the table.
    fn table_start_jd(&self) -> i32 {
        mjd_to_julian_day(self.month_starts[0])
    }

    /// First JD after the table.
    fn table_end_jd(&self) -> i32 {
        mjd_to_julian_day(self.month_starts[TABLE_LEN - 1] + LAST_MONTH_DAYS)
    }

    fn uses_table_for_jd(&self, jd: i32) -> bool {
        self.method().uses_table() && jd >= self.table_start_jd() && jd < self.table_end_jd()
    }

    fn table_offset(&self, year: i32, month: u32) -> Option<usize> {
        if self.method().uses_table() {
            ummalqura::offset(year, month)
        } else {
            None
        }
    }

    /// Converts a Julian Day Number to a Hijri date.
    pub fn hijri_from_julian_day(&self, jd: i32) -> HijriDate {
        if !self.uses_table_for_jd(jd) {
            let (year, month, day) = tabular::from_julian_day(jd);
            return HijriDate::new(year, month, day);
        }

        let mjd = julian_day_to_mjd(jd);
        // Index of the last month starting on or before `mjd`.
        let offset = self.month_starts.partition_point(|&start| start <= mjd) - 1;
        let (year, month) = ummalqura::year_month(offset);
        let day = (mjd - self.month_starts[offset] + 1) as u32;
        HijriDate::new(year, month, day)
    }

    /// Converts Hijri components to a Julian Day Number.
    ///
    /// The components are not validated; use [`HijriCalendar::validate`] first
    /// when they come from outside.
    pub fn julian_day(&self, year: i32, month: u32, day: u32) -> i32 {
        match self.table_offset(year, month) {
            Some(offset) => mjd_to_julian_day(self.month_starts[offset]) + day as i32 - 1,
            None => tabular::to_julian_day(year, month, day),
        }
    }

    /// The Hijri date on a Gregorian date.
    pub fn hijri_date(&self, date: GregorianDate) -> HijriDate {
        self.hijri_from_julian_day(date.julian_day())
    }

    /// The Gregorian date of a Hijri date.
    pub fn gregorian_date(&self, date: &HijriDate) -> GregorianDate {
        GregorianDate::from_julian_day(self.julian_day(date.year, date.month, date.day))
    }

    pub fn weekday(&self, date: &HijriDate) -> Weekday {
        Weekday::from_julian_day(self.julian_day(date.year, date.month, date.day))
    }

    /// Checks that a date exists in this calendar.
    ///
    /// # Errors
    /// * [`CalendarError::InvalidDateComponents`] for a month outside 1-12, a
    ///   day outside the month, or year zero
    /// * [`CalendarError::DateOutOfRange`] for a year outside the table when the
    ///   Umm al-Qura method is selected
    pub fn validate(&self, year: i32, month: u32, day: u32) -> Result<HijriDate, CalendarError> {
        if year == 0 {
            return Err(CalendarError::invalid_components("there is no Hijri year 0"));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::invalid_components(format!(
                "Hijri month {month} is not between 1 and 12"
            )));
        }
        if !(1..=30).contains(&day) {
            return Err(CalendarError::invalid_components(format!(
                "Hijri day {day} is not between 1 and 30"
            )));
        }
        if self.method().uses_table() && !ummalqura::contains_year(year) {
            return Err(CalendarError::out_of_range(format!(
                "year {year} is outside the Umm al-Qura range {}-{}",
                ummalqura::START_YEAR,
                ummalqura::END_YEAR
            )));
        }
        let length = self.days_in_month(year, month);
        if day > length {
            return Err(CalendarError::invalid_components(format!(
                "{year}-{month:02} has {length} days, got day {day}"
            )));
        }
        Ok(HijriDate::new(year, month, day))
    }

    /// Returns true if the date exists in this calendar.
    pub fn is_valid_hijri_date(&self, year: i32, month: u32, day: u32) -> bool {
        self.validate(year, month, day).is_ok()
    }

    /// Number of days in a Hijri month (29 or 30), or 0 for an invalid month.
    pub fn days_in_month(&self, year: i32, month: u32) -> u32 {
        if year == 0 {
            return 0;
        }
        match self.table_offset(year, month) {
            Some(offset) if offset + 1 < TABLE_LEN => {
                (self.month_starts[offset + 1] - self.month_starts[offset]) as u32
            }
            Some(_) => LAST_MONTH_DAYS as u32,
            None => tabular::days_in_month(year, month),
        }
    }

    /// Number of days in a Hijri year (354 or 355), or 0 for year zero.
    pub fn days_in_year(&self, year: i32) -> u32 {
        (1..=12).map(|month| self.days_in_month(year, month)).sum()
    }

    /// Returns true if the year is longer than 354 days.
    pub fn is_leap_year(&self, year: i32) -> bool {
        self.days_in_year(year) > 354
    }

    /// One-based position of the date within its year.
    pub fn day_of_year(&self, date: &HijriDate) -> u32 {
        (self.julian_day(date.year, date.month, date.day) - self.julian_day(date.year, 1, 1) + 1)
            as u32
    }

    /// The date `days` days later (or earlier, if negative).
    pub fn add_days(&self, date: &HijriDate, days: i32) -> HijriDate {
        self.hijri_from_julian_day(self.julian_day(date.year, date.month, date.day) + days)
    }

    /// Gregorian date on which a Hijri month begins.
    ///
    /// # Errors
    /// As for [`HijriCalendar::validate`] on the first day of the month.
    pub fn first_day_of_month(&self, year: i32, month: u32) -> Result<GregorianDate, CalendarError> {
        let first = self.validate(year, month, 1)?;
        Ok(self.gregorian_date(&first))
    }

    /// Table MJD on which a month begins, or `None` if the month is not tabulated.
    pub fn month_start_mjd(&self, year: i32, month: u32) -> Option<i32> {
        self.table_offset(year, month)
            .map(|offset| self.month_starts[offset])
    }
}
