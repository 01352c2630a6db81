//! hijri-calendar - Umm al-Qura and tabular Hijri calendar conversion
//!
//! This crate converts between Gregorian and Hijri dates using the published
//! Umm al-Qura month starts (1318-1500 AH) with a tabular fallback, and lets
//! callers move individual month starts to match local moon sighting while
//! keeping every month 29 or 30 days long.
//!
//! ```
//! use hijri_calendar::{GregorianDate, HijriCalendarAdjustment, HijriDate};
//!
//! let mut engine = HijriCalendarAdjustment::new();
//! let sighted = GregorianDate::new(2025, 3, 2)?;
//! engine.add_adjustment(1446, 9, sighted)?;
//! assert_eq!(engine.hijri_date(sighted), HijriDate::new(1446, 9, 1));
//! # Ok::<(), hijri_calendar::CalendarError>(())
//! ```

pub mod adjustment;
pub mod calendar;
pub mod date;
pub mod error;
pub mod gregorian;
pub mod julian_day;
pub mod options;
pub mod pattern;
pub mod tabular;
pub mod ummalqura;
pub mod weekday;

mod cache;
mod formatter;
mod locale;
mod shared;

pub use adjustment::{
    is_valid_month_length, AdjustmentData, AutoAdjustment, HijriCalendarAdjustment, PossibleStart,
};
pub use calendar::HijriCalendar;
pub use date::HijriDate;
pub use error::{CalendarError, ParseError, PatternError};
pub use formatter::{format_date, HijriFormatter};
pub use gregorian::GregorianDate;
pub use locale::{Locale, LocaleNames, LocaleRegistry};
pub use options::{CalendarOptions, ConversionMethod};
pub use pattern::DatePattern;
pub use shared::SharedCalendar;
pub use weekday::Weekday;

/// Format a Hijri date with an English pattern.
///
/// # Arguments
/// * `date` - The date to format
/// * `pattern` - A date pattern such as `"d MMMM yyyy"`
/// * `calendar` - The calendar that supplies the weekday
///
/// # Returns
/// * `Ok(String)` - The formatted date
/// * `Err(PatternError)` - If the pattern is invalid
pub fn format(
    date: &HijriDate,
    pattern: &str,
    calendar: &HijriCalendar,
) -> Result<String, PatternError> {
    Ok(HijriFormatter::new(pattern)?.format(date, calendar))
}

/// Read a Hijri date written with an English pattern.
pub fn parse(text: &str, pattern: &str, calendar: &HijriCalendar) -> Result<HijriDate, ParseError> {
    HijriFormatter::new(pattern)?.parse(text, calendar)
}
