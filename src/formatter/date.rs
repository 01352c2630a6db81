//! Hijri date formatting

use crate::date::HijriDate;
use crate::locale::LocaleNames;
use crate::pattern::{DateField, DatePattern, PatternPart};
use crate::weekday::Weekday;

/// Format a date using the given pattern.
///
/// The weekday is passed in because it depends on the calendar that
/// produced the date, not on the date's components alone.
pub fn format_date(
    date: &HijriDate,
    weekday: Weekday,
    pattern: &DatePattern,
    locale: &dyn LocaleNames,
) -> String {
    let mut result = String::new();
    for part in pattern.parts() {
        match part {
            PatternPart::Field(field) => {
                result.push_str(&format_field(*field, date, weekday, locale));
            }
            PatternPart::Literal(text) => result.push_str(text),
        }
    }
    result
}

/// Format a single date field.
fn format_field(
    field: DateField,
    date: &HijriDate,
    weekday: Weekday,
    locale: &dyn LocaleNames,
) -> String {
    match field {
        DateField::Year => date.year.to_string(),
        DateField::Year2 => format!("{:02}", date.year.rem_euclid(100)),
        DateField::YearPadded(width) => format!("{:0width$}", date.year),

        DateField::Month => date.month.to_string(),
        DateField::Month2 => format!("{:02}", date.month),
        DateField::MonthAbbr => locale.short_month_name(date.month).to_string(),
        DateField::MonthFull => locale.full_month_name(date.month).to_string(),

        DateField::Day => date.day.to_string(),
        DateField::Day2 => format!("{:02}", date.day),

        DateField::WeekdayAbbr => locale.short_weekday_name(weekday).to_string(),
        DateField::WeekdayFull => locale.full_weekday_name(weekday).to_string(),
    }
}
