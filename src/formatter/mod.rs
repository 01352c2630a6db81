//! Hijri date formatting and parsing

mod date;
mod parse;

use std::sync::Arc;

pub use date::format_date;

use crate::cache;
use crate::calendar::HijriCalendar;
use crate::date::HijriDate;
use crate::error::{ParseError, PatternError};
use crate::locale::{Locale, LocaleNames, LocaleRegistry};
use crate::pattern::{DateField, DatePattern};

/// Formats Hijri dates with a pattern and a locale, and reads them back.
#[derive(Debug, Clone)]
pub struct HijriFormatter {
    pattern: DatePattern,
    locale: Arc<dyn LocaleNames>,
}

impl HijriFormatter {
    /// Creates an English formatter for a pattern.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        Self::with_locale(pattern, Arc::new(Locale::en()))
    }

    pub fn with_locale(pattern: &str, locale: Arc<dyn LocaleNames>) -> Result<Self, PatternError> {
        Ok(HijriFormatter {
            pattern: cache::get_or_parse(pattern)?,
            locale,
        })
    }

    /// Creates a formatter for the registry's best match for `tag`.
    pub fn for_locale_tag(
        pattern: &str,
        registry: &LocaleRegistry,
        tag: &str,
    ) -> Result<Self, PatternError> {
        Self::with_locale(pattern, registry.lookup(tag))
    }

    pub fn pattern(&self) -> &DatePattern {
        &self.pattern
    }

    pub fn locale(&self) -> &dyn LocaleNames {
        self.locale.as_ref()
    }

    /// Formats a date. The weekday comes from `calendar`.
    pub fn format(&self, date: &HijriDate, calendar: &HijriCalendar) -> String {
        format_date(
            date,
            calendar.weekday(date),
            &self.pattern,
            self.locale.as_ref(),
        )
    }

    /// Reads a date formatted with this pattern.
    ///
    /// Month and day default to 1 when the pattern has no such field. The
    /// result is validated against `calendar`, and a weekday in the text must
    /// agree with the calendar's weekday for the date.
    ///
    /// # Errors
    /// * [`ParseError::Pattern`] if the pattern has no year field
    /// * [`ParseError::Mismatch`] if the text does not follow the pattern
    /// * [`ParseError::Calendar`] if the date does not exist in `calendar`
    pub fn parse(&self, text: &str, calendar: &HijriCalendar) -> Result<HijriDate, ParseError> {
        if !self.pattern.has_field(|field| {
            matches!(
                field,
                DateField::Year | DateField::Year2 | DateField::YearPadded(_)
            )
        }) {
            return Err(PatternError::MissingField { letter: 'y' }.into());
        }

        let fields = parse::parse_fields(text, &self.pattern, self.locale.as_ref())?;
        let date = calendar.validate(
            fields.year.unwrap_or_default(),
            fields.month.unwrap_or(1),
            fields.day.unwrap_or(1),
        )?;

        if let Some((weekday, position)) = fields.weekday {
            let actual = calendar.weekday(&date);
            if weekday != actual {
                return Err(ParseError::Mismatch {
                    position,
                    expected: format!("{} for {date}", self.locale.full_weekday_name(actual)),
                });
            }
        }
        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let calendar = HijriCalendar::default();
        let formatter = HijriFormatter::new("EEEE d MMMM yyyy").unwrap();
        let date = HijriDate::new(1446, 9, 1);
        let text = formatter.format(&date, &calendar);
        assert_eq!(text, "Saturday 1 Ramadan 1446");
        assert_eq!(formatter.parse(&text, &calendar).unwrap(), date);
    }

    #[test]
    fn test_parse_rejects_wrong_weekday() {
        let calendar = HijriCalendar::default();
        let formatter = HijriFormatter::new("EEE d/M/y").unwrap();
        assert!(matches!(
            formatter.parse("Fri 1/9/1446", &calendar),
            Err(ParseError::Mismatch { position: 0, .. })
        ));
    }

    #[test]
    fn test_parse_requires_year() {
        let calendar = HijriCalendar::default();
        let formatter = HijriFormatter::new("d MMMM").unwrap();
        assert_eq!(
            formatter.parse("1 Ramadan", &calendar),
            Err(ParseError::Pattern(PatternError::MissingField { letter: 'y' }))
        );
    }
}
