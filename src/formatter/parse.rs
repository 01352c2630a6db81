//! Reading Hijri dates back from formatted text.

use crate::error::ParseError;
use crate::locale::LocaleNames;
use crate::pattern::{DateField, DatePattern, PatternPart};
use crate::weekday::Weekday;

/// Century assumed for two-digit years.
const TWO_DIGIT_YEAR_BASE: i32 = 1400;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Field values read from text, before calendar validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFields {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    /// Weekday read from the text and where it started.
    pub weekday: Option<(Weekday, usize)>,
}

/// Read every field of `pattern` from `text`, which must be consumed entirely.
pub fn parse_fields(
    text: &str,
    pattern: &DatePattern,
    locale: &dyn LocaleNames,
) -> Result<ParsedFields, ParseError> {
    let mut cursor = Cursor { text, position: 0 };
    let mut fields = ParsedFields::default();

    for part in pattern.parts() {
        match part {
            PatternPart::Literal(literal) => cursor.expect_literal(literal)?,
            PatternPart::Field(field) => cursor.read_field(*field, locale, &mut fields)?,
        }
    }

    if cursor.position < text.len() {
        return Err(cursor.mismatch("end of text"));
    }
    Ok(fields)
}

struct Cursor<'a> {
    text: &'a str,
    position: usize,
}

impl Cursor<'_> {
    fn rest(&self) -> &str {
        &self.text[self.position..]
    }

    fn mismatch(&self, expected: impl Into<String>) -> ParseError {
        ParseError::Mismatch {
            position: self.position,
            expected: expected.into(),
        }
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), ParseError> {
        if self.rest().starts_with(literal) {
            self.position += literal.len();
            Ok(())
        } else {
            Err(self.mismatch(format!("'{literal}'")))
        }
    }

    fn read_field(
        &mut self,
        field: DateField,
        locale: &dyn LocaleNames,
        fields: &mut ParsedFields,
    ) -> Result<(), ParseError> {
        match field {
            DateField::Year => fields.year = Some(self.read_year(1, 9)?),
            DateField::Year2 => {
                fields.year = Some(TWO_DIGIT_YEAR_BASE + self.read_number(2, 2)? as i32)
            }
            DateField::YearPadded(width) => fields.year = Some(self.read_year(width, width)?),

            DateField::Month => fields.month = Some(self.read_number(1, 2)?),
            DateField::Month2 => fields.month = Some(self.read_number(2, 2)?),
            DateField::MonthAbbr => {
                fields.month = Some(self.read_name(
                    (1..=12).map(|month| (month, locale.short_month_name(month))),
                    "month name",
                )?)
            }
            DateField::MonthFull => {
                fields.month = Some(self.read_name(
                    (1..=12).map(|month| (month, locale.full_month_name(month))),
                    "month name",
                )?)
            }

            DateField::Day => fields.day = Some(self.read_number(1, 2)?),
            DateField::Day2 => fields.day = Some(self.read_number(2, 2)?),

            DateField::WeekdayAbbr | DateField::WeekdayFull => {
                let start = self.position;
                let weekday = self.read_name(
                    WEEKDAYS.iter().map(|&weekday| {
                        let name = match field {
                            DateField::WeekdayAbbr => locale.short_weekday_name(weekday),
                            _ => locale.full_weekday_name(weekday),
                        };
                        (weekday, name)
                    }),
                    "weekday name",
                )?;
                fields.weekday = Some((weekday, start));
            }
        }
        Ok(())
    }

    /// Reads between `min` and `max` ASCII digits.
    fn read_number(&mut self, min: usize, max: usize) -> Result<u32, ParseError> {
        let digits = self
            .rest()
            .bytes()
            .take(max)
            .take_while(u8::is_ascii_digit)
            .count();
        if digits < min {
            return Err(self.mismatch(format!("at least {min} digit(s)")));
        }
        let value = self.rest()[..digits]
            .parse()
            .map_err(|_| self.mismatch("a number"))?;
        self.position += digits;
        Ok(value)
    }

    /// Reads a year with an optional leading minus sign.
    fn read_year(&mut self, min: usize, max: usize) -> Result<i32, ParseError> {
        let negative = self.rest().starts_with('-');
        if negative {
            self.position += 1;
        }
        let magnitude = self.read_number(min, max)? as i32;
        Ok(if negative { -magnitude } else { magnitude })
    }

    /// Reads the longest candidate name, ignoring case.
    fn read_name<'n, T>(
        &mut self,
        candidates: impl Iterator<Item = (T, &'n str)>,
        expected: &str,
    ) -> Result<T, ParseError> {
        let mut best: Option<(T, usize)> = None;
        for (value, name) in candidates {
            let Some(length) = prefix_len_ignore_case(self.rest(), name) else {
                continue;
            };
            let longer = best
                .as_ref()
                .map_or(true, |(_, best_length)| length > *best_length);
            if longer {
                best = Some((value, length));
            }
        }
        match best {
            Some((value, length)) => {
                self.position += length;
                Ok(value)
            }
            None => Err(self.mismatch(expected)),
        }
    }
}

/// Byte length of the prefix of `text` that equals `name` ignoring case.
fn prefix_len_ignore_case(text: &str, name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    let mut chars = text.char_indices();
    let mut end = 0;
    for expected in name.chars() {
        let (index, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
        end = index + actual.len_utf8();
    }
    Some(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::Locale;

    #[test]
    fn test_prefix_len_ignore_case() {
        assert_eq!(prefix_len_ignore_case("RAMADAN 1446", "Ramadan"), Some(7));
        assert_eq!(prefix_len_ignore_case("Ram", "Ramadan"), None);
        assert_eq!(prefix_len_ignore_case("şaban", "Şaban"), Some(6));
    }

    #[test]
    fn test_parse_numeric_fields() {
        let pattern = DatePattern::parse("yyyyMMdd").unwrap();
        let fields = parse_fields("14460901", &pattern, &Locale::en()).unwrap();
        assert_eq!(fields.year, Some(1446));
        assert_eq!(fields.month, Some(9));
        assert_eq!(fields.day, Some(1));
    }

    #[test]
    fn test_parse_month_name_ignores_case() {
        let pattern = DatePattern::parse("d MMMM y").unwrap();
        let fields = parse_fields("3 rabiʻ al-thani 1446", &pattern, &Locale::en()).unwrap();
        assert_eq!(fields.month, Some(4));
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        let pattern = DatePattern::parse("y").unwrap();
        assert!(matches!(
            parse_fields("1446 AH", &pattern, &Locale::en()),
            Err(ParseError::Mismatch { position: 4, .. })
        ));
    }
}
