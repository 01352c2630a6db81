//! Date patterns.
//!
//! A small subset of LDML date patterns for Hijri dates:
//!
//! | Pattern        | Meaning                          | Example (1 Ramadan 1446) |
//! |----------------|----------------------------------|--------------------------|
//! | `y`            | year                             | 1446                     |
//! | `yy`           | two-digit year                   | 46                       |
//! | `yyy`, `yyyy`… | year, zero-padded to the width   | 1446                     |
//! | `M`, `MM`      | month number                     | 9, 09                    |
//! | `MMM`          | short month name                 | Ram.                     |
//! | `MMMM`         | full month name                  | Ramadan                  |
//! | `d`, `dd`      | day                              | 1, 01                    |
//! | `E`…`EEE`      | short weekday name               | Sat                      |
//! | `EEEE`         | full weekday name                | Saturday                 |
//! | `'text'`       | literal text (`''` = apostrophe) |                          |

pub mod lexer;
pub mod tokens;

use std::str::FromStr;

use crate::error::PatternError;
use lexer::Lexer;
use tokens::Token;

/// A single field of a date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Year2,
    YearPadded(usize),
    Month,
    Month2,
    MonthAbbr,
    MonthFull,
    Day,
    Day2,
    WeekdayAbbr,
    WeekdayFull,
}

/// A part of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternPart {
    Field(DateField),
    Literal(String),
}

/// A compiled date pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    source: String,
    parts: Vec<PatternPart>,
}

impl DatePattern {
    /// Compiles a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let mut parts: Vec<PatternPart> = Vec::new();
        for spanned in Lexer::new(pattern).tokenize()? {
            let position = spanned.start;
            let field = match spanned.token {
                Token::Literal(ch) => {
                    push_literal(&mut parts, &ch.to_string());
                    continue;
                }
                Token::QuotedString(text) => {
                    push_literal(&mut parts, &text);
                    continue;
                }
                Token::Year(1) => DateField::Year,
                Token::Year(2) => DateField::Year2,
                Token::Year(width) => DateField::YearPadded(width),
                Token::Month(1) => DateField::Month,
                Token::Month(2) => DateField::Month2,
                Token::Month(3) => DateField::MonthAbbr,
                Token::Month(4) => DateField::MonthFull,
                Token::Month(width) => return Err(unsupported_width(position, 'M', width)),
                Token::Day(1) => DateField::Day,
                Token::Day(2) => DateField::Day2,
                Token::Day(width) => return Err(unsupported_width(position, 'd', width)),
                Token::Weekday(1..=3) => DateField::WeekdayAbbr,
                Token::Weekday(4) => DateField::WeekdayFull,
                Token::Weekday(width) => return Err(unsupported_width(position, 'E', width)),
                Token::Eof => break,
            };
            parts.push(PatternPart::Field(field));
        }

        Ok(DatePattern {
            source: pattern.to_string(),
            parts,
        })
    }

    /// The pattern string this was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    /// Returns true if any part matches the predicate.
    pub fn has_field(&self, predicate: impl Fn(DateField) -> bool) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, PatternPart::Field(field) if predicate(*field)))
    }
}

impl FromStr for DatePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Appends literal text, merging with a preceding literal.
fn push_literal(parts: &mut Vec<PatternPart>, text: &str) {
    if let Some(PatternPart::Literal(last)) = parts.last_mut() {
        last.push_str(text);
    } else if !text.is_empty() {
        parts.push(PatternPart::Literal(text.to_string()));
    }
}

fn unsupported_width(position: usize, letter: char, width: usize) -> PatternError {
    PatternError::UnsupportedWidth {
        position,
        letter,
        width,
    }
}
