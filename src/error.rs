//! Error types for calendar conversion, adjustments and date patterns.

use thiserror::Error;

/// Errors reported by the calendar and the adjustment engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// A month outside 1..=12, a day outside the month, or year zero.
    #[error("invalid date components: {reason}")]
    InvalidDateComponents { reason: String },

    /// A year or table offset outside the supported Umm al-Qura range.
    #[error("date out of range: {reason}")]
    DateOutOfRange { reason: String },

    /// The change would give some month a length other than 29 or 30 days.
    #[error("invalid adjustment: {reason}")]
    InvalidAdjustment { reason: String },

    /// No override is stored for the requested month.
    #[error("adjustment not found: {reason}")]
    AdjustmentNotFound { reason: String },

    /// Adjustment data could not be read from or written to JSON.
    #[error("JSON processing failed: {reason}")]
    JsonProcessing { reason: String },
}

impl CalendarError {
    pub(crate) fn invalid_components(reason: impl Into<String>) -> Self {
        CalendarError::InvalidDateComponents {
            reason: reason.into(),
        }
    }

    pub(crate) fn out_of_range(reason: impl Into<String>) -> Self {
        CalendarError::DateOutOfRange {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_adjustment(reason: impl Into<String>) -> Self {
        CalendarError::InvalidAdjustment {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CalendarError {
    fn from(err: serde_json::Error) -> Self {
        CalendarError::JsonProcessing {
            reason: err.to_string(),
        }
    }
}

/// Errors that can occur when compiling a date pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("empty date pattern")]
    EmptyPattern,

    #[error("unterminated quote at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("unsupported field '{letter}' at position {position}")]
    UnsupportedField { position: usize, letter: char },

    #[error("field '{letter}' cannot be repeated {width} times (position {position})")]
    UnsupportedWidth {
        position: usize,
        letter: char,
        width: usize,
    },

    #[error("pattern has no '{letter}' field to read")]
    MissingField { letter: char },
}

/// Errors that can occur when reading a Hijri date back from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("text does not match pattern at position {position}: expected {expected}")]
    Mismatch {
        position: usize,
        expected: String,
    },

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
