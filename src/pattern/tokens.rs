//! Token types for the date pattern lexer.

/// A token in a date pattern string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals
    Literal(char),
    QuotedString(String),

    // Fields, with the number of repeated letters
    Year(usize),    // y
    Month(usize),   // M
    Day(usize),     // d
    Weekday(usize), // E

    // End of input
    Eof,
}

/// A token with its position in the source.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}
