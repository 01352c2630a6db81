//! Lexer for tokenizing date pattern strings.
//!
//! The lexer converts a pattern such as `d MMMM yyyy` into a stream of tokens:
//! - Runs of a field letter (y, M, d, E) become one token carrying the run length
//! - Quoted text ('AH') becomes a QuotedString token; `''` is a literal apostrophe
//! - Any other ASCII letter is rejected, so typos do not silently become text
//! - Everything else is a literal

use crate::error::PatternError;
use crate::pattern::tokens::{SpannedToken, Token};

/// A lexer for date pattern strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, PatternError> {
        let start = self.position;
        let Some(ch) = self.current_char() else {
            return Ok(SpannedToken {
                token: Token::Eof,
                start,
                end: start,
            });
        };

        let token = match ch {
            '\'' => self.lex_quoted()?,
            'y' => Token::Year(self.count_run(ch)),
            'M' => Token::Month(self.count_run(ch)),
            'd' => Token::Day(self.count_run(ch)),
            'E' => Token::Weekday(self.count_run(ch)),
            _ if ch.is_ascii_alphabetic() => {
                return Err(PatternError::UnsupportedField {
                    position: start,
                    letter: ch,
                });
            }
            _ => {
                self.advance();
                Token::Literal(ch)
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Returns the character at the current position, if any.
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    /// Advances the position by one character.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }

    /// Counts and consumes consecutive occurrences of `letter`.
    /// Returns the count (always >= 1 since the current char matches).
    fn count_run(&mut self, letter: char) -> usize {
        let mut count = 0;
        while self.current_char() == Some(letter) {
            count += 1;
            self.advance();
        }
        count
    }

    /// Lexes quoted text ('...'), or a lone apostrophe written as ''.
    fn lex_quoted(&mut self) -> Result<Token, PatternError> {
        let start = self.position;
        self.advance(); // Skip the opening quote

        if self.current_char() == Some('\'') {
            self.advance();
            return Ok(Token::Literal('\''));
        }

        let mut content = String::new();
        loop {
            match self.current_char() {
                Some('\'') => {
                    self.advance();
                    // A doubled quote inside quoted text is an apostrophe.
                    if self.current_char() == Some('\'') {
                        content.push('\'');
                        self.advance();
                    } else {
                        return Ok(Token::QuotedString(content));
                    }
                }
                Some(ch) => {
                    content.push(ch);
                    self.advance();
                }
                None => return Err(PatternError::UnterminatedQuote { position: start }),
            }
        }
    }

    /// Returns all remaining tokens, excluding the final Eof.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, PatternError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            if token.token == Token::Eof {
                return Ok(tokens);
            }
            tokens.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    #[test]
    fn test_field_runs() {
        assert_eq!(
            tokens("yyyy-MM-d"),
            vec![
                Token::Year(4),
                Token::Literal('-'),
                Token::Month(2),
                Token::Literal('-'),
                Token::Day(1),
            ]
        );
    }

    #[test]
    fn test_quotes() {
        assert_eq!(
            tokens("d 'AH'"),
            vec![
                Token::Day(1),
                Token::Literal(' '),
                Token::QuotedString("AH".to_string()),
            ]
        );
        assert_eq!(tokens("''"), vec![Token::Literal('\'')]);
        assert_eq!(
            tokens("'it''s'"),
            vec![Token::QuotedString("it's".to_string())]
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Lexer::new("d 'AH").tokenize().unwrap_err(),
            PatternError::UnterminatedQuote { position: 2 }
        );
        assert_eq!(
            Lexer::new("yyyy G").tokenize().unwrap_err(),
            PatternError::UnsupportedField {
                position: 5,
                letter: 'G'
            }
        );
    }
}
