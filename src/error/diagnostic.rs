use std::fmt;

use crate::interpreter::token::TokenKind;

/// A problem found while scanning or parsing, reported without stopping the
/// pipeline.
///
/// Diagnostics are collected in detection order. The message text is stable
/// and is what [`Display`](fmt::Display) prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Human-readable description.
    pub message:  String,
    /// Byte offset the diagnostic refers to.
    pub position: usize,
}

impl Diagnostic {
    /// A character the scanner does not recognize.
    ///
    /// ## Example
    /// ```
    /// use reckon::error::Diagnostic;
    ///
    /// let diagnostic = Diagnostic::bad_character('@', 2);
    /// assert_eq!(diagnostic.to_string(), "Bad character '@' at position 2.");
    /// ```
    #[must_use]
    pub fn bad_character(ch: char, position: usize) -> Self {
        Self { message: format!("Bad character '{ch}' at position {position}."),
               position }
    }

    /// A digit run that does not fit in a 32-bit signed integer.
    #[must_use]
    pub fn invalid_integer(text: &str, position: usize) -> Self {
        Self { message: format!("The value {text} at position {position} is not a valid integer."),
               position }
    }

    /// The parser found `actual` where it required `expected`.
    #[must_use]
    pub fn unexpected_token(actual: TokenKind, expected: TokenKind, position: usize) -> Self {
        Self { message: format!("Unexpected token <{actual}> at position {position}, expected <{expected}>."),
               position }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
