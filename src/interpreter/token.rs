use std::fmt;

/// The classification of a scanned token.
///
/// Every token produced by the scanner carries exactly one of these kinds.
/// The `Display` form is the name used inside diagnostics, e.g. `<CloseParen>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of decimal digits.
    Number,
    /// A run of whitespace characters.
    Whitespace,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// A character the scanner does not recognize.
    Bad,
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "Number",
            Self::Whitespace => "Whitespace",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Star",
            Self::Slash => "Slash",
            Self::OpenParen => "OpenParen",
            Self::CloseParen => "CloseParen",
            Self::Bad => "Bad",
            Self::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A lexical token together with its location in the source line.
///
/// Tokens are either scanned from the input or synthesized by the parser
/// while recovering from a missing token. Synthesized tokens never carry text
/// or a value; use [`Token::is_placeholder`] to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's classification.
    pub kind:     TokenKind,
    /// Byte offset of the token's first character.
    pub position: usize,
    /// The literal source text, absent for whitespace, end of input and
    /// placeholders.
    pub text:     Option<String>,
    /// The parsed integer, present only on number tokens.
    pub value:    Option<i32>,
    synthetic:    bool,
}

impl Token {
    /// Creates a token scanned from the source text.
    ///
    /// ## Example
    /// ```
    /// use reckon::interpreter::token::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Plus, 3, Some("+".to_string()), None);
    /// assert_eq!(token.position, 3);
    /// assert!(!token.is_placeholder());
    /// ```
    #[must_use]
    pub const fn new(kind: TokenKind,
                     position: usize,
                     text: Option<String>,
                     value: Option<i32>)
                     -> Self {
        Self { kind,
               position,
               text,
               value,
               synthetic: false }
    }

    /// Creates the end-of-input token.
    #[must_use]
    pub const fn eof(position: usize) -> Self {
        Self::new(TokenKind::Eof, position, None, None)
    }

    /// Creates a token the parser inserts in place of one it expected but
    /// did not find.
    #[must_use]
    pub const fn placeholder(kind: TokenKind, position: usize) -> Self {
        Self { kind,
               position,
               text: None,
               value: None,
               synthetic: true }
    }

    /// Returns `true` if the token was synthesized during error recovery.
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        self.synthetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_diagnostic_spelling() {
        assert_eq!(TokenKind::CloseParen.to_string(), "CloseParen");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
        assert_eq!(TokenKind::Number.to_string(), "Number");
    }

    #[test]
    fn placeholder_has_no_payload() {
        let token = Token::placeholder(TokenKind::Number, 4);

        assert!(token.is_placeholder());
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.position, 4);
        assert!(token.text.is_none());
        assert!(token.value.is_none());
    }

    #[test]
    fn placeholder_differs_from_scanned_token_of_same_shape() {
        let scanned = Token::new(TokenKind::CloseParen, 2, None, None);
        let synthetic = Token::placeholder(TokenKind::CloseParen, 2);

        assert_ne!(scanned, synthetic);
    }
}
