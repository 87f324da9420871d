use logos::Logos;

use crate::{
    error::Diagnostic,
    interpreter::token::{Token, TokenKind},
};

/// The lexemes recognized directly by the generated automaton.
///
/// Anything the automaton rejects surfaces as `Err(())` and becomes a
/// [`TokenKind::Bad`] token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum Lexeme {
    /// Decimal digits. The value is parsed afterwards so that overflow can be
    /// reported instead of rejected.
    #[regex(r"[0-9]+")]
    Number,
    /// Any run of whitespace, including tabs and Unicode spaces.
    #[regex(r"\s+")]
    Whitespace,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Number => TokenKind::Number,
            Self::Whitespace => TokenKind::Whitespace,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::OpenParen => TokenKind::OpenParen,
            Self::CloseParen => TokenKind::CloseParen,
        }
    }
}

/// A read position inside one fixed source line.
///
/// Cursors are plain values: [`next_token`] takes one and hands back the
/// cursor for the following token, leaving the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor<'src> {
    text:     &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of `text`.
    #[must_use]
    pub const fn new(text: &'src str) -> Self {
        Self { text, position: 0 }
    }

    /// Byte offset of the next unread character.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns `true` once every character has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }

    fn rest(&self) -> &'src str {
        self.text.get(self.position..).unwrap_or_default()
    }

    const fn advance(self, len: usize) -> Self {
        Self { text:     self.text,
               position: self.position + len, }
    }
}

/// Scans the token that starts at `cursor`.
///
/// Returns the token and the cursor positioned after it. Lexical problems are
/// appended to `diagnostics` and never stop scanning: an unknown character
/// becomes a [`TokenKind::Bad`] token and a number that does not fit in an
/// `i32` still becomes a [`TokenKind::Number`] token, with value `0`.
///
/// Once the input is exhausted every call returns an end-of-input token at
/// `text.len()` together with an unchanged cursor.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     lexer::{Cursor, next_token},
///     token::TokenKind,
/// };
///
/// let mut diagnostics = Vec::new();
/// let (token, cursor) = next_token(Cursor::new("12+3"), &mut diagnostics);
///
/// assert_eq!(token.kind, TokenKind::Number);
/// assert_eq!(token.value, Some(12));
/// assert_eq!(cursor.position(), 2);
/// assert!(diagnostics.is_empty());
/// ```
pub fn next_token<'src>(cursor: Cursor<'src>,
                        diagnostics: &mut Vec<Diagnostic>)
                        -> (Token, Cursor<'src>) {
    let start = cursor.position();
    let rest = cursor.rest();
    let mut lexer = Lexeme::lexer(rest);

    let Some(lexeme) = lexer.next() else {
        return (Token::eof(start), cursor);
    };

    let (token, len) = match lexeme {
        Ok(Lexeme::Number) => {
            let text = lexer.slice();
            (scan_number(text, start, diagnostics), text.len())
        },
        Ok(Lexeme::Whitespace) => {
            (Token::new(TokenKind::Whitespace, start, None, None), lexer.span().end)
        },
        Ok(lexeme) => {
            let text = lexer.slice();
            (Token::new(lexeme.kind(), start, Some(text.to_string()), None), text.len())
        },
        Err(()) => {
            let Some(ch) = rest.chars().next() else {
                return (Token::eof(start), cursor);
            };
            let diagnostic = Diagnostic::bad_character(ch, start);
            log::debug!("{diagnostic}");
            diagnostics.push(diagnostic);
            (Token::new(TokenKind::Bad, start, Some(ch.to_string()), None), ch.len_utf8())
        },
    };

    log::trace!("scanned <{}> at {start}: {:?}", token.kind, token.text);
    (token, cursor.advance(len))
}

/// Converts a digit run into a number token, reporting values that do not
/// fit in an `i32`.
fn scan_number(text: &str, start: usize, diagnostics: &mut Vec<Diagnostic>) -> Token {
    let value = text.parse::<i32>().unwrap_or_else(|_| {
                                       let diagnostic = Diagnostic::invalid_integer(text, start);
                                       log::debug!("{diagnostic}");
                                       diagnostics.push(diagnostic);
                                       0
                                   });
    Token::new(TokenKind::Number, start, Some(text.to_string()), Some(value))
}

/// Scans a whole line.
///
/// The returned tokens include whitespace and bad tokens and always end with
/// exactly one end-of-input token. Diagnostics are in detection order.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let (tokens, diagnostics) = tokenize("1 @");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Whitespace, TokenKind::Bad, TokenKind::Eof]);
/// assert_eq!(diagnostics[0].to_string(), "Bad character '@' at position 2.");
/// ```
#[must_use]
pub fn tokenize(text: &str) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut tokens = Vec::new();
    let mut diagnostics = Vec::new();
    let mut cursor = Cursor::new(text);

    loop {
        let (token, next) = next_token(cursor, &mut diagnostics);
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            break;
        }
        cursor = next;
    }

    (tokens, diagnostics)
}
