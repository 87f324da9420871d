use crate::{
    ast::SyntaxTree,
    error::Diagnostic,
    interpreter::{
        lexer::tokenize,
        token::{Token, TokenKind},
    },
};

/// A recursive-descent parser over one line of input.
///
/// The whole line is scanned up front. Whitespace and bad tokens are dropped
/// from the buffer; the diagnostics for bad tokens were already recorded by
/// the scanner and are kept separately from the parser's own, so that they
/// can be reported first.
///
/// The buffer always ends with exactly one end-of-input token and lookahead
/// past it keeps returning that token.
#[derive(Debug)]
pub struct Parser {
    tokens:              Vec<Token>,
    position:            usize,
    scanner_diagnostics: Vec<Diagnostic>,
    diagnostics:         Vec<Diagnostic>,
}

impl Parser {
    /// Scans `text` and prepares a parser over its tokens.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let (tokens, scanner_diagnostics) = tokenize(text);
        let tokens = tokens.into_iter()
                           .filter(|t| !matches!(t.kind, TokenKind::Whitespace | TokenKind::Bad))
                           .collect();

        Self { tokens,
               position: 0,
               scanner_diagnostics,
               diagnostics: Vec::new() }
    }

    /// Parses the line as a single expression followed by end of input.
    ///
    /// Never fails: missing tokens are replaced by placeholders and reported
    /// in the tree's diagnostics, scanner diagnostics first.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::parser::core::Parser;
    ///
    /// let tree = Parser::new("1 + 2 )").parse();
    ///
    /// assert_eq!(tree.diagnostics.len(), 1);
    /// assert_eq!(tree.diagnostics[0].to_string(),
    ///            "Unexpected token <CloseParen> at position 6, expected <EOF>.");
    /// ```
    #[must_use]
    pub fn parse(mut self) -> SyntaxTree {
        let root = self.parse_term();
        let eof_token = self.match_token(TokenKind::Eof);

        let mut diagnostics = self.scanner_diagnostics;
        diagnostics.append(&mut self.diagnostics);

        SyntaxTree { diagnostics,
                     root,
                     eof_token }
    }

    /// Returns the token `offset` places after the current one, or the final
    /// end-of-input token if that would run past the buffer.
    pub(crate) fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len().saturating_sub(1);
        &self.tokens[(self.position + offset).min(last)]
    }

    /// Returns the token under the cursor.
    pub(crate) fn current(&self) -> &Token {
        self.peek(0)
    }

    /// Consumes the current token and returns it.
    pub(crate) fn next_token(&mut self) -> Token {
        let token = self.current().clone();
        if self.position < self.tokens.len() {
            self.position += 1;
        }
        token
    }

    /// Consumes the current token if it has the `expected` kind.
    ///
    /// Otherwise records an unexpected-token diagnostic and returns a
    /// placeholder of the expected kind at the current position without
    /// consuming anything, so parsing can continue as if the token had been
    /// there.
    pub(crate) fn match_token(&mut self, expected: TokenKind) -> Token {
        let current = self.current();
        if current.kind == expected {
            return self.next_token();
        }

        let position = current.position;
        let diagnostic = Diagnostic::unexpected_token(current.kind, expected, position);
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
        Token::placeholder(expected, position)
    }
}
