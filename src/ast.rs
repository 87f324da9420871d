use std::fmt;

use crate::{
    error::Diagnostic,
    interpreter::token::{Token, TokenKind},
};

/// The arithmetic operators a binary expression can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating toward zero.
    Div,
}

impl BinaryOperator {
    /// Maps an operator token kind to its operator.
    ///
    /// Returns `None` for every kind that is not one of `+ - * /`.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Sub),
            TokenKind::Star => Some(Self::Mul),
            TokenKind::Slash => Some(Self::Div),
            _ => None,
        }
    }

    /// `+` and `-`, the loosest binding operators.
    #[must_use]
    pub const fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// `*` and `/`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// The kind of an expression node, derived from its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionKind {
    /// [`ExpressionNode::Number`]
    Number,
    /// [`ExpressionNode::Binary`]
    Binary,
    /// [`ExpressionNode::Parenthesized`]
    Parenthesized,
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "NumberExpression",
            Self::Binary => "BinaryExpression",
            Self::Parenthesized => "ParenthesizedExpression",
        };
        f.write_str(name)
    }
}

/// A node of the expression tree built by the parser.
///
/// Each node owns its children. Operators and delimiters are kept as the
/// tokens they were parsed from, so a tree can be traced back to positions in
/// the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionNode {
    /// An integer literal.
    Number {
        /// The number token.
        token: Token,
    },
    /// Two operands joined by an operator.
    Binary {
        /// Left operand.
        left:     Box<Self>,
        /// The operator token.
        operator: Token,
        /// Right operand.
        right:    Box<Self>,
    },
    /// An expression wrapped in parentheses.
    Parenthesized {
        /// The `(` token.
        open:       Token,
        /// The wrapped expression.
        expression: Box<Self>,
        /// The `)` token, possibly a placeholder.
        close:      Token,
    },
}

impl ExpressionNode {
    /// Gets the node's kind.
    #[must_use]
    pub const fn kind(&self) -> ExpressionKind {
        match self {
            Self::Number { .. } => ExpressionKind::Number,
            Self::Binary { .. } => ExpressionKind::Binary,
            Self::Parenthesized { .. } => ExpressionKind::Parenthesized,
        }
    }

    /// Gets the position of the first token covered by the node.
    ///
    /// ## Example
    /// ```
    /// use reckon::parse;
    ///
    /// let tree = parse("  (1 + 2)");
    /// assert_eq!(tree.root.position(), 2);
    /// ```
    #[must_use]
    pub fn position(&self) -> usize {
        match self {
            Self::Number { token } => token.position,
            Self::Binary { left, .. } => left.position(),
            Self::Parenthesized { open, .. } => open.position,
        }
    }

    /// Lists the node's direct children in source order.
    ///
    /// A number yields its token; a binary expression yields its left
    /// operand, operator and right operand; a parenthesized expression yields
    /// the opening token, the inner expression and the closing token.
    #[must_use]
    pub fn children(&self) -> Vec<SyntaxNode<'_>> {
        match self {
            Self::Number { token } => vec![SyntaxNode::Token(token)],
            Self::Binary { left,
                           operator,
                           right, } => vec![SyntaxNode::Expression(left),
                                            SyntaxNode::Token(operator),
                                            SyntaxNode::Expression(right)],
            Self::Parenthesized { open,
                                  expression,
                                  close, } => vec![SyntaxNode::Token(open),
                                                   SyntaxNode::Expression(expression),
                                                   SyntaxNode::Token(close)],
        }
    }
}

/// A borrowed view of any node in a syntax tree, token or expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode<'a> {
    /// A leaf token.
    Token(&'a Token),
    /// An expression with children of its own.
    Expression(&'a ExpressionNode),
}

impl SyntaxNode<'_> {
    /// Lists the node's children; tokens have none.
    #[must_use]
    pub fn children(&self) -> Vec<Self> {
        match *self {
            Self::Token(_) => Vec::new(),
            Self::Expression(expression) => expression.children(),
        }
    }
}

/// The result of parsing one line.
///
/// A tree is produced even for malformed input; `diagnostics` tells whether it
/// can be trusted. Scanner diagnostics come before parser diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxTree {
    /// Everything that went wrong, in detection order.
    pub diagnostics: Vec<Diagnostic>,
    /// The top-level expression.
    pub root:        ExpressionNode,
    /// The end-of-input token that closed the parse.
    pub eof_token:   Token,
}

impl SyntaxTree {
    /// Returns `true` if the line produced no diagnostics.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
