//! # reckon
//!
//! reckon is an integer arithmetic evaluator written in Rust.
//! It scans, parses and evaluates one line of input made of integers,
//! `+ - * /` and parentheses, reporting malformed input as diagnostics instead
//! of failing on the first problem.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed lines.
///
/// This module declares the `ExpressionNode` enum and related types that
/// represent the syntactic structure of a line as a tree. The tree is built by
/// the parser and traversed by the evaluator and the tree printer.
///
/// # Responsibilities
/// - Defines number, binary and parenthesized expression nodes.
/// - Keeps the source tokens of every node for positions and display.
/// - Exposes each node's children for generic traversal.
pub mod ast;
/// Provides the diagnostic and error types of the pipeline.
///
/// Malformed input is described by diagnostics that are collected while
/// scanning and parsing. Failures during evaluation are runtime errors. Both
/// carry the source position they refer to.
///
/// # Responsibilities
/// - Defines the stable diagnostic messages.
/// - Defines the runtime error enum used by the evaluator.
/// - Combines both into a single error for whole-line evaluation.
pub mod error;
/// Orchestrates scanning, parsing and evaluation.
///
/// This module ties together the lexer, parser and evaluator and the token
/// type they share.
///
/// # Responsibilities
/// - Coordinates the three stages of the pipeline.
/// - Provides entry points for each stage on its own.
pub mod interpreter;
/// The line-at-a-time session behind the interactive prompt.
///
/// Interprets dot-commands, keeps the tree display setting and formats the
/// response for each line.
pub mod repl;
/// General helpers that consume the pipeline's output.
pub mod util;

pub use ast::{ExpressionNode, SyntaxTree};
pub use error::{Diagnostic, ReckonError, RuntimeError};
pub use interpreter::{evaluator::core::evaluate, lexer::tokenize};

use crate::interpreter::parser::core::Parser;

/// Parses one line into a syntax tree.
///
/// A tree is always returned; check its diagnostics before evaluating it.
///
/// # Examples
/// ```
/// use reckon::parse;
///
/// let tree = parse("1+@2");
/// assert_eq!(tree.diagnostics.len(), 1);
/// assert_eq!(tree.diagnostics[0].to_string(), "Bad character '@' at position 2.");
/// ```
#[must_use]
pub fn parse(text: &str) -> SyntaxTree {
    Parser::new(text).parse()
}

/// Returns the value of a line after running the whole pipeline.
///
/// The line is evaluated only if it produced no diagnostics.
///
/// # Errors
/// Returns [`ReckonError::Diagnostics`] if the line is malformed, or
/// [`ReckonError::Runtime`] if evaluation fails, for example on division by
/// zero.
///
/// # Examples
/// ```
/// use reckon::{ReckonError, get_result};
///
/// // Well-formed: the value is returned.
/// assert_eq!(get_result("1 + 2 * 3"), Ok(7));
///
/// // Malformed: evaluation is never attempted.
/// assert!(matches!(get_result("(1 + 2"), Err(ReckonError::Diagnostics(_))));
///
/// // Well-formed, but dividing by zero fails at run time.
/// assert!(matches!(get_result("4 / 0"), Err(ReckonError::Runtime(_))));
/// ```
pub fn get_result(source: &str) -> Result<i32, ReckonError> {
    let tree = parse(source);
    if !tree.is_valid() {
        return Err(ReckonError::Diagnostics(tree.diagnostics));
    }
    Ok(evaluate(&tree.root)?)
}
