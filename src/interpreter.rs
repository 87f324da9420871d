/// The evaluator module computes the value of a parsed line.
///
/// The evaluator walks the expression tree produced by the parser, applying
/// each operator to its already evaluated operands. It is the last stage of
/// the pipeline and only runs on lines that parsed without diagnostics.
///
/// # Responsibilities
/// - Evaluates number, binary and parenthesized nodes.
/// - Reports division by zero and overflow as runtime errors.
pub mod evaluator;
/// The lexer module tokenizes a source line for the parser.
///
/// The lexer reads the raw text and produces tokens for numbers, whitespace,
/// operators and parentheses, each tagged with its byte position. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input characters into tokens through an explicit cursor.
/// - Reports unknown characters and oversized integer literals as
///   diagnostics while continuing to scan.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the tree that represents the precedence structure of the line.
///
/// # Responsibilities
/// - Applies the operator precedence and left associativity of the grammar.
/// - Recovers from missing tokens with placeholders and records diagnostics.
pub mod parser;
/// Token definitions shared by the lexer, parser and evaluator.
pub mod token;
