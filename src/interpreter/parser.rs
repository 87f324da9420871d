/// Core parser state and entry point.
///
/// Holds the filtered token buffer, the lookahead helpers and the recovering
/// `match_token` routine shared by every grammar rule.
pub mod core;

/// Binary expression parsing.
///
/// Implements the two left-associative precedence levels: `+`/`-` terms and
/// `*`/`/` factors.
pub mod binary;

/// Primary expression parsing.
///
/// Handles number literals and parenthesized groups, the tightest binding
/// constructs of the grammar.
pub mod primary;
