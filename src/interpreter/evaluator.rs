/// Core evaluation logic.
///
/// Walks the expression tree and dispatches on each node variant.
pub mod core;

/// Binary operator evaluation.
///
/// Applies `+`, `-`, `*` and `/` to two already evaluated operands with
/// overflow and division-by-zero checks.
pub mod binary;
