/// Text rendering of syntax trees.
///
/// Draws a parsed expression as an indented outline, one node per line, the
/// way the interactive session shows it when tree display is on.
pub mod tree;
