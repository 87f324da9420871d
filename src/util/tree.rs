use std::fmt::{self, Write};

use crate::ast::{ExpressionNode, SyntaxNode};

const BRANCH: &str = "├──";
const LAST_BRANCH: &str = "└──";
const PIPE_INDENT: &str = "│   ";
const BLANK_INDENT: &str = "    ";

/// Renders an expression tree as an outline.
///
/// Expressions print their kind, tokens print `<Kind>Token` and number tokens
/// that carry a value append it after an arrow. Lines are separated by `\n`
/// with no trailing newline.
///
/// # Example
/// ```
/// use reckon::{parse, util::tree::render_tree};
///
/// let tree = parse("1+2");
/// let expected = "\
/// └──BinaryExpression
///     ├──NumberExpression
///     │   └──NumberToken -> 1
///     ├──PlusToken
///     └──NumberExpression
///         └──NumberToken -> 2";
///
/// assert_eq!(render_tree(&tree.root), expected);
/// ```
#[must_use]
pub fn render_tree(root: &ExpressionNode) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_node(&mut out, SyntaxNode::Expression(root), "", true);
    out.truncate(out.trim_end_matches('\n').len());
    out
}

fn write_node<W: Write>(out: &mut W, node: SyntaxNode<'_>, indent: &str, is_last: bool) -> fmt::Result {
    let marker = if is_last { LAST_BRANCH } else { BRANCH };
    write!(out, "{indent}{marker}")?;

    match node {
        SyntaxNode::Expression(expression) => write!(out, "{}", expression.kind())?,
        SyntaxNode::Token(token) => {
            write!(out, "{}Token", token.kind)?;
            if let Some(value) = token.value {
                write!(out, " -> {value}")?;
            }
        },
    }
    writeln!(out)?;

    let indent = format!("{indent}{}", if is_last { BLANK_INDENT } else { PIPE_INDENT });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        write_node(out, child, &indent, i + 1 == count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::core::Parser;

    #[test]
    fn parenthesized_tree() {
        let tree = Parser::new("(4)*2").parse();
        let expected = "\
└──BinaryExpression
    ├──ParenthesizedExpression
    │   ├──OpenParenToken
    │   ├──NumberExpression
    │   │   └──NumberToken -> 4
    │   └──CloseParenToken
    ├──StarToken
    └──NumberExpression
        └──NumberToken -> 2";

        assert_eq!(render_tree(&tree.root), expected);
    }

    #[test]
    fn placeholder_number_shows_no_value() {
        let tree = Parser::new("").parse();

        assert_eq!(render_tree(&tree.root), "└──NumberExpression\n    └──NumberToken");
    }
}
