use crate::{
    ast::ExpressionNode,
    interpreter::{parser::core::Parser, token::TokenKind},
};

impl Parser {
    /// Parses a number literal or a parenthesized expression.
    ///
    /// The rule is: `primary := "(" term ")" | NUMBER`
    ///
    /// A missing `)` or number is reported and replaced by a placeholder
    /// token; the returned node is always complete.
    pub(crate) fn parse_primary(&mut self) -> ExpressionNode {
        if self.current().kind == TokenKind::OpenParen {
            let open = self.next_token();
            let expression = self.parse_term();
            let close = self.match_token(TokenKind::CloseParen);
            return ExpressionNode::Parenthesized { open,
                                                   expression: Box::new(expression),
                                                   close };
        }

        let token = self.match_token(TokenKind::Number);
        ExpressionNode::Number { token }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        ast::ExpressionNode,
        interpreter::{parser::core::Parser, token::TokenKind},
    };

    #[test]
    fn unterminated_group_is_closed_by_a_placeholder() {
        let tree = Parser::new("(1+2").parse();

        assert_eq!(tree.diagnostics.len(), 1);
        assert!(tree.diagnostics[0].to_string().contains("expected <CloseParen>"));
        let ExpressionNode::Parenthesized { close, .. } = &tree.root else {
            panic!("expected a parenthesized root");
        };
        assert!(close.is_placeholder());
        assert_eq!(close.kind, TokenKind::CloseParen);
        assert_eq!(close.position, 4);
    }

    #[test]
    fn nested_groups() {
        let tree = Parser::new("((7))").parse();

        assert!(tree.is_valid());
        let ExpressionNode::Parenthesized { expression, .. } = &tree.root else {
            panic!("expected a parenthesized root");
        };
        assert!(matches!(**expression, ExpressionNode::Parenthesized { .. }));
    }

    #[test]
    fn empty_group_reports_missing_number() {
        let tree = Parser::new("()").parse();

        assert_eq!(tree.diagnostics[0].to_string(),
                   "Unexpected token <CloseParen> at position 1, expected <Number>.");
        assert_eq!(tree.diagnostics.len(), 1);
    }
}
