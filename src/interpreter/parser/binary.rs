use crate::{
    ast::{BinaryOperator, ExpressionNode},
    interpreter::parser::core::Parser,
};

impl Parser {
    /// Parses addition and subtraction expressions.
    ///
    /// Handles the left-associative operators `+` and `-`, so `1 - 2 - 3`
    /// groups as `(1 - 2) - 3`.
    ///
    /// The rule is: `term := factor (("+" | "-") factor)*`
    pub(crate) fn parse_term(&mut self) -> ExpressionNode {
        let mut left = self.parse_factor();
        while self.current_operator()
                  .is_some_and(BinaryOperator::is_additive)
        {
            let operator = self.next_token();
            let right = self.parse_factor();
            left = ExpressionNode::Binary { left: Box::new(left),
                                            operator,
                                            right: Box::new(right) };
        }
        left
    }

    /// Parses multiplication and division expressions.
    ///
    /// Binds tighter than [`Parser::parse_term`] and is likewise
    /// left-associative.
    ///
    /// The rule is: `factor := primary (("*" | "/") primary)*`
    pub(crate) fn parse_factor(&mut self) -> ExpressionNode {
        let mut left = self.parse_primary();
        while self.current_operator()
                  .is_some_and(BinaryOperator::is_multiplicative)
        {
            let operator = self.next_token();
            let right = self.parse_primary();
            left = ExpressionNode::Binary { left: Box::new(left),
                                            operator,
                                            right: Box::new(right) };
        }
        left
    }

    fn current_operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::from_kind(self.current().kind)
    }
}
