use crate::{
    ast::ExpressionNode,
    error::EvalResult,
    interpreter::evaluator::binary::eval_binary_op,
};

/// Evaluates an expression tree to an integer.
///
/// The tree is expected to come from a parse without diagnostics; the
/// evaluator does not look for placeholder tokens and treats a number without
/// a value as `0`. Operands are evaluated left before right.
///
/// # Errors
/// Returns a [`RuntimeError`] on division by zero, on integer overflow, or if
/// a binary node carries a token that is not an arithmetic operator.
///
/// # Example
/// ```
/// use reckon::{evaluate, parse};
///
/// let tree = parse("(1 + 2) * 3");
/// assert!(tree.diagnostics.is_empty());
/// assert_eq!(evaluate(&tree.root), Ok(9));
/// ```
pub fn evaluate(node: &ExpressionNode) -> EvalResult<i32> {
    match node {
        ExpressionNode::Number { token } => Ok(token.value.unwrap_or_default()),
        ExpressionNode::Binary { left,
                                 operator,
                                 right, } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;
            eval_binary_op(operator, left, right).inspect_err(|err| log::debug!("evaluation failed: {err}"))
        },
        ExpressionNode::Parenthesized { expression, .. } => evaluate(expression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::RuntimeError,
        interpreter::{
            parser::core::Parser,
            token::{Token, TokenKind},
        },
    };

    fn eval(text: &str) -> EvalResult<i32> {
        let tree = Parser::new(text).parse();
        assert!(tree.is_valid(), "unexpected diagnostics for {text:?}: {:?}", tree.diagnostics);
        evaluate(&tree.root)
    }

    #[test]
    fn precedence_and_grouping() {
        assert_eq!(eval("1+2*3"), Ok(7));
        assert_eq!(eval("(1+2)*3"), Ok(9));
        assert_eq!(eval("2*(3+4)*5"), Ok(70));
    }

    #[test]
    fn left_associativity() {
        assert_eq!(eval("1-2-3"), Ok(-4));
        assert_eq!(eval("10/2/5"), Ok(1));
        assert_eq!(eval("100 - 10 * 3 - 1"), Ok(69));
    }

    #[test]
    fn division_truncates_toward_zero() {
        assert_eq!(eval("7/2"), Ok(3));
        assert_eq!(eval("(0-7)/2"), Ok(-3));
    }

    #[test]
    fn division_by_zero_is_a_runtime_error() {
        assert_eq!(eval("4/0"), Err(RuntimeError::DivisionByZero { position: 1 }));
        assert_eq!(eval("1 + 8 / (2 - 2)"),
                   Err(RuntimeError::DivisionByZero { position: 6 }));
    }

    #[test]
    fn placeholder_numbers_evaluate_as_zero() {
        let tree = Parser::new("5 +").parse();

        assert!(!tree.is_valid());
        assert_eq!(evaluate(&tree.root), Ok(5));
    }

    #[test]
    fn non_operator_token_is_rejected() {
        let number = |v: i32| {
            Box::new(ExpressionNode::Number { token: Token::new(TokenKind::Number,
                                                                0,
                                                                Some(v.to_string()),
                                                                Some(v)), })
        };
        let node = ExpressionNode::Binary { left:     number(1),
                                            operator: Token::placeholder(TokenKind::Bad, 1),
                                            right:    number(2), };

        assert_eq!(evaluate(&node),
                   Err(RuntimeError::UnexpectedOperator { kind:     TokenKind::Bad,
                                                          position: 1, }));
    }
}
