use crate::{
    ast::BinaryOperator,
    error::{EvalResult, RuntimeError},
    interpreter::token::Token,
};

/// Applies the operator carried by `operator` to two evaluated operands.
///
/// Arithmetic is checked: a result outside the `i32` range is reported as
/// [`RuntimeError::Overflow`] and a zero divisor as
/// [`RuntimeError::DivisionByZero`]. Division truncates toward zero.
///
/// # Errors
/// Also returns [`RuntimeError::UnexpectedOperator`] when the token is not one
/// of `+ - * /`, which only happens for hand-built trees.
pub fn eval_binary_op(operator: &Token, left: i32, right: i32) -> EvalResult<i32> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    let position = operator.position;
    let Some(op) = BinaryOperator::from_kind(operator.kind) else {
        return Err(RuntimeError::UnexpectedOperator { kind: operator.kind,
                                                      position });
    };

    let result = match op {
        Add => left.checked_add(right),
        Sub => left.checked_sub(right),
        Mul => left.checked_mul(right),
        Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { position });
            }
            left.checked_div(right)
        },
    };

    result.ok_or(RuntimeError::Overflow { position })
}
