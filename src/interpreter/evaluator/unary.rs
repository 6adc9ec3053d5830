use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{evaluator::core::EvalContext, value::Value},
};

impl EvalContext<'_> {
    /// Evaluates a unary operation.
    ///
    /// `Undefined` and `Error` operands pass through unchanged; applying an
    /// operator to a value of the wrong kind yields `Error`.
    ///
    /// Supported combinations:
    /// - `-` on integers (checked), reals, and relative times;
    /// - `!` on booleans;
    /// - `~` on integers.
    pub(crate) fn eval_unary_op(&self, op: UnaryOperator, expr: &Expr, depth: usize) -> Value {
        match self.eval_at_depth(expr, depth) {
            Value::Undefined => Value::Undefined,
            Value::Error => Value::Error,
            value => apply_unary(op, value),
        }
    }
}

/// Applies a unary operator to an ordinary (non-`Undefined`, non-`Error`)
/// value.
fn apply_unary(op: UnaryOperator, value: Value) -> Value {
    match (op, value) {
        (UnaryOperator::Minus, Value::Integer(n)) => {
            // -i64::MIN has no representation
            n.checked_neg().map_or(Value::Error, Value::Integer)
        },
        (UnaryOperator::Minus, Value::Real(r)) => Value::Real(-r),
        (UnaryOperator::Minus, Value::RelativeTime(seconds)) => {
            seconds.checked_neg().map_or(Value::Error, Value::RelativeTime)
        },
        (UnaryOperator::Not, Value::Bool(b)) => Value::Bool(!b),
        (UnaryOperator::BitNot, Value::Integer(n)) => Value::Integer(!n),
        _ => Value::Error,
    }
}
