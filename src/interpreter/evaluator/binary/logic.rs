use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{evaluator::core::EvalContext, value::Value},
};

impl EvalContext<'_> {
    /// Evaluates a logical connective (`&&` or `||`) under three-valued
    /// logic.
    ///
    /// The right operand is skipped only when the left operand is a boolean
    /// that determines the result on its own: `false && x` is `false` and
    /// `true || x` is `true` no matter what `x` would have been, including
    /// an `Error`. In every other case both operands are evaluated and the
    /// propagation rules apply: a non-boolean operand is an `Error` operand,
    /// `Error` dominates `Undefined`, and `Undefined` dominates a boolean
    /// result.
    pub(crate) fn eval_logical(&self,
                               left: &Expr,
                               op: BinaryOperator,
                               right: &Expr,
                               depth: usize)
                               -> Value {
        let lhs = self.eval_at_depth(left, depth);

        match (op, &lhs) {
            (BinaryOperator::And, Value::Bool(false)) => return Value::Bool(false),
            (BinaryOperator::Or, Value::Bool(true)) => return Value::Bool(true),
            _ => {},
        }

        let rhs = self.eval_at_depth(right, depth);
        combine(op, &lhs, &rhs)
    }
}

/// Combines two fully evaluated logical operands.
fn combine(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    let left = as_logic_operand(lhs);
    let right = as_logic_operand(rhs);

    if matches!(left, Value::Error) || matches!(right, Value::Error) {
        return Value::Error;
    }
    if matches!(left, Value::Undefined) || matches!(right, Value::Undefined) {
        return Value::Undefined;
    }

    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Value::Bool(match op {
                                                            BinaryOperator::And => a && b,
                                                            _ => a || b,
                                                        }),
        _ => Value::Error,
    }
}

/// Normalizes a value for logical combination: booleans, `Undefined` and
/// `Error` stand for themselves, anything else is an `Error` operand.
const fn as_logic_operand(value: &Value) -> Value {
    match value {
        Value::Bool(b) => Value::Bool(*b),
        Value::Undefined => Value::Undefined,
        _ => Value::Error,
    }
}
