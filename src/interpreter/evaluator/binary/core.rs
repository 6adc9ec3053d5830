use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        evaluator::{
            binary::{arithmetic, comparison},
            core::EvalContext,
        },
        value::Value,
    },
};

impl EvalContext<'_> {
    /// Evaluates a binary operation.
    ///
    /// Dispatch is by operator class:
    /// - the logical connectives get lazy, three-valued treatment;
    /// - the meta-equality operators evaluate both sides and always produce
    ///   a boolean, even over `Undefined` and `Error`;
    /// - every other operator is strict: both operands are evaluated, an
    ///   `Error` operand makes the result `Error`, an `Undefined` operand
    ///   makes it `Undefined`, and only then does the typed rule apply.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 depth: usize)
                                 -> Value {
        match op {
            BinaryOperator::And | BinaryOperator::Or => {
                self.eval_logical(left, op, right, depth)
            },
            BinaryOperator::MetaEqual | BinaryOperator::MetaNotEqual => {
                let lhs = self.eval_at_depth(left, depth);
                let rhs = self.eval_at_depth(right, depth);
                let same = lhs.same_as(&rhs);
                Value::Bool(if matches!(op, BinaryOperator::MetaEqual) {
                                same
                            } else {
                                !same
                            })
            },
            op => {
                let lhs = self.eval_at_depth(left, depth);
                let rhs = self.eval_at_depth(right, depth);

                if lhs.is_error() || rhs.is_error() {
                    return Value::Error;
                }
                if lhs.is_undefined() || rhs.is_undefined() {
                    return Value::Undefined;
                }

                match op {
                    BinaryOperator::Add
                    | BinaryOperator::Sub
                    | BinaryOperator::Mul
                    | BinaryOperator::Div
                    | BinaryOperator::Mod => arithmetic::eval_arithmetic(op, &lhs, &rhs),
                    BinaryOperator::BitAnd
                    | BinaryOperator::BitOr
                    | BinaryOperator::BitXor
                    | BinaryOperator::LeftShift
                    | BinaryOperator::RightShift
                    | BinaryOperator::URightShift => arithmetic::eval_bitwise(op, &lhs, &rhs),
                    BinaryOperator::Less
                    | BinaryOperator::LessEqual
                    | BinaryOperator::Greater
                    | BinaryOperator::GreaterEqual
                    | BinaryOperator::Equal
                    | BinaryOperator::NotEqual => comparison::eval_comparison(op, &lhs, &rhs),
                    _ => Value::Error,
                }
            },
        }
    }
}
