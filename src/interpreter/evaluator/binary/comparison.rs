use crate::{
    ast::BinaryOperator,
    interpreter::value::Value,
    util::num::i64_to_f64_checked,
};

/// Evaluates a relational or equality operator over two ordinary values.
///
/// - Integers and reals compare numerically, promoting a mixed pair; an
///   integer too large to promote exactly is `Error`.
/// - Strings compare byte for byte under every operator, so `==` is exact
///   and case matters.
/// - Booleans support only `==` and `!=`.
/// - Absolute times compare by instant; relative times by signed seconds.
/// - Comparing values of different kinds, or kinds with no ordering (lists,
///   records), is `Error`.
pub(crate) fn eval_comparison(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => compare(op, a, b),
        (Value::Real(a), Value::Real(b)) => compare(op, a, b),
        (Value::Integer(a), Value::Real(b)) => match i64_to_f64_checked(*a) {
            Some(a) => compare(op, &a, b),
            None => Value::Error,
        },
        (Value::Real(a), Value::Integer(b)) => match i64_to_f64_checked(*b) {
            Some(b) => compare(op, a, &b),
            None => Value::Error,
        },
        (Value::String(a), Value::String(b)) => compare(op, a, b),
        (Value::Bool(a), Value::Bool(b))
            if matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual) =>
        {
            compare(op, a, b)
        },
        (Value::AbsoluteTime(a), Value::AbsoluteTime(b)) => compare(op, &a.secs, &b.secs),
        (Value::RelativeTime(a), Value::RelativeTime(b)) => compare(op, a, b),
        _ => Value::Error,
    }
}

/// Applies one comparison operator through `PartialOrd`.
///
/// Real comparisons keep IEEE semantics: every comparison against a NaN is
/// false except `!=`, which is true.
fn compare<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> Value {
    let result = match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        BinaryOperator::GreaterEqual => a >= b,
        BinaryOperator::Equal => a == b,
        BinaryOperator::NotEqual => a != b,
        _ => return Value::Error,
    };
    Value::Bool(result)
}
