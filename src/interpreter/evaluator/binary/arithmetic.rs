use crate::{
    ast::BinaryOperator,
    interpreter::value::{AbsTime, Value},
    util::num::i64_to_f64_checked,
};

/// Evaluates an arithmetic operator over two ordinary values.
///
/// Numeric rules:
/// - two integers stay integral, with checked arithmetic (overflow is
///   `Error`), except that `/` always promotes to a real quotient;
/// - a mixed integer/real pair promotes the integer, and an integer too
///   large to promote exactly is `Error`;
/// - division and modulus by zero are `Error` for integers and reals alike.
///
/// Time rules:
/// - absolute − absolute is the relative time between them;
/// - absolute ± relative shifts the timestamp, keeping its display offset;
/// - relative ± relative is a relative time.
///
/// Every other operand combination is `Error`.
pub(crate) fn eval_arithmetic(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => integer_arithmetic(op, *a, *b),
        (Value::Real(a), Value::Real(b)) => real_arithmetic(op, *a, *b),
        (Value::Integer(a), Value::Real(b)) => match i64_to_f64_checked(*a) {
            Some(a) => real_arithmetic(op, a, *b),
            None => Value::Error,
        },
        (Value::Real(a), Value::Integer(b)) => match i64_to_f64_checked(*b) {
            Some(b) => real_arithmetic(op, *a, b),
            None => Value::Error,
        },
        (Value::AbsoluteTime(a), Value::AbsoluteTime(b))
            if matches!(op, BinaryOperator::Sub) =>
        {
            a.secs.checked_sub(b.secs).map_or(Value::Error, Value::RelativeTime)
        },
        (Value::AbsoluteTime(a), Value::RelativeTime(delta)) => {
            let shifted = match op {
                BinaryOperator::Add => a.secs.checked_add(*delta),
                BinaryOperator::Sub => a.secs.checked_sub(*delta),
                _ => None,
            };
            shifted.map_or(Value::Error, |secs| {
                       Value::AbsoluteTime(AbsTime { secs, offset: a.offset })
                   })
        },
        (Value::RelativeTime(delta), Value::AbsoluteTime(a))
            if matches!(op, BinaryOperator::Add) =>
        {
            a.secs.checked_add(*delta).map_or(Value::Error, |secs| {
                       Value::AbsoluteTime(AbsTime { secs, offset: a.offset })
                   })
        },
        (Value::RelativeTime(a), Value::RelativeTime(b)) => {
            let result = match op {
                BinaryOperator::Add => a.checked_add(*b),
                BinaryOperator::Sub => a.checked_sub(*b),
                _ => None,
            };
            result.map_or(Value::Error, Value::RelativeTime)
        },
        _ => Value::Error,
    }
}

/// Evaluates a bitwise or shift operator; both operands must be integers.
///
/// Shift counts outside `0..64` are `Error`. `>>` is an arithmetic shift;
/// `>>>` shifts through the unsigned representation, filling with zeros.
#[allow(clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap)]
pub(crate) fn eval_bitwise(op: BinaryOperator, lhs: &Value, rhs: &Value) -> Value {
    let (Value::Integer(a), Value::Integer(b)) = (lhs, rhs) else {
        return Value::Error;
    };

    match op {
        BinaryOperator::BitAnd => Value::Integer(a & b),
        BinaryOperator::BitOr => Value::Integer(a | b),
        BinaryOperator::BitXor => Value::Integer(a ^ b),
        BinaryOperator::LeftShift | BinaryOperator::RightShift | BinaryOperator::URightShift => {
            if !(0..64).contains(b) {
                return Value::Error;
            }
            let shift = *b as u32;
            match op {
                BinaryOperator::LeftShift => Value::Integer(a << shift),
                BinaryOperator::RightShift => Value::Integer(a >> shift),
                _ => Value::Integer(((*a as u64) >> shift) as i64),
            }
        },
        _ => Value::Error,
    }
}

/// Checked integer arithmetic; `/` promotes to a real quotient.
fn integer_arithmetic(op: BinaryOperator, a: i64, b: i64) -> Value {
    match op {
        BinaryOperator::Add => a.checked_add(b).map_or(Value::Error, Value::Integer),
        BinaryOperator::Sub => a.checked_sub(b).map_or(Value::Error, Value::Integer),
        BinaryOperator::Mul => a.checked_mul(b).map_or(Value::Error, Value::Integer),
        BinaryOperator::Div => {
            if b == 0 {
                return Value::Error;
            }
            match (i64_to_f64_checked(a), i64_to_f64_checked(b)) {
                (Some(a), Some(b)) => Value::Real(a / b),
                _ => Value::Error,
            }
        },
        BinaryOperator::Mod => {
            if b == 0 {
                return Value::Error;
            }
            a.checked_rem(b).map_or(Value::Error, Value::Integer)
        },
        _ => Value::Error,
    }
}

/// Real arithmetic; division and modulus by zero are `Error` rather than an
/// infinity or a NaN.
fn real_arithmetic(op: BinaryOperator, a: f64, b: f64) -> Value {
    match op {
        BinaryOperator::Add => Value::Real(a + b),
        BinaryOperator::Sub => Value::Real(a - b),
        BinaryOperator::Mul => Value::Real(a * b),
        BinaryOperator::Div => {
            if b == 0.0 {
                Value::Error
            } else {
                Value::Real(a / b)
            }
        },
        BinaryOperator::Mod => {
            if b == 0.0 {
                Value::Error
            } else {
                Value::Real(a % b)
            }
        },
        _ => Value::Error,
    }
}
