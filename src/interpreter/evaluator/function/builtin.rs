use crate::{
    interpreter::value::Value,
    util::num::{f64_to_i64_checked, i64_to_f64_checked},
};

/// Standard argument screening for the non-classifying builtins: an `Error`
/// argument makes the call `Error`, otherwise an `Undefined` argument makes
/// it `Undefined`.
fn propagate(args: &[Value]) -> Option<Value> {
    if args.iter().any(Value::is_error) {
        return Some(Value::Error);
    }
    if args.iter().any(Value::is_undefined) {
        return Some(Value::Undefined);
    }
    None
}

/// `floor(x)`: largest integer not above `x`.
///
/// Integers pass through; a real whose floor leaves the exactly-convertible
/// range is `Error`.
pub fn floor(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::Integer(n) => Value::Integer(*n),
        Value::Real(r) => f64_to_i64_checked(r.floor()).map_or(Value::Error, Value::Integer),
        _ => Value::Error,
    }
}

/// `ceiling(x)`: smallest integer not below `x`.
pub fn ceiling(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::Integer(n) => Value::Integer(*n),
        Value::Real(r) => f64_to_i64_checked(r.ceil()).map_or(Value::Error, Value::Integer),
        _ => Value::Error,
    }
}

/// `round(x)`: nearest integer, halves away from zero.
pub fn round(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::Integer(n) => Value::Integer(*n),
        Value::Real(r) => f64_to_i64_checked(r.round()).map_or(Value::Error, Value::Integer),
        _ => Value::Error,
    }
}

/// `int(x)`: conversion to integer.
///
/// Reals truncate toward zero; booleans become 0 or 1; strings parse as a
/// decimal integer; times convert to their second counts.
pub fn int(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::Integer(n) => Value::Integer(*n),
        Value::Real(r) => f64_to_i64_checked(r.trunc()).map_or(Value::Error, Value::Integer),
        Value::Bool(b) => Value::Integer(i64::from(*b)),
        Value::String(s) => s.trim().parse().map_or(Value::Error, Value::Integer),
        Value::RelativeTime(seconds) => Value::Integer(*seconds),
        Value::AbsoluteTime(time) => Value::Integer(time.secs),
        _ => Value::Error,
    }
}

/// `real(x)`: conversion to real.
///
/// Integers and second counts promote exactly or not at all; strings parse
/// as a real number.
pub fn real(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::Real(r) => Value::Real(*r),
        Value::Integer(n) => i64_to_f64_checked(*n).map_or(Value::Error, Value::Real),
        Value::Bool(b) => Value::Real(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Value::Real(parsed),
            _ => Value::Error,
        },
        Value::RelativeTime(seconds) => {
            i64_to_f64_checked(*seconds).map_or(Value::Error, Value::Real)
        },
        Value::AbsoluteTime(time) => {
            i64_to_f64_checked(time.secs).map_or(Value::Error, Value::Real)
        },
        _ => Value::Error,
    }
}

/// `string(x)`: conversion to string.
///
/// A string argument passes through unquoted; anything else renders in the
/// literal grammar.
pub fn string(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::String(s) => Value::String(s.clone()),
        other => Value::String(other.to_string()),
    }
}

/// `strcat(x, ...)`: concatenation of the string forms of all arguments.
pub fn strcat(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    let mut out = String::new();
    for arg in args {
        match arg {
            Value::String(s) => out.push_str(s),
            other => out.push_str(&other.to_string()),
        }
    }
    Value::String(out)
}

/// `substr(s, offset[, length])`: substring by character position.
///
/// A negative `offset` counts back from the end of the string; a negative
/// `length` leaves that many characters off the end. Out-of-range positions
/// clamp rather than fail, so the worst case is an empty string.
pub fn substr(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    let Value::String(s) = &args[0] else {
        return Value::Error;
    };
    let Value::Integer(offset) = args[1] else {
        return Value::Error;
    };

    let chars: Vec<char> = s.chars().collect();
    let Ok(len) = i64::try_from(chars.len()) else {
        return Value::Error;
    };

    let mut start = offset;
    if start < 0 {
        start += len;
    }
    let start = start.clamp(0, len);

    let mut count = len - start;
    if args.len() == 3 {
        let Value::Integer(length) = args[2] else {
            return Value::Error;
        };
        count = if length < 0 { len - start + length } else { length };
    }
    let count = count.clamp(0, len - start);

    let start = usize::try_from(start).unwrap_or(0);
    let count = usize::try_from(count).unwrap_or(0);
    Value::String(chars[start..start + count].iter().collect())
}

/// `toUpper(s)`: uppercase copy of the string.
pub fn to_upper(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::String(s) => Value::String(s.to_uppercase()),
        _ => Value::Error,
    }
}

/// `toLower(s)`: lowercase copy of the string.
pub fn to_lower(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    match &args[0] {
        Value::String(s) => Value::String(s.to_lowercase()),
        _ => Value::Error,
    }
}

/// `size(x)`: character count of a string, element count of a list, or
/// attribute count of a record.
pub fn size(args: &[Value]) -> Value {
    if let Some(screened) = propagate(args) {
        return screened;
    }
    let count = match &args[0] {
        Value::String(s) => s.chars().count(),
        Value::List(elements) => elements.len(),
        Value::Record(record) => record.len(),
        _ => return Value::Error,
    };
    i64::try_from(count).map_or(Value::Error, Value::Integer)
}

/// `isUndefined(x)`: classifying predicate; never propagates.
pub fn is_undefined(args: &[Value]) -> Value {
    Value::Bool(args[0].is_undefined())
}

/// `isError(x)`: classifying predicate; never propagates.
pub fn is_error(args: &[Value]) -> Value {
    Value::Bool(args[0].is_error())
}
