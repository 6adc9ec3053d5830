/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between integer and
/// floating-point types without risking silent data loss or rounding errors.
/// Use these helpers whenever an `i64` must participate in real-valued
/// arithmetic or a real result must be narrowed back to an integer.
///
/// All functions return an `Option`, which is `Some` if the conversion is
/// lossless and valid, or `None` if the value is out of range. Callers inside
/// the evaluator turn `None` into the in-band `Value::Error`.
pub mod num;
