/// Arithmetic and bitwise evaluation.
///
/// Numeric promotion, checked integer arithmetic, time arithmetic, and the
/// integer-only bitwise and shift operators.
pub mod arithmetic;

/// Comparison evaluation.
///
/// Relational and equality operators over numbers, strings, booleans, and
/// times.
pub mod comparison;

/// Binary dispatch.
///
/// Routes each operator class to its evaluation rule and applies the
/// `Error`-over-`Undefined` propagation for strict operators.
pub mod core;

/// Three-valued logical connectives.
///
/// `&&` and `||`, including the determining-operand short circuit.
pub mod logic;
