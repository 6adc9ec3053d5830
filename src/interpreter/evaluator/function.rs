/// Builtin function implementations.
///
/// Rounding and conversion functions, string functions, `size`, and the
/// classifying predicates `isUndefined` / `isError`.
pub mod builtin;

/// Function table and call evaluation.
///
/// Defines the builtin lookup table, the caller-extensible [`core::FunctionTable`],
/// and function call dispatch with arity checking.
pub mod core;
