/// Core evaluation logic for expressions and values.
///
/// Contains the evaluation context, the expression dispatcher, and attribute
/// reference resolution.
pub mod core;

/// Unary operator evaluation.
///
/// Handles all operations that take a single operand: negation, logical not,
/// and bitwise complement.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all binary operations, including arithmetic,
/// comparisons, bitwise operators, and three-valued logic.
pub mod binary;

/// Function call evaluation.
///
/// Holds the builtin function table, the caller-extensible function registry,
/// and the builtin implementations themselves.
pub mod function;
