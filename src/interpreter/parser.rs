/// Binary operator parsing.
///
/// Implements the full left-associative precedence chain, from logical OR
/// down to multiplication, plus the token-to-operator mapping.
pub mod binary;

/// Core parsing entry points.
///
/// Contains the record parser, the expression entry point, and conditional
/// (`?:`) parsing.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles prefix operators, literals (with scale-factor folding), attribute
/// references, function calls, grouping, and list/record constructors.
pub mod unary;

/// Utility functions for the parser.
///
/// Provides shared helpers for identifiers and comma-separated lists.
pub mod utils;
