//! # admatch
//!
//! admatch is a record-and-expression matchmaking language written in Rust.
//! It parses attribute records ("ads"), evaluates their expressions under
//! three-valued logic, and pairs records whose `Requirements` accept each
//! other.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Lexer, parser::core, record::Record},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of record expressions as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression node types for all language constructs.
/// - Attaches source byte offsets to AST nodes for error reporting.
/// - Prints nodes back in the expression grammar.
pub mod ast;
/// Provides the error types for lexing and parsing.
///
/// This module defines all errors that can be raised while turning record
/// text into a parsed record. Evaluation has no error type of its own: its
/// failures are the in-band `Undefined` and `Error` values.
///
/// # Responsibilities
/// - Defines the `ParseError` enum for all lexer and parser failure modes.
/// - Attaches byte offsets and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates parsing, evaluation, and matchmaking.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, the record container, and the matcher to provide a
/// complete runtime for the record language.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, records.
/// - Provides the matchmaking predicates built on attribute evaluation.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// parser and evaluator, chiefly exact conversions between `i64` and `f64`.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Parses a complete record from source text.
///
/// The text must contain exactly one record and nothing else; trailing
/// tokens are an error so that a truncated or concatenated input never
/// silently half-parses.
///
/// # Errors
/// Returns a `ParseError` with the byte offset of the problem if the text
/// does not lex or does not form a single well-formed record.
///
/// # Examples
/// ```
/// use admatch::parse;
///
/// let record = parse("[ Memory = 2048; Arch = \"X86_64\"; ]").unwrap();
/// assert_eq!(record.len(), 2);
///
/// // Trailing garbage is rejected.
/// assert!(parse("[ Memory = 2048; ] extra").is_err());
/// ```
pub fn parse(source: &str) -> Result<Record, ParseError> {
    let mut lexer = Lexer::new(source);
    let record = core::parse_record(&mut lexer)?;
    ensure_consumed(&mut lexer)?;
    Ok(record)
}

/// Parses a single bare expression from source text.
///
/// Useful for evaluating ad-hoc queries against a record without wrapping
/// them in an attribute. Trailing tokens are an error.
///
/// # Errors
/// Returns a `ParseError` if the text does not form a single expression.
///
/// # Examples
/// ```
/// use admatch::parse_expression_text;
///
/// let expr = parse_expression_text("(2 + 2) * 10K").unwrap();
/// assert_eq!(expr.to_string(), "((2 + 2) * 10000)");
/// ```
pub fn parse_expression_text(source: &str) -> Result<Expr, ParseError> {
    let mut lexer = Lexer::new(source);
    let expr = core::parse_expression(&mut lexer)?;
    ensure_consumed(&mut lexer)?;
    Ok(expr)
}

/// Rejects any tokens left after a completed parse.
fn ensure_consumed(lexer: &mut Lexer<'_>) -> Result<(), ParseError> {
    match lexer.peek_token()? {
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                       position })
        },
        None => Ok(()),
    }
}
