/// The evaluator module computes Values from expressions.
///
/// The evaluator traverses the AST against an evaluation context (the owning
/// record and, during matchmaking, a candidate record), resolving attribute
/// references and applying operators under three-valued logic: `Error`
/// dominates `Undefined`, which dominates ordinary results. Evaluation is a
/// pure function of the expression and the context; it never mutates either
/// record or the tree.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Resolves scoped and unscoped attribute references with candidate
///   fallback.
/// - Threads `Error`/`Undefined` through operators per the propagation rules.
pub mod evaluator;
/// The lexer module tokenizes record text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens: numeric literals with optional scale factors, quoted strings,
/// time literals, reserved words, identifiers, operators, and punctuation.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Handles numeric, string, and time literals, identifiers, and operators.
/// - Reports lexical errors (unrecognized or over-long tokens) by position.
pub mod lexer;
/// The matcher module implements the matchmaking predicates.
///
/// Matching pairs a job record with a resource record by evaluating each
/// record's conventional `Requirements` attribute against the other. Both
/// must evaluate to exactly `true` for a symmetric match.
///
/// # Responsibilities
/// - Symmetric and asymmetric Requirements satisfaction.
/// - Rank evaluation for scheduler ordering.
/// - Optional ad-type gating via a caller-owned type registry.
pub mod matcher;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of records and
/// expressions, following a fixed operator precedence chain.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (records, expressions).
/// - Validates grammar and syntax, reporting errors with byte offsets.
/// - Supports attribute references, function calls, lists, nested records.
pub mod parser;
/// The record module defines the attribute container.
///
/// A record is an ordered mapping from case-insensitive attribute name to an
/// owned expression. It is built by parsing text or by explicit insertion,
/// mutated only through whole-attribute insert/delete, and printed back in
/// the record grammar.
///
/// # Responsibilities
/// - Ordered, case-insensitively-unique attribute storage.
/// - Insert/lookup/delete and single-attribute evaluation.
/// - Grammar-conformant serialization that round-trips through the parser.
pub mod record;
/// The registry module maps ad-type names to stable numbers.
///
/// A caller constructs the registry once at startup and treats it as
/// read-only thereafter; components that need type-name-to-number mapping
/// receive a reference to it explicitly.
pub mod registry;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the tagged `Value` variant (`Undefined`, `Error`,
/// booleans, integers, reals, strings, absolute/relative times, lists, and
/// nested records) together with the numeric scale factor applied to
/// literals, meta-equality comparison, and the literal-grammar serializer.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements kind predicates, conversions, and meta-equality.
/// - Prints values in the literal grammar so records round-trip.
pub mod value;
