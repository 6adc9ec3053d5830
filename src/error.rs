/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of record
/// text. Parse errors include unrecognized or over-long tokens, syntax
/// mistakes, unexpected tokens, and invalid literals: everything detected
/// before evaluation. Evaluation itself never raises a Rust error: ill-typed
/// or erroneous expressions evaluate to the in-band `Value::Error`.
pub mod parse_error;

pub use parse_error::ParseError;
