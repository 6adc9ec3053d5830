#[derive(Debug)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant carries the byte offset into the source text where the
/// problem was detected, so a caller parsing a stream of records can report
/// the position and resynchronize at the next record.
pub enum ParseError {
    /// A character sequence matched no token rule.
    UnrecognizedToken {
        /// The offending source text.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A token exceeded the internal length or magnitude bound.
    TokenTooLong {
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// Description of the token encountered.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Byte offset where the input ended.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// An attribute definition was missing its `=`.
    ExpectedAssignment {
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// Found extra tokens after the record should have ended.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token:    String,
        /// Byte offset where the error occurred.
        position: usize,
    },
    /// A numeric literal (after applying its factor) was too large to
    /// represent.
    LiteralTooLarge {
        /// Byte offset where the error occurred.
        position: usize,
    },
}

impl ParseError {
    /// Gets the source byte offset from `self`.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedToken { position, .. }
            | Self::TokenTooLong { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::ExpectedAssignment { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, position } => {
                write!(f, "Error at offset {position}: Unrecognized token: {token}.")
            },

            Self::TokenTooLong { position } => {
                write!(f, "Error at offset {position}: Token exceeds the length bound.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at offset {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),

            Self::ExpectedAssignment { position } => write!(f,
                                                            "Error at offset {position}: Expected '=' after attribute name."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                        "Error at offset {position}: Extra tokens after record. Check your input: {token}"),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at offset {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
