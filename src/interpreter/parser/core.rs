use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{binary::parse_logical_or, utils::parse_identifier},
        record::Record,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete record: `'[' (name '=' expression ';')* ']'`.
///
/// This is the entry point for record parsing. The semicolon after the last
/// attribute is optional; attribute names repeated case-insensitively keep
/// the last definition.
///
/// # Parameters
/// - `lexer`: Lexer positioned at the opening `[`.
///
/// # Returns
/// The parsed record.
///
/// # Errors
/// - `UnexpectedToken` if the input does not start with `[`.
/// - `ExpectedAssignment` if an attribute name is not followed by `=`.
/// - `UnexpectedEndOfInput` if the record is not closed.
/// - Propagates any errors from attribute expression parsing.
pub fn parse_record(lexer: &mut Lexer<'_>) -> ParseResult<Record> {
    match lexer.consume_token()? {
        Some((Token::LBracket, _)) => {},
        Some((token, position)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '[', found {token:?}"),
                                                     position });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
        },
    }

    let mut record = Record::new();
    loop {
        if let Some((Token::RBracket, _)) = lexer.peek_token()? {
            lexer.consume_token()?;
            break;
        }

        let name = parse_identifier(lexer)?;

        match lexer.consume_token()? {
            Some((Token::Equals, _)) => {},
            Some((_, position)) => return Err(ParseError::ExpectedAssignment { position }),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
            },
        }

        let expr = parse_expression(lexer)?;
        record.insert(name, expr);

        match lexer.peek_token()? {
            Some((Token::Semicolon, _)) => {
                lexer.consume_token()?;
            },
            Some((Token::RBracket, _)) => {},
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ';' or ']', found {token:?}"),
                                                         position });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
            },
        }
    }

    Ok(record)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Conditionals bind loosest,
/// so it starts with the `?:` level and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := ternary`
///
/// # Parameters
/// - `lexer`: Lexer positioned at the start of the expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    parse_ternary(lexer)
}

/// Parses a conditional expression `condition ? if_true : if_false`.
///
/// The branches are full expressions, so conditionals nest right:
/// `a ? b : c ? d : e` parses as `a ? b : (c ? d : e)`.
///
/// Grammar: `ternary := logical_or ("?" expression ":" expression)?`
///
/// # Parameters
/// - `lexer`: Lexer positioned at the start of the condition.
///
/// # Returns
/// An `Expr::Ternary` node, or the bare condition when no `?` follows.
///
/// # Errors
/// - `UnexpectedToken` if the `:` separating the branches is missing.
/// - Propagates any errors from branch parsing.
pub fn parse_ternary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let condition = parse_logical_or(lexer)?;

    if let Some((Token::Question, position)) = lexer.peek_token()? {
        lexer.consume_token()?;
        let if_true = parse_expression(lexer)?;

        match lexer.consume_token()? {
            Some((Token::Colon, _)) => {},
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ':' in conditional, found {token:?}"),
                                                         position });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
            },
        }

        let if_false = parse_expression(lexer)?;
        return Ok(Expr::Ternary { condition: Box::new(condition),
                                  if_true:   Box::new(if_true),
                                  if_false:  Box::new(if_false),
                                  position });
    }

    Ok(condition)
}
