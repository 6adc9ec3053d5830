use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list constructors and function argument lists.
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `lexer`: Lexer positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `}` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
    lexer: &mut Lexer<'_>,
    parse_item: impl Fn(&mut Lexer<'_>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
{
    let mut items = Vec::new();
    if let Some((token, _)) = lexer.peek_token()?
       && token == *closing
    {
        lexer.consume_token()?;

        return Ok(items);
    }
    loop {
        items.push(parse_item(lexer)?);
        match lexer.consume_token()? {
            Some((Token::Comma, _)) => {},
            Some((token, _)) if token == *closing => break,
            Some((token, position)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {token:?}"),
                                                         position });
            },
            None => {
                return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// The next token must be `Token::Identifier`. Reserved words do not lex as
/// identifiers, so they are rejected here as a side effect.
///
/// # Parameters
/// - `lexer`: Lexer positioned at an identifier.
///
/// # Returns
/// A `String` containing the identifier.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter) fn parse_identifier(lexer: &mut Lexer<'_>) -> ParseResult<String> {
    match lexer.consume_token()? {
        Some((Token::Identifier(name), _)) => Ok(name),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { token: format!("Expected identifier, found {token:?}"),
                                              position })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() }),
    }
}
