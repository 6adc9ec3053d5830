use crate::{
    ast::{AttributeScope, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            core::{ParseResult, parse_expression, parse_record},
            utils::{parse_comma_separated, parse_identifier},
        },
        value::Value,
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
/// - `~`  (bitwise complement)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!" | "~") unary
///            | primary
/// ```
/// # Parameters
/// - `lexer`: Lexer with single-token lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    if let Some((token, position)) = lexer.peek_token()? {
        let op = match token {
            Token::Minus => Some(UnaryOperator::Minus),
            Token::Bang => Some(UnaryOperator::Not),
            Token::Tilde => Some(UnaryOperator::BitNot),
            _ => None,
        };

        if let Some(op) = op {
            lexer.consume_token()?;
            let expr = parse_unary(lexer)?;
            return Ok(Expr::UnaryOp { op,
                                      expr: Box::new(expr),
                                      position });
        }
    }

    parse_primary(lexer)
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - literals (numbers, strings, booleans, times, `undefined`, `error`)
/// - attribute references, plain or scope-qualified
/// - function calls
/// - parenthesized expressions
/// - list constructors (`{ ... }`)
/// - nested record constructors (`[ ... ]`)
///
/// This function does not handle unary or binary operators. It dispatches to
/// specialized parsing functions depending on the leading token.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier_expression
///              | "(" expression ")"
///              | "{" elements "}"
///              | record
/// ```
/// # Parameters
/// - `lexer`: Lexer positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some((token, position)) = lexer.peek_token()? else {
        return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
    };

    match token {
        Token::Integer(..)
        | Token::Real(..)
        | Token::Bool(..)
        | Token::Undefined
        | Token::ErrorValue
        | Token::String(..)
        | Token::AbsoluteTime(..)
        | Token::RelativeTime(..) => parse_literal(lexer),
        Token::Identifier(_) => parse_identifier_expression(lexer),
        Token::LParen => parse_grouping(lexer),
        Token::LBrace => parse_list_literal(lexer),
        Token::LBracket => {
            let record = parse_record(lexer)?;
            Ok(Expr::RecordCtor { record: Box::new(record),
                                  position })
        },
        token => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                   position }),
    }
}

/// Parses a literal token into an [`Expr::Literal`], folding numeric scale
/// factors into the value.
///
/// `10K` becomes the integer `10000` and `2.5M` the real `2500000.0`; a
/// folded integer that leaves the 64-bit range is a `LiteralTooLarge` error
/// rather than a wrapped value.
///
/// # Parameters
/// - `lexer`: Lexer positioned at a literal token.
///
/// # Returns
/// The literal expression node.
///
/// # Errors
/// - `LiteralTooLarge` if applying the scale factor overflows.
#[allow(clippy::cast_precision_loss)]
fn parse_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some((token, position)) = lexer.consume_token()? else {
        return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
    };

    let value = match token {
        Token::Integer((value, factor)) => {
            let folded = value.checked_mul(factor.multiplier())
                              .ok_or(ParseError::LiteralTooLarge { position })?;
            Value::Integer(folded)
        },
        Token::Real((value, factor)) => {
            let scaled = value * factor.multiplier() as f64;
            if !scaled.is_finite() {
                return Err(ParseError::LiteralTooLarge { position });
            }
            Value::Real(scaled)
        },
        Token::Bool(b) => Value::Bool(b),
        Token::Undefined => Value::Undefined,
        Token::ErrorValue => Value::Error,
        Token::String(s) => Value::String(s),
        Token::AbsoluteTime(time) => Value::AbsoluteTime(time),
        Token::RelativeTime(seconds) => Value::RelativeTime(seconds),
        token => {
            return Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                     position });
        },
    };

    Ok(Expr::Literal { value, position })
}

/// Parses an expression that begins with an identifier.
///
/// Dispatches between three forms:
/// - `my.Name` / `self.Name` / `other.Name` / `target.Name`: a
///   scope-qualified attribute reference (the keywords are
///   case-insensitive);
/// - `Name(arguments...)`: a function call;
/// - `Name`: an unscoped attribute reference.
///
/// The scope keywords are only special directly before a `.`; an attribute
/// may itself be named `target`.
///
/// # Parameters
/// - `lexer`: Lexer positioned at the identifier.
///
/// # Returns
/// An [`Expr::AttributeRef`] or [`Expr::FunctionCall`] node.
fn parse_identifier_expression(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some((Token::Identifier(name), position)) = lexer.consume_token()? else {
        return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
    };

    if let Some(scope) = scope_for_keyword(&name)
       && let Some((Token::Dot, _)) = lexer.peek_token()?
    {
        lexer.consume_token()?;
        let attribute = parse_identifier(lexer)?;
        return Ok(Expr::AttributeRef { name: attribute,
                                       scope,
                                       position });
    }

    if let Some((Token::LParen, _)) = lexer.peek_token()? {
        lexer.consume_token()?;
        let arguments = parse_comma_separated(lexer, parse_expression, &Token::RParen)?;
        return Ok(Expr::FunctionCall { name,
                                       arguments,
                                       position });
    }

    Ok(Expr::AttributeRef { name,
                            scope: AttributeScope::Unscoped,
                            position })
}

/// Maps a scope keyword to the record it selects, or `None` for ordinary
/// identifiers.
fn scope_for_keyword(name: &str) -> Option<AttributeScope> {
    if name.eq_ignore_ascii_case("my") || name.eq_ignore_ascii_case("self") {
        Some(AttributeScope::ExplicitSelf)
    } else if name.eq_ignore_ascii_case("other") || name.eq_ignore_ascii_case("target") {
        Some(AttributeScope::ExplicitOther)
    } else {
        None
    }
}

/// Parses a parenthesized expression `( expression )`.
///
/// # Errors
/// - `ExpectedClosingParen` if the `)` is missing.
fn parse_grouping(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    lexer.consume_token()?; // the '('
    let expr = parse_expression(lexer)?;

    match lexer.consume_token()? {
        Some((Token::RParen, _)) => Ok(expr),
        Some((_, position)) => Err(ParseError::ExpectedClosingParen { position }),
        None => Err(ParseError::ExpectedClosingParen { position: lexer.end_position() }),
    }
}

/// Parses a list constructor of the form `{ expr1, expr2, ..., exprN }`.
///
/// An empty list `{}` is accepted.
///
/// Grammar: `list := "{" (expression ("," expression)*)? "}"`
fn parse_list_literal(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let Some((_, position)) = lexer.consume_token()? else {
        return Err(ParseError::UnexpectedEndOfInput { position: lexer.end_position() });
    };

    let elements = parse_comma_separated(lexer, parse_expression, &Token::RBrace)?;

    Ok(Expr::ListCtor { elements, position })
}
