use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Lexer, Token},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses logical OR expressions.
///
/// Handles left-associative chains of `||`. This is the loosest-binding
/// binary level; only the conditional operator binds looser.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)*`
///
/// # Parameters
/// - `lexer`: Lexer with single-token lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::Or`.
pub fn parse_logical_or(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_logical_and(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::Or)
        {
            lexer.consume_token()?;

            let right = parse_logical_and(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses logical AND expressions.
///
/// Handles left-associative chains of `&&`. Binds tighter than `||`, looser
/// than the bitwise operators.
///
/// Grammar: `logical_and := bit_or ("&&" bit_or)*`
///
/// # Parameters
/// - `lexer`: Lexer with single-token lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And`.
pub fn parse_logical_and(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_bit_or(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::And)
        {
            lexer.consume_token()?;

            let right = parse_bit_or(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses bitwise OR expressions.
///
/// Grammar: `bit_or := bit_xor ("|" bit_xor)*`
pub fn parse_bit_or(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_bit_xor(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::BitOr)
        {
            lexer.consume_token()?;

            let right = parse_bit_xor(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses bitwise XOR expressions.
///
/// Grammar: `bit_xor := bit_and ("^" bit_and)*`
pub fn parse_bit_xor(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_bit_and(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::BitXor)
        {
            lexer.consume_token()?;

            let right = parse_bit_and(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses bitwise AND expressions.
///
/// Grammar: `bit_and := equality ("&" equality)*`
pub fn parse_bit_and(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_equality(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::BitAnd)
        {
            lexer.consume_token()?;

            let right = parse_equality(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses equality and meta-equality expressions.
///
/// Handles `==`, `!=`, `=?=` and `=!=` (the latter two also spelled `is` and
/// `isnt`). All four share one precedence level and associate left; chains
/// are grammatically valid and left to the evaluator to judge.
///
/// Grammar: `equality := relational (("==" | "!=" | "=?=" | "=!=") relational)*`
///
/// # Parameters
/// - `lexer`: Lexer with single-token lookahead.
///
/// # Returns
/// A binary expression tree of equality nodes.
pub fn parse_equality(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_relational(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op,
                       BinaryOperator::Equal
                       | BinaryOperator::NotEqual
                       | BinaryOperator::MetaEqual
                       | BinaryOperator::MetaNotEqual)
        {
            lexer.consume_token()?;

            let right = parse_relational(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses relational expressions.
///
/// Handles `<`, `<=`, `>` and `>=`, left-associative.
///
/// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)*`
pub fn parse_relational(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_shift(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op,
                       BinaryOperator::Less
                       | BinaryOperator::LessEqual
                       | BinaryOperator::Greater
                       | BinaryOperator::GreaterEqual)
        {
            lexer.consume_token()?;

            let right = parse_shift(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses shift expressions.
///
/// Handles `<<`, `>>` (arithmetic) and `>>>` (logical), left-associative.
///
/// Grammar: `shift := additive (("<<" | ">>" | ">>>") additive)*`
pub fn parse_shift(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_additive(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op,
                       BinaryOperator::LeftShift
                       | BinaryOperator::RightShift
                       | BinaryOperator::URightShift)
        {
            lexer.consume_token()?;

            let right = parse_additive(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_multiplicative(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            lexer.consume_token()?;

            let right = parse_multiplicative(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`, the tightest-binding
/// binary level.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(lexer: &mut Lexer<'_>) -> ParseResult<Expr> {
    let mut left = parse_unary(lexer)?;

    loop {
        if let Some((token, position)) = lexer.peek_token()?
           && let Some(op) = token_to_binary_operator(&token)
           && matches!(op,
                       BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            lexer.consume_token()?;

            let right = parse_unary(lexer)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (arithmetic, comparison, meta-equality, bitwise, shift, or logical).
/// Returns `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use admatch::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Is),
///            Some(BinaryOperator::MetaEqual));
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::Less => Some(BinaryOperator::Less),
        Token::LessEqual => Some(BinaryOperator::LessEqual),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        Token::MetaEqual | Token::Is => Some(BinaryOperator::MetaEqual),
        Token::MetaNotEqual | Token::Isnt => Some(BinaryOperator::MetaNotEqual),
        Token::Ampersand => Some(BinaryOperator::BitAnd),
        Token::Pipe => Some(BinaryOperator::BitOr),
        Token::Caret => Some(BinaryOperator::BitXor),
        Token::LeftShift => Some(BinaryOperator::LeftShift),
        Token::RightShift => Some(BinaryOperator::RightShift),
        Token::URightShift => Some(BinaryOperator::URightShift),
        Token::DoubleAmpersand => Some(BinaryOperator::And),
        Token::DoublePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}
