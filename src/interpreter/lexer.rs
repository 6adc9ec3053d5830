use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::value::{AbsTime, NumberFactor},
};

/// Maximum byte length of a single string token. Longer strings produce
/// [`LexError::TokenTooLong`] instead of growing unboundedly.
pub const MAX_TOKEN_LENGTH: usize = 4096;

/// Lexical failure modes, carried as the logos error type.
///
/// Both are recoverable: a parser built on the lexer reports the byte offset
/// and may resynchronize at the next record.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character sequence matched no token rule.
    #[default]
    UnrecognizedToken,
    /// A token exceeded the length bound, or a numeric literal exceeded the
    /// representable range.
    TokenTooLong,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the record language.
///
/// Reserved words (`true`, `false`, `undefined`, `error`, `is`, `isnt`) are
/// case-insensitive and win over identifier classification at equal length;
/// a longer identifier (`island`) still lexes as an identifier. Operators
/// are matched by maximal munch, so `>>>` is preferred over `>>` over `>`.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
pub enum Token {
    /// Real literal tokens with an optional scale suffix, such as `3.14`,
    /// `.5`, `2.1e-10` or `2.5M`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?[kKmMgGtT]?", parse_real)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?[kKmMgGtT]?", parse_real)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+[kKmMgGtT]?", parse_real)]
    Real((f64, NumberFactor)),
    /// Integer literal tokens with an optional scale suffix, such as `42` or
    /// `10K`. A literal that overflows 64 bits is a `TokenTooLong` error,
    /// never a silently truncated value.
    #[regex(r"[0-9]+[kKmMgGtT]?", parse_integer)]
    Integer((i64, NumberFactor)),
    /// Boolean literal tokens, `true` or `false` (case-insensitive).
    #[token("true", |_| true, ignore(ascii_case))]
    #[token("false", |_| false, ignore(ascii_case))]
    Bool(bool),
    /// The `undefined` literal.
    #[token("undefined", ignore(ascii_case))]
    Undefined,
    /// The `error` literal.
    #[token("error", ignore(ascii_case))]
    ErrorValue,
    /// Quoted string literal tokens with backslash escapes. Unterminated
    /// strings fail to lex; over-length strings are a `TokenTooLong` error.
    #[regex(r#""([^"\\]|\\.)*""#, parse_string)]
    String(String),
    /// Absolute time literal tokens, such as `'2003-01-25T09:00:00Z'`.
    /// The offset is optional (UTC assumed) and the time of day may be
    /// omitted entirely. Malformed content is a token error.
    #[regex(r"'[0-9]{4}-[0-9]{2}-[0-9]{2}[^']*'", parse_abs_time)]
    AbsoluteTime(AbsTime),
    /// Relative time (duration) literal tokens, such as `'1+02:30:00'`,
    /// `'-00:00:90'` or `'3600'`.
    #[regex(r"'-?([0-9]+\+)?[0-9]{1,3}:[0-9]{2}(:[0-9]{2})?'", parse_rel_time)]
    #[regex(r"'-?[0-9]+'", parse_rel_time)]
    RelativeTime(i64),
    /// `is`: alternate spelling of the meta-equality operator `=?=`.
    #[token("is", ignore(ascii_case))]
    Is,
    /// `isnt`: alternate spelling of `=!=`.
    #[token("isnt", ignore(ascii_case))]
    Isnt,
    /// Identifier tokens; attribute or function names such as `Memory`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip)]
    Comment,
    /// `/* Multi line comments. */`
    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    MultiLineComment,
    /// `.`
    #[token(".")]
    Dot,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `<<`
    #[token("<<")]
    LeftShift,
    /// `>>`
    #[token(">>")]
    RightShift,
    /// `>>>`
    #[token(">>>")]
    URightShift,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=?=`
    #[token("=?=")]
    MetaEqual,
    /// `=!=`
    #[token("=!=")]
    MetaNotEqual,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `~`
    #[token("~")]
    Tilde,
    /// `!`
    #[token("!")]
    Bang,
    /// `?`
    #[token("?")]
    Question,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// Spaces, tabs, newlines and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// A token paired with its starting byte offset in the source.
pub type Spanned = (Token, usize);

/// Streaming lexer with single-token lookahead.
///
/// Wraps the generated token machine behind the peek/consume contract the
/// parser relies on: repeated [`Lexer::peek_token`] calls before a consume
/// return the identical cached token, and [`Lexer::consume_token`] advances
/// past it exactly once. [`Lexer::reinitialize`] rebinds the instance to a
/// new source so it can be reused across parses.
///
/// A `Lexer` is exclusively owned by one in-progress parse; it holds no
/// record or expression state.
///
/// ## Example
/// ```
/// use admatch::interpreter::lexer::Lexer;
///
/// let mut lexer = Lexer::new("Memory >= 1024");
///
/// let first = lexer.peek_token().unwrap();
/// assert_eq!(first, lexer.peek_token().unwrap()); // peek is idempotent
/// assert_eq!(first, lexer.consume_token().unwrap());
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Token>,
    peeked: Option<Option<Spanned>>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Token::lexer(source),
               peeked: None, }
    }

    /// Returns the next token without advancing past it.
    ///
    /// `Ok(None)` signals end of input.
    ///
    /// # Errors
    /// Returns a `ParseError` describing an unrecognized or over-long token.
    pub fn peek_token(&mut self) -> Result<Option<Spanned>, ParseError> {
        if self.peeked.is_none() {
            let next = self.next_spanned()?;
            self.peeked = Some(next);
        }
        Ok(self.peeked.clone().flatten())
    }

    /// Returns the next token and advances past it.
    ///
    /// If a token was peeked, the cached token is returned and the cache
    /// cleared; otherwise a fresh token is lexed.
    ///
    /// # Errors
    /// Returns a `ParseError` describing an unrecognized or over-long token.
    pub fn consume_token(&mut self) -> Result<Option<Spanned>, ParseError> {
        if let Some(cached) = self.peeked.take() {
            return Ok(cached);
        }
        self.next_spanned()
    }

    /// Rebinds the lexer to a new source, discarding any cached lookahead.
    pub fn reinitialize(&mut self, source: &'src str) {
        self.inner = Token::lexer(source);
        self.peeked = None;
    }

    /// Byte offset of the most recently lexed token.
    #[must_use]
    pub fn position(&self) -> usize {
        self.inner.span().start
    }

    /// Byte offset one past the end of the source, for end-of-input errors.
    #[must_use]
    pub fn end_position(&self) -> usize {
        self.inner.source().len()
    }

    fn next_spanned(&mut self) -> Result<Option<Spanned>, ParseError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(Some((token, self.inner.span().start))),
            Some(Err(LexError::TokenTooLong)) => {
                Err(ParseError::TokenTooLong { position: self.inner.span().start })
            },
            Some(Err(LexError::UnrecognizedToken)) => {
                Err(ParseError::UnrecognizedToken { token:    self.inner.slice().to_string(),
                                                    position: self.inner.span().start, })
            },
            None => Ok(None),
        }
    }
}

/// Splits a trailing scale-factor letter off a numeric token slice.
fn split_factor(slice: &str) -> (&str, NumberFactor) {
    match slice.as_bytes().last() {
        Some(b'k' | b'K') => (&slice[..slice.len() - 1], NumberFactor::Kilo),
        Some(b'm' | b'M') => (&slice[..slice.len() - 1], NumberFactor::Mega),
        Some(b'g' | b'G') => (&slice[..slice.len() - 1], NumberFactor::Giga),
        Some(b't' | b'T') => (&slice[..slice.len() - 1], NumberFactor::Tera),
        _ => (slice, NumberFactor::None),
    }
}

/// Parses a real literal and its optional scale factor from the current
/// token slice.
///
/// # Returns
/// - `Ok((f64, NumberFactor))`: The parsed value and its factor.
/// - `Err(LexError::TokenTooLong)`: If the literal is not representable as a
///   finite `f64`.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<(f64, NumberFactor), LexError> {
    let (digits, factor) = split_factor(lex.slice());
    let value: f64 = digits.parse().map_err(|_| LexError::TokenTooLong)?;
    if !value.is_finite() {
        return Err(LexError::TokenTooLong);
    }
    Ok((value, factor))
}

/// Parses an integer literal and its optional scale factor from the current
/// token slice.
///
/// # Returns
/// - `Ok((i64, NumberFactor))`: The parsed value and its factor.
/// - `Err(LexError::TokenTooLong)`: If the digits exceed the 64-bit range.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<(i64, NumberFactor), LexError> {
    let (digits, factor) = split_factor(lex.slice());
    let value: i64 = digits.parse().map_err(|_| LexError::TokenTooLong)?;
    Ok((value, factor))
}

/// Parses a quoted string literal, resolving backslash escapes.
///
/// Recognized escapes are `\n`, `\t`, `\r`, `\"` and `\\`; any other escaped
/// character stands for itself.
///
/// # Returns
/// - `Ok(String)`: The unescaped contents.
/// - `Err(LexError::TokenTooLong)`: If the literal exceeds
///   [`MAX_TOKEN_LENGTH`].
fn parse_string(lex: &logos::Lexer<Token>) -> Result<String, LexError> {
    let slice = lex.slice();
    if slice.len() > MAX_TOKEN_LENGTH {
        return Err(LexError::TokenTooLong);
    }
    let content = &slice[1..slice.len() - 1];

    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => {},
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Parses a single-quoted absolute time literal.
///
/// Accepted forms, most specific first:
/// - full RFC 3339 date-time with offset (`2003-01-25T09:00:00-06:00`, `Z`),
/// - date-time without an offset (UTC assumed),
/// - bare date (midnight UTC).
///
/// # Returns
/// - `Ok(AbsTime)`: Epoch seconds plus the UTC offset in seconds.
/// - `Err(LexError::UnrecognizedToken)`: If the content is not a valid
///   date-time.
fn parse_abs_time(lex: &logos::Lexer<Token>) -> Result<AbsTime, LexError> {
    let slice = lex.slice();
    let content = &slice[1..slice.len() - 1];

    if let Ok(datetime) = chrono::DateTime::parse_from_rfc3339(content) {
        return Ok(AbsTime { secs:   datetime.timestamp(),
                            offset: datetime.offset().local_minus_utc(), });
    }
    if let Ok(naive) = chrono::NaiveDateTime::parse_from_str(content, "%Y-%m-%dT%H:%M:%S") {
        return Ok(AbsTime { secs:   naive.and_utc().timestamp(),
                            offset: 0, });
    }
    if let Ok(date) = chrono::NaiveDate::parse_from_str(content, "%Y-%m-%d") {
        let midnight = date.and_time(chrono::NaiveTime::MIN);
        return Ok(AbsTime { secs:   midnight.and_utc().timestamp(),
                            offset: 0, });
    }
    Err(LexError::UnrecognizedToken)
}

/// Parses a single-quoted relative time (duration) literal.
///
/// Accepted forms: `[-][days+]hh:mm[:ss]` and a bare signed second count.
///
/// # Returns
/// - `Ok(i64)`: The signed duration in seconds.
/// - `Err(LexError::TokenTooLong)`: If the duration overflows.
fn parse_rel_time(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    let slice = lex.slice();
    let content = &slice[1..slice.len() - 1];

    let (negative, rest) = content.strip_prefix('-')
                                  .map_or((false, content), |stripped| (true, stripped));

    let (days, clock) = match rest.split_once('+') {
        Some((days, clock)) => {
            (days.parse::<i64>().map_err(|_| LexError::TokenTooLong)?, clock)
        },
        None => (0, rest),
    };

    let seconds = if clock.contains(':') {
        let mut total: i64 = 0;
        for part in clock.split(':') {
            let component: i64 = part.parse().map_err(|_| LexError::TokenTooLong)?;
            total = total.checked_mul(60)
                         .and_then(|t| t.checked_add(component))
                         .ok_or(LexError::TokenTooLong)?;
        }
        // hh:mm with no seconds field still means hours and minutes
        if clock.split(':').count() == 2 {
            total.checked_mul(60).ok_or(LexError::TokenTooLong)?
        } else {
            total
        }
    } else {
        clock.parse::<i64>().map_err(|_| LexError::TokenTooLong)?
    };

    let total = days.checked_mul(86_400)
                    .and_then(|d| d.checked_add(seconds))
                    .ok_or(LexError::TokenTooLong)?;

    Ok(if negative { -total } else { total })
}
