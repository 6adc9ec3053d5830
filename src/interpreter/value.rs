use ordered_float::OrderedFloat;

use crate::interpreter::record::Record;

/// Scale factor suffix attached to a numeric literal (`10K`, `2.5M`).
///
/// Factors are decimal powers of a thousand and are folded into the literal
/// at parse time; an evaluated value never carries a factor.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum NumberFactor {
    /// No suffix.
    #[default]
    None,
    /// `k`/`K`: thousands.
    Kilo,
    /// `m`/`M`: millions.
    Mega,
    /// `g`/`G`: billions.
    Giga,
    /// `t`/`T`: trillions.
    Tera,
}

impl NumberFactor {
    /// The multiplier this factor applies to a literal.
    #[must_use]
    pub const fn multiplier(self) -> i64 {
        match self {
            Self::None => 1,
            Self::Kilo => 1_000,
            Self::Mega => 1_000_000,
            Self::Giga => 1_000_000_000,
            Self::Tera => 1_000_000_000_000,
        }
    }
}

/// An absolute point in time with its display offset.
///
/// `secs` is seconds since the Unix epoch and is the sole basis for
/// comparison and arithmetic; `offset` is the UTC offset in seconds the
/// literal was written with, kept only so the value prints back in the
/// time zone it was given in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AbsTime {
    /// Seconds since the Unix epoch.
    pub secs:   i64,
    /// UTC offset in seconds, for display.
    pub offset: i32,
}

/// Represents a runtime value produced by evaluation.
///
/// This enum models all the possible types that can appear in attribute
/// values, operator results, and function returns. Two of the variants are
/// not failures of the evaluator but values in their own right: `Undefined`
/// (no such attribute, or an operand was undefined) and `Error` (an operation
/// was meaningless for its operands). Both flow through expressions under
/// three-valued logic, with `Error` taking precedence over `Undefined`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing information; the result of referencing an absent attribute.
    Undefined,
    /// A failed operation (division by zero, type mismatch, bad arity).
    Error,
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision floating-point number.
    Real(f64),
    /// An owned character string.
    String(String),
    /// An absolute timestamp.
    AbsoluteTime(AbsTime),
    /// A duration in seconds.
    RelativeTime(i64),
    /// An ordered list of values.
    List(Vec<Self>),
    /// A nested record; its attributes stay unevaluated expressions.
    Record(Box<Record>),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(v)
    }
}

impl Value {
    /// Returns `true` only for `Bool(true)`.
    ///
    /// This is the acceptance test used by matching: `Undefined`, `Error`,
    /// and non-boolean values all fail it.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    /// Returns `true` if the value is [`Undefined`](Self::Undefined).
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` if the value is [`Error`](Self::Error).
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// Meta-equality: same kind and same value, with a total answer.
    ///
    /// Unlike `==` in the expression language, this never yields `Undefined`
    /// or `Error`: `undefined =?= undefined` is `true`, and values of
    /// different kinds are simply not the same. Reals compare by total order,
    /// so a NaN is the same as a NaN. Strings compare byte for byte.
    ///
    /// # Parameters
    /// - `other`: The value to compare against.
    ///
    /// # Returns
    /// - `true`: If both values have the same kind and the same content.
    /// - `false`: Otherwise.
    ///
    /// # Example
    /// ```
    /// use admatch::interpreter::value::Value;
    ///
    /// assert!(Value::Undefined.same_as(&Value::Undefined));
    /// assert!(Value::Real(f64::NAN).same_as(&Value::Real(f64::NAN)));
    ///
    /// // Kind matters: an integer is never the same as a real.
    /// assert!(!Value::Integer(1).same_as(&Value::Real(1.0)));
    /// ```
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Error, Self::Error) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::AbsoluteTime(a), Self::AbsoluteTime(b)) => a.secs == b.secs,
            (Self::RelativeTime(a), Self::RelativeTime(b)) => a == b,
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_as(y))
            },
            (Self::Record(a), Self::Record(b)) => a == b,
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Prints the value in the literal grammar, so that printing an evaluated
    /// attribute and re-parsing it yields an equal value.
    ///
    /// # Example
    /// ```
    /// use admatch::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Real(2.0).to_string(), "2.0");
    /// assert_eq!(Value::String("a\"b".to_string()).to_string(), "\"a\\\"b\"");
    /// assert_eq!(Value::RelativeTime(-90).to_string(), "'-00:01:30'");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Error => write!(f, "error"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            // Debug formatting keeps the decimal point on whole reals, so the
            // printed form lexes back as a real rather than an integer.
            Self::Real(r) => write!(f, "{r:?}"),
            Self::String(s) => {
                write!(f, "\"")?;
                for c in s.chars() {
                    match c {
                        '"' => write!(f, "\\\"")?,
                        '\\' => write!(f, "\\\\")?,
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        other => write!(f, "{other}")?,
                    }
                }
                write!(f, "\"")
            },
            Self::AbsoluteTime(time) => {
                use chrono::TimeZone;
                if let Some(offset) = chrono::FixedOffset::east_opt(time.offset)
                    && let Some(datetime) = offset.timestamp_opt(time.secs, 0).single()
                {
                    write!(f, "'{}'", datetime.format("%Y-%m-%dT%H:%M:%S%:z"))
                } else {
                    // Out-of-range timestamps cannot be rendered as a date.
                    write!(f, "error")
                }
            },
            Self::RelativeTime(total) => {
                let magnitude = total.unsigned_abs();
                let days = magnitude / 86_400;
                let hours = magnitude % 86_400 / 3_600;
                let minutes = magnitude % 3_600 / 60;
                let seconds = magnitude % 60;

                write!(f, "'")?;
                if *total < 0 {
                    write!(f, "-")?;
                }
                if days > 0 {
                    write!(f, "{days}+")?;
                }
                write!(f, "{hours:02}:{minutes:02}:{seconds:02}'")
            },
            Self::List(elements) => {
                write!(f, "{{")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "}}")
            },
            Self::Record(record) => write!(f, "{record}"),
        }
    }
}
