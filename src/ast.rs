use crate::interpreter::{record::Record, value::Value};

/// Identifies which record an attribute reference resolves against.
///
/// An unscoped reference is looked up in the owning record first and falls
/// back to the candidate record when one is present. Explicitly scoped
/// references skip the fallback entirely.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AttributeScope {
    /// Resolve in the owning record, falling back to the candidate.
    Unscoped,
    /// Resolve only in the owning record (`self.Name` / `my.Name`).
    ExplicitSelf,
    /// Resolve only in the candidate record (`other.Name` / `target.Name`).
    ExplicitOther,
}

/// An abstract syntax tree (AST) node representing an expression in the
/// record language.
///
/// `Expr` covers all expression forms: literals, attribute references,
/// unary/binary/ternary operators, function calls, and list/record
/// constructors. Each variant carries the byte offset of the construct in the
/// source text for error reporting. A node is owned exclusively by its parent
/// (attribute slot, list slot, or argument slot); evaluation never mutates
/// the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, boolean, time, `undefined`, `error`).
    Literal {
        /// The constant value.
        value:    Value,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A reference to an attribute of the owning or candidate record.
    AttributeRef {
        /// Attribute name as written (lookup is case-insensitive).
        name:     String,
        /// Which record the reference resolves against.
        scope:    AttributeScope,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A unary operation (negation, logical not, bitwise complement).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A binary operation (arithmetic, comparison, logical, bitwise).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A conditional expression `cond ? if_true : if_false`.
    Ternary {
        /// The condition expression.
        condition: Box<Self>,
        /// Expression evaluated when the condition is true.
        if_true:   Box<Self>,
        /// Expression evaluated when the condition is false.
        if_false:  Box<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
    /// A function call expression (e.g. `floor(x)`).
    FunctionCall {
        /// Name of the function being called (lookup is case-insensitive).
        name:      String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Byte offset in the source text.
        position:  usize,
    },
    /// A list constructor `{ expr, expr, ... }`.
    ListCtor {
        /// Element expressions.
        elements: Vec<Self>,
        /// Byte offset in the source text.
        position: usize,
    },
    /// A nested record constructor `[ name = expr; ... ]`.
    RecordCtor {
        /// The nested record with its attribute expressions.
        record:   Box<Record>,
        /// Byte offset in the source text.
        position: usize,
    },
}

impl Expr {
    /// Gets the source byte offset from `self`.
    /// ## Example
    /// ```
    /// use admatch::ast::{AttributeScope, Expr};
    ///
    /// let expr = Expr::AttributeRef { name:     "Memory".to_string(),
    ///                                 scope:    AttributeScope::Unscoped,
    ///                                 position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Literal { position, .. }
            | Self::AttributeRef { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Ternary { position, .. }
            | Self::FunctionCall { position, .. }
            | Self::ListCtor { position, .. }
            | Self::RecordCtor { position, .. } => *position,
        }
    }
}

/// Represents a binary operator.
///
/// The parser's precedence chain fixes the binding strength of each operator;
/// this enum only names them.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`): always promotes to Real
    Div,
    /// Modulus (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Meta-equal (`=?=` / `is`): compares kind and value, never Undefined
    MetaEqual,
    /// Meta-not-equal (`=!=` / `isnt`)
    MetaNotEqual,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise or (`|`)
    BitOr,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Left shift (`<<`)
    LeftShift,
    /// Arithmetic right shift (`>>`)
    RightShift,
    /// Logical (unsigned) right shift (`>>>`)
    URightShift,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Minus,
    /// Logical NOT (e.g. `!x`).
    Not,
    /// Bitwise complement (e.g. `~x`).
    BitNot,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, BitAnd, BitOr, BitXor, Div, Equal, Greater, GreaterEqual, LeftShift, Less,
            LessEqual, MetaEqual, MetaNotEqual, Mod, Mul, NotEqual, Or, RightShift, Sub,
            URightShift,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            MetaEqual => "=?=",
            MetaNotEqual => "=!=",
            BitAnd => "&",
            BitOr => "|",
            BitXor => "^",
            LeftShift => "<<",
            RightShift => ">>",
            URightShift => ">>>",
            And => "&&",
            Or => "||",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Minus => "-",
            Self::Not => "!",
            Self::BitNot => "~",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for AttributeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unscoped => Ok(()),
            Self::ExplicitSelf => write!(f, "self."),
            Self::ExplicitOther => write!(f, "other."),
        }
    }
}

impl std::fmt::Display for Expr {
    /// Unparses the expression back into the record-language grammar.
    ///
    /// Binary and ternary nodes print fully parenthesized, so the printed
    /// form re-parses to a tree with identical evaluation behavior.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value, .. } => write!(f, "{value}"),
            Self::AttributeRef { name, scope, .. } => write!(f, "{scope}{name}"),
            Self::UnaryOp { op, expr, .. } => write!(f, "{op}{expr}"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::Ternary { condition,
                            if_true,
                            if_false,
                            .. } => write!(f, "({condition} ? {if_true} : {if_false})"),
            Self::FunctionCall { name, arguments, .. } => {
                write!(f, "{name}(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::ListCtor { elements, .. } => {
                write!(f, "{{")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "}}")
            },
            Self::RecordCtor { record, .. } => write!(f, "{record}"),
        }
    }
}
