use std::collections::HashMap;

use crate::{
    ast::Expr,
    interpreter::{
        evaluator::{core::EvalContext, function::builtin},
        value::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values and returns its
/// result in-band: a bad argument is `Value::Error`, never a Rust error.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// Specifies the allowed number of arguments for a function.
///
/// - `Exact(n)` means the function must receive exactly `n` arguments.
/// - `OneOf(slice)` means the function accepts any arity listed in `slice`.
/// - `AtLeast(n)` means the function accepts `n` or more arguments.
#[derive(Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name (matched case-insensitively),
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "floor"       => { arity: Arity::Exact(1), func: builtin::floor },
    "ceiling"     => { arity: Arity::Exact(1), func: builtin::ceiling },
    "round"       => { arity: Arity::Exact(1), func: builtin::round },
    "int"         => { arity: Arity::Exact(1), func: builtin::int },
    "real"        => { arity: Arity::Exact(1), func: builtin::real },
    "string"      => { arity: Arity::Exact(1), func: builtin::string },
    "strcat"      => { arity: Arity::AtLeast(1), func: builtin::strcat },
    "substr"      => { arity: Arity::OneOf(&[2, 3]), func: builtin::substr },
    "toUpper"     => { arity: Arity::Exact(1), func: builtin::to_upper },
    "toLower"     => { arity: Arity::Exact(1), func: builtin::to_lower },
    "size"        => { arity: Arity::Exact(1), func: builtin::size },
    "isUndefined" => { arity: Arity::Exact(1), func: builtin::is_undefined },
    "isError"     => { arity: Arity::Exact(1), func: builtin::is_error },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity
    /// constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(counts) => counts.contains(&n),
            Self::AtLeast(m) => n >= *m,
        }
    }
}

/// The set of functions visible to an evaluation.
///
/// Every table starts with the builtins. A caller may register additional
/// functions (or shadow a builtin) before evaluating; lookup is
/// case-insensitive either way.
///
/// ## Example
/// ```
/// use admatch::interpreter::{
///     evaluator::function::core::{Arity, FunctionTable},
///     value::Value,
/// };
///
/// let mut table = FunctionTable::new();
/// table.register("answer", Arity::Exact(0), |_| Value::Integer(42));
///
/// assert!(table.lookup("ANSWER").is_some());
/// assert!(table.lookup("floor").is_some()); // builtins remain visible
/// ```
#[derive(Default)]
pub struct FunctionTable {
    extra: HashMap<String, (Arity, BuiltinFn)>,
}

impl FunctionTable {
    /// Creates a table containing only the builtins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function under the given name, shadowing any builtin or
    /// previously registered function with that name.
    pub fn register(&mut self, name: impl Into<String>, arity: Arity, func: BuiltinFn) {
        let name = name.into();
        self.extra.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
        self.extra.insert(name, (arity, func));
    }

    /// Looks up a function by case-insensitive name.
    ///
    /// Registered functions take precedence over builtins.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<(Arity, BuiltinFn)> {
        self.extra
            .iter()
            .find(|(registered, _)| registered.eq_ignore_ascii_case(name))
            .map(|(_, entry)| *entry)
            .or_else(|| {
                BUILTIN_TABLE.iter()
                             .find(|b| b.name.eq_ignore_ascii_case(name))
                             .map(|b| (b.arity, b.func))
            })
    }
}

impl EvalContext<'_> {
    /// Evaluates a function call.
    ///
    /// Arguments are evaluated eagerly, left to right, before the call; the
    /// classifying builtins rely on receiving `Undefined` and `Error` as
    /// ordinary argument values. An unknown function name or a wrong number
    /// of arguments is `Error`.
    ///
    /// # Parameters
    /// - `name`: Function name (matched case-insensitively).
    /// - `arguments`: Argument expressions.
    /// - `depth`: Current attribute dereference depth.
    ///
    /// # Returns
    /// The function result.
    pub(crate) fn eval_function_call(&self,
                                     name: &str,
                                     arguments: &[Expr],
                                     depth: usize)
                                     -> Value {
        let Some((arity, func)) = self.functions.lookup(name) else {
            return Value::Error;
        };

        if !arity.check(arguments.len()) {
            return Value::Error;
        }

        let values: Vec<Value> = arguments.iter()
                                          .map(|argument| self.eval_at_depth(argument, depth))
                                          .collect();
        func(&values)
    }
}
