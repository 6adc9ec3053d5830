use crate::{
    ast::{AttributeScope, Expr},
    interpreter::{evaluator::function::core::FunctionTable, record::Record, value::Value},
};

/// Maximum attribute dereference depth.
///
/// A reference chain deeper than this is treated as circular and evaluates
/// to `Error` instead of recursing without bound.
pub const MAX_REFERENCE_DEPTH: usize = 64;

/// Stores the evaluation context for one expression evaluation.
///
/// The context names the record whose attribute is being evaluated (`this`),
/// an optional candidate record for matchmaking (`other`), and the function
/// table used to resolve calls. It borrows all three; evaluation never
/// mutates a record or the expression tree, so one context can evaluate any
/// number of expressions.
///
/// ## Usage
///
/// A context is cheap to construct. Attribute references resolve against
/// `this` first; when an unscoped name is absent there and a candidate is
/// present, the candidate is consulted, and any expression found in the
/// candidate evaluates with the two records' roles swapped.
pub struct EvalContext<'a> {
    pub(crate) this:      &'a Record,
    pub(crate) other:     Option<&'a Record>,
    pub(crate) functions: &'a FunctionTable,
}

impl<'a> EvalContext<'a> {
    /// Creates an evaluation context for `this`, optionally paired with a
    /// candidate record.
    #[must_use]
    pub const fn new(this: &'a Record,
                     other: Option<&'a Record>,
                     functions: &'a FunctionTable)
                     -> Self {
        Self { this, other, functions }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. Failures are
    /// in-band: a meaningless operation yields `Value::Error` and a missing
    /// attribute yields `Value::Undefined`, and both flow onward through
    /// enclosing operators.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The computed value.
    #[must_use]
    pub fn eval(&self, expr: &Expr) -> Value {
        self.eval_at_depth(expr, 0)
    }

    /// Evaluates an expression with the current dereference depth threaded
    /// through, so reference cycles bottom out at [`MAX_REFERENCE_DEPTH`].
    pub(crate) fn eval_at_depth(&self, expr: &Expr, depth: usize) -> Value {
        match expr {
            Expr::Literal { value, .. } => value.clone(),
            Expr::AttributeRef { name, scope, .. } => {
                self.eval_attribute_ref(name, *scope, depth)
            },
            Expr::UnaryOp { op, expr, .. } => self.eval_unary_op(*op, expr, depth),
            Expr::BinaryOp { left, op, right, .. } => {
                self.eval_binary_op(left, *op, right, depth)
            },
            Expr::Ternary { condition,
                            if_true,
                            if_false,
                            .. } => self.eval_ternary(condition, if_true, if_false, depth),
            Expr::FunctionCall { name, arguments, .. } => {
                self.eval_function_call(name, arguments, depth)
            },
            Expr::ListCtor { elements, .. } => {
                Value::List(elements.iter()
                                    .map(|element| self.eval_at_depth(element, depth))
                                    .collect())
            },
            // A nested record is already a value; its attributes stay
            // unevaluated until individually asked for.
            Expr::RecordCtor { record, .. } => Value::Record(record.clone()),
        }
    }

    /// Resolves an attribute reference.
    ///
    /// Scoped references consult exactly the record their scope names.
    /// Unscoped references try `this` first and fall back to the candidate.
    /// An expression found in the candidate record evaluates with the two
    /// records swapped, so its own unscoped references mean what they meant
    /// when the candidate was written.
    ///
    /// Missing attributes (and `other.` references with no candidate
    /// present) are `Undefined`; exceeding the dereference depth is `Error`.
    fn eval_attribute_ref(&self, name: &str, scope: AttributeScope, depth: usize) -> Value {
        if depth >= MAX_REFERENCE_DEPTH {
            return Value::Error;
        }

        match scope {
            AttributeScope::ExplicitSelf => match self.this.lookup(name) {
                Some(expr) => self.eval_at_depth(expr, depth + 1),
                None => Value::Undefined,
            },
            AttributeScope::ExplicitOther => {
                let Some(other) = self.other else {
                    return Value::Undefined;
                };
                match other.lookup(name) {
                    Some(expr) => self.swapped(other).eval_at_depth(expr, depth + 1),
                    None => Value::Undefined,
                }
            },
            AttributeScope::Unscoped => {
                if let Some(expr) = self.this.lookup(name) {
                    self.eval_at_depth(expr, depth + 1)
                } else if let Some(other) = self.other
                          && let Some(expr) = other.lookup(name)
                {
                    self.swapped(other).eval_at_depth(expr, depth + 1)
                } else {
                    Value::Undefined
                }
            },
        }
    }

    /// Evaluates a conditional expression.
    ///
    /// Only the selected branch is evaluated. An `Undefined` condition is
    /// `Undefined`; an `Error` or non-boolean condition is `Error`.
    fn eval_ternary(&self,
                    condition: &Expr,
                    if_true: &Expr,
                    if_false: &Expr,
                    depth: usize)
                    -> Value {
        match self.eval_at_depth(condition, depth) {
            Value::Bool(true) => self.eval_at_depth(if_true, depth),
            Value::Bool(false) => self.eval_at_depth(if_false, depth),
            Value::Undefined => Value::Undefined,
            _ => Value::Error,
        }
    }

    /// A context with the roles of the two records exchanged, for evaluating
    /// expressions that live in the candidate record.
    const fn swapped(&self, other: &'a Record) -> Self {
        Self { this:      other,
               other:     Some(self.this),
               functions: self.functions, }
    }
}
