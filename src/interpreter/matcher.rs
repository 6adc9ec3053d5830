use crate::interpreter::{
    evaluator::{core::EvalContext, function::core::FunctionTable},
    record::Record,
    registry::TypeRegistry,
    value::Value,
};

/// Conventional name of the acceptance predicate attribute.
pub const ATTR_REQUIREMENTS: &str = "Requirements";
/// Conventional name of the preference attribute.
pub const ATTR_RANK: &str = "Rank";
/// Conventional name of the attribute naming a record's own type.
pub const ATTR_MY_TYPE: &str = "MyType";
/// Conventional name of the attribute naming the type a record matches.
pub const ATTR_TARGET_TYPE: &str = "TargetType";

/// Tests whether `of`'s `Requirements` accepts the candidate `against`.
///
/// The attribute is evaluated with `of` as the owning record and `against`
/// as the candidate. Acceptance demands a result of exactly `true`:
/// `Undefined` (including an absent `Requirements`), `Error`, and
/// non-boolean results all reject.
///
/// # Example
/// ```
/// use admatch::{interpreter::matcher::requirements_met, parse};
///
/// let job = parse("[ Requirements = other.Memory >= 1024; ]").unwrap();
/// let machine = parse("[ Memory = 2048; ]").unwrap();
///
/// assert!(requirements_met(&job, &machine));
/// assert!(!requirements_met(&machine, &job)); // machine has no Requirements
/// ```
#[must_use]
pub fn requirements_met(of: &Record, against: &Record) -> bool {
    let functions = FunctionTable::new();
    let context = EvalContext::new(of, Some(against), &functions);
    match of.lookup(ATTR_REQUIREMENTS) {
        Some(expr) => context.eval(expr).is_true(),
        None => false,
    }
}

/// Tests whether two records match symmetrically: each record's
/// `Requirements` must accept the other.
///
/// The predicate is commutative by construction.
///
/// # Example
/// ```
/// use admatch::{interpreter::matcher::is_match, parse};
///
/// let job = parse("[ Memory = 1024; Requirements = other.Disk >= 100; ]").unwrap();
/// let machine = parse("[ Disk = 500; Requirements = other.Memory >= 512; ]").unwrap();
///
/// assert!(is_match(&job, &machine));
/// assert!(is_match(&machine, &job));
/// ```
#[must_use]
pub fn is_match(a: &Record, b: &Record) -> bool {
    requirements_met(a, b) && requirements_met(b, a)
}

/// Evaluates `of`'s `Rank` against a candidate, for ordering the candidates
/// that already matched.
///
/// An absent `Rank` is `Undefined`; the caller decides how to order
/// non-numeric results.
#[must_use]
pub fn rank(of: &Record, against: &Record) -> Value {
    let functions = FunctionTable::new();
    let context = EvalContext::new(of, Some(against), &functions);
    match of.lookup(ATTR_RANK) {
        Some(expr) => context.eval(expr),
        None => Value::Undefined,
    }
}

/// Symmetric match with ad-type gating.
///
/// Before the `Requirements` exchange, each record's `TargetType` must be
/// compatible with the other's `MyType` under the given registry. A record
/// that does not declare a type (or declares one the registry does not know)
/// gates nothing on that side.
#[must_use]
pub fn is_match_typed(registry: &TypeRegistry, a: &Record, b: &Record) -> bool {
    types_compatible(registry, a, b) && types_compatible(registry, b, a) && is_match(a, b)
}

/// Checks `of`'s `TargetType` against `against`'s `MyType`.
///
/// Both attributes must evaluate to strings naming registered types for the
/// gate to engage; otherwise the pair is treated as compatible and the
/// `Requirements` exchange decides alone.
fn types_compatible(registry: &TypeRegistry, of: &Record, against: &Record) -> bool {
    let (Some(target), Some(my)) = (type_attribute(of, ATTR_TARGET_TYPE),
                                    type_attribute(against, ATTR_MY_TYPE))
    else {
        return true;
    };

    match (registry.lookup(&target), registry.lookup(&my)) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}

/// Evaluates a type-naming attribute to a string, if it has one.
fn type_attribute(record: &Record, name: &str) -> Option<String> {
    match record.evaluate_attribute(name) {
        Value::String(s) => Some(s),
        _ => None,
    }
}
