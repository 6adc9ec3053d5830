use crate::{
    ast::Expr,
    interpreter::{evaluator::{core::EvalContext, function::core::FunctionTable},
                  value::Value},
};

/// An ordered collection of named attribute expressions.
///
/// Attribute names are case-insensitive: `Memory`, `MEMORY` and `memory`
/// denote the same attribute, and at most one of them exists at a time.
/// Insertion order is preserved and is the order used for printing, so a
/// record round-trips through the parser attribute-for-attribute.
///
/// The record owns its expressions outright. Mutation is whole-attribute
/// only (insert or delete); evaluation never changes the record.
///
/// ## Example
/// ```
/// use admatch::parse;
///
/// let record = parse("[ Memory = 2048; Arch = \"X86_64\"; ]").unwrap();
///
/// assert_eq!(record.len(), 2);
/// assert!(record.lookup("MEMORY").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    attributes: Vec<(String, Expr)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub const fn new() -> Self {
        Self { attributes: Vec::new() }
    }

    /// Inserts an attribute, replacing any existing attribute whose name
    /// matches case-insensitively.
    ///
    /// A replaced attribute keeps its original position in the record; a new
    /// attribute is appended. The most recent spelling of the name is the
    /// one that prints.
    pub fn insert(&mut self, name: impl Into<String>, expr: Expr) {
        let name = name.into();
        if let Some(slot) = self.attributes
                                .iter_mut()
                                .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            *slot = (name, expr);
        } else {
            self.attributes.push((name, expr));
        }
    }

    /// Looks up an attribute's expression by case-insensitive name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Expr> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, expr)| expr)
    }

    /// Removes an attribute by case-insensitive name.
    ///
    /// # Returns
    /// - `true`: If the attribute existed and was removed.
    /// - `false`: If no such attribute was present.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes
            .retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
        self.attributes.len() != before
    }

    /// Evaluates one attribute of this record in isolation, with no
    /// candidate record present.
    ///
    /// Unscoped references inside the attribute's expression resolve against
    /// this record only; a reference to an absent attribute yields
    /// `Undefined`, as does naming an attribute the record does not have.
    ///
    /// # Example
    /// ```
    /// use admatch::{interpreter::value::Value, parse};
    ///
    /// let record = parse("[ Disk = 4 * 1024; Tiny = Disk < 100; ]").unwrap();
    ///
    /// assert_eq!(record.evaluate_attribute("disk"), Value::Integer(4096));
    /// assert_eq!(record.evaluate_attribute("Tiny"), Value::Bool(false));
    /// assert_eq!(record.evaluate_attribute("Missing"), Value::Undefined);
    /// ```
    #[must_use]
    pub fn evaluate_attribute(&self, name: &str) -> Value {
        let functions = FunctionTable::default();
        let context = EvalContext::new(self, None, &functions);
        match self.lookup(name) {
            Some(expr) => context.eval(expr),
            None => Value::Undefined,
        }
    }

    /// Number of attributes in the record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the record has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over `(name, expression)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Expr)> {
        self.attributes.iter().map(|(name, expr)| (name.as_str(), expr))
    }
}

impl std::fmt::Display for Record {
    /// Prints the record in the record grammar: `[ name = expr; ... ]`.
    ///
    /// The printed form re-parses to an equal record.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (name, expr) in self.iter() {
            write!(f, " {name} = {expr};")?;
        }
        write!(f, " ]")
    }
}
