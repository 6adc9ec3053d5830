/// A registry mapping ad-type names to stable numbers.
///
/// Names are case-insensitive. Registration is idempotent: registering a
/// name again returns the number it already has. The registry is built once
/// at startup and then treated as read-only; components that gate matching
/// on ad types receive a shared reference.
///
/// ## Example
/// ```
/// use admatch::interpreter::registry::TypeRegistry;
///
/// let mut registry = TypeRegistry::new();
/// let job = registry.register("Job");
/// let machine = registry.register("Machine");
///
/// assert_ne!(job, machine);
/// assert_eq!(registry.register("JOB"), job);
/// assert_eq!(registry.lookup("machine"), Some(machine));
/// assert_eq!(registry.name_of(job), Some("Job"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    names: Vec<String>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Registers a type name and returns its number, reusing the existing
    /// number if the name (case-insensitively) is already present.
    pub fn register(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(number) = self.lookup(&name) {
            return number;
        }
        self.names.push(name);
        self.names.len() - 1
    }

    /// Finds the number for a type name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|registered| registered.eq_ignore_ascii_case(name))
    }

    /// Returns the name registered under a number, in its original spelling.
    #[must_use]
    pub fn name_of(&self, number: usize) -> Option<&str> {
        self.names.get(number).map(String::as_str)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
