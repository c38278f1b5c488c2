//! Lazy capability registry.
//!
//! Maps a capability name to a factory function that is invoked on first
//! lookup and cached for every lookup after that. This makes the "construct
//! rarely-used components only when first touched" pattern explicit instead
//! of relying on import-time side effects.

use std::collections::HashMap;

type Factory<T> = Box<dyn Fn() -> T + Send>;

/// Registry of named, lazily constructed values.
pub struct LazyRegistry<T> {
    factories: HashMap<String, Factory<T>>,
    built: HashMap<String, T>,
}

impl<T> Default for LazyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LazyRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
            built: HashMap::new(),
        }
    }

    /// Register a factory under `name`. A later registration under the same
    /// name replaces the factory but not an already-built instance.
    pub fn register(&mut self, name: impl Into<String>, factory: impl Fn() -> T + Send + 'static) {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Look up `name`, constructing and caching the value on first access.
    ///
    /// Returns `None` when no factory was registered under `name`.
    pub fn get(&mut self, name: &str) -> Option<&T> {
        if !self.built.contains_key(name) {
            let factory = self.factories.get(name)?;
            let value = factory();
            self.built.insert(name.to_string(), value);
        }
        self.built.get(name)
    }

    /// Whether the value for `name` has already been constructed.
    pub fn is_built(&self, name: &str) -> bool {
        self.built.contains_key(name)
    }

    /// All registered capability names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
