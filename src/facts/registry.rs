//! Named fact resolvers

use std::collections::BTreeMap;
use std::fmt;

type Resolver = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Holds zero-argument resolvers keyed by fact name
#[derive(Default)]
pub struct FactRegistry {
    facts: BTreeMap<String, Resolver>,
}

impl FactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resolver` under `name`, replacing any earlier resolver.
    pub fn add<F>(&mut self, name: impl Into<String>, resolver: F)
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.facts.insert(name.into(), Box::new(resolver));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.facts.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.facts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// Resolve a single fact. Unknown names and unset values are both `None`.
    pub fn value(&self, name: &str) -> Option<String> {
        self.facts.get(name).and_then(|resolve| resolve())
    }

    /// Resolve every fact in name order, leaving out unset ones.
    pub fn resolve_all(&self) -> BTreeMap<String, String> {
        self.facts
            .iter()
            .filter_map(|(name, resolve)| resolve().map(|value| (name.clone(), value)))
            .collect()
    }
}

impl fmt::Debug for FactRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FactRegistry")
            .field("facts", &self.facts.keys().collect::<Vec<_>>())
            .finish()
    }
}
