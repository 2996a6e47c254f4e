//! Name-keyed directory of generators

use crate::{GenerateError, GenerateResult, GeneratorDescriptor, Target};
use std::collections::HashMap;

/// Directory of generators keyed by name.
///
/// Populate it once at startup, then share it read-only (for example in an
/// `Arc`); lookups and [`Registry::generate`] only need `&self`.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    generators: HashMap<String, GeneratorDescriptor>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in generator
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for target in Target::ALL {
            registry.register(GeneratorDescriptor::builtin(target));
        }
        registry
    }

    /// Register a generator, replacing any entry with the same name
    pub fn register(&mut self, descriptor: GeneratorDescriptor) {
        if let Some(previous) = self.generators.insert(descriptor.name.clone(), descriptor) {
            tracing::debug!(generator = %previous.name, "replaced registered generator");
        }
    }

    /// Look up a generator by name
    pub fn lookup(&self, name: &str) -> Option<&GeneratorDescriptor> {
        self.generators.get(name)
    }

    /// All registered generators, in no particular order
    pub fn list_all(&self) -> Vec<&GeneratorDescriptor> {
        self.generators.values().collect()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.generators.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered generators
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Whether no generators are registered
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Run the generator registered under `name` on `input`.
    ///
    /// An unknown name yields [`GenerateError::NotFound`] carrying the sorted
    /// list of valid names.
    pub fn generate(&self, name: &str, input: &str) -> GenerateResult<String> {
        let descriptor = self.lookup(name).ok_or_else(|| GenerateError::NotFound {
            name: name.to_string(),
            available: self.names(),
        })?;

        tracing::debug!(generator = name, input_len = input.len(), "generating");
        descriptor.generate(input)
    }
}
