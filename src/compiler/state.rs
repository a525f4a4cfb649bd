//! The function table and diagnostic slot filled in by the compiler.
use log::{debug, warn};

use crate::ext::ordered_hash_map::OrderedHashMap;

use super::diagnostic::Diagnostic;

/// A function declared by a `defn` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    name: String,
    params: Vec<String>,
}

impl FunctionDefinition {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    /// Parameter names in declaration order. Duplicates are kept.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

/// Everything the compiler learned about a compilation unit.
///
/// Create one state per unit and pass it by exclusive reference to each
/// compile call. The state has no internal synchronisation, so independent
/// inputs that are compiled concurrently need independent states.
#[derive(Debug, Default)]
pub struct CompilationState {
    functions: OrderedHashMap<String, FunctionDefinition>,
    diagnostic: Option<Diagnostic>,
}

impl CompilationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// All registered functions, in the order they were first defined.
    pub fn functions(&self) -> &OrderedHashMap<String, FunctionDefinition> {
        &self.functions
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDefinition> {
        self.functions.get(name)
    }

    /// The diagnostic reported by the most recent compile call, if it failed.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostic.is_none()
    }

    pub(super) fn register(&mut self, function: FunctionDefinition) {
        debug!(
            "Registering function {} with params {:?}",
            function.name, function.params
        );
        if let Some(previous) = self.functions.insert(function.name.clone(), function) {
            warn!("Function {} was redefined", previous.name);
        }
    }

    pub(super) fn report(&mut self, diagnostic: Diagnostic) {
        debug!("Reporting diagnostic: {}", diagnostic);
        self.diagnostic = Some(diagnostic);
    }

    pub(super) fn clear_diagnostic(&mut self) {
        self.diagnostic = None;
    }
}
