//! Registry of builtin functions, looked up by name.
//!
//! The table is fixed at compile time. The process-wide instance is built on
//! first use and never changes afterwards, so any number of evaluator
//! threads may read it without locking.

use std::sync::OnceLock;

use ember_object::{BuiltinFunction, Value};
use rustc_hash::FxHashMap;

use crate::builtins::{first, last, len, push, rest};

/// Every builtin, in the order they are documented.
const BUILTINS: [BuiltinFunction; 5] = [
    BuiltinFunction::new("len", len),
    BuiltinFunction::new("first", first),
    BuiltinFunction::new("last", last),
    BuiltinFunction::new("rest", rest),
    BuiltinFunction::new("push", push),
];

/// Global builtin registry singleton.
static GLOBAL_REGISTRY: OnceLock<BuiltinRegistry> = OnceLock::new();

/// Immutable map from builtin name to native function.
pub struct BuiltinRegistry {
    functions: FxHashMap<&'static str, BuiltinFunction>,
}

impl BuiltinRegistry {
    /// Create a registry holding every builtin.
    pub fn new() -> Self {
        BuiltinRegistry {
            functions: BUILTINS.iter().map(|f| (f.name(), *f)).collect(),
        }
    }

    /// Look up a builtin by name.
    pub fn get(&self, name: &str) -> Option<&BuiltinFunction> {
        self.functions.get(name)
    }

    /// Look up a builtin as a first-class value, for binding in a scope.
    pub fn value(&self, name: &str) -> Option<Value> {
        self.get(name).copied().map(Value::Builtin)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// All registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &BuiltinFunction> + '_ {
        self.functions.values()
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry (lazily initialized).
pub fn builtins() -> &'static BuiltinRegistry {
    GLOBAL_REGISTRY.get_or_init(|| {
        let registry = BuiltinRegistry::new();
        tracing::debug!(count = registry.len(), "builtin registry initialized");
        registry
    })
}

/// Resolve `name` against the process-wide registry.
#[inline]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinFunction> {
    builtins().get(name)
}
