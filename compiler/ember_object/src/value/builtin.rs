//! Native functions as first-class values.

use std::fmt;

use super::Value;
use crate::errors::ErrorValue;

/// Signature of a native function.
///
/// Arguments arrive fully evaluated, as one slice. Failures are returned as
/// `Err` and become an `Error` value at the call boundary.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, ErrorValue>;

/// A named native function.
#[derive(Clone, Copy)]
pub struct BuiltinFunction {
    name: &'static str,
    func: BuiltinFn,
}

impl BuiltinFunction {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        BuiltinFunction { name, func }
    }

    /// The name the function is registered under.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the function, keeping failures as `Err`.
    #[tracing::instrument(level = "trace", skip(self, args), fields(builtin = self.name, argc = args.len()))]
    pub fn try_call(&self, args: &[Value]) -> Result<Value, ErrorValue> {
        let result = (self.func)(args);
        if let Err(err) = &result {
            tracing::debug!(builtin = self.name, error = %err, "builtin returned an error");
        }
        result
    }

    /// Invoke the function with already-evaluated arguments.
    ///
    /// Always yields exactly one value: the result, or an `Error` value.
    pub fn call(&self, args: &[Value]) -> Value {
        self.try_call(args).unwrap_or_else(Value::error)
    }
}

// Builtins are identified by name; the registry never holds two with the same name.
impl PartialEq for BuiltinFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for BuiltinFunction {}

impl fmt::Debug for BuiltinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFunction({})", self.name)
    }
}
