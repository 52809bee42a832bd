//! Ember Object - runtime value model for the Ember interpreter.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, `BuiltinFunction`) and their type tags
//! - Hash keys for the hashable subset of values (`HashKey`, `Hashable`)
//! - Error values produced by builtins and the evaluator (`ErrorValue`, `ErrorKind`)
//!
//! # Value Sharing
//!
//! Values are immutable once built. Heap-backed variants share their storage
//! through `Heap<T>` (an `Arc`), so cloning a `Value` never copies elements
//! and a value may be aliased freely across the interpreter and across threads.
//! Operations that "modify" a sequence build a new one.

mod errors;
mod hash_key;
mod value;

pub use errors::{
    // Builtin argument errors
    expected_array,
    expected_sequence,
    unsupported_argument,
    wrong_arg_count,
    // Map construction errors
    unusable_as_hash_key,
    ErrorKind,
    ErrorValue,
};
pub use hash_key::{hash_key_or_error, HashKey, Hashable};
pub use value::{BuiltinFn, BuiltinFunction, Heap, ObjectType, Value};
