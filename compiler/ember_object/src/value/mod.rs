//! Runtime values for the Ember interpreter.
//!
//! # Closed Variant Set
//!
//! `Value` is a plain enum. Every dispatch over it in this workspace matches
//! all variants by name (no `_` arm), so adding a variant is a compile error
//! at each site that must decide how to treat it: type tags, rendering,
//! equality, hashing and every builtin.
//!
//! # Heap Enforcement
//!
//! Strings, arrays and errors keep their payload in a `Heap<T>`, whose
//! constructors are private to this module. Build them through the factory
//! methods:
//!
//! ```text
//! let s = Value::string("hello");                      // OK
//! let a = Value::array(vec![Value::integer(1)]);       // OK
//! let s = Value::Str(Heap::from_slice(b"hello"));      // ERROR: not visible
//! ```
//!
//! # Singletons
//!
//! `Null` and the two booleans carry no heap payload, so every copy of
//! `Value::NULL`, `Value::TRUE` or `Value::FALSE` is the same immutable
//! instance. Code that needs one of them uses the associated constant (or
//! `Value::from_bool`) instead of spelling out the variant.

mod builtin;
mod heap;
mod object_type;

use std::fmt;

pub use builtin::{BuiltinFn, BuiltinFunction};
pub use heap::Heap;
pub use object_type::ObjectType;

use crate::errors::ErrorValue;

/// Runtime value in the Ember interpreter.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),
    /// Boolean. Use `Value::TRUE` / `Value::FALSE`.
    Boolean(bool),
    /// The null value. Use `Value::NULL`.
    Null,
    /// Owned byte string.
    ///
    /// String operations are byte-oriented: the contents need not be valid
    /// UTF-8 once a builtin has sliced through a multi-byte character.
    Str(Heap<[u8]>),
    /// Ordered sequence of values.
    Array(Heap<[Value]>),
    /// Native function.
    Builtin(BuiltinFunction),
    /// Error produced by a builtin or by the evaluator.
    Error(Heap<ErrorValue>),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// The shared null value.
    pub const NULL: Value = Value::Null;

    /// The shared `true` value.
    pub const TRUE: Value = Value::Boolean(true);

    /// The shared `false` value.
    pub const FALSE: Value = Value::Boolean(false);

    #[inline]
    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    /// Return the shared boolean instance for `b`.
    #[inline]
    pub fn from_bool(b: bool) -> Self {
        if b {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    /// Create a string value from raw bytes.
    ///
    /// # Example
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let b = Value::string([0xff_u8]);
    /// ```
    #[inline]
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Value::Str(Heap::from_slice(bytes.as_ref()))
    }

    /// Create an array value that owns `items`.
    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::from_vec(items))
    }

    /// Wrap `err` as an error value.
    #[inline]
    pub fn error(err: ErrorValue) -> Self {
        Value::Error(Heap::new(err))
    }
}

// Value Methods

impl Value {
    /// The type tag of this value.
    pub fn object_type(&self) -> ObjectType {
        match self {
            Value::Integer(_) => ObjectType::Integer,
            Value::Boolean(_) => ObjectType::Boolean,
            Value::Null => ObjectType::Null,
            Value::Str(_) => ObjectType::String,
            Value::Array(_) => ObjectType::Array,
            Value::Builtin(_) => ObjectType::Builtin,
            Value::Error(_) => ObjectType::Error,
        }
    }

    /// Human-readable rendering, as printed by the interpreter.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The raw bytes of a string value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Str(bytes) => Some(&**bytes),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(&**items),
            _ => None,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn error_value(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(err) => Some(&**err),
            _ => None,
        }
    }

    /// Split an error value off for propagation with `?`.
    ///
    /// The evaluator uses this to short-circuit the enclosing expression as
    /// soon as any sub-expression or builtin call yields an `Error`.
    pub fn into_result(self) -> Result<Value, ErrorValue> {
        match self {
            Value::Error(err) => Err(ErrorValue::clone(&err)),
            value => Ok(value),
        }
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Null => write!(f, "Null"),
            Value::Str(bytes) => write!(f, "Str({:?})", String::from_utf8_lossy(bytes)),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Builtin(func) => write!(f, "Builtin({})", func.name()),
            Value::Error(err) => write!(f, "Error({:?})", err.message()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::Str(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Builtin(_) => write!(f, "builtin function"),
            Value::Error(err) => write!(f, "ERROR: {}", err.message()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (
                Value::Integer(_)
                | Value::Boolean(_)
                | Value::Null
                | Value::Str(_)
                | Value::Array(_)
                | Value::Builtin(_)
                | Value::Error(_),
                _,
            ) => false,
        }
    }
}

impl Eq for Value {}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::integer(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::from_bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::array(items)
    }
}

impl From<ErrorValue> for Value {
    fn from(err: ErrorValue) -> Self {
        Value::error(err)
    }
}
