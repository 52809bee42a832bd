//! Error values for builtins and map construction.
//!
//! Errors in Ember are ordinary values: a failing builtin returns an
//! `Error` value rather than unwinding, and the evaluator passes it upward
//! like any other result until it reaches the program's output.
//!
//! `ErrorKind` gives each failure a typed category; its `Display` output is
//! the message interpreted programs see, and these strings are relied upon
//! by tooling and tests. Factory functions (`wrong_arg_count()`, ...) are the
//! public way to build errors.

use thiserror::Error;

use crate::value::ObjectType;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// A builtin was called with the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount { got: usize, want: usize },

    /// A builtin does not accept an argument of this type.
    #[error("argument to `{builtin}` not supported, got {got}")]
    UnsupportedArgument {
        builtin: &'static str,
        got: ObjectType,
    },

    /// A sequence builtin got something other than an array or a string.
    #[error("argument to `{builtin}` not supported, got {got}, must be ARRAY or STRING")]
    ExpectedSequence {
        builtin: &'static str,
        got: ObjectType,
    },

    /// A builtin that only works on arrays got another type.
    #[error("argument to `{builtin}` must be ARRAY, got {got}")]
    ExpectedArray {
        builtin: &'static str,
        got: ObjectType,
    },

    /// A value outside the hashable subset was used as a map key.
    #[error("unusable as hash key: {got}")]
    UnusableAsHashKey { got: ObjectType },

    /// Errors raised by the evaluator that have no category of their own.
    #[error("{message}")]
    Custom { message: String },
}

/// The payload of a `Value::Error`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct ErrorValue {
    kind: ErrorKind,
    message: String,
}

impl ErrorValue {
    /// Create an error with just a message.
    ///
    /// Uses the `Custom` kind. Prefer the factory functions when a specific
    /// kind applies.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ErrorKind::Custom {
                message: message.clone(),
            },
            message,
        }
    }

    /// Create an error from a kind; the message is the kind's `Display`.
    pub fn from_kind(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<ErrorKind> for ErrorValue {
    fn from(kind: ErrorKind) -> Self {
        ErrorValue::from_kind(kind)
    }
}

// Builtin Argument Errors

/// Wrong number of arguments to a builtin.
#[cold]
pub fn wrong_arg_count(got: usize, want: usize) -> ErrorValue {
    ErrorValue::from_kind(ErrorKind::WrongArgumentCount { got, want })
}

/// Argument type not accepted by `builtin`.
#[cold]
pub fn unsupported_argument(builtin: &'static str, got: ObjectType) -> ErrorValue {
    ErrorValue::from_kind(ErrorKind::UnsupportedArgument { builtin, got })
}

/// `builtin` needs an array or a string.
#[cold]
pub fn expected_sequence(builtin: &'static str, got: ObjectType) -> ErrorValue {
    ErrorValue::from_kind(ErrorKind::ExpectedSequence { builtin, got })
}

/// `builtin` needs an array.
#[cold]
pub fn expected_array(builtin: &'static str, got: ObjectType) -> ErrorValue {
    ErrorValue::from_kind(ErrorKind::ExpectedArray { builtin, got })
}

// Map Construction Errors

/// Map key outside the hashable subset.
#[cold]
pub fn unusable_as_hash_key(got: ObjectType) -> ErrorValue {
    ErrorValue::from_kind(ErrorKind::UnusableAsHashKey { got })
}
