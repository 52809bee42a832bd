//! `len`, `first`, `last` and `rest` over arrays and strings.
//!
//! Strings are treated as bytes: `first("é")` is a one-byte string holding
//! the first half of the UTF-8 encoding, and `len("é")` is `2`.

use ember_object::{expected_sequence, unsupported_argument, Value};

use super::{len_to_value, require_args, BuiltinResult};

/// `len(x)`: number of elements of an array, or bytes of a string.
pub fn len(args: &[Value]) -> BuiltinResult {
    let [arg] = require_args::<1>(args)?;
    match arg {
        Value::Array(items) => len_to_value(items.len(), arg.object_type()),
        Value::Str(bytes) => len_to_value(bytes.len(), arg.object_type()),
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Builtin(_)
        | Value::Error(_) => Err(unsupported_argument("len", arg.object_type())),
    }
}

/// `first(x)`: first element, or first byte as a one-byte string.
pub fn first(args: &[Value]) -> BuiltinResult {
    let [arg] = require_args::<1>(args)?;
    match arg {
        Value::Array(items) => Ok(items.first().cloned().unwrap_or(Value::NULL)),
        Value::Str(bytes) => Ok(bytes.first().map_or(Value::NULL, |&byte| byte_string(byte))),
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Builtin(_)
        | Value::Error(_) => Err(expected_sequence("first", arg.object_type())),
    }
}

/// `last(x)`: last element, or last byte as a one-byte string.
pub fn last(args: &[Value]) -> BuiltinResult {
    let [arg] = require_args::<1>(args)?;
    match arg {
        Value::Array(items) => Ok(items.last().cloned().unwrap_or(Value::NULL)),
        Value::Str(bytes) => Ok(bytes.last().map_or(Value::NULL, |&byte| byte_string(byte))),
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Builtin(_)
        | Value::Error(_) => Err(expected_sequence("last", arg.object_type())),
    }
}

/// `rest(x)`: a new array or string without the first element or byte.
///
/// `rest` of an empty sequence is null, not an empty sequence.
pub fn rest(args: &[Value]) -> BuiltinResult {
    let [arg] = require_args::<1>(args)?;
    match arg {
        Value::Array(items) => Ok(items
            .split_first()
            .map_or(Value::NULL, |(_, tail)| Value::array(tail.to_vec()))),
        Value::Str(bytes) => Ok(bytes
            .split_first()
            .map_or(Value::NULL, |(_, tail)| Value::string(tail))),
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Builtin(_)
        | Value::Error(_) => Err(expected_sequence("rest", arg.object_type())),
    }
}

fn byte_string(byte: u8) -> Value {
    Value::string([byte])
}
