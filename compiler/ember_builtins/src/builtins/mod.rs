//! Builtin implementations and their shared argument checks.

mod push;
mod sequence;

pub(crate) use push::push;
pub(crate) use sequence::{first, last, len, rest};

use ember_object::{wrong_arg_count, ErrorValue, ObjectType, Value};

type BuiltinResult = Result<Value, ErrorValue>;

/// Check the argument count and hand the arguments back as a fixed-size array.
///
/// Every builtin calls this first, before looking at any argument's type.
#[inline]
fn require_args<const N: usize>(args: &[Value]) -> Result<&[Value; N], ErrorValue> {
    args.try_into().map_err(|_| wrong_arg_count(args.len(), N))
}

/// Convert a sequence length to an `Integer`, failing if it does not fit.
fn len_to_value(len: usize, object_type: ObjectType) -> BuiltinResult {
    i64::try_from(len)
        .map(Value::integer)
        .map_err(|_| ErrorValue::new(format!("{object_type} too large")))
}
