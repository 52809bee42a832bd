//! `push(array, value)`.

use ember_object::{expected_array, Value};

use super::{require_args, BuiltinResult};

/// A new array holding the elements of `array` followed by `value`.
///
/// The input array is left as it was; callers holding it still see the old
/// length.
pub fn push(args: &[Value]) -> BuiltinResult {
    let [target, value] = require_args::<2>(args)?;
    match target {
        Value::Array(items) => {
            let mut extended = Vec::with_capacity(items.len().saturating_add(1));
            extended.extend_from_slice(items);
            extended.push(value.clone());
            Ok(Value::array(extended))
        }
        Value::Integer(_)
        | Value::Boolean(_)
        | Value::Null
        | Value::Str(_)
        | Value::Builtin(_)
        | Value::Error(_) => Err(expected_array("push", target.object_type())),
    }
}
