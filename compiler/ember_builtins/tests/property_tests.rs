//! Property-based tests for builtin purity.
//!
//! A builtin may share or copy its input but never change it: after any call,
//! the argument values compare equal to snapshots taken before the call.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ember_builtins::lookup_builtin;
use ember_object::Value;
use proptest::prelude::*;

fn call(name: &str, args: &[Value]) -> Value {
    lookup_builtin(name).expect("registered builtin").call(args)
}

fn int_array(values: &[i64]) -> Value {
    Value::array(values.iter().copied().map(Value::integer).collect())
}

proptest! {
    #[test]
    fn push_extends_by_one_and_keeps_input(values in prop::collection::vec(any::<i64>(), 0..32), extra in any::<i64>()) {
        let input = int_array(&values);
        let snapshot = int_array(&values);

        let pushed = call("push", &[input.clone(), Value::integer(extra)]);

        prop_assert_eq!(&input, &snapshot);
        prop_assert_eq!(call("len", &[input]), Value::integer(values.len() as i64));
        let items = pushed.as_array().unwrap();
        prop_assert_eq!(items.len(), values.len() + 1);
        prop_assert_eq!(items.last(), Some(&Value::integer(extra)));
    }

    #[test]
    fn rest_drops_exactly_one_and_keeps_input(values in prop::collection::vec(any::<i64>(), 1..32)) {
        let input = int_array(&values);
        let snapshot = int_array(&values);

        let tail = call("rest", &[input.clone()]);

        prop_assert_eq!(&input, &snapshot);
        prop_assert_eq!(tail, int_array(&values[1..]));
    }

    #[test]
    fn string_builtins_agree_on_bytes(bytes in prop::collection::vec(any::<u8>(), 1..32)) {
        let s = Value::string(&bytes);

        prop_assert_eq!(call("len", &[s.clone()]), Value::integer(bytes.len() as i64));
        prop_assert_eq!(call("first", &[s.clone()]), Value::string(&bytes[..1]));
        prop_assert_eq!(call("last", &[s.clone()]), Value::string(&bytes[bytes.len() - 1..]));
        prop_assert_eq!(call("rest", &[s.clone()]), Value::string(&bytes[1..]));
        prop_assert_eq!(s, Value::string(&bytes));
    }

    #[test]
    fn first_and_last_match_slice_ends(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let input = int_array(&values);
        let expected_first = values.first().map_or(Value::NULL, |&n| Value::integer(n));
        let expected_last = values.last().map_or(Value::NULL, |&n| Value::integer(n));

        prop_assert_eq!(call("first", &[input.clone()]), expected_first);
        prop_assert_eq!(call("last", &[input]), expected_last);
    }
}
