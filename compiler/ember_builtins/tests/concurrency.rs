//! Builtins invoked from many threads against shared inputs.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use ember_builtins::{builtins, lookup_builtin};
use ember_object::Value;
use rayon::prelude::*;

#[test]
fn concurrent_calls_share_one_array() {
    let shared = Value::array((0..100).map(Value::integer).collect());
    let push = lookup_builtin("push").expect("push is registered");

    let results: Vec<Value> = (0..1_000_i64)
        .into_par_iter()
        .map(|i| push.call(&[shared.clone(), Value::integer(i)]))
        .collect();

    for (i, result) in (0..1_000_i64).zip(&results) {
        let items = result.as_array().expect("push returns an array");
        assert_eq!(items.len(), 101);
        assert_eq!(items.last(), Some(&Value::integer(i)));
    }
    assert_eq!(shared.as_array().map(<[Value]>::len), Some(100));
}

#[test]
fn concurrent_registry_lookups() {
    let names = ["len", "first", "last", "rest", "push"];

    let found: Vec<bool> = (0..500_usize)
        .into_par_iter()
        .map(|i| builtins().contains(names[i % names.len()]))
        .collect();

    assert!(found.into_iter().all(|hit| hit));
}

#[test]
fn concurrent_rest_on_shared_string() {
    let shared = Value::string("abcdef");
    let rest = lookup_builtin("rest").expect("rest is registered");

    let all_equal = (0..200)
        .into_par_iter()
        .map(|_| rest.call(&[shared.clone()]))
        .all(|v| v == Value::string("bcdef"));

    assert!(all_equal);
    assert_eq!(shared, Value::string("abcdef"));
}
