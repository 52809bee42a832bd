//! Hash keys for map construction.
//!
//! Only integers, booleans and strings may be used as map keys. The map
//! object asks `Value::as_hashable()` first; a `Hashable` is the only thing
//! a key can be computed from, so hashing an array or a null is not an
//! expressible operation.
//!
//! # Contract
//!
//! Equal contents give equal keys, always: the key depends only on the type
//! tag and the value's bytes, never on where or when the value was built.
//! Different contents give different keys with overwhelming probability, but
//! string keys can collide. A map must keep the original key value and
//! compare it exactly when two keys share a bucket.
//!
//! # Strategy
//!
//! - Integer: the two's-complement bit pattern.
//! - Boolean: `1` for true, `0` for false.
//! - String: `FxHasher` over the raw bytes. Fx is unseeded, so the hash is
//!   the same on every call, thread and process.

use std::fmt;
use std::hash::Hasher;

use rustc_hash::FxHasher;

use crate::errors::{unusable_as_hash_key, ErrorValue};
use crate::value::{ObjectType, Value};

/// A (type, hash) pair identifying a map key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashKey {
    pub object_type: ObjectType,
    pub value: u64,
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:#018x}", self.object_type, self.value)
    }
}

/// Borrowed view of a value in the hashable subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hashable<'a> {
    Integer(i64),
    Boolean(bool),
    Str(&'a [u8]),
}

impl Hashable<'_> {
    pub fn object_type(self) -> ObjectType {
        match self {
            Hashable::Integer(_) => ObjectType::Integer,
            Hashable::Boolean(_) => ObjectType::Boolean,
            Hashable::Str(_) => ObjectType::String,
        }
    }

    /// Compute the key for this value.
    pub fn hash_key(self) -> HashKey {
        let value = match self {
            Hashable::Integer(n) => u64::from_ne_bytes(n.to_ne_bytes()),
            Hashable::Boolean(b) => u64::from(b),
            Hashable::Str(bytes) => hash_bytes(bytes),
        };
        HashKey {
            object_type: self.object_type(),
            value,
        }
    }
}

/// Content hash of a byte string.
fn hash_bytes(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(bytes);
    hasher.finish()
}

impl Value {
    /// The hashable view of this value, if it may be used as a map key.
    pub fn as_hashable(&self) -> Option<Hashable<'_>> {
        match self {
            Value::Integer(n) => Some(Hashable::Integer(*n)),
            Value::Boolean(b) => Some(Hashable::Boolean(*b)),
            Value::Str(bytes) => Some(Hashable::Str(&**bytes)),
            Value::Null | Value::Array(_) | Value::Builtin(_) | Value::Error(_) => None,
        }
    }

    /// Whether this value may be used as a map key.
    #[inline]
    pub fn is_hashable(&self) -> bool {
        self.as_hashable().is_some()
    }

    /// The key for this value, or `None` outside the hashable subset.
    #[inline]
    pub fn hash_key(&self) -> Option<HashKey> {
        self.as_hashable().map(Hashable::hash_key)
    }
}

/// Key for a map literal entry, or the error the map literal fails with.
pub fn hash_key_or_error(key: &Value) -> Result<HashKey, ErrorValue> {
    key.hash_key()
        .ok_or_else(|| unusable_as_hash_key(key.object_type()))
}
