//! Type tags for runtime values.

use std::fmt;

/// The type tag of a [`Value`](super::Value).
///
/// One tag per variant; the rendered names are what interpreted programs and
/// error messages see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    Error,
    String,
    Array,
    Builtin,
}

impl ObjectType {
    /// The tag as it appears in error messages (`INTEGER`, `STRING`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            ObjectType::Integer => "INTEGER",
            ObjectType::Boolean => "BOOLEAN",
            ObjectType::Null => "NULL",
            ObjectType::Error => "ERROR",
            ObjectType::String => "STRING",
            ObjectType::Array => "ARRAY",
            ObjectType::Builtin => "BUILTIN",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
