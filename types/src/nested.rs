//! Arbitrarily nested sequences.

use serde::{Deserialize, Serialize};

use crate::Value;

/// A sequence element that is either a leaf or another sequence.
///
/// Only `List` is ever descended into. A leaf holding a string, a map or
/// anything else stays a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    List(Vec<Nested<T>>),
    Leaf(T),
}

impl<T> Nested<T> {
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    #[must_use]
    pub fn list(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Self::List(items.into_iter().collect())
    }
}

/// `Value::List` becomes `Nested::List` at every depth; everything else is a leaf.
impl From<Value> for Nested<Value> {
    fn from(value: Value) -> Self {
        match value {
            Value::List(items) => Self::List(items.into_iter().map(Self::from).collect()),
            other => Self::Leaf(other),
        }
    }
}
