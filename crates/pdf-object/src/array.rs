//! Ordered PDF arrays.

use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::types::Object;

/// An ordered sequence of objects. Dereferences to `Vec<Object>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Array(pub Vec<Object>);

impl Array {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Integer element at `index`, or `None` if out of range or not an integer.
    pub fn int_at(&self, index: usize) -> Option<i64> {
        match self.0.get(index) {
            Some(Object::Integer(i)) => Some(*i),
            _ => None,
        }
    }
}

impl Deref for Array {
    type Target = Vec<Object>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Array {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<Object>> for Array {
    fn from(items: Vec<Object>) -> Self {
        Self(items)
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<I: IntoIterator<Item = Object>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Object;
    type IntoIter = std::slice::Iter<'a, Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
