//! Fixed-arity container for three values.
//!
//! Matches always involve exactly three cards, so results that name a match
//! use `Triple` rather than a `Vec`.

use serde::{Deserialize, Serialize};

/// Exactly three values, in a meaningful order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triple<T>(pub [T; 3]);

impl<T> Triple<T> {
    /// Create a triple.
    #[must_use]
    pub fn new(first: T, second: T, third: T) -> Self {
        Self([first, second, third])
    }

    /// Elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Apply `f` to each element.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Triple<U> {
        Triple(self.0.map(f))
    }
}

impl<T: PartialEq> Triple<T> {
    /// Whether any element equals `value`.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

impl<T> From<[T; 3]> for Triple<T> {
    fn from(elements: [T; 3]) -> Self {
        Self(elements)
    }
}

impl<T> IntoIterator for Triple<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 3>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Triple<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
