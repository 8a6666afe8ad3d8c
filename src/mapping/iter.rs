use std::collections::hash_map;

use crate::Value;

/// An immutable iterator over a [`Mapping`][crate::Mapping].
///
/// See [`Mapping::iter`][crate::Mapping::iter].
pub struct Iter<'a> {
    iter: hash_map::Iter<'a, String, Value>,
}

impl<'a> Iter<'a> {
    #[inline]
    pub(crate) fn new(iter: hash_map::Iter<'a, String, Value>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// A mutable iterator over a [`Mapping`][crate::Mapping].
///
/// Keys cannot be modified, but values can.
///
/// See [`Mapping::iter_mut`][crate::Mapping::iter_mut].
pub struct IterMut<'a> {
    iter: hash_map::IterMut<'a, String, Value>,
}

impl<'a> IterMut<'a> {
    #[inline]
    pub(crate) fn new(iter: hash_map::IterMut<'a, String, Value>) -> Self {
        Self { iter }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = (&'a str, &'a mut Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (key, value) = self.iter.next()?;
        Some((key.as_str(), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for IterMut<'_> {}

/// An owning iterator over a [`Mapping`][crate::Mapping].
pub struct IntoIter {
    iter: hash_map::IntoIter<String, Value>,
}

impl IntoIter {
    #[inline]
    pub(crate) fn new(iter: hash_map::IntoIter<String, Value>) -> Self {
        Self { iter }
    }
}

impl Iterator for IntoIter {
    type Item = (String, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}
