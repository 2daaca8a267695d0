// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Dense, index-keyed storage for per-node and per-arc values.
//!
//! `IndexMap<T, V>` is a `Vec<V>` that can only be addressed with a
//! `TypedIndex<T>`. The aliases `NodeMap<V>` and `ArcMap<V>` are what the
//! algorithms use for potentials, predecessors, flows and lengths. Because
//! the key is typed, indexing a node map with an arc is a compile error.
//!
//! Maps are sized once, usually through `Digraph::node_map` or
//! `Digraph::arc_map`, and never grow afterwards.

use crate::index::{ArcIndexTag, NodeIndexTag};
use tandem_core::index::TypedIndex;

/// A dense map from `TypedIndex<T>` keys to values of type `V`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexMap<T, V> {
    values: Vec<V>,
    _marker: std::marker::PhantomData<T>,
}

/// A map storing one value per node.
pub type NodeMap<V> = IndexMap<NodeIndexTag, V>;

/// A map storing one value per arc.
pub type ArcMap<V> = IndexMap<ArcIndexTag, V>;

impl<T, V> IndexMap<T, V> {
    /// Creates a map with `len` entries, each a clone of `value`.
    #[inline]
    pub fn with_len(len: usize, value: V) -> Self
    where
        V: Clone,
    {
        Self {
            values: vec![value; len],
            _marker: std::marker::PhantomData,
        }
    }

    /// Creates a map whose entry `i` is `values[i]`.
    #[inline]
    pub fn from_vec(values: Vec<V>) -> Self {
        Self {
            values,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a reference to the value at `key`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, key: TypedIndex<T>) -> Option<&V> {
        self.values.get(key.get())
    }

    /// Overwrites the value at `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not within `0..len()`.
    #[inline]
    pub fn set(&mut self, key: TypedIndex<T>, value: V) {
        let index = key.get();
        assert!(
            index < self.values.len(),
            "called `IndexMap::set` with key out of bounds: the len is {} but the index is {}",
            self.values.len(),
            index
        );
        self.values[index] = value;
    }

    /// Overwrites every entry with a clone of `value`.
    #[inline]
    pub fn fill(&mut self, value: V)
    where
        V: Clone,
    {
        self.values.fill(value);
    }

    /// Returns all values as a slice, in key order.
    #[inline]
    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    /// Returns all values as a mutable slice, in key order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [V] {
        &mut self.values
    }

    /// Returns an iterator over `(key, &value)` pairs in key order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (TypedIndex<T>, &V)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (TypedIndex::new(i), v))
    }

    /// Returns an iterator over the values in key order.
    #[inline]
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }

    /// Consumes the map and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<V> {
        self.values
    }
}

impl<T, V> std::ops::Index<TypedIndex<T>> for IndexMap<T, V> {
    type Output = V;

    #[inline]
    fn index(&self, key: TypedIndex<T>) -> &Self::Output {
        &self.values[key.get()]
    }
}

impl<T, V> std::ops::IndexMut<TypedIndex<T>> for IndexMap<T, V> {
    #[inline]
    fn index_mut(&mut self, key: TypedIndex<T>) -> &mut Self::Output {
        &mut self.values[key.get()]
    }
}

impl<T, V> FromIterator<V> for IndexMap<T, V> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, V> std::fmt::Debug for IndexMap<T, V>
where
    V: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.values.iter()).finish()
    }
}
