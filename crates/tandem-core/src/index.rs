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

//! # Strongly Typed Indices
//!
//! Graph algorithms juggle several dense index spaces at once: nodes, arcs,
//! heap slots. Passing all of them around as bare `usize` makes it easy to
//! look up a node map with an arc identifier and never notice. `TypedIndex<T>`
//! wraps a `usize` together with a zero-sized tag type, so the compiler keeps
//! the spaces apart while the generated code stays a plain `usize`.
//!
//! ## Usage
//!
//! ```rust
//! use tandem_core::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
//! struct NodeTag;
//! impl TypedIndexTag for NodeTag { const NAME: &'static str = "Node"; }
//!
//! type Node = TypedIndex<NodeTag>;
//! let n = Node::new(3);
//! assert_eq!(n.get(), 3);
//! assert_eq!(format!("{}", n), "Node(3)");
//! ```

/// A tag giving a typed index a human readable name for `Debug` and `Display`.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A `usize` index bound to the index space described by the tag `T`.
///
/// # Examples
///
/// ```rust
/// # use tandem_core::index::{TypedIndex, TypedIndexTag};
/// #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// struct ArcTag;
///
/// impl TypedIndexTag for ArcTag {
///     const NAME: &'static str = "Arc";
/// }
///
/// let a = TypedIndex::<ArcTag>::new(7);
/// let raw: usize = a.into();
/// assert_eq!(raw, 7);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Wraps the raw index `index`.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Returns the raw index.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }

    /// Returns an iterator over the first `count` indices of this space,
    /// in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use tandem_core::index::{TypedIndex, TypedIndexTag};
    /// # #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    /// # struct NodeTag;
    /// # impl TypedIndexTag for NodeTag { const NAME: &'static str = "Node"; }
    /// let all: Vec<usize> = TypedIndex::<NodeTag>::range(3).map(|n| n.get()).collect();
    /// assert_eq!(all, vec![0, 1, 2]);
    /// ```
    #[inline]
    pub fn range(count: usize) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..count).map(Self::new)
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> From<usize> for TypedIndex<T> {
    #[inline(always)]
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl<T> From<TypedIndex<T>> for usize {
    #[inline(always)]
    fn from(typed_index: TypedIndex<T>) -> Self {
        typed_index.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct NodeTag;

    impl TypedIndexTag for NodeTag {
        const NAME: &'static str = "Node";
    }

    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
    struct ArcTag;

    impl TypedIndexTag for ArcTag {
        const NAME: &'static str = "Arc";
    }

    type Node = TypedIndex<NodeTag>;
    type Arc = TypedIndex<ArcTag>;

    #[test]
    fn test_new_and_get() {
        let n = Node::new(10);
        assert_eq!(n.get(), 10);
    }

    #[test]
    fn test_conversions() {
        let a: Arc = 42.into();
        assert_eq!(a.get(), 42);

        let raw: usize = a.into();
        assert_eq!(raw, 42);
    }

    #[test]
    fn test_debug_and_display_use_tag_name() {
        assert_eq!(format!("{}", Node::new(7)), "Node(7)");
        assert_eq!(format!("{:?}", Arc::new(2)), "Arc(2)");
    }

    #[test]
    fn test_range_is_ascending_and_exact() {
        let r = Node::range(4);
        assert_eq!(r.len(), 4);
        let v: Vec<Node> = r.collect();
        assert_eq!(v, vec![Node::new(0), Node::new(1), Node::new(2), Node::new(3)]);

        let back: Vec<usize> = Node::range(3).rev().map(|n| n.get()).collect();
        assert_eq!(back, vec![2, 1, 0]);
    }

    #[test]
    fn test_ordering_follows_raw_index() {
        assert!(Node::new(1) < Node::new(2));
        assert_eq!(Node::new(5).max(Node::new(3)), Node::new(5));
    }
}
