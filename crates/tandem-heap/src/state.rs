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

//! Item lifecycle tracking for decrease-key heaps.
//!
//! Every item a heap may ever see has a `HeapState`:
//!
//! ```raw
//! Absent --push--> Present(slot) --pop/erase--> Removed
//!    ^                  ^                          |
//!    |                  +----------- set ----------+
//!    +--------------- clear / set_state -----------+
//! ```
//!
//! The states live in a `CrossRef`, a dense array indexed by the raw item
//! index. It answers `state` queries in O(1) and gives the heap the slot of a
//! present item for decrease-key. A `CrossRef` can be handed to a heap and
//! taken back afterwards, so callers running many searches over the same
//! item universe keep one allocation.

/// The lifecycle state of a heap item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeapState {
    /// The item has never been inserted (or was reset).
    #[default]
    Absent,
    /// The item is stored in the heap at the given slot.
    Present(usize),
    /// The item was in the heap and has been popped or erased.
    Removed,
}

impl HeapState {
    /// Returns `true` if the state is `Absent`.
    #[inline(always)]
    pub const fn is_absent(&self) -> bool {
        matches!(self, HeapState::Absent)
    }

    /// Returns `true` if the state is `Present`.
    #[inline(always)]
    pub const fn is_present(&self) -> bool {
        matches!(self, HeapState::Present(_))
    }

    /// Returns `true` if the state is `Removed`.
    #[inline(always)]
    pub const fn is_removed(&self) -> bool {
        matches!(self, HeapState::Removed)
    }

    /// Returns the slot of a present item.
    #[inline(always)]
    pub const fn slot(&self) -> Option<usize> {
        match self {
            HeapState::Present(slot) => Some(*slot),
            _ => None,
        }
    }
}

impl std::fmt::Display for HeapState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeapState::Absent => write!(f, "Absent"),
            HeapState::Present(slot) => write!(f, "Present({})", slot),
            HeapState::Removed => write!(f, "Removed"),
        }
    }
}

/// Per-item `HeapState` storage indexed by raw item index.
///
/// Items beyond the current length read as `Absent`; writing to them grows
/// the storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossRef {
    states: Vec<HeapState>,
}

impl CrossRef {
    /// Creates an empty cross reference.
    #[inline]
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Creates a cross reference with `num_items` absent items.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        Self {
            states: vec![HeapState::Absent; num_items],
        }
    }

    /// Returns the number of items with storage.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Returns `true` if no item has storage.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Returns the state of `item`.
    #[inline(always)]
    pub fn get(&self, item: usize) -> HeapState {
        self.states.get(item).copied().unwrap_or_default()
    }

    /// Sets the state of `item`, growing the storage if needed.
    #[inline(always)]
    pub fn set(&mut self, item: usize, state: HeapState) {
        if item >= self.states.len() {
            self.states.resize(item + 1, HeapState::Absent);
        }
        self.states[item] = state;
    }

    /// Marks every item `Absent`.
    #[inline]
    pub fn reset(&mut self) {
        self.states.fill(HeapState::Absent);
    }

    /// Ensures storage for `num_items` items.
    #[inline]
    pub fn ensure_len(&mut self, num_items: usize) {
        if self.states.len() < num_items {
            self.states.resize(num_items, HeapState::Absent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_predicates() {
        assert!(HeapState::Absent.is_absent());
        assert!(HeapState::Present(3).is_present());
        assert!(HeapState::Removed.is_removed());
        assert_eq!(HeapState::Present(3).slot(), Some(3));
        assert_eq!(HeapState::Removed.slot(), None);
        assert_eq!(HeapState::default(), HeapState::Absent);
        assert_eq!(format!("{}", HeapState::Present(1)), "Present(1)");
    }

    #[test]
    fn test_cross_ref_grows_and_resets() {
        let mut cr = CrossRef::preallocated(2);
        assert_eq!(cr.len(), 2);
        assert_eq!(cr.get(7), HeapState::Absent);

        cr.set(5, HeapState::Removed);
        assert_eq!(cr.len(), 6);
        assert_eq!(cr.get(5), HeapState::Removed);
        assert_eq!(cr.get(4), HeapState::Absent);

        cr.set(0, HeapState::Present(0));
        cr.reset();
        assert_eq!(cr.get(0), HeapState::Absent);
        assert_eq!(cr.get(5), HeapState::Absent);
        assert_eq!(cr.len(), 6);
    }

    #[test]
    fn test_ensure_len_never_shrinks() {
        let mut cr = CrossRef::preallocated(4);
        cr.ensure_len(2);
        assert_eq!(cr.len(), 4);
        cr.ensure_len(9);
        assert_eq!(cr.len(), 9);
    }
}
