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

//! The decrease-key heap capability.
//!
//! `Heap<I, P>` is the contract shortest path searches are written against.
//! Any structure that honours it (binary heap, d-ary heap, pairing heap,
//! bucket queue) can be substituted without affecting correctness, only
//! running time.
//!
//! | op | precondition | effect |
//! |---|---|---|
//! | `push(i, p)` | `i` absent | inserts `i` at priority `p` |
//! | `top()` | non-empty | returns the min-priority item |
//! | `prio()` | non-empty | returns that priority |
//! | `pop()` | non-empty | removes the min item, marks it removed |
//! | `decrease(i, p)` | `i` present, `p <= priority(i)` | lowers the priority |
//! | `increase(i, p)` | `i` present, `p >= priority(i)` | raises the priority |
//! | `set(i, p)` | none | pushes if absent or removed, else re-prioritizes |
//! | `erase(i)` | `i` present | removes `i`, marks it removed |
//! | `state(i)` | none | returns the lifecycle tag |
//! | `clear()` | none | empties the heap, present items become absent |
//!
//! Violating a precondition is a bug in the caller and panics.

use crate::state::HeapState;

/// A min-priority queue over items `I` with priorities `P` that supports
/// changing the priority of stored items.
pub trait Heap<I, P> {
    /// Creates an empty heap able to track `num_items` items without
    /// reallocating its cross reference.
    fn with_items(num_items: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of stored items.
    fn len(&self) -> usize;

    /// Returns `true` if no item is stored.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every stored item. Their state becomes `Absent`; the state
    /// of removed items is left untouched.
    fn clear(&mut self);

    /// Inserts the absent item `item` with priority `prio`.
    fn push(&mut self, item: I, prio: P);

    /// Returns the item with minimum priority.
    fn top(&self) -> I;

    /// Returns the minimum priority.
    fn prio(&self) -> P;

    /// Removes the item with minimum priority and returns it.
    fn pop(&mut self) -> I;

    /// Removes the present item `item`.
    fn erase(&mut self, item: I);

    /// Returns the priority of the present item `item`.
    fn priority(&self, item: I) -> P;

    /// Sets the priority of `item`, inserting it if it is not stored.
    fn set(&mut self, item: I, prio: P);

    /// Lowers the priority of the present item `item` to `prio`.
    fn decrease(&mut self, item: I, prio: P);

    /// Raises the priority of the present item `item` to `prio`.
    fn increase(&mut self, item: I, prio: P);

    /// Returns the lifecycle state of `item`.
    fn state(&self, item: I) -> HeapState;

    /// Forces the state of `item` to `Absent` or `Removed`, erasing it first
    /// if it is stored. Searches use this to reset only the items they
    /// touched instead of the whole cross reference.
    fn set_state(&mut self, item: I, state: HeapState);
}
