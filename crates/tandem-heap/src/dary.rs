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

//! Array-backed d-ary min-heap with decrease-key.
//!
//! `DaryHeap<I, P, D>` stores `(item, priority)` pairs in a flat vector laid
//! out as an implicit `D`-ary tree and records each item's slot in a
//! `CrossRef`. Push, pop, erase, decrease and increase are O(log_D n); top,
//! prio and state are O(1).
//!
//! A larger arity makes the tree shallower, which cheapens `decrease` (sift
//! up touches one node per level) at the price of comparing `D` children per
//! level during `pop`. `BinaryHeap` (`D = 2`) is the default for the
//! shortest path searches; `QuadHeap` (`D = 4`) tends to win on graphs with
//! many decrease-key operations.
//!
//! Items with equal priority are not ordered further. The resulting order is
//! deterministic for a fixed sequence of operations.

use crate::{heap::Heap, state::CrossRef, state::HeapState};

/// A d-ary min-heap of items `I` keyed by priorities `P`.
#[derive(Debug, Clone)]
pub struct DaryHeap<I, P, const D: usize> {
    data: Vec<(I, P)>,
    cross_ref: CrossRef,
}

/// A binary min-heap.
pub type BinaryHeap<I, P> = DaryHeap<I, P, 2>;

/// A 4-ary min-heap.
pub type QuadHeap<I, P> = DaryHeap<I, P, 4>;

impl<I, P, const D: usize> Default for DaryHeap<I, P, D>
where
    I: Copy + Into<usize>,
    P: Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, P, const D: usize> DaryHeap<I, P, D>
where
    I: Copy + Into<usize>,
    P: Copy + Ord,
{
    /// Creates an empty heap.
    #[inline]
    pub fn new() -> Self {
        Self::with_cross_ref(CrossRef::new())
    }

    /// Creates an empty heap with storage for `num_items` items.
    #[inline]
    pub fn preallocated(num_items: usize) -> Self {
        let mut heap = Self::with_cross_ref(CrossRef::preallocated(num_items));
        heap.data.reserve(num_items);
        heap
    }

    /// Creates an empty heap that tracks item states in `cross_ref`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `cross_ref` marks an item as present.
    #[inline]
    pub fn with_cross_ref(cross_ref: CrossRef) -> Self {
        const { assert!(D >= 2, "a d-ary heap needs an arity of at least 2") };
        debug_assert!(
            (0..cross_ref.len()).all(|i| !cross_ref.get(i).is_present()),
            "called `DaryHeap::with_cross_ref` with a cross reference that marks items as present"
        );

        Self {
            data: Vec::new(),
            cross_ref,
        }
    }

    /// Returns the cross reference.
    #[inline]
    pub fn cross_ref(&self) -> &CrossRef {
        &self.cross_ref
    }

    /// Empties the heap and returns its cross reference.
    #[inline]
    pub fn into_cross_ref(mut self) -> CrossRef {
        self.clear();
        self.cross_ref
    }

    #[inline(always)]
    fn parent(slot: usize) -> usize {
        (slot - 1) / D
    }

    #[inline(always)]
    fn first_child(slot: usize) -> usize {
        slot * D + 1
    }

    #[inline(always)]
    fn place(&mut self, slot: usize, entry: (I, P)) {
        self.cross_ref.set(entry.0.into(), HeapState::Present(slot));
        self.data[slot] = entry;
    }

    /// Moves `entry` from `hole` towards the root until its parent is not larger.
    fn sift_up(&mut self, mut hole: usize, entry: (I, P)) {
        while hole > 0 {
            let parent = Self::parent(hole);
            let above = self.data[parent];
            if entry.1 >= above.1 {
                break;
            }
            self.place(hole, above);
            hole = parent;
        }
        self.place(hole, entry);
    }

    /// Moves `entry` from `hole` towards the leaves until no child is smaller.
    fn sift_down(&mut self, mut hole: usize, entry: (I, P)) {
        let len = self.data.len();
        loop {
            let first = Self::first_child(hole);
            if first >= len {
                break;
            }

            let end = (first + D).min(len);
            let mut best = first;
            for child in first + 1..end {
                if self.data[child].1 < self.data[best].1 {
                    best = child;
                }
            }

            if self.data[best].1 >= entry.1 {
                break;
            }
            let below = self.data[best];
            self.place(hole, below);
            hole = best;
        }
        self.place(hole, entry);
    }

    /// Restores the heap order for the entry sitting at `slot`.
    #[inline]
    fn repair(&mut self, slot: usize) {
        let entry = self.data[slot];
        if slot > 0 && entry.1 < self.data[Self::parent(slot)].1 {
            self.sift_up(slot, entry);
        } else {
            self.sift_down(slot, entry);
        }
    }

    #[inline]
    fn insert(&mut self, item: I, prio: P) {
        let slot = self.data.len();
        self.data.push((item, prio));
        self.sift_up(slot, (item, prio));
    }

    #[inline]
    fn slot_of(&self, item: I, caller: &str) -> usize {
        let raw: usize = item.into();
        match self.cross_ref.get(raw) {
            HeapState::Present(slot) => slot,
            other => panic!(
                "called `DaryHeap::{}` with an item that is not in the heap: the item is {} and its state is {}",
                caller, raw, other
            ),
        }
    }

    /// Returns `true` if every parent is not larger than its children and
    /// every stored item's cross reference points at its slot.
    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.data.iter().enumerate().all(|(slot, &(item, prio))| {
            let ordered = slot == 0 || self.data[Self::parent(slot)].1 <= prio;
            ordered && self.cross_ref.get(item.into()) == HeapState::Present(slot)
        })
    }
}

impl<I, P, const D: usize> Heap<I, P> for DaryHeap<I, P, D>
where
    I: Copy + Into<usize>,
    P: Copy + Ord,
{
    #[inline]
    fn with_items(num_items: usize) -> Self {
        Self::preallocated(num_items)
    }

    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn clear(&mut self) {
        for &(item, _) in &self.data {
            self.cross_ref.set(item.into(), HeapState::Absent);
        }
        self.data.clear();
    }

    #[inline]
    fn push(&mut self, item: I, prio: P) {
        let raw: usize = item.into();
        let state = self.cross_ref.get(raw);
        assert!(
            state.is_absent(),
            "called `DaryHeap::push` with an item that is not absent: the item is {} and its state is {}",
            raw, state
        );

        self.insert(item, prio);
    }

    #[inline]
    fn top(&self) -> I {
        assert!(!self.data.is_empty(), "called `DaryHeap::top` on an empty heap");
        self.data[0].0
    }

    #[inline]
    fn prio(&self) -> P {
        assert!(!self.data.is_empty(), "called `DaryHeap::prio` on an empty heap");
        self.data[0].1
    }

    #[inline]
    fn pop(&mut self) -> I {
        assert!(!self.data.is_empty(), "called `DaryHeap::pop` on an empty heap");

        let (item, _) = self.data.swap_remove(0);
        self.cross_ref.set(item.into(), HeapState::Removed);
        if !self.data.is_empty() {
            let entry = self.data[0];
            self.sift_down(0, entry);
        }
        item
    }

    #[inline]
    fn erase(&mut self, item: I) {
        let slot = self.slot_of(item, "erase");

        self.data.swap_remove(slot);
        self.cross_ref.set(item.into(), HeapState::Removed);
        if slot < self.data.len() {
            self.repair(slot);
        }
    }

    #[inline]
    fn priority(&self, item: I) -> P {
        self.data[self.slot_of(item, "priority")].1
    }

    #[inline]
    fn set(&mut self, item: I, prio: P) {
        match self.cross_ref.get(item.into()) {
            HeapState::Present(slot) => {
                self.data[slot].1 = prio;
                self.repair(slot);
            }
            HeapState::Absent | HeapState::Removed => self.insert(item, prio),
        }
    }

    #[inline]
    fn decrease(&mut self, item: I, prio: P) {
        let slot = self.slot_of(item, "decrease");
        debug_assert!(
            prio <= self.data[slot].1,
            "called `DaryHeap::decrease` with a priority larger than the current one"
        );

        self.sift_up(slot, (item, prio));
    }

    #[inline]
    fn increase(&mut self, item: I, prio: P) {
        let slot = self.slot_of(item, "increase");
        debug_assert!(
            prio >= self.data[slot].1,
            "called `DaryHeap::increase` with a priority smaller than the current one"
        );

        self.sift_down(slot, (item, prio));
    }

    #[inline(always)]
    fn state(&self, item: I) -> HeapState {
        self.cross_ref.get(item.into())
    }

    #[inline]
    fn set_state(&mut self, item: I, state: HeapState) {
        assert!(
            !state.is_present(),
            "called `DaryHeap::set_state` with a present state: items can only enter the heap through `push` or `set`"
        );

        if self.cross_ref.get(item.into()).is_present() {
            self.erase(item);
        }
        self.cross_ref.set(item.into(), state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    type Bin = BinaryHeap<usize, i64>;
    type Quad = QuadHeap<usize, i64>;

    fn drain<H: Heap<usize, i64>>(heap: &mut H) -> Vec<(usize, i64)> {
        let mut out = Vec::new();
        while !heap.is_empty() {
            let p = heap.prio();
            out.push((heap.pop(), p));
        }
        out
    }

    #[test]
    fn test_push_pop_sorted() {
        let mut h = Bin::new();
        for (i, p) in [5, 3, 9, 1, 7].into_iter().enumerate() {
            h.push(i, p);
        }
        assert_eq!(h.len(), 5);
        assert_eq!(h.top(), 3);
        assert_eq!(h.prio(), 1);

        let prios: Vec<i64> = drain(&mut h).into_iter().map(|(_, p)| p).collect();
        assert_eq!(prios, vec![1, 3, 5, 7, 9]);
        assert!(h.is_empty());
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut h = Bin::with_items(3);
        assert_eq!(h.state(0), HeapState::Absent);

        h.push(0, 10);
        h.push(1, 20);
        assert!(h.state(0).is_present());

        assert_eq!(h.pop(), 0);
        assert_eq!(h.state(0), HeapState::Removed);
        assert_eq!(h.state(2), HeapState::Absent);

        // set re-inserts a removed item
        h.set(0, 30);
        assert!(h.state(0).is_present());
        assert_eq!(h.priority(0), 30);
        assert_eq!(h.top(), 1);
    }

    #[test]
    fn test_decrease_moves_item_to_top() {
        let mut h = Quad::new();
        for i in 0..20 {
            h.push(i, 100 + i as i64);
        }
        h.decrease(17, 5);
        assert_eq!(h.top(), 17);
        assert_eq!(h.prio(), 5);
        assert_eq!(h.priority(17), 5);
    }

    #[test]
    fn test_increase_sinks_top() {
        let mut h = Bin::new();
        for i in 0..8 {
            h.push(i, i as i64);
        }
        h.increase(0, 50);
        assert_eq!(h.top(), 1);
        let order: Vec<usize> = drain(&mut h).into_iter().map(|(i, _)| i).collect();
        assert_eq!(order.last(), Some(&0));
    }

    #[test]
    fn test_set_both_directions() {
        let mut h = Bin::new();
        h.set(4, 10);
        h.set(2, 20);
        h.set(2, 5);
        assert_eq!(h.top(), 2);
        h.set(2, 40);
        assert_eq!(h.top(), 4);
        h.set(4, 40);
        assert_eq!(h.prio(), 40);
        assert_eq!(h.len(), 2);
    }

    #[test]
    fn test_erase_inner_and_last() {
        let mut h = Bin::new();
        for (i, p) in [4, 8, 6, 9, 10, 7, 12].into_iter().enumerate() {
            h.push(i, p);
        }
        h.erase(1); // inner node
        h.erase(6); // last slot
        assert_eq!(h.state(1), HeapState::Removed);
        assert_eq!(h.state(6), HeapState::Removed);

        let prios: Vec<i64> = drain(&mut h).into_iter().map(|(_, p)| p).collect();
        assert_eq!(prios, vec![4, 6, 7, 9, 10]);
    }

    #[test]
    fn test_clear_resets_present_items_only() {
        let mut h = Bin::new();
        h.push(0, 1);
        h.push(1, 2);
        h.push(2, 3);
        h.pop();
        h.clear();

        assert!(h.is_empty());
        assert_eq!(h.state(0), HeapState::Removed);
        assert_eq!(h.state(1), HeapState::Absent);
        assert_eq!(h.state(2), HeapState::Absent);
        h.push(1, 9);
        assert_eq!(h.top(), 1);
    }

    #[test]
    fn test_set_state_erases_present_item() {
        let mut h = Bin::new();
        h.push(0, 1);
        h.push(1, 2);
        h.pop();

        h.set_state(0, HeapState::Absent);
        assert_eq!(h.state(0), HeapState::Absent);

        h.set_state(1, HeapState::Removed);
        assert!(h.is_empty());
        assert_eq!(h.state(1), HeapState::Removed);

        h.push(0, 3);
        assert_eq!(h.top(), 0);
    }

    #[test]
    fn test_cross_ref_round_trip() {
        let mut h = Bin::preallocated(4);
        h.push(3, 1);
        h.push(2, 0);
        h.pop();
        let cr = h.into_cross_ref();
        assert_eq!(cr.get(2), HeapState::Removed);
        assert_eq!(cr.get(3), HeapState::Absent);

        let mut cr = cr;
        cr.reset();
        let mut h = Bin::with_cross_ref(cr);
        h.push(2, 5);
        assert_eq!(h.top(), 2);
    }

    #[test]
    #[should_panic(expected = "called `DaryHeap::push` with an item that is not absent")]
    fn test_push_present_panics() {
        let mut h = Bin::new();
        h.push(0, 1);
        h.push(0, 2);
    }

    #[test]
    #[should_panic(expected = "called `DaryHeap::push` with an item that is not absent")]
    fn test_push_removed_panics() {
        let mut h = Bin::new();
        h.push(0, 1);
        h.pop();
        h.push(0, 2);
    }

    #[test]
    #[should_panic(expected = "called `DaryHeap::top` on an empty heap")]
    fn test_top_empty_panics() {
        let h = Bin::new();
        let _ = h.top();
    }

    #[test]
    #[should_panic(expected = "called `DaryHeap::decrease` with an item that is not in the heap")]
    fn test_decrease_absent_panics() {
        let mut h = Bin::new();
        h.push(0, 1);
        h.decrease(1, 0);
    }

    #[test]
    #[should_panic(expected = "called `DaryHeap::set_state` with a present state")]
    fn test_set_state_present_panics() {
        let mut h = Bin::new();
        h.set_state(0, HeapState::Present(0));
    }

    fn random_operations<const D: usize>(seed: u64) {
        const N: usize = 64;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut heap = DaryHeap::<usize, i64, D>::with_items(N);
        let mut reference: Vec<Option<i64>> = vec![None; N];

        for _ in 0..2_000 {
            let item = rng.random_range(0..N);
            match rng.random_range(0..5) {
                0 => {
                    if heap.state(item).is_absent() {
                        let p = rng.random_range(0..1_000);
                        heap.push(item, p);
                        reference[item] = Some(p);
                    }
                }
                1 => {
                    if let Some(p) = reference[item] {
                        let np = p - rng.random_range(0..50);
                        heap.decrease(item, np);
                        reference[item] = Some(np);
                    }
                }
                2 => {
                    if let Some(p) = reference[item] {
                        let np = p + rng.random_range(0..50);
                        heap.increase(item, np);
                        reference[item] = Some(np);
                    }
                }
                3 => {
                    if reference[item].is_some() {
                        heap.erase(item);
                        reference[item] = None;
                    }
                }
                _ => {
                    if !heap.is_empty() {
                        let p = heap.prio();
                        let min = reference.iter().flatten().min().copied();
                        assert_eq!(Some(p), min);
                        let top = heap.pop();
                        assert_eq!(reference[top], Some(p));
                        reference[top] = None;
                    }
                }
            }

            assert!(heap.is_consistent());
            let stored = reference.iter().filter(|p| p.is_some()).count();
            assert_eq!(heap.len(), stored);
            for (i, p) in reference.iter().enumerate() {
                match p {
                    Some(p) => assert_eq!(heap.priority(i), *p),
                    None => assert!(!heap.state(i).is_present()),
                }
            }
        }
    }

    #[test]
    fn test_random_operations_binary() {
        random_operations::<2>(7);
        random_operations::<2>(42);
    }

    #[test]
    fn test_random_operations_quad() {
        random_operations::<4>(7);
        random_operations::<3>(11);
    }
}
