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

//! # Tandem Heap
//!
//! Decrease-key priority queues with a three-state item lifecycle.
//!
//! ## Modules
//!
//! - `heap`: the `Heap` capability trait searches are written against.
//! - `state`: `HeapState` and the `CrossRef` array that stores it.
//! - `dary`: `DaryHeap`, an array-backed d-ary implementation, with the
//!   `BinaryHeap` and `QuadHeap` aliases.

pub mod dary;
pub mod heap;
pub mod state;

pub use dary::{BinaryHeap, DaryHeap, QuadHeap};
pub use heap::Heap;
pub use state::{CrossRef, HeapState};
