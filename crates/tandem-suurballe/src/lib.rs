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

//! # Tandem Suurballe
//!
//! Minimum total length arc-disjoint paths between two nodes of a directed
//! graph with non-negative integer arc lengths.
//!
//! ## Modules
//!
//! - `suurballe`: the `Suurballe` solver and its phases.
//! - `dijkstra`: the shortest path search on the residual network with
//!   node potentials.
//! - `validation`: certificates (disjointness, flow feasibility, dual
//!   optimality) and length checks.
//! - `monitor`: hooks for observing a search.
//! - `stats`: search counters.
//! - `storage`: owned or caller-supplied maps.
//! - `error`: length validation errors.

pub mod dijkstra;
pub mod error;
pub mod monitor;
pub mod stats;
pub mod storage;
pub mod suurballe;
pub mod validation;

pub use crate::suurballe::{Suurballe, SuurballePhase};
