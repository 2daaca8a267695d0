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

use std::time::Duration;
use tandem_core::num::SaturatingAddVal;

/// Counters collected while computing arc-disjoint paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SuurballeStatistics {
    /// Residual Dijkstra runs started.
    pub searches: u64,
    /// Augmenting paths found.
    pub paths_found: u64,
    /// Nodes permanently labeled across all searches.
    pub nodes_settled: u64,
    /// Residual arcs scanned across all searches.
    pub arcs_relaxed: u64,
    /// Successful decrease-key operations.
    pub decrease_keys: u64,
    /// Arcs whose flow was reset to zero by traversing them backwards.
    pub cancelled_arcs: u64,
    /// Wall time spent in `find_flow` and `find_paths`.
    pub time_total: Duration,
}

impl SuurballeStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn on_search(&mut self) {
        self.searches = self.searches.saturating_add_val(1);
    }

    #[inline]
    pub fn on_path_found(&mut self) {
        self.paths_found = self.paths_found.saturating_add_val(1);
    }

    #[inline]
    pub fn on_node_settled(&mut self) {
        self.nodes_settled = self.nodes_settled.saturating_add_val(1);
    }

    #[inline]
    pub fn on_arc_relaxed(&mut self) {
        self.arcs_relaxed = self.arcs_relaxed.saturating_add_val(1);
    }

    #[inline]
    pub fn on_decrease_key(&mut self) {
        self.decrease_keys = self.decrease_keys.saturating_add_val(1);
    }

    #[inline]
    pub fn on_arc_cancelled(&mut self) {
        self.cancelled_arcs = self.cancelled_arcs.saturating_add_val(1);
    }

    /// Adds `duration` to the total time.
    #[inline]
    pub fn add_time(&mut self, duration: Duration) {
        self.time_total = self.time_total.saturating_add(duration);
    }

    /// Resets every counter to zero.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for SuurballeStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tandem Suurballe Statistics:")?;
        writeln!(f, "  Searches:             {}", self.searches)?;
        writeln!(f, "  Paths found:          {}", self.paths_found)?;
        writeln!(f, "  Nodes settled:        {}", self.nodes_settled)?;
        writeln!(f, "  Arcs relaxed:         {}", self.arcs_relaxed)?;
        writeln!(f, "  Decrease keys:        {}", self.decrease_keys)?;
        writeln!(f, "  Cancelled arcs:       {}", self.cancelled_arcs)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
