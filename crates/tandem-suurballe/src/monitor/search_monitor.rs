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

use crate::stats::SuurballeStatistics;
use tandem_graph::index::NodeIndex;

/// Callbacks invoked by `Suurballe::find_flow`.
pub trait SuurballeMonitor<L> {
    fn name(&self) -> &str;

    /// Called before the first search, with the number of requested paths.
    fn on_enter_search(&mut self, source: NodeIndex, target: NodeIndex, k: usize);

    /// Called after the flow was augmented along the `path_index`-th
    /// shortest path. `length` is the increase of the total length, which
    /// can be smaller than the length of any final path when the augmenting
    /// path cancels flow.
    fn on_path_found(&mut self, path_index: usize, length: L, statistics: &SuurballeStatistics);

    /// Called when no further augmenting path exists before `k` paths were
    /// found.
    fn on_exhausted(&mut self, paths_found: usize, statistics: &SuurballeStatistics);

    fn on_exit_search(&mut self, statistics: &SuurballeStatistics);
}

impl<L> std::fmt::Debug for dyn SuurballeMonitor<L> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SuurballeMonitor({})", self.name())
    }
}

impl<L> std::fmt::Display for dyn SuurballeMonitor<L> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SuurballeMonitor({})", self.name())
    }
}
