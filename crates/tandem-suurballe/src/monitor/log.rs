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

use crate::{monitor::search_monitor::SuurballeMonitor, stats::SuurballeStatistics};
use std::time::Instant;
use tandem_core::num::LengthNumeric;
use tandem_graph::index::NodeIndex;

const RULE_WIDTH: usize = 78;

/// Prints one console line per augmenting path.
#[derive(Debug, Clone)]
pub struct LogMonitor<L> {
    start_time: Instant,
    total_length: L,
}

impl<L> LogMonitor<L>
where
    L: LengthNumeric,
{
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            total_length: L::zero(),
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<6} | {:<12} | {:<12} | {:<12} | {:<12}",
            "Elapsed", "Path", "Increment", "Total", "Settled", "Relaxed"
        );
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    #[inline(always)]
    fn log_line(&self, path_index: usize, length: L, stats: &SuurballeStatistics) {
        let elapsed_field = format!("{:.3}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<6} | {:<12} | {:<12} | {:<12} | {:<12}",
            elapsed_field,
            path_index,
            length,
            self.total_length,
            stats.nodes_settled,
            stats.arcs_relaxed
        );
    }
}

impl<L> Default for LogMonitor<L>
where
    L: LengthNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L> std::fmt::Display for LogMonitor<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor")
    }
}

impl<L> SuurballeMonitor<L> for LogMonitor<L>
where
    L: LengthNumeric,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self, source: NodeIndex, target: NodeIndex, k: usize) {
        self.start_time = Instant::now();
        self.total_length = L::zero();
        println!("Searching {} arc-disjoint paths from {} to {}.", k, source, target);
        self.print_header();
    }

    fn on_path_found(&mut self, path_index: usize, length: L, statistics: &SuurballeStatistics) {
        self.total_length = self.total_length + length;
        self.log_line(path_index, length, statistics);
    }

    fn on_exhausted(&mut self, paths_found: usize, _statistics: &SuurballeStatistics) {
        println!("No further augmenting path after {} paths.", paths_found);
    }

    fn on_exit_search(&mut self, statistics: &SuurballeStatistics) {
        println!("{}", "-".repeat(RULE_WIDTH));
        println!(
            "Search finished: {} paths, total length {}.",
            statistics.paths_found, self.total_length
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracks_total_length() {
        let mut monitor = LogMonitor::<i64>::new();
        let stats = SuurballeStatistics::default();
        monitor.on_enter_search(NodeIndex::new(0), NodeIndex::new(3), 2);
        monitor.on_path_found(0, 3, &stats);
        monitor.on_path_found(1, 4, &stats);
        assert_eq!(monitor.total_length, 7);

        monitor.on_enter_search(NodeIndex::new(0), NodeIndex::new(3), 2);
        assert_eq!(monitor.total_length, 0);
        assert_eq!(monitor.name(), "LogMonitor");
    }
}
