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
use tandem_graph::index::NodeIndex;

/// A monitor that forwards every event to its monitors in insertion order.
pub struct CompositeMonitor<'a, L> {
    monitors: Vec<Box<dyn SuurballeMonitor<L> + 'a>>,
}

impl<L> std::fmt::Debug for CompositeMonitor<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        f.debug_struct("CompositeMonitor")
            .field("monitors", &monitors_str)
            .finish()
    }
}

impl<L> std::fmt::Display for CompositeMonitor<'_, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let monitors_str = self
            .monitors
            .iter()
            .map(|m| m.name())
            .collect::<Vec<&str>>()
            .join(", ");

        write!(f, "CompositeMonitor([{}])", monitors_str)
    }
}

impl<L> Default for CompositeMonitor<'_, L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, L> CompositeMonitor<'a, L> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMonitor` with the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `CompositeMonitor` from a vector of boxed monitors.
    #[inline]
    pub fn from_vec(monitors: Vec<Box<dyn SuurballeMonitor<L> + 'a>>) -> Self {
        Self { monitors }
    }

    /// Adds a monitor.
    #[inline]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SuurballeMonitor<L> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor.
    #[inline]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SuurballeMonitor<L> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors.
    #[inline]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite contains no monitors.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<L> SuurballeMonitor<L> for CompositeMonitor<'_, L>
where
    L: Copy,
{
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enter_search(&mut self, source: NodeIndex, target: NodeIndex, k: usize) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(source, target, k);
        }
    }

    fn on_path_found(&mut self, path_index: usize, length: L, statistics: &SuurballeStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_path_found(path_index, length, statistics);
        }
    }

    fn on_exhausted(&mut self, paths_found: usize, statistics: &SuurballeStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exhausted(paths_found, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &SuurballeStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search(statistics);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use std::{cell::RefCell, rc::Rc};

    struct Recorder {
        tag: &'static str,
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SuurballeMonitor<i64> for Recorder {
        fn name(&self) -> &str {
            self.tag
        }

        fn on_enter_search(&mut self, _source: NodeIndex, _target: NodeIndex, k: usize) {
            self.events.borrow_mut().push(format!("{}:enter:{}", self.tag, k));
        }

        fn on_path_found(&mut self, path_index: usize, length: i64, _: &SuurballeStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:path:{}:{}", self.tag, path_index, length));
        }

        fn on_exhausted(&mut self, paths_found: usize, _: &SuurballeStatistics) {
            self.events
                .borrow_mut()
                .push(format!("{}:exhausted:{}", self.tag, paths_found));
        }

        fn on_exit_search(&mut self, _: &SuurballeStatistics) {
            self.events.borrow_mut().push(format!("{}:exit", self.tag));
        }
    }

    #[test]
    fn test_forwards_in_insertion_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMonitor::with_capacity(3);
        composite.add_monitor(Recorder {
            tag: "a",
            events: Rc::clone(&events),
        });
        composite.add_monitor(NoOperationMonitor::new());
        composite.add_monitor_boxed(Box::new(Recorder {
            tag: "b",
            events: Rc::clone(&events),
        }));
        assert_eq!(composite.len(), 3);
        assert_eq!(
            format!("{}", composite),
            "CompositeMonitor([a, NoOperationMonitor, b])"
        );

        let stats = SuurballeStatistics::default();
        composite.on_enter_search(NodeIndex::new(0), NodeIndex::new(1), 2);
        composite.on_path_found(0, 5, &stats);
        composite.on_exhausted(1, &stats);
        composite.on_exit_search(&stats);

        assert_eq!(
            *events.borrow(),
            vec![
                "a:enter:2",
                "b:enter:2",
                "a:path:0:5",
                "b:path:0:5",
                "a:exhausted:1",
                "b:exhausted:1",
                "a:exit",
                "b:exit",
            ]
        );
    }

    #[test]
    fn test_empty_composite() {
        let composite: CompositeMonitor<'_, i64> = CompositeMonitor::default();
        assert!(composite.is_empty());
        assert_eq!(format!("{:?}", composite), "CompositeMonitor { monitors: \"\" }");
    }
}
