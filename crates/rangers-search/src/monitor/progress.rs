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

//! Progress telemetry
//!
//! `ProgressMonitor` emits a `tracing` event every `step` expanded nodes with
//! the number of nodes processed, the current frontier length and the depth
//! of the node being expanded. It never influences the search.

use crate::{monitor::search_monitor::SearchMonitor, solution::Solution, stats::BfsStatistics};
use rangers_model::configuration::Configuration;
use std::time::Instant;

/// Default number of expanded nodes between two progress events.
pub const DEFAULT_PROGRESS_STEP: u64 = 5_000_000;

#[derive(Debug, Clone)]
pub struct ProgressMonitor {
    step: u64,
    start_time: Instant,
    reports: u64,
}

impl ProgressMonitor {
    /// Creates a monitor reporting every `step` expanded nodes.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero.
    pub fn new(step: u64) -> Self {
        assert!(step > 0, "called `ProgressMonitor::new` with a zero step");
        Self {
            step,
            start_time: Instant::now(),
            reports: 0,
        }
    }

    #[inline]
    pub fn step(&self) -> u64 {
        self.step
    }

    /// Number of progress events emitted so far.
    #[inline]
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl Default for ProgressMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRESS_STEP)
    }
}

impl std::fmt::Display for ProgressMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProgressMonitor(step: {})", self.step)
    }
}

impl SearchMonitor for ProgressMonitor {
    fn name(&self) -> &str {
        "ProgressMonitor"
    }

    fn on_enter_search(&mut self, _root: &Configuration, _statistics: &BfsStatistics) {
        self.start_time = Instant::now();
        self.reports = 0;
    }

    fn on_exit_search(&mut self, statistics: &BfsStatistics) {
        tracing::info!(
            nodes = statistics.nodes_expanded,
            solutions = statistics.solutions_found,
            elapsed_secs = self.start_time.elapsed().as_secs_f64(),
            "search finished"
        );
    }

    fn on_expand(&mut self, node: &Configuration, frontier_len: usize, statistics: &BfsStatistics) {
        if statistics.nodes_expanded % self.step == 0 {
            self.reports += 1;
            tracing::info!(
                nodes = statistics.nodes_expanded,
                frontier = frontier_len,
                depth = node.depth(),
                solutions = statistics.solutions_found,
                "search progress"
            );
        }
    }

    fn on_solution_found(&mut self, _solution: &Solution, _statistics: &BfsStatistics) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangers_model::scenario::Scenario;

    #[test]
    fn test_reports_every_step_nodes() {
        let mut monitor = ProgressMonitor::new(3);
        let root = Scenario::rangers().seed();
        let mut stats = BfsStatistics::default();

        monitor.on_enter_search(&root, &stats);
        for _ in 0..10 {
            stats.on_node_expanded(root.depth());
            monitor.on_expand(&root, 0, &stats);
        }
        monitor.on_exit_search(&stats);

        assert_eq!(monitor.reports(), 3);
    }

    #[test]
    #[should_panic(expected = "zero step")]
    fn test_zero_step_panics() {
        let _ = ProgressMonitor::new(0);
    }

    #[test]
    fn test_default_step() {
        let monitor = ProgressMonitor::default();
        assert_eq!(monitor.step(), DEFAULT_PROGRESS_STEP);
        assert_eq!(monitor.to_string(), "ProgressMonitor(step: 5000000)");
    }
}
