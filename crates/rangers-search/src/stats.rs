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

/// Statistics collected during a breadth-first search run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BfsStatistics {
    /// Configurations taken off the frontier and expanded.
    pub nodes_expanded: u64,
    /// Catalog moves tried against an expanded configuration.
    pub moves_attempted: u64,
    /// Attempts that paired two entities at the same station.
    pub moves_rejected: u64,
    /// Children pushed onto the frontier.
    pub nodes_enqueued: u64,
    /// Non-goal children dropped because they reached the depth bound.
    pub depth_limited: u64,
    /// Goal configurations reported.
    pub solutions_found: u64,
    /// Largest frontier observed.
    pub max_frontier_len: u64,
    /// Longest move history among expanded configurations.
    pub max_depth: u64,
    /// Total time spent in the search.
    pub time_total: Duration,
}

impl BfsStatistics {
    #[inline]
    pub fn on_node_expanded(&mut self, depth: usize) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
        self.max_depth = self.max_depth.max(depth as u64);
    }

    #[inline]
    pub fn on_move_attempted(&mut self) {
        self.moves_attempted = self.moves_attempted.saturating_add(1);
    }

    #[inline]
    pub fn on_move_rejected(&mut self) {
        self.moves_rejected = self.moves_rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_node_enqueued(&mut self, frontier_len: usize) {
        self.nodes_enqueued = self.nodes_enqueued.saturating_add(1);
        self.max_frontier_len = self.max_frontier_len.max(frontier_len as u64);
    }

    #[inline]
    pub fn on_depth_limited(&mut self) {
        self.depth_limited = self.depth_limited.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BfsStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Rangers BFS Statistics:")?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Moves attempted:      {}", self.moves_attempted)?;
        writeln!(f, "  Moves rejected:       {}", self.moves_rejected)?;
        writeln!(f, "  Nodes enqueued:       {}", self.nodes_enqueued)?;
        writeln!(f, "  Depth limited:        {}", self.depth_limited)?;
        writeln!(f, "  Max frontier:         {}", self.max_frontier_len)?;
        writeln!(f, "  Max depth expanded:   {}", self.max_depth)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
