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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait and the `SearchCommand` a monitor uses
//! to steer the breadth-first search. Monitors observe the lifecycle
//! (enter → expand → solution → exit) and are polled for a command before
//! every expansion and right after every reported solution.
//!
//! Monitors are observers: nothing they do changes which configurations are
//! reachable, only whether the run continues.

use crate::{solution::Solution, stats::BfsStatistics};
use rangers_model::configuration::Configuration;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for monitoring and controlling the search process.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once with the seeded root before it is enqueued.
    fn on_enter_search(&mut self, root: &Configuration, statistics: &BfsStatistics);
    /// Called when the search ends, for whatever reason.
    fn on_exit_search(&mut self, statistics: &BfsStatistics);
    /// Called for every configuration taken off the frontier, after the
    /// statistics have counted it. `frontier_len` is the number of
    /// configurations still waiting.
    fn on_expand(&mut self, node: &Configuration, frontier_len: usize, statistics: &BfsStatistics);
    /// Called for every reported goal configuration.
    fn on_solution_found(&mut self, solution: &Solution, statistics: &BfsStatistics);
    /// Called to determine the next action of the search.
    fn search_command(&mut self, _statistics: &BfsStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<M> SearchMonitor for &mut M
where
    M: SearchMonitor + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn on_enter_search(&mut self, root: &Configuration, statistics: &BfsStatistics) {
        (**self).on_enter_search(root, statistics);
    }

    fn on_exit_search(&mut self, statistics: &BfsStatistics) {
        (**self).on_exit_search(statistics);
    }

    fn on_expand(&mut self, node: &Configuration, frontier_len: usize, statistics: &BfsStatistics) {
        (**self).on_expand(node, frontier_len, statistics);
    }

    fn on_solution_found(&mut self, solution: &Solution, statistics: &BfsStatistics) {
        (**self).on_solution_found(solution, statistics);
    }

    fn search_command(&mut self, statistics: &BfsStatistics) -> SearchCommand {
        (**self).search_command(statistics)
    }
}
