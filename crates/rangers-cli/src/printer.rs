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

//! Live solution output.

use rangers_model::configuration::Configuration;
use rangers_search::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    solution::Solution,
    stats::BfsStatistics,
};
use std::io::{self, Write};

/// Writes every solution to `out` as soon as it is reported.
///
/// A failed write stops the search; the error is kept for the caller.
#[derive(Debug)]
pub struct SolutionPrinter<W> {
    out: W,
    quiet: bool,
    printed: u64,
    error: Option<io::Error>,
}

impl<W> SolutionPrinter<W>
where
    W: Write,
{
    pub fn new(out: W, quiet: bool) -> Self {
        Self {
            out,
            quiet,
            printed: 0,
            error: None,
        }
    }

    #[inline]
    pub fn printed(&self) -> u64 {
        self.printed
    }

    /// Returns the first write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W> SearchMonitor for SolutionPrinter<W>
where
    W: Write,
{
    fn name(&self) -> &str {
        "SolutionPrinter"
    }

    fn on_enter_search(&mut self, _root: &Configuration, _statistics: &BfsStatistics) {
        self.printed = 0;
    }

    fn on_exit_search(&mut self, _statistics: &BfsStatistics) {
        if self.error.is_none() {
            if let Err(err) = self.out.flush() {
                self.error = Some(err);
            }
        }
    }

    fn on_expand(
        &mut self,
        _node: &Configuration,
        _frontier_len: usize,
        _statistics: &BfsStatistics,
    ) {}

    fn on_solution_found(&mut self, solution: &Solution, _statistics: &BfsStatistics) {
        if self.quiet || self.error.is_some() {
            return;
        }
        match writeln!(self.out, "{}", solution) {
            Ok(()) => self.printed += 1,
            Err(err) => self.error = Some(err),
        }
    }

    fn search_command(&mut self, _statistics: &BfsStatistics) -> SearchCommand {
        match &self.error {
            Some(err) => SearchCommand::Terminate(format!("failed to write solution: {}", err)),
            None => SearchCommand::Continue,
        }
    }
}
