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

use crate::{solution::Solution, stats::BfsStatistics};

/// Why a search run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BfsTerminationReason {
    /// The frontier drained; every reachable configuration within the depth
    /// bound was expanded.
    Exhausted,
    /// The run was configured to stop at the first solution and found one.
    FirstSolution,
    /// A monitor requested termination. The string carries its reason.
    Aborted(String),
}

impl std::fmt::Display for BfsTerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BfsTerminationReason::Exhausted => write!(f, "Exhausted"),
            BfsTerminationReason::FirstSolution => write!(f, "First Solution"),
            BfsTerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a search run.
#[derive(Debug, Clone)]
pub struct BfsOutcome {
    solutions: Vec<Solution>,
    termination_reason: BfsTerminationReason,
    statistics: BfsStatistics,
}

impl BfsOutcome {
    #[inline]
    pub fn new(
        solutions: Vec<Solution>,
        termination_reason: BfsTerminationReason,
        statistics: BfsStatistics,
    ) -> Self {
        debug_assert_eq!(
            solutions.len() as u64,
            statistics.solutions_found,
            "called `BfsOutcome::new` with inconsistent solution count"
        );

        Self {
            solutions,
            termination_reason,
            statistics,
        }
    }

    /// Solutions in discovery order.
    #[inline]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    #[inline]
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }

    #[inline]
    pub fn termination_reason(&self) -> &BfsTerminationReason {
        &self.termination_reason
    }

    #[inline]
    pub fn statistics(&self) -> &BfsStatistics {
        &self.statistics
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.termination_reason, BfsTerminationReason::Exhausted)
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        !self.solutions.is_empty()
    }
}

impl std::fmt::Display for BfsOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Termination: {}", self.termination_reason)?;
        writeln!(f, "Solutions: {}", self.solutions.len())?;
        write!(f, "{}", self.statistics)
    }
}
