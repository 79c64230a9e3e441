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

/// Whether the search stops at the first solution or runs until the
/// frontier drains.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SearchMode {
    #[default]
    Exhaustive,
    FirstSolution,
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Exhaustive => write!(f, "Exhaustive"),
            SearchMode::FirstSolution => write!(f, "FirstSolution"),
        }
    }
}

/// Settings of a `BfsSolver`.
///
/// Every configuration always has legal moves left, so an exhaustive run
/// without `max_depth` only ends through a monitor. With a bound, children
/// whose history reaches `max_depth` are still goal-checked but never
/// enqueued.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BfsConfig {
    pub mode: SearchMode,
    pub max_depth: Option<usize>,
}

impl BfsConfig {
    /// Exhaustive, unbounded search.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    #[inline]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[inline]
    pub fn stops_at_first_solution(&self) -> bool {
        matches!(self.mode, SearchMode::FirstSolution)
    }

    /// Returns `true` if a configuration with `depth` moves may be expanded.
    #[inline]
    pub fn allows_expansion(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|limit| depth < limit)
    }
}

impl std::fmt::Display for BfsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max_depth {
            Some(depth) => write!(f, "BfsConfig(mode: {}, max_depth: {})", self.mode, depth),
            None => write!(f, "BfsConfig(mode: {}, max_depth: none)", self.mode),
        }
    }
}
