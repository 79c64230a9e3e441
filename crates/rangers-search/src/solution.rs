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

use rangers_model::{catalog::Move, configuration::Configuration};

/// A goal configuration reported by the search, numbered in discovery order
/// starting at 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    ordinal: u64,
    configuration: Configuration,
}

impl Solution {
    #[inline]
    pub fn new(ordinal: u64, configuration: Configuration) -> Self {
        Self {
            ordinal,
            configuration,
        }
    }

    #[inline]
    pub fn ordinal(&self) -> u64 {
        self.ordinal
    }

    #[inline]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// The moves that produced this solution, starting with the forced
    /// opening if the scenario has one.
    #[inline]
    pub fn history(&self) -> &[Move] {
        self.configuration.history()
    }

    #[inline]
    pub fn into_configuration(self) -> Configuration {
        self.configuration
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Solution: {}", self.ordinal)?;
        write!(f, "{}", self.configuration)
    }
}

#[cfg(test)]
mod tests {
    use super::Solution;
    use rangers_model::scenario::Scenario;

    #[test]
    fn test_accessors_and_display() {
        let root = Scenario::rangers().seed();
        let solution = Solution::new(3, root.clone());

        assert_eq!(solution.ordinal(), 3);
        assert_eq!(solution.history(), root.history());
        assert_eq!(solution.configuration(), &root);

        let rendered = solution.to_string();
        assert!(rendered.starts_with("Solution: 3\n"));
        assert!(rendered.contains("name:A, station:S"));
        assert!(rendered.contains("[A,C], "));

        assert_eq!(solution.into_configuration(), root);
    }
}
