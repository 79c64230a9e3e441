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

/// One of the two stations an entity can be posted to.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Station {
    North,
    South,
}

impl Station {
    /// Both stations, North first.
    pub const ALL: [Station; 2] = [Station::North, Station::South];

    /// Returns the other station.
    #[inline(always)]
    pub const fn opposite(self) -> Self {
        match self {
            Station::North => Station::South,
            Station::South => Station::North,
        }
    }

    #[inline(always)]
    pub const fn is_north(self) -> bool {
        matches!(self, Station::North)
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Station::North => write!(f, "N"),
            Station::South => write!(f, "S"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Station;

    #[test]
    fn test_opposite_is_an_involution() {
        for station in Station::ALL {
            assert_ne!(station.opposite(), station);
            assert_eq!(station.opposite().opposite(), station);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Station::North.to_string(), "N");
        assert_eq!(Station::South.to_string(), "S");
        assert!(Station::North.is_north());
        assert!(!Station::South.is_north());
    }
}
