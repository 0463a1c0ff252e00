use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul, Sub};

/// Axial coordinate of a board cell.
/// The implicit third cube coordinate is `s = -q - r`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct HexCoord {
    q: i32,
    r: i32,
}

/// Unit vectors to the six neighbours of a cell, in the order they are scanned
/// by winner detection.
pub const DIRECTIONS: [HexCoord; 6] = [
    HexCoord::new(1, 0),
    HexCoord::new(0, 1),
    HexCoord::new(-1, 1),
    HexCoord::new(-1, 0),
    HexCoord::new(0, -1),
    HexCoord::new(1, -1),
];

impl HexCoord {
    /// Constructs a new [`HexCoord`].
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Returns value of `self.q`
    pub const fn q(&self) -> i32 {
        self.q
    }

    /// Returns value of `self.r`
    pub const fn r(&self) -> i32 {
        self.r
    }

    /// Returns the implicit cube coordinate `s = -q - r`.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Number of steps between two cells on an unbounded hex grid.
    pub fn distance(&self, other: HexCoord) -> u32 {
        let diff = *self - other;
        (diff.q.unsigned_abs() + diff.r.unsigned_abs() + diff.s().unsigned_abs()) / 2
    }

    /// Returns `true` if the cell lies inside the hexagon of `radius` centered at the origin.
    pub fn is_within(&self, radius: u32) -> bool {
        self.distance(Self::default()) <= radius
    }

    /// Returns an iterator over the six neighbours in [`DIRECTIONS`] order.
    pub fn neighbors(self) -> impl Iterator<Item = HexCoord> {
        DIRECTIONS.into_iter().map(move |dir| self + dir)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Display for HexCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

impl Add for HexCoord {
    type Output = HexCoord;

    fn add(self, other: HexCoord) -> HexCoord {
        HexCoord::new(self.q + other.q, self.r + other.r)
    }
}

impl Sub for HexCoord {
    type Output = HexCoord;

    fn sub(self, other: HexCoord) -> HexCoord {
        HexCoord::new(self.q - other.q, self.r - other.r)
    }
}

impl Mul<i32> for HexCoord {
    type Output = HexCoord;

    fn mul(self, n: i32) -> HexCoord {
        HexCoord::new(self.q * n, self.r * n)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_directions_cancel_out() {
        // every direction has its opposite in the list
        for dir in DIRECTIONS {
            assert!(DIRECTIONS.contains(&(dir * -1)));
        }
        let sum = DIRECTIONS
            .into_iter()
            .fold(HexCoord::default(), |acc, dir| acc + dir);
        assert_eq!(sum, HexCoord::default());
    }

    #[test]
    fn test_distance() {
        let origin = HexCoord::default();
        assert_eq!(origin.distance(origin), 0);
        for neighbor in origin.neighbors() {
            assert_eq!(origin.distance(neighbor), 1);
        }
        assert_eq!(origin.distance(HexCoord::new(2, -1)), 2);
        assert_eq!(origin.distance(HexCoord::new(2, 0)), 2);
        assert_eq!(HexCoord::new(-2, 0).distance(HexCoord::new(2, 0)), 4);
        assert_eq!(HexCoord::new(1, 1).distance(HexCoord::new(-1, -1)), 4);
    }

    #[test]
    fn test_is_within() {
        assert!(HexCoord::new(0, 0).is_within(0));
        assert!(HexCoord::new(2, -2).is_within(2));
        assert!(HexCoord::new(-1, -1).is_within(2));
        assert!(!HexCoord::new(1, 2).is_within(2));
        assert!(!HexCoord::new(-2, -1).is_within(2));
        assert!(!HexCoord::new(3, 0).is_within(2));
    }

    #[test]
    fn test_neighbors() {
        itertools::assert_equal(
            HexCoord::new(1, -1).neighbors(),
            [
                HexCoord::new(2, -1),
                HexCoord::new(1, 0),
                HexCoord::new(0, 0),
                HexCoord::new(0, -1),
                HexCoord::new(1, -2),
                HexCoord::new(2, -2),
            ],
        );
    }
}
