//! Grid coordinates, absolute step directions, and validated grid sizes.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the square grid.
///
/// `x` is the column and grows to the right; `y` is the row and grows
/// downwards. Serialized as a two-element array `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from a column and a row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate one step away in the given absolute direction.
    ///
    /// The result may lie outside any particular grid.
    pub fn step(self, dir: Cardinal) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance between two coordinates.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An absolute grid direction, independent of the robot's heading.
///
/// Discriminants follow clockwise rotation order starting at north, which
/// [`Heading`](crate::Heading) relies on for relative/absolute conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cardinal {
    /// Towards row 0 (`y - 1`).
    North = 0,
    /// Towards the last column (`x + 1`).
    East = 1,
    /// Towards the last row (`y + 1`).
    South = 2,
    /// Towards column 0 (`x - 1`).
    West = 3,
}

impl Cardinal {
    /// All four directions in rotation order.
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Returns the `(dx, dy)` unit offset for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Cardinal::North => (0, -1),
            Cardinal::East => (1, 0),
            Cardinal::South => (0, 1),
            Cardinal::West => (-1, 0),
        }
    }

    /// The direction of a unit step from `a` to `b`.
    ///
    /// Returns `None` unless the two cells are exactly one apart along a
    /// single axis.
    pub fn between(a: Coord, b: Coord) -> Option<Self> {
        let (Some(dx), Some(dy)) = (b.x.checked_sub(a.x), b.y.checked_sub(a.y)) else {
            return None;
        };
        match (dx, dy) {
            (0, -1) => Some(Cardinal::North),
            (1, 0) => Some(Cardinal::East),
            (0, 1) => Some(Cardinal::South),
            (-1, 0) => Some(Cardinal::West),
            _ => None,
        }
    }

    pub(crate) fn from_index(i: u8) -> Self {
        Self::ALL[(i % 4) as usize]
    }
}

/// Side length of a square grid, validated to be at least 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct GridSize(u32);

impl GridSize {
    /// Smallest accepted side length.
    pub const MIN: u32 = 2;

    /// Largest accepted side length. Wall storage and per-search bookkeeping
    /// are `O(size²)`, so larger grids are refused before anything is allocated.
    pub const MAX: u32 = 4096;

    /// Side length substituted when setup input is rejected.
    pub const DEFAULT: GridSize = GridSize(4);

    /// Validate a raw side length.
    ///
    /// Accepts a signed value because setup input is read before any
    /// validation has happened.
    pub fn new(raw: i64) -> Result<Self, ConfigError> {
        if raw < Self::MIN as i64 {
            return Err(ConfigError::GridTooSmall { size: raw });
        }
        if raw > Self::MAX as i64 {
            return Err(ConfigError::GridTooLarge {
                size: raw,
                max: Self::MAX,
            });
        }
        Ok(Self(raw as u32))
    }

    /// Parse a side length from a setup token such as `"5"`.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let raw: i64 = token
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidGridSize {
                token: token.to_string(),
            })?;
        Self::new(raw)
    }

    /// Side length as `u32`.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Side length as `i32` for coordinate arithmetic.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Whether `c` lies within `[0, size)` on both axes.
    pub fn contains(self, c: Coord) -> bool {
        let n = self.as_i32();
        c.x >= 0 && c.x < n && c.y >= 0 && c.y < n
    }

    /// Row-major flat index of an in-bounds coordinate.
    pub fn index(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some((c.y as usize) * (self.0 as usize) + (c.x as usize))
    }

    /// Check that `c` is in bounds, naming the offending item on failure.
    pub fn check(self, what: &'static str, c: Coord) -> Result<Coord, ConfigError> {
        if self.contains(c) {
            Ok(c)
        } else {
            Err(ConfigError::CoordOutOfBounds {
                what,
                coord: c,
                size: self.0,
            })
        }
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for GridSize {
    type Error = ConfigError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<GridSize> for u32 {
    fn from(s: GridSize) -> Self {
        s.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
