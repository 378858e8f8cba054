//! Wall layout and the connectivity oracle built on it.

use gridtour_core::{ConfigError, Coord, GridSize};
use smallvec::SmallVec;

/// Neighbour probe order. Fixed: it decides which of several equal-length
/// shortest paths the search returns.
const PROBE_ORDER: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// A square grid together with its two wall collections.
///
/// - Vertical walls sit between column `x` and `x + 1` at row `y`
///   (`(size - 1) x size` entries, indexed `[x][y]`).
/// - Horizontal walls sit between row `y` and `y + 1` at column `x`
///   (`size x (size - 1)` entries, indexed `[x][y]`).
///
/// Both are stored flat. The grid itself is immutable during a solve; the
/// mutators exist for building snapshots.
///
/// # Examples
///
/// ```
/// use gridtour_core::{Coord, GridSize};
/// use gridtour_grid::WallGrid;
///
/// let mut grid = WallGrid::new(GridSize::new(4).unwrap());
/// let a = Coord::new(1, 1);
/// let b = Coord::new(2, 1);
/// assert!(!grid.blocked(a, b));
///
/// grid.set_vertical_wall(1, 1, true).unwrap();
/// assert!(grid.blocked(a, b));
/// assert!(grid.blocked(b, a));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallGrid {
    size: GridSize,
    vertical: Vec<bool>,
    horizontal: Vec<bool>,
}

impl WallGrid {
    /// Create a wall-free grid.
    pub fn new(size: GridSize) -> Self {
        let n = size.get() as usize;
        Self {
            size,
            vertical: vec![false; (n - 1) * n],
            horizontal: vec![false; n * (n - 1)],
        }
    }

    /// Build a grid from nested boolean matrices indexed `[x][y]`.
    ///
    /// Returns `Err(ConfigError::WallDimensions)` if either matrix has the
    /// wrong shape for `size`.
    pub fn from_matrices(
        size: GridSize,
        vertical: &[Vec<bool>],
        horizontal: &[Vec<bool>],
    ) -> Result<Self, ConfigError> {
        let n = size.get() as usize;
        check_shape("vertical", vertical, n - 1, n)?;
        check_shape("horizontal", horizontal, n, n - 1)?;
        Ok(Self {
            size,
            vertical: vertical.concat(),
            horizontal: horizontal.concat(),
        })
    }

    /// Grid side length.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Whether `c` lies inside the grid.
    pub fn contains(&self, c: Coord) -> bool {
        self.size.contains(c)
    }

    fn n(&self) -> usize {
        self.size.get() as usize
    }

    fn vertical_index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.n() as i32;
        if x < 0 || x >= n - 1 || y < 0 || y >= n {
            return None;
        }
        Some(x as usize * self.n() + y as usize)
    }

    fn horizontal_index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.n() as i32;
        if x < 0 || x >= n || y < 0 || y >= n - 1 {
            return None;
        }
        Some(x as usize * (self.n() - 1) + y as usize)
    }

    /// The vertical wall between column `x` and `x + 1` at row `y`, if in range.
    pub fn vertical_wall(&self, x: i32, y: i32) -> Option<bool> {
        self.vertical_index(x, y).map(|i| self.vertical[i])
    }

    /// The horizontal wall between row `y` and `y + 1` at column `x`, if in range.
    pub fn horizontal_wall(&self, x: i32, y: i32) -> Option<bool> {
        self.horizontal_index(x, y).map(|i| self.horizontal[i])
    }

    /// Place or remove a vertical wall.
    pub fn set_vertical_wall(&mut self, x: i32, y: i32, present: bool) -> Result<(), ConfigError> {
        let i = self
            .vertical_index(x, y)
            .ok_or(ConfigError::WallOutOfBounds {
                axis: "vertical",
                x,
                y,
            })?;
        self.vertical[i] = present;
        Ok(())
    }

    /// Place or remove a horizontal wall.
    pub fn set_horizontal_wall(
        &mut self,
        x: i32,
        y: i32,
        present: bool,
    ) -> Result<(), ConfigError> {
        let i = self
            .horizontal_index(x, y)
            .ok_or(ConfigError::WallOutOfBounds {
                axis: "horizontal",
                x,
                y,
            })?;
        self.horizontal[i] = present;
        Ok(())
    }

    /// Flip a vertical wall, returning its new state.
    pub fn toggle_vertical_wall(&mut self, x: i32, y: i32) -> Result<bool, ConfigError> {
        let now = !self.vertical_wall(x, y).unwrap_or(false);
        self.set_vertical_wall(x, y, now)?;
        Ok(now)
    }

    /// Flip a horizontal wall, returning its new state.
    pub fn toggle_horizontal_wall(&mut self, x: i32, y: i32) -> Result<bool, ConfigError> {
        let now = !self.horizontal_wall(x, y).unwrap_or(false);
        self.set_horizontal_wall(x, y, now)?;
        Ok(now)
    }

    /// Wall between two cells sharing an edge, regardless of argument order.
    ///
    /// Returns `ConfigError::CoordOutOfBounds` if either cell is outside the
    /// grid and `ConfigError::WallOutOfBounds` if they are not adjacent.
    pub fn set_wall_between(&mut self, a: Coord, b: Coord, present: bool) -> Result<(), ConfigError> {
        self.size.check("wall cell", a)?;
        self.size.check("wall cell", b)?;
        if a.y == b.y && a.x.abs_diff(b.x) == 1 {
            self.set_vertical_wall(a.x.min(b.x), a.y, present)
        } else if a.x == b.x && a.y.abs_diff(b.y) == 1 {
            self.set_horizontal_wall(a.x, a.y.min(b.y), present)
        } else {
            Err(ConfigError::WallOutOfBounds {
                axis: "between",
                x: b.x - a.x,
                y: b.y - a.y,
            })
        }
    }

    /// Coordinates `(x, y)` of every placed vertical wall, in `[x][y]` order.
    pub fn vertical_walls(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let n = self.n();
        self.vertical
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| ((i / n) as i32, (i % n) as i32))
    }

    /// Coordinates `(x, y)` of every placed horizontal wall, in `[x][y]` order.
    pub fn horizontal_walls(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let m = self.n() - 1;
        self.horizontal
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(move |(i, _)| ((i / m) as i32, (i % m) as i32))
    }

    /// Total number of placed walls.
    pub fn wall_count(&self) -> usize {
        let v = self.vertical.iter().filter(|&&w| w).count();
        let h = self.horizontal.iter().filter(|&&w| w).count();
        v + h
    }

    /// Whether movement from `a` to `b` is disallowed.
    ///
    /// Cells outside the grid and pairs that are not exactly one step
    /// apart along a single axis are always blocked. Otherwise the wall
    /// separating the two cells decides.
    pub fn blocked(&self, a: Coord, b: Coord) -> bool {
        if !self.contains(b) || !self.contains(a) {
            return true;
        }
        let wall = if a.x == b.x {
            if a.y == b.y + 1 {
                self.horizontal_wall(a.x, b.y)
            } else if a.y + 1 == b.y {
                self.horizontal_wall(a.x, a.y)
            } else {
                None
            }
        } else if a.y == b.y {
            if a.x == b.x + 1 {
                self.vertical_wall(b.x, a.y)
            } else if a.x + 1 == b.x {
                self.vertical_wall(a.x, a.y)
            } else {
                None
            }
        } else {
            None
        };
        wall.unwrap_or(true)
    }

    /// Cells reachable from `c` in one step, probed up, down, left, right.
    ///
    /// The order is part of the contract: breadth-first search visits
    /// neighbours in exactly this order.
    pub fn neighbours(&self, c: Coord) -> SmallVec<[Coord; 4]> {
        PROBE_ORDER
            .iter()
            .filter_map(|&(dx, dy)| Some(Coord::new(c.x.checked_add(dx)?, c.y.checked_add(dy)?)))
            .filter(|&nb| !self.blocked(c, nb))
            .collect()
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let n = self.size.as_i32();
        (0..n).flat_map(move |y| (0..n).map(move |x| Coord::new(x, y)))
    }
}

fn check_shape(
    axis: &'static str,
    rows: &[Vec<bool>],
    outer: usize,
    inner: usize,
) -> Result<(), ConfigError> {
    let bad_row = rows.iter().find(|r| r.len() != inner);
    if rows.len() != outer || bad_row.is_some() {
        return Err(ConfigError::WallDimensions {
            axis,
            expected: (outer, inner),
            found: (rows.len(), bad_row.map_or(inner, Vec::len)),
        });
    }
    Ok(())
}
