//! Walkable cell-center paths and leg composition.

use crate::error::RouteError;
use crate::walls::WallGrid;
use gridtour_core::{Cardinal, Coord};

/// An ordered sequence of cells, each one step from the next.
///
/// Every edge is worth exactly one grid unit. Routes produced by
/// [`shortest_path`](crate::shortest_path) are also wall-free; routes
/// built with [`Route::from_cells`] are only checked for adjacency, use
/// [`is_walkable`](Route::is_walkable) to check them against a layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Route {
    cells: Vec<Coord>,
}

impl Route {
    /// The empty route.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A route that stays on one cell.
    pub fn single(c: Coord) -> Self {
        Self { cells: vec![c] }
    }

    /// Build a route, checking that consecutive cells are adjacent.
    pub fn from_cells(cells: Vec<Coord>) -> Result<Self, RouteError> {
        if let Some((index, w)) = cells
            .windows(2)
            .enumerate()
            .find(|(_, w)| Cardinal::between(w[0], w[1]).is_none())
        {
            return Err(RouteError::NotAdjacent {
                index,
                from: w[0],
                to: w[1],
            });
        }
        Ok(Self { cells })
    }

    /// Construction for callers that already guarantee adjacency.
    pub(crate) fn from_cells_unchecked(cells: Vec<Coord>) -> Self {
        debug_assert!(cells
            .windows(2)
            .all(|w| Cardinal::between(w[0], w[1]).is_some()));
        Self { cells }
    }

    /// Stitch legs into one route.
    ///
    /// Leg `i + 1` must start where leg `i` ends; that shared cell appears
    /// once in the result. The first leg is kept whole.
    ///
    /// ```
    /// use gridtour_core::Coord;
    /// use gridtour_grid::Route;
    ///
    /// let a = Route::from_cells(vec![Coord::new(0, 0), Coord::new(1, 0)]).unwrap();
    /// let b = Route::from_cells(vec![Coord::new(1, 0), Coord::new(1, 1)]).unwrap();
    /// let r = Route::concat(&[a, b]).unwrap();
    /// assert_eq!(r.cells().len(), 3);
    /// assert_eq!(r.length(), 2);
    /// ```
    pub fn concat(legs: &[Route]) -> Result<Self, RouteError> {
        let mut cells: Vec<Coord> = Vec::with_capacity(legs.iter().map(Route::len).sum());
        for (leg, route) in legs.iter().enumerate() {
            let (first, rest) = route
                .cells
                .split_first()
                .ok_or(RouteError::EmptyLeg { leg })?;
            match cells.last() {
                None => cells.push(*first),
                Some(&prev) if prev == *first => {}
                Some(&prev) => {
                    return Err(RouteError::Discontinuous {
                        leg,
                        expected: prev,
                        found: *first,
                    })
                }
            }
            cells.extend_from_slice(rest);
        }
        Ok(Self { cells })
    }

    /// Number of edges: `max(0, cells - 1)`.
    pub fn length(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the route holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in travel order.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// First cell, if any.
    pub fn first(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    /// Last cell, if any.
    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    /// Absolute direction of each unit step, in travel order.
    pub fn steps(&self) -> impl Iterator<Item = Cardinal> + '_ {
        self.cells
            .windows(2)
            .filter_map(|w| Cardinal::between(w[0], w[1]))
    }

    /// Whether every cell is inside `grid` and no step crosses a wall.
    pub fn is_walkable(&self, grid: &WallGrid) -> bool {
        self.cells.iter().all(|&c| grid.contains(c))
            && self.cells.windows(2).all(|w| !grid.blocked(w[0], w[1]))
    }

    /// Consume the route, returning its cells.
    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}
