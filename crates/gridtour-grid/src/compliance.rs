//! Connectivity oracle compliance test helpers.
//!
//! These functions verify that a [`WallGrid`] satisfies the invariants the
//! search and planner rely on. Reused across the walls and search test
//! modules.

use crate::search::shortest_path;
use crate::walls::WallGrid;
use gridtour_core::Coord;
use std::collections::HashSet;

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &WallGrid) {
    for coord in grid.cells() {
        for nb in grid.neighbours(coord) {
            assert!(
                grid.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that every neighbour is in bounds, one step away, and unblocked.
pub fn assert_neighbours_walkable(grid: &WallGrid) {
    for coord in grid.cells() {
        for nb in grid.neighbours(coord) {
            assert!(grid.contains(nb), "neighbour {nb:?} of {coord:?} out of bounds");
            assert_eq!(coord.manhattan(nb), 1, "{nb:?} not adjacent to {coord:?}");
            assert!(!grid.blocked(coord, nb), "{coord:?} -> {nb:?} is blocked");
        }
    }
}

/// Assert that neighbour lists contain no duplicates.
pub fn assert_neighbours_distinct(grid: &WallGrid) {
    for coord in grid.cells() {
        let nbs = grid.neighbours(coord);
        let unique: HashSet<Coord> = nbs.iter().copied().collect();
        assert_eq!(unique.len(), nbs.len(), "duplicate neighbours for {coord:?}");
    }
}

/// Assert that path length is symmetric and obeys the triangle inequality
/// for every reachable triple.
pub fn assert_path_length_metric(grid: &WallGrid) {
    let cells: Vec<Coord> = grid.cells().collect();
    let len = |a: Coord, b: Coord| shortest_path(grid, a, b).map(|r| r.length());
    for &a in &cells {
        assert_eq!(len(a, a), Some(0), "self-distance of {a:?} is not zero");
        for &b in &cells {
            assert_eq!(len(a, b), len(b, a), "asymmetric length {a:?} <-> {b:?}");
        }
    }
    // Triangle inequality over a strided sample keeps this tractable.
    for &a in cells.iter().step_by(3) {
        for &b in cells.iter().step_by(2) {
            for &c in cells.iter().step_by(5) {
                if let (Some(ac), Some(ab), Some(bc)) = (len(a, c), len(a, b), len(b, c)) {
                    assert!(
                        ac <= ab + bc,
                        "triangle inequality violated: d({a:?},{c:?})={ac} > {ab} + {bc}"
                    );
                }
            }
        }
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(grid: &WallGrid) {
    assert_neighbours_symmetric(grid);
    assert_neighbours_walkable(grid);
    assert_neighbours_distinct(grid);
    assert_path_length_metric(grid);
}
