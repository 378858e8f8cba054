//! Breadth-first shortest-path search between two cells.

use crate::route::Route;
use crate::walls::WallGrid;
use gridtour_core::Coord;
use std::collections::VecDeque;

/// Result of one search, with the bookkeeping the planner reports.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The shortest route from start to goal inclusive, or `None` if the
    /// goal is unreachable.
    pub route: Option<Route>,
    /// Number of cells dequeued and expanded.
    pub expanded: usize,
}

/// Find a minimum-edge route from `start` to `goal`.
///
/// Returns `None` if `goal` cannot be reached (or either cell lies outside
/// the grid). When `start == goal` the single-cell route is returned
/// without searching.
///
/// Among several shortest routes, the one found first when neighbours are
/// probed up, down, left, right is returned.
///
/// # Examples
///
/// ```
/// use gridtour_core::{Coord, GridSize};
/// use gridtour_grid::{shortest_path, WallGrid};
///
/// let grid = WallGrid::new(GridSize::new(4).unwrap());
/// let route = shortest_path(&grid, Coord::new(0, 0), Coord::new(3, 3)).unwrap();
/// assert_eq!(route.length(), 6);
/// ```
pub fn shortest_path(grid: &WallGrid, start: Coord, goal: Coord) -> Option<Route> {
    search(grid, start, goal).route
}

/// Like [`shortest_path`], also reporting how many cells were expanded.
///
/// Each cell is expanded at most once, so time and memory are
/// `O(size²)` per call. All bookkeeping is local to the call.
pub fn search(grid: &WallGrid, start: Coord, goal: Coord) -> SearchOutcome {
    let size = grid.size();
    let (Some(start_idx), Some(_)) = (size.index(start), size.index(goal)) else {
        return SearchOutcome {
            route: None,
            expanded: 0,
        };
    };
    if start == goal {
        return SearchOutcome {
            route: Some(Route::single(start)),
            expanded: 0,
        };
    }

    let n = size.cell_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<Coord>> = vec![None; n];
    let mut queue = VecDeque::new();
    let mut expanded = 0usize;
    let mut found = false;

    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(cur) = queue.pop_front() {
        expanded += 1;
        if cur == goal {
            found = true;
            break;
        }
        for nb in grid.neighbours(cur) {
            // Neighbours are always in bounds.
            let Some(i) = size.index(nb) else { continue };
            if !visited[i] {
                visited[i] = true;
                parent[i] = Some(cur);
                queue.push_back(nb);
            }
        }
    }

    if !found {
        tracing::trace!(%start, %goal, expanded, "goal unreachable");
        return SearchOutcome {
            route: None,
            expanded,
        };
    }

    let mut cells = vec![goal];
    let mut cur = goal;
    while let Some(prev) = size.index(cur).and_then(|i| parent[i]) {
        cells.push(prev);
        cur = prev;
    }
    cells.reverse();

    SearchOutcome {
        route: Some(Route::from_cells_unchecked(cells)),
        expanded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use gridtour_core::GridSize;
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    fn grid(n: i64) -> WallGrid {
        WallGrid::new(GridSize::new(n).unwrap())
    }

    /// Wall off every side of `cell` that faces another cell.
    fn enclose(g: &mut WallGrid, cell: Coord) {
        for nb in g.neighbours(cell) {
            g.set_wall_between(cell, nb, true).unwrap();
        }
    }

    #[test]
    fn same_cell_is_single_element() {
        let g = grid(3);
        let out = search(&g, c(1, 1), c(1, 1));
        assert_eq!(out.route, Some(Route::single(c(1, 1))));
        assert_eq!(out.expanded, 0);
    }

    #[test]
    fn same_cell_even_when_enclosed() {
        let mut g = grid(3);
        enclose(&mut g, c(1, 1));
        assert_eq!(shortest_path(&g, c(1, 1), c(1, 1)), Some(Route::single(c(1, 1))));
    }

    #[test]
    fn straight_line_route() {
        let g = grid(5);
        let r = shortest_path(&g, c(0, 2), c(4, 2)).unwrap();
        assert_eq!(r.cells(), &[c(0, 2), c(1, 2), c(2, 2), c(3, 2), c(4, 2)]);
    }

    #[test]
    fn tie_break_prefers_vertical_first() {
        // Up/down are probed before left/right, so from (0,0) to (1,1) the
        // search reaches (0,1) first and the route goes down, then right.
        let g = grid(3);
        let r = shortest_path(&g, c(0, 0), c(1, 1)).unwrap();
        assert_eq!(r.cells(), &[c(0, 0), c(0, 1), c(1, 1)]);

        let r = shortest_path(&g, c(2, 2), c(1, 1)).unwrap();
        assert_eq!(r.cells(), &[c(2, 2), c(2, 1), c(1, 1)]);
    }

    #[test]
    fn detours_around_wall() {
        // 3x3, wall between (0,0)-(1,0) and (0,1)-(1,1): must go via row 2.
        let mut g = grid(3);
        g.set_vertical_wall(0, 0, true).unwrap();
        g.set_vertical_wall(0, 1, true).unwrap();
        let r = shortest_path(&g, c(0, 0), c(1, 0)).unwrap();
        assert_eq!(r.length(), 5);
        assert!(r.is_walkable(&g));
        assert_eq!(r.first(), Some(c(0, 0)));
        assert_eq!(r.last(), Some(c(1, 0)));
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let mut g = grid(4);
        enclose(&mut g, c(3, 3));
        let out = search(&g, c(0, 0), c(3, 3));
        assert_eq!(out.route, None);
        // Every other cell was expanded before giving up.
        assert_eq!(out.expanded, 15);
    }

    #[test]
    fn out_of_grid_endpoints_are_unreachable() {
        let g = grid(3);
        assert_eq!(shortest_path(&g, c(0, 0), c(3, 0)), None);
        assert_eq!(shortest_path(&g, c(-1, 0), c(0, 0)), None);
    }

    #[test]
    fn search_stops_at_goal() {
        let g = grid(10);
        let out = search(&g, c(0, 0), c(0, 1));
        assert!(out.expanded < 10);
    }

    #[test]
    fn compliance_with_partition() {
        let mut g = grid(6);
        for y in 0..5 {
            g.set_vertical_wall(2, y, true).unwrap();
        }
        compliance::run_full_compliance(&g);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn open_grid_length_is_manhattan(
            n in 2i64..12,
            ax in 0i32..12, ay in 0i32..12,
            bx in 0i32..12, by in 0i32..12,
        ) {
            let m = n as i32;
            let g = grid(n);
            let a = c(ax % m, ay % m);
            let b = c(bx % m, by % m);
            let r = shortest_path(&g, a, b).unwrap();
            prop_assert_eq!(r.length(), a.manhattan(b) as usize);
            prop_assert_eq!(r.first(), Some(a));
            prop_assert_eq!(r.last(), Some(b));
            prop_assert!(r.is_walkable(&g));
        }

        #[test]
        fn adding_a_wall_never_shortens(
            n in 2i64..8,
            ax in 0i32..8, ay in 0i32..8,
            bx in 0i32..8, by in 0i32..8,
            walls in prop::collection::vec((0i32..8, 0i32..8, any::<bool>()), 0..12),
            pick in any::<prop::sample::Index>(),
        ) {
            let m = n as i32;
            let mut g = grid(n);
            for (x, y, vertical) in walls {
                if vertical {
                    let _ = g.set_vertical_wall(x, y, true);
                } else {
                    let _ = g.set_horizontal_wall(x, y, true);
                }
            }
            let a = c(ax % m, ay % m);
            let b = c(bx % m, by % m);
            let before = shortest_path(&g, a, b);
            if let Some(route) = before.as_ref().filter(|r| r.length() > 0) {
                // Block one step of the current shortest route.
                let i = pick.index(route.length());
                let cells = route.cells();
                g.set_wall_between(cells[i], cells[i + 1], true).unwrap();
                match shortest_path(&g, a, b) {
                    Some(after) => {
                        prop_assert!(after.length() >= route.length());
                        prop_assert!(after.is_walkable(&g));
                    }
                    None => {}
                }
            }
        }

        #[test]
        fn routes_are_minimal_and_walkable(
            n in 2i64..7,
            walls in prop::collection::vec((0i32..7, 0i32..7, any::<bool>()), 0..15),
            ax in 0i32..7, ay in 0i32..7,
        ) {
            let m = n as i32;
            let mut g = grid(n);
            for (x, y, vertical) in walls {
                if vertical {
                    let _ = g.set_vertical_wall(x, y, true);
                } else {
                    let _ = g.set_horizontal_wall(x, y, true);
                }
            }
            let a = c(ax % m, ay % m);
            for b in g.cells() {
                if let Some(r) = shortest_path(&g, a, b) {
                    prop_assert!(r.is_walkable(&g));
                    prop_assert!(r.length() >= a.manhattan(b) as usize);
                    // A shortest route never revisits a cell.
                    let mut seen = r.cells().to_vec();
                    seen.sort();
                    seen.dedup();
                    prop_assert_eq!(seen.len(), r.len());
                }
            }
        }
    }
}
