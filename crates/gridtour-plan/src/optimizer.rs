//! Exhaustive checkpoint order optimization.
//!
//! Every ordering of the plain checkpoints is tried. Each ordering gives a
//! leg chain `start -> c[0] -> ... -> c[k-1] -> end checkpoint -> exit`;
//! an ordering with any unreachable leg is rejected, and among the rest the
//! shortest composed route wins. Orderings are enumerated in lexicographic
//! successor order over checkpoint indices and compared with strict `<`,
//! so the earliest ordering reaching the minimum is kept.
//!
//! The cost is `O(k! * size^2)` for `k` checkpoints. Bounding `k` is the
//! caller's job; single digits are practical.

use crate::config::PlannerConfig;
use crate::metrics::SolveMetrics;
use gridtour_core::Coord;
use gridtour_grid::{search, Route, WallGrid};
use std::collections::HashMap;
use tracing::trace;

/// The fixed points of a tour.
#[derive(Clone, Copy, Debug)]
pub struct Waypoints<'a> {
    /// Cell the robot starts in.
    pub start: Coord,
    /// Plain checkpoints, visited in any order. Must not contain the end
    /// checkpoint.
    pub checkpoints: &'a [Coord],
    /// Checkpoint visited last.
    pub end_checkpoint: Coord,
    /// Cell the robot finishes in.
    pub exit: Coord,
}

/// The winning ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BestTour {
    /// Composed route through every waypoint.
    pub route: Route,
    /// Plain checkpoints in visiting order.
    pub order: Vec<Coord>,
}

impl BestTour {
    /// Route length in grid units.
    pub fn length(&self) -> usize {
        self.route.length()
    }
}

/// Result of [`optimize`]: the best tour, if any ordering was feasible,
/// plus counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimization {
    /// The shortest feasible tour, or `None` if every ordering was rejected.
    pub best: Option<BestTour>,
    /// Search counters. `elapsed_us` is left at zero.
    pub metrics: SolveMetrics,
}

/// Rearrange `items` into the next lexicographically greater permutation.
///
/// Returns `false`, leaving `items` sorted ascending, once the last
/// permutation has been passed.
///
/// ```
/// use gridtour_plan::optimizer::next_permutation;
///
/// let mut v = [1, 2, 3];
/// assert!(next_permutation(&mut v));
/// assert_eq!(v, [1, 3, 2]);
/// ```
pub fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        items.reverse();
        return false;
    };
    let Some(swap) = items.iter().rposition(|x| *x > items[pivot]) else {
        return false;
    };
    items.swap(pivot, swap);
    items[pivot + 1..].reverse();
    true
}

/// Leg searches for one optimization, memoized per `(from, to)` when
/// enabled.
struct Legs<'g> {
    grid: &'g WallGrid,
    cache: Option<HashMap<(Coord, Coord), Option<Route>>>,
    metrics: SolveMetrics,
}

impl<'g> Legs<'g> {
    fn new(grid: &'g WallGrid, config: &PlannerConfig) -> Self {
        Self {
            grid,
            cache: config.cache_legs.then(HashMap::new),
            metrics: SolveMetrics::default(),
        }
    }

    fn leg(&mut self, from: Coord, to: Coord) -> Option<Route> {
        if let Some(hit) = self.cache.as_ref().and_then(|c| c.get(&(from, to))) {
            self.metrics.leg_cache_hits += 1;
            return hit.clone();
        }
        let outcome = search(self.grid, from, to);
        self.metrics.leg_searches += 1;
        self.metrics.cells_expanded += outcome.expanded as u64;
        trace!(
            %from,
            %to,
            expanded = outcome.expanded,
            reachable = outcome.route.is_some(),
            "leg search"
        );
        if let Some(cache) = self.cache.as_mut() {
            cache.insert((from, to), outcome.route.clone());
        }
        outcome.route
    }

    /// Compose the route for one waypoint chain, or `None` if a leg is
    /// unreachable.
    fn chain(&mut self, waypoints: &[Coord]) -> Option<Route> {
        let legs = waypoints
            .windows(2)
            .map(|w| self.leg(w[0], w[1]))
            .collect::<Option<Vec<_>>>()?;
        match Route::concat(&legs) {
            Ok(route) => Some(route),
            Err(err) => {
                tracing::warn!(%err, "leg chain does not compose");
                None
            }
        }
    }
}

/// Find the shortest feasible visiting order.
///
/// A pure function of its inputs: the grid is only read and all
/// bookkeeping, including the leg cache, lives for this call.
pub fn optimize(grid: &WallGrid, waypoints: &Waypoints<'_>, config: &PlannerConfig) -> Optimization {
    let mut legs = Legs::new(grid, config);
    let cps = waypoints.checkpoints;
    let mut indices: Vec<usize> = (0..cps.len()).collect();
    let mut chain = Vec::with_capacity(cps.len() + 3);
    let mut best: Option<BestTour> = None;

    loop {
        chain.clear();
        chain.push(waypoints.start);
        chain.extend(indices.iter().map(|&i| cps[i]));
        chain.push(waypoints.end_checkpoint);
        chain.push(waypoints.exit);

        legs.metrics.permutations_evaluated += 1;
        match legs.chain(&chain) {
            Some(route) => {
                trace!(order = ?indices, length = route.length(), "ordering accepted");
                if best
                    .as_ref()
                    .is_none_or(|b| route.length() < b.route.length())
                {
                    best = Some(BestTour {
                        route,
                        order: indices.iter().map(|&i| cps[i]).collect(),
                    });
                }
            }
            None => {
                legs.metrics.permutations_rejected += 1;
                trace!(order = ?indices, "ordering rejected");
            }
        }

        if !next_permutation(&mut indices) {
            break;
        }
    }

    Optimization {
        best,
        metrics: legs.metrics,
    }
}
