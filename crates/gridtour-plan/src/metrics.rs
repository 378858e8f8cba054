//! Diagnostics collected during one solve.

use serde::Serialize;

/// Counters and timing for a single solve.
///
/// The optimizer fills the counters; the planner adds the elapsed time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SolveMetrics {
    /// Checkpoint orderings examined.
    pub permutations_evaluated: u64,
    /// Orderings discarded because some leg was unreachable.
    pub permutations_rejected: u64,
    /// Breadth-first searches actually run.
    pub leg_searches: u64,
    /// Legs answered from the per-solve cache instead of searching.
    pub leg_cache_hits: u64,
    /// Cells expanded across all searches.
    pub cells_expanded: u64,
    /// Wall-clock time for the whole solve, in microseconds.
    pub elapsed_us: u64,
}
