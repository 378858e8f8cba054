//! The top-level solve protocol.
//!
//! One pass, terminal on the first failure:
//!
//! 1. start, exit, and end checkpoint must be set;
//! 2. docking from the start offset to its cell center must stay on the grid;
//! 3. some checkpoint ordering must be fully reachable;
//! 4. docking from the last cell center to the exit offset must stay on the grid.
//!
//! Both docking maneuvers use the start heading.

use crate::config::{GridSpec, PlannerConfig};
use crate::metrics::SolveMetrics;
use crate::motion::{build_commands, feasible, from_center, to_center};
use crate::optimizer::{optimize, Waypoints};
use gridtour_core::{Command, Coord, Precondition, SolveError};
use gridtour_grid::Route;
use std::time::Instant;
use tracing::debug;

/// A successful plan.
#[derive(Clone, Debug, PartialEq)]
pub struct TourSolution {
    /// Commands to execute, in order.
    pub commands: Vec<Command>,
    /// Sum of command magnitudes, in grid units.
    pub total_distance: f64,
    /// The cell-center route the commands follow.
    pub route: Route,
    /// Plain checkpoints in visiting order.
    pub order: Vec<Coord>,
    /// Search counters and timing.
    pub metrics: SolveMetrics,
}

/// Runs solves against snapshots.
#[derive(Clone, Debug, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// A planner with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A planner with the given configuration.
    pub fn with_config(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a tour for `spec`.
    ///
    /// Deterministic: the same snapshot always yields the same result.
    pub fn solve(&self, spec: &GridSpec) -> Result<TourSolution, SolveError> {
        let started = Instant::now();

        let start = spec.robot_start().ok_or(Precondition::RobotStartUnset)?;
        let end = spec.robot_end().ok_or(Precondition::RobotEndUnset)?;
        let end_checkpoint = spec
            .end_checkpoint()
            .ok_or(Precondition::EndCheckpointUnset)?;
        let heading = start.heading;
        let size = spec.size();

        if !feasible(size, start.cell, heading, &to_center(start.position, heading)) {
            debug!(cell = %start.cell, position = %start.position, %heading, "start docking leaves grid");
            return Err(SolveError::OffGridStart);
        }

        let checkpoints: Vec<Coord> = spec.checkpoints().iter().copied().collect();
        debug!(
            size = size.get(),
            checkpoints = checkpoints.len(),
            walls = spec.walls().wall_count(),
            "optimizing checkpoint order"
        );
        let waypoints = Waypoints {
            start: start.cell,
            checkpoints: &checkpoints,
            end_checkpoint,
            exit: end.cell,
        };
        let outcome = optimize(spec.walls(), &waypoints, &self.config);
        let mut metrics = outcome.metrics;
        let Some(best) = outcome.best else {
            debug!(
                rejected = metrics.permutations_rejected,
                "no ordering reaches every waypoint"
            );
            return Err(SolveError::Unreachable {
                permutations_rejected: metrics.permutations_rejected,
            });
        };

        let last = best.route.last().unwrap_or(end.cell);
        if !feasible(size, last, heading, &from_center(end.position, heading)) {
            debug!(cell = %last, position = %end.position, %heading, "end docking leaves grid");
            return Err(SolveError::OffGridEnd);
        }

        let commands = build_commands(&best.route, start.position, end.position, heading);
        let total_distance: f64 = commands.iter().map(Command::distance).sum();
        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        debug!(
            length = best.route.length(),
            commands = commands.len(),
            total_distance,
            elapsed_us = metrics.elapsed_us,
            "solved"
        );

        Ok(TourSolution {
            commands,
            total_distance,
            route: best.route,
            order: best.order,
            metrics,
        })
    }
}

/// Solve with the default [`PlannerConfig`].
pub fn solve(spec: &GridSpec) -> Result<TourSolution, SolveError> {
    Planner::new().solve(spec)
}
