//! Tour planning for gridtour.
//!
//! Given a validated [`GridSpec`], [`solve()`] picks the shortest order in
//! which to visit the checkpoints, composes the cell-center route, and
//! translates it, together with the robot's docking offsets, into
//! heading-relative [`Command`](gridtour_core::Command)s.
//!
//! - [`config`]: the snapshot and [`PlannerConfig`].
//! - [`optimizer`]: exhaustive checkpoint order search.
//! - [`motion`]: docking tables, feasibility, command building.
//! - [`solve`](mod@solve): the solve protocol and [`TourSolution`].
//! - [`metrics`]: [`SolveMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod motion;
pub mod optimizer;
pub mod solve;

pub use config::{GridSpec, PlannerConfig, RobotEnd, RobotStart, SnapshotDoc, WallsDoc};
pub use metrics::SolveMetrics;
pub use optimizer::{optimize, BestTour, Optimization, Waypoints};
pub use solve::{solve, Planner, TourSolution};
