//! gridtour: plan a motion-command tour for a grid-confined robot.
//!
//! The robot starts docked somewhere inside a cell, must visit every
//! checkpoint, finish at a designated end checkpoint, and dock at an exit.
//! Walls between cells block movement. The planner tries every checkpoint
//! order, keeps the shortest one that is fully reachable, and translates
//! the route into heading-relative commands of half or whole cells.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all gridtour sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use gridtour::prelude::*;
//!
//! let mut spec = GridSpec::new(GridSize::new(4).unwrap());
//! spec.place_robot_start(Coord::new(0, 0), SubCellPosition::Center, Heading::Up)
//!     .unwrap();
//! spec.place_robot_end(Coord::new(3, 3), SubCellPosition::Center).unwrap();
//! spec.set_end_checkpoint(Coord::new(3, 3)).unwrap();
//!
//! let tour = solve(&spec).unwrap();
//! assert_eq!(tour.route.length(), 6);
//! assert_eq!(tour.total_distance, 6.0);
//! for cmd in &tour.commands {
//!     println!("{cmd}");
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridtour-core` | Coordinates, heading, sub-cell positions, commands, errors |
//! | [`grid`] | `gridtour-grid` | Wall layout, shortest-path search, routes |
//! | [`plan`] | `gridtour-plan` | Snapshot, optimizer, docking tables, solve |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary and error types (`gridtour-core`).
pub use gridtour_core as types;

/// Connectivity oracle, breadth-first search, and route composition
/// (`gridtour-grid`).
///
/// [`grid::WallGrid`] answers blocking queries; [`grid::shortest_path`]
/// searches it; [`grid::Route::concat`] stitches legs.
pub use gridtour_grid as grid;

/// Snapshot model and the planner (`gridtour-plan`).
pub use gridtour_plan as plan;

/// Common imports for typical gridtour usage.
///
/// ```rust
/// use gridtour::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridtour_core::{
        Cardinal, Command, Coord, Direction, GridSize, Heading, Magnitude, SubCellPosition,
    };

    // Errors
    pub use gridtour_core::{ConfigError, Precondition, SolveError};

    // Grid
    pub use gridtour_grid::{shortest_path, Route, WallGrid};

    // Planner
    pub use gridtour_plan::{
        solve, GridSpec, Planner, PlannerConfig, SolveMetrics, TourSolution,
    };
}
