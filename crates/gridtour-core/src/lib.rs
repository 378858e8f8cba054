//! Core types for the gridtour route planner.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other gridtour crate: grid coordinates and
//! sizes, the robot's fixed heading and sub-cell docking positions, motion
//! commands, and the error enums surfaced to callers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod coord;
pub mod error;
pub mod robot;

pub use command::{Command, Direction, Magnitude};
pub use coord::{Cardinal, Coord, GridSize};
pub use error::{ConfigError, Precondition, SolveError};
pub use robot::{Heading, SubCellPosition};
