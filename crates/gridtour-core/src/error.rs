//! Error types for the gridtour planner.
//!
//! Organized by when they surface: [`ConfigError`] while a snapshot or setup
//! value is being built, [`SolveError`] when a solve request is rejected.
//! Every solve error is terminal for that request: the search is exhaustive
//! and deterministic, so re-running with the same snapshot yields the same
//! outcome.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors detected while validating setup input or a grid snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid side length below the minimum of 2.
    GridTooSmall {
        /// The rejected side length.
        size: i64,
    },
    /// Grid side length does not fit coordinate arithmetic.
    GridTooLarge {
        /// The rejected side length.
        size: i64,
        /// The largest accepted side length.
        max: u32,
    },
    /// Grid size token is not an integer.
    InvalidGridSize {
        /// The unparseable token.
        token: String,
    },
    /// Heading token is not one of `up`, `right`, `down`, `left`.
    UnknownHeading {
        /// The unrecognized token.
        token: String,
    },
    /// Sub-cell position token is not recognized.
    UnknownPosition {
        /// The unrecognized token.
        token: String,
    },
    /// Command direction token is not recognized.
    UnknownDirection {
        /// The unrecognized token.
        token: String,
    },
    /// Command magnitude is neither 0.5 nor 1.
    InvalidMagnitude {
        /// The rejected value.
        value: f64,
    },
    /// Command text is not of the form `direction(magnitude)`.
    MalformedCommand {
        /// The rejected text.
        token: String,
    },
    /// A wall matrix has the wrong shape for the grid size.
    WallDimensions {
        /// `"vertical"` or `"horizontal"`.
        axis: &'static str,
        /// Expected `(outer, inner)` lengths.
        expected: (usize, usize),
        /// Observed `(outer, inner)` lengths; `inner` is the first mismatching row.
        found: (usize, usize),
    },
    /// A wall index lies outside its matrix.
    WallOutOfBounds {
        /// `"vertical"` or `"horizontal"`.
        axis: &'static str,
        /// Column index.
        x: i32,
        /// Row index.
        y: i32,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// What the coordinate was for (e.g. `"checkpoint"`).
        what: &'static str,
        /// The offending coordinate.
        coord: Coord,
        /// Grid side length.
        size: u32,
    },
    /// The same checkpoint appears more than once.
    DuplicateCheckpoint {
        /// The repeated coordinate.
        coord: Coord,
    },
    /// The end-checkpoint is also listed as a plain checkpoint.
    EndCheckpointIsCheckpoint {
        /// The conflicting coordinate.
        coord: Coord,
    },
    /// A snapshot document could not be read or parsed.
    Snapshot {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size } => {
                write!(f, "grid size {size} is below minimum of 2")
            }
            Self::GridTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum of {max}")
            }
            Self::InvalidGridSize { token } => {
                write!(f, "grid size '{token}' is not an integer")
            }
            Self::UnknownHeading { token } => {
                write!(f, "unknown heading '{token}' (expected up, right, down or left)")
            }
            Self::UnknownPosition { token } => {
                write!(f, "unknown sub-cell position '{token}'")
            }
            Self::UnknownDirection { token } => {
                write!(f, "unknown command direction '{token}'")
            }
            Self::InvalidMagnitude { value } => {
                write!(f, "command magnitude must be 0.5 or 1, got {value}")
            }
            Self::MalformedCommand { token } => {
                write!(f, "malformed command '{token}'")
            }
            Self::WallDimensions {
                axis,
                expected,
                found,
            } => write!(
                f,
                "{axis} wall matrix must be {}x{}, got {}x{}",
                expected.0, expected.1, found.0, found.1
            ),
            Self::WallOutOfBounds { axis, x, y } => {
                write!(f, "{axis} wall ({x}, {y}) out of bounds")
            }
            Self::CoordOutOfBounds { what, coord, size } => {
                write!(f, "{what} {coord} out of bounds for {size}x{size} grid")
            }
            Self::DuplicateCheckpoint { coord } => {
                write!(f, "checkpoint {coord} listed more than once")
            }
            Self::EndCheckpointIsCheckpoint { coord } => {
                write!(f, "end checkpoint {coord} is also a plain checkpoint")
            }
            Self::Snapshot { reason } => write!(f, "snapshot: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// A solve precondition that was not met.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Precondition {
    /// The robot start has not been placed.
    RobotStartUnset,
    /// The robot exit has not been placed.
    RobotEndUnset,
    /// No end-checkpoint has been designated.
    EndCheckpointUnset,
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RobotStartUnset => write!(f, "robot start not set"),
            Self::RobotEndUnset => write!(f, "robot end not set"),
            Self::EndCheckpointUnset => write!(f, "end checkpoint not set"),
        }
    }
}

/// Reasons a solve request fails.
///
/// Each variant names the specific aspect of the configuration the user
/// needs to change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// Start, exit, or end-checkpoint missing.
    Precondition(Precondition),
    /// Docking from the start position to the cell center would leave the grid.
    OffGridStart,
    /// No checkpoint ordering yields a fully connected route.
    Unreachable {
        /// How many orderings were tried and rejected.
        permutations_rejected: u64,
    },
    /// Docking from the final cell center to the exit position would leave the grid.
    OffGridEnd,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Precondition(p) => write!(f, "not all conditions met: {p}"),
            Self::OffGridStart => write!(
                f,
                "cannot move from start corner/edge to center without going off-grid"
            ),
            Self::Unreachable {
                permutations_rejected,
            } => write!(
                f,
                "no path found ({permutations_rejected} checkpoint orderings rejected)"
            ),
            Self::OffGridEnd => write!(
                f,
                "cannot move from center to final corner/edge without going off-grid"
            ),
        }
    }
}

impl Error for SolveError {}

impl From<Precondition> for SolveError {
    fn from(p: Precondition) -> Self {
        Self::Precondition(p)
    }
}
