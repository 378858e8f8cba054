//! Error types for route construction.

use gridtour_core::Coord;
use std::fmt;

/// Errors arising when a [`Route`](crate::Route) is assembled from parts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteError {
    /// Two consecutive cells are not one step apart along a single axis.
    NotAdjacent {
        /// Position of `from` within the supplied cells.
        index: usize,
        /// The earlier cell.
        from: Coord,
        /// The later cell.
        to: Coord,
    },
    /// A leg does not start where the previous leg ended.
    Discontinuous {
        /// Index of the offending leg.
        leg: usize,
        /// Last cell of the previous leg.
        expected: Coord,
        /// First cell of this leg.
        found: Coord,
    },
    /// A leg contains no cells.
    EmptyLeg {
        /// Index of the empty leg.
        leg: usize,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAdjacent { index, from, to } => {
                write!(f, "cells {from} and {to} at index {index} are not adjacent")
            }
            Self::Discontinuous {
                leg,
                expected,
                found,
            } => write!(f, "leg {leg} starts at {found}, expected {expected}"),
            Self::EmptyLeg { leg } => write!(f, "leg {leg} is empty"),
        }
    }
}

impl std::error::Error for RouteError {}
