//! Grid connectivity and path search for gridtour.
//!
//! This crate owns everything that reasons about the wall layout:
//!
//! - [`WallGrid`]: the connectivity oracle. Answers "is movement between
//!   these two cells blocked?" and enumerates walkable neighbours in a fixed
//!   order (up, down, left, right).
//! - [`shortest_path`]: breadth-first search between two cells.
//! - [`Route`]: a validated walkable path through cell centers, with
//!   [`Route::concat`] for stitching legs together and [`Route::length`]
//!   for measuring them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod route;
pub mod search;
pub mod walls;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::RouteError;
pub use route::Route;
pub use search::{search, shortest_path, SearchOutcome};
pub use walls::WallGrid;
