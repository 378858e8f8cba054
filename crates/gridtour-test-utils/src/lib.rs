//! Snapshot fixtures for gridtour development.
//!
//! Builders for the grids the integration tests and benchmarks share. All
//! fixtures panic on invalid input: they are only ever called with
//! literal, known-good coordinates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    corridor_spec, enclose, open_spec, scattered_checkpoints, scenario_4x4, SpecBuilder,
};
