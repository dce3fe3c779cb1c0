//! Travel cost matrices.
//!
//! Provides a dense integer cost matrix for routing problems.

mod matrix;

pub use matrix::{Cost, DistanceMatrix};
