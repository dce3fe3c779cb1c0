//! # cheapest-arc
//!
//! Multi-vehicle routing from a single depot: every customer is visited
//! exactly once, every route starts and ends at the depot, and total travel
//! cost is reduced with a deterministic greedy construction.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Route, RouteIndex, Solution)
//! - [`distance`] — Truncated integer cost matrix
//! - [`constructive`] — Constructive heuristics (cheapest-arc insertion, nearest neighbor)
//! - [`ga`] — Seeded swap-mutation search for a single depot-anchored tour
//! - [`report`] — Per-vehicle route summaries
//! - [`config`] — Solver configuration
//! - [`error`] — Input and feasibility errors
//!
//! [`solve`] runs the whole pipeline in one blocking call;
//! [`solve_with_evolution`] does the same with the evolutionary search.

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod ga;
pub mod models;
pub mod report;
mod solver;

pub use solver::{solve, solve_with_evolution};
