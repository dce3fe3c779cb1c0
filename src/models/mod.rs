//! Domain model types for multi-vehicle routing.
//!
//! Locations with planar coordinates, per-vehicle routes anchored at a shared
//! depot, the traversal index used while routes are being built, and the
//! frozen solution.

mod location;
mod route;
mod route_index;
mod solution;

pub use location::{Location, LocationId};
pub use route::Route;
pub use route_index::RouteIndex;
pub use solution::Solution;
