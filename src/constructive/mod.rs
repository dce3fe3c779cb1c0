//! Constructive heuristics for building the vehicle routes.
//!
//! - [`cheapest_arc_insertion`] — Global cheapest insertion with deterministic tie-break, O(n³)
//! - [`nearest_neighbor`] — Greedy path extension to the nearest customer, O(n²) per vehicle
//!
//! [`construct`] picks one of them from a [`SolverConfig`].

mod cheapest_arc;
mod nearest_neighbor;
mod state;

pub use cheapest_arc::cheapest_arc_insertion;
pub use nearest_neighbor::nearest_neighbor;

use tracing::instrument;

use crate::config::{FirstSolutionStrategy, SolverConfig};
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::Solution;

/// Builds a solution with the configured first-solution strategy.
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::SolverConfig;
/// use cheapest_arc::constructive::construct;
/// use cheapest_arc::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0, 7, 7, 0]).unwrap();
/// let solution = construct(&dm, &SolverConfig::new(1)).unwrap();
/// assert_eq!(solution.total_distance(), 14);
/// ```
#[instrument(
    skip_all,
    fields(
        strategy = ?config.first_solution_strategy,
        num_vehicles = config.num_vehicles,
        depot = config.depot
    )
)]
pub fn construct(
    matrix: &DistanceMatrix,
    config: &SolverConfig,
) -> Result<Solution, RoutingError> {
    match config.first_solution_strategy {
        FirstSolutionStrategy::CheapestArc => {
            cheapest_arc_insertion(matrix, config.num_vehicles, config.depot)
        }
        FirstSolutionStrategy::NearestNeighbor => {
            nearest_neighbor(matrix, config.num_vehicles, config.depot)
        }
    }
}
