//! One-call solve pipeline: cost matrix → construction → summary.

use tracing::{debug, instrument};

use crate::config::{EvolutionConfig, SolverConfig};
use crate::constructive::construct;
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::ga::evolve;
use crate::models::Location;
use crate::report::{summarize, SolutionReport};

/// Solves a routing instance from planar coordinates.
///
/// Builds the truncated Euclidean cost matrix, constructs routes with the
/// configured strategy, and summarizes them. An `Err` means no solution was
/// found; no partial routes are returned. A report whose routes are all
/// trivial means there were no customers to serve.
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::SolverConfig;
/// use cheapest_arc::models::Location;
/// use cheapest_arc::solve;
///
/// let locations = Location::from_coords(&[(0, 0), (0, 10), (10, 0)]);
/// let report = solve(&locations, &SolverConfig::new(1)).unwrap();
/// assert_eq!(report.vehicles[0].route, vec![0, 2, 1, 0]);
/// assert_eq!(report.total_distance, 34);
/// ```
#[instrument(skip_all, fields(locations = locations.len(), num_vehicles = config.num_vehicles))]
pub fn solve(
    locations: &[Location],
    config: &SolverConfig,
) -> Result<SolutionReport, RoutingError> {
    let matrix = DistanceMatrix::from_locations(locations)?;
    let solution = construct(&matrix, config)?;
    let report = summarize(&solution);
    debug!(
        total_distance = report.total_distance,
        used_vehicles = report.non_trivial().count(),
        "solved"
    );
    Ok(report)
}

/// Solves a single-vehicle instance with the seeded evolutionary search.
///
/// The report holds one vehicle whose tour visits every customer.
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::EvolutionConfig;
/// use cheapest_arc::models::Location;
/// use cheapest_arc::solve_with_evolution;
///
/// let locations = Location::from_coords(&[(0, 0), (0, 10), (10, 0)]);
/// let report = solve_with_evolution(&locations, &EvolutionConfig::default()).unwrap();
/// assert_eq!(report.vehicles.len(), 1);
/// assert_eq!(report.total_distance, 34);
/// ```
#[instrument(skip_all, fields(locations = locations.len(), seed = config.seed))]
pub fn solve_with_evolution(
    locations: &[Location],
    config: &EvolutionConfig,
) -> Result<SolutionReport, RoutingError> {
    let matrix = DistanceMatrix::from_locations(locations)?;
    let result = evolve(&matrix, config)?;
    let report = summarize(&result.into_solution());
    debug!(total_distance = report.total_distance, "solved");
    Ok(report)
}
