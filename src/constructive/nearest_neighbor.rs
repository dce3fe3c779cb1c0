//! Nearest-neighbor path extension.
//!
//! Builds routes greedily: among all vehicles, find the one whose last
//! customer (or the depot, for an unused vehicle) has the cheapest arc to an
//! unassigned customer, and append that customer before the return to the
//! depot. Ties go to the lowest vehicle id, then the lowest customer id.
//!
//! # Complexity
//!
//! O(n²) per used vehicle where n = number of customers.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for VRP. It only looks at the
//! outgoing arc, so it is usually worse than cheapest-arc insertion, but it
//! provides a fast baseline.

use tracing::{info, instrument};

use super::state::{ConstructionState, Insertion};
use crate::distance::{Cost, DistanceMatrix};
use crate::error::RoutingError;
use crate::models::{LocationId, Solution};

/// Builds routes for `num_vehicles` vehicles by extending paths to the nearest customer.
///
/// # Errors
///
/// * [`RoutingError::InvalidInput`] if `depot` is not a matrix location
/// * [`RoutingError::Infeasible`] if customers exist but `num_vehicles` is 0
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::Location;
/// use cheapest_arc::distance::DistanceMatrix;
/// use cheapest_arc::constructive::nearest_neighbor;
///
/// let locations = Location::from_coords(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let solution = nearest_neighbor(&dm, 1, 0).unwrap();
/// assert_eq!(solution.routes()[0].customers(), &[1, 2, 3]);
/// assert_eq!(solution.total_distance(), 6);
/// ```
#[instrument(
    skip_all,
    level = "debug",
    fields(size = matrix.size(), num_vehicles = num_vehicles, depot = depot)
)]
pub fn nearest_neighbor(
    matrix: &DistanceMatrix,
    num_vehicles: usize,
    depot: LocationId,
) -> Result<Solution, RoutingError> {
    let mut state = ConstructionState::new(matrix, num_vehicles, depot)?;

    while let Some(insertion) = nearest_extension(&state) {
        state.apply(insertion);
    }

    let solution = state.into_solution();
    info!(
        total_distance = solution.total_distance(),
        used_vehicles = solution.num_used_vehicles(),
        "nearest-neighbor construction finished"
    );
    Ok(solution)
}

fn nearest_extension(state: &ConstructionState<'_>) -> Option<Insertion> {
    let matrix = state.matrix();
    let mut best: Option<(Cost, usize, usize, LocationId)> = None;

    for vehicle in state.candidate_vehicles() {
        let route = state.index().route(vehicle);
        let position = route.len() - 1;
        let tail = route[position - 1];
        for &customer in state.unassigned() {
            let arc = matrix.get(tail, customer);
            if best.as_ref().is_none_or(|b| arc < b.0) {
                best = Some((arc, vehicle, position, customer));
            }
        }
    }

    best.map(|(_, vehicle, position, customer)| Insertion {
        vehicle,
        position,
        customer,
        delta: state.marginal_cost(vehicle, position, customer),
    })
}
