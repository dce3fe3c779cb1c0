//! Cheapest-arc insertion.
//!
//! # Algorithm
//!
//! Every vehicle starts on the trivial route `[depot, depot]`. At each step,
//! evaluate every (vehicle, position, customer) triple and insert the one
//! with the smallest marginal cost:
//!
//! ```text
//! delta = d(prev, c) + d(c, next) - d(prev, next)
//! ```
//!
//! Ties go to the lowest vehicle, then the lowest position, then the lowest
//! customer id. No backtracking and no improvement pass, so identical input
//! always yields identical routes.
//!
//! # Complexity
//!
//! O(n³) for n customers: n steps, each scanning O(n) arcs against O(n)
//! customers. Trivial routes beyond the first are never scanned.

use tracing::{info, instrument};

use super::state::{ConstructionState, Insertion};
use crate::distance::DistanceMatrix;
use crate::error::RoutingError;
use crate::models::{LocationId, Solution};

/// Builds routes for `num_vehicles` vehicles by repeated cheapest insertion.
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
/// use cheapest_arc::constructive::cheapest_arc_insertion;
///
/// let locations = Location::from_coords(&[(0, 0), (0, 10), (10, 0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let solution = cheapest_arc_insertion(&dm, 1, 0).unwrap();
/// assert_eq!(solution.routes()[0].stops(), &[0, 2, 1, 0]);
/// assert_eq!(solution.total_distance(), 34);
/// ```
#[instrument(
    skip_all,
    level = "debug",
    fields(size = matrix.size(), num_vehicles = num_vehicles, depot = depot)
)]
pub fn cheapest_arc_insertion(
    matrix: &DistanceMatrix,
    num_vehicles: usize,
    depot: LocationId,
) -> Result<Solution, RoutingError> {
    let mut state = ConstructionState::new(matrix, num_vehicles, depot)?;

    while let Some(insertion) = cheapest_insertion(&state) {
        state.apply(insertion);
    }

    let solution = state.into_solution();
    info!(
        total_distance = solution.total_distance(),
        used_vehicles = solution.num_used_vehicles(),
        "cheapest-arc construction finished"
    );
    Ok(solution)
}

/// Scans candidates in (vehicle, position, customer) order; only a strictly
/// smaller delta replaces the incumbent, which realizes the tie-break.
fn cheapest_insertion(state: &ConstructionState<'_>) -> Option<Insertion> {
    let matrix = state.matrix();
    let mut best: Option<Insertion> = None;

    for vehicle in state.candidate_vehicles() {
        for (position, from, to) in state.index().arcs(vehicle) {
            let replaced = matrix.get(from, to);
            for &customer in state.unassigned() {
                let delta = matrix.get(from, customer) + matrix.get(customer, to) - replaced;
                if best.as_ref().is_none_or(|b| delta < b.delta) {
                    best = Some(Insertion {
                        vehicle,
                        position,
                        customer,
                        delta,
                    });
                }
            }
        }
    }

    best
}
