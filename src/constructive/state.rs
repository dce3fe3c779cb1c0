//! Mutable construction state shared by the first-solution strategies.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::distance::{Cost, DistanceMatrix};
use crate::error::{InvalidInput, RoutingError};
use crate::models::{LocationId, RouteIndex, Solution};

/// A customer placed at `position` of `vehicle`'s route, and the distance it adds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Insertion {
    pub vehicle: usize,
    pub position: usize,
    pub customer: LocationId,
    pub delta: Cost,
}

/// Routes under construction, their running distances, and the customers
/// still waiting for a vehicle.
pub(super) struct ConstructionState<'a> {
    matrix: &'a DistanceMatrix,
    index: RouteIndex,
    distances: Vec<Cost>,
    unassigned: BTreeSet<LocationId>,
}

impl<'a> ConstructionState<'a> {
    /// Starts every vehicle on `[depot, depot]` with all other locations unassigned.
    pub fn new(
        matrix: &'a DistanceMatrix,
        num_vehicles: usize,
        depot: LocationId,
    ) -> Result<Self, RoutingError> {
        let size = matrix.size();
        if depot >= size {
            return Err(InvalidInput::DepotOutOfRange { depot, len: size }.into());
        }
        let unassigned: BTreeSet<LocationId> = (0..size).filter(|&id| id != depot).collect();
        if num_vehicles == 0 && !unassigned.is_empty() {
            warn!(customers = unassigned.len(), "no vehicles to serve customers");
            return Err(RoutingError::Infeasible {
                customers: unassigned.len(),
            });
        }

        Ok(Self {
            matrix,
            index: RouteIndex::new(num_vehicles, depot),
            distances: vec![0; num_vehicles],
            unassigned,
        })
    }

    pub fn matrix(&self) -> &'a DistanceMatrix {
        self.matrix
    }

    pub fn index(&self) -> &RouteIndex {
        &self.index
    }

    /// Unassigned customers in ascending id order.
    pub fn unassigned(&self) -> &BTreeSet<LocationId> {
        &self.unassigned
    }

    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }

    /// Vehicles in ascending id order, skipping every trivial route after the
    /// first one. Trivial routes offer identical candidates, and the lowest
    /// vehicle id wins ties.
    pub fn candidate_vehicles(&self) -> impl Iterator<Item = usize> + '_ {
        let mut seen_trivial = false;
        (0..self.index.num_vehicles()).filter(move |&v| {
            if !self.index.is_trivial(v) {
                return true;
            }
            !std::mem::replace(&mut seen_trivial, true)
        })
    }

    /// Added distance from placing `customer` at `position` of `vehicle`'s route.
    pub fn marginal_cost(&self, vehicle: usize, position: usize, customer: LocationId) -> Cost {
        let from = self.index.location(vehicle, position - 1);
        let to = self.index.location(vehicle, position);
        self.matrix.get(from, customer) + self.matrix.get(customer, to) - self.matrix.get(from, to)
    }

    pub fn apply(&mut self, insertion: Insertion) {
        let removed = self.unassigned.remove(&insertion.customer);
        debug_assert!(removed, "customer {} inserted twice", insertion.customer);

        self.index
            .insert(insertion.vehicle, insertion.position, insertion.customer);
        self.distances[insertion.vehicle] += insertion.delta;
        debug!(
            vehicle = insertion.vehicle,
            position = insertion.position,
            customer = insertion.customer,
            delta = insertion.delta,
            remaining = self.unassigned.len(),
            "inserted customer"
        );
    }

    /// Freezes the routes. Only valid once every customer is assigned.
    pub fn into_solution(self) -> Solution {
        debug_assert!(self.is_complete());
        let depot = self.index.depot();
        Solution::new(depot, self.index.into_routes(), self.distances)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_locations(&Location::from_coords(&[(0, 0), (0, 10), (10, 0)]))
            .expect("valid")
    }

    #[test]
    fn test_new_state() {
        let dm = triangle();
        let state = ConstructionState::new(&dm, 2, 1).expect("feasible");
        assert_eq!(state.unassigned().iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(state.index().route(0), &[1, 1]);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_depot_out_of_range() {
        let dm = triangle();
        assert_eq!(
            ConstructionState::new(&dm, 1, 3).err(),
            Some(InvalidInput::DepotOutOfRange { depot: 3, len: 3 }.into())
        );
    }

    #[test]
    fn test_zero_vehicles_infeasible() {
        let dm = triangle();
        assert_eq!(
            ConstructionState::new(&dm, 0, 0).err(),
            Some(RoutingError::Infeasible { customers: 2 })
        );
    }

    #[test]
    fn test_candidate_vehicles_skip_extra_trivial() {
        let dm = triangle();
        let mut state = ConstructionState::new(&dm, 4, 0).expect("feasible");
        assert_eq!(state.candidate_vehicles().collect::<Vec<_>>(), vec![0]);

        let delta = state.marginal_cost(2, 1, 1);
        state.apply(Insertion {
            vehicle: 2,
            position: 1,
            customer: 1,
            delta,
        });
        assert_eq!(state.candidate_vehicles().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_apply_tracks_distance() {
        let dm = triangle();
        let mut state = ConstructionState::new(&dm, 1, 0).expect("feasible");
        for (position, customer) in [(1, 1), (2, 2)] {
            let delta = state.marginal_cost(0, position, customer);
            state.apply(Insertion {
                vehicle: 0,
                position,
                customer,
                delta,
            });
        }
        assert!(state.is_complete());
        let sol = state.into_solution();
        assert_eq!(sol.routes()[0].stops(), &[0, 1, 2, 0]);
        assert_eq!(sol.total_distance(), 34);
    }
}
