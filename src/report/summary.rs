//! Per-vehicle route summary.

use std::fmt;

use serde::Serialize;

use crate::distance::Cost;
use crate::models::{LocationId, RouteIndex, Solution};

/// One vehicle's visit sequence and travelled distance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VehicleSummary {
    pub vehicle_id: usize,
    /// Full sequence, depot at both ends.
    pub route: Vec<LocationId>,
    pub distance: Cost,
}

impl VehicleSummary {
    /// Returns `true` if the vehicle visits no customer.
    pub fn is_trivial(&self) -> bool {
        self.route.len() <= 2
    }
}

/// Summary of a solved instance.
///
/// Every vehicle is listed, and `total_distance` includes every vehicle's
/// contribution (trivial routes add 0). The [`Display`](fmt::Display)
/// rendering shows only vehicles that visit customers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionReport {
    pub vehicles: Vec<VehicleSummary>,
    pub total_distance: Cost,
}

impl SolutionReport {
    /// Vehicles with more than the trivial two-stop route.
    pub fn non_trivial(&self) -> impl Iterator<Item = &VehicleSummary> {
        self.vehicles.iter().filter(|v| !v.is_trivial())
    }

    /// Returns `true` if at least one customer was routed.
    pub fn has_routes(&self) -> bool {
        self.non_trivial().next().is_some()
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.has_routes() {
            writeln!(f, "No customers to route.")?;
        }
        for v in self.non_trivial() {
            writeln!(
                f,
                "Vehicle {}: route {:?}, distance {}",
                v.vehicle_id, v.route, v.distance
            )?;
        }
        write!(f, "Total distance: {}", self.total_distance)
    }
}

/// Extracts each vehicle's ordered stops and distance, and the grand total.
///
/// Walks every route from its start sentinel until the end sentinel.
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::{Route, Solution};
/// use cheapest_arc::report::summarize;
///
/// let routes = vec![Route::new(0, vec![0, 1, 0]), Route::new(1, vec![0, 0])];
/// let sol = Solution::new(0, routes, vec![20, 0]);
/// let report = summarize(&sol);
/// assert_eq!(report.total_distance, 20);
/// assert_eq!(report.vehicles.len(), 2);
/// assert_eq!(report.non_trivial().count(), 1);
/// ```
pub fn summarize(solution: &Solution) -> SolutionReport {
    let index = RouteIndex::from_routes(solution.depot(), solution.routes());
    let mut vehicles = Vec::with_capacity(index.num_vehicles());
    let mut total_distance = 0;

    for (vehicle, &distance) in solution.route_distances().iter().enumerate() {
        let mut route = vec![index.start(vehicle)];
        let mut position = 0;
        while !index.is_end(vehicle, position) {
            if let Some(next) = index.next(vehicle, position) {
                route.push(next);
            }
            position += 1;
        }

        total_distance += distance;
        vehicles.push(VehicleSummary {
            vehicle_id: solution.routes()[vehicle].vehicle_id(),
            route,
            distance,
        });
    }

    SolutionReport {
        vehicles,
        total_distance,
    }
}
