//! Frozen vehicle route.

use serde::Serialize;

use super::LocationId;

/// The ordered stops of one vehicle, beginning and ending at the depot.
///
/// A vehicle with no customers has the trivial route `[depot, depot]`.
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::Route;
///
/// let route = Route::new(2, vec![0, 4, 1, 0]);
/// assert_eq!(route.vehicle_id(), 2);
/// assert_eq!(route.customers(), &[4, 1]);
/// assert!(!route.is_trivial());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    vehicle_id: usize,
    stops: Vec<LocationId>,
}

impl Route {
    /// Creates a route from its full stop sequence (depot at both ends).
    pub fn new(vehicle_id: usize, stops: Vec<LocationId>) -> Self {
        debug_assert!(stops.len() >= 2, "a route holds at least start and end");
        debug_assert_eq!(stops.first(), stops.last());
        Self { vehicle_id, stops }
    }

    /// Returns the vehicle assigned to this route.
    pub fn vehicle_id(&self) -> usize {
        self.vehicle_id
    }

    /// Full stop sequence including both depot sentinels.
    pub fn stops(&self) -> &[LocationId] {
        &self.stops
    }

    /// Customers in visit order, without the depot sentinels.
    pub fn customers(&self) -> &[LocationId] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Depot this route starts and ends at.
    pub fn depot(&self) -> LocationId {
        self.stops[0]
    }

    /// Number of stops, sentinels included.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always `false`: a route holds at least its two depot sentinels.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Returns `true` if no customer is assigned (`[depot, depot]`).
    pub fn is_trivial(&self) -> bool {
        self.stops.len() == 2
    }
}
