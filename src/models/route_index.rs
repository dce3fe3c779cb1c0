//! Per-vehicle traversal index used while routes are being built.

use super::{LocationId, Route};

/// Maps a vehicle's traversal position to the global location identifier.
///
/// Every vehicle starts with the sentinel pair `[depot, depot]`; position 0 is
/// the start sentinel and position `len - 1` the end sentinel. Customers are
/// inserted strictly between the two.
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::RouteIndex;
///
/// let mut index = RouteIndex::new(2, 0);
/// index.insert(1, 1, 7);
///
/// assert_eq!(index.start(1), 0);
/// assert_eq!(index.next(1, 0), Some(7));
/// assert!(!index.is_end(1, 1));
/// assert!(index.is_end(1, 2));
/// assert!(index.is_end(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct RouteIndex {
    depot: LocationId,
    routes: Vec<Vec<LocationId>>,
}

impl RouteIndex {
    /// Creates `num_vehicles` trivial routes at `depot`.
    pub fn new(num_vehicles: usize, depot: LocationId) -> Self {
        Self {
            depot,
            routes: vec![vec![depot, depot]; num_vehicles],
        }
    }

    /// Rebuilds an index over frozen routes, e.g. for a read-only traversal.
    pub fn from_routes(depot: LocationId, routes: &[Route]) -> Self {
        Self {
            depot,
            routes: routes.iter().map(|r| r.stops().to_vec()).collect(),
        }
    }

    /// Number of vehicles tracked.
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }

    /// Shared depot of every route.
    pub fn depot(&self) -> LocationId {
        self.depot
    }

    /// Start location of a vehicle (always the depot).
    pub fn start(&self, vehicle: usize) -> LocationId {
        self.routes[vehicle][0]
    }

    /// Location at `position` in the vehicle's traversal.
    pub fn location(&self, vehicle: usize, position: usize) -> LocationId {
        self.routes[vehicle][position]
    }

    /// Location following `position`, or `None` past the end sentinel.
    pub fn next(&self, vehicle: usize, position: usize) -> Option<LocationId> {
        self.routes[vehicle].get(position + 1).copied()
    }

    /// Returns `true` if `position` is the vehicle's end sentinel.
    pub fn is_end(&self, vehicle: usize, position: usize) -> bool {
        position + 1 >= self.routes[vehicle].len()
    }

    /// Full stop sequence of a vehicle.
    pub fn route(&self, vehicle: usize) -> &[LocationId] {
        &self.routes[vehicle]
    }

    /// Returns `true` if the vehicle has no customers yet.
    pub fn is_trivial(&self, vehicle: usize) -> bool {
        self.routes[vehicle].len() == 2
    }

    /// Consecutive stop pairs of a vehicle as `(position, from, to)`, where
    /// `position` is the index a customer takes when inserted on that arc.
    pub fn arcs(
        &self,
        vehicle: usize,
    ) -> impl Iterator<Item = (usize, LocationId, LocationId)> + '_ {
        self.routes[vehicle]
            .windows(2)
            .enumerate()
            .map(|(i, w)| (i + 1, w[0], w[1]))
    }

    /// Inserts `customer` at `position`, between stops `position - 1` and `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` would displace either depot sentinel.
    pub fn insert(&mut self, vehicle: usize, position: usize, customer: LocationId) {
        let route = &mut self.routes[vehicle];
        assert!(
            (1..route.len()).contains(&position),
            "position {position} is outside the route interior"
        );
        route.insert(position, customer);
    }

    /// Freezes the index into one [`Route`] per vehicle.
    pub fn into_routes(self) -> Vec<Route> {
        self.routes
            .into_iter()
            .enumerate()
            .map(|(vehicle_id, stops)| Route::new(vehicle_id, stops))
            .collect()
    }
}
