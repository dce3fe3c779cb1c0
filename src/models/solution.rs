//! Constructed solution.

use super::{LocationId, Route};
use crate::distance::Cost;

/// A complete assignment of customers to vehicle routes.
///
/// Built once by a constructive heuristic and read-only afterwards. Carries
/// each route's accumulated distance and the fleet total.
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::{Route, Solution};
///
/// let routes = vec![Route::new(0, vec![0, 1, 0]), Route::new(1, vec![0, 0])];
/// let sol = Solution::new(0, routes, vec![20, 0]);
/// assert_eq!(sol.total_distance(), 20);
/// assert_eq!(sol.num_served(), 1);
/// assert_eq!(sol.num_used_vehicles(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    depot: LocationId,
    routes: Vec<Route>,
    route_distances: Vec<Cost>,
    total_distance: Cost,
}

impl Solution {
    /// Freezes routes and their distances into a solution.
    ///
    /// # Panics
    ///
    /// Panics if `routes` and `route_distances` differ in length.
    pub fn new(depot: LocationId, routes: Vec<Route>, route_distances: Vec<Cost>) -> Self {
        assert_eq!(
            routes.len(),
            route_distances.len(),
            "one distance per route"
        );
        let total_distance = route_distances.iter().sum();
        Self {
            depot,
            routes,
            route_distances,
            total_distance,
        }
    }

    /// Depot shared by all routes.
    pub fn depot(&self) -> LocationId {
        self.depot
    }

    /// Routes in vehicle order, trivial ones included.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Distance of each route, aligned with [`routes`](Self::routes).
    pub fn route_distances(&self) -> &[Cost] {
        &self.route_distances
    }

    /// Sum of all route distances.
    pub fn total_distance(&self) -> Cost {
        self.total_distance
    }

    /// Number of vehicles (routes), trivial ones included.
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }

    /// Number of vehicles that visit at least one customer.
    pub fn num_used_vehicles(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_trivial()).count()
    }

    /// Total number of customers served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.customers().len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_totals() {
        let routes = vec![
            Route::new(0, vec![0, 2, 1, 0]),
            Route::new(1, vec![0, 0]),
            Route::new(2, vec![0, 3, 0]),
        ];
        let sol = Solution::new(0, routes, vec![34, 0, 18]);
        assert_eq!(sol.total_distance(), 52);
        assert_eq!(sol.num_vehicles(), 3);
        assert_eq!(sol.num_used_vehicles(), 2);
        assert_eq!(sol.num_served(), 3);
        assert_eq!(sol.route_distances(), &[34, 0, 18]);
        assert_eq!(sol.depot(), 0);
    }

    #[test]
    fn test_solution_no_vehicles() {
        let sol = Solution::new(0, Vec::new(), Vec::new());
        assert_eq!(sol.total_distance(), 0);
        assert_eq!(sol.num_served(), 0);
    }

    #[test]
    #[should_panic(expected = "one distance per route")]
    fn test_solution_mismatched_lengths() {
        Solution::new(0, vec![Route::new(0, vec![0, 0])], Vec::new());
    }
}
