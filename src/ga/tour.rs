//! Depot-anchored tour chromosome.

use crate::distance::{Cost, DistanceMatrix};
use crate::models::LocationId;

/// A single tour that starts and ends at the depot and visits every customer.
///
/// The cost is kept in sync with the stop order; lower is better.
///
/// # Examples
///
/// ```
/// use cheapest_arc::distance::DistanceMatrix;
/// use cheapest_arc::ga::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 1, 2, 1, 0, 3, 2, 3, 0]).unwrap();
/// let tour = Tour::new(0, vec![2, 1], &dm);
/// assert_eq!(tour.stops(), &[0, 2, 1, 0]);
/// assert_eq!(tour.cost(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    stops: Vec<LocationId>,
    cost: Cost,
}

impl Tour {
    /// Anchors `customers` at `depot` and prices the result.
    pub fn new(depot: LocationId, customers: Vec<LocationId>, matrix: &DistanceMatrix) -> Self {
        let mut stops = Vec::with_capacity(customers.len() + 2);
        stops.push(depot);
        stops.extend(customers);
        stops.push(depot);
        let cost = matrix.route_cost(&stops);
        Self { stops, cost }
    }

    /// Full stop sequence including both depot sentinels.
    pub fn stops(&self) -> &[LocationId] {
        &self.stops
    }

    /// Customers in visit order.
    pub fn customers(&self) -> &[LocationId] {
        &self.stops[1..self.stops.len() - 1]
    }

    /// Total travel cost of the tour.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of customers.
    pub fn len(&self) -> usize {
        self.stops.len() - 2
    }

    /// Returns `true` if the tour visits no customer.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the customers at positions `i` and `j` (0-based, depot excluded)
    /// and reprices the tour.
    pub(crate) fn swap_customers(&mut self, i: usize, j: usize, matrix: &DistanceMatrix) {
        self.stops.swap(i + 1, j + 1);
        self.cost = matrix.route_cost(&self.stops);
    }
}
