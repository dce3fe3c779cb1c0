//! Dense integer cost matrix.

use crate::error::{InvalidInput, RoutingError};
use crate::models::{Location, LocationId};

/// Travel cost unit. Euclidean distances are truncated toward zero.
pub type Cost = i64;

/// A dense n×n cost matrix stored in row-major order.
///
/// Each ordered pair is computed independently, so symmetry is never assumed.
/// Diagonal entries are 0, and every entry lies in `0..=cost_limit(size)`,
/// so route totals over the matrix cannot overflow [`Cost`].
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::Location;
/// use cheapest_arc::distance::DistanceMatrix;
///
/// let locations = Location::from_coords(&[(0, 0), (0, 10), (10, 0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert_eq!(dm.get(0, 1), 10);
/// assert_eq!(dm.get(1, 2), 14); // hypot(10, 10) ≈ 14.14
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<Cost>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a truncated Euclidean cost matrix from location coordinates.
    ///
    /// Fails if the list is empty, a coordinate is not finite, identifiers
    /// are not numbered 0..N-1 in order, or two locations are further apart
    /// than [`cost_limit`](Self::cost_limit) allows.
    pub fn from_locations(locations: &[Location]) -> Result<Self, RoutingError> {
        if locations.is_empty() {
            return Err(InvalidInput::Empty.into());
        }
        for (index, loc) in locations.iter().enumerate() {
            if loc.id() != index {
                return Err(InvalidInput::MisnumberedLocation { index, id: loc.id() }.into());
            }
            if !loc.is_finite() {
                return Err(InvalidInput::NonFiniteCoordinate { id: index }.into());
            }
        }

        let size = locations.len();
        let mut data = vec![0; size * size];
        fill_rows(&mut data, locations, Self::cost_limit(size));
        let dm = Self { data, size };
        dm.check_limit()?;
        Ok(dm)
    }

    /// Creates a cost matrix from an explicit n×n grid, e.g. road distances.
    pub fn from_data(size: usize, data: Vec<Cost>) -> Result<Self, RoutingError> {
        if size == 0 {
            return Err(InvalidInput::Empty.into());
        }
        if data.len() != size * size {
            return Err(InvalidInput::MatrixShape {
                size,
                len: data.len(),
            }
            .into());
        }
        let dm = Self { data, size };
        for from in 0..size {
            if dm.get(from, from) != 0 {
                return Err(InvalidInput::NonZeroDiagonal { index: from }.into());
            }
            for to in 0..size {
                if dm.get(from, to) < 0 {
                    return Err(InvalidInput::NegativeCost { from, to }.into());
                }
            }
        }
        dm.check_limit()?;
        Ok(dm)
    }

    /// Largest entry accepted for a matrix of `size` locations.
    ///
    /// Every route total, and the sum over all routes, stays below
    /// `Cost::MAX / 2` when all entries respect this bound.
    pub fn cost_limit(size: usize) -> Cost {
        let size = Cost::try_from(size.max(1)).unwrap_or(Cost::MAX);
        Cost::MAX / size.saturating_mul(4)
    }

    fn check_limit(&self) -> Result<(), RoutingError> {
        let limit = Self::cost_limit(self.size);
        match self.data.iter().position(|&c| c > limit) {
            Some(cell) => Err(InvalidInput::CostOverflow {
                from: cell / self.size,
                to: cell % self.size,
                limit,
            }
            .into()),
            None => Ok(()),
        }
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: LocationId, to: LocationId) -> Cost {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `cost(i, j) == cost(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| ((i + 1)..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Sum of consecutive-pair costs along `stops`.
    ///
    /// Returns 0 for sequences shorter than two stops. Saturates at
    /// `Cost::MAX` for sequences far longer than any route.
    pub fn route_cost(&self, stops: &[LocationId]) -> Cost {
        stops
            .windows(2)
            .fold(0, |total: Cost, w| total.saturating_add(self.get(w[0], w[1])))
    }
}

/// Truncated Euclidean cost between two locations, or `Cost::MAX` when the
/// distance does not fit under `limit`.
fn truncated(from: &Location, to: &Location, limit: Cost) -> Cost {
    let d = from.distance_to(to);
    if d.is_finite() && d <= limit as f64 {
        d as Cost
    } else {
        Cost::MAX
    }
}

fn fill_row(row: &mut [Cost], from: &Location, locations: &[Location], limit: Cost) {
    for (cell, to) in row.iter_mut().zip(locations) {
        *cell = truncated(from, to, limit);
    }
}

#[cfg(not(feature = "parallel"))]
fn fill_rows(data: &mut [Cost], locations: &[Location], limit: Cost) {
    for (row, from) in data.chunks_mut(locations.len()).zip(locations) {
        fill_row(row, from, locations, limit);
    }
}

#[cfg(feature = "parallel")]
fn fill_rows(data: &mut [Cost], locations: &[Location], limit: Cost) {
    use rayon::prelude::*;

    data.par_chunks_mut(locations.len())
        .zip(locations.par_iter())
        .for_each(|(row, from)| fill_row(row, from, locations, limit));
}
