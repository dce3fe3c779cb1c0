//! Error types for solver input validation and feasibility.

use thiserror::Error;

use crate::distance::Cost;

/// Why a location list or cost matrix was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("location list is empty")]
    Empty,
    #[error("depot {depot} is out of range for {len} locations")]
    DepotOutOfRange { depot: usize, len: usize },
    #[error("location {id} has a non-finite coordinate")]
    NonFiniteCoordinate { id: usize },
    #[error("location at index {index} carries id {id}; ids must be numbered 0..N-1 in order")]
    MisnumberedLocation { index: usize, id: usize },
    #[error("matrix of size {size} cannot hold {len} entries")]
    MatrixShape { size: usize, len: usize },
    #[error("negative cost from {from} to {to}")]
    NegativeCost { from: usize, to: usize },
    #[error("diagonal entry {index} is not zero")]
    NonZeroDiagonal { index: usize },
    #[error("cost from {from} to {to} exceeds the limit of {limit} for this matrix size")]
    CostOverflow { from: usize, to: usize, limit: Cost },
    #[error("population size must be at least 1")]
    EmptyPopulation,
}

/// Errors that abort a solve. No partial solution is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoutingError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
    #[error("{customers} customer(s) cannot be served by a fleet of zero vehicles")]
    Infeasible { customers: usize },
}
