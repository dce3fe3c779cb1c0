//! Swap-mutation evolutionary search.
//!
//! # Algorithm
//!
//! 1. Create `population_size` tours, each a random shuffle of all customers
//!    anchored at the depot.
//! 2. Each generation, every tour with at least two customers swaps two
//!    randomly chosen customers (the depot never moves) and is repriced.
//! 3. The cheapest tour ever seen is kept; a later tour replaces it only if
//!    strictly cheaper.
//!
//! Mutations are always accepted, so the population drifts while the best
//! tour is monotonically non-increasing in cost. The random generator is
//! seeded, so identical input and configuration give identical results.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use super::tour::Tour;
use crate::config::EvolutionConfig;
use crate::distance::{Cost, DistanceMatrix};
use crate::error::{InvalidInput, RoutingError};
use crate::models::{LocationId, Route, Solution};

/// Outcome of an evolutionary run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionResult {
    best: Tour,
    history: Vec<Cost>,
}

impl EvolutionResult {
    /// Cheapest tour found.
    pub fn best(&self) -> &Tour {
        &self.best
    }

    /// Cost of the cheapest tour found.
    pub fn best_cost(&self) -> Cost {
        self.best.cost()
    }

    /// Best cost after initialization, then after each generation.
    pub fn history(&self) -> &[Cost] {
        &self.history
    }

    /// Converts the best tour into a one-vehicle [`Solution`].
    pub fn into_solution(self) -> Solution {
        let depot = self.best.stops()[0];
        let cost = self.best.cost();
        let route = Route::new(0, self.best.stops().to_vec());
        Solution::new(depot, vec![route], vec![cost])
    }
}

/// Runs a seeded swap-mutation search for a single depot-anchored tour.
///
/// # Errors
///
/// * [`InvalidInput::DepotOutOfRange`] if the depot is not a matrix location
/// * [`InvalidInput::EmptyPopulation`] if `population_size` is 0
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::EvolutionConfig;
/// use cheapest_arc::distance::DistanceMatrix;
/// use cheapest_arc::ga::evolve;
/// use cheapest_arc::models::Location;
///
/// let locations = Location::from_coords(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
///
/// let config = EvolutionConfig::default().with_population_size(10).with_generations(20);
/// let result = evolve(&dm, &config).unwrap();
/// assert_eq!(result.best().len(), 3);
/// assert_eq!(result.best_cost(), dm.route_cost(result.best().stops()));
/// ```
#[instrument(
    skip_all,
    fields(
        size = matrix.size(),
        population_size = config.population_size,
        generations = config.generations,
        seed = config.seed
    )
)]
pub fn evolve(
    matrix: &DistanceMatrix,
    config: &EvolutionConfig,
) -> Result<EvolutionResult, RoutingError> {
    let depot = config.depot;
    if depot >= matrix.size() {
        return Err(InvalidInput::DepotOutOfRange {
            depot,
            len: matrix.size(),
        }
        .into());
    }
    if config.population_size == 0 {
        return Err(InvalidInput::EmptyPopulation.into());
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let customers: Vec<LocationId> = (0..matrix.size()).filter(|&id| id != depot).collect();

    let mut population: Vec<Tour> = (0..config.population_size)
        .map(|_| {
            let mut perm = customers.clone();
            perm.shuffle(&mut rng);
            Tour::new(depot, perm, matrix)
        })
        .collect();

    let mut best = population[0].clone();
    for tour in &population[1..] {
        if tour.cost() < best.cost() {
            best = tour.clone();
        }
    }

    let mut history = Vec::with_capacity(config.generations + 1);
    history.push(best.cost());

    for generation in 0..config.generations {
        for tour in population.iter_mut() {
            if tour.len() < 2 {
                continue;
            }
            let i = rng.random_range(0..tour.len());
            let j = rng.random_range(0..tour.len());
            tour.swap_customers(i, j, matrix);
            if tour.cost() < best.cost() {
                best = tour.clone();
            }
        }
        history.push(best.cost());
        debug!(generation, best_cost = best.cost(), "generation finished");
    }

    info!(best_cost = best.cost(), "evolution finished");
    Ok(EvolutionResult { best, history })
}
