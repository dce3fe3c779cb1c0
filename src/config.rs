//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::models::LocationId;

/// Vehicle count used when the caller does not specify one.
pub const DEFAULT_NUM_VEHICLES: usize = 25;

/// Policy used to build the first (and only) solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstSolutionStrategy {
    /// Global cheapest insertion over every (vehicle, position, customer) triple.
    #[default]
    CheapestArc,
    /// Extend the route whose last stop has the cheapest arc to an unassigned customer.
    NearestNeighbor,
}

/// Options passed explicitly into [`construct`](crate::constructive::construct).
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::{FirstSolutionStrategy, SolverConfig};
///
/// let config = SolverConfig::default().with_num_vehicles(3);
/// assert_eq!(config.num_vehicles, 3);
/// assert_eq!(config.depot, 0);
/// assert_eq!(config.first_solution_strategy, FirstSolutionStrategy::CheapestArc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub first_solution_strategy: FirstSolutionStrategy,
    pub num_vehicles: usize,
    pub depot: LocationId,
}

impl SolverConfig {
    /// Creates a configuration with the given fleet size and default depot/strategy.
    pub fn new(num_vehicles: usize) -> Self {
        Self {
            num_vehicles,
            ..Self::default()
        }
    }

    /// Sets the first-solution strategy.
    pub fn with_strategy(mut self, strategy: FirstSolutionStrategy) -> Self {
        self.first_solution_strategy = strategy;
        self
    }

    /// Sets the number of vehicles.
    pub fn with_num_vehicles(mut self, num_vehicles: usize) -> Self {
        self.num_vehicles = num_vehicles;
        self
    }

    /// Sets the depot location.
    pub fn with_depot(mut self, depot: LocationId) -> Self {
        self.depot = depot;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::default(),
            num_vehicles: DEFAULT_NUM_VEHICLES,
            depot: 0,
        }
    }
}

/// Options for the evolutionary tour search in [`ga`](crate::ga).
///
/// # Examples
///
/// ```
/// use cheapest_arc::config::EvolutionConfig;
///
/// let config = EvolutionConfig::default().with_generations(10).with_seed(7);
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 10);
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub seed: u64,
    pub depot: LocationId,
}

impl EvolutionConfig {
    /// Sets the number of tours evolved in parallel.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the number of mutation rounds.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the depot location.
    pub fn with_depot(mut self, depot: LocationId) -> Self {
        self.depot = depot;
        self
    }
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            seed: 42,
            depot: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = SolverConfig::default();
        assert_eq!(c.num_vehicles, 25);
        assert_eq!(c.depot, 0);
        assert_eq!(c.first_solution_strategy, FirstSolutionStrategy::CheapestArc);
    }

    #[test]
    fn test_builder() {
        let c = SolverConfig::new(4)
            .with_depot(2)
            .with_strategy(FirstSolutionStrategy::NearestNeighbor);
        assert_eq!(c.num_vehicles, 4);
        assert_eq!(c.depot, 2);
        assert_eq!(
            c.first_solution_strategy,
            FirstSolutionStrategy::NearestNeighbor
        );
    }

    #[test]
    fn test_deserialize_partial() {
        let c: SolverConfig = serde_json::from_str(r#"{"num_vehicles": 7}"#).expect("valid json");
        assert_eq!(c, SolverConfig::new(7));

        let c: SolverConfig =
            serde_json::from_str(r#"{"first_solution_strategy": "nearest_neighbor", "depot": 1}"#)
                .expect("valid json");
        assert_eq!(c.first_solution_strategy, FirstSolutionStrategy::NearestNeighbor);
        assert_eq!(c.depot, 1);
        assert_eq!(c.num_vehicles, DEFAULT_NUM_VEHICLES);
    }

    #[test]
    fn test_evolution_config() {
        let c = EvolutionConfig::default();
        assert_eq!((c.population_size, c.generations, c.seed, c.depot), (50, 100, 42, 0));

        let c: EvolutionConfig =
            serde_json::from_str(r#"{"generations": 5, "seed": 9}"#).expect("valid json");
        assert_eq!(c, EvolutionConfig::default().with_generations(5).with_seed(9));

        let c = EvolutionConfig::default().with_population_size(3).with_depot(2);
        assert_eq!(c.population_size, 3);
        assert_eq!(c.depot, 2);
    }
}
