use cheapest_arc::config::{EvolutionConfig, FirstSolutionStrategy, SolverConfig};
use cheapest_arc::constructive::construct;
use cheapest_arc::distance::{Cost, DistanceMatrix};
use cheapest_arc::ga::evolve;
use cheapest_arc::models::Location;
use cheapest_arc::report::summarize;
use cheapest_arc::solve;
use proptest::prelude::*;

fn coords() -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((-100i32..=100, -100i32..=100), 1..=14)
}

fn strategy() -> impl Strategy<Value = FirstSolutionStrategy> {
    prop_oneof![
        Just(FirstSolutionStrategy::CheapestArc),
        Just(FirstSolutionStrategy::NearestNeighbor),
    ]
}

fn instance() -> impl Strategy<Value = (Vec<(i32, i32)>, SolverConfig)> {
    coords().prop_flat_map(|c| {
        let n = c.len();
        (Just(c), 1usize..=5, 0..n, strategy()).prop_map(|(c, k, depot, s)| {
            let config = SolverConfig::new(k).with_depot(depot).with_strategy(s);
            (c, config)
        })
    })
}

proptest! {
    #[test]
    fn every_customer_visited_exactly_once((c, config) in instance()) {
        let matrix = DistanceMatrix::from_locations(&Location::from_coords(&c)).unwrap();
        let solution = construct(&matrix, &config).unwrap();

        let mut seen = vec![0usize; c.len()];
        for route in solution.routes() {
            for &customer in route.customers() {
                seen[customer] += 1;
            }
        }
        for (id, &count) in seen.iter().enumerate() {
            let expected = if id == config.depot { 0 } else { 1 };
            prop_assert_eq!(count, expected, "location {}", id);
        }
    }

    #[test]
    fn routes_start_and_end_at_depot((c, config) in instance()) {
        let report = solve(&Location::from_coords(&c), &config).unwrap();
        prop_assert_eq!(report.vehicles.len(), config.num_vehicles);
        for v in &report.vehicles {
            prop_assert!(v.route.len() >= 2);
            prop_assert_eq!(v.route[0], config.depot);
            prop_assert_eq!(*v.route.last().unwrap(), config.depot);
        }
    }

    #[test]
    fn distances_match_route_costs((c, config) in instance()) {
        let matrix = DistanceMatrix::from_locations(&Location::from_coords(&c)).unwrap();
        let solution = construct(&matrix, &config).unwrap();
        let report = summarize(&solution);

        for v in &report.vehicles {
            prop_assert_eq!(v.distance, matrix.route_cost(&v.route));
            prop_assert!(v.distance >= 0);
        }
        let sum: Cost = report.vehicles.iter().map(|v| v.distance).sum();
        prop_assert_eq!(report.total_distance, sum);
        prop_assert_eq!(report.total_distance, solution.total_distance());
    }

    #[test]
    fn solve_is_deterministic((c, config) in instance()) {
        let locations = Location::from_coords(&c);
        let a = solve(&locations, &config).unwrap();
        let b = solve(&locations, &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn single_customer_round_trip(depot in (-50i32..=50, -50i32..=50), customer in (-50i32..=50, -50i32..=50)) {
        let locations = Location::from_coords(&[depot, customer]);
        let matrix = DistanceMatrix::from_locations(&locations).unwrap();
        let report = solve(&locations, &SolverConfig::new(1)).unwrap();
        prop_assert_eq!(&report.vehicles[0].route, &vec![0, 1, 0]);
        prop_assert_eq!(report.total_distance, 2 * matrix.get(0, 1));
    }

    #[test]
    fn evolved_tour_visits_every_customer(c in coords(), seed in any::<u64>(), generations in 0usize..30) {
        let matrix = DistanceMatrix::from_locations(&Location::from_coords(&c)).unwrap();
        let config = EvolutionConfig::default()
            .with_population_size(5)
            .with_generations(generations)
            .with_seed(seed);
        let result = evolve(&matrix, &config).unwrap();

        let mut customers = result.best().customers().to_vec();
        customers.sort();
        prop_assert_eq!(customers, (1..c.len()).collect::<Vec<_>>());
        prop_assert_eq!(result.best_cost(), matrix.route_cost(result.best().stops()));
        prop_assert!(result.history().windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn matrix_diagonal_zero_and_non_negative(c in coords()) {
        let matrix = DistanceMatrix::from_locations(&Location::from_coords(&c)).unwrap();
        for i in 0..c.len() {
            prop_assert_eq!(matrix.get(i, i), 0);
            for j in 0..c.len() {
                prop_assert!(matrix.get(i, j) >= 0);
            }
        }
    }
}

#[test]
fn extra_vehicles_keep_total_on_sample_instances() {
    let asymmetric =
        DistanceMatrix::from_data(3, vec![0, 5, 5, 5, 0, 100, 5, 100, 0]).expect("valid");
    let totals: Vec<Cost> = (1..=4)
        .map(|k| {
            construct(&asymmetric, &SolverConfig::new(k))
                .expect("feasible")
                .total_distance()
        })
        .collect();
    assert_eq!(totals, vec![110, 20, 20, 20]);

    let line = Location::from_coords(&[(0, 0), (100, 0), (101, 0), (-100, 0)]);
    for k in 1..=4 {
        let report = solve(&line, &SolverConfig::new(k)).expect("feasible");
        assert_eq!(report.total_distance, 402);
    }
}

// Greedy insertion is not monotone in fleet size: with two vehicles customer 2
// gets a route of its own, and the other customers then cost more than the
// single-vehicle tour.
#[test]
fn extra_vehicle_can_increase_total() {
    let locations = Location::from_coords(&[
        (30, -13),
        (-32, -40),
        (33, -31),
        (-42, 20),
        (17, 45),
        (22, 20),
    ]);

    let one = solve(&locations, &SolverConfig::new(1)).expect("feasible");
    assert_eq!(one.vehicles[0].route, vec![0, 5, 4, 3, 1, 2, 0]);
    assert_eq!(one.total_distance, 265);

    let two = solve(&locations, &SolverConfig::new(2)).expect("feasible");
    assert_eq!(two.vehicles[0].route, vec![0, 2, 0]);
    assert_eq!(two.vehicles[1].route, vec![0, 1, 3, 4, 5, 0]);
    assert_eq!(two.total_distance, 285);
    assert!(two.total_distance > one.total_distance);
}

#[test]
fn zero_vehicles_with_customers_is_infeasible() {
    let locations = Location::from_coords(&[(0, 0), (3, 4), (6, 8)]);
    let err = solve(&locations, &SolverConfig::new(0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "2 customer(s) cannot be served by a fleet of zero vehicles"
    );
}
