use aco_tsp::graph::{GenericWeightedGraph, MatrixGraph};
use aco_tsp::metaheuristic::aco::{AcoError, Params, Supervisor, INITIAL_PHEROMONE};
use aco_tsp::metaheuristic::{solution_length, Aco, Metaheuristic, ProblemInstance, Solution};
use aco_tsp::{optimize, optimize_with};

use float_cmp::approx_eq;

fn square() -> MatrixGraph<char, (), f64> {
    MatrixGraph::new_undirected(
        vec![('a', ()), ('b', ()), ('c', ()), ('d', ())],
        vec![
            (('a', 'b'), 3.0),
            (('a', 'c'), 2.0),
            (('a', 'd'), 12.0),
            (('b', 'c'), 6.0),
            (('b', 'd'), 7.0),
            (('c', 'd'), 9.0),
        ],
    )
    .unwrap()
}

/// Complete graph on points of a small grid, weighted by euclidean distance.
fn grid(side: usize) -> MatrixGraph<usize, (), f64> {
    let points: Vec<(f64, f64)> = (0..side * side)
        .map(|i| ((i % side) as f64, (i / side) as f64))
        .collect();
    let mut edges = Vec::new();
    for (i, &(x1, y1)) in points.iter().enumerate() {
        for (j, &(x2, y2)) in points.iter().enumerate().skip(i + 1) {
            edges.push(((i, j), ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()));
        }
    }

    MatrixGraph::new_undirected((0..points.len()).map(|i| (i, ())).collect(), edges).unwrap()
}

fn assert_valid_tours<I>(graph: &MatrixGraph<I, (), f64>, tours: &[Solution<I>], lengths: &[f64])
where
    I: Copy + std::hash::Hash + Eq + std::fmt::Debug + std::fmt::Display,
{
    assert_eq!(tours.len(), lengths.len());
    for (tour, &length) in tours.iter().zip(lengths.iter()) {
        assert!(
            tour.is_hamiltonian_cycle(graph.order()),
            "{} is not a hamiltonian cycle.",
            tour
        );
        assert!(
            approx_eq!(f64, solution_length(tour, graph).unwrap(), length),
            "Reported length {} of {} doesn't match the graph.",
            length,
            tour
        );
    }
}

#[test]
fn square_tours_are_complete_and_consistent() {
    let graph = square();
    let (tours, lengths) = optimize(&graph, 4, 1, 0.15, 1.0, 2.5).unwrap();

    assert_eq!(tours.len(), 4);
    assert_valid_tours(&graph, &tours, &lengths);
}

#[test]
fn grid_tours_stay_complete_over_many_iterations() {
    let graph = grid(4);
    let (tours, lengths) = optimize_with(&graph, Params::new(1.0, 3.0, 0.2, Some(5), 8, 25)).unwrap();

    assert_eq!(tours.len(), 8);
    assert_valid_tours(&graph, &tours, &lengths);
}

#[test]
fn single_node_is_a_trivial_tour() {
    let graph = MatrixGraph::<char, (), f64>::new(vec![('z', ())], vec![]).unwrap();
    let (tours, lengths) = optimize(&graph, 3, 2, 0.5, 1.0, 1.0).unwrap();

    assert_eq!(tours, vec![Solution::from_nodes(vec!['z', 'z']); 3]);
    assert_eq!(lengths, vec![0.0; 3]);
}

#[test]
fn zero_iterations_leave_pheromones_untouched() {
    let graph = square();
    let mut aco = Aco::new(
        ProblemInstance::new(&graph),
        Params::new(1.0, 2.5, 0.15, Some(1), 4, 0),
        Supervisor::silent(),
    )
    .unwrap();
    aco.run().unwrap();

    for &from in aco.nodes().to_vec().iter() {
        for &to in aco.nodes().iter().filter(|&&to| to != from) {
            assert_eq!(aco.pheromone(from, to), Some(INITIAL_PHEROMONE));
        }
    }

    let (tours, lengths) = aco.finish().unwrap();
    assert!(tours.iter().all(|tour| tour.is_empty()));
    assert_eq!(lengths, vec![0.0; 4]);
}

#[test]
fn pheromones_stay_symmetric_and_non_negative() {
    let graph = grid(3);
    let mut aco = Aco::new(
        ProblemInstance::new(&graph),
        Params::new(1.0, 2.0, 0.9, Some(8), 6, 40),
        Supervisor::silent(),
    )
    .unwrap();

    while aco.iteration() < aco.params().iterations {
        aco.single_iteration().unwrap();
        assert!(aco.is_pheromone_symmetric(), "Iteration {}", aco.iteration());
        assert!(aco.is_pheromone_non_negative(), "Iteration {}", aco.iteration());
    }
}

#[test]
fn best_length_never_gets_worse() {
    let graph = grid(3);
    let mut aco = Aco::new(
        ProblemInstance::new(&graph),
        Params::new(1.0, 2.0, 0.3, Some(13), 4, 30),
        Supervisor::silent(),
    )
    .unwrap();

    let mut best = f64::INFINITY;
    while aco.iteration() < aco.params().iterations {
        let improved = aco.single_iteration().unwrap().is_some();
        let length = aco.best_length().unwrap();

        assert!(length <= best);
        assert_eq!(improved, length < best);
        best = length;
    }
    assert!(aco.best_solution().unwrap().is_hamiltonian_cycle(9));
}

#[test]
fn fixed_seed_is_reproducible() {
    let graph = grid(3);
    let params = Params::new(1.0, 2.0, 0.3, Some(1234), 6, 15);

    let first = optimize_with(&graph, params).unwrap();
    let second = optimize_with(&graph, params).unwrap();
    let parallel = optimize_with(&graph, params.parallel(true)).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, parallel);
}

#[test]
fn independent_runs_share_no_state() {
    let graph = square();
    let params = Params::new(1.0, 2.5, 0.15, Some(77), 4, 5);
    let before = optimize_with(&graph, params).unwrap();
    optimize_with(&grid(3), Params::new(1.0, 2.0, 0.5, Some(2), 3, 5)).unwrap();
    let after = optimize_with(&graph, params).unwrap();

    assert_eq!(before, after);
}

#[test]
fn incomplete_graph_is_rejected() {
    let graph = MatrixGraph::<char, (), f64>::new(
        vec![('a', ()), ('b', ()), ('c', ())],
        vec![
            (('a', 'b'), 1.0),
            (('b', 'a'), 1.0),
            (('b', 'c'), 1.0),
            (('c', 'b'), 1.0),
            (('a', 'c'), 1.0),
        ],
    )
    .unwrap();

    assert_eq!(
        optimize(&graph, 2, 1, 0.5, 1.0, 1.0).err(),
        Some(AcoError::MissingEdgeWeight(('c', 'a')))
    );
}

#[test]
fn invalid_configuration_is_rejected() {
    let graph = square();
    let empty = MatrixGraph::<char, (), f64>::default();

    assert!(matches!(
        optimize(&graph, 0, 1, 0.5, 1.0, 1.0),
        Err(AcoError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        optimize(&empty, 2, 1, 0.5, 1.0, 1.0),
        Err(AcoError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        optimize(&graph, 2, 1, 1.5, 1.0, 1.0),
        Err(AcoError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        optimize(&graph, 2, 1, 0.5, f64::NAN, 1.0),
        Err(AcoError::InvalidConfiguration(_))
    ));
}

#[test]
fn non_positive_weight_is_rejected() {
    let graph = MatrixGraph::<char, (), f64>::new_undirected(
        vec![('a', ()), ('b', ()), ('c', ())],
        vec![(('a', 'b'), 1.0), (('b', 'c'), -2.0), (('a', 'c'), 1.0)],
    )
    .unwrap();

    assert_eq!(
        optimize(&graph, 2, 1, 0.5, 1.0, 1.0).err(),
        Some(AcoError::InvalidEdgeWeight(('b', 'c'), -2.0))
    );
}
