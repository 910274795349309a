//! Unit tests for geometric graph construction.

use proptest::prelude::*;
use rstest::rstest;
use sensorgraph_test_support::fixtures::{TWO_TRIANGLES, UNIT_SQUARE};

use crate::{
    GeometricGraphBuilder, Graph, Point, SensorGraphError,
    test_utils::{approx_eq, graph_case_strategy, graph_from, points, suite_proptest_config},
};

fn assert_symmetric_without_loops(graph: &Graph) {
    for vertex in graph.vertices() {
        for &neighbor in vertex.neighbors() {
            assert_ne!(neighbor, vertex.id(), "self-loop on {}", vertex.id());
            assert!(
                graph.neighbors(neighbor).contains(&vertex.id()),
                "edge {} -> {neighbor} is not mirrored",
                vertex.id()
            );
        }
    }
}

fn brute_force_edge_count(points: &[Point], radius: f64) -> usize {
    let mut edges = 0;
    for (i, left) in points.iter().enumerate() {
        for right in &points[i + 1..] {
            if left.distance(*right) <= radius {
                edges += 1;
            }
        }
    }
    edges
}

#[test]
fn diagonal_radius_produces_complete_graph() {
    let graph = graph_from(UNIT_SQUARE, 1.5);
    let summary = graph.summary();

    assert_eq!(summary.vertex_count, 4);
    assert_eq!(summary.edge_count, 6);
    assert_eq!(summary.min_degree, 3);
    assert_eq!(summary.max_degree, 3);
    assert!(approx_eq(summary.average_degree, 3.0));
    assert_eq!(summary.degree_frequency.get(&3), Some(&4));
    assert_symmetric_without_loops(&graph);
}

#[test]
fn unit_radius_produces_four_cycle() {
    let graph = graph_from(UNIT_SQUARE, 1.0);

    assert_eq!(graph.edge_count(), 4);
    assert!(graph.vertices().iter().all(|v| v.original_degree() == 2));
    assert!(!graph.is_adjacent(0, 3));
    assert!(!graph.is_adjacent(1, 2));
    assert!(graph.is_adjacent(0, 1));
    assert!(graph.is_adjacent(2, 3));
}

#[test]
fn adjacency_lists_follow_sweep_discovery_order() {
    let graph = graph_from(UNIT_SQUARE, 1.5);

    assert_eq!(graph.neighbors(0), &[2, 3, 1]);
    assert_eq!(graph.neighbors(1), &[2, 3, 0]);
    assert_eq!(graph.neighbors(2), &[3, 0, 1]);
    assert_eq!(graph.neighbors(3), &[2, 0, 1]);
}

#[test]
fn zero_radius_leaves_distinct_points_isolated() {
    let graph = graph_from(&[(0.1, 0.1), (0.2, 0.2), (0.3, 0.3), (0.9, 0.1)], 0.0);
    let summary = graph.summary();

    assert_eq!(summary.edge_count, 0);
    assert_eq!(summary.min_degree, 0);
    assert_eq!(summary.max_degree, 0);
    assert_eq!(summary.degree_frequency.get(&0), Some(&4));
}

#[test]
fn zero_radius_still_joins_coincident_points() {
    let graph = graph_from(&[(0.5, 0.5), (0.5, 0.5), (0.7, 0.5)], 0.0);

    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_adjacent(0, 1));
    assert_eq!(graph.degree(2), 0);
}

#[test]
fn separated_triangles_do_not_connect() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);

    assert_eq!(graph.edge_count(), 6);
    for left in 0..3 {
        for right in 3..6 {
            assert!(!graph.is_adjacent(left, right));
        }
    }
}

#[test]
fn extreme_degree_vertices_reports_min_and_max() {
    let graph = graph_from(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (5.0, 5.0)], 0.6);
    let (min, max) = graph.extreme_degree_vertices();

    assert_eq!(min, vec![3]);
    assert_eq!(max, vec![1]);
}

#[test]
fn summary_names_the_extreme_degree_vertices() {
    let graph = graph_from(&[(0.0, 0.0), (0.5, 0.0), (1.0, 0.0), (5.0, 5.0), (9.0, 9.0)], 0.6);
    let summary = graph.summary();

    assert_eq!(summary.min_degree, 0);
    assert_eq!(summary.min_degree_vertices, vec![3, 4]);
    assert_eq!(summary.max_degree, 2);
    assert_eq!(summary.max_degree_vertices, vec![1]);
}

#[test]
fn unknown_vertices_have_no_neighbors() {
    let graph = graph_from(UNIT_SQUARE, 1.0);
    assert!(graph.neighbors(99).is_empty());
    assert_eq!(graph.degree(99), 0);
    assert!(graph.vertex(99).is_none());
}

#[rstest]
#[case::empty(Vec::new(), SensorGraphError::InvalidVertexCount { got: 0 })]
#[case::nan(
    vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 0.0)],
    SensorGraphError::NonFiniteCoordinate { vertex: 1 },
)]
#[case::infinite(
    vec![Point::new(f64::INFINITY, 0.0)],
    SensorGraphError::NonFiniteCoordinate { vertex: 0 },
)]
fn build_rejects_invalid_points(#[case] input: Vec<Point>, #[case] expected: SensorGraphError) {
    let builder = GeometricGraphBuilder::new(1.0).expect("radius is valid");
    let err = builder.build(&input).expect_err("invalid input must fail");
    assert_eq!(err, expected);
}

#[test]
fn single_point_graph_is_valid() {
    let graph = graph_from(&[(0.25, 0.75)], 0.3);
    let summary = graph.summary();
    assert_eq!(summary.vertex_count, 1);
    assert_eq!(summary.edge_count, 0);
    assert!(summary.average_degree.abs() < f64::EPSILON);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn adjacency_is_symmetric_and_matches_brute_force(case in graph_case_strategy()) {
        let graph = case.graph();
        assert_symmetric_without_loops(&graph);
        prop_assert_eq!(graph.edge_count(), brute_force_edge_count(&case.points(), case.radius));
    }

    #[test]
    fn degrees_satisfy_the_handshake_lemma(case in graph_case_strategy()) {
        let graph = case.graph();
        let degree_sum: usize = graph.vertices().iter().map(|v| v.original_degree()).sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());

        let frequency_total: usize = graph.degree_frequency().values().sum();
        prop_assert_eq!(frequency_total, graph.len());
    }

    #[test]
    fn neighbor_lists_hold_no_duplicates(case in graph_case_strategy()) {
        let graph = case.graph();
        for vertex in graph.vertices() {
            let mut sorted = vertex.neighbors().to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(sorted.len(), vertex.neighbors().len());
        }
    }
}

#[test]
#[expect(clippy::float_arithmetic, reason = "scatters fixture coordinates")]
fn builder_output_is_deterministic_across_runs() {
    let coords: Vec<(f64, f64)> = (0..40)
        .map(|i| {
            let t = f64::from(i);
            ((t * 0.37).fract(), (t * 0.61).fract())
        })
        .collect();
    let first = graph_from(&coords, 0.25);
    let second = graph_from(&coords, 0.25);
    assert_eq!(first, second);
    assert_eq!(points(&coords).len(), first.len());
}
