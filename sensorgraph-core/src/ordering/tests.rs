//! Unit and property tests for the smallest-last ordering.

use proptest::prelude::*;
use rstest::rstest;
use sensorgraph_test_support::fixtures::{TWO_TRIANGLES, UNIT_SQUARE, collinear};

use crate::{
    Graph, SmallestLastOrdering,
    test_utils::{graph_case_strategy, graph_from, suite_proptest_config},
};

fn order(graph: &Graph) -> SmallestLastOrdering {
    SmallestLastOrdering::compute(graph).expect("ordering must succeed")
}

fn remaining_degree(graph: &Graph, vertex: usize, removed: &[bool]) -> usize {
    graph
        .neighbors(vertex)
        .iter()
        .filter(|&&neighbor| !removed[neighbor])
        .count()
}

fn is_clique(graph: &Graph, members: &[usize]) -> bool {
    members.iter().enumerate().all(|(i, &left)| {
        members[i + 1..]
            .iter()
            .all(|&right| graph.is_adjacent(left, right))
    })
}

#[test]
fn complete_graph_is_a_terminal_clique_from_the_start() {
    let graph = graph_from(UNIT_SQUARE, 1.5);
    let ordering = order(&graph);

    assert_eq!(ordering.sequence(), &[0, 1, 2, 3]);
    assert_eq!(ordering.degree_at_deletion(), &[3, 2, 1, 0]);
    assert_eq!(ordering.original_degree(), &[3, 3, 3, 3]);
    assert_eq!(ordering.terminal_clique_size(), Some(4));
    assert_eq!(ordering.degeneracy(), 3);
}

#[test]
fn four_cycle_collapses_to_an_edge() {
    let graph = graph_from(UNIT_SQUARE, 1.0);
    let ordering = order(&graph);

    assert_eq!(ordering.sequence(), &[0, 1, 2, 3]);
    assert_eq!(ordering.degree_at_deletion(), &[2, 1, 1, 0]);
    assert_eq!(ordering.original_degree(), &[2, 2, 2, 2]);
    assert_eq!(ordering.terminal_clique_size(), Some(2));
    assert_eq!(ordering.degeneracy(), 2);
}

#[test]
fn isolated_vertices_leave_a_single_vertex_clique() {
    let graph = graph_from(&collinear(5, 1.0), 0.0);
    let ordering = order(&graph);

    assert_eq!(ordering.sequence(), &[0, 1, 2, 3, 4]);
    assert!(ordering.degree_at_deletion().iter().all(|&d| d == 0));
    assert_eq!(ordering.terminal_clique_size(), Some(1));
    assert_eq!(ordering.degeneracy(), 0);
}

#[test]
fn separated_triangles_detect_the_second_triangle() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let ordering = order(&graph);

    assert_eq!(ordering.sequence(), &[0, 1, 2, 3, 4, 5]);
    assert_eq!(ordering.degree_at_deletion(), &[2, 1, 0, 2, 1, 0]);
    assert_eq!(ordering.terminal_clique_size(), Some(3));
}

#[test]
fn path_removes_endpoints_first() {
    let graph = graph_from(&collinear(4, 1.0), 1.0);
    let ordering = order(&graph);

    assert_eq!(ordering.sequence()[0], 0);
    assert_eq!(ordering.degree_at_deletion(), &[1, 1, 1, 0]);
    assert_eq!(ordering.terminal_clique_size(), Some(2));
}

#[rstest]
#[case::square(UNIT_SQUARE, 1.5)]
#[case::cycle(UNIT_SQUARE, 1.0)]
#[case::triangles(TWO_TRIANGLES, 1.5)]
fn coloring_order_reverses_the_sequence(#[case] coords: &[(f64, f64)], #[case] radius: f64) {
    let ordering = order(&graph_from(coords, radius));
    let mut reversed: Vec<_> = ordering.coloring_order().collect();
    reversed.reverse();
    assert_eq!(reversed, ordering.sequence());
}

#[test]
fn summary_mirrors_the_ordering() {
    let ordering = order(&graph_from(UNIT_SQUARE, 1.0));
    let summary = ordering.summary();

    assert_eq!(summary.elimination_sequence, ordering.sequence());
    assert_eq!(summary.degree_at_deletion, ordering.degree_at_deletion());
    assert_eq!(summary.original_degree, ordering.original_degree());
    assert_eq!(summary.terminal_clique_size, Some(2));
    assert_eq!(summary.max_degree_when_deleted, 2);
}

#[test]
fn ordering_leaves_the_graph_untouched() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let before = graph.clone();
    let _ordering = order(&graph);
    assert_eq!(graph, before);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn sequence_is_a_permutation(case in graph_case_strategy()) {
        let graph = case.graph();
        let ordering = order(&graph);

        let mut seen = ordering.sequence().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..graph.len()).collect::<Vec<_>>());
        prop_assert_eq!(ordering.degree_at_deletion().len(), graph.len());
        prop_assert_eq!(ordering.original_degree().len(), graph.len());
    }

    #[test]
    fn degree_at_deletion_matches_the_shrinking_graph(case in graph_case_strategy()) {
        let graph = case.graph();
        let ordering = order(&graph);
        let mut removed = vec![false; graph.len()];

        for (&vertex, &degree) in ordering.sequence().iter().zip(ordering.degree_at_deletion()) {
            prop_assert_eq!(degree, remaining_degree(&graph, vertex, &removed));
            let minimum = (0..graph.len())
                .filter(|&other| !removed[other])
                .map(|other| remaining_degree(&graph, other, &removed))
                .min();
            prop_assert_eq!(Some(degree), minimum, "removed vertex must have minimum degree");
            removed[vertex] = true;
        }
    }

    #[test]
    fn terminal_clique_is_the_first_complete_remainder(case in graph_case_strategy()) {
        let graph = case.graph();
        let ordering = order(&graph);
        let sequence = ordering.sequence();
        let size = ordering
            .terminal_clique_size()
            .expect("the final vertex always forms a clique");

        let start = graph.len() - size;
        prop_assert!(is_clique(&graph, &sequence[start..]));
        for earlier in 0..start {
            prop_assert!(!is_clique(&graph, &sequence[earlier..]));
        }
    }
}
