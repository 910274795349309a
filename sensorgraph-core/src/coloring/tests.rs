//! Unit and property tests for greedy sequential colouring.

use proptest::prelude::*;
use rstest::rstest;
use sensorgraph_test_support::fixtures::{TWO_TRIANGLES, UNIT_SQUARE, collinear};

use crate::{
    Coloring, ColoringError, ColoringErrorCode, ConflictResolution, Graph, GreedyColorer,
    SmallestLastOrdering,
    test_utils::{graph_case_strategy, graph_from, suite_proptest_config},
};

fn color(graph: &Graph, strategy: ConflictResolution) -> Coloring {
    let ordering = SmallestLastOrdering::compute(graph).expect("ordering must succeed");
    GreedyColorer::new(strategy)
        .color(graph, &ordering)
        .expect("colouring must succeed")
}

#[rstest]
#[case::recursive(ConflictResolution::Recursive)]
#[case::forbidden_set(ConflictResolution::ForbiddenSet)]
fn complete_graph_uses_one_colour_per_vertex(#[case] strategy: ConflictResolution) {
    let graph = graph_from(UNIT_SQUARE, 1.5);
    let coloring = color(&graph, strategy);

    assert_eq!(coloring.colors(), &[3, 2, 1, 0]);
    assert_eq!(coloring.palette_size(), 4);
    assert_eq!(coloring.largest_class_size(), 1);
    assert!(coloring.conflicting_pairs(&graph).is_empty());
}

#[rstest]
#[case::recursive(ConflictResolution::Recursive)]
#[case::forbidden_set(ConflictResolution::ForbiddenSet)]
fn four_cycle_is_two_coloured(#[case] strategy: ConflictResolution) {
    let graph = graph_from(UNIT_SQUARE, 1.0);
    let coloring = color(&graph, strategy);

    assert_eq!(coloring.colors(), &[0, 1, 1, 0]);
    assert_eq!(coloring.palette_size(), 2);
    assert_eq!(coloring.class(0), &[0, 3]);
    assert_eq!(coloring.class(1), &[1, 2]);
    assert!(coloring.conflicting_pairs(&graph).is_empty());
}

#[test]
fn isolated_vertices_share_colour_zero() {
    let graph = graph_from(&collinear(5, 1.0), 0.0);
    let coloring = color(&graph, ConflictResolution::Recursive);

    assert!(coloring.colors().iter().all(|&c| c == 0));
    assert_eq!(coloring.palette_size(), 1);
    assert_eq!(coloring.color_count(), 1);
    assert_eq!(coloring.largest_class_size(), 5);
}

#[test]
fn separated_triangles_reuse_the_same_three_colours() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let coloring = color(&graph, ConflictResolution::Recursive);

    assert_eq!(coloring.colors(), &[2, 1, 0, 2, 1, 0]);
    assert_eq!(coloring.palette_size(), 3);
    assert_eq!(coloring.class(0), &[2, 5]);
    assert_eq!(coloring.class(1), &[1, 4]);
    assert_eq!(coloring.class(2), &[0, 3]);
    assert_eq!(coloring.colors_by_class_size(), vec![0, 1, 2]);
}

#[test]
fn class_sizes_sum_to_the_vertex_count() {
    let graph = graph_from(&collinear(7, 1.0), 1.0);
    let coloring = color(&graph, ConflictResolution::Recursive);

    let total: usize = coloring.class_sizes().values().sum();
    assert_eq!(total, graph.len());
    assert_eq!(coloring.palette_size(), 2);
}

#[test]
fn conflicting_pairs_reports_shared_colours() {
    let graph = graph_from(UNIT_SQUARE, 1.0);
    let coloring = Coloring::new(vec![0, 0, 1, 1], 2, ConflictResolution::ForbiddenSet);

    assert_eq!(coloring.conflicting_pairs(&graph), vec![(0, 1), (2, 3)]);
    assert_eq!(coloring.summary(&graph).conflicting_pairs, 2);
}

#[test]
fn mismatched_ordering_is_rejected() {
    let square = graph_from(UNIT_SQUARE, 1.0);
    let triangles = graph_from(TWO_TRIANGLES, 1.5);
    let ordering = SmallestLastOrdering::compute(&square).expect("ordering must succeed");

    let err = GreedyColorer::default()
        .color(&triangles, &ordering)
        .expect_err("ordering covers another graph");
    assert_eq!(
        err,
        ColoringError::OrderingMismatch {
            ordered: 4,
            expected: 6
        }
    );
    assert_eq!(err.code(), ColoringErrorCode::OrderingMismatch);
    assert_eq!(err.code().as_str(), "ORDERING_MISMATCH");
}

#[test]
fn summary_reports_strategy_and_classes() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let summary = color(&graph, ConflictResolution::ForbiddenSet).summary(&graph);

    assert_eq!(summary.strategy, "forbidden-set");
    assert_eq!(summary.palette_size, 3);
    assert_eq!(summary.largest_class_size, 2);
    assert_eq!(summary.class_sizes.get(&1), Some(&2));
    assert_eq!(summary.color_of.len(), 6);
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn colourings_are_proper_and_bounded(case in graph_case_strategy()) {
        let graph = case.graph();
        let ordering = SmallestLastOrdering::compute(&graph).expect("ordering must succeed");

        for strategy in [ConflictResolution::Recursive, ConflictResolution::ForbiddenSet] {
            let coloring = GreedyColorer::new(strategy)
                .color(&graph, &ordering)
                .expect("colouring must succeed");
            prop_assert!(coloring.conflicting_pairs(&graph).is_empty());
            prop_assert!(coloring.palette_size() <= ordering.degeneracy() + 1);
            prop_assert!(coloring.colors().iter().all(|&c| c < coloring.palette_size()));
        }
    }

    #[test]
    fn strategies_agree_on_every_vertex(case in graph_case_strategy()) {
        let graph = case.graph();
        let recursive = color(&graph, ConflictResolution::Recursive);
        let forbidden = color(&graph, ConflictResolution::ForbiddenSet);

        prop_assert_eq!(recursive.colors(), forbidden.colors());
        prop_assert_eq!(recursive.palette_size(), forbidden.palette_size());
    }
}
