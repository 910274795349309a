//! Unit and property tests for backbone extraction.

use proptest::prelude::*;
use rstest::rstest;
use sensorgraph_test_support::fixtures::{TWO_TRIANGLES, UNIT_SQUARE, collinear};

use crate::{
    BackboneExtractor, Coloring, DEFAULT_CLASS_LIMIT, Graph, GreedyColorer, SmallestLastOrdering,
    test_utils::{approx_eq, graph_case_strategy, graph_from, suite_proptest_config},
};

fn color(graph: &Graph) -> Coloring {
    let ordering = SmallestLastOrdering::compute(graph).expect("ordering must succeed");
    GreedyColorer::default()
        .color(graph, &ordering)
        .expect("colouring must succeed")
}

#[test]
fn separated_triangles_yield_one_edge_backbones() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let coloring = color(&graph);
    let summary = BackboneExtractor::new().extract(&graph, &coloring);

    assert_eq!(summary.pairs_examined, 3);
    let largest = summary.largest.expect("largest backbone exists");
    assert_eq!(largest.colors, (0, 1));
    assert_eq!(largest.traversal, vec![2, 1]);
    assert_eq!(largest.vertices, 2);
    assert_eq!(largest.edge_count, 1);
    assert!(approx_eq(largest.domination, 33.333_333_333));

    let second = summary.second_largest.expect("second backbone exists");
    assert_eq!(second.colors, (0, 2));
    assert_eq!(second.traversal, vec![2, 0]);
}

#[test]
fn backbones_never_cross_between_components() {
    let graph = graph_from(TWO_TRIANGLES, 1.5);
    let summary = BackboneExtractor::new().extract(&graph, &color(&graph));

    for report in [summary.largest, summary.second_largest].into_iter().flatten() {
        let left = report.traversal.iter().all(|&v| v < 3);
        let right = report.traversal.iter().all(|&v| v >= 3);
        assert!(left || right, "traversal {:?} spans both triangles", report.traversal);
    }
}

#[test]
fn single_colour_class_has_no_backbone() {
    let graph = graph_from(&collinear(4, 1.0), 0.0);
    let summary = BackboneExtractor::new().extract(&graph, &color(&graph));

    assert_eq!(summary.pairs_examined, 0);
    assert!(summary.largest.is_none());
    assert!(summary.second_largest.is_none());
}

#[test]
fn four_cycle_backbone_covers_every_vertex() {
    let graph = graph_from(UNIT_SQUARE, 1.0);
    let summary = BackboneExtractor::new().extract(&graph, &color(&graph));

    let largest = summary.largest.expect("two classes exist");
    assert_eq!(largest.vertices, 4);
    assert_eq!(largest.edge_count, 4);
    assert!(approx_eq(largest.domination, 100.0));
    assert!(summary.second_largest.is_none());
}

#[rstest]
#[case::default_limit(DEFAULT_CLASS_LIMIT, 6)]
#[case::three_classes(3, 3)]
#[case::two_classes(2, 1)]
#[case::one_class(1, 0)]
fn class_limit_bounds_the_pairs(#[case] limit: usize, #[case] expected_pairs: usize) {
    let graph = graph_from(&collinear(12, 1.0), 3.0);
    let coloring = color(&graph);
    assert!(coloring.color_count() >= DEFAULT_CLASS_LIMIT);

    let extractor = BackboneExtractor::new().with_class_limit(limit);
    assert_eq!(extractor.candidate_pairs(&coloring).len(), expected_pairs);
}

#[test]
fn candidate_pairs_rank_larger_classes_first() {
    let graph = graph_from(&collinear(12, 1.0), 3.0);
    let coloring = color(&graph);
    let ranked = coloring.colors_by_class_size();
    let pairs = BackboneExtractor::new().candidate_pairs(&coloring);

    assert_eq!(pairs[0], (ranked[0], ranked[1]));
    for &(first, second) in &pairs {
        assert!(coloring.class(first).len() >= coloring.class(second).len());
    }
}

proptest! {
    #![proptest_config(suite_proptest_config(48))]

    #[test]
    fn backbones_respect_their_bounds(case in graph_case_strategy()) {
        let graph = case.graph();
        let coloring = color(&graph);
        let summary = BackboneExtractor::new().extract(&graph, &coloring);

        for report in [&summary.largest, &summary.second_largest].into_iter().flatten() {
            let (first, second) = report.colors;
            prop_assert!(first != second);
            prop_assert!(
                report.vertices <= coloring.class(first).len() + coloring.class(second).len()
            );
            prop_assert!((0.0..=100.0).contains(&report.domination));
            prop_assert_eq!(report.vertices, report.traversal.len());
            prop_assert!(report.edge_count + 1 >= report.vertices);

            let mut unique = report.traversal.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), report.traversal.len());

            for window in report.traversal.windows(2) {
                let colors = (coloring.color_of(window[0]), coloring.color_of(window[1]));
                prop_assert!(colors.0 == Some(first) || colors.0 == Some(second));
                prop_assert!(colors.1 == Some(first) || colors.1 == Some(second));
            }
        }

        if let (Some(largest), Some(second)) = (&summary.largest, &summary.second_largest) {
            prop_assert!(largest.vertices >= second.vertices);
            prop_assert!(largest.colors != second.colors);
        }
    }
}
