//! Shared test utilities for `sensorgraph-core`.

use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;
use sensorgraph_test_support::property::ProptestRunProfile;

use crate::{AreaMode, GeometricGraphBuilder, Graph, Point, PointSampler};

/// Builds a proptest configuration honouring `SENSORGRAPH_PBT_CASES`.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

/// Compares computed floats with an absolute tolerance.
#[expect(
    clippy::float_arithmetic,
    reason = "tolerance comparison needs the difference of two floats"
)]
#[must_use]
pub(crate) fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

/// Converts fixture coordinates into points.
#[must_use]
pub(crate) fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Builds a graph from fixture coordinates, panicking on invalid input.
#[must_use]
pub(crate) fn graph_from(coords: &[(f64, f64)], radius: f64) -> Graph {
    GeometricGraphBuilder::new(radius)
        .and_then(|builder| builder.build(&points(coords)))
        .unwrap_or_else(|err| panic!("fixture graph must build: {err}"))
}

/// Random geometric graph parameters drawn by proptest.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GraphCase {
    pub(crate) seed: u64,
    pub(crate) vertices: usize,
    pub(crate) radius: f64,
    pub(crate) mode: AreaMode,
}

impl GraphCase {
    pub(crate) fn points(self) -> Vec<Point> {
        PointSampler::seeded(self.mode, self.seed).sample(self.vertices)
    }

    pub(crate) fn graph(self) -> Graph {
        GeometricGraphBuilder::new(self.radius)
            .and_then(|builder| builder.build(&self.points()))
            .unwrap_or_else(|err| panic!("generated graph must build: {err}"))
    }
}

/// Strategy producing small random geometric graphs of varying density.
pub(crate) fn graph_case_strategy() -> impl Strategy<Value = GraphCase> {
    (
        any::<u64>(),
        1_usize..48,
        0.0_f64..0.6,
        prop_oneof![Just(AreaMode::Square), Just(AreaMode::Disk)],
    )
        .prop_map(|(seed, vertices, radius, mode)| GraphCase {
            seed,
            vertices,
            radius,
            mode,
        })
}
