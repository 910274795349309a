//! Benchmark support crate for sensorgraph.
//!
//! Provides parameter types and seeded graph fixtures shared by the Criterion
//! benchmarks for graph construction and the analysis stages.

use std::fmt;

use sensorgraph_core::{
    AreaMode, GeometricGraphBuilder, Graph, Point, PointSampler, Result,
    radius_from_average_degree,
};

/// Seed used for every benchmark fixture.
pub const SEED: u64 = 42;

/// Parameters for one benchmark input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphBenchParams {
    /// Number of sensors.
    pub vertices: usize,
    /// Target average degree.
    pub average_degree: f64,
    /// Deployment area.
    pub area: AreaMode,
}

impl GraphBenchParams {
    /// Square-area parameters.
    #[must_use]
    pub const fn square(vertices: usize, average_degree: f64) -> Self {
        Self {
            vertices,
            average_degree,
            area: AreaMode::Square,
        }
    }

    /// Radius expected to produce the target average degree.
    #[must_use]
    pub fn radius(&self) -> f64 {
        radius_from_average_degree(self.average_degree, self.vertices, self.area)
    }

    /// Seeded sensor positions.
    #[must_use]
    pub fn points(&self) -> Vec<Point> {
        PointSampler::seeded(self.area, SEED).sample(self.vertices)
    }

    /// Builds the seeded graph.
    ///
    /// # Errors
    /// Propagates graph construction errors for invalid parameters.
    pub fn graph(&self) -> Result<Graph> {
        GeometricGraphBuilder::new(self.radius())?.build(&self.points())
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},n={},d={}",
            self.area.as_str(),
            self.vertices,
            self.average_degree
        )
    }
}

/// Input sizes shared by the benchmarks.
pub const BENCH_INPUTS: &[GraphBenchParams] = &[
    GraphBenchParams::square(1_000, 32.0),
    GraphBenchParams::square(4_000, 64.0),
    GraphBenchParams {
        vertices: 4_000,
        average_degree: 64.0,
        area: AreaMode::Disk,
    },
];
