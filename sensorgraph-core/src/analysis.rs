//! Pipeline orchestration for sensor network analysis.
//!
//! Provides the [`Analysis`] entry point which samples sensors, builds the
//! geometric graph and runs ordering, colouring and backbone extraction in
//! sequence.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    backbone::BackboneExtractor,
    coloring::{ConflictResolution, GreedyColorer},
    geometry::{AreaMode, Point},
    graph::GeometricGraphBuilder,
    ordering::SmallestLastOrdering,
    report::AnalysisReport,
    sampling::PointSampler,
};

/// Entry point for running the analysis pipeline.
///
/// # Examples
/// ```
/// use sensorgraph_core::{AnalysisBuilder, Density, Point};
///
/// let analysis = AnalysisBuilder::new()
///     .with_density(Density::Radius(1.0))
///     .with_run_name("square")
///     .build()
///     .expect("builder must succeed");
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let report = analysis.run_with_points(&square).expect("run must succeed");
/// assert_eq!(report.graph.edge_count, 4);
/// assert_eq!(report.coloring.palette_size, 2);
/// assert_eq!(report.ordering.terminal_clique_size, Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Analysis {
    vertices: NonZeroUsize,
    area: AreaMode,
    radius: f64,
    seed: Option<u64>,
    colorer: GreedyColorer,
    extractor: BackboneExtractor,
    run_name: String,
}

impl Analysis {
    pub(crate) const fn new(
        vertices: NonZeroUsize,
        area: AreaMode,
        radius: f64,
        seed: Option<u64>,
        colorer: GreedyColorer,
        extractor: BackboneExtractor,
        run_name: String,
    ) -> Self {
        Self {
            vertices,
            area,
            radius,
            seed,
            colorer,
            extractor,
            run_name,
        }
    }

    /// Returns the number of sensors sampled by [`Self::run`].
    #[rustfmt::skip]
    #[must_use]
    pub const fn vertices(&self) -> NonZeroUsize { self.vertices }

    /// Returns the deployment area.
    #[rustfmt::skip]
    #[must_use]
    pub const fn area(&self) -> AreaMode { self.area }

    /// Returns the resolved adjacency radius.
    #[rustfmt::skip]
    #[must_use]
    pub const fn radius(&self) -> f64 { self.radius }

    /// Returns the fixed sampling seed, if one was configured.
    #[rustfmt::skip]
    #[must_use]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Returns the colouring conflict-resolution strategy.
    #[rustfmt::skip]
    #[must_use]
    pub const fn conflict_resolution(&self) -> ConflictResolution { self.colorer.strategy() }

    /// Returns the number of largest colour classes paired for backbones.
    #[rustfmt::skip]
    #[must_use]
    pub const fn class_limit(&self) -> usize { self.extractor.class_limit() }

    /// Returns the run label.
    #[rustfmt::skip]
    #[must_use]
    pub fn run_name(&self) -> &str { &self.run_name }

    /// Samples the configured number of sensors and analyses them.
    ///
    /// Without a configured seed a fresh one is drawn; the seed used is
    /// recorded in the report either way.
    ///
    /// # Errors
    /// Propagates the errors of [`Self::run_with_points`].
    pub fn run(&self) -> Result<AnalysisReport> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let points = PointSampler::seeded(self.area, seed).sample(self.vertices.get());
        self.analyse(&points, Some(seed))
    }

    /// Analyses caller-supplied sensor positions. Point `i` becomes vertex
    /// `i`; the configured vertex count is ignored.
    ///
    /// # Errors
    /// Returns [`crate::SensorGraphError::InvalidVertexCount`] for an empty
    /// slice, [`crate::SensorGraphError::NonFiniteCoordinate`] for NaN or
    /// infinite coordinates, and the ordering or colouring variants when a
    /// stage detects a broken invariant.
    pub fn run_with_points(&self, points: &[Point]) -> Result<AnalysisReport> {
        self.analyse(points, None)
    }

    #[instrument(
        name = "core.run",
        err,
        skip(self, points),
        fields(
            run = %self.run_name,
            vertices = points.len(),
            area = self.area.as_str(),
            radius = self.radius,
            seed = ?seed,
        ),
    )]
    fn analyse(&self, points: &[Point], seed: Option<u64>) -> Result<AnalysisReport> {
        let graph = GeometricGraphBuilder::new(self.radius)?.build(points)?;
        let ordering = SmallestLastOrdering::compute(&graph)?;
        let coloring = self.colorer.color(&graph, &ordering)?;
        let backbones = self.extractor.extract(&graph, &coloring);

        let report = AnalysisReport {
            run_name: self.run_name.clone(),
            seed,
            area: self.area,
            graph: graph.summary(),
            ordering: ordering.summary(),
            coloring: coloring.summary(&graph),
            backbones,
        };
        info!(
            edges = report.graph.edge_count,
            palette = report.coloring.palette_size,
            terminal_clique = report.ordering.terminal_clique_size,
            "analysis completed"
        );
        Ok(report)
    }
}
