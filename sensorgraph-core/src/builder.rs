//! Builder utilities for configuring an analysis run.
//!
//! Collects the run parameters, resolves the adjacency radius and validates
//! everything before an [`Analysis`] is constructed.

use std::num::NonZeroUsize;

use crate::{
    Result,
    analysis::Analysis,
    backbone::{BackboneExtractor, DEFAULT_CLASS_LIMIT},
    coloring::{ConflictResolution, GreedyColorer},
    error::SensorGraphError,
    geometry::{AreaMode, radius_from_average_degree},
};

/// How densely the sensors are connected.
///
/// # Examples
/// ```
/// use sensorgraph_core::{AreaMode, Density};
///
/// let density = Density::AverageDegree(3.0);
/// let radius = density.radius(4, AreaMode::Disk).expect("density is valid");
/// assert!((radius - 1.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Density {
    /// Connect sensors within this Euclidean distance.
    Radius(f64),
    /// Derive the radius expected to yield this average degree.
    AverageDegree(f64),
}

impl Density {
    /// Resolves the adjacency radius for `sensors` points over `area`.
    ///
    /// # Errors
    /// Returns [`SensorGraphError::InvalidRadius`] or
    /// [`SensorGraphError::InvalidAverageDegree`] when the value is negative
    /// or not finite.
    pub fn radius(self, sensors: usize, area: AreaMode) -> Result<f64> {
        match self {
            Self::Radius(radius) if radius.is_finite() && radius >= 0.0 => Ok(radius),
            Self::Radius(got) => Err(SensorGraphError::InvalidRadius { got }),
            Self::AverageDegree(degree) if degree.is_finite() && degree >= 0.0 => {
                Ok(radius_from_average_degree(degree, sensors, area))
            }
            Self::AverageDegree(got) => Err(SensorGraphError::InvalidAverageDegree { got }),
        }
    }
}

/// Configures and constructs [`Analysis`] instances.
///
/// # Examples
/// ```
/// use sensorgraph_core::{AnalysisBuilder, AreaMode, Density};
///
/// let analysis = AnalysisBuilder::new()
///     .with_vertices(200)
///     .with_area(AreaMode::Disk)
///     .with_density(Density::AverageDegree(8.0))
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(analysis.vertices().get(), 200);
/// assert_eq!(analysis.seed(), Some(42));
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisBuilder {
    vertices: usize,
    area: AreaMode,
    density: Density,
    seed: Option<u64>,
    conflict_resolution: ConflictResolution,
    class_limit: usize,
    run_name: String,
}

impl Default for AnalysisBuilder {
    fn default() -> Self {
        Self {
            vertices: 1_000,
            area: AreaMode::Square,
            density: Density::AverageDegree(32.0),
            seed: None,
            conflict_resolution: ConflictResolution::default(),
            class_limit: DEFAULT_CLASS_LIMIT,
            run_name: "sensorgraph".to_owned(),
        }
    }
}

impl AnalysisBuilder {
    /// Creates a builder populated with default parameters: 1000 sensors in
    /// the unit square at an average degree of 32.
    ///
    /// # Examples
    /// ```
    /// use sensorgraph_core::{AnalysisBuilder, AreaMode, Density};
    ///
    /// let builder = AnalysisBuilder::new();
    /// assert_eq!(builder.vertices(), 1_000);
    /// assert_eq!(builder.area(), AreaMode::Square);
    /// assert_eq!(builder.density(), Density::AverageDegree(32.0));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of sensors to sample.
    #[must_use]
    pub const fn with_vertices(mut self, vertices: usize) -> Self {
        self.vertices = vertices;
        self
    }

    /// Returns the configured number of sensors.
    #[rustfmt::skip]
    #[must_use]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Selects the deployment area.
    #[must_use]
    pub const fn with_area(mut self, area: AreaMode) -> Self {
        self.area = area;
        self
    }

    /// Returns the configured deployment area.
    #[rustfmt::skip]
    #[must_use]
    pub const fn area(&self) -> AreaMode { self.area }

    /// Sets the connection density.
    #[must_use]
    pub const fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Returns the configured connection density.
    #[rustfmt::skip]
    #[must_use]
    pub const fn density(&self) -> Density { self.density }

    /// Fixes the sampling seed. Without one each run draws a fresh seed and
    /// records it in the report.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[rustfmt::skip]
    #[must_use]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Chooses the colouring conflict-resolution strategy.
    ///
    /// # Examples
    /// ```
    /// use sensorgraph_core::{AnalysisBuilder, ConflictResolution};
    ///
    /// let builder =
    ///     AnalysisBuilder::new().with_conflict_resolution(ConflictResolution::ForbiddenSet);
    /// assert_eq!(builder.conflict_resolution(), ConflictResolution::ForbiddenSet);
    /// ```
    #[must_use]
    pub const fn with_conflict_resolution(mut self, strategy: ConflictResolution) -> Self {
        self.conflict_resolution = strategy;
        self
    }

    /// Returns the configured conflict-resolution strategy.
    #[rustfmt::skip]
    #[must_use]
    pub const fn conflict_resolution(&self) -> ConflictResolution { self.conflict_resolution }

    /// Sets how many of the largest colour classes are paired for backbones.
    #[must_use]
    pub const fn with_class_limit(mut self, class_limit: usize) -> Self {
        self.class_limit = class_limit;
        self
    }

    /// Returns the configured class limit.
    #[rustfmt::skip]
    #[must_use]
    pub const fn class_limit(&self) -> usize { self.class_limit }

    /// Labels the run in logs and reports.
    #[must_use]
    pub fn with_run_name(mut self, name: impl Into<String>) -> Self {
        self.run_name = name.into();
        self
    }

    /// Returns the configured run label.
    #[rustfmt::skip]
    #[must_use]
    pub fn run_name(&self) -> &str { &self.run_name }

    /// Validates the configuration and constructs an [`Analysis`].
    ///
    /// # Errors
    /// Returns [`SensorGraphError::InvalidVertexCount`] for zero sensors and
    /// the errors of [`Density::radius`] for an invalid density.
    pub fn build(self) -> Result<Analysis> {
        let vertices = NonZeroUsize::new(self.vertices).ok_or(
            SensorGraphError::InvalidVertexCount { got: self.vertices },
        )?;
        let radius = self.density.radius(vertices.get(), self.area)?;

        Ok(Analysis::new(
            vertices,
            self.area,
            radius,
            self.seed,
            GreedyColorer::new(self.conflict_resolution),
            BackboneExtractor::new().with_class_limit(self.class_limit),
            self.run_name,
        ))
    }
}
