//! Sweep construction of geometric graphs.
//!
//! Points are sorted once by x in descending order and every point is tested
//! against the points that precede it. Ties keep id order, so the adjacency
//! lists are reproducible. The cost stays quadratic in the worst case.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::{
    Result,
    error::SensorGraphError,
    geometry::Point,
    graph::{Graph, VertexId},
};

/// Builds a [`Graph`] by connecting every pair of points within `radius`.
///
/// # Examples
/// ```
/// use sensorgraph_core::{GeometricGraphBuilder, Point};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let graph = GeometricGraphBuilder::new(1.5)?.build(&square)?;
/// assert_eq!(graph.edge_count(), 6);
/// # Ok::<(), sensorgraph_core::SensorGraphError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricGraphBuilder {
    radius: f64,
}

impl GeometricGraphBuilder {
    /// Creates a builder for the given adjacency radius.
    ///
    /// # Errors
    /// Returns [`SensorGraphError::InvalidRadius`] when `radius` is negative or
    /// not finite.
    pub const fn new(radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(SensorGraphError::InvalidRadius { got: radius });
        }
        Ok(Self { radius })
    }

    /// Returns the configured adjacency radius.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Connects the points. Point `i` becomes vertex `i`.
    ///
    /// Coincident points are adjacent even when the radius is zero.
    ///
    /// # Errors
    /// Returns [`SensorGraphError::InvalidVertexCount`] for an empty slice and
    /// [`SensorGraphError::NonFiniteCoordinate`] when a coordinate is NaN or
    /// infinite.
    #[expect(
        clippy::indexing_slicing,
        reason = "every id in the sweep indexes `points` and `adjacency`"
    )]
    #[instrument(
        name = "core.build_graph",
        err,
        skip(self, points),
        fields(vertices = points.len(), radius = self.radius),
    )]
    pub fn build(&self, points: &[Point]) -> Result<Graph> {
        if points.is_empty() {
            return Err(SensorGraphError::InvalidVertexCount { got: 0 });
        }
        if let Some(vertex) = points.iter().position(|point| !point.is_finite()) {
            return Err(SensorGraphError::NonFiniteCoordinate { vertex });
        }

        let sweep = sweep_order(points);
        let candidates = self.scan_candidates(points, &sweep);

        let mut adjacency: Vec<Vec<VertexId>> = vec![Vec::new(); points.len()];
        for (&vertex, earlier) in sweep.iter().zip(candidates) {
            for other in earlier {
                adjacency[vertex].push(other);
                adjacency[other].push(vertex);
            }
        }

        let graph = Graph::from_adjacency(points, adjacency, self.radius);
        debug!(edges = graph.edge_count(), "sweep completed");
        Ok(graph)
    }

    // For every sweep position, the earlier vertices within the radius in
    // sweep order. Positions are independent, so they may be scanned in
    // parallel; collection keeps sweep order.
    #[expect(
        clippy::indexing_slicing,
        reason = "sweep positions and the ids they hold are in range"
    )]
    fn scan_candidates(&self, points: &[Point], sweep: &[VertexId]) -> Vec<Vec<VertexId>> {
        let scan = |position: usize| {
            let vertex = sweep[position];
            sweep[..position]
                .iter()
                .copied()
                .filter(|&other| other != vertex)
                .filter(|&other| points[vertex].distance(points[other]) <= self.radius)
                .collect::<Vec<_>>()
        };

        #[cfg(feature = "parallel")]
        {
            (0..sweep.len()).into_par_iter().map(scan).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..sweep.len()).map(scan).collect()
        }
    }
}

#[expect(clippy::indexing_slicing, reason = "the order holds only ids of `points`")]
fn sweep_order(points: &[Point]) -> Vec<VertexId> {
    let mut order: Vec<VertexId> = (0..points.len()).collect();
    order.sort_by(|&left, &right| points[right].x().total_cmp(&points[left].x()));
    order
}
