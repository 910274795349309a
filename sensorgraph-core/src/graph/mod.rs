//! Immutable geometric graph shared by every analysis stage.
//!
//! Vertices own their coordinate and adjacency list only. Algorithm state
//! such as current degrees, removal flags or colours lives in the stage that
//! needs it, so the canonical graph is never mutated after construction.

mod builder;

use std::collections::BTreeMap;

pub use self::builder::GeometricGraphBuilder;

use crate::{geometry::Point, report::GraphSummary};

/// Identifier of a vertex: its index in the point slice the graph was built from.
pub type VertexId = usize;

/// A sensor and the sensors within its adjacency radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    id: VertexId,
    point: Point,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    /// Returns the vertex identifier.
    #[rustfmt::skip]
    #[must_use]
    pub const fn id(&self) -> VertexId { self.id }

    /// Returns the sensor location.
    #[rustfmt::skip]
    #[must_use]
    pub const fn point(&self) -> Point { self.point }

    /// Returns the adjacent vertex ids in the order the sweep discovered them.
    #[rustfmt::skip]
    #[must_use]
    pub fn neighbors(&self) -> &[VertexId] { &self.neighbors }

    /// Returns the degree recorded at construction time.
    #[rustfmt::skip]
    #[must_use]
    pub const fn original_degree(&self) -> usize { self.neighbors.len() }
}

/// Undirected graph connecting sensors closer than the adjacency radius.
///
/// Adjacency is symmetric and free of self-loops.
///
/// # Examples
/// ```
/// use sensorgraph_core::{GeometricGraphBuilder, Point};
///
/// let points = [Point::new(0.0, 0.0), Point::new(0.5, 0.0), Point::new(2.0, 0.0)];
/// let graph = GeometricGraphBuilder::new(1.0)?.build(&points)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert!(graph.is_adjacent(0, 1));
/// assert_eq!(graph.degree(2), 0);
/// # Ok::<(), sensorgraph_core::SensorGraphError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertices: Vec<Vertex>,
    radius: f64,
    edge_count: usize,
}

impl Graph {
    fn from_adjacency(points: &[Point], adjacency: Vec<Vec<VertexId>>, radius: f64) -> Self {
        let edge_count = adjacency
            .iter()
            .enumerate()
            .map(|(id, neighbors)| neighbors.iter().filter(|&&other| other > id).count())
            .sum();
        let vertices = points
            .iter()
            .zip(adjacency)
            .enumerate()
            .map(|(id, (&point, neighbors))| Vertex {
                id,
                point,
                neighbors,
            })
            .collect();
        Self {
            vertices,
            radius,
            edge_count,
        }
    }

    /// Returns the number of vertices.
    #[rustfmt::skip]
    #[must_use]
    pub const fn len(&self) -> usize { self.vertices.len() }

    /// Returns `true` when the graph holds no vertices.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.vertices.is_empty() }

    /// Returns the adjacency radius the graph was built with.
    #[rustfmt::skip]
    #[must_use]
    pub const fn radius(&self) -> f64 { self.radius }

    /// Returns the number of undirected edges.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns every vertex, indexed by id.
    #[rustfmt::skip]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] { &self.vertices }

    /// Looks up a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Returns the neighbours of `id`, or an empty slice for unknown ids.
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.vertices.get(id).map_or(&[], Vertex::neighbors)
    }

    /// Returns the degree of `id`, or zero for unknown ids.
    #[must_use]
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).len()
    }

    /// Returns `true` when `left` and `right` share an edge.
    #[must_use]
    pub fn is_adjacent(&self, left: VertexId, right: VertexId) -> bool {
        self.neighbors(left).contains(&right)
    }

    /// Counts how many vertices hold each degree.
    #[must_use]
    pub fn degree_frequency(&self) -> BTreeMap<usize, usize> {
        let mut frequency = BTreeMap::new();
        for vertex in &self.vertices {
            *frequency.entry(vertex.original_degree()).or_insert(0) += 1;
        }
        frequency
    }

    /// Returns the ids of the vertices holding the minimum and the maximum
    /// degree, in that order.
    #[must_use]
    pub fn extreme_degree_vertices(&self) -> (Vec<VertexId>, Vec<VertexId>) {
        let (min, max) = self.degree_bounds();
        let with_degree = |degree: usize| {
            self.vertices
                .iter()
                .filter(|vertex| vertex.original_degree() == degree)
                .map(Vertex::id)
                .collect::<Vec<_>>()
        };
        (with_degree(min), with_degree(max))
    }

    fn degree_bounds(&self) -> (usize, usize) {
        let mut degrees = self.vertices.iter().map(Vertex::original_degree);
        let first = degrees.next().unwrap_or(0);
        degrees.fold((first, first), |(min, max), degree| {
            (min.min(degree), max.max(degree))
        })
    }

    /// Mean degree, `2E / N`, or zero for an empty graph.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "the mean degree is reported as a real number"
    )]
    #[must_use]
    pub fn average_degree(&self) -> f64 {
        if self.vertices.is_empty() {
            0.0
        } else {
            (2 * self.edge_count) as f64 / self.vertices.len() as f64
        }
    }

    /// Summarises degree statistics for reporting.
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        let (min_degree, max_degree) = self.degree_bounds();
        let average_degree = self.average_degree();
        let (min_degree_vertices, max_degree_vertices) = self.extreme_degree_vertices();
        GraphSummary {
            vertex_count: self.vertices.len(),
            edge_count: self.edge_count,
            radius: self.radius,
            average_degree,
            min_degree,
            max_degree,
            min_degree_vertices,
            max_degree_vertices,
            degree_frequency: self.degree_frequency(),
        }
    }
}

#[cfg(test)]
mod tests;
