//! Smallest-last (degeneracy) vertex ordering.
//!
//! Vertices are removed one at a time, always choosing a vertex of minimum
//! degree in the graph that remains. The removal works on a private view of
//! the graph: removal flags and current degrees live in this module, so the
//! canonical [`Graph`] stays intact for the colouring stage.
//!
//! Before each selection the engine checks whether the remaining vertices
//! form a complete subgraph. The first time they do, the remaining count is
//! recorded as the terminal clique size. Because no remaining vertex can have
//! a degree above `remaining - 1`, the check reduces to comparing the minimum
//! bucket with that bound.

mod buckets;

use tracing::{debug, info, instrument};

pub use self::buckets::DegreeBuckets;

use crate::{
    graph::{Graph, VertexId},
    report::OrderingSummary,
};

/// Errors raised when the ordering engine detects a broken invariant.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderingError {
    /// A bucket operation referenced a vertex that was never seeded.
    #[error("vertex {vertex} is not tracked by the degree buckets")]
    UnknownVertex {
        /// The unknown vertex id.
        vertex: VertexId,
    },
    /// A bucket operation referenced a vertex that was already removed.
    #[error("vertex {vertex} was already removed from the ordering")]
    RemovedVertex {
        /// The removed vertex id.
        vertex: VertexId,
    },
    /// A vertex was expected in a bucket that does not hold it.
    #[error("vertex {vertex} is not in the degree-{degree} bucket")]
    VertexNotInBucket {
        /// The vertex id that was looked up.
        vertex: VertexId,
        /// The degree bucket that was searched.
        degree: usize,
    },
    /// A degree counter would have gone below zero.
    #[error("degree of vertex {vertex} would become negative")]
    DegreeUnderflow {
        /// The vertex whose degree underflowed.
        vertex: VertexId,
    },
    /// Every bucket was empty while vertices were still waiting for removal.
    #[error("degree buckets exhausted with {remaining} vertices still unordered")]
    ExhaustedBuckets {
        /// Number of vertices left without a bucket.
        remaining: usize,
    },
    /// The elimination sequence does not cover every vertex.
    #[error("ordering holds {ordered} vertices but the graph has {expected}")]
    IncompleteOrdering {
        /// Number of vertices that were ordered.
        ordered: usize,
        /// Number of vertices in the graph.
        expected: usize,
    },
}

impl OrderingError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> OrderingErrorCode {
        match self {
            Self::UnknownVertex { .. } => OrderingErrorCode::UnknownVertex,
            Self::RemovedVertex { .. } => OrderingErrorCode::RemovedVertex,
            Self::VertexNotInBucket { .. } => OrderingErrorCode::VertexNotInBucket,
            Self::DegreeUnderflow { .. } => OrderingErrorCode::DegreeUnderflow,
            Self::ExhaustedBuckets { .. } => OrderingErrorCode::ExhaustedBuckets,
            Self::IncompleteOrdering { .. } => OrderingErrorCode::IncompleteOrdering,
        }
    }
}

/// Machine-readable error codes for [`OrderingError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OrderingErrorCode {
    /// A bucket operation referenced a vertex that was never seeded.
    UnknownVertex,
    /// A bucket operation referenced a vertex that was already removed.
    RemovedVertex,
    /// A vertex was expected in a bucket that does not hold it.
    VertexNotInBucket,
    /// A degree counter would have gone below zero.
    DegreeUnderflow,
    /// Every bucket was empty while vertices remained.
    ExhaustedBuckets,
    /// The elimination sequence does not cover every vertex.
    IncompleteOrdering,
}

impl OrderingErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::RemovedVertex => "REMOVED_VERTEX",
            Self::VertexNotInBucket => "VERTEX_NOT_IN_BUCKET",
            Self::DegreeUnderflow => "DEGREE_UNDERFLOW",
            Self::ExhaustedBuckets => "EXHAUSTED_BUCKETS",
            Self::IncompleteOrdering => "INCOMPLETE_ORDERING",
        }
    }
}

/// Elimination order produced by repeatedly removing a minimum-degree vertex.
///
/// The sequence is in removal order; colouring walks it backwards.
///
/// # Examples
/// ```
/// use sensorgraph_core::{GeometricGraphBuilder, Point, SmallestLastOrdering};
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let graph = GeometricGraphBuilder::new(1.5)?.build(&square)?;
/// let ordering = SmallestLastOrdering::compute(&graph)?;
/// assert_eq!(ordering.sequence(), &[0, 1, 2, 3]);
/// assert_eq!(ordering.degree_at_deletion(), &[3, 2, 1, 0]);
/// assert_eq!(ordering.terminal_clique_size(), Some(4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmallestLastOrdering {
    sequence: Vec<VertexId>,
    degree_at_deletion: Vec<usize>,
    original_degree: Vec<usize>,
    terminal_clique_size: Option<usize>,
}

impl SmallestLastOrdering {
    /// Computes the smallest-last ordering of `graph`.
    ///
    /// Ties between vertices of equal degree go to the lowest id.
    ///
    /// # Errors
    /// Returns [`OrderingError`] when the degree bookkeeping breaks an
    /// invariant; the run is abandoned without partial output.
    #[instrument(name = "core.order", err, skip(graph), fields(vertices = graph.len()))]
    pub fn compute(graph: &Graph) -> Result<Self, OrderingError> {
        let expected = graph.len();
        let mut buckets = DegreeBuckets::from_graph(graph);
        let mut ordering = Self {
            sequence: Vec::with_capacity(expected),
            degree_at_deletion: Vec::with_capacity(expected),
            original_degree: Vec::with_capacity(expected),
            terminal_clique_size: None,
        };

        while !buckets.is_empty() {
            let remaining = buckets.len();
            let min_degree = buckets
                .lowest_degree()
                .ok_or(OrderingError::ExhaustedBuckets { remaining })?;
            if ordering.terminal_clique_size.is_none() && min_degree + 1 == remaining {
                debug!(size = remaining, "terminal clique detected");
                ordering.terminal_clique_size = Some(remaining);
            }

            let (vertex, degree) = buckets
                .pop_lowest()
                .ok_or(OrderingError::ExhaustedBuckets { remaining })?;
            ordering.sequence.push(vertex);
            ordering.degree_at_deletion.push(degree);
            ordering.original_degree.push(graph.degree(vertex));

            for &neighbor in graph.neighbors(vertex) {
                if buckets.degree_of(neighbor).is_some() {
                    buckets.decrement(neighbor)?;
                }
            }
        }

        if ordering.sequence.len() != expected {
            return Err(OrderingError::IncompleteOrdering {
                ordered: ordering.sequence.len(),
                expected,
            });
        }

        info!(
            degeneracy = ordering.degeneracy(),
            terminal_clique = ordering.terminal_clique_size,
            "smallest-last ordering completed"
        );
        Ok(ordering)
    }

    /// Returns the vertices in removal order.
    #[rustfmt::skip]
    #[must_use]
    pub fn sequence(&self) -> &[VertexId] { &self.sequence }

    /// Returns the degree each vertex held when it was removed, parallel to
    /// [`Self::sequence`].
    #[rustfmt::skip]
    #[must_use]
    pub fn degree_at_deletion(&self) -> &[usize] { &self.degree_at_deletion }

    /// Returns the construction-time degree of each removed vertex, parallel
    /// to [`Self::sequence`].
    #[rustfmt::skip]
    #[must_use]
    pub fn original_degree(&self) -> &[usize] { &self.original_degree }

    /// Returns the size of the first complete subgraph left during removal.
    #[rustfmt::skip]
    #[must_use]
    pub const fn terminal_clique_size(&self) -> Option<usize> { self.terminal_clique_size }

    /// Returns the number of ordered vertices.
    #[rustfmt::skip]
    #[must_use]
    pub const fn len(&self) -> usize { self.sequence.len() }

    /// Returns `true` when nothing was ordered.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.sequence.is_empty() }

    /// Returns the largest degree seen at removal time: the graph's degeneracy.
    #[must_use]
    pub fn degeneracy(&self) -> usize {
        self.degree_at_deletion.iter().copied().max().unwrap_or(0)
    }

    /// Iterates over the vertices in colouring order (reverse removal order).
    pub fn coloring_order(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.sequence.iter().rev().copied()
    }

    /// Summarises the ordering for reporting.
    #[must_use]
    pub fn summary(&self) -> OrderingSummary {
        OrderingSummary {
            elimination_sequence: self.sequence.clone(),
            degree_at_deletion: self.degree_at_deletion.clone(),
            original_degree: self.original_degree.clone(),
            terminal_clique_size: self.terminal_clique_size,
            max_degree_when_deleted: self.degeneracy(),
        }
    }
}

#[cfg(test)]
mod tests;
