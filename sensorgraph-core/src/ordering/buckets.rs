//! Degree-indexed vertex buckets used by the smallest-last ordering.
//!
//! Each non-empty bucket holds the vertices currently at one degree. Buckets
//! appear when their first vertex arrives and disappear when the last one
//! leaves. Within a bucket vertices are kept in id order, which makes the
//! minimum-degree selection deterministic.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::{Graph, VertexId};

use super::OrderingError;

/// Mutable index from current degree to the vertices holding it.
///
/// # Examples
/// ```
/// use sensorgraph_core::DegreeBuckets;
///
/// let mut buckets = DegreeBuckets::from_degrees([2, 1, 1]);
/// assert_eq!(buckets.lowest_degree(), Some(1));
/// assert_eq!(buckets.bucket(1).collect::<Vec<_>>(), vec![1, 2]);
///
/// buckets.move_vertex(0, 2, 0)?;
/// assert_eq!(buckets.lowest_degree(), Some(0));
/// assert_eq!(buckets.pop_lowest(), Some((0, 0)));
/// # Ok::<(), sensorgraph_core::OrderingError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DegreeBuckets {
    buckets: BTreeMap<usize, BTreeSet<VertexId>>,
    degrees: Vec<Option<usize>>,
    floor: usize,
    len: usize,
}

impl DegreeBuckets {
    /// Seeds the buckets with every vertex of `graph` at its original degree.
    #[must_use]
    pub fn from_graph(graph: &Graph) -> Self {
        Self::from_degrees(graph.vertices().iter().map(|vertex| vertex.original_degree()))
    }

    /// Seeds the buckets from per-vertex degrees; the i-th degree belongs to
    /// vertex `i`.
    #[must_use]
    pub fn from_degrees(degrees: impl IntoIterator<Item = usize>) -> Self {
        let mut buckets: BTreeMap<usize, BTreeSet<VertexId>> = BTreeMap::new();
        let degrees: Vec<Option<usize>> = degrees
            .into_iter()
            .enumerate()
            .map(|(vertex, degree)| {
                buckets.entry(degree).or_default().insert(vertex);
                Some(degree)
            })
            .collect();
        let floor = buckets.keys().next().copied().unwrap_or(0);
        Self {
            len: degrees.len(),
            buckets,
            degrees,
            floor,
        }
    }

    /// Returns the number of vertices still held.
    #[rustfmt::skip]
    #[must_use]
    pub const fn len(&self) -> usize { self.len }

    /// Returns `true` once every vertex has been taken out.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the last minimum degree observed; a lower bound hint for the
    /// next minimum search.
    #[rustfmt::skip]
    #[must_use]
    pub const fn floor(&self) -> usize { self.floor }

    /// Returns the current degree of `vertex`, or `None` once it has been
    /// removed or when it was never seeded.
    #[must_use]
    pub fn degree_of(&self, vertex: VertexId) -> Option<usize> {
        self.degrees.get(vertex).copied().flatten()
    }

    /// Iterates over the vertices at `degree` in id order. Unknown degrees
    /// yield an empty iterator.
    pub fn bucket(&self, degree: usize) -> impl Iterator<Item = VertexId> + '_ {
        self.buckets.get(&degree).into_iter().flatten().copied()
    }

    /// Returns the smallest degree `>= degree` that has a non-empty bucket.
    #[must_use]
    pub fn min_nonempty_at_or_above(&self, degree: usize) -> Option<usize> {
        self.buckets.range(degree..).next().map(|(&found, _)| found)
    }

    /// Locates the minimum non-empty degree, scanning upward from the floor,
    /// and records it as the new floor.
    pub fn lowest_degree(&mut self) -> Option<usize> {
        let found = self
            .min_nonempty_at_or_above(self.floor)
            .or_else(|| self.min_nonempty_at_or_above(0))?;
        self.floor = found;
        Some(found)
    }

    /// Removes and returns the lowest-id vertex of minimum degree together
    /// with that degree.
    pub fn pop_lowest(&mut self) -> Option<(VertexId, usize)> {
        let degree = self.lowest_degree()?;
        let bucket = self.buckets.get_mut(&degree)?;
        let vertex = bucket.pop_first()?;
        if bucket.is_empty() {
            self.buckets.remove(&degree);
        }
        if let Some(slot) = self.degrees.get_mut(vertex) {
            *slot = None;
        }
        self.len -= 1;
        Some((vertex, degree))
    }

    /// Moves `vertex` from the `from` bucket into the `to` bucket.
    ///
    /// # Errors
    /// Returns [`OrderingError::UnknownVertex`] for ids that were never
    /// seeded, [`OrderingError::RemovedVertex`] when the vertex was already
    /// taken out, and [`OrderingError::VertexNotInBucket`] when the vertex is
    /// not currently at degree `from`.
    pub fn move_vertex(
        &mut self,
        vertex: VertexId,
        from: usize,
        to: usize,
    ) -> Result<(), OrderingError> {
        let current = self.current_degree(vertex)?;
        let bucket = self
            .buckets
            .get_mut(&from)
            .filter(|_| current == from)
            .ok_or(OrderingError::VertexNotInBucket {
                vertex,
                degree: from,
            })?;
        if !bucket.remove(&vertex) {
            return Err(OrderingError::VertexNotInBucket {
                vertex,
                degree: from,
            });
        }
        if bucket.is_empty() {
            self.buckets.remove(&from);
        }
        self.buckets.entry(to).or_default().insert(vertex);
        if let Some(slot) = self.degrees.get_mut(vertex) {
            *slot = Some(to);
        }
        self.floor = self.floor.min(to);
        Ok(())
    }

    /// Lowers the degree of `vertex` by one and returns the new degree.
    ///
    /// # Errors
    /// Returns [`OrderingError::DegreeUnderflow`] when the vertex is already at
    /// degree zero, plus the errors of [`Self::move_vertex`].
    pub fn decrement(&mut self, vertex: VertexId) -> Result<usize, OrderingError> {
        let current = self.current_degree(vertex)?;
        let lowered = current
            .checked_sub(1)
            .ok_or(OrderingError::DegreeUnderflow { vertex })?;
        self.move_vertex(vertex, current, lowered)?;
        Ok(lowered)
    }

    fn current_degree(&self, vertex: VertexId) -> Result<usize, OrderingError> {
        match self.degrees.get(vertex) {
            None => Err(OrderingError::UnknownVertex { vertex }),
            Some(None) => Err(OrderingError::RemovedVertex { vertex }),
            Some(Some(degree)) => Ok(*degree),
        }
    }
}
