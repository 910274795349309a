//! Bipartite subgraph induced by two colour classes.

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
};

/// Isolated copy of the edges running between two colour classes.
///
/// Vertices are renumbered locally: members of the first colour come first,
/// then members of the second, each in id order. [`Self::global_id`] maps a
/// local index back to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackbonePair {
    colors: (usize, usize),
    members: Vec<VertexId>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl BackbonePair {
    /// Builds the subgraph for `first` and `second` from `coloring`.
    ///
    /// Every vertex of either colour is included, first colour then second,
    /// each in ascending id. Local ids follow that order. Edges follow the
    /// graph's adjacency order from the first colour's side and are mirrored
    /// onto the second colour's vertices.
    #[expect(
        clippy::indexing_slicing,
        reason = "local indices come from `members`, which sizes `adjacency`"
    )]
    #[must_use]
    pub fn build(graph: &Graph, coloring: &Coloring, first: usize, second: usize) -> Self {
        let members: Vec<VertexId> = coloring
            .class(first)
            .iter()
            .chain(coloring.class(second))
            .copied()
            .collect();
        let mut local = vec![None; graph.len()];
        for (index, &vertex) in members.iter().enumerate() {
            if let Some(slot) = local.get_mut(vertex) {
                *slot = Some(index);
            }
        }

        let mut adjacency = vec![Vec::new(); members.len()];
        let mut edge_count = 0;
        for (index, &vertex) in members.iter().enumerate().take(coloring.class(first).len()) {
            for &neighbor in graph.neighbors(vertex) {
                if coloring.color_of(neighbor) != Some(second) {
                    continue;
                }
                if let Some(other) = local.get(neighbor).copied().flatten() {
                    adjacency[index].push(other);
                    adjacency[other].push(index);
                    edge_count += 1;
                }
            }
        }

        Self {
            colors: (first, second),
            members,
            adjacency,
            edge_count,
        }
    }

    /// Returns the colour pair.
    #[rustfmt::skip]
    #[must_use]
    pub const fn colors(&self) -> (usize, usize) { self.colors }

    /// Returns the number of vertices in the subgraph.
    #[rustfmt::skip]
    #[must_use]
    pub const fn len(&self) -> usize { self.members.len() }

    /// Returns `true` when neither class has members.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Returns the number of two-colour edges.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Maps a local index to its graph vertex id.
    #[must_use]
    pub fn global_id(&self, local: usize) -> Option<VertexId> {
        self.members.get(local).copied()
    }

    /// Returns the local neighbours of a local vertex.
    #[must_use]
    pub fn local_neighbors(&self, local: usize) -> &[usize] {
        self.adjacency.get(local).map_or(&[], Vec::as_slice)
    }

    /// Depth-first traversal from `start`, in pre-order.
    ///
    /// Neighbours are explored in adjacency order, giving the same sequence
    /// as a recursive search. Out-of-range starts yield an empty traversal.
    #[expect(clippy::indexing_slicing, reason = "local indices are below `len()`")]
    #[must_use]
    pub fn traverse(&self, start: usize) -> Vec<usize> {
        if start >= self.len() {
            return Vec::new();
        }
        let mut seen = vec![false; self.len()];
        let mut path = vec![start];
        let mut stack = vec![(start, 0_usize)];
        seen[start] = true;

        while let Some(frame) = stack.last_mut() {
            let (vertex, cursor) = *frame;
            let Some(&next) = self.adjacency[vertex].get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 += 1;
            if !seen[next] {
                seen[next] = true;
                path.push(next);
                stack.push((next, 0));
            }
        }
        path
    }

    /// Returns the longest traversal in the subgraph, as local indices, with
    /// the number of edges inside its component.
    ///
    /// A traversal covers its whole connected component, so only the first
    /// vertex of each component is tried. The earliest component wins ties.
    #[expect(clippy::indexing_slicing, reason = "local indices are below `len()`")]
    #[must_use]
    pub fn longest_traversal(&self) -> Option<(Vec<usize>, usize)> {
        let mut covered = vec![false; self.len()];
        let mut best: Option<(Vec<usize>, usize)> = None;
        for start in 0..self.len() {
            if covered[start] {
                continue;
            }
            let path = self.traverse(start);
            for &vertex in &path {
                covered[vertex] = true;
            }
            if best
                .as_ref()
                .is_none_or(|(current, _)| path.len() > current.len())
            {
                let edges = path
                    .iter()
                    .map(|&vertex| {
                        self.adjacency[vertex]
                            .iter()
                            .filter(|&&other| other > vertex)
                            .count()
                    })
                    .sum();
                best = Some((path, edges));
            }
        }
        best
    }
}
