//! Backbone extraction over pairs of large colour classes.
//!
//! Each colour class is an independent set, so the union of two classes
//! restricted to the edges between them is bipartite. A depth-first traversal
//! of such a subgraph forms a connected backbone in which every vertex of the
//! two classes is either on the backbone or adjacent to it. The extractor
//! examines every unordered pair among the largest classes and keeps the two
//! largest traversals.

mod subgraph;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

pub use self::subgraph::BackbonePair;

use crate::{
    coloring::Coloring,
    graph::{Graph, VertexId},
    report::{BackboneReport, BackboneSummary},
};

/// Number of largest colour classes paired by default.
pub const DEFAULT_CLASS_LIMIT: usize = 4;

/// A depth-first traversal through one two-colour subgraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Backbone {
    colors: (usize, usize),
    traversal: Vec<VertexId>,
    edge_count: usize,
    domination: f64,
}

impl Backbone {
    /// Returns the colour pair the backbone was drawn from.
    #[rustfmt::skip]
    #[must_use]
    pub const fn colors(&self) -> (usize, usize) { self.colors }

    /// Returns the vertices in visit order.
    #[rustfmt::skip]
    #[must_use]
    pub fn traversal(&self) -> &[VertexId] { &self.traversal }

    /// Returns the number of vertices on the backbone.
    #[rustfmt::skip]
    #[must_use]
    pub const fn vertex_count(&self) -> usize { self.traversal.len() }

    /// Returns the number of distinct edges inside the traversed component.
    #[rustfmt::skip]
    #[must_use]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the share of all graph vertices on the backbone, as a
    /// percentage.
    #[rustfmt::skip]
    #[must_use]
    pub const fn domination(&self) -> f64 { self.domination }

    /// Converts the backbone into its report form.
    #[must_use]
    pub fn report(&self) -> BackboneReport {
        BackboneReport {
            colors: self.colors,
            vertices: self.vertex_count(),
            edge_count: self.edge_count,
            domination: self.domination,
            traversal: self.traversal.clone(),
        }
    }
}

/// Searches bipartite subgraphs of the largest colour classes for backbones.
///
/// # Examples
/// ```
/// use sensorgraph_core::{
///     BackboneExtractor, GeometricGraphBuilder, GreedyColorer, Point, SmallestLastOrdering,
/// };
///
/// let path = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
/// let graph = GeometricGraphBuilder::new(1.0)?.build(&path)?;
/// let ordering = SmallestLastOrdering::compute(&graph)?;
/// let coloring = GreedyColorer::default().color(&graph, &ordering)?;
///
/// let summary = BackboneExtractor::new().extract(&graph, &coloring);
/// let largest = summary.largest.expect("two colour classes exist");
/// assert_eq!(largest.vertices, 3);
/// assert_eq!(largest.edge_count, 2);
/// assert!(summary.second_largest.is_none());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackboneExtractor {
    class_limit: usize,
}

impl Default for BackboneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl BackboneExtractor {
    /// Creates an extractor pairing the [`DEFAULT_CLASS_LIMIT`] largest classes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            class_limit: DEFAULT_CLASS_LIMIT,
        }
    }

    /// Sets how many of the largest colour classes take part in pairing.
    #[must_use]
    pub const fn with_class_limit(mut self, class_limit: usize) -> Self {
        self.class_limit = class_limit;
        self
    }

    /// Returns the configured class limit.
    #[rustfmt::skip]
    #[must_use]
    pub const fn class_limit(&self) -> usize { self.class_limit }

    /// Lists the colour pairs to examine, in evaluation order.
    ///
    /// Classes are ranked by size, larger first with the smaller colour
    /// winning ties; each pair puts the higher-ranked colour first.
    #[must_use]
    pub fn candidate_pairs(&self, coloring: &Coloring) -> Vec<(usize, usize)> {
        let ranked: Vec<usize> = coloring
            .colors_by_class_size()
            .into_iter()
            .take(self.class_limit)
            .collect();
        ranked
            .iter()
            .enumerate()
            .flat_map(|(i, &first)| {
                ranked
                    .iter()
                    .skip(i + 1)
                    .map(move |&second| (first, second))
            })
            .collect()
    }

    /// Finds the largest and second-largest backbones.
    ///
    /// Pairs are folded in [`Self::candidate_pairs`] order and a backbone
    /// only displaces another when it is strictly larger, so earlier pairs win
    /// ties. The second-largest backbone always comes from a different pair.
    #[instrument(
        name = "core.backbones",
        skip(self, graph, coloring),
        fields(vertices = graph.len(), class_limit = self.class_limit),
    )]
    pub fn extract(&self, graph: &Graph, coloring: &Coloring) -> BackboneSummary {
        let pairs = self.candidate_pairs(coloring);
        let total = graph.len();
        let examine = |&(first, second): &(usize, usize)| {
            let pair = BackbonePair::build(graph, coloring, first, second);
            let (path, edge_count) = pair.longest_traversal()?;
            let traversal: Vec<VertexId> =
                path.iter().filter_map(|&local| pair.global_id(local)).collect();
            debug!(first, second, vertices = traversal.len(), "pair examined");
            Some(Backbone {
                colors: (first, second),
                domination: domination(traversal.len(), total),
                traversal,
                edge_count,
            })
        };

        #[cfg(feature = "parallel")]
        let candidates: Vec<Option<Backbone>> = pairs.par_iter().map(examine).collect();
        #[cfg(not(feature = "parallel"))]
        let candidates: Vec<Option<Backbone>> = pairs.iter().map(examine).collect();

        let mut largest: Option<Backbone> = None;
        let mut second_largest: Option<Backbone> = None;
        for candidate in candidates.into_iter().flatten() {
            let size = candidate.vertex_count();
            if largest
                .as_ref()
                .is_none_or(|current| size > current.vertex_count())
            {
                second_largest = largest.replace(candidate);
            } else if second_largest
                .as_ref()
                .is_none_or(|current| size > current.vertex_count())
            {
                second_largest = Some(candidate);
            }
        }

        info!(
            pairs = pairs.len(),
            largest = largest.as_ref().map_or(0, Backbone::vertex_count),
            second_largest = second_largest.as_ref().map_or(0, Backbone::vertex_count),
            "backbone extraction completed"
        );
        BackboneSummary {
            largest: largest.as_ref().map(Backbone::report),
            second_largest: second_largest.as_ref().map(Backbone::report),
            pairs_examined: pairs.len(),
        }
    }
}

#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "domination is a percentage of the vertex count"
)]
const fn domination(vertices: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        vertices as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests;
