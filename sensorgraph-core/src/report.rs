//! Plain-data summaries produced by each pipeline stage.
//!
//! The summaries own their data so callers can render or serialise a finished
//! run without holding on to the graph.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{geometry::AreaMode, graph::VertexId};

/// Size and degree statistics of a geometric graph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GraphSummary {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Adjacency radius the graph was built with.
    pub radius: f64,
    /// Mean degree, `2E / N`.
    pub average_degree: f64,
    /// Smallest original degree.
    pub min_degree: usize,
    /// Largest original degree.
    pub max_degree: usize,
    /// Vertices holding the smallest degree, in id order.
    pub min_degree_vertices: Vec<VertexId>,
    /// Vertices holding the largest degree, in id order.
    pub max_degree_vertices: Vec<VertexId>,
    /// Number of vertices at each original degree.
    pub degree_frequency: BTreeMap<usize, usize>,
}

/// Outcome of the smallest-last ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OrderingSummary {
    /// Vertices in removal order.
    pub elimination_sequence: Vec<VertexId>,
    /// Degree of each vertex when removed, parallel to the sequence.
    pub degree_at_deletion: Vec<usize>,
    /// Original degree of each vertex, parallel to the sequence.
    pub original_degree: Vec<usize>,
    /// Size of the first complete subgraph left during removal.
    pub terminal_clique_size: Option<usize>,
    /// Largest degree seen at removal time.
    pub max_degree_when_deleted: usize,
}

/// Outcome of the greedy colouring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ColoringSummary {
    /// Colour of each vertex, indexed by id.
    pub color_of: Vec<usize>,
    /// Number of vertices holding each colour.
    pub class_sizes: BTreeMap<usize, usize>,
    /// Number of colours the palette grew to.
    pub palette_size: usize,
    /// Size of the most populous colour class.
    pub largest_class_size: usize,
    /// Number of edges whose endpoints share a colour.
    pub conflicting_pairs: usize,
    /// Conflict-resolution strategy label.
    pub strategy: &'static str,
}

/// One backbone found in a two-colour bipartite subgraph.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BackboneReport {
    /// The colour pair whose classes formed the subgraph.
    pub colors: (usize, usize),
    /// Vertices reached by the traversal.
    pub vertices: usize,
    /// Edges inside the traversed component.
    pub edge_count: usize,
    /// Percentage of all vertices the backbone covers.
    pub domination: f64,
    /// Vertices in depth-first visit order.
    pub traversal: Vec<VertexId>,
}

/// The two largest backbones of a run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BackboneSummary {
    /// Largest traversal over every examined pair.
    pub largest: Option<BackboneReport>,
    /// Largest traversal from a different colour pair.
    pub second_largest: Option<BackboneReport>,
    /// Number of colour pairs examined.
    pub pairs_examined: usize,
}

/// Full record of one analysis run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisReport {
    /// Human-readable run label.
    pub run_name: String,
    /// Seed used for point generation, absent when points were supplied.
    pub seed: Option<u64>,
    /// Deployment area the points were drawn from.
    pub area: AreaMode,
    /// Graph statistics.
    pub graph: GraphSummary,
    /// Ordering outcome.
    pub ordering: OrderingSummary,
    /// Colouring outcome.
    pub coloring: ColoringSummary,
    /// Backbone outcome.
    pub backbones: BackboneSummary,
}
