//! Sensorgraph core library.
//!
//! Models a sensor network as a random geometric graph and runs the analysis
//! pipeline over it:
//!
//! 1. [`GeometricGraphBuilder`] connects every pair of sensors within the
//!    adjacency radius using a sweep over the x axis.
//! 2. [`SmallestLastOrdering`] repeatedly removes a minimum-degree vertex
//!    from a working view of the graph, recording the degree at deletion and
//!    the terminal clique size.
//! 3. [`GreedyColorer`] colours vertices in reverse elimination order.
//! 4. [`BackboneExtractor`] searches the bipartite subgraphs formed by pairs
//!    of the largest colour classes for the largest depth-first traversals.
//!
//! [`AnalysisBuilder`] wires the stages together and produces an
//! [`AnalysisReport`] for rendering by callers.
//!
//! Every stage is deterministic for a fixed point set: ties in the ordering
//! select the lowest vertex id and parallel work is merged in sequential
//! order.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analysis;
mod backbone;
mod builder;
mod coloring;
mod error;
mod geometry;
mod graph;
mod ordering;
mod report;
mod sampling;

#[cfg(test)]
mod test_utils;

pub use crate::{
    analysis::Analysis,
    backbone::{Backbone, BackboneExtractor, BackbonePair, DEFAULT_CLASS_LIMIT},
    builder::{AnalysisBuilder, Density},
    coloring::{Coloring, ColoringError, ColoringErrorCode, ConflictResolution, GreedyColorer},
    error::{Result, SensorGraphError, SensorGraphErrorCode},
    geometry::{AreaMode, Point, radius_from_average_degree},
    graph::{GeometricGraphBuilder, Graph, Vertex, VertexId},
    ordering::{DegreeBuckets, OrderingError, OrderingErrorCode, SmallestLastOrdering},
    report::{
        AnalysisReport, BackboneReport, BackboneSummary, ColoringSummary, GraphSummary,
        OrderingSummary,
    },
    sampling::PointSampler,
};
