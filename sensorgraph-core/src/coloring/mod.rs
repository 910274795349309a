//! Greedy sequential colouring driven by the smallest-last ordering.
//!
//! Vertices are coloured in reverse elimination order against the canonical
//! adjacency. Two conflict-resolution strategies are available:
//!
//! - [`ConflictResolution::Recursive`] walks the neighbours one at a time and,
//!   on meeting the candidate colour, retries with the next candidate by
//!   recursion (or grows the palette when the candidate is its last colour).
//!   The scan then carries on comparing the remaining neighbours against the
//!   candidate it started with, so a vertex may be reassigned several times
//!   while one scan is in progress.
//! - [`ConflictResolution::ForbiddenSet`] gathers every coloured neighbour's
//!   colour first and picks the smallest free one.
//!
//! Properness is not assumed for either strategy; [`Coloring::conflicting_pairs`]
//! measures it.

use std::collections::BTreeMap;

use tracing::{info, instrument, warn};

use crate::{
    graph::{Graph, VertexId},
    ordering::SmallestLastOrdering,
    report::ColoringSummary,
};

/// Errors raised when the colourer detects a broken invariant.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ColoringError {
    /// The ordering does not cover the graph being coloured.
    #[error("ordering holds {ordered} vertices but the graph has {expected}")]
    OrderingMismatch {
        /// Number of vertices in the ordering.
        ordered: usize,
        /// Number of vertices in the graph.
        expected: usize,
    },
    /// Conflict resolution recursed deeper than the palette allows.
    #[error(
        "conflict resolution for vertex {vertex} reached depth {depth} with a palette of {palette}"
    )]
    RecursionLimitExceeded {
        /// Vertex being coloured.
        vertex: VertexId,
        /// Recursion depth reached.
        depth: usize,
        /// Palette size at the time.
        palette: usize,
    },
    /// A vertex finished the pass without a colour.
    #[error("vertex {vertex} was left uncoloured")]
    UncoloredVertex {
        /// The uncoloured vertex.
        vertex: VertexId,
    },
}

impl ColoringError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ColoringErrorCode {
        match self {
            Self::OrderingMismatch { .. } => ColoringErrorCode::OrderingMismatch,
            Self::RecursionLimitExceeded { .. } => ColoringErrorCode::RecursionLimitExceeded,
            Self::UncoloredVertex { .. } => ColoringErrorCode::UncoloredVertex,
        }
    }
}

/// Machine-readable error codes for [`ColoringError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ColoringErrorCode {
    /// The ordering does not cover the graph being coloured.
    OrderingMismatch,
    /// Conflict resolution recursed deeper than the palette allows.
    RecursionLimitExceeded,
    /// A vertex finished the pass without a colour.
    UncoloredVertex,
}

impl ColoringErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OrderingMismatch => "ORDERING_MISMATCH",
            Self::RecursionLimitExceeded => "RECURSION_LIMIT_EXCEEDED",
            Self::UncoloredVertex => "UNCOLORED_VERTEX",
        }
    }
}

/// How the colourer picks a colour for a vertex with coloured neighbours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ConflictResolution {
    /// Neighbour-by-neighbour recursive retry.
    ///
    /// Every conflicting neighbour restarts the scan at the next candidate,
    /// so the work grows exponentially with density. Above an average
    /// degree of about 64 prefer [`Self::ForbiddenSet`], which yields the
    /// same colouring in linear time per vertex.
    #[default]
    Recursive,
    /// Smallest colour absent from every coloured neighbour.
    ForbiddenSet,
}

impl ConflictResolution {
    /// Returns the kebab-case label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recursive => "recursive",
            Self::ForbiddenSet => "forbidden-set",
        }
    }
}

/// Colours a graph in reverse smallest-last order.
///
/// # Examples
/// ```
/// use sensorgraph_core::{
///     ConflictResolution, GeometricGraphBuilder, GreedyColorer, Point, SmallestLastOrdering,
/// };
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let graph = GeometricGraphBuilder::new(1.0)?.build(&square)?;
/// let ordering = SmallestLastOrdering::compute(&graph)?;
/// let coloring = GreedyColorer::new(ConflictResolution::Recursive).color(&graph, &ordering)?;
/// assert_eq!(coloring.palette_size(), 2);
/// assert!(coloring.conflicting_pairs(&graph).is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyColorer {
    strategy: ConflictResolution,
}

impl GreedyColorer {
    /// Creates a colourer using `strategy`.
    #[must_use]
    pub const fn new(strategy: ConflictResolution) -> Self {
        Self { strategy }
    }

    /// Returns the configured conflict-resolution strategy.
    #[must_use]
    pub const fn strategy(&self) -> ConflictResolution {
        self.strategy
    }

    /// Colours `graph` following `ordering` backwards.
    ///
    /// # Errors
    /// Returns [`ColoringError::OrderingMismatch`] when the ordering belongs to
    /// a different graph and [`ColoringError::RecursionLimitExceeded`] when
    /// conflict resolution outgrows the palette.
    #[instrument(
        name = "core.color",
        err,
        skip(self, graph, ordering),
        fields(vertices = graph.len(), strategy = self.strategy.as_str()),
    )]
    pub fn color(
        &self,
        graph: &Graph,
        ordering: &SmallestLastOrdering,
    ) -> Result<Coloring, ColoringError> {
        if ordering.len() != graph.len() {
            return Err(ColoringError::OrderingMismatch {
                ordered: ordering.len(),
                expected: graph.len(),
            });
        }

        let mut state = PaletteState::new(graph);
        let mut order = ordering.coloring_order();
        if let Some(first) = order.next() {
            state.assign(first, 0);
        }
        for vertex in order {
            match self.strategy {
                ConflictResolution::Recursive => state.retry_from(vertex, 0, 0)?,
                ConflictResolution::ForbiddenSet => state.smallest_free(vertex),
            }
        }

        let coloring = state.finish(self.strategy)?;
        let conflicts = coloring.conflicting_pairs(graph).len();
        if conflicts > 0 {
            warn!(conflicts, "colouring left adjacent vertices sharing a colour");
        }
        info!(
            palette = coloring.palette_size(),
            largest_class = coloring.largest_class_size(),
            "greedy colouring completed"
        );
        Ok(coloring)
    }
}

struct PaletteState<'g> {
    graph: &'g Graph,
    colors: Vec<Option<usize>>,
    palette: usize,
}

impl<'g> PaletteState<'g> {
    fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            colors: vec![None; graph.len()],
            palette: 1,
        }
    }

    fn retry_from(
        &mut self,
        vertex: VertexId,
        candidate: usize,
        depth: usize,
    ) -> Result<(), ColoringError> {
        if depth > self.palette + 1 {
            return Err(ColoringError::RecursionLimitExceeded {
                vertex,
                depth,
                palette: self.palette,
            });
        }
        let graph = self.graph;
        let mut viable = true;
        for &neighbor in graph.neighbors(vertex) {
            if self.color_at(neighbor) != Some(candidate) {
                continue;
            }
            viable = false;
            if candidate + 1 == self.palette {
                self.palette += 1;
                self.assign(vertex, candidate + 1);
            } else {
                self.retry_from(vertex, candidate + 1, depth + 1)?;
            }
        }
        if viable {
            self.assign(vertex, candidate);
        }
        Ok(())
    }

    fn smallest_free(&mut self, vertex: VertexId) {
        let mut forbidden = vec![false; self.palette + 1];
        for &neighbor in self.graph.neighbors(vertex) {
            if let Some(slot) = self
                .color_at(neighbor)
                .and_then(|color| forbidden.get_mut(color))
            {
                *slot = true;
            }
        }
        let color = forbidden
            .iter()
            .position(|&taken| !taken)
            .unwrap_or(self.palette);
        if color >= self.palette {
            self.palette = color + 1;
        }
        self.assign(vertex, color);
    }

    fn color_at(&self, vertex: VertexId) -> Option<usize> {
        self.colors.get(vertex).copied().flatten()
    }

    fn assign(&mut self, vertex: VertexId, color: usize) {
        if let Some(slot) = self.colors.get_mut(vertex) {
            *slot = Some(color);
        }
    }

    fn finish(self, strategy: ConflictResolution) -> Result<Coloring, ColoringError> {
        let colors = self
            .colors
            .into_iter()
            .enumerate()
            .map(|(vertex, color)| color.ok_or(ColoringError::UncoloredVertex { vertex }))
            .collect::<Result<Vec<_>, _>>()?;
        let palette_size = if colors.is_empty() { 0 } else { self.palette };
        Ok(Coloring::new(colors, palette_size, strategy))
    }
}

/// Colour assignment for every vertex plus the derived colour classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    colors: Vec<usize>,
    classes: BTreeMap<usize, Vec<VertexId>>,
    palette_size: usize,
    strategy: ConflictResolution,
}

impl Coloring {
    fn new(colors: Vec<usize>, palette_size: usize, strategy: ConflictResolution) -> Self {
        let mut classes: BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
        for (vertex, &color) in colors.iter().enumerate() {
            classes.entry(color).or_default().push(vertex);
        }
        Self {
            colors,
            classes,
            palette_size,
            strategy,
        }
    }

    /// Returns the colour of `vertex`.
    #[must_use]
    pub fn color_of(&self, vertex: VertexId) -> Option<usize> {
        self.colors.get(vertex).copied()
    }

    /// Returns every vertex colour, indexed by vertex id.
    #[rustfmt::skip]
    #[must_use]
    pub fn colors(&self) -> &[usize] { &self.colors }

    /// Returns the number of colours the palette grew to.
    #[rustfmt::skip]
    #[must_use]
    pub const fn palette_size(&self) -> usize { self.palette_size }

    /// Returns the strategy that produced this colouring.
    #[rustfmt::skip]
    #[must_use]
    pub const fn strategy(&self) -> ConflictResolution { self.strategy }

    /// Returns the members of each colour class in id order.
    #[rustfmt::skip]
    #[must_use]
    pub const fn classes(&self) -> &BTreeMap<usize, Vec<VertexId>> { &self.classes }

    /// Returns the members of one colour class.
    #[must_use]
    pub fn class(&self, color: usize) -> &[VertexId] {
        self.classes.get(&color).map_or(&[], Vec::as_slice)
    }

    /// Returns the size of every colour class.
    #[must_use]
    pub fn class_sizes(&self) -> BTreeMap<usize, usize> {
        self.classes
            .iter()
            .map(|(&color, members)| (color, members.len()))
            .collect()
    }

    /// Returns the number of colours actually held by some vertex.
    #[must_use]
    pub fn color_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the size of the most populous colour class.
    #[must_use]
    pub fn largest_class_size(&self) -> usize {
        self.classes.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the colours ordered by class size, largest first; ties go to
    /// the smaller colour.
    #[must_use]
    pub fn colors_by_class_size(&self) -> Vec<usize> {
        let mut colors: Vec<usize> = self.classes.keys().copied().collect();
        colors.sort_by(|left, right| {
            self.class(*right)
                .len()
                .cmp(&self.class(*left).len())
                .then_with(|| left.cmp(right))
        });
        colors
    }

    /// Lists every edge whose endpoints share a colour, as `(smaller, larger)`
    /// id pairs.
    #[must_use]
    pub fn conflicting_pairs(&self, graph: &Graph) -> Vec<(VertexId, VertexId)> {
        graph
            .vertices()
            .iter()
            .flat_map(|vertex| {
                let id = vertex.id();
                vertex
                    .neighbors()
                    .iter()
                    .copied()
                    .filter(move |&neighbor| id < neighbor)
                    .map(move |neighbor| (id, neighbor))
            })
            .filter(|&(left, right)| self.color_of(left) == self.color_of(right))
            .collect()
    }

    /// Summarises the colouring for reporting.
    #[must_use]
    pub fn summary(&self, graph: &Graph) -> ColoringSummary {
        ColoringSummary {
            color_of: self.colors.clone(),
            class_sizes: self.class_sizes(),
            palette_size: self.palette_size,
            largest_class_size: self.largest_class_size(),
            conflicting_pairs: self.conflicting_pairs(graph).len(),
            strategy: self.strategy.as_str(),
        }
    }
}

#[cfg(test)]
mod tests;
