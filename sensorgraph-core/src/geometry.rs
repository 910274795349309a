//! Planar geometry shared by the sampler and the graph builder.

use std::f64::consts::PI;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A sensor location in the plane.
///
/// # Examples
/// ```
/// use sensorgraph_core::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// assert_eq!(origin.distance(Point::new(3.0, 4.0)), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Returns the x coordinate.
    #[rustfmt::skip]
    #[must_use]
    pub const fn x(self) -> f64 { self.x }

    /// Returns the y coordinate.
    #[rustfmt::skip]
    #[must_use]
    pub const fn y(self) -> f64 { self.y }

    /// Euclidean distance to `other`.
    #[expect(clippy::float_arithmetic, reason = "Euclidean distance is floating-point")]
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Returns `true` when both coordinates are finite.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Region the sensors are scattered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AreaMode {
    /// The unit square `[0, 1)²`.
    Square,
    /// The unit disk centred at `(1, 1)`.
    Disk,
}

impl AreaMode {
    /// Returns the lowercase label used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Disk => "disk",
        }
    }
}

/// Derives the adjacency radius expected to produce `average_degree` for
/// `sensors` points over `mode`.
///
/// The disk uses `sqrt((d + 1) / n)` and the square `sqrt((d + 1) / (n·π))`.
///
/// # Examples
/// ```
/// use sensorgraph_core::{AreaMode, radius_from_average_degree};
///
/// let radius = radius_from_average_degree(3.0, 4, AreaMode::Disk);
/// assert!((radius - 1.0).abs() < f64::EPSILON);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "the radius formula is defined over real numbers"
)]
#[must_use]
pub fn radius_from_average_degree(average_degree: f64, sensors: usize, mode: AreaMode) -> f64 {
    let count = sensors as f64;
    match mode {
        AreaMode::Disk => ((average_degree + 1.0) / count).sqrt(),
        AreaMode::Square => ((average_degree + 1.0) / (count * PI)).sqrt(),
    }
}
