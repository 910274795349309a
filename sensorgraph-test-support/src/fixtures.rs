//! Point sets with hand-checked analysis results.
//!
//! Fixtures are plain coordinate pairs so every crate can convert them into
//! its own point type.

/// Corners of the unit square, ids 0..4 at (0,0), (0,1), (1,0), (1,1).
///
/// Radius 1.5 yields the complete graph on four vertices; radius 1.0 yields
/// the 4-cycle 0-2-3-1.
pub const UNIT_SQUARE: &[(f64, f64)] = &[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)];

/// Two unit triangles ten units apart. Radius 1.5 connects each triangle
/// internally and never across.
pub const TWO_TRIANGLES: &[(f64, f64)] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (0.5, 0.8),
    (10.0, 0.0),
    (11.0, 0.0),
    (10.5, 0.8),
];

/// `count` points along the x axis, `spacing` apart, starting at the origin.
///
/// # Examples
/// ```
/// use sensorgraph_test_support::fixtures::collinear;
///
/// assert_eq!(collinear(3, 0.5), vec![(0.0, 0.0), (0.5, 0.0), (1.0, 0.0)]);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "positions are multiples of the spacing"
)]
#[must_use]
pub fn collinear(count: u32, spacing: f64) -> Vec<(f64, f64)> {
    (0..count).map(|i| (f64::from(i) * spacing, 0.0)).collect()
}
