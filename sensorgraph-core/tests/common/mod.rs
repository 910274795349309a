//! Helpers shared by the core integration tests.

use sensorgraph_core::{Analysis, AnalysisBuilder, AnalysisReport, ConflictResolution, Density, Point};

#[expect(
    clippy::float_arithmetic,
    reason = "tolerance comparison needs the difference of two floats"
)]
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[must_use]
pub fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[must_use]
pub fn analysis(radius: f64, strategy: ConflictResolution) -> Analysis {
    AnalysisBuilder::new()
        .with_density(Density::Radius(radius))
        .with_conflict_resolution(strategy)
        .with_run_name("scenario")
        .build()
        .expect("scenario configuration is valid")
}

#[must_use]
pub fn run_scenario(coords: &[(f64, f64)], radius: f64) -> AnalysisReport {
    analysis(radius, ConflictResolution::Recursive)
        .run_with_points(&points(coords))
        .expect("scenario must run")
}
