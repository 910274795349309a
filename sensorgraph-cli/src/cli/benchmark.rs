//! Fixed benchmark configurations.

use clap::ValueEnum;
use sensorgraph_core::AreaMode;

/// Named benchmark configurations, from a tiny smoke test up to 64 000
/// sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BenchmarkCase {
    /// 20 sensors in the square, average degree 3.
    #[value(name = "benchmark0")]
    Benchmark0,
    /// 1 000 sensors in the square, average degree 32.
    #[value(name = "benchmark1")]
    Benchmark1,
    /// 4 000 sensors in the square, average degree 64.
    #[value(name = "benchmark2")]
    Benchmark2,
    /// 16 000 sensors in the square, average degree 64.
    #[value(name = "benchmark3")]
    Benchmark3,
    /// 64 000 sensors in the square, average degree 64.
    #[value(name = "benchmark4")]
    Benchmark4,
    /// 64 000 sensors in the square, average degree 128.
    ///
    /// Recursive conflict resolution is exponential at this density; run it
    /// with `--conflict-resolution forbidden-set`.
    #[value(name = "benchmark5")]
    Benchmark5,
    /// 4 000 sensors in the disk, average degree 64.
    #[value(name = "benchmark6")]
    Benchmark6,
    /// 4 000 sensors in the disk, average degree 128.
    ///
    /// Recursive conflict resolution is exponential at this density; run it
    /// with `--conflict-resolution forbidden-set`.
    #[value(name = "benchmark7")]
    Benchmark7,
}

/// Sensor count, area and target density of a benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkParameters {
    /// Number of sensors.
    pub vertices: usize,
    /// Deployment area.
    pub area: AreaMode,
    /// Target average degree.
    pub average_degree: f64,
}

impl BenchmarkCase {
    /// Every case in order.
    pub const ALL: [Self; 8] = [
        Self::Benchmark0,
        Self::Benchmark1,
        Self::Benchmark2,
        Self::Benchmark3,
        Self::Benchmark4,
        Self::Benchmark5,
        Self::Benchmark6,
        Self::Benchmark7,
    ];

    /// Returns the case's parameters.
    #[must_use]
    pub const fn parameters(self) -> BenchmarkParameters {
        let (vertices, area, average_degree) = match self {
            Self::Benchmark0 => (20, AreaMode::Square, 3.0),
            Self::Benchmark1 => (1_000, AreaMode::Square, 32.0),
            Self::Benchmark2 => (4_000, AreaMode::Square, 64.0),
            Self::Benchmark3 => (16_000, AreaMode::Square, 64.0),
            Self::Benchmark4 => (64_000, AreaMode::Square, 64.0),
            Self::Benchmark5 => (64_000, AreaMode::Square, 128.0),
            Self::Benchmark6 => (4_000, AreaMode::Disk, 64.0),
            Self::Benchmark7 => (4_000, AreaMode::Disk, 128.0),
        };
        BenchmarkParameters {
            vertices,
            area,
            average_degree,
        }
    }

    /// Returns the case name, used as the run label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benchmark0 => "benchmark0",
            Self::Benchmark1 => "benchmark1",
            Self::Benchmark2 => "benchmark2",
            Self::Benchmark3 => "benchmark3",
            Self::Benchmark4 => "benchmark4",
            Self::Benchmark5 => "benchmark5",
            Self::Benchmark6 => "benchmark6",
            Self::Benchmark7 => "benchmark7",
        }
    }
}
