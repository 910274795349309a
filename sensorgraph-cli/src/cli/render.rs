//! Plain-text report layout.

use std::collections::BTreeMap;
use std::io::{self, Write};

use sensorgraph_core::{AnalysisReport, BackboneReport};

/// Writes `report` as labelled lines, one statistic per line.
///
/// # Errors
/// Returns any error raised by `writer`.
pub fn render_text(report: &AnalysisReport, mut writer: impl Write) -> io::Result<()> {
    let graph = &report.graph;
    writeln!(writer, "Run: {}", report.run_name)?;
    if let Some(seed) = report.seed {
        writeln!(writer, "Seed: {seed}")?;
    } else {
        writeln!(writer, "Seed: none (points supplied)")?;
    }
    writeln!(writer, "Area: {}", report.area.as_str())?;
    writeln!(writer, "Sensors: {}", graph.vertex_count)?;
    writeln!(
        writer,
        "Number of distinct pairwise sensor adjacencies: {}",
        graph.edge_count
    )?;
    writeln!(writer, "Distance bound for adjacency: {}", graph.radius)?;
    writeln!(writer, "Average degree: {:.4}", graph.average_degree)?;
    writeln!(writer, "Minimum degree: {}", graph.min_degree)?;
    writeln!(writer, "Maximum degree: {}", graph.max_degree)?;
    writeln!(
        writer,
        "Minimum degree sensors: {}",
        format_ids(&graph.min_degree_vertices)
    )?;
    writeln!(
        writer,
        "Maximum degree sensors: {}",
        format_ids(&graph.max_degree_vertices)
    )?;
    writeln!(
        writer,
        "Degree distribution: {}",
        format_counts(&graph.degree_frequency)
    )?;

    let ordering = &report.ordering;
    if let Some(size) = ordering.terminal_clique_size {
        writeln!(writer, "Terminal clique size: {size}")?;
    } else {
        writeln!(writer, "Terminal clique size: none")?;
    }
    writeln!(
        writer,
        "Maximum degree when deleted: {}",
        ordering.max_degree_when_deleted
    )?;

    let coloring = &report.coloring;
    writeln!(writer, "Colouring strategy: {}", coloring.strategy)?;
    writeln!(writer, "Amount of colors: {}", coloring.palette_size)?;
    writeln!(
        writer,
        "Largest color class size: {}",
        coloring.largest_class_size
    )?;
    writeln!(
        writer,
        "Color class sizes: {}",
        format_counts(&coloring.class_sizes)
    )?;
    writeln!(writer, "Conflicting pairs: {}", coloring.conflicting_pairs)?;

    render_backbone(&mut writer, "Largest backbone", report.backbones.largest.as_ref())?;
    render_backbone(
        &mut writer,
        "Second largest backbone",
        report.backbones.second_largest.as_ref(),
    )
}

fn render_backbone(
    mut writer: impl Write,
    title: &str,
    backbone: Option<&BackboneReport>,
) -> io::Result<()> {
    writeln!(writer, "---{title}---")?;
    let Some(found) = backbone else {
        return writeln!(writer, "Colors: none");
    };
    let (first, second) = found.colors;
    writeln!(writer, "Colors: {first}, {second}")?;
    writeln!(writer, "Number of vertices: {}", found.vertices)?;
    writeln!(writer, "Number of edges: {}", found.edge_count)?;
    writeln!(writer, "Domination: {:.2}%", found.domination)
}

fn format_ids(ids: &[usize]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_counts(counts: &BTreeMap<usize, usize>) -> String {
    counts
        .iter()
        .map(|(key, count)| format!("{key}:{count}"))
        .collect::<Vec<_>>()
        .join(" ")
}
