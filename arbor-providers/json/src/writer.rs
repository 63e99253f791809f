//! Result and dataset writers.
use std::io::Write;

use arbor_core::{BenchmarkReport, NamedGraph};

use crate::errors::JsonProviderError;
use crate::model::{
    DatasetOut, EdgeOut, GraphOut, KruskalOut, PrimOut, ResultOut, ResultsOut, SkippedOut,
    SummaryOut,
};

/// Writes `report` as a pretty-printed results document.
///
/// Per-graph execution times are whole units of the report's time unit; the
/// summary means are fractional in the same unit.
///
/// # Errors
/// Returns [`JsonProviderError`] when serialization or the writer fails.
pub fn write_results<W: Write>(
    mut writer: W,
    report: &BenchmarkReport,
) -> Result<(), JsonProviderError> {
    let unit = report.time_unit();
    let results = report
        .comparisons()
        .map(|comparison| {
            let prim = comparison.prim();
            let kruskal = comparison.kruskal();
            ResultOut {
                graph_name: comparison.name(),
                vertices: comparison.vertices(),
                edges: comparison.edges(),
                prim: PrimOut {
                    mst_cost: prim.total_cost(),
                    execution_time: unit.convert(prim.elapsed()),
                    comparisons: prim.counters().comparisons,
                    operations: prim.counters().operations,
                },
                kruskal: KruskalOut {
                    mst_cost: kruskal.total_cost(),
                    execution_time: unit.convert(kruskal.elapsed()),
                    comparisons: kruskal.counters().comparisons,
                    unions: kruskal.counters().unions,
                },
            }
        })
        .collect();
    let skipped = report
        .skipped()
        .map(|skipped| SkippedOut {
            graph_name: &skipped.name,
            reason: skipped.reason.to_string(),
        })
        .collect();
    let summary = report.summary().map(|summary| SummaryOut {
        graphs_analysed: summary.graphs_analysed,
        costs_agreeing: summary.costs_agreeing,
        graphs_skipped: summary.graphs_skipped,
        mean_prim_time: unit.fractional(summary.mean_prim),
        mean_kruskal_time: unit.fractional(summary.mean_kruskal),
        faster: summary.winner.as_str(),
        margin_percent: summary.margin_percent,
    });
    let document = ResultsOut {
        source: report.source(),
        time_unit: unit.suffix(),
        results,
        skipped,
        summary,
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Writes `graphs` as a pretty-printed dataset that
/// [`JsonDatasetProvider`](crate::JsonDatasetProvider) can read back.
///
/// # Errors
/// Returns [`JsonProviderError`] when serialization or the writer fails.
pub fn write_dataset<W: Write>(
    mut writer: W,
    graphs: &[NamedGraph],
) -> Result<(), JsonProviderError> {
    let document = DatasetOut {
        graphs: graphs
            .iter()
            .map(|entry| GraphOut {
                name: &entry.name,
                vertices: entry.graph.vertex_count(),
                edges: entry
                    .graph
                    .edges()
                    .iter()
                    .map(|edge| EdgeOut {
                        source: edge.source(),
                        destination: edge.destination(),
                        weight: edge.weight(),
                    })
                    .collect(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(&mut writer, &document)?;
    writer.write_all(b"\n")?;
    Ok(())
}
