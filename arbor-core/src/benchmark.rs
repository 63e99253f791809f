//! Benchmark orchestration: run both MST engines over every graph of a
//! [`GraphSource`] and aggregate the comparison.
//!
//! Disconnected graphs and entries that fail to load are recorded as skipped
//! and excluded from the summary; neither stops the batch.

use std::{fmt, time::Duration};

use tracing::{Span, error, field, info, instrument, warn};

use crate::{
    datasource::GraphSource,
    error::GraphSourceError,
    graph::Graph,
    mst::{KruskalReport, PrimReport, kruskal, prim},
};

/// Unit used when reporting durations.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TimeUnit {
    /// Nanoseconds.
    Nanos,
    /// Microseconds.
    Micros,
    /// Milliseconds.
    #[default]
    Millis,
}

impl TimeUnit {
    /// Returns the short suffix printed after converted values.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nanos => "ns",
            Self::Micros => "us",
            Self::Millis => "ms",
        }
    }

    /// Converts `duration` into whole units, truncating and saturating at
    /// `u64::MAX`.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use arbor_core::TimeUnit;
    ///
    /// let elapsed = Duration::from_micros(2_750);
    /// assert_eq!(TimeUnit::Millis.convert(elapsed), 2);
    /// assert_eq!(TimeUnit::Micros.convert(elapsed), 2_750);
    /// assert_eq!(TimeUnit::Nanos.convert(elapsed), 2_750_000);
    /// ```
    #[must_use]
    pub fn convert(self, duration: Duration) -> u64 {
        let value = match self {
            Self::Nanos => duration.as_nanos(),
            Self::Micros => duration.as_micros(),
            Self::Millis => duration.as_millis(),
        };
        u64::try_from(value).unwrap_or(u64::MAX)
    }

    /// Converts `duration` into fractional units without truncation.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use arbor_core::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Millis.fractional(Duration::from_micros(2_750)), 2.75);
    /// ```
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "fractional units are reported as floating point"
    )]
    pub fn fractional(self, duration: Duration) -> f64 {
        let nanos = duration.as_nanos() as f64;
        match self {
            Self::Nanos => nanos,
            Self::Micros => nanos / 1e3,
            Self::Millis => nanos / 1e6,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Configures and constructs [`Benchmark`] instances.
///
/// # Examples
/// ```
/// use arbor_core::{BenchmarkBuilder, TimeUnit};
///
/// let benchmark = BenchmarkBuilder::new().with_time_unit(TimeUnit::Micros).build();
/// assert_eq!(benchmark.time_unit(), TimeUnit::Micros);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BenchmarkBuilder {
    time_unit: TimeUnit,
}

impl BenchmarkBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the reporting time unit.
    #[must_use]
    pub const fn with_time_unit(mut self, time_unit: TimeUnit) -> Self {
        self.time_unit = time_unit;
        self
    }

    /// Returns the configured time unit.
    #[must_use]
    #[rustfmt::skip]
    pub const fn time_unit(&self) -> TimeUnit { self.time_unit }

    /// Constructs the [`Benchmark`].
    #[must_use]
    pub const fn build(self) -> Benchmark {
        Benchmark {
            time_unit: self.time_unit,
        }
    }
}

/// Runs Prim and Kruskal side by side.
///
/// # Examples
/// ```
/// use arbor_core::{BenchmarkBuilder, Graph, GraphOutcome};
///
/// let graph = Graph::from_edges(3, [(0, 1, 2), (1, 2, 3), (0, 2, 9)])?;
/// let benchmark = BenchmarkBuilder::new().build();
/// let GraphOutcome::Compared(comparison) = benchmark.compare("triangle", &graph) else {
///     panic!("a connected graph is compared");
/// };
/// assert!(comparison.costs_agree());
/// assert_eq!(comparison.prim().total_cost(), 5);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Benchmark {
    time_unit: TimeUnit,
}

impl Benchmark {
    /// Returns the time unit reports are rendered in.
    #[must_use]
    #[rustfmt::skip]
    pub const fn time_unit(&self) -> TimeUnit { self.time_unit }

    /// Compares both engines on one graph.
    ///
    /// A disconnected graph has no spanning tree, so it is skipped with
    /// [`SkipReason::Disconnected`] before either engine runs.
    #[must_use]
    #[instrument(
        name = "benchmark.compare",
        skip(self, graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn compare(&self, name: &str, graph: &Graph) -> GraphOutcome {
        if !graph.is_connected() {
            warn!(graph = name, "graph is disconnected, skipping");
            record_skip(&SkipReason::Disconnected);
            return GraphOutcome::Skipped(SkippedGraph {
                name: name.to_owned(),
                reason: SkipReason::Disconnected,
            });
        }

        let comparison = GraphComparison {
            name: name.to_owned(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            prim: prim(graph),
            kruskal: kruskal(graph),
        };

        if comparison.costs_agree() {
            info!(
                graph = name,
                cost = comparison.prim.total_cost(),
                prim = self.time_unit.convert(comparison.prim.elapsed()),
                kruskal = self.time_unit.convert(comparison.kruskal.elapsed()),
                unit = self.time_unit.suffix(),
                "engines agree"
            );
        } else {
            error!(
                graph = name,
                prim_cost = comparison.prim.total_cost(),
                kruskal_cost = comparison.kruskal.total_cost(),
                "engines disagree on minimum spanning tree cost"
            );
        }

        GraphOutcome::Compared(comparison)
    }

    /// Compares both engines on every entry of `source`.
    ///
    /// Entries that fail to load are logged and reported as
    /// [`SkipReason::InvalidInput`].
    #[must_use]
    #[instrument(
        name = "benchmark.run",
        skip(self, source),
        fields(source = %source.name(), entries = source.len(), compared = field::Empty),
    )]
    pub fn run<S: GraphSource + ?Sized>(&self, source: &S) -> BenchmarkReport {
        let mut outcomes = Vec::with_capacity(source.len());
        for index in 0..source.len() {
            match source.load(index) {
                Ok(entry) => outcomes.push(self.compare(&entry.name, &entry.graph)),
                Err(err) => {
                    let name = err
                        .entry()
                        .map_or_else(|| format!("{}[{index}]", source.name()), str::to_owned);
                    warn!(
                        graph = %name,
                        code = %err.code(),
                        error = %err,
                        "failed to load graph, skipping"
                    );
                    let reason = SkipReason::InvalidInput(err);
                    record_skip(&reason);
                    outcomes.push(GraphOutcome::Skipped(SkippedGraph { name, reason }));
                }
            }
        }

        let report = BenchmarkReport {
            source: source.name().to_owned(),
            time_unit: self.time_unit,
            outcomes,
        };
        Span::current().record("compared", report.comparisons().count());
        report
    }
}

/// Result of processing one graph.
#[derive(Clone, Debug)]
pub enum GraphOutcome {
    /// Both engines ran.
    Compared(GraphComparison),
    /// The graph was not processed.
    Skipped(SkippedGraph),
}

/// Both engine reports for one connected graph.
#[derive(Clone, Debug)]
pub struct GraphComparison {
    name: String,
    vertices: usize,
    edges: usize,
    prim: PrimReport,
    kruskal: KruskalReport,
}

impl GraphComparison {
    /// Returns the graph label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertex count of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> usize { self.vertices }

    /// Returns the edge count of the compared graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> usize { self.edges }

    /// Returns Prim's report.
    #[must_use]
    #[rustfmt::skip]
    pub const fn prim(&self) -> &PrimReport { &self.prim }

    /// Returns Kruskal's report.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kruskal(&self) -> &KruskalReport { &self.kruskal }

    /// Returns `true` when both engines found the same total cost.
    #[must_use]
    pub const fn costs_agree(&self) -> bool {
        self.prim.total_cost() == self.kruskal.total_cost()
    }
}

/// A graph that was not compared, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedGraph {
    /// Entry label.
    pub name: String,
    /// Why the entry was skipped.
    pub reason: SkipReason,
}

/// Why a graph was excluded from the comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Not every vertex is reachable from vertex `0`.
    Disconnected,
    /// The entry could not be turned into a graph.
    InvalidInput(GraphSourceError),
}

impl SkipReason {
    /// Returns a stable lowercase label for logs and metrics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::InvalidInput(_) => "invalid_input",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => f.write_str("graph is not connected"),
            Self::InvalidInput(err) => write!(f, "invalid input: {err}"),
        }
    }
}

/// Outcomes of a [`Benchmark::run`] in source order.
#[derive(Clone, Debug)]
pub struct BenchmarkReport {
    source: String,
    time_unit: TimeUnit,
    outcomes: Vec<GraphOutcome>,
}

impl BenchmarkReport {
    /// Returns the name of the source that was benchmarked.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the time unit configured for reporting.
    #[must_use]
    #[rustfmt::skip]
    pub const fn time_unit(&self) -> TimeUnit { self.time_unit }

    /// Returns every outcome in source order.
    #[must_use]
    pub fn outcomes(&self) -> &[GraphOutcome] {
        &self.outcomes
    }

    /// Iterates over the compared graphs.
    pub fn comparisons(&self) -> impl Iterator<Item = &GraphComparison> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            GraphOutcome::Compared(comparison) => Some(comparison),
            GraphOutcome::Skipped(_) => None,
        })
    }

    /// Iterates over the skipped graphs.
    pub fn skipped(&self) -> impl Iterator<Item = &SkippedGraph> + '_ {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            GraphOutcome::Skipped(skipped) => Some(skipped),
            GraphOutcome::Compared(_) => None,
        })
    }

    /// Aggregates the compared graphs.
    ///
    /// Returns `None` when nothing was compared. Skipped graphs never count
    /// towards the means.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{BenchmarkBuilder, Graph, GraphCollection, NamedGraph};
    ///
    /// let source: GraphCollection = [
    ///     NamedGraph::new("pair", Graph::from_edges(2, [(0, 1, 10)])?),
    ///     NamedGraph::new("split", Graph::from_edges(3, [(0, 1, 5)])?),
    /// ]
    /// .into_iter()
    /// .collect();
    ///
    /// let report = BenchmarkBuilder::new().build().run(&source);
    /// let summary = report.summary().expect("one graph was compared");
    /// assert_eq!(summary.graphs_analysed, 1);
    /// assert_eq!(summary.costs_agreeing, 1);
    /// assert_eq!(report.skipped().count(), 1);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn summary(&self) -> Option<BenchmarkSummary> {
        let mut analysed = 0_usize;
        let mut agreeing = 0_usize;
        let mut prim_total = Duration::ZERO;
        let mut kruskal_total = Duration::ZERO;
        for comparison in self.comparisons() {
            analysed += 1;
            agreeing += usize::from(comparison.costs_agree());
            prim_total = prim_total.saturating_add(comparison.prim.elapsed());
            kruskal_total = kruskal_total.saturating_add(comparison.kruskal.elapsed());
        }

        let divisor = u32::try_from(analysed).ok()?;
        let mean_prim = prim_total.checked_div(divisor)?;
        let mean_kruskal = kruskal_total.checked_div(divisor)?;
        let (winner, margin_percent) = decide_winner(mean_prim, mean_kruskal);

        Some(BenchmarkSummary {
            graphs_analysed: analysed,
            costs_agreeing: agreeing,
            graphs_skipped: self.skipped().count(),
            mean_prim,
            mean_kruskal,
            winner,
            margin_percent,
        })
    }
}

/// Aggregate view over the compared graphs of a [`BenchmarkReport`].
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkSummary {
    /// Number of graphs on which both engines ran.
    pub graphs_analysed: usize,
    /// Number of those where both engines found the same cost.
    pub costs_agreeing: usize,
    /// Number of entries skipped for any reason.
    pub graphs_skipped: usize,
    /// Mean Prim duration.
    pub mean_prim: Duration,
    /// Mean Kruskal duration.
    pub mean_kruskal: Duration,
    /// Engine with the lower mean duration.
    pub winner: Winner,
    /// `(slower - faster) / slower * 100`, or `0` on a tie.
    pub margin_percent: f64,
}

/// Engine with the lower mean duration.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Winner {
    /// Prim was faster on average.
    Prim,
    /// Kruskal was faster on average.
    Kruskal,
    /// Both means were identical.
    Tie,
}

impl Winner {
    /// Returns a stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
            Self::Tie => "tie",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "margin is a percentage of the slower mean"
)]
fn decide_winner(prim: Duration, kruskal: Duration) -> (Winner, f64) {
    let (winner, faster, slower) = match prim.cmp(&kruskal) {
        std::cmp::Ordering::Less => (Winner::Prim, prim, kruskal),
        std::cmp::Ordering::Greater => (Winner::Kruskal, kruskal, prim),
        std::cmp::Ordering::Equal => return (Winner::Tie, 0.0),
    };
    let slower_secs = slower.as_secs_f64();
    let margin = (slower_secs - faster.as_secs_f64()) / slower_secs * 100.0;
    (winner, margin)
}

#[cfg(feature = "metrics")]
fn record_skip(reason: &SkipReason) {
    metrics::counter!("mst_graphs_skipped_total", "reason" => reason.as_str()).increment(1);
}

#[cfg(not(feature = "metrics"))]
const fn record_skip(_reason: &SkipReason) {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::prim_faster(10, 40, Winner::Prim, 75.0)]
    #[case::kruskal_faster(50, 25, Winner::Kruskal, 50.0)]
    #[case::tie(30, 30, Winner::Tie, 0.0)]
    #[case::both_zero(0, 0, Winner::Tie, 0.0)]
    fn winner_uses_relative_margin_of_slower(
        #[case] prim_us: u64,
        #[case] kruskal_us: u64,
        #[case] expected: Winner,
        #[case] margin: f64,
    ) {
        let (winner, actual) = decide_winner(
            Duration::from_micros(prim_us),
            Duration::from_micros(kruskal_us),
        );
        assert_eq!(winner, expected);
        assert!((actual - margin).abs() < 1e-9, "margin {actual} != {margin}");
    }

    #[test]
    fn sub_millisecond_means_are_not_truncated() {
        let (winner, margin) =
            decide_winner(Duration::from_micros(400), Duration::from_micros(800));
        assert_eq!(winner, Winner::Prim);
        assert!((margin - 50.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(TimeUnit::Nanos, "ns")]
    #[case(TimeUnit::Micros, "us")]
    #[case(TimeUnit::Millis, "ms")]
    fn time_unit_suffixes(#[case] unit: TimeUnit, #[case] suffix: &str) {
        assert_eq!(unit.to_string(), suffix);
    }

    #[test]
    fn default_time_unit_is_millis() {
        assert_eq!(BenchmarkBuilder::new().build().time_unit(), TimeUnit::Millis);
    }

    #[test]
    fn empty_report_has_no_summary() {
        let report = BenchmarkReport {
            source: "empty".to_owned(),
            time_unit: TimeUnit::Millis,
            outcomes: Vec::new(),
        };
        assert!(report.summary().is_none());
    }
}
