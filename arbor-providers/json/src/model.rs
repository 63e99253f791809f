//! Serde models for dataset and result documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::JsonProviderError;

/// Splits a parsed input document into its raw graph entries.
///
/// A batch is an object holding a `graphs` array; any other object must carry
/// `vertices` and is read as one bare graph. Entries stay as raw values so a
/// malformed entry only fails when it is loaded.
pub(crate) fn dataset_entries(document: Value) -> Result<Vec<Value>, JsonProviderError> {
    let Value::Object(mut fields) = document else {
        return Err(JsonProviderError::NotADataset("expected a JSON object"));
    };
    match fields.remove("graphs") {
        Some(Value::Array(entries)) => Ok(entries),
        Some(_) => Err(JsonProviderError::NotADataset("`graphs` must be an array")),
        None if fields.contains_key("vertices") => Ok(vec![Value::Object(fields)]),
        None => Err(JsonProviderError::NotADataset(
            "expected a `graphs` array or a `vertices` count",
        )),
    }
}

/// Returns the label an entry is reported under, even when the rest of the
/// entry is malformed.
pub(crate) fn entry_name(entry: &Value, index: usize) -> String {
    entry
        .get("name")
        .and_then(Value::as_str)
        .map_or_else(|| format!("graph_{}", index + 1), str::to_owned)
}

/// One graph as stored on disk.
///
/// Numbers are kept signed so negative values get their own entry-level
/// errors rather than a generic type mismatch.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct GraphEntry {
    pub vertices: i64,
    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub(crate) struct EdgeEntry {
    pub source: i64,
    pub destination: i64,
    pub weight: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatasetOut<'a> {
    pub graphs: Vec<GraphOut<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GraphOut<'a> {
    pub name: &'a str,
    pub vertices: usize,
    pub edges: Vec<EdgeOut>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EdgeOut {
    pub source: usize,
    pub destination: usize,
    pub weight: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultsOut<'a> {
    pub source: &'a str,
    pub time_unit: &'static str,
    pub results: Vec<ResultOut<'a>>,
    pub skipped: Vec<SkippedOut<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<SummaryOut>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResultOut<'a> {
    pub graph_name: &'a str,
    pub vertices: usize,
    pub edges: usize,
    pub prim: PrimOut,
    pub kruskal: KruskalOut,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PrimOut {
    pub mst_cost: u64,
    pub execution_time: u64,
    pub comparisons: u64,
    pub operations: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KruskalOut {
    pub mst_cost: u64,
    pub execution_time: u64,
    pub comparisons: u64,
    pub unions: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SkippedOut<'a> {
    pub graph_name: &'a str,
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryOut {
    pub graphs_analysed: usize,
    pub costs_agreeing: usize,
    pub graphs_skipped: usize,
    pub mean_prim_time: f64,
    pub mean_kruskal_time: f64,
    pub faster: &'static str,
    pub margin_percent: f64,
}
