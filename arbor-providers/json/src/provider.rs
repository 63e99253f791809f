//! JSON dataset provider implementation.
use std::{fs::File, io::BufReader, io::Read, path::Path};

use arbor_core::{Graph, GraphSource, GraphSourceError, NamedGraph};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::errors::JsonProviderError;
use crate::model::{GraphEntry, dataset_entries, entry_name};

/// [`GraphSource`] backed by a parsed JSON dataset document.
///
/// Only the outer document shape is checked eagerly. Each entry is decoded,
/// validated and built when it is loaded, so one malformed entry does not hide
/// the others.
#[derive(Debug)]
pub struct JsonDatasetProvider {
    name: String,
    entries: Vec<Value>,
}

impl JsonDatasetProvider {
    /// Parses a dataset from `reader`.
    ///
    /// # Errors
    /// Returns [`JsonProviderError`] when the reader fails or the document is
    /// not a dataset.
    pub fn from_reader<R: Read>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, JsonProviderError> {
        let document: Value = serde_json::from_reader(reader)?;
        Self::from_document(name, document)
    }

    /// Parses a dataset held in memory.
    ///
    /// # Errors
    /// Returns [`JsonProviderError::Json`] when `json` does not parse and
    /// [`JsonProviderError::NotADataset`] when it has neither a `graphs`
    /// array nor a `vertices` count.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::GraphSource;
    /// use arbor_providers_json::JsonDatasetProvider;
    ///
    /// let provider = JsonDatasetProvider::try_from_str(
    ///     "inline",
    ///     r#"{"vertices": 2, "edges": [{"source": 0, "destination": 1, "weight": 7}]}"#,
    /// )?;
    /// assert_eq!(provider.len(), 1);
    /// assert_eq!(provider.load(0)?.name, "graph_1");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_from_str(name: impl Into<String>, json: &str) -> Result<Self, JsonProviderError> {
        let document: Value = serde_json::from_str(json)?;
        Self::from_document(name, document)
    }

    /// Opens and parses the dataset at `path`, naming the source after the
    /// file stem.
    ///
    /// # Errors
    /// Returns [`JsonProviderError`] when the file cannot be read or parsed.
    #[instrument(name = "provider.json.open", skip(path), fields(path = %path.as_ref().display()))]
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, JsonProviderError> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map_or_else(|| "dataset".to_owned(), |stem| stem.to_string_lossy().into_owned());
        let file = File::open(path)?;
        let provider = Self::from_reader(name, BufReader::new(file))?;
        debug!(entries = provider.entries.len(), "dataset parsed");
        Ok(provider)
    }

    fn from_document(name: impl Into<String>, document: Value) -> Result<Self, JsonProviderError> {
        Ok(Self {
            name: name.into(),
            entries: dataset_entries(document)?,
        })
    }
}

impl GraphSource for JsonDatasetProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn load(&self, index: usize) -> Result<NamedGraph, GraphSourceError> {
        let entry = self
            .entries
            .get(index)
            .ok_or(GraphSourceError::OutOfBounds { index })?;
        let name = entry_name(entry, index);
        let decoded =
            GraphEntry::deserialize(entry).map_err(|err| GraphSourceError::MalformedEntry {
                entry: name.clone(),
                detail: err.to_string(),
            })?;
        let graph = build_graph(&name, &decoded)?;
        Ok(NamedGraph::new(name, graph))
    }
}

fn build_graph(name: &str, entry: &GraphEntry) -> Result<Graph, GraphSourceError> {
    let vertex_count =
        usize::try_from(entry.vertices).map_err(|_| GraphSourceError::NegativeVertexCount {
            entry: name.to_owned(),
            got: entry.vertices,
        })?;
    let mut graph =
        Graph::try_new(vertex_count).map_err(|error| GraphSourceError::TooManyVertices {
            entry: name.to_owned(),
            error,
        })?;
    for (position, edge) in entry.edges.iter().enumerate() {
        let source = endpoint(name, position, edge.source)?;
        let destination = endpoint(name, position, edge.destination)?;
        let weight =
            u32::try_from(edge.weight).map_err(|_| GraphSourceError::InvalidWeight {
                entry: name.to_owned(),
                edge: position,
                got: edge.weight,
            })?;
        graph
            .add_edge(source, destination, weight)
            .map_err(|error| GraphSourceError::InvalidEdge {
                entry: name.to_owned(),
                edge: position,
                error,
            })?;
    }
    Ok(graph)
}

fn endpoint(name: &str, position: usize, raw: i64) -> Result<usize, GraphSourceError> {
    usize::try_from(raw).map_err(|_| GraphSourceError::NegativeEndpoint {
        entry: name.to_owned(),
        edge: position,
        got: raw,
    })
}
