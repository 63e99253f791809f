//! Graph source abstractions for the benchmark orchestrator.

use crate::{error::GraphSourceError, graph::Graph};

/// A graph paired with the label it is reported under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedGraph {
    /// Label used in logs and result documents.
    pub name: String,
    /// The graph itself.
    pub graph: Graph,
}

impl NamedGraph {
    /// Pairs `graph` with `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            name: name.into(),
            graph,
        }
    }
}

/// Abstraction over an indexed collection of graphs.
///
/// Entries are loaded one at a time so a malformed entry fails on its own
/// without taking the rest of the batch down with it.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, GraphSource, GraphSourceError, NamedGraph};
///
/// struct Paths(Vec<usize>);
///
/// impl GraphSource for Paths {
///     fn name(&self) -> &str { "paths" }
///     fn len(&self) -> usize { self.0.len() }
///     fn load(&self, index: usize) -> Result<NamedGraph, GraphSourceError> {
///         let &size = self.0.get(index).ok_or(GraphSourceError::OutOfBounds { index })?;
///         let graph = Graph::from_edges(size, (1..size).map(|v| (v - 1, v, 1)))
///             .map_err(|error| GraphSourceError::InvalidEdge {
///                 entry: format!("path_{size}"),
///                 edge: 0,
///                 error,
///             })?;
///         Ok(NamedGraph::new(format!("path_{size}"), graph))
///     }
/// }
///
/// let source = Paths(vec![3, 5]);
/// assert_eq!(source.len(), 2);
/// assert_eq!(source.load(1)?.graph.edge_count(), 4);
/// assert!(source.load(2).is_err());
/// # Ok::<(), GraphSourceError>(())
/// ```
pub trait GraphSource {
    /// Returns a human-readable name for the whole source.
    fn name(&self) -> &str;

    /// Returns the number of entries in the source.
    fn len(&self) -> usize;

    /// Returns whether the source contains no entries.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds the graph stored at `index`.
    ///
    /// # Errors
    /// Returns [`GraphSourceError::OutOfBounds`] for an index past the end,
    /// or an entry-scoped variant when the stored entry is malformed.
    fn load(&self, index: usize) -> Result<NamedGraph, GraphSourceError>;
}

/// In-memory [`GraphSource`] over already built graphs.
///
/// # Examples
/// ```
/// use arbor_core::{Graph, GraphCollection, GraphSource, NamedGraph};
///
/// let source = GraphCollection::new("adhoc", vec![NamedGraph::new("pair", Graph::new(2))]);
/// assert_eq!(source.name(), "adhoc");
/// assert_eq!(source.load(0).map(|entry| entry.name).as_deref(), Ok("pair"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphCollection {
    name: String,
    graphs: Vec<NamedGraph>,
}

impl GraphCollection {
    /// Wraps `graphs` under the source label `name`.
    #[must_use]
    pub fn new(name: impl Into<String>, graphs: Vec<NamedGraph>) -> Self {
        Self {
            name: name.into(),
            graphs,
        }
    }

    /// Returns the stored graphs in order.
    #[must_use]
    pub fn graphs(&self) -> &[NamedGraph] {
        &self.graphs
    }
}

impl GraphSource for GraphCollection {
    fn name(&self) -> &str {
        &self.name
    }

    fn len(&self) -> usize {
        self.graphs.len()
    }

    fn load(&self, index: usize) -> Result<NamedGraph, GraphSourceError> {
        self.graphs
            .get(index)
            .cloned()
            .ok_or(GraphSourceError::OutOfBounds { index })
    }
}

impl FromIterator<NamedGraph> for GraphCollection {
    fn from_iter<I: IntoIterator<Item = NamedGraph>>(iter: I) -> Self {
        Self::new("collection", iter.into_iter().collect())
    }
}
