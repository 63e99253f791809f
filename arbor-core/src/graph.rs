//! Weighted undirected graph model shared by both MST engines.
//!
//! A [`Graph`] owns its edge list and derives an incidence view (vertex to
//! incident edges) used by Prim's traversal and the connectivity check. Graphs
//! are built once and then only read; the engines never mutate them.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::error::GraphError;

/// An undirected weighted edge.
///
/// Equality and hashing ignore endpoint order, so `(a, b, w)` equals
/// `(b, a, w)`.
///
/// # Examples
/// ```
/// use arbor_core::Edge;
///
/// assert_eq!(Edge::new(0, 3, 5), Edge::new(3, 0, 5));
/// assert_ne!(Edge::new(0, 3, 5), Edge::new(0, 3, 6));
/// assert_eq!(Edge::new(2, 3, 4).to_string(), "(2-3: 4)");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    source: usize,
    destination: usize,
    weight: u32,
}

impl Edge {
    /// Creates an edge between `source` and `destination`.
    #[must_use]
    pub const fn new(source: usize, destination: usize, weight: u32) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the endpoint the edge was declared from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge was declared to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the endpoint across the edge from `vertex`.
    ///
    /// A self-loop returns `vertex` itself.
    #[must_use]
    pub const fn opposite(&self, vertex: usize) -> usize {
        if self.source == vertex {
            self.destination
        } else {
            self.source
        }
    }

    const fn ordered_endpoints(&self) -> (usize, usize) {
        if self.source <= self.destination {
            (self.source, self.destination)
        } else {
            (self.destination, self.source)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.ordered_endpoints() == other.ordered_endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_endpoints().hash(state);
        self.weight.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{}: {})", self.source, self.destination, self.weight)
    }
}

/// A weighted undirected graph over vertices `0..vertex_count`.
///
/// Parallel edges and self-loops are accepted as given. A self-loop is listed
/// twice in its vertex's incidence list.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 5)?;
/// assert_eq!(graph.edge_count(), 1);
/// assert!(!graph.is_connected());
///
/// graph.add_edge(1, 2, 7)?;
/// assert!(graph.is_connected());
/// assert_eq!(graph.incident_edges(1).count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    incidence: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates a graph with `vertex_count` isolated vertices, reporting a
    /// failed reservation instead of aborting.
    ///
    /// # Errors
    /// Returns [`GraphError::CapacityExceeded`] when the incidence storage for
    /// `vertex_count` vertices cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Graph, GraphError};
    ///
    /// assert_eq!(Graph::try_new(3)?.vertex_count(), 3);
    /// assert_eq!(
    ///     Graph::try_new(usize::MAX),
    ///     Err(GraphError::CapacityExceeded { vertex_count: usize::MAX })
    /// );
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn try_new(vertex_count: usize) -> Result<Self, GraphError> {
        let mut incidence = Vec::new();
        incidence
            .try_reserve_exact(vertex_count)
            .map_err(|_| GraphError::CapacityExceeded { vertex_count })?;
        incidence.resize_with(vertex_count, Vec::new);
        Ok(Self {
            vertex_count,
            edges: Vec::new(),
            incidence,
        })
    }

    /// Builds a graph from `(source, destination, weight)` triples.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for the first triple with an
    /// endpoint outside `0..vertex_count`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Graph;
    ///
    /// let graph = Graph::from_edges(2, [(0, 1, 10)])?;
    /// assert_eq!(graph.edges()[0].weight(), 10);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    pub fn from_edges(
        vertex_count: usize,
        edges: impl IntoIterator<Item = (usize, usize, u32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(vertex_count);
        for (source, destination, weight) in edges {
            graph.add_edge(source, destination, weight)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge between `source` and `destination`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph. The graph is left unchanged in that case.
    pub fn add_edge(
        &mut self,
        source: usize,
        destination: usize,
        weight: u32,
    ) -> Result<(), GraphError> {
        self.check_vertex(source)?;
        self.check_vertex(destination)?;

        let index = self.edges.len();
        self.edges.push(Edge::new(source, destination, weight));
        for endpoint in [source, destination] {
            if let Some(list) = self.incidence.get_mut(endpoint) {
                list.push(index);
            }
        }
        Ok(())
    }

    const fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges, counting parallel edges separately.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge stored at `index`, if any.
    #[must_use]
    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Iterates over the edges incident to `vertex` in insertion order.
    ///
    /// Yields nothing for a vertex outside the graph.
    pub fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = &Edge> + '_ {
        self.incident_edge_indices(vertex)
            .iter()
            .filter_map(|&index| self.edges.get(index))
    }

    /// Returns the edge-list indices of the edges incident to `vertex`.
    pub(crate) fn incident_edge_indices(&self, vertex: usize) -> &[usize] {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns `true` when every vertex is reachable from vertex `0`.
    ///
    /// The traversal uses an explicit stack, so deep path-shaped graphs do not
    /// exhaust the call stack. An empty graph is connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        if self.vertex_count == 0 {
            return true;
        }

        let mut visited = vec![false; self.vertex_count];
        let mut stack = vec![0_usize];
        let mut reached = 0_usize;

        while let Some(vertex) = stack.pop() {
            let Some(seen) = visited.get_mut(vertex) else {
                continue;
            };
            if *seen {
                continue;
            }
            *seen = true;
            reached += 1;

            for edge in self.incident_edges(vertex) {
                let neighbour = edge.opposite(vertex);
                if visited.get(neighbour).is_some_and(|flag| !flag) {
                    stack.push(neighbour);
                }
            }
        }

        reached == self.vertex_count
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Graph{{vertices={}, edges={}}}",
            self.vertex_count,
            self.edges.len()
        )
    }
}
