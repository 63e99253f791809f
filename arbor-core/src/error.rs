//! Error types for the Arbor core library.
//!
//! Defines the graph construction and graph source error enums exposed by the
//! public API, each paired with a stable machine-readable code.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint was not a vertex of the graph.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// Storage for the requested vertices could not be reserved.
    #[error("cannot reserve storage for {vertex_count} vertices")]
    CapacityExceeded {
        /// The requested vertex count.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint was not a vertex of the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// Storage for the requested vertices could not be reserved.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
    }
}

/// An error produced while loading one entry from a [`crate::GraphSource`].
///
/// Load failures are scoped to a single entry: the benchmark records the entry
/// as skipped and carries on with the rest of the batch.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphSourceError {
    /// Requested entry index was outside the source's bounds.
    #[error("entry {index} is out of bounds")]
    OutOfBounds {
        /// The requested entry.
        index: usize,
    },
    /// The entry declared a negative vertex count.
    #[error("entry `{entry}` declares a negative vertex count ({got})")]
    NegativeVertexCount {
        /// Name of the offending entry.
        entry: String,
        /// The declared vertex count.
        got: i64,
    },
    /// The entry declared more vertices than can be allocated.
    #[error("entry `{entry}` is too large to build: {error}")]
    TooManyVertices {
        /// Name of the offending entry.
        entry: String,
        /// Underlying graph construction error.
        #[source]
        error: GraphError,
    },
    /// The entry does not have the shape of a graph.
    #[error("entry `{entry}` is malformed: {detail}")]
    MalformedEntry {
        /// Name of the offending entry.
        entry: String,
        /// What was wrong with the entry.
        detail: String,
    },
    /// An edge referenced a negative vertex id.
    #[error("entry `{entry}` edge {edge} references negative vertex {got}")]
    NegativeEndpoint {
        /// Name of the offending entry.
        entry: String,
        /// Position of the edge within the entry.
        edge: usize,
        /// The negative endpoint.
        got: i64,
    },
    /// An edge carried a negative or oversized weight.
    #[error("entry `{entry}` edge {edge} has unsupported weight {got}")]
    InvalidWeight {
        /// Name of the offending entry.
        entry: String,
        /// Position of the edge within the entry.
        edge: usize,
        /// The rejected weight.
        got: i64,
    },
    /// An edge could not be added to the graph.
    #[error("entry `{entry}` edge {edge} is invalid: {error}")]
    InvalidEdge {
        /// Name of the offending entry.
        entry: String,
        /// Position of the edge within the entry.
        edge: usize,
        /// Underlying graph construction error.
        #[source]
        error: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphSourceError`] variants.
    enum GraphSourceErrorCode for GraphSourceError {
        /// Requested entry index was outside the source's bounds.
        OutOfBounds => OutOfBounds { .. } => "GRAPH_SOURCE_OUT_OF_BOUNDS",
        /// The entry declared a negative vertex count.
        NegativeVertexCount => NegativeVertexCount { .. } => "GRAPH_SOURCE_NEGATIVE_VERTEX_COUNT",
        /// The entry declared more vertices than can be allocated.
        TooManyVertices => TooManyVertices { .. } => "GRAPH_SOURCE_TOO_MANY_VERTICES",
        /// The entry does not have the shape of a graph.
        MalformedEntry => MalformedEntry { .. } => "GRAPH_SOURCE_MALFORMED_ENTRY",
        /// An edge referenced a negative vertex id.
        NegativeEndpoint => NegativeEndpoint { .. } => "GRAPH_SOURCE_NEGATIVE_ENDPOINT",
        /// An edge carried a negative or oversized weight.
        InvalidWeight => InvalidWeight { .. } => "GRAPH_SOURCE_INVALID_WEIGHT",
        /// An edge could not be added to the graph.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_SOURCE_INVALID_EDGE",
    }
}

impl GraphSourceError {
    /// Returns the name of the offending entry when the error carries one.
    #[must_use]
    pub fn entry(&self) -> Option<&str> {
        match self {
            Self::OutOfBounds { .. } => None,
            Self::NegativeVertexCount { entry, .. }
            | Self::TooManyVertices { entry, .. }
            | Self::MalformedEntry { entry, .. }
            | Self::NegativeEndpoint { entry, .. }
            | Self::InvalidWeight { entry, .. }
            | Self::InvalidEdge { entry, .. } => Some(entry),
        }
    }

    /// Retrieve the inner [`GraphErrorCode`] when the failure came from graph
    /// construction.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::InvalidEdge { error, .. } | Self::TooManyVertices { error, .. } => {
                Some(error.code())
            }
            _ => None,
        }
    }
}
