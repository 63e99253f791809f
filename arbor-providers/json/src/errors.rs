use thiserror::Error;

/// Document-level failure while reading or writing JSON.
///
/// Problems inside a single graph entry are not reported here; they surface
/// from [`GraphSource::load`](arbor_core::GraphSource::load) for that entry.
#[derive(Debug, Error)]
pub enum JsonProviderError {
    /// The underlying reader or writer failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The document is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The document is valid JSON but neither a batch nor a single graph.
    #[error("not a dataset: {0}")]
    NotADataset(&'static str),
}
