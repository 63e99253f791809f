//! JSON dataset provider for Arbor.
//!
//! Reads graph datasets into a [`GraphSource`](arbor_core::GraphSource) and
//! writes benchmark results and generated datasets back out as JSON.

mod errors;
mod model;
mod provider;
mod writer;

pub use errors::JsonProviderError;
pub use provider::JsonDatasetProvider;
pub use writer::{write_dataset, write_results};
