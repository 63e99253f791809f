//! Property-based tests for the Prim and Kruskal engines.
//!
//! Checks both engines against an independent dense-matrix oracle, validates
//! the structural invariants of the trees and forests they return, and
//! confirms that repeated runs over one graph are reproducible.

mod equivalence;
mod helpers;
mod idempotence;
mod oracle;
mod strategies;
mod structural;
#[cfg(test)]
mod tests;
mod types;
