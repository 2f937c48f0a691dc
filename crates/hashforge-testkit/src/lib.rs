//! # Hashforge Testkit
//!
//! Fixture vectors and proptest generators for exercising the algorithm
//! identity core. The workspace's integration tests live in this crate's
//! `tests/` directory.

pub mod fixtures;
pub mod generators;

pub use fixtures::{all_vectors, MetadataVector};
