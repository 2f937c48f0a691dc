//! # Hashforge Algo
//!
//! Algorithm identity and resource metadata for the Hashforge engine.
//!
//! This crate contains no hashing, no allocation, no I/O. It is pure
//! computation over a compiled-in algorithm table: resolving configuration
//! aliases to identifiers, classifying identifiers into families, and
//! reporting the memory footprint and intensity limits the external
//! allocator and scheduler consume.
//!
//! ## Key Types
//!
//! - [`Algorithm`] - An algorithm selection with derived metadata queries
//! - [`AlgorithmId`] - Closed, build-gated identifier for one variant
//! - [`Family`] - Group of variants sharing resource characteristics
//! - [`AliasEntry`] - One row of the compiled-in alias catalog
//!
//! ## Feature flags
//!
//! Each optional family (`cn-lite`, `cn-heavy`, `cn-pico`,
//! `cn-extremelite`, `cn-gpu`, `randomx`, `argon2`) is gated by a feature
//! of the same name; a disabled family is entirely absent from the
//! identifier set, the alias catalog, the classifier, and the size tables.
//! All families are enabled by default.

pub mod algorithm;
pub mod catalog;
pub mod cn;
pub mod error;
pub mod family;
pub mod id;

pub use algorithm::Algorithm;
pub use catalog::AliasEntry;
pub use error::ParseAlgorithmError;
pub use family::Family;
pub use id::AlgorithmId;
