//! Core data model for open-pond microalgae simulation
//!
//! This crate holds the immutable inputs (species, climate, run configuration),
//! the [`SimulationResult`] output and the error taxonomy used to reject
//! malformed inputs before a run starts.
//!
//! All types are plain values with structural equality and a float-aware
//! [`Hash`](std::hash::Hash), so a complete set of inputs can serve as a cache
//! key via [`ContentHash::content_hash`].

pub mod errors;
pub mod hashing;
pub mod parameters;
pub mod result;

pub use errors::{AlgaeError, AlgaeResult};
pub use hashing::ContentHash;
pub use result::SimulationResult;

/// Floating-point type used throughout the model.
pub type FloatValue = f64;
