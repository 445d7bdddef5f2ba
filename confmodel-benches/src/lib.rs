//! Benchmark support crate for confmodel.
//!
//! Provides seeded inputs and parameter labels for the Criterion benchmarks
//! covering stub matching, scale-free generation, and connectivity checks.

pub mod error;
pub mod fixtures;
pub mod params;
