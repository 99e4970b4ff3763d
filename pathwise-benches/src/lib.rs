//! Benchmark support for the pathwise workspace.
//!
//! Provides deterministic synthetic graphs and parameter types shared by
//! the Criterion bench targets under `benches/`.

pub mod error;
pub mod fixtures;
pub mod params;
