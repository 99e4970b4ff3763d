//! pathwise core library.
//!
//! All-pairs shortest paths (Floyd-Warshall) over a mutable directed graph,
//! with path reconstruction and an injectable correctness harness.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
pub mod graph;
mod path;
mod solver;
mod verify;
mod weight;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::SolverBuilder,
    error::{
        ConfigError, ConfigErrorCode, GraphError, GraphErrorCode, NegativeCycleDetected,
        PathError, PathErrorCode, PathwiseError, PathwiseErrorCode, Result, SolveError,
        SolveErrorCode,
    },
    graph::{
        DiGraph, EdgeId, EdgeMutable, EdgeRef, GraphView, MutableGraph, VertexId, VertexMutable,
    },
    solver::{
        DistanceMatrix, NegativeCycle, PredecessorMatrix, ShortestPaths, SolveOutcome, Solver,
        UNREACHABLE,
    },
    verify::{
        DEFAULT_EXHAUSTIVE_THRESHOLD, DEFAULT_SAMPLE_COUNT, DEFAULT_SEED, DEFAULT_TOLERANCE,
        Triple, TripleStrategy, TripleViolation, VerificationConfig, VerificationHarness,
        VerificationReport, triangle_inequality,
    },
    weight::{UnitWeight, WeightFunction, WeightTable},
};
