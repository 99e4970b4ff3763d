//! Error types for the pathwise core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

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

/// Structural violation raised by graph store mutations and lookups.
///
/// A failed call leaves the store exactly as it was before the call.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex with the same key is already present.
    #[error("vertex key is already bound to {existing}")]
    DuplicateVertex {
        /// Handle currently bound to the key.
        existing: VertexId,
    },
    /// The vertex handle does not refer to a live vertex.
    #[error("vertex {vertex} is not present in the graph")]
    UnknownVertex {
        /// The stale or foreign handle.
        vertex: VertexId,
    },
    /// The edge handle does not refer to a live edge.
    #[error("edge {edge} is not present in the graph")]
    UnknownEdge {
        /// The stale or foreign handle.
        edge: EdgeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex with the same key is already present.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// The vertex handle does not refer to a live vertex.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// The edge handle does not refer to a live edge.
        UnknownEdge => UnknownEdge { .. } => "GRAPH_UNKNOWN_EDGE",
    }
}

/// Error raised while running the Floyd-Warshall solver.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SolveError {
    /// The weight function returned NaN or an infinity for an edge.
    #[error("edge {edge} ({source_vertex} -> {target_vertex}) has a non-finite weight")]
    NonFiniteWeight {
        /// Edge whose weight was rejected.
        edge: EdgeId,
        /// Tail of the rejected edge.
        source_vertex: VertexId,
        /// Head of the rejected edge.
        target_vertex: VertexId,
    },
    /// The configured deadline elapsed before every intermediate was processed.
    #[error("deadline exceeded after {completed} of {total} intermediate vertices")]
    DeadlineExceeded {
        /// Outer iterations fully processed before aborting.
        completed: usize,
        /// Outer iterations required for convergence.
        total: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SolveError`] variants.
    enum SolveErrorCode for SolveError {
        /// The weight function returned NaN or an infinity for an edge.
        NonFiniteWeight => NonFiniteWeight { .. } => "SOLVE_NON_FINITE_WEIGHT",
        /// The configured deadline elapsed before convergence.
        DeadlineExceeded => DeadlineExceeded { .. } => "SOLVE_DEADLINE_EXCEEDED",
    }
}

/// Error raised while querying distances or reconstructing paths.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PathError {
    /// The vertex was not part of the snapshot that was solved.
    #[error("vertex {vertex} was not part of the solved snapshot")]
    UnknownVertex {
        /// The handle missing from the snapshot.
        vertex: VertexId,
    },
    /// No path connects the pair.
    #[error("no path from {source_vertex} to {target_vertex}")]
    NoPath {
        /// Requested start of the path.
        source_vertex: VertexId,
        /// Requested end of the path.
        target_vertex: VertexId,
    },
    /// The predecessor matrix contradicts the distance matrix or itself.
    ///
    /// This indicates corrupted solver output and is never expected from a
    /// correct solve.
    #[error(
        "inconsistent predecessor state reconstructing {source_vertex} -> {target_vertex}: {reason}"
    )]
    InconsistentState {
        /// Requested start of the path.
        source_vertex: VertexId,
        /// Requested end of the path.
        target_vertex: VertexId,
        /// Description of the contradiction.
        reason: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`PathError`] variants.
    enum PathErrorCode for PathError {
        /// The vertex was not part of the solved snapshot.
        UnknownVertex => UnknownVertex { .. } => "PATH_UNKNOWN_VERTEX",
        /// No path connects the pair.
        NoPath => NoPath { .. } => "PATH_NO_PATH",
        /// The predecessor matrix is inconsistent.
        InconsistentState => InconsistentState { .. } => "PATH_INCONSISTENT_STATE",
    }
}

/// Invalid configuration supplied to a builder or the verification harness.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A deadline of zero would abort every non-trivial solve.
    #[error("solver deadline must be greater than zero")]
    ZeroDeadline,
    /// Sampled verification needs at least one triple.
    #[error("sample_count must be at least 1 (got {got})")]
    InvalidSampleCount {
        /// The rejected sample count.
        got: usize,
    },
    /// Tolerances must be finite and non-negative.
    #[error("tolerance must be finite and non-negative (got {got})")]
    InvalidTolerance {
        /// The rejected tolerance.
        got: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// A deadline of zero was supplied.
        ZeroDeadline => ZeroDeadline => "CONFIG_ZERO_DEADLINE",
        /// Sample count was zero.
        InvalidSampleCount => InvalidSampleCount { .. } => "CONFIG_INVALID_SAMPLE_COUNT",
        /// Tolerance was negative or non-finite.
        InvalidTolerance => InvalidTolerance { .. } => "CONFIG_INVALID_TOLERANCE",
    }
}

/// Returned by [`crate::SolveOutcome::into_shortest_paths`] when the solve
/// found a negative-weight cycle.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("negative-weight cycle detected through {} vertex(es)", .vertices.len())]
pub struct NegativeCycleDetected {
    vertices: Vec<VertexId>,
}

impl NegativeCycleDetected {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Vertices whose self-distance became negative, in snapshot order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }
}

/// Umbrella error for callers that chain graph, solver and path operations.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PathwiseError {
    /// A graph store operation failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The solver aborted.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// A distance query or path reconstruction failed.
    #[error(transparent)]
    Path(#[from] PathError),
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The solve finished with a negative-weight cycle.
    #[error(transparent)]
    NegativeCycle(#[from] NegativeCycleDetected),
}

define_error_codes! {
    /// Stable codes describing [`PathwiseError`] variants.
    enum PathwiseErrorCode for PathwiseError {
        /// A graph store operation failed.
        Graph => Graph { .. } => "PATHWISE_GRAPH",
        /// The solver aborted.
        Solve => Solve { .. } => "PATHWISE_SOLVE",
        /// A distance query or path reconstruction failed.
        Path => Path { .. } => "PATHWISE_PATH",
        /// Configuration was rejected.
        Config => Config { .. } => "PATHWISE_CONFIG",
        /// The solve finished with a negative-weight cycle.
        NegativeCycle => NegativeCycle { .. } => "PATHWISE_NEGATIVE_CYCLE",
    }
}

impl PathwiseError {
    /// Retrieve the code of the wrapped error as a string, so a single log
    /// field can carry both layers.
    #[must_use]
    pub const fn inner_code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Solve(error) => error.code().as_str(),
            Self::Path(error) => error.code().as_str(),
            Self::Config(error) => error.code().as_str(),
            Self::NegativeCycle(_) => "NEGATIVE_CYCLE_DETECTED",
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PathwiseError>;
