//! Correctness checks over converged shortest-path results.
//!
//! A [`VerificationHarness`] feeds `(source, target, intermediate)` triples to
//! a predicate. Without an injected predicate it checks the triangle
//! inequality `D[s][t] <= D[s][k] + D[k][t]`. Small results are checked
//! exhaustively; larger ones are sampled from a seeded RNG so runs are
//! reproducible.

mod sampling;

use std::fmt;

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    error::ConfigError,
    graph::VertexId,
    solver::ShortestPaths,
};

/// Default vertex count up to which, inclusive, every triple is checked.
pub const DEFAULT_EXHAUSTIVE_THRESHOLD: usize = 64;
/// Default number of triples drawn above the exhaustive threshold.
pub const DEFAULT_SAMPLE_COUNT: usize = 10_000;
/// Default seed for sampled verification.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;
/// Default absolute tolerance of the triangle-inequality predicate.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// How the harness picks triples.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TripleStrategy {
    /// Exhaustive while `n <= exhaustive_threshold`, sampled above it.
    #[default]
    Auto,
    /// Every triple regardless of size.
    Exhaustive,
    /// Seeded sampling regardless of size.
    Sampled,
}

/// Settings shared by every harness run.
///
/// # Examples
/// ```
/// use pathwise_core::VerificationConfig;
///
/// let config = VerificationConfig::new(32, 2_000)?
///     .with_seed(7)
///     .with_tolerance(1e-6)?;
/// assert_eq!(config.sample_count(), 2_000);
/// # Ok::<(), pathwise_core::ConfigError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerificationConfig {
    exhaustive_threshold: usize,
    sample_count: usize,
    seed: u64,
    tolerance: f64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            exhaustive_threshold: DEFAULT_EXHAUSTIVE_THRESHOLD,
            sample_count: DEFAULT_SAMPLE_COUNT,
            seed: DEFAULT_SEED,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl VerificationConfig {
    /// Creates a configuration with the default seed and tolerance.
    ///
    /// Results with at most `exhaustive_threshold` vertices are checked
    /// exhaustively under [`TripleStrategy::Auto`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidSampleCount`] when `sample_count` is zero.
    pub fn new(exhaustive_threshold: usize, sample_count: usize) -> Result<Self, ConfigError> {
        if sample_count == 0 {
            return Err(ConfigError::InvalidSampleCount { got: sample_count });
        }
        Ok(Self {
            exhaustive_threshold,
            sample_count,
            ..Self::default()
        })
    }

    /// Overrides the sampling seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Overrides the absolute tolerance of the default predicate.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidTolerance`] when `tolerance` is negative,
    /// NaN or infinite.
    pub fn with_tolerance(mut self, tolerance: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance { got: tolerance });
        }
        self.tolerance = tolerance;
        Ok(self)
    }

    /// Largest vertex count for which [`TripleStrategy::Auto`] checks every
    /// triple; the bound is inclusive.
    #[must_use]
    #[rustfmt::skip]
    pub fn exhaustive_threshold(&self) -> usize { self.exhaustive_threshold }

    /// Triples drawn by sampled runs.
    #[must_use]
    #[rustfmt::skip]
    pub fn sample_count(&self) -> usize { self.sample_count }

    /// Seed of the sampling RNG.
    #[must_use]
    #[rustfmt::skip]
    pub fn seed(&self) -> u64 { self.seed }

    /// Absolute slack allowed by [`triangle_inequality`].
    #[must_use]
    #[rustfmt::skip]
    pub fn tolerance(&self) -> f64 { self.tolerance }
}

/// A `(source, target, intermediate)` triple handed to the predicate.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Triple {
    /// Start of the checked pair.
    pub source: VertexId,
    /// End of the checked pair.
    pub target: VertexId,
    /// Vertex the pair is routed through.
    pub intermediate: VertexId,
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} via {}",
            self.source, self.target, self.intermediate
        )
    }
}

/// A triple the predicate rejected, with the distances involved.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("predicate rejected {triple}: direct distance {direct}, routed distance {routed}")]
pub struct TripleViolation {
    /// The rejected triple.
    pub triple: Triple,
    /// `D[source][target]`.
    pub direct: f64,
    /// `D[source][intermediate] + D[intermediate][target]`.
    pub routed: f64,
}

/// Outcome of a [`VerificationHarness::collect`] run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VerificationReport {
    /// Number of triples handed to the predicate.
    pub checked: usize,
    /// Every rejected triple in evaluation order.
    pub violations: Vec<TripleViolation>,
}

impl VerificationReport {
    /// Returns `true` when no triple was rejected.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Returns `true` when routing `source → target` through `intermediate`
/// cannot beat the stored distance by more than `tolerance`.
///
/// Unreachable halves never violate the inequality.
#[must_use]
pub fn triangle_inequality(
    paths: &ShortestPaths,
    source: VertexId,
    target: VertexId,
    intermediate: VertexId,
    tolerance: f64,
) -> bool {
    match distances(paths, source, target, intermediate) {
        Some((direct, routed)) => direct <= routed + tolerance,
        None => false,
    }
}

fn distances(
    paths: &ShortestPaths,
    source: VertexId,
    target: VertexId,
    intermediate: VertexId,
) -> Option<(f64, f64)> {
    let direct = paths.distance(source, target).ok()?;
    let first = paths.distance(source, intermediate).ok()?;
    let second = paths.distance(intermediate, target).ok()?;
    Some((direct, first + second))
}

enum EvaluationMode<'a> {
    FailFast,
    Collect(&'a mut Vec<TripleViolation>),
}

impl EvaluationMode<'_> {
    fn record(&mut self, violation: TripleViolation) -> Result<(), TripleViolation> {
        match self {
            Self::FailFast => Err(violation),
            Self::Collect(sink) => {
                sink.push(violation);
                Ok(())
            }
        }
    }
}

/// Drives a predicate over triples of a converged result.
///
/// # Examples
/// ```
/// use pathwise_core::{DiGraph, EdgeMutable, Solver, UnitWeight, VertexMutable};
///
/// let mut graph = DiGraph::new();
/// let a = graph.add_vertex(0)?;
/// let b = graph.add_vertex(1)?;
/// graph.add_edge(a, b)?;
/// let paths = Solver::default().solve(&graph, &UnitWeight)?.into_shortest_paths()?;
///
/// let checked = paths.verifier(Default::default()).check()?;
/// assert_eq!(checked, 8);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct VerificationHarness<'paths> {
    paths: &'paths ShortestPaths,
    config: VerificationConfig,
    strategy: TripleStrategy,
}

impl<'paths> VerificationHarness<'paths> {
    /// Creates a harness using [`TripleStrategy::Auto`].
    #[must_use]
    pub fn new(paths: &'paths ShortestPaths, config: VerificationConfig) -> Self {
        Self {
            paths,
            config,
            strategy: TripleStrategy::Auto,
        }
    }

    /// Forces a triple-selection strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: TripleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the strategy that will actually run for this result.
    #[must_use]
    pub fn effective_strategy(&self) -> TripleStrategy {
        match self.strategy {
            TripleStrategy::Auto if self.paths.vertex_count() <= self.config.exhaustive_threshold => {
                TripleStrategy::Exhaustive
            }
            TripleStrategy::Auto => TripleStrategy::Sampled,
            forced => forced,
        }
    }

    /// Checks the triangle inequality, stopping at the first violation.
    ///
    /// Returns the number of triples checked.
    ///
    /// # Errors
    /// Returns the first [`TripleViolation`] found.
    pub fn check(&self) -> Result<usize, TripleViolation> {
        let tolerance = self.config.tolerance;
        self.check_with(|paths, s, t, k| triangle_inequality(paths, s, t, k, tolerance))
    }

    /// Runs `predicate`, stopping at the first triple it rejects.
    ///
    /// # Errors
    /// Returns the first [`TripleViolation`] found.
    #[instrument(
        name = "verify.check",
        err,
        skip(self, predicate),
        fields(vertices = self.paths.vertex_count(), strategy = ?self.effective_strategy()),
    )]
    pub fn check_with<P>(&self, predicate: P) -> Result<usize, TripleViolation>
    where
        P: FnMut(&ShortestPaths, VertexId, VertexId, VertexId) -> bool,
    {
        let mut checked = 0;
        self.run(predicate, EvaluationMode::FailFast, &mut checked)?;
        Ok(checked)
    }

    /// Checks the triangle inequality over every selected triple.
    #[must_use]
    pub fn collect(&self) -> VerificationReport {
        let tolerance = self.config.tolerance;
        self.collect_with(|paths, s, t, k| triangle_inequality(paths, s, t, k, tolerance))
    }

    /// Runs `predicate` over every selected triple and reports all rejections.
    #[instrument(
        name = "verify.collect",
        skip(self, predicate),
        fields(vertices = self.paths.vertex_count(), strategy = ?self.effective_strategy()),
    )]
    pub fn collect_with<P>(&self, predicate: P) -> VerificationReport
    where
        P: FnMut(&ShortestPaths, VertexId, VertexId, VertexId) -> bool,
    {
        let mut violations = Vec::new();
        let mut checked = 0;
        let _ = self.run(
            predicate,
            EvaluationMode::Collect(&mut violations),
            &mut checked,
        );
        debug!(checked, violations = violations.len(), "verification finished");
        VerificationReport {
            checked,
            violations,
        }
    }

    fn run<P>(
        &self,
        mut predicate: P,
        mut mode: EvaluationMode<'_>,
        checked: &mut usize,
    ) -> Result<(), TripleViolation>
    where
        P: FnMut(&ShortestPaths, VertexId, VertexId, VertexId) -> bool,
    {
        let n = self.paths.vertex_count();
        let triples: Box<dyn Iterator<Item = sampling::Positions>> = match self.effective_strategy()
        {
            TripleStrategy::Sampled => Box::new(sampling::sampled(
                n,
                self.config.sample_count,
                self.config.seed,
            )),
            TripleStrategy::Auto | TripleStrategy::Exhaustive => Box::new(sampling::exhaustive(n)),
        };

        let vertices = self.paths.vertices();
        for (i, j, k) in triples {
            let triple = Triple {
                source: vertices[i],
                target: vertices[j],
                intermediate: vertices[k],
            };
            *checked += 1;
            if predicate(self.paths, triple.source, triple.target, triple.intermediate) {
                continue;
            }
            let (direct, routed) = distances(
                self.paths,
                triple.source,
                triple.target,
                triple.intermediate,
            )
            .unwrap_or((f64::NAN, f64::NAN));
            mode.record(TripleViolation {
                triple,
                direct,
                routed,
            })?;
        }
        Ok(())
    }
}

impl ShortestPaths {
    /// Returns a verification harness over this result.
    #[must_use]
    pub fn verifier(&self, config: VerificationConfig) -> VerificationHarness<'_> {
        VerificationHarness::new(self, config)
    }
}
