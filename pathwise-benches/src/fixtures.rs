//! Deterministic synthetic graphs for benchmarking.
//!
//! Edges are drawn independently per ordered vertex pair and carry positive
//! integral weights, so every generated graph converges without a
//! negative-weight cycle.

use pathwise_core::{
    DiGraph, EdgeMutable, ShortestPaths, Solver, VertexId, VertexMutable, WeightTable,
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a random directed graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices to generate.
    pub vertex_count: usize,
    /// Probability that an ordered pair `(u, v)` with `u != v` gets an edge.
    pub edge_probability: f64,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A generated graph together with the weights of its edges.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    /// The generated graph, keyed by vertex index.
    pub graph: DiGraph<usize>,
    /// Vertex handles in insertion order.
    pub vertices: Vec<VertexId>,
    /// Weight of every generated edge.
    pub weights: WeightTable,
}

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
    /// `max_weight` is zero and [`BenchSetupError::InvalidProbability`] when
    /// `edge_probability` lies outside `(0, 1]`.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, BenchSetupError> {
        if config.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if config.max_weight == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "max_weight",
            });
        }
        if !(config.edge_probability > 0.0 && config.edge_probability <= 1.0) {
            return Err(BenchSetupError::InvalidProbability {
                got: config.edge_probability,
            });
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut graph = DiGraph::with_capacity(config.vertex_count, 0);
        let vertices = (0..config.vertex_count)
            .map(|key| graph.add_vertex(key))
            .collect::<Result<Vec<_>, _>>()?;

        let mut weights = WeightTable::new(1.0);
        for &source in &vertices {
            for &target in vertices.iter().filter(|&&target| target != source) {
                if !rng.gen_bool(config.edge_probability) {
                    continue;
                }
                let edge = graph.add_edge(source, target)?;
                weights.insert(edge, f64::from(rng.gen_range(1..=config.max_weight)));
            }
        }

        Ok(Self {
            graph,
            vertices,
            weights,
        })
    }

    /// Solves the graph with a default solver.
    ///
    /// # Errors
    /// Propagates solver failures. Generated weights are positive, so a
    /// negative-cycle outcome indicates a bug.
    pub fn solve(&self) -> Result<ShortestPaths, BenchSetupError> {
        let outcome = Solver::default().solve(&self.graph, &self.weights)?;
        Ok(outcome.into_shortest_paths()?)
    }
}
