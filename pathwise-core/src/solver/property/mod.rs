//! Property-based tests for the Floyd-Warshall solver.
//!
//! Checks the solver against a Bellman-Ford oracle, validates the structural
//! guarantees of converged results (zero diagonal, triangle inequality,
//! consistent paths), confirms that independent solves agree across threads,
//! and that vertex removal leaves no trace in later solves.

mod concurrency;
mod equivalence;
mod mutation;
mod strategies;
mod structural;
mod types;
