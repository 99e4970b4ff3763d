//! Triple enumeration and seeded sampling.

use rand::{Rng, SeedableRng, rngs::SmallRng};

/// `(source, target, intermediate)` matrix positions.
pub(super) type Positions = (usize, usize, usize);

/// Every triple over `n` positions, intermediate-major like the solver loop.
pub(super) fn exhaustive(n: usize) -> impl Iterator<Item = Positions> {
    (0..n).flat_map(move |k| (0..n).flat_map(move |i| (0..n).map(move |j| (i, j, k))))
}

/// `count` triples drawn uniformly with replacement from a seeded RNG.
///
/// Yields nothing when `n` is zero.
pub(super) fn sampled(n: usize, count: usize, seed: u64) -> impl Iterator<Item = Positions> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let count = if n == 0 { 0 } else { count };
    (0..count).map(move |_| {
        (
            rng.gen_range(0..n),
            rng.gen_range(0..n),
            rng.gen_range(0..n),
        )
    })
}
