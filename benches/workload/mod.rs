//! Seeded index workloads shared by the benchmarks and their tests.

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// `count` positions in `0..len`, for a list whose length does not change.
pub fn positions(len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..len)).collect()
}

/// Removal positions for a list that starts at `len` and loses one element
/// per step: step `k` draws from `0..len - k`. Requires `count <= len`.
pub fn removal_positions(len: usize, count: usize, seed: u64) -> Vec<usize> {
    assert!(count <= len, "cannot remove {} of {} elements", count, len);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|k| rng.gen_range(0..len - k)).collect()
}
