//! Shuffle and constrained-pick primitives.
//!
//! Every randomized decision in the crate funnels through these helpers so
//! callers can inject a seeded generator and replay an exact round.

use rand::seq::SliceRandom;
use rand::Rng;

/// A new vector holding the elements of `items` in uniformly random order.
/// The input slice is left untouched.
pub fn shuffle<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Uniform index in `[0, n)`. Panics if `n` is zero.
pub fn pick_index<R: Rng>(rng: &mut R, n: usize) -> usize {
    rng.random_range(0..n)
}

/// `k` distinct indices drawn without replacement from `[0, n)`, in random
/// order. Panics if `k > n`.
pub fn pick_distinct_indices<R: Rng>(rng: &mut R, n: usize, k: usize) -> Vec<usize> {
    rand::seq::index::sample(rng, n, k).into_vec()
}
