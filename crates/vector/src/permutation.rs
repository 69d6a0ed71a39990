//! Seeded index permutation used as a position encoder.
//!
//! `forward[i]` is the *source* index for destination `i`, i.e. permuting a
//! vector `x` yields `y[i] = x[forward[i]]`. Applying that `k` times is the
//! same as a single gather through `forward` composed with itself `k` times,
//! which is what [`Permutation::order_power`] holds for `k = order`.

use rand::seq::SliceRandom;

use crate::hasher::seeded_rng;

/// A random bijection over `0..dimension` and its `order`-fold power.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<usize>,
    order_power: Vec<usize>,
}

impl Permutation {
    /// Draw the permutation for `(dimension, order, seed)`.
    ///
    /// A uniform shuffle of `0..dimension` driven by the ChaCha8 stream
    /// seeded with `seed`.
    pub fn new(dimension: usize, order: usize, seed: u64) -> Self {
        let mut forward: Vec<usize> = (0..dimension).collect();
        forward.shuffle(&mut seeded_rng(seed));
        let order_power = compose(&forward, order);
        Self {
            forward,
            order_power,
        }
    }

    /// The base permutation table.
    pub fn forward(&self) -> &[usize] {
        &self.forward
    }

    /// The base permutation composed with itself `order` times.
    pub fn order_power(&self) -> &[usize] {
        &self.order_power
    }

    /// The base permutation composed with itself `k` times.
    pub fn power(&self, k: usize) -> Vec<usize> {
        compose(&self.forward, k)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// `k`-fold functional power of `table`; `k = 0` is the identity.
fn compose(table: &[usize], k: usize) -> Vec<usize> {
    (0..table.len())
        .map(|i| (0..k).fold(i, |at, _| table[at]))
        .collect()
}

/// True when `table` maps `0..len` onto itself without repeats.
pub fn is_bijection(table: &[usize]) -> bool {
    let mut seen = vec![false; table.len()];
    for &target in table {
        match seen.get_mut(target) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
