//! Seeded pseudo-random sources for the vector space.
//!
//! Both the index permutation and the per-character ±1 vectors are drawn
//! from ChaCha8 streams. A stream is a pure function of its `u64` seed and
//! ChaCha output is identical on every platform, so every vector is
//! reproducible from `(seed, codepoint)` alone.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The generator every random draw of a space comes from.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fill `out` with the ±1 hash vector of `codepoint` under `seed`.
///
/// Component `i` is `+1` when bit `i % 64` of the `i / 64`-th draw is set.
pub fn char_hash_into(seed: u64, codepoint: u32, out: &mut [i8]) {
    let mut rng = seeded_rng(seed.wrapping_add(u64::from(codepoint)));
    for chunk in out.chunks_mut(64) {
        let bits = rng.next_u64();
        for (bit, slot) in chunk.iter_mut().enumerate() {
            *slot = if (bits >> bit) & 1 == 1 { 1 } else { -1 };
        }
    }
}

/// Return the ±1 hash vector of `ch` for a space of `dimension` components.
pub fn char_hash(seed: u64, ch: char, dimension: usize) -> Vec<i8> {
    let mut out = vec![0i8; dimension];
    char_hash_into(seed, u32::from(ch), &mut out);
    out
}
