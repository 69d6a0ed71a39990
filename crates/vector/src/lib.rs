//! # langrv vector core
//!
//! Random-indexing language vectors. Every character maps to a seeded
//! pseudo-random ±1 vector; sliding windows of `order` characters are bound
//! together by elementwise multiplication after rotating each character
//! through a fixed random permutation according to its position in the
//! window. The vector of a text is the sum of all of its windows, so texts
//! sharing many character n-grams point in similar directions while
//! unrelated texts are close to orthogonal.
//!
//! A language vector is the sum of many text vectors; new text is
//! classified by scoring it against candidate language vectors.
//!
//! ## Contract
//!
//! - Output is a pure function of `(text, SpaceConfig)`: no I/O, no clocks,
//!   no global or thread-local state.
//! - A [`Builder`] is immutable after construction and `Send + Sync`.
//! - Vectors of different dimensions never combine; every binary operation
//!   checks and fails with [`VectorError::DimensionMismatch`].
//!
//! ## Example Usage
//!
//! ```
//! use langvec::{make_builder, merge, score};
//!
//! let builder = make_builder(3, 10_000, 42).unwrap();
//!
//! let mut english = builder.build("this is an impossibly small amount of text");
//! merge(&mut english, &builder.build("another document, also in English")).unwrap();
//! let french = builder.build("c'est le premiere heure depuis minuit, non?");
//!
//! let probe = builder.build("a short English sentence");
//! assert!(score(&english, &probe).unwrap() > score(&french, &probe).unwrap());
//!
//! let bytes = builder.save(&english).unwrap();
//! assert_eq!(builder.load(&bytes).unwrap(), english);
//! ```

pub mod builder;
pub mod codec;
pub mod config;
pub mod encoder;
pub mod error;
pub mod hasher;
pub mod permutation;
pub mod vector;

pub use crate::builder::{make_builder, Builder};
pub use crate::config::SpaceConfig;
pub use crate::encoder::{Encoder, BOUNDARY_CHAR};
pub use crate::error::VectorError;
pub use crate::hasher::char_hash;
pub use crate::permutation::Permutation;
pub use crate::vector::{merge, score, wmerge, Vector, SCORE_EPSILON};

/// Current encoder algorithm version.
///
/// Bumped whenever the permutation draw, the character hash or the window
/// update changes in a way that alters output vectors.
pub const ENCODER_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const ENCODER_ALGORITHM: &str = "chacha8_permuted_ngram_v1";

#[cfg(test)]
mod tests {
    use super::*;

    // Frozen outputs. A change here means previously saved vectors are no
    // longer comparable and ENCODER_VERSION must be bumped.

    #[test]
    fn golden_permutation() {
        let p = Permutation::new(8, 3, 42);
        assert_eq!(p.forward(), &[0, 3, 4, 6, 2, 7, 1, 5]);
        assert_eq!(p.order_power(), &[0, 1, 4, 3, 2, 7, 6, 5]);
    }

    #[test]
    fn golden_char_hash() {
        assert_eq!(char_hash(42, 'a', 8), vec![-1, -1, 1, 1, 1, -1, 1, 1]);
    }

    #[test]
    fn golden_vectors() {
        let b = make_builder(3, 8, 42).unwrap();
        assert_eq!(b.build("ab").components(), &[-3, 1, 1, 3, 1, 1, 3, 1]);

        let b = make_builder(2, 12, 7).unwrap();
        assert_eq!(
            b.build_with_boundary("hello", false).components(),
            &[-1, -3, 1, 1, 1, -3, -1, 3, 3, 1, -1, 1]
        );
    }
}
