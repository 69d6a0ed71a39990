//! The vector space and its encoding surface.

use tracing::debug;

use crate::codec;
use crate::config::SpaceConfig;
use crate::encoder::{Encoder, Session};
use crate::error::VectorError;
use crate::permutation::Permutation;
use crate::vector::Vector;

/// An immutable vector space: configuration plus precomputed permutations.
///
/// A `Builder` carries no per-call state. Every encode call allocates its
/// own scratch buffers, so one builder can serve any number of calls,
/// including from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Builder {
    config: SpaceConfig,
    permutation: Permutation,
}

/// Create a builder for `(order, dimension, seed)` with the boundary space on.
pub fn make_builder(order: usize, dimension: usize, seed: u64) -> Result<Builder, VectorError> {
    Builder::new(
        SpaceConfig::new()
            .with_order(order)
            .with_dimension(dimension)
            .with_seed(seed),
    )
}

impl Builder {
    pub fn new(config: SpaceConfig) -> Result<Self, VectorError> {
        config.validate()?;
        let permutation = Permutation::new(config.dimension, config.order, config.seed);
        debug!(
            order = config.order,
            dimension = config.dimension,
            seed = config.seed,
            "builder_created"
        );
        Ok(Self {
            config,
            permutation,
        })
    }

    pub fn config(&self) -> &SpaceConfig {
        &self.config
    }

    pub fn order(&self) -> usize {
        self.config.order
    }

    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    /// An all-zero vector of this space, ready to merge into.
    pub fn zeros(&self) -> Vector {
        Vector::zeros(self.dimension())
    }

    /// Encode `text` with the configured boundary-space default.
    pub fn build(&self, text: &str) -> Vector {
        self.build_with_boundary(text, self.config.add_boundary_space)
    }

    /// Encode `text`, appending the boundary space when `add_boundary` is set.
    pub fn build_with_boundary(&self, text: &str, add_boundary: bool) -> Vector {
        let mut result = self.zeros();
        Session::new(self).encode_str(text, add_boundary, result.components_mut());
        result
    }

    /// Encode each line as its own unit and sum the results.
    pub fn build_lines<I, S>(&self, lines: I) -> Vector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_lines_with_boundary(lines, self.config.add_boundary_space)
    }

    pub fn build_lines_with_boundary<I, S>(&self, lines: I, add_boundary: bool) -> Vector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut encoder = self.encoder(add_boundary);
        for line in lines {
            encoder.push_str(line.as_ref());
        }
        encoder.into_vector()
    }

    /// Encode `text` and add the result onto `target`.
    pub fn build_into(&self, target: &mut Vector, text: &str) -> Result<(), VectorError> {
        self.check_dimension(target)?;
        Session::new(self).encode_str(
            text,
            self.config.add_boundary_space,
            target.components_mut(),
        );
        Ok(())
    }

    /// Encode one unit of raw UTF-8.
    ///
    /// Invalid UTF-8 stops the unit at the first bad byte and returns
    /// [`VectorError::MalformedInput`] holding what was encoded before it.
    pub fn build_bytes(&self, bytes: &[u8], add_boundary: bool) -> Result<Vector, VectorError> {
        self.build_byte_lines([bytes], add_boundary)
    }

    /// Encode each byte unit independently into one vector.
    ///
    /// A malformed unit is cut short; the remaining units are still encoded.
    pub fn build_byte_lines<I, B>(&self, units: I, add_boundary: bool) -> Result<Vector, VectorError>
    where
        I: IntoIterator<Item = B>,
        B: AsRef<[u8]>,
    {
        let mut encoder = self.encoder(add_boundary);
        for unit in units {
            encoder.push_bytes(unit.as_ref());
        }
        encoder.finish()
    }

    /// Start an incremental encode into a fresh zero vector.
    pub fn encoder(&self, add_boundary: bool) -> Encoder<'_> {
        Encoder::new(self, add_boundary)
    }

    /// Start an incremental encode on top of an existing vector.
    pub fn encoder_into(&self, target: Vector, add_boundary: bool) -> Result<Encoder<'_>, VectorError> {
        Encoder::resume(self, target, add_boundary)
    }

    /// Serialize a vector of this space.
    pub fn save(&self, vector: &Vector) -> Result<Vec<u8>, VectorError> {
        self.check_dimension(vector)?;
        Ok(codec::save(vector))
    }

    /// Load a vector of this space.
    pub fn load(&self, bytes: &[u8]) -> Result<Vector, VectorError> {
        codec::load(bytes, self.dimension())
    }

    fn check_dimension(&self, vector: &Vector) -> Result<(), VectorError> {
        if vector.dimension() != self.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                actual: vector.dimension(),
            });
        }
        Ok(())
    }
}
