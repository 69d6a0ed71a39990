//! Configuration for a random-indexing vector space.
//!
//! A [`SpaceConfig`] fully determines the behaviour of a
//! [`crate::Builder`]: two builders constructed from equal configs produce
//! bit-identical vectors for the same input. Nothing in here reads the
//! environment or the clock.

use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Parameters of a vector space: window width, dimension and master seed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpaceConfig {
    /// Configuration schema version.
    ///
    /// Must be >= 1. Persisted configs carrying a different version than the
    /// one they were written with should be rejected by the loader.
    pub version: u32,
    /// N-gram window width: the number of trailing characters bound together.
    ///
    /// `0` is accepted and degenerates to plain per-character hashing.
    pub order: usize,
    /// Number of components in every vector of this space.
    pub dimension: usize,
    /// Master seed. The permutation and every character hash derive from it.
    pub seed: u64,
    /// Whether encode calls append a trailing space to each unit unless the
    /// caller says otherwise.
    ///
    /// The boundary character flushes the final partial window, so short
    /// inputs encode observably differently with it disabled.
    pub add_boundary_space: bool,
}

impl SpaceConfig {
    /// Create a new configuration with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram window width. Typical values: 2-5.
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Set the vector dimension. Typical values: 1000-10000.
    /// Larger dimensions make unrelated texts closer to orthogonal.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the master seed.
    /// Vectors are only comparable between spaces sharing a seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the default for the trailing boundary space.
    pub fn with_boundary_space(mut self, add_boundary_space: bool) -> Self {
        self.add_boundary_space = add_boundary_space;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), VectorError> {
        if self.version < 1 {
            return Err(VectorError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.dimension < 1 {
            return Err(VectorError::InvalidConfigDimension {
                dimension: self.dimension,
            });
        }
        Ok(())
    }
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            version: 1,
            order: 3,
            dimension: 10_000,
            seed: 42,
            add_boundary_space: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = SpaceConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.order, 3);
        assert_eq!(cfg.dimension, 10_000);
        assert_eq!(cfg.seed, 42);
        assert!(cfg.add_boundary_space);
    }

    #[test]
    fn config_new_creates_default() {
        assert_eq!(SpaceConfig::new(), SpaceConfig::default());
    }

    #[test]
    fn config_builder_chain() {
        let cfg = SpaceConfig::new()
            .with_order(4)
            .with_dimension(512)
            .with_seed(7)
            .with_boundary_space(false);

        assert_eq!(cfg.order, 4);
        assert_eq!(cfg.dimension, 512);
        assert_eq!(cfg.seed, 7);
        assert!(!cfg.add_boundary_space);
    }

    #[test]
    fn config_validate_valid() {
        assert!(SpaceConfig::default().validate().is_ok());
        assert!(SpaceConfig::new().with_order(0).validate().is_ok());
    }

    #[test]
    fn config_validate_invalid_dimension_zero() {
        let cfg = SpaceConfig::new().with_dimension(0);
        assert_eq!(
            cfg.validate(),
            Err(VectorError::InvalidConfigDimension { dimension: 0 })
        );
    }

    #[test]
    fn config_validate_invalid_version_zero() {
        let cfg = SpaceConfig {
            version: 0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(VectorError::InvalidConfigVersion { version: 0 })
        );
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = SpaceConfig::new().with_order(2).with_seed(12345);

        let serialized = serde_json::to_string(&cfg).unwrap();
        let deserialized: SpaceConfig = serde_json::from_str(&serialized).unwrap();

        assert_eq!(cfg, deserialized);
    }
}
