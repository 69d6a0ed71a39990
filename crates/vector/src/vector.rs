//! Integer language vectors and the algebra over them.
//!
//! Every operation requires both operands to have the same dimension and
//! fails with [`VectorError::DimensionMismatch`] otherwise; nothing is ever
//! truncated to the shorter operand.

use serde::{Deserialize, Serialize};

use crate::error::VectorError;

/// Guards the cosine denominator against all-zero vectors.
pub const SCORE_EPSILON: f64 = 1e-9;

/// An accumulated random-indexing vector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Vector {
    components: Vec<i64>,
}

impl Vector {
    /// The all-zero vector, the identity for [`merge`].
    pub fn zeros(dimension: usize) -> Self {
        Self {
            components: vec![0; dimension],
        }
    }

    pub fn from_components(components: Vec<i64>) -> Self {
        Self { components }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn components(&self) -> &[i64] {
        &self.components
    }

    pub fn into_components(self) -> Vec<i64> {
        self.components
    }

    pub(crate) fn components_mut(&mut self) -> &mut [i64] {
        &mut self.components
    }

    pub fn is_zero(&self) -> bool {
        self.components.iter().all(|&c| c == 0)
    }

    /// Accumulate `source` into `self`.
    pub fn merge(&mut self, source: &Vector) -> Result<(), VectorError> {
        merge(self, source)
    }

    /// Accumulate `weight * source` into `self`.
    pub fn wmerge(&mut self, source: &Vector, weight: i64) -> Result<(), VectorError> {
        wmerge(self, source, weight)
    }

    /// Cosine similarity against `other`.
    pub fn score(&self, other: &Vector) -> Result<f64, VectorError> {
        score(self, other)
    }

    /// Dot product as `f64`.
    pub fn dot(&self, other: &Vector) -> Result<f64, VectorError> {
        check_dimensions(self, other)?;
        Ok(dot(&self.components, &other.components))
    }

    /// Sum of squared components as `f64`.
    pub fn norm_squared(&self) -> f64 {
        dot(&self.components, &self.components)
    }
}

impl From<Vec<i64>> for Vector {
    fn from(components: Vec<i64>) -> Self {
        Self::from_components(components)
    }
}

pub(crate) fn check_dimensions(expected: &Vector, actual: &Vector) -> Result<(), VectorError> {
    if expected.dimension() != actual.dimension() {
        return Err(VectorError::DimensionMismatch {
            expected: expected.dimension(),
            actual: actual.dimension(),
        });
    }
    Ok(())
}

/// `target[i] += source[i]` for every component.
///
/// Merging a set of vectors yields the same target in any order. Fails with
/// [`VectorError::ComponentOverflow`] if a sum leaves the `i64` range, in
/// which case `target` is unchanged.
pub fn merge(target: &mut Vector, source: &Vector) -> Result<(), VectorError> {
    wmerge(target, source, 1)
}

/// `target[i] += weight * source[i]` for every component.
///
/// With `weight == 1` this is exactly [`merge`]. Other weights make the
/// result depend on which operand is the target. Overflow is reported as
/// for [`merge`] and leaves `target` unchanged.
pub fn wmerge(target: &mut Vector, source: &Vector, weight: i64) -> Result<(), VectorError> {
    check_dimensions(target, source)?;
    let merged = target
        .components
        .iter()
        .zip(&source.components)
        .enumerate()
        .map(|(index, (&t, &s))| {
            s.checked_mul(weight)
                .and_then(|scaled| t.checked_add(scaled))
                .ok_or(VectorError::ComponentOverflow { index })
        })
        .collect::<Result<Vec<i64>, VectorError>>()?;
    target.components = merged;
    Ok(())
}

/// Cosine similarity: `dot(a, b) / sqrt(|a|² · |b|² + ε)`.
///
/// `1` is a perfect match, `-1` the worst; unrelated texts land near `0`.
/// The expression is symmetric term by term, so `score(a, b)` and
/// `score(b, a)` are bit-identical.
pub fn score(a: &Vector, b: &Vector) -> Result<f64, VectorError> {
    check_dimensions(a, b)?;
    let mut sum_ab = 0.0f64;
    let mut sum_aa = 0.0f64;
    let mut sum_bb = 0.0f64;
    for (&x, &y) in a.components.iter().zip(&b.components) {
        let (x, y) = (x as f64, y as f64);
        sum_ab += x * y;
        sum_aa += x * x;
        sum_bb += y * y;
    }
    Ok(sum_ab / (sum_aa * sum_bb + SCORE_EPSILON).sqrt())
}

fn dot(a: &[i64], b: &[i64]) -> f64 {
    a.iter().zip(b).map(|(&x, &y)| x as f64 * y as f64).sum()
}
