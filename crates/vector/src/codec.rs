//! Text serialization of vectors.
//!
//! The format is one decimal integer per line, in component order, with no
//! header. The dimension is not stored: the loader must be told how many
//! components to expect, normally by the [`crate::Builder`] that produced
//! the vector.
//!
//! ```text
//! 3
//! -1
//! 17
//! ```

use crate::error::VectorError;
use crate::vector::Vector;

/// Serialize `vector` as newline-terminated decimal components.
pub fn save(vector: &Vector) -> Vec<u8> {
    let mut out = String::with_capacity(vector.dimension() * 4);
    for component in vector.components() {
        out.push_str(&component.to_string());
        out.push('\n');
    }
    out.into_bytes()
}

/// Parse the first `expected_dimension` integers from `bytes`.
///
/// Tokens are separated by any ASCII whitespace, so `\r\n` files load too.
/// Tokens beyond `expected_dimension` are ignored.
pub fn load(bytes: &[u8], expected_dimension: usize) -> Result<Vector, VectorError> {
    let mut tokens = bytes
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty());

    // Each component needs at least two bytes, which bounds the allocation
    // for a bogus `expected_dimension`.
    let mut components = Vec::with_capacity(expected_dimension.min(bytes.len() / 2 + 1));
    for index in 0..expected_dimension {
        let Some(token) = tokens.next() else {
            return Err(VectorError::TruncatedSerialization {
                expected: expected_dimension,
                found: index,
            });
        };
        let parsed = std::str::from_utf8(token)
            .ok()
            .and_then(|text| text.parse::<i64>().ok());
        match parsed {
            Some(value) => components.push(value),
            None => {
                return Err(VectorError::InvalidComponent {
                    index,
                    token: String::from_utf8_lossy(token).into_owned(),
                })
            }
        }
    }
    Ok(Vector::from_components(components))
}
