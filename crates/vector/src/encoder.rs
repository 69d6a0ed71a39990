//! Streaming n-gram encoder.
//!
//! The encoder keeps the binding of the last `order` characters in a single
//! ±1 vector. Each new character rotates that binding one position through
//! the permutation, multiplies out the character that just left the window
//! (±1 components are their own inverse), and multiplies in the new
//! character's hash:
//!
//! ```text
//! next[i] = running[perm[i]] * stale[perm^order[i]] * fresh[i]
//! ```
//!
//! Every intermediate window is added to the result, including the partial
//! windows at the start of a unit. Memory per call is `order + 3` vectors of
//! the space dimension, independent of input length.
//!
//! Each window moves every component by exactly ±1, so accumulation is
//! unchecked: a component cannot leave the `i64` range before 2^63 windows
//! have been added to it. Combining existing vectors goes through
//! [`crate::merge`], which checks.

use tracing::warn;

use crate::builder::Builder;
use crate::error::VectorError;
use crate::hasher::char_hash_into;
use crate::vector::Vector;

/// Codepoint appended after each unit to flush the final window.
pub const BOUNDARY_CHAR: char = ' ';

/// Per-call scratch state: the running binding and the character history.
pub(crate) struct Session<'b> {
    builder: &'b Builder,
    running: Vec<i8>,
    next: Vec<i8>,
    /// Ring of `order + 1` character hashes; `head` is the write slot and
    /// `head + 1` holds the hash that is `order` characters old.
    history: Vec<Vec<i8>>,
    head: usize,
}

impl<'b> Session<'b> {
    pub(crate) fn new(builder: &'b Builder) -> Self {
        let dimension = builder.dimension();
        Self {
            builder,
            running: vec![1; dimension],
            next: vec![1; dimension],
            history: vec![vec![1; dimension]; builder.order() + 1],
            head: 0,
        }
    }

    fn reset(&mut self) {
        self.running.fill(1);
        for slot in &mut self.history {
            slot.fill(1);
        }
        self.head = 0;
    }

    fn push(&mut self, ch: char, result: &mut [i64]) {
        let seed = self.builder.seed();
        let width = self.history.len();

        if width == 1 {
            // order 0: no window, each character stands alone.
            let fresh = &mut self.history[0];
            char_hash_into(seed, u32::from(ch), fresh);
            for (r, &h) in result.iter_mut().zip(fresh.iter()) {
                *r += i64::from(h);
            }
            return;
        }

        let mut fresh = std::mem::take(&mut self.history[self.head]);
        char_hash_into(seed, u32::from(ch), &mut fresh);

        let stale = &self.history[(self.head + 1) % width];
        let permutation = self.builder.permutation();
        let forward = permutation.forward();
        let power = permutation.order_power();
        for i in 0..result.len() {
            let bound = self.running[forward[i]] * stale[power[i]] * fresh[i];
            self.next[i] = bound;
            result[i] += i64::from(bound);
        }

        self.history[self.head] = fresh;
        std::mem::swap(&mut self.running, &mut self.next);
        self.head = (self.head + 1) % width;
    }

    /// Encode one unit of text into `result`.
    pub(crate) fn encode_str(&mut self, text: &str, add_boundary: bool, result: &mut [i64]) {
        self.reset();
        for ch in text.chars() {
            self.push(ch, result);
        }
        if add_boundary {
            self.push(BOUNDARY_CHAR, result);
        }
    }

    /// Encode one unit of UTF-8 bytes into `result`.
    ///
    /// On invalid UTF-8 the unit stops at the first bad byte, without the
    /// boundary character, and the byte offset is returned.
    pub(crate) fn encode_bytes(
        &mut self,
        bytes: &[u8],
        add_boundary: bool,
        result: &mut [i64],
    ) -> Result<(), usize> {
        match std::str::from_utf8(bytes) {
            Ok(text) => {
                self.encode_str(text, add_boundary, result);
                Ok(())
            }
            Err(err) => {
                let offset = err.valid_up_to();
                let prefix = std::str::from_utf8(&bytes[..offset]).unwrap_or_default();
                self.encode_str(prefix, false, result);
                Err(offset)
            }
        }
    }
}

/// Incremental encoder accumulating any number of units into one vector.
///
/// Obtained from [`Builder::encoder`]. Each pushed unit starts with a fresh
/// window; contributions of all units are summed, so pushing lines one by
/// one equals encoding each line and merging the results.
pub struct Encoder<'b> {
    session: Session<'b>,
    result: Vector,
    add_boundary: bool,
    units: usize,
    malformed: Option<(usize, usize)>,
}

impl<'b> Encoder<'b> {
    pub(crate) fn new(builder: &'b Builder, add_boundary: bool) -> Self {
        Self {
            session: Session::new(builder),
            result: Vector::zeros(builder.dimension()),
            add_boundary,
            units: 0,
            malformed: None,
        }
    }

    pub(crate) fn resume(
        builder: &'b Builder,
        target: Vector,
        add_boundary: bool,
    ) -> Result<Self, VectorError> {
        if target.dimension() != builder.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: builder.dimension(),
                actual: target.dimension(),
            });
        }
        Ok(Self {
            session: Session::new(builder),
            result: target,
            add_boundary,
            units: 0,
            malformed: None,
        })
    }

    /// Encode one unit of text.
    pub fn push_str(&mut self, text: &str) {
        self.session
            .encode_str(text, self.add_boundary, self.result.components_mut());
        self.units += 1;
    }

    /// Encode one unit of raw bytes.
    ///
    /// Malformed UTF-8 halts this unit only; later units are still encoded
    /// and [`Encoder::finish`] reports the first malformed unit.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        let unit = self.units;
        if let Err(offset) =
            self.session
                .encode_bytes(bytes, self.add_boundary, self.result.components_mut())
        {
            warn!(unit, offset, len = bytes.len(), "malformed_input");
            self.malformed.get_or_insert((unit, offset));
        }
        self.units += 1;
    }

    /// Number of units pushed so far.
    pub fn units(&self) -> usize {
        self.units
    }

    /// Whether any pushed unit contained malformed UTF-8.
    pub fn is_malformed(&self) -> bool {
        self.malformed.is_some()
    }

    /// Read-only view of the accumulated vector.
    pub fn current(&self) -> &Vector {
        &self.result
    }

    /// Accumulated vector of an encoder fed only `&str` units.
    pub(crate) fn into_vector(self) -> Vector {
        self.result
    }

    /// Return the accumulated vector, or the partial result wrapped in
    /// [`VectorError::MalformedInput`] if any unit was malformed.
    pub fn finish(self) -> Result<Vector, VectorError> {
        match self.malformed {
            None => Ok(self.result),
            Some((unit, offset)) => Err(VectorError::MalformedInput {
                unit,
                offset,
                partial: Box::new(self.result),
            }),
        }
    }
}
