//! Language vectors from line-oriented corpora.
//!
//! Every line of the reader is one unit: its window starts fresh and the
//! boundary space (when enabled) is appended after it. Lines are split on
//! `\n`; a trailing `\r` is dropped so CRLF files encode like LF files.

use std::io::BufRead;
use std::time::Instant;

use langvec::{Builder, Vector};
use serde::{Deserialize, Serialize};
use tracing::{info, warn, Level};

use crate::LangrvError;

/// Slice of a corpus that feeds a language vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingWindow {
    /// Lines discarded before the first training line.
    pub skip_lines: usize,
    /// Cap on training lines; `None` reads to end of input.
    pub max_lines: Option<usize>,
}

impl TrainingWindow {
    pub fn new(skip_lines: usize, max_lines: Option<usize>) -> Self {
        Self {
            skip_lines,
            max_lines,
        }
    }

    fn is_full(&self, taken: usize) -> bool {
        self.max_lines.is_some_and(|max| taken >= max)
    }
}

/// Encode every line of `reader` into one vector.
pub fn build_from_reader<R: BufRead>(
    builder: &Builder,
    reader: R,
    add_boundary: bool,
) -> Result<Vector, LangrvError> {
    encode_lines(builder, reader, &TrainingWindow::default(), add_boundary)
}

/// Encode the lines selected by `window` into a language vector, using the
/// builder's configured boundary default.
pub fn train_language<R: BufRead>(
    builder: &Builder,
    reader: R,
    window: &TrainingWindow,
) -> Result<Vector, LangrvError> {
    encode_lines(
        builder,
        reader,
        window,
        builder.config().add_boundary_space,
    )
}

fn encode_lines<R: BufRead>(
    builder: &Builder,
    mut reader: R,
    window: &TrainingWindow,
    add_boundary: bool,
) -> Result<Vector, LangrvError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "langrv.train",
        order = builder.order(),
        dimension = builder.dimension(),
        skip_lines = window.skip_lines,
        max_lines = ?window.max_lines
    );
    let _guard = span.enter();

    let mut encoder = builder.encoder(add_boundary);
    let mut line = Vec::new();
    let mut skipped = 0usize;

    while !window.is_full(encoder.units()) {
        line.clear();
        let read = match reader.read_until(b'\n', &mut line) {
            Ok(read) => read,
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(
                    lines = encoder.units(),
                    error = %err,
                    elapsed_micros,
                    "train_failure"
                );
                return Err(LangrvError::Read(err));
            }
        };
        if read == 0 {
            break;
        }
        if skipped < window.skip_lines {
            skipped += 1;
            continue;
        }
        encoder.push_bytes(strip_line_ending(&line));
    }

    let lines = encoder.units();
    match encoder.finish() {
        Ok(vector) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(lines, skipped, elapsed_micros, "train_success");
            Ok(vector)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(lines, error = %err, elapsed_micros, "train_failure");
            Err(err.into())
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
