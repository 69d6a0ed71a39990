//! Vector files on disk, one decimal component per line.

use std::fs;
use std::path::Path;
use std::time::Instant;

use langvec::{Builder, Vector};
use tracing::{info, warn};

use crate::LangrvError;

/// Write `vector` to `path`, replacing any existing file.
pub fn save_vector<P: AsRef<Path>>(
    builder: &Builder,
    vector: &Vector,
    path: P,
) -> Result<(), LangrvError> {
    let path = path.as_ref();
    let start = Instant::now();
    let bytes = builder.save(vector)?;

    if let Err(source) = fs::write(path, &bytes) {
        warn!(path = %path.display(), error = %source, "vector_save_failure");
        return Err(LangrvError::File {
            path: path.to_path_buf(),
            source,
        });
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        path = %path.display(),
        dimension = vector.dimension(),
        bytes = bytes.len(),
        elapsed_micros,
        "vector_saved"
    );
    Ok(())
}

/// Read a vector of the builder's dimension from `path`.
pub fn load_vector<P: AsRef<Path>>(builder: &Builder, path: P) -> Result<Vector, LangrvError> {
    let path = path.as_ref();
    let start = Instant::now();

    let bytes = fs::read(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "vector_load_failure");
        LangrvError::File {
            path: path.to_path_buf(),
            source,
        }
    })?;

    match builder.load(&bytes) {
        Ok(vector) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                path = %path.display(),
                dimension = vector.dimension(),
                elapsed_micros,
                "vector_loaded"
            );
            Ok(vector)
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "vector_load_failure");
            Err(err.into())
        }
    }
}
