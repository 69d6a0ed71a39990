//! Workspace umbrella crate for langrv.
//!
//! Re-exports the pure vector core and adds the pieces that touch the
//! outside world: YAML configuration, line-oriented corpus readers and
//! vector files on disk.
//!
//! ```no_run
//! use langrv::{load_vector, score, train_language, LangrvConfig};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let config = LangrvConfig::from_file("langrv.yaml")?;
//! let builder = config.builder()?;
//! let corpus = BufReader::new(File::open("corpus/en.txt")?);
//! let english = train_language(&builder, corpus, &config.training_window())?;
//!
//! let french = load_vector(&builder, "vectors/fr.vec")?;
//! let probe = builder.build("where is the station?");
//! println!("en {:.3}", score(&english, &probe)?);
//! println!("fr {:.3}", score(&french, &probe)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod storage;
pub mod training;

pub use langvec::{
    char_hash, make_builder, merge, score, wmerge, Builder, Encoder, Permutation, SpaceConfig,
    Vector, VectorError, BOUNDARY_CHAR, ENCODER_ALGORITHM, ENCODER_VERSION, SCORE_EPSILON,
};

pub use crate::config::{ConfigLoadError, LangrvConfig, SpaceYamlConfig, TrainingYamlConfig};
pub use crate::storage::{load_vector, save_vector};
pub use crate::training::{build_from_reader, train_language, TrainingWindow};

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced by the umbrella API.
#[derive(Debug)]
pub enum LangrvError {
    Vector(VectorError),
    Config(ConfigLoadError),
    /// The corpus reader failed mid-stream.
    Read(io::Error),
    /// A vector file could not be read or written.
    File { path: PathBuf, source: io::Error },
}

impl fmt::Display for LangrvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LangrvError::Vector(err) => write!(f, "vector failure: {err}"),
            LangrvError::Config(err) => write!(f, "configuration failure: {err}"),
            LangrvError::Read(err) => write!(f, "corpus read failure: {err}"),
            LangrvError::File { path, source } => {
                write!(f, "vector file {}: {source}", path.display())
            }
        }
    }
}

impl Error for LangrvError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LangrvError::Vector(err) => Some(err),
            LangrvError::Config(err) => Some(err),
            LangrvError::Read(err) => Some(err),
            LangrvError::File { source, .. } => Some(source),
        }
    }
}

impl From<VectorError> for LangrvError {
    fn from(value: VectorError) -> Self {
        LangrvError::Vector(value)
    }
}

impl From<ConfigLoadError> for LangrvError {
    fn from(value: ConfigLoadError) -> Self {
        LangrvError::Config(value)
    }
}

impl LangrvError {
    /// Vector accumulated before a malformed unit was hit, if that is the
    /// failure.
    pub fn into_partial(self) -> Option<Vector> {
        match self {
            LangrvError::Vector(err) => err.into_partial(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn config_to_language_vector() {
        let config = LangrvConfig::from_yaml(
            r#"
version: "1.0"
space:
  order: 3
  dimension: 2000
training:
  skip_lines: 1
"#,
        )
        .unwrap();
        let builder = config.builder().unwrap();
        let corpus = Cursor::new("# header\nthe cat sat on the mat\nthe dog ate the log\n");
        let english = train_language(&builder, corpus, &config.training_window()).unwrap();

        assert_eq!(
            english,
            builder.build_lines(["the cat sat on the mat", "the dog ate the log"])
        );
    }

    #[test]
    fn error_display_and_source() {
        let err = LangrvError::from(VectorError::DimensionMismatch {
            expected: 4,
            actual: 5,
        });
        assert!(err.to_string().starts_with("vector failure:"));
        assert!(err.source().is_some());

        let err = LangrvError::File {
            path: PathBuf::from("en.vec"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "vector file en.vec: missing");
    }

    #[test]
    fn config_errors_convert() {
        let err: LangrvError = LangrvConfig::from_yaml("version: \"9\"\n")
            .unwrap_err()
            .into();
        assert!(matches!(
            err,
            LangrvError::Config(ConfigLoadError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn partial_only_for_malformed_input() {
        let builder = make_builder(2, 32, 1).unwrap();
        let err = build_from_reader(&builder, &b"ok\n\xfe\n"[..], true).unwrap_err();
        assert_eq!(err.into_partial(), Some(builder.build("ok")));

        let err = LangrvError::Read(io::Error::new(io::ErrorKind::Other, "x"));
        assert!(err.into_partial().is_none());
    }
}
