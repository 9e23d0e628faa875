use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("input folder {0:?} not found")]
    MissingInput(PathBuf),

    #[error("no \".bmp\" files found in {0:?}")]
    NoSlices(PathBuf),

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode bitmap {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("box record {record}, field {field}: cannot parse {token:?}")]
    BoxField {
        record: usize,
        field: usize,
        token: String,
    },

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
