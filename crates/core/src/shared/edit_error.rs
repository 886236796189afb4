use std::path::PathBuf;

use thiserror::Error;

use crate::shared::region::Region;

/// Every way an editing operation can fail.
///
/// Mutating operations that return an error leave the session unchanged.
#[derive(Error, Debug)]
pub enum EditError {
    #[error("no image loaded")]
    NoImage,
    #[error("file not found at {path}")]
    NotFound { path: PathBuf },
    #[error("cannot decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("cannot encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid region coordinates {region} for image size ({width}, {height})")]
    InvalidRegion {
        region: Region,
        width: u32,
        height: u32,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("processing failed: {0}")]
    Processing(String),
    #[error("no original image available")]
    NoOriginal,
}
