use std::path::PathBuf;
use thiserror::Error;

/// The main error type for classprep operations.
#[derive(Debug, Error)]
pub enum ClassprepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no images found in {path}")]
    NoImagesFound { path: PathBuf },

    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("class registry aborted: {message}")]
    ClassRegistryAborted { message: String },

    #[error("normalized file missing for mapped image: {path}")]
    MissingMoveSource { path: PathBuf },

    #[error("failed to serialize report as JSON: {0}")]
    ReportJson(#[from] serde_json::Error),
}
