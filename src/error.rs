//! Error taxonomy shared by the library and the demo binary.
use std::path::PathBuf;

/// Errors raised by buffer construction, convolution and the I/O helpers.
#[derive(Debug, thiserror::Error)]
pub enum ConvError {
    /// Malformed kernel, buffer or executor arguments. Raised before any
    /// output buffer is touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize report: {0}")]
    Report(#[from] serde_json::Error),
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ConvError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

pub type Result<T, E = ConvError> = std::result::Result<T, E>;
