//! Error types for the outpainting runner.

use std::path::PathBuf;
use thiserror::Error;

/// Broad failure classes, used by the top-level handler to pick a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Io,
    Remote,
    Download,
}

impl ErrorKind {
    pub fn describe(self) -> &'static str {
        match self {
            ErrorKind::Validation => "environment validation failed",
            ErrorKind::Io => "image file operation failed",
            ErrorKind::Remote => "image edit request failed",
            ErrorKind::Download => "result download failed",
        }
    }
}

/// Every way a run can fail.
#[derive(Error, Debug)]
pub enum OutpaintError {
    /// The API credential is absent or empty.
    #[error("API key not found: set the {var} environment variable")]
    MissingCredential { var: &'static str },

    /// A required input image does not exist.
    #[error("input image does not exist: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// Source and mask images differ in pixel dimensions.
    #[error(
        "source image is {}x{} but mask image is {}x{}",
        .image_dims.0, .image_dims.1, .mask_dims.0, .mask_dims.1
    )]
    DimensionMismatch {
        image_dims: (u32, u32),
        mask_dims: (u32, u32),
    },

    /// A configuration value is out of range.
    #[error("invalid configuration value {name}: {reason}")]
    InvalidConfig { name: &'static str, reason: String },

    /// Failed to create a working or destination folder.
    #[error("failed to create folder {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or decode an image file.
    #[error("failed to load image from {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode or write an image file.
    #[error("failed to save image to {}: {source}", .path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The remote edit call failed or answered with something unusable.
    #[error("{0:#}")]
    Remote(anyhow::Error),

    /// A result record carried neither a usable URL nor inline image data.
    #[error("result {index} has no retrievable image")]
    MalformedResult { index: usize },

    /// Downloading a result failed.
    #[error("failed to download {url}: {cause:#}")]
    Download { url: String, cause: anyhow::Error },

    /// Inline image data in a result could not be decoded.
    #[error("failed to decode inline image data for result {index}: {source}")]
    InlineDecode {
        index: usize,
        #[source]
        source: base64::DecodeError,
    },

    /// Writing a downloaded result to disk failed.
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A blocking image task panicked or was cancelled.
    #[error("image task did not complete: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl OutpaintError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OutpaintError::MissingCredential { .. }
            | OutpaintError::MissingInput { .. }
            | OutpaintError::DimensionMismatch { .. }
            | OutpaintError::InvalidConfig { .. } => ErrorKind::Validation,
            OutpaintError::CreateDir { .. }
            | OutpaintError::ImageLoad { .. }
            | OutpaintError::ImageSave { .. }
            | OutpaintError::Task(_) => ErrorKind::Io,
            OutpaintError::Remote(_) | OutpaintError::MalformedResult { .. } => ErrorKind::Remote,
            OutpaintError::Download { .. }
            | OutpaintError::InlineDecode { .. }
            | OutpaintError::WriteOutput { .. } => ErrorKind::Download,
        }
    }
}

/// Result type alias for runner operations.
pub type Result<T> = std::result::Result<T, OutpaintError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = OutpaintError::DimensionMismatch {
            image_dims: (512, 512),
            mask_dims: (256, 256),
        };
        assert_eq!(
            err.to_string(),
            "source image is 512x512 but mask image is 256x256"
        );
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_remote_error_keeps_context_chain() {
        let cause = anyhow::anyhow!("status 400").context("OpenAI image edit failed");
        let err = OutpaintError::Remote(cause);
        assert_eq!(err.to_string(), "OpenAI image edit failed: status 400");
        assert_eq!(err.kind(), ErrorKind::Remote);
    }

    #[test]
    fn test_write_failure_is_download_kind() {
        let err = OutpaintError::WriteOutput {
            path: PathBuf::from("dest/outputimage.png"),
            source: std::io::Error::other("disk full"),
        };
        assert_eq!(err.kind(), ErrorKind::Download);
        assert!(err.to_string().contains("dest/outputimage.png"));
    }
}
