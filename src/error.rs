//! Central error types for Folio.
//!
//! The cursor subsystem itself never fails; these errors cover the ambient
//! surfaces around it (configuration, the export tool, the browser host).
//! All errors implement `Serialize` so they can cross the JS boundary as a
//! plain message string.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Main error type for Folio operations.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Configuration value could not be parsed or is out of range
    #[error("Config error: {0}")]
    Config(String),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SVG icon could not be parsed or rasterized
    #[error("Icon render error: {0}")]
    IconRender(String),

    /// Image encoding failed
    #[error("Image error: {0}")]
    Image(String),

    /// Browser DOM binding failed (missing window, element, listener)
    #[error("DOM error: {0}")]
    Dom(String),

    /// Filesystem operation on a known path failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Serialize for FolioError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "export")]
impl From<image::ImageError> for FolioError {
    fn from(err: image::ImageError) -> Self {
        FolioError::Image(err.to_string())
    }
}

/// Attaches the file being touched to an io failure.
pub trait PathContext<T> {
    /// `action` reads as a verb: "read", "write", "create".
    fn for_path(self, action: &'static str, path: &Path) -> FolioResult<T>;
}

impl<T> PathContext<T> for std::io::Result<T> {
    fn for_path(self, action: &'static str, path: &Path) -> FolioResult<T> {
        self.map_err(|source| FolioError::File {
            action,
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::Config("stiffness must be positive".to_string());
        assert_eq!(err.to_string(), "Config error: stiffness must be positive");
    }

    #[test]
    fn test_error_serialization() {
        let err = FolioError::Dom("no window".to_string());
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"DOM error: no window\"");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: FolioError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_path_context_keeps_source() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.for_path("write", Path::new("out/index.html")).unwrap_err();

        assert_eq!(err.to_string(), "Failed to write out/index.html: denied");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_path_context_ok_passthrough() {
        let result: std::io::Result<i32> = Ok(42);
        assert_eq!(result.for_path("read", Path::new("folio.json")).unwrap(), 42);
    }
}
