//! Error types for layerproj operations

use thiserror::Error;

/// Main error type for extraction and export operations
#[derive(Debug, Error)]
pub enum ExportError {
    /// A layer holds fewer segments than the reduction rule needs.
    ///
    /// The reducer dereferences the first two recorded segments of a layer;
    /// a layer that cannot supply both aborts the whole export before any
    /// spreadsheet cell is written.
    #[error("no line segments on the active view: layer '{layer}' has {found} segment(s), need {needed}")]
    MissingGeometry {
        /// Display name of the offending layer
        layer: String,
        /// Number of segments actually collected
        found: usize,
        /// Number of segments the reduction rule requires
        needed: usize,
    },

    /// An automation call failed or returned an absent handle
    #[error("host unavailable: {0}")]
    HostUnavailable(String),

    /// A layer index outside the enumerated range was requested
    #[error("layer index {index} out of range (document has {count} layers)")]
    LayerOutOfRange { index: usize, count: usize },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for layerproj operations
pub type Result<T> = std::result::Result<T, ExportError>;

impl From<String> for ExportError {
    fn from(s: String) -> Self {
        ExportError::Custom(s)
    }
}

impl From<&str> for ExportError {
    fn from(s: &str) -> Self {
        ExportError::Custom(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_geometry_display() {
        let err = ExportError::MissingGeometry {
            layer: "Outline".to_string(),
            found: 1,
            needed: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("no line segments on the active view"));
        assert!(msg.contains("Outline"));
    }

    #[test]
    fn test_host_unavailable_display() {
        let err = ExportError::HostUnavailable("no active document".to_string());
        assert_eq!(err.to_string(), "host unavailable: no active document");
    }

    #[test]
    fn test_string_conversion() {
        let err: ExportError = "something odd".into();
        assert!(matches!(err, ExportError::Custom(_)));
    }
}
