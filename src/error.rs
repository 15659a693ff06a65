//! Error types for diagram creation

/// Errors surfaced by the creation and dispatch operations.
///
/// Transformers themselves never fail; malformed sub-structures become
/// [`crate::Warning`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum DiagramError {
    /// Validation failed; carries the collected messages joined by `", "`
    #[error("Invalid diagram data: {0}")]
    InvalidDiagramData(String),
    /// The type tag is unknown or has no generator (`timeline`, `gitGraph`)
    #[error("Unsupported diagram type: {0}")]
    UnsupportedDiagramType(String),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DiagramError {
    pub(crate) fn invalid(errors: &[String]) -> Self {
        DiagramError::InvalidDiagramData(errors.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_joins_messages() {
        let err = DiagramError::invalid(&[
            "Diagram type is required".to_string(),
            "Diagram content or definition is required".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid diagram data: Diagram type is required, Diagram content or definition is required"
        );
    }

    #[test]
    fn test_unsupported_message() {
        let err = DiagramError::UnsupportedDiagramType("timeline".to_string());
        assert_eq!(err.to_string(), "Unsupported diagram type: timeline");
    }
}
