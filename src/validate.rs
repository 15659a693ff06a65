//! Structural preconditions checked before dispatch

use crate::types::{DiagramRequest, ValidationResult};

pub const MISSING_DATA: &str = "Diagram data is required";
pub const MISSING_TYPE: &str = "Diagram type is required";
pub const MISSING_CONTENT: &str = "Diagram content or definition is required";

/// Validate a request.
///
/// A missing request short-circuits with a single error; otherwise every
/// violated rule contributes one message, in rule order.
pub fn validate_diagram_data(request: Option<&DiagramRequest>) -> ValidationResult {
    let mut errors = Vec::new();

    let Some(request) = request else {
        errors.push(MISSING_DATA.to_string());
        return ValidationResult {
            is_valid: false,
            errors,
        };
    };

    if request.type_tag().is_none() {
        errors.push(MISSING_TYPE.to_string());
    }

    if request.structured_content().is_none() && request.raw_definition().is_none() {
        errors.push(MISSING_CONTENT.to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}
