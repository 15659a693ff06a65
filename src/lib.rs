//! mermaid-creator - Generate Mermaid diagram definitions from structured data
//!
//! This library turns typed descriptions of diagrams (nodes and links, actors and
//! messages, classes, states, entities, tasks, pie slices, mindmap trees) into
//! the textual definition consumed by the Mermaid rendering engine, together
//! with the configuration the renderer should be initialised with.
//!
//! # Example
//!
//! ```rust
//! use mermaid_creator::{create_diagram, ConfigOverrides, DiagramKind, DiagramRequest};
//! use serde_json::json;
//!
//! let request = DiagramRequest::new(
//!     DiagramKind::Pie,
//!     json!({"title": "T", "data": [{"label": "A", "value": 1}, {"label": "B", "value": 2}]}),
//! );
//! let diagram = create_diagram(&request, &ConfigOverrides::default()).unwrap();
//! assert_eq!(diagram.definition, "pie showData\n    title T\n    \"A\" : 1\n    \"B\" : 2\n");
//! ```
//!
//! # Supported Diagram Types
//!
//! - Flowcharts (flowchart TD/LR/BT/RL)
//! - Sequence diagrams (sequenceDiagram)
//! - Class diagrams (classDiagram)
//! - State diagrams (stateDiagram-v2)
//! - ER diagrams (erDiagram)
//! - Gantt charts (gantt)
//! - Pie charts (pie)
//! - Mindmaps (mindmap)
//!
//! `timeline` and `gitGraph` are recognised but only accepted as raw definitions.

pub mod config;
pub mod decode;
pub mod detect;
pub mod error;
pub mod generator;
pub mod notation;
pub mod types;
pub mod validate;

pub use config::{ConfigOverrides, MermaidConfig, MermaidTheme};
pub use decode::{DecodeContent, Decoded};
pub use error::DiagramError;
pub use generator::{generate, generate_definition, DiagramContent, Generated};
pub use types::*;
pub use validate::validate_diagram_data;

use chrono::{DateTime, Utc};
use types::non_empty;
use log::{debug, info};

/// Validate, generate and wrap a diagram, stamped with the current time.
///
/// # Example
/// ```rust
/// use mermaid_creator::{create_diagram, ConfigOverrides, DiagramKind, DiagramRequest};
///
/// let request = DiagramRequest::raw(DiagramKind::Flowchart, "flowchart LR\n A-->B");
/// let diagram = create_diagram(&request, &ConfigOverrides::default()).unwrap();
/// assert_eq!(diagram.title, "Untitled Diagram");
/// ```
pub fn create_diagram(
    request: &DiagramRequest,
    overrides: &ConfigOverrides,
) -> Result<DiagramResult, DiagramError> {
    create_diagram_at(request, overrides, Utc::now())
}

/// Like [`create_diagram`], with an explicit creation timestamp.
///
/// Identical inputs produce identical results.
pub fn create_diagram_at(
    request: &DiagramRequest,
    overrides: &ConfigOverrides,
    created_at: DateTime<Utc>,
) -> Result<DiagramResult, DiagramError> {
    let validation = validate_diagram_data(Some(request));
    if !validation.is_valid {
        debug!(errors = validation.errors.len(); "Diagram data rejected");
        return Err(DiagramError::invalid(&validation.errors));
    }

    let Generated {
        definition,
        warnings,
    } = generate(request)?;
    let config = MermaidConfig::default().merge(overrides);

    let diagram_type = request.type_tag().unwrap_or_default().to_string();
    let title = non_empty(request.title.as_deref())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();
    info!(diagram_type = diagram_type.as_str(), title = title.as_str(); "Created diagram");

    Ok(DiagramResult {
        definition,
        config,
        diagram_type,
        title,
        metadata: DiagramMetadata {
            created_at,
            version: GENERATOR_VERSION.to_string(),
        },
        warnings,
    })
}

/// Parse a JSON request document and create the diagram.
///
/// A `null` document is reported as missing diagram data.
pub fn create_diagram_from_json(
    text: &str,
    overrides: &ConfigOverrides,
) -> Result<DiagramResult, DiagramError> {
    match DiagramRequest::from_json(text)? {
        Some(request) => create_diagram(&request, overrides),
        None => Err(DiagramError::invalid(&validate_diagram_data(None).errors)),
    }
}
