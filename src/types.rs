//! Type definitions for diagram requests and results

use crate::config::MermaidConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Version tag stamped into every [`DiagramMetadata`]
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Title used when the request does not carry one
pub const DEFAULT_TITLE: &str = "Untitled Diagram";

/// The direction of a flowchart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    TD, // Top-Down (same as TB)
    TB, // Top-Bottom
    LR, // Left-Right
    BT, // Bottom-Top
    RL, // Right-Left
}

impl Direction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "TD" => Some(Direction::TD),
            "TB" => Some(Direction::TB),
            "LR" => Some(Direction::LR),
            "BT" => Some(Direction::BT),
            "RL" => Some(Direction::RL),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::TD => "TD",
            Direction::TB => "TB",
            Direction::LR => "LR",
            Direction::BT => "BT",
            Direction::RL => "RL",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Diagram kinds
// ============================================================================

/// Every diagram kind the generator knows about, keyed by its Mermaid header tag.
///
/// `Timeline` and `GitGraph` are recognised tags without a generator; dispatching
/// them yields [`crate::DiagramError::UnsupportedDiagramType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramKind {
    Flowchart,
    Sequence,
    Class,
    State,
    Er,
    Gantt,
    Pie,
    Mindmap,
    Timeline,
    GitGraph,
}

impl DiagramKind {
    pub const ALL: [DiagramKind; 10] = [
        DiagramKind::Flowchart,
        DiagramKind::Sequence,
        DiagramKind::Class,
        DiagramKind::State,
        DiagramKind::Er,
        DiagramKind::Gantt,
        DiagramKind::Pie,
        DiagramKind::Mindmap,
        DiagramKind::Timeline,
        DiagramKind::GitGraph,
    ];

    /// The textual type tag, which is also the definition header keyword
    pub fn tag(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "flowchart",
            DiagramKind::Sequence => "sequenceDiagram",
            DiagramKind::Class => "classDiagram",
            DiagramKind::State => "stateDiagram-v2",
            DiagramKind::Er => "erDiagram",
            DiagramKind::Gantt => "gantt",
            DiagramKind::Pie => "pie",
            DiagramKind::Mindmap => "mindmap",
            DiagramKind::Timeline => "timeline",
            DiagramKind::GitGraph => "gitGraph",
        }
    }

    /// Logical name, as used in the upper-case lookup table of diagram types
    pub fn name(&self) -> &'static str {
        match self {
            DiagramKind::Flowchart => "FLOWCHART",
            DiagramKind::Sequence => "SEQUENCE",
            DiagramKind::Class => "CLASS",
            DiagramKind::State => "STATE",
            DiagramKind::Er => "ER",
            DiagramKind::Gantt => "GANTT",
            DiagramKind::Pie => "PIE",
            DiagramKind::Mindmap => "MINDMAP",
            DiagramKind::Timeline => "TIMELINE",
            DiagramKind::GitGraph => "GITGRAPH",
        }
    }

    /// Parse a type tag. Matching is exact, like the tags themselves.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Whether a transformer exists for this kind
    pub fn is_supported(&self) -> bool {
        !matches!(self, DiagramKind::Timeline | DiagramKind::GitGraph)
    }
}

impl fmt::Display for DiagramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ============================================================================
// Request
// ============================================================================

/// Caller-supplied description of one diagram.
///
/// Empty strings and JSON `null` count as absent throughout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramRequest {
    /// Type tag, e.g. `flowchart` or `sequenceDiagram`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub diagram_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Only meaningful for flowcharts. Default: TD
    #[serde(
        default,
        deserialize_with = "lenient_direction",
        skip_serializing_if = "Option::is_none"
    )]
    pub direction: Option<Direction>,
    /// Structured content, decoded according to the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    /// Raw definition text; takes precedence over `content`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Fallback date format for gantt charts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
}

impl DiagramRequest {
    /// Request for structured content of the given kind
    pub fn new(kind: DiagramKind, content: Value) -> Self {
        Self {
            diagram_type: Some(kind.tag().to_string()),
            content: Some(content),
            ..Default::default()
        }
    }

    /// Request carrying a raw definition
    pub fn raw(kind: DiagramKind, definition: impl Into<String>) -> Self {
        Self {
            diagram_type: Some(kind.tag().to_string()),
            definition: Some(definition.into()),
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Parse a request from a JSON document.
    ///
    /// A literal `null` document yields `Ok(None)`, which validation reports as
    /// missing diagram data.
    pub fn from_json(text: &str) -> Result<Option<Self>, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn type_tag(&self) -> Option<&str> {
        non_empty(self.diagram_type.as_deref())
    }

    pub fn raw_definition(&self) -> Option<&str> {
        non_empty(self.definition.as_deref())
    }

    /// Content, unless it is absent or falsy (`null`, `false`, `0`, `""`)
    pub fn structured_content(&self) -> Option<&Value> {
        self.content.as_ref().filter(|v| is_truthy(v))
    }

    pub fn direction_or_default(&self) -> Direction {
        self.direction.unwrap_or_default()
    }
}

/// Any case of a known direction name; every other value is absent
fn lenient_direction<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Direction>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_str().and_then(Direction::from_str))
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// ============================================================================
// Warnings and results
// ============================================================================

/// A sub-structure of the content that was skipped because of its shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Dotted path of the offending value, e.g. `content.nodes[2]`
    pub path: String,
    pub message: String,
}

impl Warning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Outcome of [`crate::validate_diagram_data`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramMetadata {
    pub created_at: DateTime<Utc>,
    pub version: String,
}

/// A generated diagram, ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramResult {
    pub definition: String,
    pub config: MermaidConfig,
    #[serde(rename = "type")]
    pub diagram_type: String,
    pub title: String,
    pub metadata: DiagramMetadata,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<Warning>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in DiagramKind::ALL {
            assert_eq!(DiagramKind::from_tag(kind.tag()), Some(kind));
        }
        assert_eq!(DiagramKind::from_tag("stateDiagram"), None);
        assert_eq!(DiagramKind::from_tag("Flowchart"), None);
    }

    #[test]
    fn test_kind_logical_names() {
        let names: Vec<&str> = DiagramKind::ALL.iter().map(DiagramKind::name).collect();
        assert_eq!(
            names,
            vec![
                "FLOWCHART", "SEQUENCE", "CLASS", "STATE", "ER", "GANTT", "PIE", "MINDMAP",
                "TIMELINE", "GITGRAPH"
            ]
        );
        assert_eq!(DiagramKind::Er.tag(), "erDiagram");
        assert_eq!(DiagramKind::State.tag(), "stateDiagram-v2");
    }

    #[test]
    fn test_unsupported_kinds() {
        let unsupported: Vec<_> = DiagramKind::ALL
            .into_iter()
            .filter(|k| !k.is_supported())
            .collect();
        assert_eq!(unsupported, vec![DiagramKind::Timeline, DiagramKind::GitGraph]);
    }

    #[test]
    fn test_request_from_json() {
        let request = DiagramRequest::from_json(
            r#"{"type": "flowchart", "direction": "LR", "dateFormat": "DD-MM", "content": {"nodes": []}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(request.type_tag(), Some("flowchart"));
        assert_eq!(request.direction_or_default(), Direction::LR);
        assert_eq!(request.date_format.as_deref(), Some("DD-MM"));
        assert!(request.structured_content().is_some());
    }

    #[test]
    fn test_unknown_direction_is_absent() {
        let request = DiagramRequest::from_json(
            r#"{"type": "sequenceDiagram", "direction": "horizontal", "content": {"actors": []}}"#,
        )
        .unwrap()
        .unwrap();
        assert_eq!(request.direction, None);
        assert_eq!(request.direction_or_default(), Direction::TD);

        let numeric = DiagramRequest::from_json(r#"{"type": "flowchart", "direction": 4}"#)
            .unwrap()
            .unwrap();
        assert_eq!(numeric.direction, None);

        let lower = DiagramRequest::from_json(r#"{"type": "flowchart", "direction": "bt"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(lower.direction, Some(Direction::BT));
    }

    #[test]
    fn test_null_document() {
        assert_eq!(DiagramRequest::from_json("null").unwrap(), None);
    }

    #[test]
    fn test_falsy_values_count_as_absent() {
        let mut request = DiagramRequest {
            diagram_type: Some(String::new()),
            definition: Some(String::new()),
            content: Some(json!(0)),
            ..Default::default()
        };
        assert_eq!(request.type_tag(), None);
        assert_eq!(request.raw_definition(), None);
        assert_eq!(request.structured_content(), None);

        request.content = Some(json!({}));
        assert!(request.structured_content().is_some());
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!(Direction::from_str("lr"), Some(Direction::LR));
        assert_eq!(Direction::from_str("XY"), None);
        assert_eq!(Direction::default().to_string(), "TD");
    }
}
