//! Definition generators for each supported diagram kind, and the dispatcher
//! that picks one for a request.

pub mod class;
pub mod er;
pub mod flowchart;
pub mod gantt;
pub mod mindmap;
pub mod pie;
pub mod sequence;
pub mod state;

use crate::decode::{DecodeContent, Decoded, Decoder};
use crate::detect::detect_kind;
use crate::error::DiagramError;
use crate::types::{non_empty, DiagramKind, DiagramRequest, Direction, Warning};
use crate::validate::{MISSING_CONTENT, MISSING_TYPE};
use log::{debug, trace, warn};
use serde_json::Value;

/// Indentation of body lines
pub(crate) const INDENT: &str = "    ";
/// Indentation of lines nested inside a block (class members, entity attributes)
pub(crate) const NESTED_INDENT: &str = "        ";

pub use class::ClassContent;
pub use er::ErContent;
pub use flowchart::FlowchartContent;
pub use gantt::GanttContent;
pub use mindmap::MindmapContent;
pub use pie::PieContent;
pub use sequence::SequenceContent;
pub use state::StateContent;

/// Typed content of one diagram, one variant per supported kind
#[derive(Debug, Clone, PartialEq)]
pub enum DiagramContent {
    Flowchart(FlowchartContent),
    Sequence(SequenceContent),
    Class(ClassContent),
    State(StateContent),
    Er(ErContent),
    Gantt(GanttContent),
    Pie(PieContent),
    Mindmap(MindmapContent),
}

impl DiagramContent {
    pub fn kind(&self) -> DiagramKind {
        match self {
            DiagramContent::Flowchart(_) => DiagramKind::Flowchart,
            DiagramContent::Sequence(_) => DiagramKind::Sequence,
            DiagramContent::Class(_) => DiagramKind::Class,
            DiagramContent::State(_) => DiagramKind::State,
            DiagramContent::Er(_) => DiagramKind::Er,
            DiagramContent::Gantt(_) => DiagramKind::Gantt,
            DiagramContent::Pie(_) => DiagramKind::Pie,
            DiagramContent::Mindmap(_) => DiagramKind::Mindmap,
        }
    }

    /// Decode JSON content for `kind`. Kinds without a generator are rejected.
    pub fn decode(kind: DiagramKind, value: &Value) -> Result<Decoded<Self>, DiagramError> {
        let mut decoder = Decoder::default();
        let content = match kind {
            DiagramKind::Flowchart => {
                DiagramContent::Flowchart(FlowchartContent::decode_with(value, &mut decoder))
            }
            DiagramKind::Sequence => {
                DiagramContent::Sequence(SequenceContent::decode_with(value, &mut decoder))
            }
            DiagramKind::Class => DiagramContent::Class(ClassContent::decode_with(value, &mut decoder)),
            DiagramKind::State => DiagramContent::State(StateContent::decode_with(value, &mut decoder)),
            DiagramKind::Er => DiagramContent::Er(ErContent::decode_with(value, &mut decoder)),
            DiagramKind::Gantt => DiagramContent::Gantt(GanttContent::decode_with(value, &mut decoder)),
            DiagramKind::Pie => DiagramContent::Pie(PieContent::decode_with(value, &mut decoder)),
            DiagramKind::Mindmap => {
                DiagramContent::Mindmap(MindmapContent::decode_with(value, &mut decoder))
            }
            DiagramKind::Timeline | DiagramKind::GitGraph => {
                return Err(DiagramError::UnsupportedDiagramType(kind.tag().to_string()));
            }
        };
        Ok(decoder.finish(content))
    }

    /// Render the definition text. `direction` only applies to flowcharts.
    pub fn to_definition(&self, direction: Direction) -> String {
        match self {
            DiagramContent::Flowchart(content) => flowchart::generate(content, direction),
            DiagramContent::Sequence(content) => sequence::generate(content),
            DiagramContent::Class(content) => class::generate(content),
            DiagramContent::State(content) => state::generate(content),
            DiagramContent::Er(content) => er::generate(content),
            DiagramContent::Gantt(content) => gantt::generate(content),
            DiagramContent::Pie(content) => pie::generate(content),
            DiagramContent::Mindmap(content) => mindmap::generate(content),
        }
    }
}

/// A definition plus the parts of the content that were skipped to produce it
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub definition: String,
    pub warnings: Vec<Warning>,
}

/// Produce the definition for a request.
///
/// A non-empty raw `definition` is returned verbatim. Otherwise the content is
/// decoded for the request's type and rendered by the matching generator.
pub fn generate(request: &DiagramRequest) -> Result<Generated, DiagramError> {
    if let Some(definition) = request.raw_definition() {
        debug!(length = definition.len(); "Using raw definition");
        let warnings = raw_definition_warnings(request, definition);
        log_warnings(&warnings);
        return Ok(Generated {
            definition: definition.to_string(),
            warnings,
        });
    }

    let tag = request
        .type_tag()
        .ok_or_else(|| DiagramError::InvalidDiagramData(MISSING_TYPE.to_string()))?;
    let kind = DiagramKind::from_tag(tag)
        .filter(DiagramKind::is_supported)
        .ok_or_else(|| DiagramError::UnsupportedDiagramType(tag.to_string()))?;
    let value = request
        .structured_content()
        .ok_or_else(|| DiagramError::InvalidDiagramData(MISSING_CONTENT.to_string()))?;

    let Decoded {
        mut content,
        warnings,
    } = DiagramContent::decode(kind, value)?;

    if let DiagramContent::Gantt(ref mut gantt) = content {
        if non_empty(gantt.date_format.as_deref()).is_none() {
            gantt.date_format = request.date_format.clone();
        }
    }

    let definition = content.to_definition(request.direction_or_default());
    log_warnings(&warnings);
    debug!(
        kind = kind.tag(),
        lines = definition.lines().count(),
        skipped = warnings.len();
        "Generated definition",
    );
    trace!(definition = definition.as_str(); "Definition text");

    Ok(Generated {
        definition,
        warnings,
    })
}

/// Produce only the definition text for a request
pub fn generate_definition(request: &DiagramRequest) -> Result<String, DiagramError> {
    generate(request).map(|generated| generated.definition)
}

/// A raw definition is never rejected, but a header naming a different kind
/// than the declared type is worth reporting.
fn raw_definition_warnings(request: &DiagramRequest, definition: &str) -> Vec<Warning> {
    let declared = request.type_tag().and_then(DiagramKind::from_tag);
    match (declared, detect_kind(definition)) {
        (Some(declared), Some(detected)) if declared != detected => vec![Warning::new(
            "definition",
            format!(
                "header declares `{}` but the request type is `{}`",
                detected, declared
            ),
        )],
        _ => Vec::new(),
    }
}

fn log_warnings(warnings: &[Warning]) {
    for warning in warnings {
        warn!(path = warning.path.as_str(); "{}", warning.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_raw_definition_passthrough() {
        let request = DiagramRequest {
            content: Some(json!({"nodes": [{"id": "X"}]})),
            ..DiagramRequest::raw(DiagramKind::Flowchart, "flowchart LR\n A-->B")
        };
        let generated = generate(&request).unwrap();
        assert_eq!(generated.definition, "flowchart LR\n A-->B");
        assert!(generated.warnings.is_empty());
    }

    #[test]
    fn test_raw_definition_kind_mismatch_warns() {
        let request = DiagramRequest::raw(DiagramKind::Pie, "sequenceDiagram\n A->>B: hi");
        let generated = generate(&request).unwrap();
        assert_eq!(generated.definition, "sequenceDiagram\n A->>B: hi");
        assert_eq!(generated.warnings.len(), 1);
        assert_eq!(generated.warnings[0].path, "definition");
    }

    #[test]
    fn test_dispatch_pie() {
        let request = DiagramRequest::new(
            DiagramKind::Pie,
            json!({"title": "T", "data": [{"label": "A", "value": 1}, {"label": "B", "value": 2}]}),
        );
        assert_eq!(
            generate_definition(&request).unwrap(),
            "pie showData\n    title T\n    \"A\" : 1\n    \"B\" : 2\n"
        );
    }

    #[test]
    fn test_direction_applies_to_flowchart() {
        let request = DiagramRequest::new(DiagramKind::Flowchart, json!({"nodes": [{"id": "A"}]}))
            .with_direction(Direction::RL);
        assert_eq!(generate_definition(&request).unwrap(), "flowchart RL\n    A[A]\n");

        let default_direction = DiagramRequest::new(DiagramKind::Flowchart, json!({}));
        assert_eq!(generate_definition(&default_direction).unwrap(), "flowchart TD\n");
    }

    #[test]
    fn test_every_supported_kind_has_a_header() {
        for kind in DiagramKind::ALL.into_iter().filter(DiagramKind::is_supported) {
            let definition = generate_definition(&DiagramRequest::new(kind, json!({}))).unwrap();
            let header = definition.lines().next().unwrap();
            assert!(header.starts_with(kind.tag()), "{} -> {}", kind, header);
        }
    }

    #[test]
    fn test_unsupported_kinds_are_errors() {
        for tag in ["timeline", "gitGraph", "venn"] {
            let request = DiagramRequest {
                diagram_type: Some(tag.to_string()),
                content: Some(json!({"events": []})),
                ..Default::default()
            };
            match generate_definition(&request) {
                Err(DiagramError::UnsupportedDiagramType(t)) => assert_eq!(t, tag),
                other => panic!("expected unsupported error for {}, got {:?}", tag, other),
            }
        }
    }

    #[test]
    fn test_missing_type_or_content() {
        let no_type = DiagramRequest {
            content: Some(json!({})),
            ..Default::default()
        };
        assert!(matches!(
            generate_definition(&no_type),
            Err(DiagramError::InvalidDiagramData(msg)) if msg == MISSING_TYPE
        ));

        let no_content = DiagramRequest {
            diagram_type: Some("pie".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            generate_definition(&no_content),
            Err(DiagramError::InvalidDiagramData(msg)) if msg == MISSING_CONTENT
        ));
    }

    #[test]
    fn test_gantt_date_format_falls_back_to_request() {
        let request = DiagramRequest {
            date_format: Some("DD/MM/YYYY".to_string()),
            ..DiagramRequest::new(DiagramKind::Gantt, json!({"title": "Plan"}))
        };
        assert_eq!(
            generate_definition(&request).unwrap(),
            "gantt\n    title Plan\n    dateFormat DD/MM/YYYY\n"
        );

        let content_wins = DiagramRequest {
            date_format: Some("DD/MM/YYYY".to_string()),
            ..DiagramRequest::new(DiagramKind::Gantt, json!({"dateFormat": "YYYY"}))
        };
        assert!(generate_definition(&content_wins)
            .unwrap()
            .contains("dateFormat YYYY\n"));
    }

    #[test]
    fn test_content_decode_reports_kind() {
        let decoded = DiagramContent::decode(DiagramKind::Mindmap, &json!({"root": {"text": "R"}})).unwrap();
        assert_eq!(decoded.content.kind(), DiagramKind::Mindmap);
        assert!(DiagramContent::decode(DiagramKind::Timeline, &json!({})).is_err());
    }
}
