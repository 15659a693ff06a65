//! Diagram kind detection for raw definitions

use crate::types::DiagramKind;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(
        r"(?i)^(flowchart|graph|sequenceDiagram|classDiagram(?:-v2)?|stateDiagram(?:-v2)?|erDiagram|gantt|pie|mindmap|timeline|gitGraph)\b"
    )
    .unwrap();
}

/// Detect the diagram kind named by the header of a raw definition.
///
/// A leading `---` frontmatter block, blank lines and `%%` comments are
/// skipped. Returns `None` when the first remaining line starts with no known
/// keyword, or when the frontmatter is never closed.
pub fn detect_kind(definition: &str) -> Option<DiagramKind> {
    let mut lines = definition
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .peekable();

    if lines.peek() == Some(&"---") {
        lines.next();
        lines.find(|l| *l == "---")?;
    }
    let header = lines.find(|l| !l.starts_with("%%"))?;

    let caps = HEADER_RE.captures(header)?;
    let keyword = caps[1].to_lowercase();

    let kind = match keyword.as_str() {
        "flowchart" | "graph" => DiagramKind::Flowchart,
        "sequencediagram" => DiagramKind::Sequence,
        "classdiagram" | "classdiagram-v2" => DiagramKind::Class,
        "statediagram" | "statediagram-v2" => DiagramKind::State,
        "erdiagram" => DiagramKind::Er,
        "gantt" => DiagramKind::Gantt,
        "pie" => DiagramKind::Pie,
        "mindmap" => DiagramKind::Mindmap,
        "timeline" => DiagramKind::Timeline,
        "gitgraph" => DiagramKind::GitGraph,
        _ => return None,
    };
    Some(kind)
}
