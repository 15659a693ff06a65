//! Flowchart definition generator

use super::INDENT;
use crate::decode::{opt_text, text, DecodeContent, Decoder};
use crate::notation::{link_label, LinkStyle, NodeShape};
use crate::types::{non_empty, Direction};
use serde::Deserialize;
use serde_json::Value;

/// A node in the flowchart
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowNode {
    #[serde(deserialize_with = "text")]
    pub id: String,
    /// Displayed text. Default: the node id
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
    #[serde(default)]
    pub shape: Option<NodeShape>,
}

impl FlowNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            shape: None,
        }
    }

    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn shaped(mut self, shape: NodeShape) -> Self {
        self.shape = Some(shape);
        self
    }
}

/// A link between two nodes
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlowLink {
    #[serde(deserialize_with = "text")]
    pub from: String,
    #[serde(deserialize_with = "text")]
    pub to: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
    #[serde(default)]
    pub style: Option<LinkStyle>,
}

impl FlowLink {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
            style: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowchartContent {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl DecodeContent for FlowchartContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        Self {
            nodes: decoder.records(obj, "nodes", "content"),
            links: decoder.records(obj, "links", "content"),
        }
    }
}

/// Generate a flowchart definition: header, one line per node, one line per link
pub fn generate(content: &FlowchartContent, direction: Direction) -> String {
    let mut definition = format!("flowchart {}\n", direction);

    for node in &content.nodes {
        let label = non_empty(node.label.as_deref()).unwrap_or(&node.id);
        let shape = node.shape.unwrap_or_default();
        definition.push_str(&format!("{}{}{}\n", INDENT, node.id, shape.wrap(label)));
    }

    for link in &content.links {
        let style = link.style.unwrap_or_default();
        definition.push_str(&format!(
            "{}{} {}{} {}\n",
            INDENT,
            link.from,
            style.arrow(),
            link_label(link.label.as_deref()),
            link.to
        ));
    }

    definition
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_basic() {
        let content = FlowchartContent {
            nodes: vec![
                FlowNode::new("A").labeled("Start").shaped(NodeShape::Stadium),
                FlowNode::new("B").shaped(NodeShape::Diamond),
            ],
            links: vec![FlowLink::new("A", "B")],
        };
        assert_eq!(
            generate(&content, Direction::LR),
            "flowchart LR\n    A([Start])\n    B{B}\n    A --> B\n"
        );
    }

    #[test]
    fn test_link_styles_and_labels() {
        let decoded = FlowchartContent::from_value(&json!({
            "links": [
                {"from": "C", "to": "D", "label": "Yes"},
                {"from": "C", "to": "F", "label": "No", "style": "dotted"},
                {"from": "F", "to": "B", "style": "thick"},
                {"from": "B", "to": "G", "style": "none", "label": ""}
            ]
        }));
        assert!(decoded.warnings.is_empty());
        assert_eq!(
            generate(&decoded.content, Direction::TD),
            "flowchart TD\n    C -->|Yes| D\n    C -.->|No| F\n    F ==> B\n    B --- G\n"
        );
    }

    #[test]
    fn test_line_counts_follow_input() {
        let decoded = FlowchartContent::from_value(&json!({
            "nodes": [{"id": "a"}, {"id": "b", "shape": "circle"}, {"id": "c", "shape": "unknown"}],
            "links": [{"from": "a", "to": "b"}, {"from": "b", "to": "c"}]
        }));
        let definition = generate(&decoded.content, Direction::TD);
        let lines: Vec<&str> = definition.lines().collect();
        assert_eq!(lines.len(), 1 + 3 + 2);
        assert_eq!(lines[1], "    a[a]");
        assert_eq!(lines[2], "    b((b))");
        assert_eq!(lines[3], "    c[c]");
    }

    #[test]
    fn test_non_string_shape_and_style_keep_the_element() {
        let decoded = FlowchartContent::from_value(&json!({
            "nodes": [{"id": "A", "shape": 3}, {"id": "B", "label": false, "shape": ["circle"]}],
            "links": [{"from": "A", "to": "B", "style": {"line": "dotted"}}]
        }));
        assert!(decoded.warnings.is_empty());
        assert_eq!(
            generate(&decoded.content, Direction::TD),
            "flowchart TD\n    A[A]\n    B[B]\n    A --> B\n"
        );
    }

    #[test]
    fn test_malformed_sections_are_skipped() {
        let decoded = FlowchartContent::from_value(&json!({
            "nodes": {"id": "A"},
            "links": [{"from": "A"}, {"from": "A", "to": "B"}]
        }));
        assert_eq!(
            generate(&decoded.content, Direction::TD),
            "flowchart TD\n    A --> B\n"
        );
        let paths: Vec<&str> = decoded.warnings.iter().map(|w| w.path.as_str()).collect();
        assert_eq!(paths, vec!["content.nodes", "content.links[0]"]);
    }
}
