//! Mindmap definition generator.
//!
//! Mindmaps are indentation-structured: each level of the tree is indented two
//! spaces deeper than its parent, starting at two spaces for the root.

use crate::decode::{text, DecodeContent, Decoder};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Indentation of the root node; every level adds the same amount again
pub const ROOT_INDENT: &str = "  ";

/// A node of the mindmap tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MindmapNode {
    #[serde(deserialize_with = "text")]
    pub text: String,
    #[serde(skip_deserializing)]
    pub children: Vec<MindmapNode>,
}

impl MindmapNode {
    pub fn leaf(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(text: impl Into<String>, children: Vec<MindmapNode>) -> Self {
        Self {
            text: text.into(),
            children,
        }
    }

    /// Number of nodes in this subtree, including `self`
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(MindmapNode::count).sum::<usize>()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MindmapContent {
    pub root: Option<MindmapNode>,
}

impl DecodeContent for MindmapContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        let Some(root_value) = obj.get("root").filter(|v| !v.is_null()) else {
            return Self::default();
        };

        let path = "content.root";
        let mut root = decoder.record::<MindmapNode>(root_value, path);
        if let (Some(node), Value::Object(map)) = (root.as_mut(), root_value) {
            fill_children(decoder, node, map, path);
        }
        Self { root }
    }
}

fn fill_children(
    decoder: &mut Decoder,
    node: &mut MindmapNode,
    map: &Map<String, Value>,
    path: &str,
) {
    node.children = decoder.records_with(map, "children", path, |d, child: &mut MindmapNode, child_map, child_path| {
        fill_children(d, child, child_map, child_path);
        Ok(())
    });
}

/// Emit `node` and its subtree, depth first, one line per node.
///
/// Recursion depth equals tree depth; the input is assumed to be a finite tree.
pub fn emit(node: &MindmapNode, indent: &str) -> String {
    let mut result = format!("{}{}\n", indent, node.text);
    let child_indent = format!("{}{}", indent, ROOT_INDENT);
    for child in &node.children {
        result.push_str(&emit(child, &child_indent));
    }
    result
}

/// Generate a mindmap definition; an absent root yields only the header
pub fn generate(content: &MindmapContent) -> String {
    let mut definition = String::from("mindmap\n");
    if let Some(root) = &content.root {
        definition.push_str(&emit(root, ROOT_INDENT));
    }
    definition
}
