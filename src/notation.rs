//! Notation tables: abstract style enums to Mermaid syntax fragments.
//!
//! Every enum deserializes from its lowercase name. Unrecognised names, and
//! values that are not strings at all, map to the default variant.

use serde::Deserialize;
use serde_json::Value;

/// Shape of a flowchart node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum NodeShape {
    #[default]
    Rect, // [text]
    Rounded, // (text)
    Stadium, // ([text])
    Diamond, // {text}
    Hexagon, // {{text}}
    Circle,  // ((text))
}

impl NodeShape {
    pub fn from_name(name: &str) -> Self {
        match name {
            "rounded" => NodeShape::Rounded,
            "stadium" => NodeShape::Stadium,
            "diamond" => NodeShape::Diamond,
            "hexagon" => NodeShape::Hexagon,
            "circle" => NodeShape::Circle,
            _ => NodeShape::Rect,
        }
    }

    /// Opening and closing bracket tokens around the label
    pub fn brackets(&self) -> (&'static str, &'static str) {
        match self {
            NodeShape::Rect => ("[", "]"),
            NodeShape::Rounded => ("(", ")"),
            NodeShape::Stadium => ("([", "])"),
            NodeShape::Diamond => ("{", "}"),
            NodeShape::Hexagon => ("{{", "}}"),
            NodeShape::Circle => ("((", "))"),
        }
    }

    pub fn wrap(&self, label: &str) -> String {
        let (open, close) = self.brackets();
        format!("{}{}{}", open, label, close)
    }
}

impl From<Value> for NodeShape {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// Style of a flowchart link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum LinkStyle {
    #[default]
    Arrow, // -->
    Dotted, // -.->
    Thick,  // ==>
    None,   // ---
}

impl LinkStyle {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dotted" => LinkStyle::Dotted,
            "thick" => LinkStyle::Thick,
            "none" => LinkStyle::None,
            _ => LinkStyle::Arrow,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            LinkStyle::Arrow => "-->",
            LinkStyle::Dotted => "-.->",
            LinkStyle::Thick => "==>",
            LinkStyle::None => "---",
        }
    }
}

impl From<Value> for LinkStyle {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// Kind of relationship between two classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ClassRelation {
    #[default]
    Association, // -->
    Extends,     // <|--
    Implements,  // <|..
    Composition, // *--
    Aggregation, // o--
    Dependency,  // <..
}

impl ClassRelation {
    pub fn from_name(name: &str) -> Self {
        match name {
            "extends" => ClassRelation::Extends,
            "implements" => ClassRelation::Implements,
            "composition" => ClassRelation::Composition,
            "aggregation" => ClassRelation::Aggregation,
            "dependency" => ClassRelation::Dependency,
            _ => ClassRelation::Association,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ClassRelation::Association => "-->",
            ClassRelation::Extends => "<|--",
            ClassRelation::Implements => "<|..",
            ClassRelation::Composition => "*--",
            ClassRelation::Aggregation => "o--",
            ClassRelation::Dependency => "<..",
        }
    }
}

impl From<Value> for ClassRelation {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// Line style of a sequence message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum MessageKind {
    #[default]
    Solid, // ->>
    Dashed, // -->>
}

impl MessageKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "dashed" => MessageKind::Dashed,
            _ => MessageKind::Solid,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            MessageKind::Solid => "->>",
            MessageKind::Dashed => "-->>",
        }
    }
}

impl From<Value> for MessageKind {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// How a sequence participant is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum ActorKind {
    /// Stick figure
    #[default]
    Actor,
    /// Box, may carry an alias
    Participant,
}

impl ActorKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "participant" => ActorKind::Participant,
            _ => ActorKind::Actor,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            ActorKind::Actor => "actor",
            ActorKind::Participant => "participant",
        }
    }
}

impl From<Value> for ActorKind {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// Role of a state in a state diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "Value")]
pub enum StateKind {
    Start,
    End,
    #[default]
    Normal,
}

impl StateKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "start" => StateKind::Start,
            "end" => StateKind::End,
            _ => StateKind::Normal,
        }
    }
}

impl From<Value> for StateKind {
    fn from(value: Value) -> Self {
        Self::from_name(value.as_str().unwrap_or_default())
    }
}

/// `|label|` annotation placed right after an arrow token, or nothing
pub fn link_label(label: Option<&str>) -> String {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => format!("|{}|", label),
        None => String::new(),
    }
}

/// ` : label` suffix used by class relationships and state lines, or nothing
pub fn colon_label(label: Option<&str>) -> String {
    match label.filter(|l| !l.is_empty()) {
        Some(label) => format!(" : {}", label),
        None => String::new(),
    }
}
