//! Renderer configuration handed out alongside every generated definition.
//!
//! There is no process-wide default: [`MermaidConfig::default`] builds a fresh
//! value, and [`MermaidConfig::merge`] applies caller overrides on top of it.
//! The merge is shallow, so an override for a nested section (`flowchart`,
//! `sequence`) replaces that section wholesale. Keys missing from an
//! overriding section take their default values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Mermaid built-in theme names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MermaidTheme {
    /// Light theme (white background, dark text)
    #[default]
    Default,
    /// Dark theme (dark background, light text)
    Dark,
    Forest,
    Neutral,
    /// Base theme, the only one meant to be customised through theme variables
    Base,
}

impl MermaidTheme {
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dark" => MermaidTheme::Dark,
            "forest" => MermaidTheme::Forest,
            "neutral" => MermaidTheme::Neutral,
            "base" => MermaidTheme::Base,
            _ => MermaidTheme::Default,
        }
    }
}

impl fmt::Display for MermaidTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MermaidTheme::Default => write!(f, "default"),
            MermaidTheme::Dark => write!(f, "dark"),
            MermaidTheme::Forest => write!(f, "forest"),
            MermaidTheme::Neutral => write!(f, "neutral"),
            MermaidTheme::Base => write!(f, "base"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlowchartConfig {
    pub html_labels: bool,
    /// Edge interpolation, e.g. `basis` or `linear`
    pub curve: String,
}

impl Default for FlowchartConfig {
    fn default() -> Self {
        Self {
            html_labels: true,
            curve: "basis".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SequenceConfig {
    pub diagram_margin_x: u32,
    pub diagram_margin_y: u32,
    pub actor_margin: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            diagram_margin_x: 50,
            diagram_margin_y: 10,
            actor_margin: 50,
            width: 150,
            height: 65,
        }
    }
}

/// Configuration passed to the rendering engine together with the definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MermaidConfig {
    pub theme: MermaidTheme,
    pub start_on_load: bool,
    /// `strict`, `loose`, `antiscript` or `sandbox`
    pub security_level: String,
    pub font_family: String,
    pub flowchart: FlowchartConfig,
    pub sequence: SequenceConfig,
    /// Keys the generator does not interpret, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for MermaidConfig {
    fn default() -> Self {
        Self {
            theme: MermaidTheme::Default,
            start_on_load: false,
            security_level: "loose".to_string(),
            font_family: r#""trebuchet ms", verdana, arial, sans-serif"#.to_string(),
            flowchart: FlowchartConfig::default(),
            sequence: SequenceConfig::default(),
            extra: Map::new(),
        }
    }
}

/// Per-call overrides. Every present key wins over the base configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<MermaidTheme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_on_load: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flowchart: Option<FlowchartConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<SequenceConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConfigOverrides {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl MermaidConfig {
    /// Shallow merge: each override key replaces the corresponding key of `self`.
    pub fn merge(&self, overrides: &ConfigOverrides) -> MermaidConfig {
        let mut merged = self.clone();
        if let Some(theme) = overrides.theme {
            merged.theme = theme;
        }
        if let Some(start_on_load) = overrides.start_on_load {
            merged.start_on_load = start_on_load;
        }
        if let Some(ref level) = overrides.security_level {
            merged.security_level = level.clone();
        }
        if let Some(ref font) = overrides.font_family {
            merged.font_family = font.clone();
        }
        if let Some(ref flowchart) = overrides.flowchart {
            merged.flowchart = flowchart.clone();
        }
        if let Some(ref sequence) = overrides.sequence {
            merged.sequence = sequence.clone();
        }
        for (key, value) in &overrides.extra {
            merged.extra.insert(key.clone(), value.clone());
        }
        merged
    }
}
