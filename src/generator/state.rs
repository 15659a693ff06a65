//! State diagram definition generator

use super::{INDENT, NESTED_INDENT};
use crate::decode::{opt_text, scalar_text, text, DecodeContent, Decoder};
use crate::notation::{colon_label, StateKind};
use crate::types::is_truthy;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateDef {
    /// Required for everything but start states
    #[serde(default, deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<StateKind>,
    /// Raw lines of a composite state body, emitted verbatim
    #[serde(skip_deserializing)]
    pub composite: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateTransition {
    #[serde(deserialize_with = "text")]
    pub from: String,
    #[serde(deserialize_with = "text")]
    pub to: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateContent {
    pub states: Vec<StateDef>,
    pub transitions: Vec<StateTransition>,
}

impl DecodeContent for StateContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        let states = decoder.records_with(obj, "states", "content", |d, state: &mut StateDef, map, path| {
            if state.id.is_none() && state.kind != Some(StateKind::Start) {
                return Err("missing field `id`".to_string());
            }
            state.composite = decode_composite(d, map, path);
            Ok(())
        });
        Self {
            states,
            transitions: decoder.records(obj, "transitions", "content"),
        }
    }
}

/// A falsy `composite` is absent; a truthy non-list is absent with a warning.
fn decode_composite(decoder: &mut Decoder, map: &Map<String, Value>, path: &str) -> Option<Vec<String>> {
    let value = map.get("composite").filter(|v| is_truthy(v))?;
    let path = format!("{}.composite", path);
    let Value::Array(items) = value else {
        decoder.warn(&path, "expected a list of lines; state emitted without its body");
        return None;
    };

    let mut lines = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match scalar_text(item) {
            Some(line) => lines.push(line),
            None => decoder.warn(&format!("{}[{}]", path, index), "skipped: expected a line of text"),
        }
    }
    Some(lines)
}

/// Generate a state diagram definition: states in order, then transitions
pub fn generate(content: &StateContent) -> String {
    let mut definition = String::from("stateDiagram-v2\n");

    for state in &content.states {
        let id = state.id.as_deref().unwrap_or("");
        match state.kind.unwrap_or_default() {
            StateKind::Start => definition.push_str(&format!("{}[*]\n", INDENT)),
            StateKind::End => definition.push_str(&format!("{}{} --> [*]\n", INDENT, id)),
            StateKind::Normal => match &state.composite {
                Some(lines) => {
                    definition.push_str(&format!("{}state {} {{\n", INDENT, id));
                    for line in lines {
                        definition.push_str(&format!("{}{}\n", NESTED_INDENT, line));
                    }
                    definition.push_str(&format!("{}}}\n", INDENT));
                }
                None => {
                    definition.push_str(&format!(
                        "{}{}{}\n",
                        INDENT,
                        id,
                        colon_label(state.label.as_deref())
                    ));
                }
            },
        }
    }

    for transition in &content.transitions {
        definition.push_str(&format!(
            "{}{} --> {}{}\n",
            INDENT,
            transition.from,
            transition.to,
            colon_label(transition.label.as_deref())
        ));
    }

    definition
}
