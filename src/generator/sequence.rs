//! Sequence diagram definition generator

use super::INDENT;
use crate::decode::{opt_text, text, DecodeContent, Decoder};
use crate::notation::{ActorKind, MessageKind};
use crate::types::non_empty;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceActor {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: Option<ActorKind>,
    /// Display name, only used for participants
    #[serde(default, deserialize_with = "opt_text")]
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceMessage {
    #[serde(deserialize_with = "text")]
    pub from: String,
    #[serde(deserialize_with = "text")]
    pub to: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<MessageKind>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceContent {
    pub actors: Vec<SequenceActor>,
    pub messages: Vec<SequenceMessage>,
}

impl DecodeContent for SequenceContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        Self {
            actors: decoder.records(obj, "actors", "content"),
            messages: decoder.records(obj, "messages", "content"),
        }
    }
}

/// Generate a sequence diagram definition
pub fn generate(content: &SequenceContent) -> String {
    let mut definition = String::from("sequenceDiagram\n");

    for actor in &content.actors {
        let kind = actor.kind.unwrap_or_default();
        // Only participants can be renamed
        let alias = non_empty(actor.alias.as_deref())
            .filter(|_| kind == ActorKind::Participant)
            .map(|alias| format!(" as {}", alias))
            .unwrap_or_default();
        definition.push_str(&format!("{}{} {}{}\n", INDENT, kind.keyword(), actor.id, alias));
    }

    for message in &content.messages {
        let arrow = message.kind.unwrap_or_default().arrow();
        let label = message.label.as_deref().unwrap_or("");
        definition.push_str(&format!(
            "{}{}{} {}: {}\n",
            INDENT, message.from, arrow, message.to, label
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
    fn test_generate_actors_and_messages() {
        let decoded = SequenceContent::from_value(&json!({
            "actors": [
                {"id": "Client", "type": "actor"},
                {"id": "API", "type": "participant", "alias": "API Gateway"},
                {"id": "DB", "type": "participant"}
            ],
            "messages": [
                {"from": "Client", "to": "API", "label": "POST /login"},
                {"from": "API", "to": "Client", "label": "200 OK", "type": "dashed"},
                {"from": "API", "to": "DB"}
            ]
        }));
        assert!(decoded.warnings.is_empty());
        assert_eq!(
            generate(&decoded.content),
            "sequenceDiagram\n\
             \x20   actor Client\n\
             \x20   participant API as API Gateway\n\
             \x20   participant DB\n\
             \x20   Client->> API: POST /login\n\
             \x20   API-->> Client: 200 OK\n\
             \x20   API->> DB: \n"
        );
    }

    #[test]
    fn test_actor_type_defaults_to_actor() {
        let decoded = SequenceContent::from_value(&json!({"actors": [{"id": "U"}, {"id": "V", "alias": "ignored"}]}));
        assert_eq!(generate(&decoded.content), "sequenceDiagram\n    actor U\n    actor V\n");
    }

    #[test]
    fn test_non_object_content() {
        let decoded = SequenceContent::from_value(&json!(["Alice", "Bob"]));
        assert_eq!(generate(&decoded.content), "sequenceDiagram\n");
        assert_eq!(decoded.warnings.len(), 1);
    }
}
