//! ER diagram definition generator

use super::{INDENT, NESTED_INDENT};
use crate::decode::{opt_text, text, DecodeContent, Decoder};
use crate::types::non_empty;
use serde::Deserialize;
use serde_json::Value;

/// Left-hand cardinality used when none is given
pub const DEFAULT_CARDINALITY: &str = "||";

/// Line and right-hand cardinality, appended to every relationship as-is
pub const RELATIONSHIP_SUFFIX: &str = "--|{";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErAttribute {
    #[serde(rename = "type", deserialize_with = "text")]
    pub attr_type: String,
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// `PK`, `FK`, `UK`, emitted verbatim
    #[serde(default, deserialize_with = "opt_text")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErEntity {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(skip_deserializing)]
    pub attributes: Vec<ErAttribute>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErRelationship {
    #[serde(deserialize_with = "text")]
    pub from: String,
    #[serde(deserialize_with = "text")]
    pub to: String,
    /// Left-hand cardinality token. Default: `||`
    #[serde(default, deserialize_with = "opt_text")]
    pub cardinality: Option<String>,
    #[serde(deserialize_with = "text")]
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErContent {
    pub entities: Vec<ErEntity>,
    pub relationships: Vec<ErRelationship>,
}

impl DecodeContent for ErContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        let entities = decoder.records_with(obj, "entities", "content", |d, entity: &mut ErEntity, map, path| {
            entity.attributes = d.records(map, "attributes", path);
            Ok(())
        });
        let relationships = decoder.records_with(
            obj,
            "relationships",
            "content",
            |d, rel: &mut ErRelationship, _, path| {
                if let Some(cardinality) = rel.cardinality.as_deref() {
                    if cardinality.contains("--") || cardinality.contains("..") {
                        d.warn(
                            &format!("{}.cardinality", path),
                            format!(
                                "`{}` already contains a line token; `{}` is appended regardless",
                                cardinality, RELATIONSHIP_SUFFIX
                            ),
                        );
                    }
                }
                Ok(())
            },
        );
        Self {
            entities,
            relationships,
        }
    }
}

/// Generate an ER diagram definition: entity blocks first, then relationships
pub fn generate(content: &ErContent) -> String {
    let mut definition = String::from("erDiagram\n");

    for entity in &content.entities {
        definition.push_str(&format!("{}{} {{\n", INDENT, entity.name));
        for attr in &entity.attributes {
            let key = non_empty(attr.key.as_deref())
                .map(|key| format!(" {}", key))
                .unwrap_or_default();
            definition.push_str(&format!(
                "{}{} {}{}\n",
                NESTED_INDENT, attr.attr_type, attr.name, key
            ));
        }
        definition.push_str(&format!("{}}}\n", INDENT));
    }

    for rel in &content.relationships {
        let cardinality = non_empty(rel.cardinality.as_deref()).unwrap_or(DEFAULT_CARDINALITY);
        definition.push_str(&format!(
            "{}{} {}{} {} : \"{}\"\n",
            INDENT, rel.from, cardinality, RELATIONSHIP_SUFFIX, rel.to, rel.label
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
    fn test_generate_entities_and_relationships() {
        let decoded = ErContent::from_value(&json!({
            "entities": [{
                "name": "BOOK",
                "attributes": [
                    {"type": "int", "name": "book_id", "key": "PK"},
                    {"type": "string", "name": "title"}
                ]
            }],
            "relationships": [
                {"from": "BOOK", "to": "AUTHOR", "label": "written_by"},
                {"from": "BORROWER", "to": "LOAN", "cardinality": "o|", "label": "has"}
            ]
        }));
        assert!(decoded.warnings.is_empty());
        assert_eq!(
            generate(&decoded.content),
            "erDiagram\n\
             \x20   BOOK {\n\
             \x20       int book_id PK\n\
             \x20       string title\n\
             \x20   }\n\
             \x20   BOOK ||--|{ AUTHOR : \"written_by\"\n\
             \x20   BORROWER o|--|{ LOAN : \"has\"\n"
        );
    }

    #[test]
    fn test_full_relationship_token_is_not_rewritten() {
        let decoded = ErContent::from_value(&json!({
            "relationships": [{"from": "BOOK", "to": "LOAN", "cardinality": "||--o{", "label": "borrowed_as"}]
        }));
        assert_eq!(
            generate(&decoded.content),
            "erDiagram\n    BOOK ||--o{--|{ LOAN : \"borrowed_as\"\n"
        );
        assert_eq!(decoded.warnings.len(), 1);
        assert_eq!(decoded.warnings[0].path, "content.relationships[0].cardinality");
    }

    #[test]
    fn test_relationship_without_label_is_skipped() {
        let decoded = ErContent::from_value(&json!({"relationships": [{"from": "A", "to": "B"}]}));
        assert_eq!(generate(&decoded.content), "erDiagram\n");
        assert_eq!(decoded.warnings.len(), 1);
    }
}
