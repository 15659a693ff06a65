//! Class diagram definition generator

use super::{INDENT, NESTED_INDENT};
use crate::decode::{opt_text, text, DecodeContent, Decoder};
use crate::notation::{colon_label, ClassRelation};
use crate::types::non_empty;
use serde::Deserialize;
use serde_json::Value;

const DEFAULT_VISIBILITY: &str = "+";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassAttribute {
    /// `+`, `-`, `#` or `~`. Default: `+`
    #[serde(default, deserialize_with = "opt_text")]
    pub visibility: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "text")]
    pub attr_type: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMethod {
    #[serde(default, deserialize_with = "opt_text")]
    pub visibility: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: String,
    /// Parameter list, verbatim
    #[serde(default, deserialize_with = "opt_text")]
    pub params: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub return_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassDef {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(skip_deserializing)]
    pub attributes: Vec<ClassAttribute>,
    #[serde(skip_deserializing)]
    pub methods: Vec<ClassMethod>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClassRelationship {
    #[serde(deserialize_with = "text")]
    pub from: String,
    #[serde(deserialize_with = "text")]
    pub to: String,
    #[serde(rename = "type", default)]
    pub kind: Option<ClassRelation>,
    #[serde(default, deserialize_with = "opt_text")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassContent {
    pub classes: Vec<ClassDef>,
    pub relationships: Vec<ClassRelationship>,
}

impl DecodeContent for ClassContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        let classes = decoder.records_with(obj, "classes", "content", |d, class: &mut ClassDef, map, path| {
            class.attributes = d.records(map, "attributes", path);
            class.methods = d.records(map, "methods", path);
            Ok(())
        });
        Self {
            classes,
            relationships: decoder.records(obj, "relationships", "content"),
        }
    }
}

/// Generate a class diagram definition: class blocks first, then relationships
pub fn generate(content: &ClassContent) -> String {
    let mut definition = String::from("classDiagram\n");

    for class in &content.classes {
        definition.push_str(&format!("{}class {} {{\n", INDENT, class.name));

        for attr in &class.attributes {
            let visibility = non_empty(attr.visibility.as_deref()).unwrap_or(DEFAULT_VISIBILITY);
            definition.push_str(&format!(
                "{}{}{}: {}\n",
                NESTED_INDENT, visibility, attr.name, attr.attr_type
            ));
        }

        for method in &class.methods {
            let visibility = non_empty(method.visibility.as_deref()).unwrap_or(DEFAULT_VISIBILITY);
            let params = method.params.as_deref().unwrap_or("");
            // The separator space is kept even without a return type.
            let return_type = non_empty(method.return_type.as_deref())
                .map(|rt| format!(": {}", rt))
                .unwrap_or_default();
            definition.push_str(&format!(
                "{}{}{}({}) {}\n",
                NESTED_INDENT, visibility, method.name, params, return_type
            ));
        }

        definition.push_str(&format!("{}}}\n", INDENT));
    }

    for rel in &content.relationships {
        let symbol = rel.kind.unwrap_or_default().symbol();
        definition.push_str(&format!(
            "{}{} {} {}{}\n",
            INDENT,
            rel.from,
            symbol,
            rel.to,
            colon_label(rel.label.as_deref())
        ));
    }

    definition
}
