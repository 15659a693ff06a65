//! Pie chart definition generator

use super::INDENT;
use crate::decode::{text, truthy_text, DecodeContent, Decoder};
use crate::types::non_empty;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Pie Chart";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PieSlice {
    #[serde(deserialize_with = "text")]
    pub label: String,
    pub value: f64,
}

impl PieSlice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PieContent {
    pub title: Option<String>,
    pub data: Vec<PieSlice>,
}

impl DecodeContent for PieContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        Self {
            title: obj.get("title").and_then(truthy_text),
            data: decoder.records(obj, "data", "content"),
        }
    }
}

/// Generate a pie chart definition with data labels shown
pub fn generate(content: &PieContent) -> String {
    let title = non_empty(content.title.as_deref()).unwrap_or(DEFAULT_TITLE);

    let mut definition = String::from("pie showData\n");
    definition.push_str(&format!("{}title {}\n", INDENT, title));

    for slice in &content.data {
        // f64 Display prints whole numbers without a fractional part
        definition.push_str(&format!("{}\"{}\" : {}\n", INDENT, slice.label, slice.value));
    }

    definition
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_generate_pie() {
        let content = PieContent {
            title: Some("T".to_string()),
            data: vec![PieSlice::new("A", 1.0), PieSlice::new("B", 2.0)],
        };
        assert_eq!(generate(&content), "pie showData\n    title T\n    \"A\" : 1\n    \"B\" : 2\n");
    }

    #[test]
    fn test_fractional_values_and_default_title() {
        let decoded = PieContent::from_value(&json!({"data": [{"label": "Rent", "value": 35.5}]}));
        assert_eq!(
            generate(&decoded.content),
            "pie showData\n    title Pie Chart\n    \"Rent\" : 35.5\n"
        );
    }

    #[test]
    fn test_falsy_title_uses_default() {
        for title in [json!(false), json!(0), json!(""), json!(null)] {
            let decoded = PieContent::from_value(&json!({"title": title, "data": [{"label": "A", "value": 1}]}));
            assert_eq!(
                generate(&decoded.content),
                "pie showData\n    title Pie Chart\n    \"A\" : 1\n"
            );
        }
    }

    #[test]
    fn test_non_numeric_value_is_skipped() {
        let decoded = PieContent::from_value(&json!({
            "data": [{"label": "A", "value": "lots"}, {"label": "B", "value": 3}]
        }));
        assert_eq!(
            generate(&decoded.content),
            "pie showData\n    title Pie Chart\n    \"B\" : 3\n"
        );
        assert_eq!(decoded.warnings[0].path, "content.data[0]");
    }
}
