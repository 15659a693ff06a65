//! Gantt chart definition generator

use super::{INDENT, NESTED_INDENT};
use crate::decode::{opt_text, text, truthy_text, DecodeContent, Decoder};
use crate::types::non_empty;
use serde::Deserialize;
use serde_json::Value;

pub const DEFAULT_TITLE: &str = "Project Schedule";
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";

/// Gap between the task name and its metadata
const TASK_NAME_GAP: &str = "           ";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GanttTask {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(default, deserialize_with = "opt_text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub start: String,
    /// Preferred over `end` when both are set
    #[serde(default, deserialize_with = "opt_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub end: Option<String>,
    /// `done`, `active`, `crit`, `milestone`
    #[serde(default, deserialize_with = "opt_text")]
    pub status: Option<String>,
}

impl GanttTask {
    /// Duration if set, otherwise the end date
    pub fn extent(&self) -> Option<&str> {
        non_empty(self.duration.as_deref()).or_else(|| non_empty(self.end.as_deref()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GanttSection {
    #[serde(deserialize_with = "text")]
    pub name: String,
    #[serde(skip_deserializing)]
    pub tasks: Vec<GanttTask>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GanttContent {
    pub title: Option<String>,
    pub date_format: Option<String>,
    pub sections: Vec<GanttSection>,
}

impl DecodeContent for GanttContent {
    fn decode_with(value: &Value, decoder: &mut Decoder) -> Self {
        let Some(obj) = decoder.object(value, "content") else {
            return Self::default();
        };
        let sections = decoder.records_with(obj, "sections", "content", |d, section: &mut GanttSection, map, path| {
            section.tasks = d.records_with(map, "tasks", path, |_, task: &mut GanttTask, _, _| {
                match task.extent() {
                    Some(_) => Ok(()),
                    None => Err("task has neither `duration` nor `end`".to_string()),
                }
            });
            Ok(())
        });
        Self {
            title: obj.get("title").and_then(truthy_text),
            date_format: obj.get("dateFormat").and_then(truthy_text),
            sections,
        }
    }
}

/// Generate a gantt chart definition
pub fn generate(content: &GanttContent) -> String {
    let title = non_empty(content.title.as_deref()).unwrap_or(DEFAULT_TITLE);
    let date_format = non_empty(content.date_format.as_deref()).unwrap_or(DEFAULT_DATE_FORMAT);

    let mut definition = String::from("gantt\n");
    definition.push_str(&format!("{}title {}\n", INDENT, title));
    definition.push_str(&format!("{}dateFormat {}\n", INDENT, date_format));

    for section in &content.sections {
        definition.push_str(&format!("\n{}section {}\n", INDENT, section.name));
        for task in &section.tasks {
            let status = non_empty(task.status.as_deref())
                .map(|status| format!("{},", status))
                .unwrap_or_default();
            definition.push_str(&format!(
                "{}{}{}:{}{} {}, {}\n",
                NESTED_INDENT,
                task.name,
                TASK_NAME_GAP,
                status,
                task.id.as_deref().unwrap_or(""),
                task.start,
                task.extent().unwrap_or("")
            ));
        }
    }

    definition
}
