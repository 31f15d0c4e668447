//! Task records and payloads

use serde::{Deserialize, Serialize};

/// A task as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Task {
    /// Task GUID
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub id: String,
    /// Short human-facing code (e.g. "ABC-12")
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub short_id: String,
    /// Task name
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Markdown description
    pub description: Option<String>,
    /// Outline number within the project (e.g. "1.2.3")
    pub wbs: Option<String>,
    /// Completion percentage
    pub percent_complete: Option<i32>,
    /// Owning project GUID
    pub project_id: Option<String>,
}

/// Payload for creating a task
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
    /// Task name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TaskCreate {
    /// Create a payload with a name and description
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(String::from),
        }
    }
}

/// Payload for updating a task; unset fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    /// New name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&TaskCreate> for TaskUpdate {
    fn from(create: &TaskCreate) -> Self {
        Self {
            name: Some(create.name.clone()),
            description: create.description.clone(),
        }
    }
}
