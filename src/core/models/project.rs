//! Project records

use serde::{Deserialize, Serialize};

/// A project as returned by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    /// Project GUID
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub id: String,
    /// Short human-facing code
    pub short_id: Option<String>,
    /// Project name
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Free-form description
    pub description: Option<String>,
}

/// Payload for creating a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreate {
    /// Project name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProjectCreate {
    /// Create a payload with a name and description
    #[must_use]
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(String::from),
        }
    }
}
