//! Task discussion comments

use serde::{Deserialize, Serialize};

/// A comment in a task's discussion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Comment {
    /// Comment GUID
    pub id: Option<String>,
    /// Markdown text
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub text: String,
    /// Author display name
    pub author_name: Option<String>,
    /// Creation timestamp as sent by the server
    pub create_date: Option<String>,
    /// Reactions on this comment
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub emoji: Vec<Emoji>,
}

/// A reaction on a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Emoji {
    /// Reaction name
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub name: String,
    /// Users who reacted
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub user_ids: Vec<String>,
}

/// Payload for adding a comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCreate {
    /// Markdown text
    pub text: String,
}

/// Server acknowledgement for a created comment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommentCreated {
    /// GUID of the new comment
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub discussion_comment_id: String,
}
