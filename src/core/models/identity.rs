//! Identity of the authenticated user

use serde::{Deserialize, Serialize};

/// The user the API key belongs to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Me {
    /// Display name
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub full_name: String,
    /// Login email address
    #[serde(deserialize_with = "super::nullable::null_as_default")]
    pub email_address: String,
    /// Role within the workspace
    pub role_name: Option<String>,
    /// Workspace the key is bound to
    pub work_space_name: Option<String>,
}
