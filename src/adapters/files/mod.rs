//! Local files as a source of remote tasks
//!
//! Each matched file becomes one [`RemoteTask`] whose unique id is the
//! file path, so re-running an import updates the same tasks.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};

use crate::core::models::TaskCreate;
use crate::core::services::RemoteTask;

/// Split a comma-separated pattern list, dropping blanks
#[must_use]
pub fn split_patterns(patterns: &str) -> Vec<String> {
    patterns
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

/// Files under `folder` matching any of `patterns`, sorted and deduplicated
pub fn collect_files(folder: &Path, patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = BTreeSet::new();
    for pattern in patterns {
        let full = folder.join(pattern);
        debug!("Scanning {}", full.display());
        for entry in glob::glob(&full.to_string_lossy())? {
            match entry {
                Ok(path) if path.is_file() => {
                    files.insert(path);
                },
                Ok(_) => {},
                Err(e) => warn!("Skipping unreadable path: {e}"),
            }
        }
    }
    Ok(files.into_iter().collect())
}

/// Describe one file as a task
pub fn file_task(path: &Path) -> anyhow::Result<RemoteTask> {
    let metadata = fs::metadata(path)?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());
    let directory = path.parent().map(|p| p.display().to_string()).unwrap_or_default();
    let modified = metadata
        .modified()
        .map(|t| DateTime::<Utc>::from(t).to_rfc3339())
        .unwrap_or_else(|_| "unknown".to_string());
    let unique_id = path.display().to_string();

    let description = format!(
        "* **Directory**: {directory}\n\
         * **File**: {name} ({} bytes)\n\
         * **Last Modified**: {modified}\n\n\
         {unique_id}",
        metadata.len()
    );

    Ok(RemoteTask {
        create: TaskCreate::new(format!("Migration: {name}"), Some(description.as_str())),
        unique_id,
    })
}
