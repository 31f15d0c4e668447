//! Import command - sync local files into a project

use std::path::Path;

use log::info;

use pmtask::adapters::files::{collect_files, file_task, split_patterns};
use pmtask::config::Overrides;
use pmtask::core::services::{find_project, sync_remote_tasks};
use pmtask::output::{OperationResult, OutputFormat};

use super::connect::connect;

/// Create, update, and delete tasks so the project mirrors the matched files
pub fn import_files(
    overrides: &Overrides,
    patterns: &str,
    folder: &Path,
    project: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;

    let patterns = split_patterns(patterns);
    if patterns.is_empty() {
        anyhow::bail!("No file patterns given");
    }
    info!("Searching {} for files matching {}...", folder.display(), patterns.join(", "));

    let remote = collect_files(folder, &patterns)?
        .iter()
        .map(|path| file_task(path))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let project = find_project(&client, project)?;
    info!("Syncing {} file(s) with project '{}'...", remote.len(), project.name);
    let result = sync_remote_tasks(&client, &remote, &project)?;

    OperationResult::ok(format!(
        "Success.\n{} task(s) created, {} task(s) updated, and {} task(s) deleted.",
        result.created, result.updated, result.deleted
    ))
    .with_data(serde_json::to_value(result)?)
    .render(format)
}
