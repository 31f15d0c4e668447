//! Remote-task sync
//!
//! Keeps a project's tasks in step with items from another system. Each
//! remote item carries a unique id that is embedded in the task
//! description; tasks whose id no longer appears remotely are deleted.

use log::{info, warn};
use serde::Serialize;

use super::error::FlowError;
use super::lookup::load_tasks;
use crate::core::models::{Project, Task, TaskCreate, TaskUpdate};
use crate::core::ports::ProjectManagerApi;

/// An item from the remote system, with the task that represents it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTask {
    /// Identifier embedded in the task description
    pub unique_id: String,
    /// Task to create when no existing task carries `unique_id`
    pub create: TaskCreate,
}

/// Changes needed to bring a project in sync
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Tasks to create
    pub create: Vec<TaskCreate>,
    /// `(task id, update)` pairs for tasks whose description changed
    pub update: Vec<(String, TaskUpdate)>,
    /// Tasks with no remote counterpart
    pub delete: Vec<Task>,
}

/// Counts of applied changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncResult {
    /// Tasks created
    pub created: usize,
    /// Tasks updated
    pub updated: usize,
    /// Tasks deleted
    pub deleted: usize,
}

/// The server escapes markdown and HTML in stored descriptions
fn unescape(description: &str) -> String {
    description.replace("\\_", "_").replace("&amp;", "&")
}

fn cleanse(description: &str) -> String {
    unescape(description)
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
        .replace("\\*", "*")
}

/// Work out which tasks to create, update, and delete
#[must_use]
pub fn plan_sync(remote: &[RemoteTask], existing: &[Task]) -> SyncPlan {
    let mut plan = SyncPlan::default();
    let mut still_present = vec![false; existing.len()];

    for item in remote {
        let matched = existing.iter().position(|task| {
            unescape(task.description.as_deref().unwrap_or("")).contains(&item.unique_id)
        });

        let Some(index) = matched else {
            plan.create.push(item.create.clone());
            continue;
        };
        still_present[index] = true;

        let task = &existing[index];
        let current = cleanse(task.description.as_deref().unwrap_or("")).to_lowercase();
        let wanted = item.create.description.as_deref().unwrap_or("").to_lowercase();
        if !current.starts_with(&wanted) {
            plan.update.push((task.id.clone(), TaskUpdate::from(&item.create)));
        }
    }

    plan.delete = existing
        .iter()
        .zip(still_present)
        .filter(|(_, present)| !present)
        .map(|(task, _)| task.clone())
        .collect();
    plan
}

/// Sync `remote` into `project`
///
/// Creation failures abort the sync. Individual update or delete failures
/// are logged and the sync carries on.
pub fn sync_remote_tasks(
    api: &dyn ProjectManagerApi,
    remote: &[RemoteTask],
    project: &Project,
) -> Result<SyncResult, FlowError> {
    let existing = load_tasks(api, Some(&format!("ProjectId eq {}", project.id)))?;
    info!("Found {} tasks in project '{}'", existing.len(), project.name);

    let plan = plan_sync(remote, &existing);

    if !plan.create.is_empty() {
        info!("Creating {} new tasks...", plan.create.len());
        let response = api.create_many_tasks(&project.id, &plan.create)?;
        if !response.success {
            return Err(FlowError::api("Create tasks", response.error_message()));
        }
    }

    if !plan.delete.is_empty() {
        info!("Deleting {} closed tasks...", plan.delete.len());
        for task in &plan.delete {
            let response = api.delete_task(&task.id)?;
            if response.success {
                info!("Removed task {} ({})", task.short_id, task.name);
            } else {
                warn!("Unable to remove task {}: {}", task.short_id, response.error_message());
            }
        }
    }

    if !plan.update.is_empty() {
        info!("Updating {} modified tasks...", plan.update.len());
        for (id, update) in &plan.update {
            let response = api.update_task(id, update)?;
            if !response.success {
                warn!("Error updating task {}: {}", id, response.error_message());
            }
        }
    }

    Ok(SyncResult {
        created: plan.create.len(),
        updated: plan.update.len(),
        deleted: plan.delete.len(),
    })
}
