//! End-to-end demonstration flow
//!
//! verify identity → list tasks → create a project → bulk-create tasks

use std::io::Write;

use log::{debug, info};
use serde::Serialize;

use super::error::FlowError;
use super::prune::prune_json;
use crate::core::models::{ApiResponse, Me, Project, ProjectCreate, Task, TaskCreate, TaskQuery};
use crate::core::ports::ProjectManagerApi;

/// Inputs of the demonstration flow
#[derive(Debug, Clone)]
pub struct DemoOptions {
    /// Maximum number of tasks to list
    pub page_size: u32,
    /// Name of the project to create
    pub project_name: String,
    /// Description of the project to create
    pub project_description: String,
    /// Project receiving the bulk-created tasks; skipped when unset
    pub bulk_project: Option<String>,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            page_size: 10,
            project_name: "New Project - pmtask".to_string(),
            project_description: "This is my project description".to_string(),
            bulk_project: None,
        }
    }
}

/// What the flow did
#[derive(Debug)]
pub struct DemoReport {
    /// Authenticated identity
    pub me: Me,
    /// Tasks listed, in listing order
    pub tasks: Vec<Task>,
    /// Envelope returned by project creation
    pub project: ApiResponse<Project>,
    /// Envelope returned by bulk task creation, when it ran
    pub bulk: Option<ApiResponse<Vec<Task>>>,
}

/// The three tasks created by the bulk step
#[must_use]
pub fn sample_tasks() -> Vec<TaskCreate> {
    ["First Task", "Second Task", "Third Task"]
        .into_iter()
        .map(|name| TaskCreate::new(name, Some("Description")))
        .collect()
}

/// Run the flow against `api`, writing progress lines to `out`
///
/// Stops at the first failure: an invalid identity yields
/// [`FlowError::Authentication`], an empty task listing yields
/// [`FlowError::NoRecords`], and nothing is created in either case.
pub fn run_demo(
    api: &dyn ProjectManagerApi,
    options: &DemoOptions,
    out: &mut dyn Write,
) -> Result<DemoReport, FlowError> {
    let me = verify_identity(api)?;
    writeln!(out, "Logged in as {} ({})", me.full_name, me.email_address)?;
    writeln!(out, "Testing against client {}", api.version())?;

    let listing = api.query_tasks(&TaskQuery::top(options.page_size))?;
    let tasks = listing.data.unwrap_or_default();
    if tasks.is_empty() {
        return Err(FlowError::NoRecords);
    }
    for (n, task) in tasks.iter().enumerate() {
        writeln!(out, "Task {n}: {} {}", task.short_id, task.name)?;
    }

    let project = api.create_project(&ProjectCreate::new(
        options.project_name.as_str(),
        Some(options.project_description.as_str()),
    ))?;
    info!("Created project '{}' (success: {})", options.project_name, project.success);
    write_result(out, &project)?;

    let bulk = match &options.bulk_project {
        Some(project_id) => {
            let response = api.create_many_tasks(project_id, &sample_tasks())?;
            write_result(out, &response)?;
            Some(response)
        },
        None => {
            debug!("No bulk project configured, skipping task creation");
            None
        },
    };

    Ok(DemoReport {
        me,
        tasks,
        project,
        bulk,
    })
}

/// Check the key against the identity endpoint
///
/// Fails unless the envelope reports success and carries an identity.
pub fn verify_identity(api: &dyn ProjectManagerApi) -> Result<Me, FlowError> {
    let response = api.retrieve_me()?;
    if !response.success {
        return Err(FlowError::Authentication(response.error_message()));
    }
    response
        .data
        .ok_or_else(|| FlowError::Authentication("no identity returned".to_string()))
}

fn write_result<T: Serialize>(out: &mut dyn Write, result: &T) -> Result<(), FlowError> {
    let value = serde_json::to_value(result).map_err(crate::error::Error::from)?;
    writeln!(out, "Result: {}", prune_json(&value))?;
    Ok(())
}
