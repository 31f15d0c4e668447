//! Task commands - list, query, and create tasks

use pmtask::config::Overrides;
use pmtask::core::models::TaskCreate;
use pmtask::core::ports::ProjectManagerApi;
use pmtask::core::services::{FlowError, find_project, load_tasks, sort_by_wbs};
use pmtask::output::{OperationResult, OutputFormat, TaskListResult};

use super::connect::connect;

/// List all tasks within a project
pub fn list_tasks(
    overrides: &Overrides,
    project: &str,
    query: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let project = find_project(&client, project)?;

    let filter = match query {
        Some(q) => format!("projectId eq {} and ({q})", project.id),
        None => format!("projectId eq {}", project.id),
    };
    let mut tasks = load_tasks(&client, Some(&filter))?;
    sort_by_wbs(&mut tasks);

    TaskListResult {
        project: Some(project),
        tasks,
    }
    .render(format)
}

/// Query tasks across all projects
pub fn query_tasks(overrides: &Overrides, query: &str, format: OutputFormat) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let mut tasks = load_tasks(&client, Some(query))?;
    sort_by_wbs(&mut tasks);

    TaskListResult {
        project: None,
        tasks,
    }
    .render(format)
}

/// Create a task in a project
pub fn create_task(
    overrides: &Overrides,
    project: &str,
    name: &str,
    description: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let project = find_project(&client, project)?;

    let response = client.create_task(&project.id, &TaskCreate::new(name, description))?;
    if !response.success {
        return Err(FlowError::api("Create task", response.error_message()).into());
    }

    let task = response.data.unwrap_or_default();
    OperationResult::ok(format!("Created task {name}: {}", task.id))
        .with_data(serde_json::to_value(&task)?)
        .render(format)
}
