//! Project commands - list and create projects

use pmtask::config::Overrides;
use pmtask::core::models::ProjectCreate;
use pmtask::core::ports::ProjectManagerApi;
use pmtask::core::services::{FlowError, load_projects};
use pmtask::output::{OperationResult, OutputFormat, ProjectListResult};

use super::connect::connect;

/// List every project visible to the API key
pub fn list_projects(overrides: &Overrides, format: OutputFormat) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let projects = load_projects(&client)?;
    ProjectListResult { projects }.render(format)
}

/// Create a project
pub fn create_project(
    overrides: &Overrides,
    name: &str,
    description: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let response = client.create_project(&ProjectCreate::new(name, description))?;
    if !response.success {
        return Err(FlowError::api("Create project", response.error_message()).into());
    }

    let project = response.data.unwrap_or_default();
    OperationResult::ok(format!("Created project {name}: {}", project.id))
        .with_data(serde_json::to_value(&project)?)
        .render(format)
}
