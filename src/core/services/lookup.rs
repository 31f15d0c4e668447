//! Project and task lookup helpers

use log::debug;

use super::error::FlowError;
use crate::core::models::{Project, Task, TaskQuery};
use crate::core::ports::ProjectManagerApi;

/// Page size used when loading every matching task
pub const PAGE_SIZE: u32 = 500;

/// Load every task matching `filter`, following `$skip` until a short page
pub fn load_tasks(api: &dyn ProjectManagerApi, filter: Option<&str>) -> Result<Vec<Task>, FlowError> {
    let mut tasks = Vec::new();
    let mut skip = 0;

    loop {
        let query = TaskQuery {
            top: Some(PAGE_SIZE),
            skip: (skip > 0).then_some(skip),
            filter: filter.map(String::from),
            ..TaskQuery::default()
        };
        let response = api.query_tasks(&query)?;
        if !response.success {
            return Err(FlowError::api("Query tasks", response.error_message()));
        }

        let page = response.data.unwrap_or_default();
        let fetched = page.len();
        tasks.extend(page);
        debug!("Fetched {} task(s), {} so far", fetched, tasks.len());

        if fetched < PAGE_SIZE as usize {
            return Ok(tasks);
        }
        skip += PAGE_SIZE;
    }
}

/// Load every project visible to the API key
pub fn load_projects(api: &dyn ProjectManagerApi) -> Result<Vec<Project>, FlowError> {
    let response = api.query_projects(&TaskQuery::default())?;
    if !response.success {
        return Err(FlowError::api("Query projects", response.error_message()));
    }
    Ok(response.data.unwrap_or_default())
}

/// Pick the project whose short id equals `ident`, or whose name or id
/// equals it ignoring case
#[must_use]
pub fn match_project<'a>(projects: &'a [Project], ident: &str) -> Option<&'a Project> {
    projects.iter().find(|p| {
        p.short_id.as_deref() == Some(ident)
            || p.name.eq_ignore_ascii_case(ident)
            || p.id.eq_ignore_ascii_case(ident)
    })
}

/// Find one project by id, short id, or name
pub fn find_project(api: &dyn ProjectManagerApi, ident: &str) -> Result<Project, FlowError> {
    let projects = load_projects(api)?;
    match_project(&projects, ident)
        .cloned()
        .ok_or_else(|| FlowError::ProjectNotFound {
            ident: ident.to_string(),
            candidates: projects
                .iter()
                .map(|p| format!("{} - {} ({})", p.short_id.as_deref().unwrap_or("-"), p.name, p.id))
                .collect(),
        })
}

/// Find one task by short id
pub fn find_task(api: &dyn ProjectManagerApi, short_id: &str) -> Result<Task, FlowError> {
    let query = TaskQuery {
        top: Some(1),
        filter: Some(format!("(ShortId eq '{}')", escape_odata(short_id))),
        ..TaskQuery::default()
    };
    let response = api.query_tasks(&query)?;
    if !response.success {
        return Err(FlowError::api("Query tasks", response.error_message()));
    }
    response
        .data
        .and_then(|tasks| tasks.into_iter().next())
        .ok_or_else(|| FlowError::TaskNotFound(short_id.to_string()))
}

/// Escape a string literal for an OData filter
#[must_use]
pub fn escape_odata(value: &str) -> String {
    value.replace('\'', "''")
}
