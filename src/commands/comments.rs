//! Comment commands - read and add task discussion

use pmtask::config::Overrides;
use pmtask::core::models::CommentCreate;
use pmtask::core::ports::ProjectManagerApi;
use pmtask::core::services::{FlowError, find_task};
use pmtask::output::{CommentListResult, OperationResult, OutputFormat};

use super::connect::connect;

/// Show every comment on a task
pub fn read_comments(overrides: &Overrides, task: &str, format: OutputFormat) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let task = find_task(&client, task)?;

    let response = client.retrieve_task_comments(&task.id)?;
    if !response.success {
        return Err(FlowError::api("Read comments", response.error_message()).into());
    }

    CommentListResult {
        task,
        comments: response.data.unwrap_or_default(),
    }
    .render(format)
}

/// Add a comment to a task
pub fn add_comment(
    overrides: &Overrides,
    task: &str,
    message: &str,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let (client, _) = connect(overrides)?;
    let task = find_task(&client, task)?;

    let comment = CommentCreate {
        text: message.to_string(),
    };
    let response = client.create_task_comment(&task.id, &comment)?;
    if !response.success {
        return Err(FlowError::api("Add comment", response.error_message()).into());
    }

    let created = response.data.unwrap_or_default();
    OperationResult::ok(format!(
        "Added discussion comment {} to {}.",
        created.discussion_comment_id, task.short_id
    ))
    .with_data(serde_json::to_value(&created)?)
    .render(format)
}
