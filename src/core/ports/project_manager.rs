//! Project-management API port
//!
//! Defines the interface the services use to reach the remote API.

use crate::core::models::{
    ApiResponse, Comment, CommentCreate, CommentCreated, Me, Project, ProjectCreate, Task,
    TaskCreate, TaskQuery, TaskUpdate,
};
use crate::error::Result;

/// Remote project-management API
///
/// Every call returns the server's envelope untouched so callers can
/// inspect the `success` flag themselves. Transport and HTTP-status
/// failures surface as `Err`.
pub trait ProjectManagerApi {
    /// Version string reported by this client
    fn version(&self) -> String;

    /// Retrieve the identity bound to the API key
    fn retrieve_me(&self) -> Result<ApiResponse<Me>>;

    /// Query tasks across all projects
    fn query_tasks(&self, query: &TaskQuery) -> Result<ApiResponse<Vec<Task>>>;

    /// Query projects
    fn query_projects(&self, query: &TaskQuery) -> Result<ApiResponse<Vec<Project>>>;

    /// Create a project
    fn create_project(&self, project: &ProjectCreate) -> Result<ApiResponse<Project>>;

    /// Create a single task in a project
    fn create_task(&self, project_id: &str, task: &TaskCreate) -> Result<ApiResponse<Task>>;

    /// Create several tasks in a project in one call
    fn create_many_tasks(
        &self,
        project_id: &str,
        tasks: &[TaskCreate],
    ) -> Result<ApiResponse<Vec<Task>>>;

    /// Update a task
    fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<ApiResponse<Task>>;

    /// Delete a task
    fn delete_task(&self, task_id: &str) -> Result<ApiResponse<serde_json::Value>>;

    /// Read a task's discussion
    fn retrieve_task_comments(&self, task_id: &str) -> Result<ApiResponse<Vec<Comment>>>;

    /// Add a comment to a task's discussion
    fn create_task_comment(
        &self,
        task_id: &str,
        comment: &CommentCreate,
    ) -> Result<ApiResponse<CommentCreated>>;
}
