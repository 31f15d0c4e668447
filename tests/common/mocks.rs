//! Stub implementation of the API port for testing
//!
//! The stub serves canned data and records every call so tests can assert
//! what was (and was not) attempted.

use std::cell::RefCell;

use pmtask::core::models::{
    ApiResponse, Comment, CommentCreate, CommentCreated, Me, Project, ProjectCreate, Task,
    TaskCreate, TaskQuery, TaskUpdate,
};
use pmtask::core::ports::ProjectManagerApi;

/// Stub implementation of ProjectManagerApi
pub struct StubApi {
    me: ApiResponse<Me>,
    tasks: Vec<Task>,
    projects: Vec<Project>,
    comments: Vec<Comment>,
    fail_create: bool,
    calls: RefCell<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self {
            me: ApiResponse::ok(Me {
                full_name: "Ada Lovelace".to_string(),
                email_address: "ada@example.com".to_string(),
                role_name: Some("Admin".to_string()),
                work_space_name: Some("Engines".to_string()),
            }),
            tasks: Vec::new(),
            projects: Vec::new(),
            comments: Vec::new(),
            fail_create: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_me(mut self, me: ApiResponse<Me>) -> Self {
        self.me = me;
        self
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn failing_creates(mut self) -> Self {
        self.fail_create = true;
        self
    }

    /// Every call made so far, as "operation" or "operation:detail"
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether any call starts with `prefix`
    pub fn called(&self, prefix: &str) -> bool {
        self.calls.borrow().iter().any(|c| c.starts_with(prefix))
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl Default for StubApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a task with the fields the tests care about
pub fn task(id: &str, short_id: &str, name: &str) -> Task {
    Task {
        id: id.to_string(),
        short_id: short_id.to_string(),
        name: name.to_string(),
        ..Task::default()
    }
}

/// Build a project
pub fn project(id: &str, short_id: &str, name: &str) -> Project {
    Project {
        id: id.to_string(),
        short_id: Some(short_id.to_string()),
        name: name.to_string(),
        description: None,
    }
}

impl ProjectManagerApi for StubApi {
    fn version(&self) -> String {
        "stub".to_string()
    }

    fn retrieve_me(&self) -> pmtask::Result<ApiResponse<Me>> {
        self.record("retrieve_me");
        Ok(self.me.clone())
    }

    fn query_tasks(&self, query: &TaskQuery) -> pmtask::Result<ApiResponse<Vec<Task>>> {
        self.record(format!("query_tasks:{}", query.filter.as_deref().unwrap_or("")));

        let short_id = query
            .filter
            .as_deref()
            .and_then(|f| f.strip_prefix("(ShortId eq '"))
            .and_then(|f| f.strip_suffix("')"));
        let matching: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| short_id.is_none_or(|id| t.short_id == id))
            .cloned()
            .collect();

        let skip = query.skip.unwrap_or(0) as usize;
        let top = query.top.map_or(usize::MAX, |t| t as usize);
        Ok(ApiResponse::ok(matching.into_iter().skip(skip).take(top).collect()))
    }

    fn query_projects(&self, _query: &TaskQuery) -> pmtask::Result<ApiResponse<Vec<Project>>> {
        self.record("query_projects");
        Ok(ApiResponse::ok(self.projects.clone()))
    }

    fn create_project(&self, project: &ProjectCreate) -> pmtask::Result<ApiResponse<Project>> {
        self.record(format!("create_project:{}", project.name));
        if self.fail_create {
            return Ok(ApiResponse::failed("create disabled"));
        }
        Ok(ApiResponse::ok(Project {
            id: "new-project".to_string(),
            short_id: Some("NEW".to_string()),
            name: project.name.clone(),
            description: project.description.clone(),
        }))
    }

    fn create_task(&self, project_id: &str, task: &TaskCreate) -> pmtask::Result<ApiResponse<Task>> {
        self.record(format!("create_task:{project_id}:{}", task.name));
        if self.fail_create {
            return Ok(ApiResponse::failed("create disabled"));
        }
        Ok(ApiResponse::ok(self::task("new-task", "NEW-1", &task.name)))
    }

    fn create_many_tasks(
        &self,
        project_id: &str,
        tasks: &[TaskCreate],
    ) -> pmtask::Result<ApiResponse<Vec<Task>>> {
        self.record(format!("create_many_tasks:{project_id}:{}", tasks.len()));
        if self.fail_create {
            return Ok(ApiResponse::failed("create disabled"));
        }
        Ok(ApiResponse::ok(
            tasks
                .iter()
                .enumerate()
                .map(|(n, t)| self::task(&format!("new-{n}"), &format!("NEW-{n}"), &t.name))
                .collect(),
        ))
    }

    fn update_task(&self, task_id: &str, _update: &TaskUpdate) -> pmtask::Result<ApiResponse<Task>> {
        self.record(format!("update_task:{task_id}"));
        Ok(ApiResponse::ok(Task::default()))
    }

    fn delete_task(&self, task_id: &str) -> pmtask::Result<ApiResponse<serde_json::Value>> {
        self.record(format!("delete_task:{task_id}"));
        Ok(ApiResponse::ok(serde_json::Value::Null))
    }

    fn retrieve_task_comments(&self, task_id: &str) -> pmtask::Result<ApiResponse<Vec<Comment>>> {
        self.record(format!("retrieve_task_comments:{task_id}"));
        Ok(ApiResponse::ok(self.comments.clone()))
    }

    fn create_task_comment(
        &self,
        task_id: &str,
        _comment: &CommentCreate,
    ) -> pmtask::Result<ApiResponse<CommentCreated>> {
        self.record(format!("create_task_comment:{task_id}"));
        Ok(ApiResponse::ok(CommentCreated {
            discussion_comment_id: "comment-1".to_string(),
        }))
    }
}
