use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::{Method, Url};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::{DEFAULT_APP_NAME, Environment, Settings};
use crate::core::models::{
    ApiResponse, Comment, CommentCreate, CommentCreated, Me, Project, ProjectCreate, Task,
    TaskCreate, TaskQuery, TaskUpdate,
};
use crate::core::ports::ProjectManagerApi;
use crate::error::{Error, Result, error_from_status};

const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const API_PREFIX: [&str; 2] = ["api", "data"];

/// Builder for constructing an [`HttpProjectManager`].
#[derive(Debug)]
pub struct HttpProjectManagerBuilder {
    environment: Environment,
    api_key: Option<String>,
    app_name: String,
    timeout: Duration,
}

impl Default for HttpProjectManagerBuilder {
    fn default() -> Self {
        Self {
            environment: Environment::Production,
            api_key: None,
            app_name: DEFAULT_APP_NAME.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpProjectManagerBuilder {
    /// Set the target environment.
    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the API key for Bearer authentication.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the application name reported to the server.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<HttpProjectManager> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("pmtask/{CLIENT_VERSION}"))
                .map_err(|e| Error::Config(e.to_string()))?,
        );
        headers.insert(
            "applicationname",
            HeaderValue::from_str(&self.app_name).map_err(|e| Error::Config(e.to_string()))?,
        );
        if let Some(ref key) = self.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|e| Error::Auth(e.to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .timeout(self.timeout)
            .build()?;

        Ok(HttpProjectManager {
            base_url: self.environment.base_url().to_string(),
            http,
        })
    }
}

/// Blocking client for the project-management REST API.
///
/// # Example
/// ```no_run
/// # fn example() -> pmtask::Result<()> {
/// use pmtask::adapters::http::HttpProjectManager;
/// use pmtask::core::ports::ProjectManagerApi;
///
/// let client = HttpProjectManager::builder().api_key("my-key").build()?;
/// let me = client.retrieve_me()?;
/// println!("{:?}", me.data);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpProjectManager {
    base_url: String,
    http: Client,
}

impl HttpProjectManager {
    /// Create a new builder targeting production.
    #[must_use]
    pub fn builder() -> HttpProjectManagerBuilder {
        HttpProjectManagerBuilder::default()
    }

    /// Build a client from resolved settings.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Self::builder()
            .environment(settings.environment.clone())
            .api_key(settings.api_key.as_str())
            .app_name(settings.app_name.as_str())
            .build()
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- Internal --

    /// `base_url/api/data/{segments}`, each segment percent-encoded
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url).map_err(|e| Error::Config(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| Error::Config(format!("{} cannot be a base URL", self.base_url)))?
            .pop_if_empty()
            .extend(API_PREFIX)
            .extend(segments);
        Ok(url)
    }

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        query: &[(&str, String)],
        body: Option<&(impl Serialize + ?Sized)>,
    ) -> Result<ApiResponse<T>> {
        let url = self.url(path)?;
        debug!("{method} {url}");

        let mut req = self.http.request(method, url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        let response = req.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;
        debug!("-> {status} ({} bytes)", text.len());

        if status >= 400 {
            return Err(error_from_status(status, &text));
        }

        if text.trim().is_empty() {
            return Ok(ApiResponse {
                success: true,
                data: None,
                error: None,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn get<T: DeserializeOwned>(&self, path: &[&str], query: &[(&str, String)]) -> Result<ApiResponse<T>> {
        self.request(Method::GET, path, query, None::<&()>)
    }

    fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        body: &(impl Serialize + ?Sized),
    ) -> Result<ApiResponse<T>> {
        self.request(method, path, &[], Some(body))
    }
}

impl ProjectManagerApi for HttpProjectManager {
    fn version(&self) -> String {
        CLIENT_VERSION.to_string()
    }

    fn retrieve_me(&self) -> Result<ApiResponse<Me>> {
        self.get(&["me"], &[])
    }

    fn query_tasks(&self, query: &TaskQuery) -> Result<ApiResponse<Vec<Task>>> {
        self.get(&["tasks"], &query.to_params())
    }

    fn query_projects(&self, query: &TaskQuery) -> Result<ApiResponse<Vec<Project>>> {
        self.get(&["projects"], &query.to_params())
    }

    fn create_project(&self, project: &ProjectCreate) -> Result<ApiResponse<Project>> {
        self.send(Method::POST, &["projects"], project)
    }

    fn create_task(&self, project_id: &str, task: &TaskCreate) -> Result<ApiResponse<Task>> {
        self.send(Method::POST, &["projects", project_id, "tasks"], task)
    }

    fn create_many_tasks(
        &self,
        project_id: &str,
        tasks: &[TaskCreate],
    ) -> Result<ApiResponse<Vec<Task>>> {
        self.send(Method::POST, &["projects", project_id, "tasks", "bulk"], tasks)
    }

    fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<ApiResponse<Task>> {
        self.send(Method::PUT, &["tasks", task_id], update)
    }

    fn delete_task(&self, task_id: &str) -> Result<ApiResponse<serde_json::Value>> {
        self.request(Method::DELETE, &["tasks", task_id], &[], None::<&()>)
    }

    fn retrieve_task_comments(&self, task_id: &str) -> Result<ApiResponse<Vec<Comment>>> {
        self.get(&["tasks", task_id, "comments"], &[])
    }

    fn create_task_comment(
        &self,
        task_id: &str,
        comment: &CommentCreate,
    ) -> Result<ApiResponse<CommentCreated>> {
        self.send(Method::POST, &["tasks", task_id, "comments"], comment)
    }
}
