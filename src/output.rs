//! Output formatting for human, JSON, CSV, and TSV modes
//!
//! Result types render either as human-readable text or as one of the
//! machine formats. Machine output is pruned first, so absent fields and
//! empty collections never show up as `null`, `[]`, or `{}`.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use crate::core::models::{Comment, Project, Task};
use crate::core::services::prune_json;

/// Output format for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// Pretty-printed JSON array
    Json,
    /// Comma-separated values with a header row
    Csv,
    /// Tab-separated values with a header row
    Tsv,
}

impl OutputFormat {
    /// Whether this is a machine-readable format
    #[must_use]
    pub const fn is_machine(self) -> bool {
        !matches!(self, Self::Human)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(format!("Invalid format: {s}. Use: human, json, csv, tsv")),
        }
    }
}

/// Write `items` in a machine format
///
/// `Human` falls back to JSON; callers with a text rendering handle it
/// before reaching here.
pub fn write_items<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let values = items
        .iter()
        .map(|item| serde_json::to_value(item).map(|v| prune_json(&v)))
        .collect::<Result<Vec<_>, _>>()?;

    match format {
        OutputFormat::Human | OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&Value::Array(values))?)?;
        },
        OutputFormat::Csv => write_delimited(&values, b',', out)?,
        OutputFormat::Tsv => write_delimited(&values, b'\t', out)?,
    }
    Ok(())
}

/// One header row with every top-level key, in first-seen order
fn write_delimited(values: &[Value], delimiter: u8, out: &mut dyn Write) -> anyhow::Result<()> {
    let mut columns: Vec<String> = Vec::new();
    for value in values {
        if let Value::Object(map) = value {
            for key in map.keys() {
                if !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    if columns.is_empty() {
        return Ok(());
    }

    let mut writer = csv::WriterBuilder::new().delimiter(delimiter).from_writer(out);
    writer.write_record(&columns)?;
    for value in values {
        writer.write_record(columns.iter().map(|c| cell(value.get(c))))?;
    }
    writer.flush()?;
    Ok(())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Result of listing projects
#[derive(Debug, Serialize)]
pub struct ProjectListResult {
    /// Projects in server order
    pub projects: Vec<Project>,
}

/// Result of listing or querying tasks
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Project the tasks belong to, when listing a single project
    pub project: Option<Project>,
    /// Tasks in outline order
    pub tasks: Vec<Task>,
}

/// Result of reading a task's discussion
#[derive(Debug, Serialize)]
pub struct CommentListResult {
    /// The task
    pub task: Task,
    /// Comments in server order
    pub comments: Vec<Comment>,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Payload returned by the server, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ProjectListResult {
    /// Render the result to stdout
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<()> {
        self.write_to(format, &mut io::stdout().lock())
    }

    /// Render the result to `out`
    pub fn write_to(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        if format.is_machine() {
            return write_items(&self.projects, format, out);
        }

        writeln!(out, "Found {} projects:", self.projects.len())?;
        for project in &self.projects {
            writeln!(
                out,
                "* {} - {} ({})",
                project.short_id.as_deref().unwrap_or("-"),
                project.name,
                project.id
            )?;
        }
        Ok(())
    }
}

impl TaskListResult {
    /// Render the result to stdout
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<()> {
        self.write_to(format, &mut io::stdout().lock())
    }

    /// Render the result to `out`
    pub fn write_to(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        if format.is_machine() {
            return write_items(&self.tasks, format, out);
        }

        if let Some(project) = &self.project {
            writeln!(
                out,
                "Project {} ({})",
                project.name,
                project.short_id.as_deref().unwrap_or("-")
            )?;
        }
        for task in &self.tasks {
            writeln!(
                out,
                "* {} - {} - {} ({}% complete)",
                task.wbs.as_deref().unwrap_or("-"),
                task.short_id,
                task.name,
                task.percent_complete.unwrap_or(0)
            )?;
        }
        writeln!(out, "Total {} tasks.", self.tasks.len())?;
        Ok(())
    }
}

impl CommentListResult {
    /// Render the result to stdout
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<()> {
        self.write_to(format, &mut io::stdout().lock())
    }

    /// Render the result to `out`
    pub fn write_to(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        if format.is_machine() {
            return write_items(&self.comments, format, out);
        }

        writeln!(out, "Task {} ({})", self.task.name, self.task.short_id)?;
        if self.comments.is_empty() {
            writeln!(out, "No comments.")?;
        }
        for comment in &self.comments {
            writeln!(
                out,
                "On {} {} wrote:",
                comment.create_date.as_deref().unwrap_or("(unknown date)"),
                comment.author_name.as_deref().unwrap_or("(unknown author)")
            )?;
            writeln!(out, "  {}", comment.text)?;
            for reaction in &comment.emoji {
                writeln!(out, "Reaction: {} ({})", reaction.name, reaction.user_ids.len())?;
            }
        }
        Ok(())
    }
}

impl OperationResult {
    /// Successful result with a message
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    /// Attach the server payload
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(prune_json(&data));
        self
    }

    /// Render the result to stdout
    pub fn render(&self, format: OutputFormat) -> anyhow::Result<()> {
        self.write_to(format, &mut io::stdout().lock())
    }

    /// Render the result to `out`
    pub fn write_to(&self, format: OutputFormat, out: &mut dyn Write) -> anyhow::Result<()> {
        if format.is_machine() {
            writeln!(out, "{}", serde_json::to_string_pretty(self)?)?;
        } else {
            writeln!(out, "{}", self.message)?;
        }
        Ok(())
    }
}
