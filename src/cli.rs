//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use pmtask::config::{ConfigError, Overrides};
use pmtask::core::services::FlowError;
use pmtask::output::OutputFormat;

/// pmtask - Work with projects and tasks from the command line
#[derive(Parser, Debug)]
#[command(
    name = "pmtask",
    version,
    about = "Work with projects and tasks from the command line",
    long_about = "List, query, and create projects and tasks through the project-management API.\n\n\
                  The API key is read from --api-key, then PM_API_KEY, then ~/.pmtask/config.toml.\n\
                  The environment is read from --env, then PM_ENV, and defaults to production."
)]
pub struct Cli {
    /// API key (overrides PM_API_KEY)
    #[arg(short = 'a', long = "api-key", global = true)]
    pub api_key: Option<String>,

    /// Environment name or base URL (overrides PM_ENV)
    #[arg(short = 'e', long = "env", global = true)]
    pub env: Option<String>,

    /// Output format: human, json, csv, tsv
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Connection values given on the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            environment: self.env.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the demonstration flow: who am I, list tasks, create a project and tasks
    Demo {
        /// Maximum number of tasks to list
        #[arg(long, default_value_t = 10)]
        top: u32,

        /// Project ID receiving three sample tasks (skipped when omitted)
        #[arg(long = "bulk-project")]
        bulk_project: Option<String>,
    },

    /// Show the identity the API key belongs to
    Whoami,

    /// List projects
    ListProjects,

    /// Create a project
    CreateProject {
        /// Project name
        #[arg(long)]
        name: String,

        /// Project description
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// List tasks within a project, in outline order
    ListTasks {
        /// The name, ID, or short ID of the project
        #[arg(long)]
        project: String,

        /// Additional filter expression
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Query tasks across all projects
    QueryTasks {
        /// Filter expression selecting the tasks
        #[arg(short, long)]
        query: String,
    },

    /// Create a task in a project
    CreateTask {
        /// The name, ID, or short ID of the project
        #[arg(long)]
        project: String,

        /// Task name
        #[arg(long)]
        name: String,

        /// Task description
        #[arg(long = "desc")]
        description: Option<String>,
    },

    /// Read all discussion comments on a task
    ReadComments {
        /// The short ID of the task
        #[arg(long)]
        task: String,
    },

    /// Add a comment to a task
    AddComment {
        /// The short ID of the task
        #[arg(long)]
        task: String,

        /// Comment text, in markdown
        #[arg(short, long)]
        message: String,
    },

    /// Sync files matching a pattern into a project, one task per file
    ImportFiles {
        /// File patterns, comma-separated (e.g. "src/**/*.cs,*.md")
        #[arg(short, long)]
        pattern: String,

        /// Folder to scan
        #[arg(long, default_value = ".")]
        folder: PathBuf,

        /// The name, ID, or short ID of the project
        #[arg(long)]
        project: String,
    },

    /// Show version
    Version,
}

/// Exit code for a failed run
///
/// 3 configuration, 4 authentication, 5 no records, 6 API or network,
/// 7 lookup, 1 anything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<ConfigError>().is_some() {
        return 3;
    }
    if let Some(flow) = err.downcast_ref::<FlowError>() {
        return match flow {
            FlowError::Authentication(_) | FlowError::Client(pmtask::Error::Auth(_)) => 4,
            FlowError::NoRecords => 5,
            FlowError::Api { .. } | FlowError::Client(_) => 6,
            FlowError::ProjectNotFound { .. } | FlowError::TaskNotFound(_) => 7,
            FlowError::Io(_) => 1,
        };
    }
    match err.downcast_ref::<pmtask::Error>() {
        Some(pmtask::Error::Auth(_)) => 4,
        Some(pmtask::Error::Config(_)) => 3,
        Some(_) => 6,
        None => 1,
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let overrides = cli.overrides();
    let format = cli.format;

    match cli.command {
        Some(Command::Demo { top, bulk_project }) => {
            commands::demo(&overrides, top, bulk_project)
        },
        Some(Command::Whoami) => commands::whoami(&overrides, format),
        Some(Command::ListProjects) => commands::list_projects(&overrides, format),
        Some(Command::CreateProject { name, description }) => {
            commands::create_project(&overrides, &name, description.as_deref(), format)
        },
        Some(Command::ListTasks { project, query }) => {
            commands::list_tasks(&overrides, &project, query.as_deref(), format)
        },
        Some(Command::QueryTasks { query }) => commands::query_tasks(&overrides, &query, format),
        Some(Command::CreateTask {
            project,
            name,
            description,
        }) => commands::create_task(&overrides, &project, &name, description.as_deref(), format),
        Some(Command::ReadComments { task }) => commands::read_comments(&overrides, &task, format),
        Some(Command::AddComment { task, message }) => {
            commands::add_comment(&overrides, &task, &message, format)
        },
        Some(Command::ImportFiles {
            pattern,
            folder,
            project,
        }) => commands::import_files(&overrides, &pattern, &folder, &project, format),
        Some(Command::Version) => {
            if format.is_machine() {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("pmtask v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            println!("pmtask v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'pmtask --help' for usage");
            println!("Run 'pmtask demo' to try the API with PM_API_KEY set");
            Ok(())
        },
    }
}
