//! Command implementations

mod comments;
mod connect;
mod demo;
mod import;
mod projects;
mod tasks;
mod whoami;

pub use comments::{add_comment, read_comments};
pub use demo::demo;
pub use import::import_files;
pub use projects::{create_project, list_projects};
pub use tasks::{create_task, list_tasks, query_tasks};
pub use whoami::whoami;
