//! Business logic services
//!
//! Orchestration that runs against the [`ProjectManagerApi`] port, plus
//! pure helpers operating on data passed in.
//!
//! - [`prune`] - Remove empty and absent nodes from payloads
//! - [`wbs`] - Outline-number task ordering
//! - [`lookup`] - Project and task lookup, paged task loading
//! - [`demo`] - The identity → list → create demonstration flow
//! - [`sync`] - Keep a project's tasks in step with another system
//!
//! [`ProjectManagerApi`]: crate::core::ports::ProjectManagerApi

pub mod demo;
pub mod error;
pub mod lookup;
pub mod prune;
pub mod sync;
pub mod wbs;

pub use demo::{DemoOptions, DemoReport, run_demo, verify_identity};
pub use error::FlowError;
pub use lookup::{find_project, find_task, load_projects, load_tasks};
pub use prune::{prune, prune_json};
pub use sync::{RemoteTask, SyncPlan, SyncResult, plan_sync, sync_remote_tasks};
pub use wbs::{compare_wbs, sort_by_wbs};
