//! Domain models for pmtask
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`NestedValue`] - Schema-less payload tree handled by the pruner
//! - [`Me`], [`Project`], [`Task`], [`Comment`] - API records
//! - [`ApiResponse`] - The `success`/`data`/`error` envelope
//! - [`TaskQuery`] - Paging and filter options

mod discussion;
mod identity;
mod nullable;
mod project;
mod query;
mod response;
mod task;
mod value;

pub use discussion::{Comment, CommentCreate, CommentCreated, Emoji};
pub use identity::Me;
pub use project::{Project, ProjectCreate};
pub use query::TaskQuery;
pub use response::{ApiErrorBody, ApiResponse};
pub use task::{Task, TaskCreate, TaskUpdate};
pub use value::{NestedValue, Scalar};
