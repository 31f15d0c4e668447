//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundary between the services and the remote
//! project-management API.
//!
//! Implementations live in the `adapters` module; tests supply stubs.

mod project_manager;

pub use project_manager::ProjectManagerApi;
