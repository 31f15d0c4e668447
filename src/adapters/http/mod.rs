//! HTTP adapter for the project-management API
//!
//! Implements [`ProjectManagerApi`](crate::core::ports::ProjectManagerApi)
//! with a blocking `reqwest` client.

mod client;

pub use client::{HttpProjectManager, HttpProjectManagerBuilder};
