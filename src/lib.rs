//! pmtask - A CLI tool and client library for a project-management REST API
//!
//! This library provides the configuration resolver, the payload pruner, the
//! API port with its HTTP adapter, and the services the `pmtask` binary
//! orchestrates (identity check, task listing, project and task creation,
//! comments, file-to-task sync).

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{Error, Result};
