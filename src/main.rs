//! pmtask - Work with projects and tasks of a project-management service from
//! the command line
//!
//! Thin binary over the `pmtask` library: parses arguments, resolves
//! configuration, and maps failures to exit codes.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
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

mod cli;
mod commands;

use std::process::ExitCode;

use colored::Colorize;

/// Main entry point for the pmtask CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::from(cli::exit_code(&err))
        },
    }
}
