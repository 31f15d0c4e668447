//! Demo command - the identity → list → create walkthrough

use std::io;

use pmtask::adapters::http::HttpProjectManager;
use pmtask::config::{Overrides, Settings};
use pmtask::core::services::{DemoOptions, run_demo};

/// Run the demonstration flow against the configured environment
pub fn demo(overrides: &Overrides, top: u32, bulk_project: Option<String>) -> anyhow::Result<()> {
    // Resolve before building anything so a missing key never reaches the network
    let settings = Settings::from_env(overrides)?;
    let client = HttpProjectManager::from_settings(&settings)?;

    let options = DemoOptions {
        page_size: top,
        bulk_project,
        ..DemoOptions::default()
    };
    run_demo(&client, &options, &mut io::stdout().lock())?;
    Ok(())
}
