//! Shared client setup: resolve settings, build the client, verify the key

use colored::Colorize;
use log::debug;

use pmtask::adapters::http::HttpProjectManager;
use pmtask::config::{Overrides, Settings};
use pmtask::core::models::Me;
use pmtask::core::services::verify_identity;

/// Build a client and confirm the API key works
///
/// Fails before any request when no API key is configured.
pub fn connect(overrides: &Overrides) -> anyhow::Result<(HttpProjectManager, Me)> {
    let settings = Settings::from_env(overrides)?;
    debug!("Connecting to {} as '{}'", settings.environment, settings.app_name);

    let client = HttpProjectManager::from_settings(&settings)?;
    let me = verify_identity(&client)?;

    eprintln!(
        "{} {} ({}) in workspace {}.",
        "Logged on as".dimmed(),
        me.email_address,
        me.role_name.as_deref().unwrap_or("no role"),
        me.work_space_name.as_deref().unwrap_or("(unknown)")
    );
    Ok((client, me))
}
