//! Whoami command - show the identity behind the API key

use pmtask::config::Overrides;
use pmtask::output::{OperationResult, OutputFormat};

use super::connect::connect;

/// Show the authenticated user
pub fn whoami(overrides: &Overrides, format: OutputFormat) -> anyhow::Result<()> {
    let (_, me) = connect(overrides)?;
    OperationResult::ok(format!("Logged in as {} ({})", me.full_name, me.email_address))
        .with_data(serde_json::to_value(&me)?)
        .render(format)
}
