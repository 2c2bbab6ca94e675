pub mod chat_controller;
pub mod matches_controller;
pub mod squad_controller;
pub mod stats_controller;
pub mod teams_controller;

pub use chat_controller::ChatController;
pub use matches_controller::MatchesController;
pub use squad_controller::SquadController;
pub use stats_controller::StatsController;
pub use teams_controller::TeamsController;

use anyhow::{bail, Result};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::domain::{Payload, SessionSnapshot};

/// Renders a settled structured session. An error state becomes an `Err`
/// carrying the user-facing message and a retry hint; partial data is never
/// shown.
fn render_snapshot(
    snapshot: &SessionSnapshot,
    format: OutputFormat,
    body: impl FnOnce(&Payload) -> String,
) -> Result<String> {
    if let Some(error) = &snapshot.error {
        if let Some(detail) = &error.detail {
            debug!("{} failure detail: {}", snapshot.domain, detail);
        }
        bail!("{}\nRun the command again to retry.", error.message);
    }

    let Some(payload) = &snapshot.payload else {
        bail!("No {} loaded.", snapshot.domain.noun());
    };

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(payload)?,
        OutputFormat::Text => body(payload),
    })
}
