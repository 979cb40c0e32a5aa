use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tdw_core::ics::{self, ICS_FILENAME};
use tdw_core::resolve;

use super::Context;

pub fn run(ctx: &Context, output: Option<PathBuf>) -> Result<()> {
    let record = ctx.require_setup()?.to_record();
    let events = resolve(&record, &ctx.catalog);

    if events.is_empty() {
        tracing::warn!("nothing scheduled, writing an empty calendar");
    }

    let content = ics::encode(&events);
    let path = output.unwrap_or_else(|| PathBuf::from(ICS_FILENAME));

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write calendar to {}", path.display()))?;

    tracing::info!(path = %path.display(), events = events.len(), "calendar written");
    println!("iCal-Datei geschrieben: {} ({} Termine)", path.display(), events.len());

    Ok(())
}
