use std::path::Path;

use anyhow::{Context as _, Result};
use owo_colors::OwoColorize;
use tdw_core::ics::read_events;
use tdw_core::setup::format_de;

pub fn run(path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let events = read_events(&content)
        .with_context(|| format!("{} is not a valid all-day calendar", path.display()))?;

    for event in &events {
        println!("  {}  {}", format_de(event.start).dimmed(), event.summary);
    }

    println!();
    println!("{} {} Termine", "OK".green(), events.len());

    Ok(())
}
