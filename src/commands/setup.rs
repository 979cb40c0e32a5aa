use anyhow::Result;
use chrono::{Local, Utc};
use owo_colors::OwoColorize;
use tdw_core::SetupRecord;
use tdw_core::setup::{format_de, next_monday, parse_iso_date};

use super::Context;
use crate::store::{SelectionMode, StoredSetup};

pub fn run(ctx: &Context, start: Option<String>, weeks: u32, mode: SelectionMode) -> Result<()> {
    let start = start.unwrap_or_else(|| {
        next_monday(Local::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    });

    // Reject 0 before clamping, clamp only the upper bound
    SetupRecord::new(start.clone(), weeks, Vec::new()).validate()?;
    let weeks_count = ctx.mode.clamp_weeks(weeks);
    if weeks_count != weeks {
        println!(
            "{}",
            format!("Hinweis: höchstens {weeks_count} Wochen in dieser Version.").yellow()
        );
    }

    // A new setup starts a fresh selection
    let setup = StoredSetup {
        edition: Some(1),
        weeks_count: Some(weeks_count),
        start_monday: Some(start.clone()),
        mode: Some(mode),
        theme_ids: None,
        created_at: Some(Utc::now()),
        ..Default::default()
    };
    ctx.store.save_setup(&setup)?;

    let start_label = parse_iso_date(&start).map(format_de).unwrap_or(start);
    println!(
        "Setup gespeichert: {} Woche(n) ab Montag, {}",
        weeks_count.bold(),
        start_label.bold()
    );
    println!();
    match mode {
        SelectionMode::Manual => println!("Als Nächstes Themen wählen:  tdw select <id>..."),
        SelectionMode::Random => println!("Als Nächstes Themen auslosen: tdw select --random"),
    }

    Ok(())
}
