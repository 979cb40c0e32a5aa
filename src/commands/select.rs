use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use tdw_core::pick::pick_random;
use tdw_core::setup::validate_selection;

use super::Context;
use crate::store::SelectionMode;

pub fn run(ctx: &Context, ids: Vec<String>, random: bool) -> Result<()> {
    let mut setup = ctx.require_setup()?;
    let record = setup.to_record();
    record.validate()?;

    let ids = if random {
        pick_random(&ctx.catalog, record.weeks_count, ctx.mode, &mut rand::thread_rng())
    } else {
        ids
    };

    if let Some(unknown) = ids.iter().find(|id| !ctx.catalog.contains(id)) {
        anyhow::bail!("Unbekanntes Thema: {unknown}\nAlle Themen anzeigen: tdw themes");
    }
    if let Some(locked) = ids.iter().find(|id| !ctx.mode.allows_theme(id)) {
        anyhow::bail!("Das Thema {locked} ist nur in der Vollversion enthalten.");
    }
    validate_selection(record.weeks_count, &ids)?;

    setup.theme_ids = Some(ids.clone());
    setup.mode = Some(if random {
        SelectionMode::Random
    } else {
        SelectionMode::Manual
    });
    setup.created_at = Some(Utc::now());
    ctx.store.save_setup(&setup)?;

    ctx.store.mark_used(&ids)?;

    println!("{}", "Auswahl gespeichert:".bold());
    for (week, theme) in ctx.catalog.resolve_ids(&ids).iter().enumerate() {
        println!("  Woche {}: {}", week + 1, theme.display_title());
    }

    Ok(())
}
