use anyhow::Result;
use owo_colors::OwoColorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<()> {
    let selected = ctx
        .store
        .load_setup()?
        .and_then(|setup| setup.theme_ids)
        .unwrap_or_default();
    let used = ctx.store.load_used()?;

    println!("{}", "Themen (Edition 1)".bold());

    for theme in ctx.catalog.sorted_by_title() {
        let marker = if selected.contains(&theme.id) { "✓" } else { " " };
        let mut line = format!(" {marker} {}  {}", theme.display_title(), theme.id.dimmed());

        if used.contains(&theme.id) {
            line.push_str(&format!("  {}", "(bereits genutzt)".yellow()));
        }
        if !ctx.mode.allows_theme(&theme.id) {
            line.push_str(&format!("  {}", "(nur Vollversion)".red()));
        }

        println!("{line}");
    }

    if !selected.is_empty() {
        println!();
        println!("{} ausgewählt", selected.len());
    }

    Ok(())
}
