use anyhow::Result;
use owo_colors::OwoColorize;
use tdw_core::plan_weeks;
use tdw_core::setup::format_de;

use super::Context;

const WEEKDAYS: [&str; 5] = ["Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag"];

pub fn run(ctx: &Context) -> Result<()> {
    let record = ctx.require_setup()?.to_record();
    let weeks = plan_weeks(&record, &ctx.catalog);

    if weeks.is_empty() {
        println!("Noch kein Plan: Startdatum oder Themenauswahl fehlt.");
        println!("Themen wählen mit: tdw select <id>...");
        return Ok(());
    }

    for (i, week) in weeks.iter().enumerate() {
        println!(
            "{}  {}",
            format!("Woche {}", week.index + 1).bold(),
            week.range_label().dimmed()
        );
        println!("{}", week.theme.display_title().bold());
        println!("„{}“", week.theme.quote.italic());

        for (offset, weekday) in WEEKDAYS.iter().enumerate() {
            println!(
                "  {:<10} {}  {}",
                weekday,
                format_de(week.day(offset)).dimmed(),
                week.theme.question(offset)
            );
        }

        if i < weeks.len() - 1 {
            println!();
        }
    }

    Ok(())
}
