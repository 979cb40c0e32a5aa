use anyhow::Result;

use super::Context;

pub fn run(ctx: &Context, clear: bool) -> Result<()> {
    if clear {
        ctx.store.save_used(&[])?;
        println!("Liste der genutzten Themen geleert.");
        return Ok(());
    }

    let used = ctx.store.load_used()?;
    if used.is_empty() {
        println!("Noch keine Themen genutzt.");
        return Ok(());
    }

    for id in &used {
        let title = ctx
            .catalog
            .get(id)
            .map(|theme| theme.display_title())
            .unwrap_or_else(|| tdw_core::theme::prettify_id(id));
        println!("  {title}");
    }

    Ok(())
}
