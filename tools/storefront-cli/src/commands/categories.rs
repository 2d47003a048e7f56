//! Category list command.

use anyhow::Result;

use super::load;
use crate::context::Context;
use crate::output::count_label;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let categories = load(ctx, "Chargement des catégories...", ctx.service.list_categories()).await?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Catégories");
    ctx.output.category_table(&categories);
    ctx.output.info(&count_label(categories.len(), "catégorie", "catégories"));

    Ok(())
}
