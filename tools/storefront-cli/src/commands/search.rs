//! Search command.

use anyhow::Result;

use super::{load, SearchArgs};
use crate::context::Context;
use crate::output::count_label;

/// Run the search command.
pub async fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let results = load(ctx, "Recherche...", ctx.service.search_products(&args.query)).await?;

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!("Résultats pour \"{}\"", args.query));
    ctx.output.product_table(&results);
    ctx.output.info(&format!(
        "{} pour \"{}\"",
        count_label(results.len(), "résultat", "résultats"),
        args.query
    ));

    Ok(())
}
