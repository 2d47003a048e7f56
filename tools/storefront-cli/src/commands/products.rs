//! Product listing command.

use anyhow::Result;

use super::{load, ProductsArgs};
use crate::context::Context;
use crate::output::count_label;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let filters = args.to_filters();
    ctx.output.debug(&format!("Filters: {:?}", filters));

    let listing = load(ctx, "Chargement des produits...", ctx.service.browse_products(&filters)).await?;

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    ctx.output.header("Produits");
    ctx.output.product_table(&listing.products);

    match &listing.pagination {
        Some(pagination) if pagination.is_out_of_range() => {
            ctx.output.warn(&format!(
                "Page {} au-delà de la dernière page ({})",
                pagination.page, pagination.total_pages
            ));
        }
        Some(pagination) => ctx.output.pagination(pagination),
        None => ctx
            .output
            .info(&count_label(listing.products.len(), "produit", "produits")),
    }

    Ok(())
}
