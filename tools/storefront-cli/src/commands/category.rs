//! Category page command.

use anyhow::{bail, Result};

use super::{load, CategoryArgs};
use crate::context::Context;
use crate::output::count_label;

/// Run the category command.
pub async fn run(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let listing = load(ctx, "Chargement de la catégorie...", ctx.service.category_listing(&args.slug)).await?;

    let Some(listing) = listing else {
        bail!("Catégorie '{}' introuvable", args.slug);
    };

    if ctx.output.is_json() {
        ctx.output.json(&listing);
        return Ok(());
    }

    let category = &listing.category;
    ctx.output.header(&category.name);
    if let Some(description) = &category.description {
        ctx.output.kv("Description", description);
    }
    if let Some(parent) = &category.parent_id {
        ctx.output.kv("Parent", parent.as_str());
    }
    ctx.output.kv(
        "Produits",
        &count_label(listing.products.len(), "produit", "produits"),
    );

    println!();
    ctx.output.product_table(&listing.products);

    Ok(())
}
