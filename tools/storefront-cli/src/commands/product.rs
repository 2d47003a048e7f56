//! Product page command.

use anyhow::{bail, Result};

use super::{load, ProductArgs};
use crate::context::Context;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let related_limit = args.related.unwrap_or(ctx.config.display.related_limit);
    let detail = load(
        ctx,
        "Chargement du produit...",
        ctx.service.product_detail(&args.slug, related_limit),
    )
    .await?;

    let Some(detail) = detail else {
        bail!("Produit '{}' introuvable", args.slug);
    };

    if ctx.output.is_json() {
        ctx.output.json(&detail);
        return Ok(());
    }

    let product = &detail.product;
    ctx.output.header(&product.name);
    ctx.output.kv("Slug", &product.slug);
    if let Some(short) = &product.short_description {
        ctx.output.kv("Résumé", short);
    }
    if let Some(description) = &product.description {
        ctx.output.kv("Description", description);
    }

    let alt = product
        .cover_image()
        .map_or(product.name.as_str(), |img| img.alt_or(&product.name));
    ctx.output.kv("Image", &format!("{} ({})", product.cover_url(), alt));

    let categories: Vec<&str> = product.category_ids.iter().map(|id| id.as_str()).collect();
    ctx.output.kv("Catégories", &categories.join(", "));
    if !product.tags().is_empty() {
        ctx.output.kv("Tags", &product.tags().join(", "));
    }
    if !product.is_visible {
        ctx.output.warn("Ce produit est masqué du catalogue public.");
    }

    if let Some(specs) = product.specs.as_ref().filter(|s| !s.is_empty()) {
        ctx.output.header("Caractéristiques");
        for (name, value) in specs.iter() {
            ctx.output.kv(name, &value.to_string());
        }
    }

    if !detail.related.is_empty() {
        ctx.output.header("Produits similaires");
        ctx.output.product_table(&detail.related);
    }

    Ok(())
}
