//! Home page command.

use anyhow::Result;
use storefront_catalog::Category;

use super::{load, HomeArgs};
use crate::context::Context;
use crate::output::count_label;

/// Run the home command.
pub async fn run(args: HomeArgs, ctx: &Context) -> Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.display.home_limit);
    let home = load(ctx, "Chargement de l'accueil...", ctx.service.home_page(limit)).await?;

    if ctx.output.is_json() {
        ctx.output.json(&home);
        return Ok(());
    }

    ctx.output.header("Catégories");
    for category in &home.categories {
        ctx.output.list_item(&category_label(category));
    }

    ctx.output.header("Produits vedettes");
    ctx.output.product_table(&home.featured);

    ctx.output.header("Nouveautés");
    ctx.output.product_table(&home.new_arrivals);

    ctx.output.info(&format!(
        "{}, {} en vedette, {}",
        count_label(home.categories.len(), "catégorie", "catégories"),
        home.featured.len(),
        count_label(home.new_arrivals.len(), "nouveauté", "nouveautés"),
    ));

    Ok(())
}

/// Subcategories are indented under their parents.
fn category_label(category: &Category) -> String {
    let indent = if category.is_root() { "" } else { "  " };
    format!("{}{} ({})", indent, category.name, category.slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label_indents_children() {
        let root = Category::new("cat-eclairage", "Éclairage", "eclairage");
        let child = Category::new("cat-led", "LED", "led").with_parent("cat-eclairage");

        assert_eq!(category_label(&root), "Éclairage (eclairage)");
        assert_eq!(category_label(&child), "  LED (led)");
    }
}
