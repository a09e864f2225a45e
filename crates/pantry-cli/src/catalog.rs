use pantry_core::Category;
use serde::Serialize;

use crate::Catalog;

#[derive(Debug, Serialize)]
struct CategoryView<'a> {
    #[serde(flatten)]
    category: &'a Category,
    breadcrumb: Vec<&'a str>,
    path: String,
    depth: usize,
    descendant_count: usize,
}

fn view<'a>(catalog: &'a Catalog, category: &'a Category) -> CategoryView<'a> {
    let taxonomy = &catalog.taxonomy;
    CategoryView {
        category,
        breadcrumb: taxonomy
            .breadcrumb(&category.id)
            .iter()
            .map(|c| c.name.as_str())
            .collect(),
        path: taxonomy.path_for(category),
        depth: taxonomy.depth(&category.id).unwrap_or_default(),
        descendant_count: taxonomy.descendants(&category.id).len().saturating_sub(1),
    }
}

/// Look a category up by id, then slug, then display name.
pub(crate) fn find<'a>(catalog: &'a Catalog, key: &str) -> Option<&'a Category> {
    let taxonomy = &catalog.taxonomy;
    if let Some(category) = taxonomy.by_id(key) {
        return Some(category);
    }
    if let Some(category) = taxonomy.by_slug(key) {
        if let Some(ids) = taxonomy.slug_collisions().get(key) {
            tracing::warn!(slug = key, ids = ?ids, "slug is ambiguous; showing the first match");
        }
        return Some(category);
    }
    taxonomy.by_name(key)
}

/// Print the whole tree, one category per line, indented by depth.
pub(crate) fn run_tree(catalog: &Catalog) -> anyhow::Result<()> {
    for category in catalog.taxonomy.categories() {
        let depth = catalog.taxonomy.depth(&category.id).unwrap_or_default();
        println!("{}{} ({})", "  ".repeat(depth), category.name, category.id);
    }
    Ok(())
}

pub(crate) fn run_show(catalog: &Catalog, key: &str) -> anyhow::Result<()> {
    let category = find(catalog, key).ok_or_else(|| anyhow::anyhow!("no category matches '{key}'"))?;
    println!("{}", serde_json::to_string_pretty(&view(catalog, category))?);
    Ok(())
}

pub(crate) fn run_resolve(catalog: &Catalog, path: &str) -> anyhow::Result<()> {
    let category = catalog
        .taxonomy
        .resolve_shop_path(path)
        .ok_or_else(|| anyhow::anyhow!("no category at '{path}'"))?;
    println!("{}", serde_json::to_string_pretty(&view(catalog, category))?);
    Ok(())
}

/// Print the category and its descendants in pre-order.
pub(crate) fn run_descendants(catalog: &Catalog, id: &str, names: bool) -> anyhow::Result<()> {
    let taxonomy = &catalog.taxonomy;
    if taxonomy.by_id(id).is_none() {
        anyhow::bail!("no category with id '{id}'; see `pantry tree` for ids");
    }

    let lines = if names {
        taxonomy.descendant_names(id)
    } else {
        taxonomy.descendant_slugs(id)
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
