use std::path::Path;

use anyhow::Context;
use pantry_core::{import_products_from_path, products_in_category};

use crate::Catalog;

/// Import a CSV file and print the report as JSON.
///
/// With `category`, the report's products are narrowed to that subtree.
///
/// # Errors
///
/// Returns an error if the file cannot be imported or the category id is unknown.
pub(crate) fn run_import(catalog: &Catalog, path: &Path, category: Option<&str>) -> anyhow::Result<()> {
    let mut report = import_products_from_path(path, &catalog.taxonomy, &catalog.categorizer)
        .with_context(|| format!("failed to import {}", path.display()))?;

    if let Some(id) = category {
        if catalog.taxonomy.by_id(id).is_none() {
            anyhow::bail!("no category with id '{id}'");
        }
        let taxonomy = &catalog.taxonomy;
        report.products.retain(|p| {
            !products_in_category(std::slice::from_ref(&p.product), taxonomy, id).is_empty()
        });
    }

    for (slug, count) in report.counts_by_category() {
        tracing::info!(slug, count, "categorized");
    }
    if !report.skipped.is_empty() {
        tracing::warn!(skipped = report.skipped.len(), "some rows were skipped");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
