//! CSV product import: reads supplier rows and files each product under a
//! category slug.
//!
//! Only `name` is required. Recognised columns are matched case-insensitively:
//! `name`, `sku`, `price`, `level1` .. `level4`. Anything else is ignored.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::categorize::Categorizer;
use crate::error::ImportError;
use crate::products::{CategoryLevels, ProductRecord};
use crate::taxonomy::Taxonomy;

/// How an imported product got its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySource {
    /// A level column named a taxonomy category.
    Levels,
    /// A keyword rule matched the product name.
    Keyword,
    /// Nothing matched; the categorizer's fallback was used.
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportedProduct {
    /// 1-based line in the source file, header included.
    pub line: u64,
    pub product: ProductRecord,
    pub category_source: CategorySource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub imported_at: DateTime<Utc>,
    pub products: Vec<ImportedProduct>,
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Count of products per assigned slug, in first-seen order.
    #[must_use]
    pub fn counts_by_category(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for imported in &self.products {
            let slug = imported.product.category_slug.as_deref().unwrap_or_default();
            match counts.iter_mut().find(|(s, _)| *s == slug) {
                Some((_, n)) => *n += 1,
                None => counts.push((slug, 1)),
            }
        }
        counts
    }
}

struct Columns {
    name: usize,
    sku: Option<usize>,
    price: Option<usize>,
    levels: [Option<usize>; 4],
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ImportError> {
        let find = |wanted: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
        };

        Ok(Self {
            name: find("name").ok_or_else(|| ImportError::MissingColumn("name".to_string()))?,
            sku: find("sku"),
            price: find("price"),
            levels: [find("level1"), find("level2"), find("level3"), find("level4")],
        })
    }
}

fn field(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Read products from CSV and assign each a category slug.
///
/// The level columns, resolved as a path through the taxonomy, win; failing
/// that the categorizer runs on the product name. Keyword and fallback slugs
/// get the id of their first category with that slug. Rows without a name are skipped
/// and reported.
///
/// # Errors
///
/// Returns [`ImportError::MissingColumn`] if there is no `name` column, and
/// [`ImportError::Csv`] on malformed CSV.
pub fn import_products<R: Read>(
    reader: R,
    taxonomy: &Taxonomy,
    categorizer: &Categorizer,
) -> Result<ImportReport, ImportError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = reader.headers()?.clone();
    let columns = Columns::from_headers(&headers)?;

    let mut products = Vec::new();
    let mut skipped = Vec::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);

        let Some(name) = field(&row, Some(columns.name)) else {
            tracing::warn!(line, "skipping row without a product name");
            skipped.push(SkippedRow {
                line,
                reason: "missing product name".to_string(),
            });
            continue;
        };

        let levels = CategoryLevels {
            level1: field(&row, columns.levels[0]),
            level2: field(&row, columns.levels[1]),
            level3: field(&row, columns.levels[2]),
            level4: field(&row, columns.levels[3]),
        };

        let (slug, category_id, category_source) = match levels.deepest_known(taxonomy) {
            Some(category) => (
                category.slug.clone(),
                Some(category.id.clone()),
                CategorySource::Levels,
            ),
            None => {
                let (slug, source) = match categorizer.matching_rule(&name) {
                    Some((_, rule, _)) => (rule.slug.clone(), CategorySource::Keyword),
                    None => (categorizer.fallback().to_string(), CategorySource::Fallback),
                };
                let id = taxonomy.by_slug(&slug).map(|c| c.id.clone());
                (slug, id, source)
            }
        };

        products.push(ImportedProduct {
            line,
            product: ProductRecord {
                name,
                sku: field(&row, columns.sku),
                price: field(&row, columns.price),
                levels,
                category_slug: Some(slug),
                category_id,
            },
            category_source,
        });
    }

    tracing::debug!(
        imported = products.len(),
        skipped = skipped.len(),
        "product import finished"
    );

    Ok(ImportReport {
        imported_at: Utc::now(),
        products,
        skipped,
    })
}

/// [`import_products`] over a file on disk.
///
/// # Errors
///
/// Returns [`ImportError::Io`] if the file cannot be opened, otherwise as
/// [`import_products`].
pub fn import_products_from_path(
    path: &Path,
    taxonomy: &Taxonomy,
    categorizer: &Categorizer,
) -> Result<ImportReport, ImportError> {
    let file = std::fs::File::open(path).map_err(|e| ImportError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    import_products(file, taxonomy, categorizer)
}
