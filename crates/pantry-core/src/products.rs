use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::{slugify, Category, Taxonomy};

/// Free-text category levels as they arrive on product records, broadest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLevels {
    pub level1: Option<String>,
    pub level2: Option<String>,
    pub level3: Option<String>,
    pub level4: Option<String>,
}

impl CategoryLevels {
    /// Non-blank levels in order, trimmed.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.level1, &self.level2, &self.level3, &self.level4]
            .into_iter()
            .filter_map(|level| level.as_deref())
            .map(str::trim)
            .filter(|level| !level.is_empty())
    }

    /// `true` if any non-blank level equals `category_name`, ignoring case.
    ///
    /// This is a flat check over the four fields; it does not consult the
    /// taxonomy.
    #[must_use]
    pub fn belongs_to(&self, category_name: &str) -> bool {
        let wanted = category_name.trim().to_lowercase();
        !wanted.is_empty() && self.iter().any(|level| level.to_lowercase() == wanted)
    }

    /// The most specific category the levels point at.
    ///
    /// The slugified levels are walked down from the root as a path, longest
    /// resolvable prefix first, so a repeated leaf name lands under the branch
    /// the levels actually name. Only when not even `level1` is a top-level
    /// category does this fall back to the deepest level found by name.
    #[must_use]
    pub fn deepest_known<'t>(&self, taxonomy: &'t Taxonomy) -> Option<&'t Category> {
        let levels: Vec<&str> = self.iter().collect();
        let slugs: Vec<String> = levels.iter().copied().map(slugify).collect();

        (1..=slugs.len())
            .rev()
            .find_map(|len| taxonomy.resolve_path(&slugs[..len]))
            .or_else(|| levels.iter().rev().find_map(|level| taxonomy.by_name(level)))
    }
}

/// See [`CategoryLevels::belongs_to`].
#[must_use]
pub fn product_belongs_to_category(levels: &CategoryLevels, category_name: &str) -> bool {
    levels.belongs_to(category_name)
}

/// A product as held by the storefront: name, optional identifiers, the
/// source's free-text levels and the category it was filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub sku: Option<String>,
    /// Price exactly as supplied, e.g. `"3.49"`.
    pub price: Option<String>,
    #[serde(flatten)]
    pub levels: CategoryLevels,
    pub category_slug: Option<String>,
    /// Id of the category behind `category_slug`. Unlike the slug it is
    /// unique across the tree.
    #[serde(default)]
    pub category_id: Option<String>,
}

/// Products that fall anywhere in the subtree under `category_id`.
///
/// A product with a `category_id` is kept exactly when that id is in the
/// subtree. Without one, it is kept if its assigned slug is one of the
/// subtree's slugs or any of its level fields names a category in the
/// subtree. Unknown ids keep nothing.
#[must_use]
pub fn products_in_category<'a>(
    products: &'a [ProductRecord],
    taxonomy: &Taxonomy,
    category_id: &str,
) -> Vec<&'a ProductRecord> {
    let subtree = taxonomy.descendants(category_id);
    if subtree.is_empty() {
        return Vec::new();
    }

    let ids: HashSet<&str> = subtree.iter().map(|c| c.id.as_str()).collect();
    let slugs: HashSet<&str> = subtree.iter().map(|c| c.slug.as_str()).collect();
    let names: HashSet<String> = subtree.iter().map(|c| c.name.to_lowercase()).collect();

    products
        .iter()
        .filter(|product| match product.category_id.as_deref() {
            Some(id) => ids.contains(id),
            None => {
                product
                    .category_slug
                    .as_deref()
                    .is_some_and(|slug| slugs.contains(slug))
                    || product
                        .levels
                        .iter()
                        .any(|level| names.contains(&level.to_lowercase()))
            }
        })
        .collect()
}
