//! Category taxonomy: a fixed tree of product categories, flattened once into
//! an immutable collection that answers structural queries.
//!
//! Every query treats absence as the only failure signal: unknown ids, slugs,
//! or names yield `None` or an empty `Vec`, never an error.

mod catalog;
mod load;
mod slug;

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;

pub use catalog::builtin_tree;
pub use load::{load_taxonomy, parse_taxonomy};
pub use slug::slugify;

/// Id of the synthetic root every taxonomy hangs from.
pub const ROOT_ID: &str = "all-products";

/// URL prefix for category pages.
pub const SHOP_PATH: &str = "/shop";

/// Maximum depth below the root the built-in tree reaches.
pub const BUILTIN_MAX_DEPTH: usize = 4;

static BUILTIN: LazyLock<Taxonomy> = LazyLock::new(|| {
    Taxonomy::build(&catalog::builtin_tree()).expect("built-in category tree is valid")
});

/// Input shape for a category tree: a name and its ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub name: String,
    #[serde(default)]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    #[must_use]
    pub fn new(name: impl Into<String>, children: Vec<CategoryNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// A flattened category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Slugs of the name path below the root, joined with `-`.
    pub id: String,
    pub name: String,
    /// Slug of `name` alone. Not unique across the tree.
    pub slug: String,
    /// `None` only for the root.
    pub parent_id: Option<String>,
    /// Ids of the direct children, in tree order.
    pub children: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An immutable, pre-order flattened category tree.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Flattens `root` into a taxonomy.
    ///
    /// The first pass emits records in pre-order and indexes them by id; the
    /// second wires each record into its parent's `children` by id lookup.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::EmptyName`] if a name has no sluggable
    /// characters, or [`TaxonomyError::DuplicateId`] if two name paths
    /// produce the same id.
    pub fn build(root: &CategoryNode) -> Result<Self, TaxonomyError> {
        if slugify(&root.name).is_empty() {
            return Err(TaxonomyError::EmptyName {
                path: root.name.clone(),
            });
        }

        let mut categories = Vec::new();
        let mut index = HashMap::new();

        categories.push(Category {
            id: ROOT_ID.to_string(),
            name: root.name.clone(),
            slug: slugify(&root.name),
            parent_id: None,
            children: Vec::new(),
        });
        index.insert(ROOT_ID.to_string(), 0);

        let mut slug_path = Vec::new();
        let mut name_path = Vec::new();
        for child in &root.children {
            flatten(
                child,
                ROOT_ID,
                &mut slug_path,
                &mut name_path,
                &mut categories,
                &mut index,
            )?;
        }

        for i in 1..categories.len() {
            let Some(parent_idx) = categories[i]
                .parent_id
                .as_deref()
                .and_then(|p| index.get(p).copied())
            else {
                continue;
            };
            let child_id = categories[i].id.clone();
            categories[parent_idx].children.push(child_id);
        }

        tracing::debug!(categories = categories.len(), "built category taxonomy");

        Ok(Self { categories, index })
    }

    /// All categories in pre-order, root first.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn root(&self) -> &Category {
        &self.categories[0]
    }

    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<&Category> {
        self.index.get(id).map(|&i| &self.categories[i])
    }

    /// First category in pre-order whose slug is `slug`.
    ///
    /// Leaf names repeat under different parents, so this is ambiguous for
    /// some slugs; prefer [`Taxonomy::resolve_path`] for routing.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Case-insensitive exact match on the display name.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&Category> {
        let wanted = name.to_lowercase();
        self.categories
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
    }

    /// Top-level navigation: the direct children of the root.
    #[must_use]
    pub fn root_categories(&self) -> Vec<&Category> {
        self.categories
            .iter()
            .filter(|c| c.parent_id.as_deref() == Some(ROOT_ID))
            .collect()
    }

    #[must_use]
    pub fn children(&self, id: &str) -> Vec<&Category> {
        self.by_id(id)
            .map(|c| c.children.iter().filter_map(|cid| self.by_id(cid)).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn parent(&self, id: &str) -> Option<&Category> {
        self.by_id(id)
            .and_then(|c| c.parent_id.as_deref())
            .and_then(|p| self.by_id(p))
    }

    /// Number of edges between the root and `id`; the root is depth 0.
    #[must_use]
    pub fn depth(&self, id: &str) -> Option<usize> {
        self.by_id(id)?;
        Some(self.ancestors(id).len())
    }

    /// The category and everything below it, in pre-order.
    #[must_use]
    pub fn descendants(&self, id: &str) -> Vec<&Category> {
        let Some(start) = self.by_id(id) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut stack = vec![start];
        while let Some(category) = stack.pop() {
            out.push(category);
            stack.extend(
                category
                    .children
                    .iter()
                    .rev()
                    .filter_map(|cid| self.by_id(cid)),
            );
        }
        out
    }

    /// Slugs of the category and all of its descendants, in pre-order.
    #[must_use]
    pub fn descendant_slugs(&self, id: &str) -> Vec<&str> {
        self.descendants(id)
            .into_iter()
            .map(|c| c.slug.as_str())
            .collect()
    }

    /// Names of the category and all of its descendants, in pre-order.
    #[must_use]
    pub fn descendant_names(&self, id: &str) -> Vec<&str> {
        self.descendants(id)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect()
    }

    /// Chain from the top-level ancestor down to `id` itself, root excluded.
    #[must_use]
    pub fn breadcrumb(&self, id: &str) -> Vec<&Category> {
        let Some(category) = self.by_id(id) else {
            return Vec::new();
        };
        if category.is_root() {
            return Vec::new();
        }

        let mut chain: Vec<&Category> = self
            .ancestors(id)
            .into_iter()
            .filter(|c| !c.is_root())
            .collect();
        chain.reverse();
        chain.push(category);
        chain
    }

    /// Storefront URL for a category, e.g. `/shop/fresh-and-chilled/dairy`.
    #[must_use]
    pub fn path_for(&self, category: &Category) -> String {
        let mut path = String::from(SHOP_PATH);
        for crumb in self.breadcrumb(&category.id) {
            path.push('/');
            path.push_str(&crumb.slug);
        }
        path
    }

    /// Walks down from the root matching one slug per level.
    ///
    /// Unlike [`Taxonomy::by_slug`], this is unambiguous for repeated leaf
    /// names. An empty segment list resolves to the root.
    #[must_use]
    pub fn resolve_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Category> {
        let mut current = self.root();
        for segment in segments {
            let segment = segment.as_ref();
            current = current
                .children
                .iter()
                .filter_map(|cid| self.by_id(cid))
                .find(|c| c.slug == segment)?;
        }
        Some(current)
    }

    /// Resolves a storefront URL path such as `/shop/meat-and-fish/deli/greek`.
    #[must_use]
    pub fn resolve_shop_path(&self, path: &str) -> Option<&Category> {
        let rest = path.trim().strip_prefix(SHOP_PATH)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        self.resolve_path(&segments)
    }

    /// Slugs carried by more than one category, with the ids sharing each.
    #[must_use]
    pub fn slug_collisions(&self) -> BTreeMap<&str, Vec<&str>> {
        let mut by_slug: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for category in &self.categories {
            by_slug
                .entry(category.slug.as_str())
                .or_default()
                .push(category.id.as_str());
        }
        by_slug.retain(|_, ids| ids.len() > 1);
        by_slug
    }

    /// Parent chain of `id`, nearest first, root last.
    fn ancestors(&self, id: &str) -> Vec<&Category> {
        let mut out = Vec::new();
        let mut current = self.by_id(id);
        while let Some(parent) = current
            .and_then(|c| c.parent_id.as_deref())
            .and_then(|p| self.by_id(p))
        {
            // A chain can never be longer than the collection.
            if out.len() >= self.categories.len() {
                break;
            }
            out.push(parent);
            current = Some(parent);
        }
        out
    }
}

fn flatten(
    node: &CategoryNode,
    parent_id: &str,
    slug_path: &mut Vec<String>,
    name_path: &mut Vec<String>,
    categories: &mut Vec<Category>,
    index: &mut HashMap<String, usize>,
) -> Result<(), TaxonomyError> {
    let slug = slugify(&node.name);
    name_path.push(node.name.clone());
    if slug.is_empty() {
        return Err(TaxonomyError::EmptyName {
            path: name_path.join(" > "),
        });
    }

    slug_path.push(slug.clone());
    let id = slug::join_id(slug_path.as_slice());

    if index.contains_key(&id) {
        return Err(TaxonomyError::DuplicateId {
            id,
            path: name_path.join(" > "),
        });
    }
    index.insert(id.clone(), categories.len());
    categories.push(Category {
        id: id.clone(),
        name: node.name.clone(),
        slug,
        parent_id: Some(parent_id.to_string()),
        children: Vec::new(),
    });

    for child in &node.children {
        flatten(child, &id, slug_path, name_path, categories, index)?;
    }

    slug_path.pop();
    name_path.pop();
    Ok(())
}

/// The process-wide built-in taxonomy.
#[must_use]
pub fn taxonomy() -> &'static Taxonomy {
    &BUILTIN
}

#[must_use]
pub fn get_category_by_slug(slug: &str) -> Option<&'static Category> {
    taxonomy().by_slug(slug)
}

#[must_use]
pub fn get_category_by_id(id: &str) -> Option<&'static Category> {
    taxonomy().by_id(id)
}

#[must_use]
pub fn get_category_by_name(name: &str) -> Option<&'static Category> {
    taxonomy().by_name(name)
}

#[must_use]
pub fn get_root_categories() -> Vec<&'static Category> {
    taxonomy().root_categories()
}

#[must_use]
pub fn get_all_descendant_slugs(id: &str) -> Vec<&'static str> {
    taxonomy().descendant_slugs(id)
}

#[must_use]
pub fn get_all_descendant_names(id: &str) -> Vec<&'static str> {
    taxonomy().descendant_names(id)
}

#[must_use]
pub fn get_category_breadcrumb(id: &str) -> Vec<&'static Category> {
    taxonomy().breadcrumb(id)
}

#[must_use]
pub fn build_category_path(category: &Category) -> String {
    taxonomy().path_for(category)
}

#[cfg(test)]
#[path = "taxonomy_test.rs"]
mod tests;
