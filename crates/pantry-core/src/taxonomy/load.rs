use std::path::Path;

use super::{CategoryNode, Taxonomy};
use crate::ConfigError;

/// Load a category tree from a YAML file and flatten it.
///
/// The file holds a single root node: `name` plus nested `children`.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or flattened.
pub fn load_taxonomy(path: &Path) -> Result<Taxonomy, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let taxonomy = parse_taxonomy(&content).map_err(|e| match e {
        ConfigError::FileParse { source, .. } => ConfigError::FileParse {
            path: path.display().to_string(),
            source,
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        categories = taxonomy.len(),
        "loaded taxonomy file"
    );
    Ok(taxonomy)
}

/// Parse and flatten a YAML category tree held in memory.
///
/// # Errors
///
/// Returns `ConfigError::FileParse` for malformed YAML and
/// `ConfigError::Taxonomy` for structural problems.
pub fn parse_taxonomy(yaml: &str) -> Result<Taxonomy, ConfigError> {
    let tree: CategoryNode = serde_yaml::from_str(yaml).map_err(|e| ConfigError::FileParse {
        path: "<inline>".to_string(),
        source: e,
    })?;

    let taxonomy = Taxonomy::build(&tree)?;

    for (slug, ids) in taxonomy.slug_collisions() {
        tracing::warn!(slug, ids = ?ids, "slug shared by several categories");
    }

    Ok(taxonomy)
}
