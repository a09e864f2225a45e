//! Keyword categorizer: assigns a product name to a category slug by scanning
//! an ordered rule table, first match wins.
//!
//! Order is the whole algorithm. A broad keyword placed above a narrower one
//! swallows every name the narrower rule was meant for, so tables are checked
//! with [`Categorizer::shadowed_keywords`] before use.

mod rules;

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::CategorizeError;
use crate::taxonomy::Taxonomy;
use crate::ConfigError;

/// Slug assigned when nothing in the table matches.
pub const DEFAULT_FALLBACK: &str = "food-cupboard";

static BUILTIN: LazyLock<Categorizer> = LazyLock::new(|| {
    let rules = rules::BUILTIN_RULES
        .iter()
        .map(|(slug, keywords)| CategoryRule::new(*slug, keywords.iter().copied()))
        .collect();
    Categorizer::new(rules, DEFAULT_FALLBACK)
});

/// One row of the table: a target slug and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    pub slug: String,
    pub keywords: Vec<String>,
}

impl CategoryRule {
    #[must_use]
    pub fn new<I, S>(slug: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slug: slug.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// An earlier keyword that is a substring of a later one, making the later
/// keyword unreachable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowedKeyword {
    pub slug: String,
    pub keyword: String,
    pub position: usize,
    pub shadowed_slug: String,
    pub shadowed_keyword: String,
    pub shadowed_position: usize,
}

impl From<ShadowedKeyword> for CategorizeError {
    fn from(s: ShadowedKeyword) -> Self {
        CategorizeError::Shadowed {
            slug: s.slug,
            keyword: s.keyword,
            position: s.position,
            shadowed_slug: s.shadowed_slug,
            shadowed_keyword: s.shadowed_keyword,
            shadowed_position: s.shadowed_position,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Categorizer {
    rules: Vec<CategoryRule>,
    fallback: String,
}

impl Categorizer {
    /// Builds a categorizer; keywords are trimmed and lowercased.
    #[must_use]
    pub fn new(rules: Vec<CategoryRule>, fallback: impl Into<String>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CategoryRule {
                slug: rule.slug.trim().to_string(),
                keywords: rule
                    .keywords
                    .iter()
                    .map(|k| k.trim().to_lowercase())
                    .collect(),
            })
            .collect();
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The built-in table with a different fallback slug.
    #[must_use]
    pub fn builtin_with_fallback(fallback: impl Into<String>) -> Self {
        Self {
            rules: BUILTIN.rules.clone(),
            fallback: fallback.into(),
        }
    }

    #[must_use]
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Slug of the first rule with a keyword contained in `name`
    /// (case-insensitive), or the fallback.
    #[must_use]
    pub fn categorize(&self, name: &str) -> &str {
        self.matching_rule(name)
            .map_or(self.fallback.as_str(), |(_, rule, _)| rule.slug.as_str())
    }

    /// The winning rule's position, the rule, and the keyword that matched.
    #[must_use]
    pub fn matching_rule(&self, name: &str) -> Option<(usize, &CategoryRule, &str)> {
        let lower = name.to_lowercase();
        self.rules.iter().enumerate().find_map(|(position, rule)| {
            rule.keywords
                .iter()
                .find(|k| !k.is_empty() && lower.contains(k.as_str()))
                .map(|k| (position, rule, k.as_str()))
        })
    }

    /// Every keyword made unreachable by a keyword of an earlier rule.
    #[must_use]
    pub fn shadowed_keywords(&self) -> Vec<ShadowedKeyword> {
        let mut out = Vec::new();
        for (position, rule) in self.rules.iter().enumerate() {
            for (later_position, later) in self.rules.iter().enumerate().skip(position + 1) {
                for keyword in rule.keywords.iter().filter(|k| !k.is_empty()) {
                    for later_keyword in &later.keywords {
                        if later_keyword.contains(keyword.as_str()) {
                            out.push(ShadowedKeyword {
                                slug: rule.slug.clone(),
                                keyword: keyword.clone(),
                                position,
                                shadowed_slug: later.slug.clone(),
                                shadowed_keyword: later_keyword.clone(),
                                shadowed_position: later_position,
                            });
                        }
                    }
                }
            }
        }
        out
    }

    /// Checks the table is non-empty, has no blank entries, and respects the
    /// specific-before-generic ordering.
    ///
    /// # Errors
    ///
    /// Returns the first [`CategorizeError`] found.
    pub fn validate(&self) -> Result<(), CategorizeError> {
        if self.rules.is_empty() {
            return Err(CategorizeError::NoRules);
        }

        for rule in &self.rules {
            if rule.slug.is_empty()
                || rule.keywords.is_empty()
                || rule.keywords.iter().any(String::is_empty)
            {
                return Err(CategorizeError::EmptyKeyword {
                    slug: rule.slug.clone(),
                });
            }
        }

        match self.shadowed_keywords().into_iter().next() {
            Some(shadowed) => Err(shadowed.into()),
            None => Ok(()),
        }
    }

    /// Rule slugs (and the fallback) that name no category in `taxonomy`,
    /// each once, in table order.
    #[must_use]
    pub fn unknown_slugs(&self, taxonomy: &Taxonomy) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.rules
            .iter()
            .map(|r| r.slug.as_str())
            .chain(std::iter::once(self.fallback.as_str()))
            .filter(|slug| taxonomy.by_slug(slug).is_none())
            .filter(|slug| seen.insert(*slug))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct RulesFile {
    pub rules: Vec<CategoryRule>,
}

/// The process-wide built-in categorizer.
#[must_use]
pub fn builtin() -> &'static Categorizer {
    &BUILTIN
}

/// Categorize a product name with the built-in table.
#[must_use]
pub fn categorize_product(name: &str) -> &'static str {
    BUILTIN.categorize(name)
}

/// Load and validate a keyword rule table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_rules(path: &Path, fallback: &str) -> Result<Categorizer, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let rules_file: RulesFile =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    let categorizer = Categorizer::new(rules_file.rules, fallback);
    categorizer.validate()?;

    tracing::debug!(
        path = %path.display(),
        rules = categorizer.rules().len(),
        "loaded categorizer rules"
    );
    Ok(categorizer)
}

#[cfg(test)]
#[path = "categorize_test.rs"]
mod tests;
