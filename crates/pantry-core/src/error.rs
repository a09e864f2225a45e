use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    FileParse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("taxonomy file is invalid: {0}")]
    Taxonomy(#[from] TaxonomyError),

    #[error("rule file is invalid: {0}")]
    Rules(#[from] CategorizeError),
}

/// Structural problems found while flattening a category tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("category at path '{path}' has an empty name")]
    EmptyName { path: String },

    #[error("duplicate category id '{id}' (from path '{path}')")]
    DuplicateId { id: String, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategorizeError {
    #[error("rule table is empty")]
    NoRules,

    #[error("rule '{slug}' has an empty slug or keyword")]
    EmptyKeyword { slug: String },

    #[error(
        "keyword '{keyword}' of rule '{slug}' (position {position}) shadows '{shadowed_keyword}' \
         of later rule '{shadowed_slug}' (position {shadowed_position})"
    )]
    Shadowed {
        slug: String,
        keyword: String,
        position: usize,
        shadowed_slug: String,
        shadowed_keyword: String,
        shadowed_position: usize,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is missing required column '{0}'")]
    MissingColumn(String),
}
