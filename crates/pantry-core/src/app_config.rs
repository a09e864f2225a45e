use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Alternative category tree; the built-in one is used when unset.
    pub taxonomy_path: Option<PathBuf>,
    /// Alternative keyword rule table; the built-in one is used when unset.
    pub rules_path: Option<PathBuf>,
    /// Slug assigned when no keyword rule matches a product name.
    pub fallback_category: String,
}
