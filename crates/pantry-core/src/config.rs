use crate::app_config::{AppConfig, Environment};
use crate::categorize::DEFAULT_FALLBACK;
use crate::taxonomy::slugify;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional_path = |var: &str| -> Option<PathBuf> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    };

    let env = parse_environment(&or_default("PANTRY_ENV", "development"));
    let log_level = or_default("PANTRY_LOG_LEVEL", "info");
    let taxonomy_path = optional_path("PANTRY_TAXONOMY_PATH");
    let rules_path = optional_path("PANTRY_RULES_PATH");

    let fallback_category = or_default("PANTRY_FALLBACK_CATEGORY", DEFAULT_FALLBACK);
    if fallback_category.is_empty() || slugify(&fallback_category) != fallback_category {
        return Err(ConfigError::InvalidEnvVar {
            var: "PANTRY_FALLBACK_CATEGORY".to_string(),
            reason: format!("'{fallback_category}' is not a category slug"),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        taxonomy_path,
        rules_path,
        fallback_category,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
