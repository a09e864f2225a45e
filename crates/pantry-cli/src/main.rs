mod catalog;
mod import;
mod rules;

use std::borrow::Cow;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pantry_core::{AppConfig, Categorizer, Environment, Taxonomy};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "pantry")]
#[command(about = "Wholefood catalog taxonomy tools")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the category tree
    Tree,
    /// Show a category, its breadcrumb and storefront path
    Show {
        /// Category id, slug, or display name
        key: String,
    },
    /// Resolve a storefront path such as `/shop/fresh-and-chilled/dairy`
    Resolve { path: String },
    /// List a category and everything below it
    Descendants {
        id: String,
        /// Print names instead of slugs
        #[arg(long)]
        names: bool,
    },
    /// Categorize product names with the keyword rules
    Categorize {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Check the keyword rules for shadowed keywords and unknown slugs
    Rules,
    /// Import products from CSV and print the report as JSON
    Import {
        path: PathBuf,
        /// Only report products under this category id
        #[arg(long)]
        category: Option<String>,
    },
}

/// Taxonomy and categorizer selected by configuration.
pub(crate) struct Catalog {
    pub(crate) taxonomy: Cow<'static, Taxonomy>,
    pub(crate) categorizer: Categorizer,
}

impl Catalog {
    fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let taxonomy = match &config.taxonomy_path {
            Some(path) => Cow::Owned(
                pantry_core::load_taxonomy(path)
                    .with_context(|| format!("failed to load taxonomy from {}", path.display()))?,
            ),
            None => Cow::Borrowed(pantry_core::taxonomy()),
        };

        let categorizer = match &config.rules_path {
            Some(path) => pantry_core::load_rules(path, &config.fallback_category)
                .with_context(|| format!("failed to load rules from {}", path.display()))?,
            None => Categorizer::builtin_with_fallback(config.fallback_category.clone()),
        };

        tracing::debug!(
            categories = taxonomy.len(),
            rules = categorizer.rules().len(),
            "catalog ready"
        );
        Ok(Self {
            taxonomy,
            categorizer,
        })
    }
}

/// Colored log output everywhere except production, where logs go to files
/// and collectors.
fn ansi_logs(config: &AppConfig) -> bool {
    config.env != Environment::Production
}

fn main() -> anyhow::Result<()> {
    let config = pantry_core::load_app_config().context("invalid configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi_logs(&config))
        .init();
    tracing::debug!(env = %config.env, "configuration loaded");

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("pantry: run with --help to list commands");
        return Ok(());
    };

    let catalog = Catalog::from_config(&config)?;
    match command {
        Commands::Tree => catalog::run_tree(&catalog),
        Commands::Show { key } => catalog::run_show(&catalog, &key),
        Commands::Resolve { path } => catalog::run_resolve(&catalog, &path),
        Commands::Descendants { id, names } => catalog::run_descendants(&catalog, &id, names),
        Commands::Categorize { names } => {
            rules::run_categorize(&catalog, &names);
            Ok(())
        }
        Commands::Rules => rules::run_rules_check(&catalog),
        Commands::Import { path, category } => {
            import::run_import(&catalog, &path, category.as_deref())
        }
    }
}
