pub mod app_config;
pub mod categorize;
pub mod config;
pub mod error;
pub mod import;
pub mod products;
pub mod taxonomy;

pub use app_config::{AppConfig, Environment};
pub use categorize::{categorize_product, load_rules, CategoryRule, Categorizer, ShadowedKeyword};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{CategorizeError, ConfigError, ImportError, TaxonomyError};
pub use import::{import_products, import_products_from_path, ImportReport, ImportedProduct, SkippedRow};
pub use products::{product_belongs_to_category, products_in_category, CategoryLevels, ProductRecord};
pub use taxonomy::{
    build_category_path, get_all_descendant_names, get_all_descendant_slugs,
    get_category_breadcrumb, get_category_by_id, get_category_by_name, get_category_by_slug,
    get_root_categories, load_taxonomy, taxonomy, Category, CategoryNode, Taxonomy, ROOT_ID,
};
