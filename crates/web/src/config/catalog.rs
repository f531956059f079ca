//! Catalog Config

use std::path::PathBuf;

use clap::Args;

/// Catalog source settings.
#[derive(Debug, Args)]
pub struct CatalogConfig {
    /// YAML catalog file; the bundled catalog is used when unset
    #[arg(long, env = "CATALOG_PATH")]
    pub catalog_path: Option<PathBuf>,
}
