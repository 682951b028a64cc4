//! Initial catalog contents.

use std::path::Path;

use storefront_catalog::{Catalog, ProductRecord};
use storefront_core::{ProductId, StoreResult};

use crate::config::ShellConfig;
use crate::error::{ShellError, ShellResult};

const DEFAULT_PRODUCTS: &[(u32, &str, u64)] = &[
    (1, "Compass", 5),
    (2, "Rope", 10),
    (3, "Lantern", 7),
    (4, "Canteen", 12),
    (5, "Trail Map", 3),
];

/// The built-in adventure store stock.
pub fn default_catalog() -> StoreResult<Catalog> {
    let records = DEFAULT_PRODUCTS
        .iter()
        .map(|&(id, name, qty)| ProductRecord::new(ProductId::new(id)?, name, qty))
        .collect::<StoreResult<Vec<_>>>()?;
    Catalog::from_records(records)
}

/// Parse a JSON array of `{ "id", "name", "quantity" }` objects.
pub fn parse_seed(json: &str) -> ShellResult<Catalog> {
    let records: Vec<ProductRecord> =
        serde_json::from_str(json).map_err(|e| ShellError::Seed(e.to_string()))?;
    Ok(Catalog::from_records(records)?)
}

pub fn load_seed_file(path: &Path) -> ShellResult<Catalog> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ShellError::Seed(format!("{}: {e}", path.display())))?;
    parse_seed(&json)
}

/// Catalog for this run: the configured seed file, or the built-in stock.
pub fn load(config: &ShellConfig) -> ShellResult<Catalog> {
    match &config.seed_path {
        Some(path) => {
            let catalog = load_seed_file(path)?;
            tracing::info!(path = %path.display(), products = catalog.len(), "loaded seed file");
            Ok(catalog)
        }
        None => Ok(default_catalog()?),
    }
}
