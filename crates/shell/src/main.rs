use anyhow::Context;

use storefront_inventory::InventoryManager;
use storefront_shell::{Shell, ShellConfig, seed};

fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ShellConfig::from_env();
    let catalog = seed::load(&config).context("failed to build the starting catalog")?;
    tracing::info!(store = %config.store_name, products = catalog.len(), "storefront starting");

    let manager = InventoryManager::new(catalog);
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();

    Shell::new(config.store_name, manager, stdin, stdout)
        .run()
        .context("console session failed")?;

    Ok(())
}
