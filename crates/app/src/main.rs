use tracing::info;

use stockroom_app::{AppConfig, sample};
use stockroom_inventory::Inventory;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    stockroom_observability::init(config.log_format);

    let mut inventory = Inventory::new();
    if config.sample_data {
        let loaded = sample::seed(&mut inventory)?;
        info!(products = loaded, "sample data loaded");
    }

    info!(
        products = inventory.product_count(),
        categories = inventory.list_categories().len(),
        stock_value = inventory.total_stock_value(),
        "inventory ready"
    );

    println!("{}", serde_json::to_string_pretty(&inventory.snapshot())?);
    Ok(())
}
