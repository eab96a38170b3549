//! Demonstration catalog loaded on startup.

use stockroom_core::{DomainResult, ProductId};
use stockroom_inventory::Inventory;
use stockroom_products::{BaseDetails, LaptopSpecs, Product, SmartphoneSpecs};

pub fn sample_products() -> DomainResult<Vec<Product>> {
    Ok(vec![
        Product::generic(
            ProductId::new("P001")?,
            BaseDetails::new("Generic Item A", 10.50, "Electronics")?,
            100,
        ),
        Product::laptop(
            ProductId::new("L001")?,
            BaseDetails::new("Dell XPS 15", 1500.00, "Laptops")?,
            50,
            LaptopSpecs::new("Intel i7", 16, 512)?,
        ),
        Product::smartphone(
            ProductId::new("S001")?,
            BaseDetails::new("iPhone 15", 999.99, "Smartphones")?,
            75,
            SmartphoneSpecs::new(6.1, 48, "iOS")?,
        ),
        Product::generic(
            ProductId::new("P002")?,
            BaseDetails::new("Office Chair", 120.00, "Furniture")?,
            30,
        ),
        Product::generic(
            ProductId::new("P003")?,
            BaseDetails::new("USB Cable", 5.99, "Accessories")?,
            200,
        ),
        Product::smartphone(
            ProductId::new("S002")?,
            BaseDetails::new("Samsung Galaxy", 799.00, "Smartphones")?,
            60,
            SmartphoneSpecs::new(6.7, 64, "Android")?,
        ),
    ])
}

/// Add the sample catalog to `inventory`. Returns how many products were added.
pub fn seed(inventory: &mut Inventory) -> DomainResult<usize> {
    let products = sample_products()?;
    let count = products.len();
    for product in products {
        inventory.add_product(product)?;
    }
    Ok(count)
}
