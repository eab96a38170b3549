//! End-to-end walk through the public inventory API.

use stockroom_core::{DomainError, ProductId};
use stockroom_inventory::{Inventory, MovementType};
use stockroom_products::{BaseDetails, LaptopSpecs, Product, SmartphoneSpecs};

fn pid(raw: &str) -> ProductId {
    ProductId::new(raw).unwrap()
}

fn generic_item() -> Product {
    Product::generic(
        pid("P001"),
        BaseDetails::new("Generic Item A", 10.50, "Electronics").unwrap(),
        100,
    )
}

#[test]
fn stock_lifecycle_survives_product_deletion() {
    let mut inventory = Inventory::new();
    let id = pid("P001");

    inventory.add_product(generic_item()).unwrap();

    inventory.add_stock(&id, 50).unwrap();
    assert_eq!(inventory.get_product(&id).unwrap().quantity(), 150);
    let ledger = inventory.list_transactions();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].movement(), MovementType::In);
    assert_eq!(ledger[0].quantity(), 50);

    let err = inventory.remove_stock(&id, 200).unwrap_err();
    assert!(matches!(err, DomainError::InsufficientStock { .. }));
    assert_eq!(inventory.get_product(&id).unwrap().quantity(), 150);
    assert_eq!(inventory.list_transactions().len(), 1);

    inventory.remove_stock(&id, 150).unwrap();
    assert_eq!(inventory.get_product(&id).unwrap().quantity(), 0);
    let ledger = inventory.list_transactions();
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[1].movement(), MovementType::Out);
    assert_eq!(ledger[1].quantity(), 150);

    inventory.delete_product(&id).unwrap();
    assert!(inventory.get_product(&id).is_none());

    let ledger = inventory.list_transactions();
    assert_eq!(ledger.len(), 2);
    assert!(ledger.iter().all(|t| t.product_id() == &id));
    assert!(ledger[0].occurred_at() <= ledger[1].occurred_at());
    assert_ne!(ledger[0].transaction_id(), ledger[1].transaction_id());
}

#[test]
fn second_add_with_same_id_leaves_catalog_unchanged() {
    let mut inventory = Inventory::new();
    inventory.add_product(generic_item()).unwrap();

    let impostor = Product::generic(
        pid("P001"),
        BaseDetails::new("Impostor", 1.0, "Other").unwrap(),
        1,
    );
    let err = inventory.add_product(impostor).unwrap_err();
    assert_eq!(err, DomainError::DuplicateId("P001".to_string()));

    assert_eq!(inventory.list_all(), vec![generic_item()]);
}

#[test]
fn queries_across_variants() {
    let mut inventory = Inventory::new();
    inventory.add_product(generic_item()).unwrap();
    inventory
        .add_product(Product::laptop(
            pid("L001"),
            BaseDetails::new("Dell XPS 15", 1500.00, "Laptops").unwrap(),
            50,
            LaptopSpecs::new("Intel i7", 16, 512).unwrap(),
        ))
        .unwrap();
    inventory
        .add_product(Product::smartphone(
            pid("S001"),
            BaseDetails::new("iPhone 15", 999.99, "Smartphones").unwrap(),
            75,
            SmartphoneSpecs::new(6.1, 48, "iOS").unwrap(),
        ))
        .unwrap();

    assert_eq!(inventory.search_by_name("").len(), 3);

    let dell = inventory.search_by_name("dell");
    assert_eq!(dell.len(), 1);
    assert_eq!(dell[0].name(), "Dell XPS 15");

    assert_eq!(inventory.filter_by_category("smartphones").len(), 1);
    assert!(inventory.filter_by_category("Smartphone").is_empty());

    let categories = inventory.list_categories();
    assert_eq!(categories.len(), 3);

    let err = inventory
        .update_laptop_fields(&pid("S001"), LaptopSpecs::new("M3", 8, 256).unwrap())
        .unwrap_err();
    assert!(matches!(err, DomainError::WrongVariant { .. }));
    let phone = inventory.get_product(&pid("S001")).unwrap();
    assert_eq!(phone.smartphone_specs().unwrap().operating_system(), "iOS");
}

#[test]
fn snapshots_do_not_follow_later_changes() {
    let mut inventory = Inventory::new();
    inventory.add_product(generic_item()).unwrap();

    let products = inventory.list_all();
    let transactions = inventory.list_transactions();

    inventory.add_stock(&pid("P001"), 5).unwrap();
    inventory.delete_product(&pid("P001")).unwrap();

    assert_eq!(products[0].quantity(), 100);
    assert!(transactions.is_empty());
}
