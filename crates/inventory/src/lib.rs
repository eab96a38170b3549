//! Inventory domain module.
//!
//! The product catalog and its append-only stock ledger. A stock movement
//! updates a product's quantity and records a transaction as one step; a
//! rejected operation changes nothing. Deterministic domain logic only (no IO,
//! no storage).

pub mod catalog;
pub mod inventory;
pub mod ledger;
pub mod shared;
pub mod transaction;

pub use catalog::Catalog;
pub use inventory::{
    AddProduct, AdjustStock, BaseUpdated, DeleteProduct, Inventory, InventoryCommand,
    InventoryEvent, InventorySnapshot, ProductAdded, ProductDeleted, StockMoved, UpdateBase,
    UpdateVariant, VariantUpdated,
};
pub use ledger::Ledger;
pub use shared::SharedInventory;
pub use transaction::{MovementType, Transaction};
