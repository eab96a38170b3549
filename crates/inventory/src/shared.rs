//! Thread-safe handle over a single [`Inventory`].

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_core::{DomainError, DomainResult, ProductId};
use stockroom_products::{BaseDetails, LaptopSpecs, Product, ProductKind, SmartphoneSpecs};

use crate::inventory::{Inventory, InventorySnapshot};
use crate::transaction::Transaction;

/// Cloneable, `Send + Sync` handle to one inventory.
///
/// Each mutation holds the write lock for its whole validate-apply-log step,
/// so two stock movements on the same product can never interleave. Queries
/// take the read lock and return copies.
#[derive(Debug, Clone, Default)]
pub struct SharedInventory {
    inner: Arc<RwLock<Inventory>>,
}

impl SharedInventory {
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inventory)),
        }
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, Inventory>> {
        self.inner.read().map_err(|_| DomainError::LockPoisoned)
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, Inventory>> {
        self.inner.write().map_err(|_| DomainError::LockPoisoned)
    }

    pub fn add_product(&self, product: Product) -> DomainResult<()> {
        self.write()?.add_product(product)
    }

    pub fn get_product(&self, product_id: &ProductId) -> DomainResult<Option<Product>> {
        Ok(self.read()?.get_product(product_id))
    }

    pub fn update_base(&self, product_id: &ProductId, details: BaseDetails) -> DomainResult<()> {
        self.write()?.update_base(product_id, details)
    }

    pub fn update_variant_fields(&self, product_id: &ProductId, kind: ProductKind) -> DomainResult<()> {
        self.write()?.update_variant_fields(product_id, kind)
    }

    pub fn update_laptop_fields(&self, product_id: &ProductId, specs: LaptopSpecs) -> DomainResult<()> {
        self.write()?.update_laptop_fields(product_id, specs)
    }

    pub fn update_smartphone_fields(&self, product_id: &ProductId, specs: SmartphoneSpecs) -> DomainResult<()> {
        self.write()?.update_smartphone_fields(product_id, specs)
    }

    pub fn delete_product(&self, product_id: &ProductId) -> DomainResult<Product> {
        self.write()?.delete_product(product_id)
    }

    pub fn add_stock(&self, product_id: &ProductId, amount: u32) -> DomainResult<Transaction> {
        self.write()?.add_stock(product_id, amount)
    }

    pub fn remove_stock(&self, product_id: &ProductId, amount: u32) -> DomainResult<Transaction> {
        self.write()?.remove_stock(product_id, amount)
    }

    pub fn list_all(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.list_all())
    }

    pub fn search_by_name(&self, term: &str) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.search_by_name(term))
    }

    pub fn filter_by_category(&self, category: &str) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.filter_by_category(category))
    }

    pub fn list_categories(&self) -> DomainResult<BTreeSet<String>> {
        Ok(self.read()?.list_categories())
    }

    pub fn list_transactions(&self) -> DomainResult<Vec<Transaction>> {
        Ok(self.read()?.list_transactions())
    }

    pub fn transactions_for(&self, product_id: &ProductId) -> DomainResult<Vec<Transaction>> {
        Ok(self.read()?.transactions_for(product_id))
    }

    pub fn total_stock_value(&self) -> DomainResult<f64> {
        Ok(self.read()?.total_stock_value())
    }

    pub fn snapshot(&self) -> DomainResult<InventorySnapshot> {
        Ok(self.read()?.snapshot())
    }
}
