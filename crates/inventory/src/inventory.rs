use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use stockroom_core::{Aggregate, DomainError, DomainResult, ProductId, TransactionId};
use stockroom_products::{BaseDetails, LaptopSpecs, Product, ProductKind, SmartphoneSpecs};

use crate::catalog::Catalog;
use crate::ledger::Ledger;
use crate::transaction::{MovementType, Transaction};

/// Aggregate root: the catalog plus its stock ledger.
///
/// Every mutation goes through [`Aggregate::handle`] (pure validation) and then
/// [`Aggregate::apply`] (infallible). A stock movement is a single event that
/// carries both the new quantity and the transaction, so the two can never be
/// applied separately.
///
/// An event that no longer fits the current state (a replay, a stale movement,
/// a movement for a deleted product) is dropped whole and does not bump the
/// version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    catalog: Catalog,
    ledger: Ledger,
    version: u64,
}

/// Command: AddProduct.
#[derive(Debug, Clone, PartialEq)]
pub struct AddProduct {
    pub product: Product,
}

/// Command: UpdateBase.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBase {
    pub product_id: ProductId,
    pub details: BaseDetails,
}

/// Command: UpdateVariant.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVariant {
    pub product_id: ProductId,
    pub kind: ProductKind,
}

/// Command: DeleteProduct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProduct {
    pub product_id: ProductId,
}

/// Command: AdjustStock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustStock {
    pub product_id: ProductId,
    pub transaction_id: TransactionId,
    pub movement: MovementType,
    pub amount: u32,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryCommand {
    AddProduct(AddProduct),
    UpdateBase(UpdateBase),
    UpdateVariant(UpdateVariant),
    DeleteProduct(DeleteProduct),
    AdjustStock(AdjustStock),
}

/// Event: ProductAdded.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductAdded {
    pub product: Product,
}

/// Event: BaseUpdated.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseUpdated {
    pub product_id: ProductId,
    pub details: BaseDetails,
}

/// Event: VariantUpdated.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantUpdated {
    pub product_id: ProductId,
    pub kind: ProductKind,
}

/// Event: ProductDeleted. Carries the record as it was when removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDeleted {
    pub product: Product,
}

/// Event: StockMoved.
///
/// Applies only to a product whose quantity is still `quantity_before`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockMoved {
    pub transaction: Transaction,
    pub quantity_before: u32,
    pub quantity_after: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    BaseUpdated(BaseUpdated),
    VariantUpdated(VariantUpdated),
    ProductDeleted(ProductDeleted),
    StockMoved(StockMoved),
}

impl InventoryEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::BaseUpdated(_) => "inventory.product.base_updated",
            InventoryEvent::VariantUpdated(_) => "inventory.product.variant_updated",
            InventoryEvent::ProductDeleted(_) => "inventory.product.deleted",
            InventoryEvent::StockMoved(_) => "inventory.stock.moved",
        }
    }
}

/// Serializable copy of the whole inventory state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventorySnapshot {
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        // Deterministic version tracking: +1 per event that took effect.
        if self.apply_event(event) {
            self.version += 1;
        }
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddProduct(cmd) => self.handle_add(cmd),
            InventoryCommand::UpdateBase(cmd) => self.handle_update_base(cmd),
            InventoryCommand::UpdateVariant(cmd) => self.handle_update_variant(cmd),
            InventoryCommand::DeleteProduct(cmd) => self.handle_delete(cmd),
            InventoryCommand::AdjustStock(cmd) => self.handle_adjust(cmd),
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutate state for one event. Returns `false`, with nothing changed, when
    /// the event does not fit the current state.
    fn apply_event(&mut self, event: &InventoryEvent) -> bool {
        match event {
            InventoryEvent::ProductAdded(e) => {
                if self.catalog.contains(e.product.product_id()) {
                    return false;
                }
                self.catalog.insert(e.product.clone());
                true
            }
            InventoryEvent::BaseUpdated(e) => match self.catalog.get_mut(&e.product_id) {
                Some(product) => {
                    product.set_base(e.details.clone());
                    true
                }
                None => false,
            },
            InventoryEvent::VariantUpdated(e) => match self.catalog.get_mut(&e.product_id) {
                Some(product) => product.set_kind(e.kind.clone()).is_ok(),
                None => false,
            },
            InventoryEvent::ProductDeleted(e) => self.catalog.remove(e.product.product_id()).is_some(),
            InventoryEvent::StockMoved(e) => {
                let Some(product) = self.catalog.get_mut(e.transaction.product_id()) else {
                    return false;
                };
                // Ledger append and quantity change happen together or not at all.
                if product.quantity() != e.quantity_before || !self.ledger.append(e.transaction.clone()) {
                    return false;
                }
                product.set_quantity(e.quantity_after);
                true
            }
        }
    }

    fn existing(&self, product_id: &ProductId) -> Result<&Product, DomainError> {
        self.catalog
            .get(product_id)
            .ok_or_else(|| DomainError::not_found(product_id))
    }

    fn handle_add(&self, cmd: &AddProduct) -> Result<Vec<InventoryEvent>, DomainError> {
        let product_id = cmd.product.product_id();
        if self.catalog.contains(product_id) {
            return Err(DomainError::duplicate_id(product_id));
        }
        Ok(vec![InventoryEvent::ProductAdded(ProductAdded {
            product: cmd.product.clone(),
        })])
    }

    fn handle_update_base(&self, cmd: &UpdateBase) -> Result<Vec<InventoryEvent>, DomainError> {
        self.existing(&cmd.product_id)?;
        Ok(vec![InventoryEvent::BaseUpdated(BaseUpdated {
            product_id: cmd.product_id.clone(),
            details: cmd.details.clone(),
        })])
    }

    fn handle_update_variant(&self, cmd: &UpdateVariant) -> Result<Vec<InventoryEvent>, DomainError> {
        let product = self.existing(&cmd.product_id)?;
        product.ensure_variant(cmd.kind.variant())?;
        Ok(vec![InventoryEvent::VariantUpdated(VariantUpdated {
            product_id: cmd.product_id.clone(),
            kind: cmd.kind.clone(),
        })])
    }

    fn handle_delete(&self, cmd: &DeleteProduct) -> Result<Vec<InventoryEvent>, DomainError> {
        let product = self.existing(&cmd.product_id)?;
        Ok(vec![InventoryEvent::ProductDeleted(ProductDeleted {
            product: product.clone(),
        })])
    }

    fn handle_adjust(&self, cmd: &AdjustStock) -> Result<Vec<InventoryEvent>, DomainError> {
        if cmd.amount == 0 {
            return Err(DomainError::InvalidQuantity(0));
        }
        let product = self.existing(&cmd.product_id)?;
        if self.ledger.contains(cmd.transaction_id) {
            return Err(DomainError::conflict(format!(
                "transaction {} already recorded",
                cmd.transaction_id
            )));
        }

        let quantity_after = match cmd.movement {
            MovementType::In => product.quantity_after_restock(cmd.amount)?,
            MovementType::Out => product.quantity_after_withdrawal(cmd.amount)?,
        };

        // Keep ledger timestamps non-decreasing even if the wall clock steps back.
        let occurred_at = match self.ledger.last_timestamp() {
            Some(last) if last > cmd.occurred_at => last,
            _ => cmd.occurred_at,
        };

        Ok(vec![InventoryEvent::StockMoved(StockMoved {
            transaction: Transaction::new(
                cmd.transaction_id,
                cmd.product_id.clone(),
                cmd.movement,
                cmd.amount,
                occurred_at,
            ),
            quantity_before: product.quantity(),
            quantity_after,
        })])
    }

    /// Execute a command, logging the outcome.
    fn run(&mut self, command: InventoryCommand) -> DomainResult<Vec<InventoryEvent>> {
        match self.execute(&command) {
            Ok(events) => {
                for event in &events {
                    log_event(event);
                }
                Ok(events)
            }
            Err(err) => {
                warn!(error = %err, kind = err.kind(), "inventory command rejected");
                Err(err)
            }
        }
    }

    pub fn add_product(&mut self, product: Product) -> DomainResult<()> {
        self.run(InventoryCommand::AddProduct(AddProduct { product }))?;
        Ok(())
    }

    pub fn get_product(&self, product_id: &ProductId) -> Option<Product> {
        self.catalog.get(product_id).cloned()
    }

    pub fn update_base(&mut self, product_id: &ProductId, details: BaseDetails) -> DomainResult<()> {
        self.run(InventoryCommand::UpdateBase(UpdateBase {
            product_id: product_id.clone(),
            details,
        }))?;
        Ok(())
    }

    /// Replace the variant-specific fields. The product must already be of `kind`'s variant.
    pub fn update_variant_fields(&mut self, product_id: &ProductId, kind: ProductKind) -> DomainResult<()> {
        self.run(InventoryCommand::UpdateVariant(UpdateVariant {
            product_id: product_id.clone(),
            kind,
        }))?;
        Ok(())
    }

    pub fn update_laptop_fields(&mut self, product_id: &ProductId, specs: LaptopSpecs) -> DomainResult<()> {
        self.update_variant_fields(product_id, ProductKind::Laptop(specs))
    }

    pub fn update_smartphone_fields(
        &mut self,
        product_id: &ProductId,
        specs: SmartphoneSpecs,
    ) -> DomainResult<()> {
        self.update_variant_fields(product_id, ProductKind::Smartphone(specs))
    }

    /// Remove a product and return it. Its ledger entries are kept.
    pub fn delete_product(&mut self, product_id: &ProductId) -> DomainResult<Product> {
        let events = self.run(InventoryCommand::DeleteProduct(DeleteProduct {
            product_id: product_id.clone(),
        }))?;
        events
            .into_iter()
            .find_map(|event| match event {
                InventoryEvent::ProductDeleted(e) => Some(e.product),
                _ => None,
            })
            .ok_or_else(|| DomainError::not_found(product_id))
    }

    pub fn add_stock(&mut self, product_id: &ProductId, amount: u32) -> DomainResult<Transaction> {
        self.move_stock(product_id, MovementType::In, amount)
    }

    pub fn remove_stock(&mut self, product_id: &ProductId, amount: u32) -> DomainResult<Transaction> {
        self.move_stock(product_id, MovementType::Out, amount)
    }

    fn move_stock(
        &mut self,
        product_id: &ProductId,
        movement: MovementType,
        amount: u32,
    ) -> DomainResult<Transaction> {
        let events = self.run(InventoryCommand::AdjustStock(AdjustStock {
            product_id: product_id.clone(),
            transaction_id: TransactionId::new(),
            movement,
            amount,
            occurred_at: Utc::now(),
        }))?;
        events
            .into_iter()
            .find_map(|event| match event {
                InventoryEvent::StockMoved(e) => Some(e.transaction),
                _ => None,
            })
            .ok_or_else(|| DomainError::not_found(product_id))
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.catalog.list_all()
    }

    pub fn search_by_name(&self, term: &str) -> Vec<Product> {
        self.catalog.search_by_name(term)
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<Product> {
        self.catalog.filter_by_category(category)
    }

    pub fn list_categories(&self) -> BTreeSet<String> {
        self.catalog.categories()
    }

    pub fn list_transactions(&self) -> Vec<Transaction> {
        self.ledger.snapshot()
    }

    /// Ledger entries for one product id, including ids no longer in the catalog.
    pub fn transactions_for(&self, product_id: &ProductId) -> Vec<Transaction> {
        self.ledger.for_product(product_id)
    }

    pub fn total_stock_value(&self) -> f64 {
        self.catalog.total_stock_value()
    }

    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn snapshot(&self) -> InventorySnapshot {
        InventorySnapshot {
            products: self.list_all(),
            transactions: self.list_transactions(),
        }
    }
}

fn log_event(event: &InventoryEvent) {
    let event_type = event.event_type();
    match event {
        InventoryEvent::ProductAdded(e) => info!(
            event_type = event_type,
            product_id = %e.product.product_id(),
            variant = %e.product.variant(),
            quantity = e.product.quantity(),
            "product added"
        ),
        InventoryEvent::BaseUpdated(e) => {
            debug!(event_type = event_type, product_id = %e.product_id, "product details updated")
        }
        InventoryEvent::VariantUpdated(e) => debug!(
            event_type = event_type,
            product_id = %e.product_id,
            variant = %e.kind.variant(),
            "variant fields updated"
        ),
        InventoryEvent::ProductDeleted(e) => {
            info!(event_type = event_type, product_id = %e.product.product_id(), "product deleted")
        }
        InventoryEvent::StockMoved(e) => info!(
            event_type = event_type,
            product_id = %e.transaction.product_id(),
            transaction_id = %e.transaction.transaction_id(),
            movement = %e.transaction.movement(),
            amount = e.transaction.quantity(),
            quantity = e.quantity_after,
            "stock moved"
        ),
    }
}
