use serde::Serialize;

use stockroom_core::{DomainError, DomainResult, Entity, ProductId};

use crate::price::Price;
use crate::variant::{LaptopSpecs, ProductKind, SmartphoneSpecs, VariantKind};

/// Base attributes shared by every variant, validated as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDetails {
    name: String,
    price: Price,
    category: String,
}

impl BaseDetails {
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        let category = category.into().trim().to_string();
        if category.is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        Ok(Self {
            name,
            price: Price::new(price)?,
            category,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

/// Catalog entity: a product record of exactly one variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    product_id: ProductId,
    name: String,
    price: Price,
    quantity: u32,
    category: String,
    #[serde(flatten)]
    kind: ProductKind,
}

impl Product {
    pub fn new(product_id: ProductId, details: BaseDetails, quantity: u32, kind: ProductKind) -> Self {
        Self {
            product_id,
            name: details.name,
            price: details.price,
            quantity,
            category: details.category,
            kind,
        }
    }

    pub fn generic(product_id: ProductId, details: BaseDetails, quantity: u32) -> Self {
        Self::new(product_id, details, quantity, ProductKind::Generic)
    }

    pub fn laptop(product_id: ProductId, details: BaseDetails, quantity: u32, specs: LaptopSpecs) -> Self {
        Self::new(product_id, details, quantity, ProductKind::Laptop(specs))
    }

    pub fn smartphone(
        product_id: ProductId,
        details: BaseDetails,
        quantity: u32,
        specs: SmartphoneSpecs,
    ) -> Self {
        Self::new(product_id, details, quantity, ProductKind::Smartphone(specs))
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn variant(&self) -> VariantKind {
        self.kind.variant()
    }

    pub fn laptop_specs(&self) -> Option<&LaptopSpecs> {
        match &self.kind {
            ProductKind::Laptop(specs) => Some(specs),
            _ => None,
        }
    }

    pub fn smartphone_specs(&self) -> Option<&SmartphoneSpecs> {
        match &self.kind {
            ProductKind::Smartphone(specs) => Some(specs),
            _ => None,
        }
    }

    /// Price times quantity on hand.
    pub fn stock_value(&self) -> f64 {
        self.price.amount() * f64::from(self.quantity)
    }

    /// Case-insensitive substring match on the name. `needle` must already be lowercase.
    pub fn name_contains_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    /// Case-insensitive exact match on the category.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Quantity after receiving `amount` units. Does not mutate.
    pub fn quantity_after_restock(&self, amount: u32) -> DomainResult<u32> {
        if amount == 0 {
            return Err(DomainError::InvalidQuantity(0));
        }
        self.quantity
            .checked_add(amount)
            .ok_or_else(|| DomainError::Overflow(self.product_id.to_string()))
    }

    /// Quantity after shipping out `amount` units. Does not mutate.
    pub fn quantity_after_withdrawal(&self, amount: u32) -> DomainResult<u32> {
        if amount == 0 {
            return Err(DomainError::InvalidQuantity(0));
        }
        self.quantity
            .checked_sub(amount)
            .ok_or_else(|| DomainError::InsufficientStock {
                product_id: self.product_id.to_string(),
                requested: amount,
                available: self.quantity,
            })
    }

    /// Fails with `WrongVariant` unless this product is of the `expected` variant.
    pub fn ensure_variant(&self, expected: VariantKind) -> DomainResult<()> {
        let found = self.variant();
        if found != expected {
            return Err(DomainError::WrongVariant {
                product_id: self.product_id.to_string(),
                expected: expected.as_str(),
                found: found.as_str(),
            });
        }
        Ok(())
    }

    pub fn set_base(&mut self, details: BaseDetails) {
        self.name = details.name;
        self.price = details.price;
        self.category = details.category;
    }

    /// Replace the variant payload. Fails without change on a variant mismatch.
    pub fn set_kind(&mut self, kind: ProductKind) -> DomainResult<()> {
        self.ensure_variant(kind.variant())?;
        self.kind = kind;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
