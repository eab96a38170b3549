//! Product store keyed by product id.

use std::collections::{BTreeMap, BTreeSet};

use stockroom_core::ProductId;
use stockroom_products::Product;

/// Mapping of product id to product record.
///
/// Iteration follows id order, so listings are stable between calls. Every
/// query returns owned copies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.products.len()
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.products.contains_key(product_id)
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.get(product_id)
    }

    pub(crate) fn get_mut(&mut self, product_id: &ProductId) -> Option<&mut Product> {
        self.products.get_mut(product_id)
    }

    pub(crate) fn insert(&mut self, product: Product) {
        self.products.insert(product.product_id().clone(), product);
    }

    pub(crate) fn remove(&mut self, product_id: &ProductId) -> Option<Product> {
        self.products.remove(product_id)
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// Products whose name contains `term`, ignoring case. An empty term matches all.
    pub fn search_by_name(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .values()
            .filter(|p| p.name_contains_lowercase(&needle))
            .cloned()
            .collect()
    }

    /// Products whose category equals `category`, ignoring case.
    pub fn filter_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.in_category(category))
            .cloned()
            .collect()
    }

    /// Distinct category labels as stored.
    pub fn categories(&self) -> BTreeSet<String> {
        self.products
            .values()
            .map(|p| p.category().to_string())
            .collect()
    }

    pub fn total_stock_value(&self) -> f64 {
        self.products.values().map(Product::stock_value).sum()
    }
}
