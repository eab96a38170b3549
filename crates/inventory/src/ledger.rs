//! Append-only stock-movement ledger.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use stockroom_core::{ProductId, TransactionId};

use crate::transaction::Transaction;

/// Ordered, append-only list of transactions.
///
/// Entries are never edited or removed. Append order is the order of record;
/// timestamps are non-decreasing along it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Transaction>,
    ids: HashSet<TransactionId>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transaction. Returns `false` (and records nothing) if its id is
    /// already present, so replaying an event is harmless.
    pub(crate) fn append(&mut self, transaction: Transaction) -> bool {
        if !self.ids.insert(transaction.transaction_id()) {
            return false;
        }
        self.entries.push(transaction);
        true
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains(&self, transaction_id: TransactionId) -> bool {
        self.ids.contains(&transaction_id)
    }

    pub fn last(&self) -> Option<&Transaction> {
        self.entries.last()
    }

    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.last().map(Transaction::occurred_at)
    }

    /// Copy of every entry, in append order.
    pub fn snapshot(&self) -> Vec<Transaction> {
        self.entries.clone()
    }

    /// Entries referencing `product_id`, in append order.
    pub fn for_product(&self, product_id: &ProductId) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter(|t| t.product_id() == product_id)
            .cloned()
            .collect()
    }

    /// Sum of signed movements recorded for `product_id`.
    pub fn net_movement(&self, product_id: &ProductId) -> i64 {
        self.entries
            .iter()
            .filter(|t| t.product_id() == product_id)
            .map(Transaction::signed_quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::MovementType;

    fn tx(product: &str, movement: MovementType, quantity: u32) -> Transaction {
        Transaction::new(
            TransactionId::new(),
            ProductId::new(product).unwrap(),
            movement,
            quantity,
            Utc::now(),
        )
    }

    #[test]
    fn append_keeps_order() {
        let mut ledger = Ledger::new();
        let first = tx("P001", MovementType::In, 50);
        let second = tx("P001", MovementType::Out, 150);
        assert!(ledger.append(first.clone()));
        assert!(ledger.append(second.clone()));

        assert_eq!(ledger.snapshot(), vec![first, second.clone()]);
        assert_eq!(ledger.last(), Some(&second));
    }

    #[test]
    fn duplicate_ids_are_not_recorded_twice() {
        let mut ledger = Ledger::new();
        let entry = tx("P001", MovementType::In, 5);
        assert!(ledger.append(entry.clone()));
        assert!(!ledger.append(entry.clone()));
        assert_eq!(ledger.len(), 1);
        assert!(ledger.contains(entry.transaction_id()));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut ledger = Ledger::new();
        ledger.append(tx("P001", MovementType::In, 5));
        let before = ledger.snapshot();
        ledger.append(tx("P001", MovementType::In, 7));
        assert_eq!(before.len(), 1);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn per_product_history_and_net() {
        let mut ledger = Ledger::new();
        ledger.append(tx("P001", MovementType::In, 50));
        ledger.append(tx("L001", MovementType::In, 3));
        ledger.append(tx("P001", MovementType::Out, 20));

        let p001 = ProductId::new("P001").unwrap();
        let history = ledger.for_product(&p001);
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].movement(), MovementType::In);
        assert_eq!(history[1].movement(), MovementType::Out);
        assert_eq!(ledger.net_movement(&p001), 30);
    }
}
