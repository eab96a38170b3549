use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{ProductId, TransactionId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MovementType {
    In,
    Out,
}

impl MovementType {
    pub fn as_str(self) -> &'static str {
        match self {
            MovementType::In => "IN",
            MovementType::Out => "OUT",
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded stock movement (immutable).
///
/// `product_id` is a plain value: the product may since have been deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    transaction_id: TransactionId,
    product_id: ProductId,
    movement: MovementType,
    /// Units moved, always positive.
    quantity: u32,
    occurred_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(
        transaction_id: TransactionId,
        product_id: ProductId,
        movement: MovementType,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> Self {
        Self {
            transaction_id,
            product_id,
            movement,
            quantity,
            occurred_at,
        }
    }

    pub fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn movement(&self) -> MovementType {
        self.movement
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }

    /// Signed effect on stock: positive for `IN`, negative for `OUT`.
    pub fn signed_quantity(&self) -> i64 {
        match self.movement {
            MovementType::In => i64::from(self.quantity),
            MovementType::Out => -i64::from(self.quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&MovementType::In).unwrap(), "\"IN\"");
        assert_eq!(serde_json::to_string(&MovementType::Out).unwrap(), "\"OUT\"");
        assert_eq!(MovementType::Out.to_string(), "OUT");
    }

    #[test]
    fn signed_quantity_follows_direction() {
        let id = ProductId::new("P001").unwrap();
        let now = Utc::now();
        let inbound = Transaction::new(TransactionId::new(), id.clone(), MovementType::In, 50, now);
        let outbound = Transaction::new(TransactionId::new(), id, MovementType::Out, 20, now);
        assert_eq!(inbound.signed_quantity(), 50);
        assert_eq!(outbound.signed_quantity(), -20);
    }

    #[test]
    fn serializes_all_fields() {
        let tx = Transaction::new(
            TransactionId::new(),
            ProductId::new("P001").unwrap(),
            MovementType::Out,
            150,
            Utc::now(),
        );
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["product_id"], "P001");
        assert_eq!(json["movement"], "OUT");
        assert_eq!(json["quantity"], 150);
        assert_eq!(json["transaction_id"], tx.transaction_id().to_string());
    }
}
