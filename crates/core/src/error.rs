//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant describes a rejected operation. A call that returns one of
/// these has left the catalog and the ledger exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A field value failed validation (empty name, negative price, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier could not be parsed.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A product with this id is already in the catalog.
    #[error("product already exists: {0}")]
    DuplicateId(String),

    /// No product with this id is in the catalog.
    #[error("product not found: {0}")]
    NotFound(String),

    /// A variant-specific update targeted a product of another variant.
    #[error("product {product_id} is a {found}, not a {expected}")]
    WrongVariant {
        product_id: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A stock amount was not strictly positive.
    #[error("invalid quantity: {0} (must be greater than zero)")]
    InvalidQuantity(u32),

    /// A removal asked for more units than are on hand.
    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: String,
        requested: u32,
        available: u32,
    },

    /// The stock counter would leave its representable range.
    #[error("stock overflow for {0}")]
    Overflow(String),

    /// A conflict with already-recorded state (e.g. a reused transaction id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A shared handle found its lock poisoned by a panicking writer.
    #[error("inventory lock poisoned")]
    LockPoisoned,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn duplicate_id(id: impl ToString) -> Self {
        Self::DuplicateId(id.to_string())
    }

    pub fn not_found(id: impl ToString) -> Self {
        Self::NotFound(id.to_string())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Short machine-friendly name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::InvalidId(_) => "invalid_id",
            Self::DuplicateId(_) => "duplicate_id",
            Self::NotFound(_) => "not_found",
            Self::WrongVariant { .. } => "wrong_variant",
            Self::InvalidQuantity(_) => "invalid_quantity",
            Self::InsufficientStock { .. } => "insufficient_stock",
            Self::Overflow(_) => "overflow",
            Self::Conflict(_) => "conflict",
            Self::LockPoisoned => "lock_poisoned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_product() {
        let err = DomainError::InsufficientStock {
            product_id: "P001".to_string(),
            requested: 200,
            available: 150,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for P001: requested 200, available 150"
        );

        let err = DomainError::WrongVariant {
            product_id: "S001".to_string(),
            expected: "laptop",
            found: "smartphone",
        };
        assert_eq!(err.to_string(), "product S001 is a smartphone, not a laptop");
    }

    #[test]
    fn kind_is_stable() {
        assert_eq!(DomainError::not_found("X").kind(), "not_found");
        assert_eq!(DomainError::InvalidQuantity(0).kind(), "invalid_quantity");
        assert_eq!(DomainError::LockPoisoned.kind(), "lock_poisoned");
    }
}
