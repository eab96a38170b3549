//! `stockroom-core` — domain foundation building blocks.
//!
//! Identifiers, the shared error model and the entity/value-object/aggregate
//! traits. No IO, no storage.

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::Aggregate;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{ProductId, TransactionId};
pub use value_object::ValueObject;
