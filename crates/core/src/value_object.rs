//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own: two instances holding the same
/// attributes are interchangeable. Prices and variant specifications are value
/// objects; products are entities.
///
/// Value objects are validated on construction and replaced wholesale rather
/// than edited field by field, so an instance that exists is always valid.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
