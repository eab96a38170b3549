//! Products domain module.
//!
//! The product record and its variants (generic, laptop, smartphone),
//! implemented as plain validated data (no IO, no storage).

pub mod price;
pub mod product;
pub mod variant;

pub use price::Price;
pub use product::{BaseDetails, Product};
pub use variant::{LaptopSpecs, ProductKind, SmartphoneSpecs, VariantKind};
