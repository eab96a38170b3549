//! Product variants: the fixed set of specialized product shapes.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ValueObject};

/// Discriminant of a product variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Generic,
    Laptop,
    Smartphone,
}

impl VariantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Generic => "generic",
            VariantKind::Laptop => "laptop",
            VariantKind::Smartphone => "smartphone",
        }
    }
}

impl core::fmt::Display for VariantKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Laptop-specific attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaptopSpecs {
    processor: String,
    ram_gb: u32,
    storage_gb: u32,
}

impl LaptopSpecs {
    pub fn new(processor: impl Into<String>, ram_gb: u32, storage_gb: u32) -> DomainResult<Self> {
        let processor = processor.into().trim().to_string();
        if processor.is_empty() {
            return Err(DomainError::validation("processor cannot be empty"));
        }
        if ram_gb == 0 {
            return Err(DomainError::validation("RAM must be positive"));
        }
        if storage_gb == 0 {
            return Err(DomainError::validation("storage must be positive"));
        }
        Ok(Self {
            processor,
            ram_gb,
            storage_gb,
        })
    }

    pub fn processor(&self) -> &str {
        &self.processor
    }

    pub fn ram_gb(&self) -> u32 {
        self.ram_gb
    }

    pub fn storage_gb(&self) -> u32 {
        self.storage_gb
    }
}

impl ValueObject for LaptopSpecs {}

/// Smartphone-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SmartphoneSpecs {
    screen_size_inches: f64,
    camera_mp: u32,
    operating_system: String,
}

impl SmartphoneSpecs {
    pub fn new(
        screen_size_inches: f64,
        camera_mp: u32,
        operating_system: impl Into<String>,
    ) -> DomainResult<Self> {
        if !screen_size_inches.is_finite() || screen_size_inches <= 0.0 {
            return Err(DomainError::validation("screen size must be positive"));
        }
        if camera_mp == 0 {
            return Err(DomainError::validation("camera MP must be positive"));
        }
        let operating_system = operating_system.into().trim().to_string();
        if operating_system.is_empty() {
            return Err(DomainError::validation("operating system cannot be empty"));
        }
        Ok(Self {
            screen_size_inches,
            camera_mp,
            operating_system,
        })
    }

    pub fn screen_size_inches(&self) -> f64 {
        self.screen_size_inches
    }

    pub fn camera_mp(&self) -> u32 {
        self.camera_mp
    }

    pub fn operating_system(&self) -> &str {
        &self.operating_system
    }
}

impl ValueObject for SmartphoneSpecs {}

/// Variant payload of a product.
///
/// Fixed at creation. Updates may replace the payload only with one of the
/// same [`VariantKind`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum ProductKind {
    Generic,
    Laptop(LaptopSpecs),
    Smartphone(SmartphoneSpecs),
}

impl ProductKind {
    pub fn variant(&self) -> VariantKind {
        match self {
            ProductKind::Generic => VariantKind::Generic,
            ProductKind::Laptop(_) => VariantKind::Laptop,
            ProductKind::Smartphone(_) => VariantKind::Smartphone,
        }
    }
}

impl From<LaptopSpecs> for ProductKind {
    fn from(specs: LaptopSpecs) -> Self {
        ProductKind::Laptop(specs)
    }
}

impl From<SmartphoneSpecs> for ProductKind {
    fn from(specs: SmartphoneSpecs) -> Self {
        ProductKind::Smartphone(specs)
    }
}
