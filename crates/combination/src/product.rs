//! Product types for mix selection.

use loadfit_core::geometry::Dimensions;
use loadfit_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product type competing for space in a shared container.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Product {
    /// Display name.
    #[cfg_attr(feature = "serde", serde(alias = "productName"))]
    pub name: String,

    /// Weight of one unit.
    pub unit_weight: f64,

    /// Volume of one unit.
    pub volume: f64,
}

impl Product {
    /// Creates a product from its unit weight and volume.
    pub fn new(name: impl Into<String>, unit_weight: f64, volume: f64) -> Self {
        Self {
            name: name.into(),
            unit_weight,
            volume,
        }
    }

    /// Creates a product whose volume is `length × width × height`.
    pub fn from_dimensions(name: impl Into<String>, unit_weight: f64, dimensions: Dimensions) -> Self {
        Self::new(name, unit_weight, dimensions.volume())
    }

    /// Returns `1 / (volume × unit_weight)`.
    ///
    /// Smaller and lighter products score higher. A zero volume or weight
    /// gives `f64::INFINITY`.
    pub fn efficiency(&self) -> f64 {
        1.0 / (self.volume * self.unit_weight)
    }

    /// Returns true if adding a unit consumes some budget.
    ///
    /// Products without a footprint could be added forever.
    pub fn has_footprint(&self) -> bool {
        self.volume.is_finite()
            && self.unit_weight.is_finite()
            && (self.volume > 0.0 || self.unit_weight > 0.0)
    }

    /// Checks that volume and weight are finite, non-negative and not both zero.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidProduct("product name is empty".into()));
        }
        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(Error::InvalidProduct(format!(
                "volume of '{}' must be finite and non-negative",
                self.name
            )));
        }
        if !self.unit_weight.is_finite() || self.unit_weight < 0.0 {
            return Err(Error::InvalidWeight(format!(
                "unit weight of '{}' must be finite and non-negative",
                self.name
            )));
        }
        if !self.has_footprint() {
            return Err(Error::InvalidProduct(format!(
                "'{}' has neither volume nor weight",
                self.name
            )));
        }
        Ok(())
    }
}
