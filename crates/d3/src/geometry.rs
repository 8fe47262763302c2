//! Packable item type.

use loadfit_core::geometry::{Dimensions, Geometry, GeometryId};
use loadfit_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A box-shaped item with a per-unit weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item3D {
    /// Unique identifier.
    id: GeometryId,

    /// Un-rotated dimensions.
    dimensions: Dimensions,

    /// Weight of one unit.
    weight: f64,
}

impl Item3D {
    /// Creates a weightless item with the given ID and dimensions.
    pub fn new(id: impl Into<GeometryId>, length: f64, width: f64, height: f64) -> Self {
        Self::from_dimensions(id, Dimensions::new(length, width, height), 0.0)
    }

    /// Creates an item from dimensions and a unit weight.
    pub fn from_dimensions(id: impl Into<GeometryId>, dimensions: Dimensions, weight: f64) -> Self {
        Self {
            id: id.into(),
            dimensions,
            weight,
        }
    }

    /// Sets the unit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns the length.
    pub fn length(&self) -> f64 {
        self.dimensions.length
    }

    /// Returns the width.
    pub fn width(&self) -> f64 {
        self.dimensions.width
    }

    /// Returns the height.
    pub fn height(&self) -> f64 {
        self.dimensions.height
    }
}

impl Geometry for Item3D {
    fn id(&self) -> &GeometryId {
        &self.id
    }

    fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn validate(&self) -> Result<()> {
        if let Err(Error::InvalidDimensions(msg)) = self.dimensions.validate() {
            return Err(Error::InvalidDimensions(format!("item '{}': {}", self.id, msg)));
        }

        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(Error::InvalidWeight(format!(
                "weight of '{}' must be finite and non-negative",
                self.id
            )));
        }

        Ok(())
    }
}
