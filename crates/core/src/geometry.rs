//! Core geometry types: box dimensions, the orientation table and the
//! traits shared by packable items and containers.

use crate::placement::Rotation;
use crate::{Error, Result};
use nalgebra::Vector3;
use std::f64::consts::FRAC_PI_2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for an item or container.
pub type GeometryId = String;

/// Box dimensions in a caller-chosen linear unit.
///
/// The grid axes are fixed: `x` runs along `length`, `y` along `height`
/// (the stacking axis) and `z` along `width`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Extent along the x axis.
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: f64,
    /// Extent along the z axis.
    #[cfg_attr(feature = "serde", serde(default))]
    pub width: f64,
    /// Extent along the y (vertical) axis.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: f64,
}

impl Dimensions {
    /// All-zero dimensions.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates dimensions from length, width and height.
    pub const fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Returns `length × width × height` of the un-rotated box.
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Returns the raw values in `[length, width, height]` order.
    pub fn as_array(&self) -> [f64; 3] {
        [self.length, self.width, self.height]
    }

    /// Returns the extents in grid axis order `(x, y, z) = (length, height, width)`.
    pub fn grid_extents(&self) -> Vector3<f64> {
        Vector3::new(self.length, self.height, self.width)
    }

    /// Returns true if any extent is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        self.as_array().iter().any(|v| !v.is_finite() || *v <= 0.0)
    }

    /// Returns the six axis-aligned orientations, in table order.
    pub fn orientations(&self) -> [Orientation; ORIENTATION_COUNT] {
        let raw = self.as_array();
        std::array::from_fn(|index| {
            let (l, w, h, rotation) = ORIENTATION_TABLE[index];
            Orientation {
                index,
                dimensions: Dimensions::new(raw[l], raw[w], raw[h]),
                rotation,
            }
        })
    }

    /// Checks that all extents are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.as_array().iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(Error::InvalidDimensions(format!(
                "{} must be finite and non-negative",
                self
            )));
        }
        if self.is_degenerate() {
            return Err(Error::InvalidDimensions(
                "missing required dimensions".into(),
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}x{}", self.length, self.width, self.height)
    }
}

impl From<[f64; 3]> for Dimensions {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Number of axis-aligned orientations of a box.
pub const ORIENTATION_COUNT: usize = 6;

const fn rot(x: f64, y: f64, z: f64) -> Rotation {
    Rotation { x, y, z }
}

/// Permutation table: indices into `[length, width, height]` giving the
/// oriented length, width and height, plus the rendering rotation.
///
/// Table order is the tie-break order of the grid search.
const ORIENTATION_TABLE: [(usize, usize, usize, Rotation); ORIENTATION_COUNT] = [
    (0, 1, 2, rot(0.0, 0.0, 0.0)),
    (0, 2, 1, rot(FRAC_PI_2, 0.0, 0.0)),
    (1, 0, 2, rot(0.0, FRAC_PI_2, 0.0)),
    (1, 2, 0, rot(FRAC_PI_2, FRAC_PI_2, 0.0)),
    (2, 0, 1, rot(0.0, 0.0, FRAC_PI_2)),
    (2, 1, 0, rot(0.0, FRAC_PI_2, FRAC_PI_2)),
];

/// One axis-aligned orientation of an item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Orientation {
    /// Position in the orientation table (0 = un-rotated).
    pub index: usize,
    /// The item's extents after rotation.
    pub dimensions: Dimensions,
    /// Rotation descriptor for renderers; not used by the packing math.
    pub rotation: Rotation,
}

impl Orientation {
    /// Returns the oriented extents in grid axis order.
    pub fn extents(&self) -> Vector3<f64> {
        self.dimensions.grid_extents()
    }

    /// Returns true for the un-rotated orientation.
    pub fn is_identity(&self) -> bool {
        self.index == 0
    }
}

/// Something that can be packed: a box with a per-unit weight.
pub trait Geometry {
    /// Returns the identifier of this item.
    fn id(&self) -> &GeometryId;

    /// Returns the un-rotated dimensions.
    fn dimensions(&self) -> Dimensions;

    /// Returns the weight of one unit.
    fn weight(&self) -> f64;

    /// Returns the raw (un-rotated) volume.
    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }

    /// Validates the item.
    fn validate(&self) -> Result<()>;
}

/// A box-shaped container with a weight capacity.
pub trait Boundary {
    /// Returns the interior dimensions.
    fn dimensions(&self) -> Dimensions;

    /// Returns the maximum total weight of the contents.
    fn max_weight(&self) -> f64;

    /// Returns the interior volume.
    fn volume(&self) -> f64 {
        self.dimensions().volume()
    }

    /// Validates the container.
    fn validate(&self) -> Result<()>;
}
