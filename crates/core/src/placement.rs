//! Placement representation for positioned units.

use crate::transform::AABB3D;
use nalgebra::{Rotation3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rotation of a placed unit as Euler angles in radians.
///
/// Always a triple of multiples of 90°. Renderers use it to draw the unit;
/// the packing math works on oriented extents instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotation {
    /// Rotation around the x axis.
    pub x: f64,
    /// Rotation around the y axis.
    pub y: f64,
    /// Rotation around the z axis.
    pub z: f64,
}

impl Rotation {
    /// No rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a rotation from Euler angles in radians.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the angles in whole degrees.
    pub fn degrees(&self) -> [i32; 3] {
        [self.x, self.y, self.z].map(|r| r.to_degrees().round() as i32)
    }

    /// Converts to a nalgebra rotation matrix.
    pub fn to_rotation3(&self) -> Rotation3<f64> {
        Rotation3::from_euler_angles(self.x, self.y, self.z)
    }
}

/// Corner offset of one placed unit from the container origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// Offset along the container length.
    pub x: f64,
    /// Offset along the container height.
    pub y: f64,
    /// Offset along the container width.
    pub z: f64,
    /// Rotation of the orientation that produced this cell.
    pub rotation: Rotation,
}

impl Position {
    /// Creates an un-rotated position.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            rotation: Rotation::IDENTITY,
        }
    }

    /// Sets the rotation.
    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Returns the offset as a vector.
    pub fn offset(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns the box occupied by a unit with the given oriented extents.
    pub fn bounding_box(&self, extents: &Vector3<f64>) -> AABB3D {
        AABB3D::from_corner(self.offset(), *extents)
    }
}
