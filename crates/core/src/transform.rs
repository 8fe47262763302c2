//! Bounding boxes for checking placed layouts.

use nalgebra::Vector3;

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB3D {
    /// Minimum corner.
    pub min: Vector3<f64>,
    /// Maximum corner.
    pub max: Vector3<f64>,
}

impl AABB3D {
    /// Creates a new AABB from its corners.
    pub fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from a corner and its extents.
    pub fn from_corner(corner: Vector3<f64>, extents: Vector3<f64>) -> Self {
        Self::new(corner, corner + extents)
    }

    /// Returns the extents.
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Returns the volume.
    pub fn volume(&self) -> f64 {
        let s = self.size();
        s.x * s.y * s.z
    }

    /// Checks if the interiors of two boxes overlap. Touching faces do not count.
    pub fn overlaps(&self, other: &Self, epsilon: f64) -> bool {
        (0..3).all(|i| {
            self.min[i] + epsilon < other.max[i] && other.min[i] + epsilon < self.max[i]
        })
    }

    /// Checks if `other` lies fully inside this box.
    pub fn contains(&self, other: &Self, epsilon: f64) -> bool {
        (0..3).all(|i| other.min[i] >= self.min[i] - epsilon && other.max[i] <= self.max[i] + epsilon)
    }
}
