//! Shared grid arithmetic for the 3D packers.
//!
//! - [`floor_div`]: whole units of `size` that fit in `extent`
//! - [`GridCounts`]: per-axis counts of a uniform grid
//! - [`weight_capped_count`]: caps a spatial count by a weight budget
//! - [`grid_positions`] / [`layered_positions`]: cell corner generation
//! - [`percent`]: a ratio as a percentage that never yields NaN or ∞

use loadfit_core::placement::{Position, Rotation};
use nalgebra::Vector3;

/// Returns `floor(extent / size)`, or 0 when either side is non-positive
/// or the quotient is not finite.
pub fn floor_div(extent: f64, size: f64) -> usize {
    if size.is_nan() || extent.is_nan() || size <= 0.0 || extent <= 0.0 {
        return 0;
    }
    let q = (extent / size).floor();
    if q.is_finite() {
        q as usize
    } else {
        0
    }
}

/// Returns `ceil(a / b)` for counts, 0 when `b` is 0.
pub fn ceil_div(a: usize, b: usize) -> usize {
    if b == 0 {
        0
    } else {
        a.div_ceil(b)
    }
}

/// Per-axis cell counts of a uniform grid (x = length, y = height, z = width).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridCounts {
    /// Cells along the length.
    pub x: usize,
    /// Cells along the height.
    pub y: usize,
    /// Cells along the width.
    pub z: usize,
}

impl GridCounts {
    /// Computes per-axis counts of `unit` extents inside `container` extents.
    pub fn fit(container: &Vector3<f64>, unit: &Vector3<f64>) -> Self {
        Self {
            x: floor_div(container.x, unit.x),
            y: floor_div(container.y, unit.y),
            z: floor_div(container.z, unit.z),
        }
    }

    /// Returns the number of cells.
    pub fn total(&self) -> usize {
        self.x.saturating_mul(self.y).saturating_mul(self.z)
    }

    /// Returns the number of cells in one horizontal layer.
    pub fn per_layer(&self) -> usize {
        self.x.saturating_mul(self.z)
    }
}

/// Caps a spatial `capacity` so that `count × unit_weight ≤ max_weight`.
///
/// A non-positive or non-finite unit weight leaves the capacity untouched.
pub fn weight_capped_count(capacity: usize, unit_weight: f64, max_weight: f64) -> usize {
    if !unit_weight.is_finite() || unit_weight <= 0.0 {
        return capacity;
    }
    if max_weight == f64::INFINITY {
        return capacity;
    }
    capacity.min(floor_div(max_weight, unit_weight))
}

/// Generates one position per cell, x outermost, then y, then z.
pub fn grid_positions(counts: &GridCounts, extents: &Vector3<f64>, rotation: Rotation) -> Vec<Position> {
    let mut positions = Vec::with_capacity(counts.total());
    for ix in 0..counts.x {
        for iy in 0..counts.y {
            for iz in 0..counts.z {
                positions.push(
                    Position::new(
                        ix as f64 * extents.x,
                        iy as f64 * extents.y,
                        iz as f64 * extents.z,
                    )
                    .with_rotation(rotation),
                );
            }
        }
    }
    positions
}

/// Generates un-rotated positions layer by layer (y outermost, then x,
/// then z), stopping after `limit` cells.
pub fn layered_positions(counts: &GridCounts, extents: &Vector3<f64>, limit: usize) -> Vec<Position> {
    if limit == 0 || counts.total() == 0 {
        return Vec::new();
    }
    let mut positions = Vec::with_capacity(limit.min(counts.total()));
    'layers: for iy in 0..counts.y {
        for ix in 0..counts.x {
            if positions.len() >= limit {
                break 'layers;
            }
            for iz in 0..counts.z {
                if positions.len() >= limit {
                    break 'layers;
                }
                positions.push(Position::new(
                    ix as f64 * extents.x,
                    iy as f64 * extents.y,
                    iz as f64 * extents.z,
                ));
            }
        }
    }
    positions
}

/// Returns `part / whole × 100`, or 0 when the ratio is undefined.
pub fn percent(part: f64, whole: f64) -> f64 {
    if !whole.is_finite() || whole <= 0.0 {
        return 0.0;
    }
    let p = part / whole * 100.0;
    if p.is_finite() {
        p
    } else {
        0.0
    }
}
