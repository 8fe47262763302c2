//! Grid packer: best axis-aligned orientation of one item type on a
//! uniform grid inside one container.

use crate::packing_utils::{grid_positions, percent, GridCounts};
use loadfit_core::geometry::{Boundary, Geometry, Orientation, ORIENTATION_COUNT};
use loadfit_core::solver::Packer;
use loadfit_core::PackingResult;

/// One evaluated orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The orientation evaluated.
    pub orientation: Orientation,
    /// Grid cells along each container axis.
    pub counts: GridCounts,
    /// Weight of a full grid in this orientation.
    pub total_weight: f64,
    /// Whether the full grid respects the container weight limit.
    pub within_weight: bool,
}

impl Candidate {
    /// Returns the number of units in the grid.
    pub fn units(&self) -> usize {
        self.counts.total()
    }
}

/// Packs identical boxes on a gapless grid, trying all six orientations.
///
/// The orientation with the most units that stays within the weight limit
/// wins; ties go to the earlier orientation in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridPacker;

impl GridPacker {
    /// Creates a grid packer.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates every orientation of `item` in `container`, in table order.
    pub fn evaluate<G: Geometry, B: Boundary>(
        &self,
        item: &G,
        container: &B,
    ) -> [Candidate; ORIENTATION_COUNT] {
        let bounds = container.dimensions().grid_extents();
        let weight = item.weight();
        let max_weight = container.max_weight();

        item.dimensions().orientations().map(|orientation| {
            let counts = GridCounts::fit(&bounds, &orientation.extents());
            let total_weight = counts.total() as f64 * weight;
            Candidate {
                orientation,
                counts,
                total_weight,
                within_weight: total_weight <= max_weight,
            }
        })
    }

    /// Returns the winning candidate, or `None` if nothing fits.
    pub fn best<G: Geometry, B: Boundary>(&self, item: &G, container: &B) -> Option<Candidate> {
        self.evaluate(item, container)
            .into_iter()
            .filter(|c| c.within_weight)
            .fold(None, |best: Option<Candidate>, candidate| {
                let current = best.as_ref().map_or(0, Candidate::units);
                if candidate.units() > current {
                    Some(candidate)
                } else {
                    best
                }
            })
    }
}

impl Packer for GridPacker {
    type Output = PackingResult;

    fn pack<G: Geometry, B: Boundary>(&self, item: &G, container: &B) -> PackingResult {
        if container.volume() <= 0.0 {
            log::warn!(
                "container {} has no volume, nothing fits",
                container.dimensions()
            );
        }

        let Some(best) = self.best(item, container) else {
            log::debug!(
                "no orientation of '{}' fits in {}",
                item.id(),
                container.dimensions()
            );
            return PackingResult::new();
        };

        let max_units = best.units();
        let positions = grid_positions(
            &best.counts,
            &best.orientation.extents(),
            best.orientation.rotation,
        );

        log::debug!(
            "'{}': orientation {} gives {}x{}x{} = {} units",
            item.id(),
            best.orientation.index,
            best.counts.x,
            best.counts.y,
            best.counts.z,
            max_units
        );

        PackingResult {
            max_units,
            total_weight: best.total_weight,
            space_utilization: percent(max_units as f64 * item.volume(), container.volume()),
            weight_utilization: percent(best.total_weight, container.max_weight()),
            positions,
            orientation: Some(best.orientation.index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::Container3D;
    use crate::geometry::Item3D;
    use approx::assert_relative_eq;
    use loadfit_core::{Dimensions, Rotation};
    use std::f64::consts::FRAC_PI_2;

    fn container(l: f64, w: f64, h: f64, max_weight: f64) -> Container3D {
        Container3D::new(Dimensions::new(l, w, h), max_weight)
    }

    #[test]
    fn test_cube_in_cube() {
        let item = Item3D::new("cube", 10.0, 10.0, 10.0).with_weight(1.0);
        let result = GridPacker::new().pack(&item, &container(100.0, 100.0, 100.0, 10_000.0));

        assert_eq!(result.max_units, 1000);
        assert_eq!(result.positions.len(), 1000);
        assert_relative_eq!(result.total_weight, 1000.0);
        assert_relative_eq!(result.space_utilization, 100.0);
        assert_relative_eq!(result.weight_utilization, 10.0);
        assert_eq!(result.orientation, Some(0));
    }

    #[test]
    fn test_always_six_candidates() {
        let item = Item3D::new("bar", 50.0, 10.0, 10.0);
        let candidates = GridPacker::new().evaluate(&item, &container(60.0, 60.0, 60.0, 100.0));
        assert_eq!(candidates.len(), 6);
        let indices: Vec<usize> = candidates.iter().map(|c| c.orientation.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_rotation_beats_upright() {
        // Upright the 30-high item stacks once (3 units); laid down it stacks four high.
        let item = Item3D::new("tall", 10.0, 10.0, 30.0).with_weight(1.0);
        let carton = container(30.0, 10.0, 40.0, 100.0);
        let packer = GridPacker::new();

        let upright = packer.evaluate(&item, &carton)[0].units();
        let result = packer.pack(&item, &carton);

        assert_eq!(upright, 3);
        assert_eq!(result.max_units, 4);
        assert_eq!(result.orientation, Some(4));
        assert_eq!(result.positions[0].rotation, Rotation::new(0.0, 0.0, FRAC_PI_2));
    }

    #[test]
    fn test_tie_goes_to_first_orientation() {
        let item = Item3D::new("slab", 10.0, 20.0, 10.0).with_weight(1.0);
        let result = GridPacker::new().pack(&item, &container(40.0, 40.0, 40.0, 1_000.0));
        // All orientations give 32 units, the un-rotated one is kept.
        assert_eq!(result.max_units, 32);
        assert_eq!(result.orientation, Some(0));
        assert!(result.positions.iter().all(|p| p.rotation == Rotation::IDENTITY));
    }

    #[test]
    fn test_weight_limit_rejects_orientations() {
        // Lying down gives 3 units, upright gives 2.
        let item = Item3D::new("brick", 10.0, 10.0, 20.0).with_weight(10.0);
        let packer = GridPacker::new();

        let roomy = packer.pack(&item, &container(20.0, 10.0, 30.0, 100.0));
        assert_eq!(roomy.max_units, 3);
        assert_eq!(roomy.orientation, Some(4));

        let tight = packer.pack(&item, &container(20.0, 10.0, 30.0, 25.0));
        assert_eq!(tight.max_units, 2);
        assert_eq!(tight.orientation, Some(0));
        assert_relative_eq!(tight.total_weight, 20.0);
        assert_relative_eq!(tight.weight_utilization, 80.0);
        assert_eq!(tight.positions.len(), tight.max_units);
    }

    #[test]
    fn test_weight_limit_can_empty_result() {
        let item = Item3D::new("heavy", 10.0, 10.0, 10.0).with_weight(50.0);
        let result = GridPacker::new().pack(&item, &container(20.0, 20.0, 20.0, 100.0));
        assert_eq!(result.max_units, 0);
        assert!(result.positions.is_empty());
        assert_eq!(result.orientation, None);
    }

    #[test]
    fn test_zero_max_weight() {
        let item = Item3D::new("unit", 10.0, 10.0, 10.0).with_weight(1.0);
        let result = GridPacker::new().pack(&item, &container(100.0, 100.0, 100.0, 0.0));
        assert_eq!(result.max_units, 0);
        assert!(result.positions.is_empty());
        assert_eq!(result.weight_utilization, 0.0);
    }

    #[test]
    fn test_degenerate_item() {
        let item = Item3D::new("nothing", 0.0, 0.0, 0.0).with_weight(1.0);
        let result = GridPacker::new().pack(&item, &container(100.0, 100.0, 100.0, 1_000.0));
        assert_eq!(result, PackingResult::new());
    }

    #[test]
    fn test_degenerate_container() {
        let item = Item3D::new("unit", 10.0, 10.0, 10.0).with_weight(1.0);
        let result = GridPacker::new().pack(&item, &container(100.0, 0.0, 100.0, 1_000.0));
        assert_eq!(result.max_units, 0);
        assert_eq!(result.space_utilization, 0.0);
    }

    #[test]
    fn test_positions_follow_oriented_grid() {
        let item = Item3D::new("box", 20.0, 10.0, 5.0).with_weight(0.0);
        let result = GridPacker::new().pack(&item, &container(40.0, 10.0, 5.0, 1.0));

        assert_eq!(result.max_units, 2);
        let xs: Vec<f64> = result.positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 20.0]);
    }

    #[test]
    fn test_utilization_uses_raw_volume() {
        let item = Item3D::new("box", 30.0, 20.0, 10.0).with_weight(1.0);
        let carton = container(60.0, 40.0, 25.0, 100.0);
        let result = GridPacker::new().pack(&item, &carton);

        let expected = result.max_units as f64 * 6000.0 / 60_000.0 * 100.0;
        assert_relative_eq!(result.space_utilization, expected, epsilon = 1e-9);
    }
}
