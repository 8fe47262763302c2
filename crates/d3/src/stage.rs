//! Fixed-orientation stage packer for cartons on pallets and pallets in
//! containers.
//!
//! Loads are kept upright: the item's own length, width and height are laid
//! against the container's, with no orientation search. When the full grid
//! is too heavy the count drops to what the weight budget allows, and the
//! layout is filled from the bottom layer up.

use crate::boundary::ContainerArchetype;
use crate::packing_utils::{ceil_div, layered_positions, percent, weight_capped_count, GridCounts};
use loadfit_core::geometry::{Boundary, Geometry};
use loadfit_core::result::{Arrangement, PackingResult, StageResult};
use loadfit_core::solver::Packer;

/// Packs upright loads layer by layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct StagePacker;

impl StagePacker {
    /// Creates a stage packer.
    pub fn new() -> Self {
        Self
    }

    /// Packs `item` into a standard shipping container, using the
    /// archetype's payload as the weight limit.
    pub fn pack_into_archetype<G: Geometry>(&self, item: &G, archetype: ContainerArchetype) -> StageResult {
        self.pack(item, &archetype.container())
    }
}

impl Packer for StagePacker {
    type Output = StageResult;

    fn pack<G: Geometry, B: Boundary>(&self, item: &G, container: &B) -> StageResult {
        let extents = item.dimensions().grid_extents();
        let counts = GridCounts::fit(&container.dimensions().grid_extents(), &extents);
        let capacity = counts.total();

        let count = if capacity as f64 * item.weight() > container.max_weight() {
            let capped = weight_capped_count(capacity, item.weight(), container.max_weight());
            log::debug!(
                "'{}': weight limit {} reduces {} slots to {}",
                item.id(),
                container.max_weight(),
                capacity,
                capped
            );
            capped
        } else {
            capacity
        };

        let total_weight = count as f64 * item.weight();
        let packing = PackingResult {
            max_units: count,
            total_weight,
            space_utilization: percent(count as f64 * item.volume(), container.volume()),
            weight_utilization: percent(total_weight, container.max_weight()),
            positions: layered_positions(&counts, &extents, count),
            orientation: (count > 0).then_some(0),
        };

        let layers = counts.y.min(ceil_div(count, counts.per_layer()));
        let arrangement = Arrangement {
            rows: counts.x.min(ceil_div(count, counts.y.saturating_mul(counts.z))),
            columns: counts.z.min(ceil_div(count, counts.x.saturating_mul(counts.y))),
            layers,
        };

        StageResult {
            packing,
            layers,
            arrangement,
        }
    }
}
