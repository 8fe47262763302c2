//! Item → carton → pallet → container capacity chain.
//!
//! Only the first stage searches orientations. Cartons sit upright on the
//! pallet and pallets sit upright in the container, so those stages are a
//! plain per-axis grid count of the un-rotated box.

use crate::boundary::{Container3D, ContainerArchetype};
use crate::geometry::Item3D;
use crate::packer::GridPacker;
use crate::packing_utils::{weight_capped_count, GridCounts};
use loadfit_core::geometry::{Boundary, Dimensions};
use loadfit_core::result::{ChainResult, PackingResult};
use loadfit_core::solver::{Config, Packer};

/// Computes downstream capacities of a packing chain.
#[derive(Debug, Clone, Default)]
pub struct ChainPacker {
    config: Config,
}

impl ChainPacker {
    /// Creates a chain packer with the given configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Computes items per carton, cartons per pallet and pallets per
    /// standard container.
    pub fn pack_chain(
        &self,
        item_dims: Dimensions,
        carton_dims: Dimensions,
        pallet_dims: Dimensions,
        item_weight: f64,
        carton_max_weight: f64,
        pallet_max_weight: f64,
    ) -> ChainResult {
        self.pack_chain_with_layout(
            item_dims,
            carton_dims,
            pallet_dims,
            item_weight,
            carton_max_weight,
            pallet_max_weight,
        )
        .0
    }

    /// Like [`pack_chain`](Self::pack_chain), also returning the
    /// item-in-carton layout.
    pub fn pack_chain_with_layout(
        &self,
        item_dims: Dimensions,
        carton_dims: Dimensions,
        pallet_dims: Dimensions,
        item_weight: f64,
        carton_max_weight: f64,
        pallet_max_weight: f64,
    ) -> (ChainResult, PackingResult) {
        let item = Item3D::from_dimensions("item", item_dims, item_weight);
        let carton = Container3D::new(carton_dims, carton_max_weight);
        let layout = GridPacker::new().pack(&item, &carton);
        let items_in_carton = layout.max_units;

        let carton_weight = items_in_carton as f64 * item_weight
            + self.config.tare_policy.tare(carton_max_weight);
        let pallet_slots =
            GridCounts::fit(&pallet_dims.grid_extents(), &carton_dims.grid_extents()).total();
        let packs_in_pallet = weight_capped_count(pallet_slots, carton_weight, pallet_max_weight);
        if packs_in_pallet < pallet_slots {
            log::debug!(
                "pallet weight {} limits cartons of {} to {} of {} slots",
                pallet_max_weight,
                carton_weight,
                packs_in_pallet,
                pallet_slots
            );
        }

        let pallet_gross = packs_in_pallet as f64 * carton_weight;
        let [twenty, forty] =
            ContainerArchetype::ALL.map(|archetype| self.pallets_in(archetype, pallet_dims, pallet_gross));

        let result = ChainResult {
            max_items_in_carton: items_in_carton,
            max_packs_in_pallet: packs_in_pallet,
            max_pallets_in_20ft: twenty,
            max_pallets_in_40ft: forty,
        };
        log::debug!("chain result: {:?}", result);

        (result, layout)
    }

    fn pallets_in(&self, archetype: ContainerArchetype, pallet_dims: Dimensions, pallet_gross: f64) -> usize {
        let container = archetype.container();
        let slots =
            GridCounts::fit(&container.dimensions().grid_extents(), &pallet_dims.grid_extents()).total();

        if self.config.enforce_container_weight {
            weight_capped_count(slots, pallet_gross, container.max_weight())
        } else {
            slots
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadfit_core::TarePolicy;

    fn dims(l: f64, w: f64, h: f64) -> Dimensions {
        Dimensions::new(l, w, h)
    }

    #[test]
    fn test_pallets_in_archetypes() {
        let result = ChainPacker::default().pack_chain(
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 25.0),
            dims(120.0, 100.0, 150.0),
            0.5,
            30.0,
            1_000.0,
        );
        assert_eq!(result.max_pallets_in_20ft, 8);
        assert_eq!(result.max_pallets_in_40ft, 20);
    }

    #[test]
    fn test_full_chain() {
        let result = ChainPacker::default().pack_chain(
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 20.0),
            dims(120.0, 100.0, 150.0),
            0.5,
            30.0,
            1_000.0,
        );
        // 4 × 3 × 2 items weigh 12 per carton; 3 × 3 × 7 = 63 cartons weigh 756.
        assert_eq!(result.max_items_in_carton, 24);
        assert_eq!(result.max_packs_in_pallet, 63);
        assert_eq!(result.items_per_pallet(), 24 * 63);
    }

    #[test]
    fn test_pallet_weight_cap() {
        let result = ChainPacker::default().pack_chain(
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 20.0),
            dims(120.0, 100.0, 150.0),
            2.0,
            100.0,
            1_000.0,
        );
        // 24 items × 2 = 48 per carton; 1000 / 48 = 20 cartons.
        assert_eq!(result.max_items_in_carton, 24);
        assert_eq!(result.max_packs_in_pallet, 20);
    }

    #[test]
    fn test_tare_policies() {
        let args = (
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 20.0),
            dims(120.0, 100.0, 150.0),
            2.0,
            52.0,
            1_000.0,
        );
        let run = |policy| {
            ChainPacker::new(Config::new().with_tare_policy(policy))
                .pack_chain(args.0, args.1, args.2, args.3, args.4, args.5)
                .max_packs_in_pallet
        };

        assert_eq!(run(TarePolicy::ContentsOnly), 20);
        // 48 + 52 = 100 per carton.
        assert_eq!(run(TarePolicy::CartonMaxWeight), 10);
        // 48 + 2 = 50 per carton.
        assert_eq!(run(TarePolicy::Explicit(2.0)), 20);
    }

    #[test]
    fn test_weightless_items_skip_pallet_cap() {
        let result = ChainPacker::default().pack_chain(
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 20.0),
            dims(120.0, 100.0, 150.0),
            0.0,
            30.0,
            1_000.0,
        );
        assert_eq!(result.max_packs_in_pallet, 63);
    }

    #[test]
    fn test_container_weight_cap_is_opt_in() {
        let args = (
            dims(10.0, 10.0, 10.0),
            dims(40.0, 30.0, 20.0),
            dims(120.0, 100.0, 150.0),
            2.0,
            100.0,
            10_000.0,
        );
        // 63 cartons × 48 = 3024 per pallet.
        let open = ChainPacker::default().pack_chain(args.0, args.1, args.2, args.3, args.4, args.5);
        assert_eq!(open.max_packs_in_pallet, 63);
        assert_eq!(open.max_pallets_in_20ft, 8);
        assert_eq!(open.max_pallets_in_40ft, 20);

        let capped = ChainPacker::new(Config::new().with_container_weight(true))
            .pack_chain(args.0, args.1, args.2, args.3, args.4, args.5);
        // 28 200 / 3024 = 9 (space gives 8), 26 700 / 3024 = 8.
        assert_eq!(capped.max_pallets_in_20ft, 8);
        assert_eq!(capped.max_pallets_in_40ft, 8);
    }

    #[test]
    fn test_layout_matches_count() {
        let (result, layout) = ChainPacker::default().pack_chain_with_layout(
            dims(10.0, 10.0, 30.0),
            dims(30.0, 10.0, 40.0),
            dims(120.0, 100.0, 150.0),
            1.0,
            100.0,
            1_000.0,
        );
        assert_eq!(result.max_items_in_carton, 4);
        assert_eq!(layout.positions.len(), 4);
        assert_eq!(layout.orientation, Some(4));
    }

    #[test]
    fn test_degenerate_chain() {
        let result = ChainPacker::default().pack_chain(
            Dimensions::ZERO,
            Dimensions::ZERO,
            Dimensions::ZERO,
            1.0,
            10.0,
            100.0,
        );
        assert_eq!(result, ChainResult::default());
    }
}
