//! Property tests for the grid and stage packers.

use loadfit_core::transform::AABB3D;
use loadfit_d3::{Boundary, Container3D, Dimensions, GridPacker, Item3D, Packer, StagePacker};
use nalgebra::Vector3;
use proptest::prelude::*;

fn extent() -> impl Strategy<Value = f64> + Clone {
    (5u32..=60).prop_map(f64::from)
}

fn container_extent() -> impl Strategy<Value = f64> + Clone {
    (0u32..=200).prop_map(f64::from)
}

fn dims(extent: impl Strategy<Value = f64> + Clone) -> impl Strategy<Value = Dimensions> {
    (extent.clone(), extent.clone(), extent).prop_map(|(l, w, h)| Dimensions::new(l, w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn positions_match_unit_count(
        item in dims(extent()),
        container in dims(container_extent()),
        weight in 0.0f64..20.0,
        max_weight in 0.0f64..2_000.0,
    ) {
        let item = Item3D::from_dimensions("p", item, weight);
        let container = Container3D::new(container, max_weight);

        let grid = GridPacker::new().pack(&item, &container);
        prop_assert_eq!(grid.positions.len(), grid.max_units);

        let stage = StagePacker::new().pack(&item, &container);
        prop_assert_eq!(stage.packing.positions.len(), stage.count());
    }

    #[test]
    fn lowering_weight_limit_never_adds_units(
        item in dims(extent()),
        container in dims(container_extent()),
        weight in 0.1f64..20.0,
        high in 0.0f64..2_000.0,
        factor in 0.0f64..1.0,
    ) {
        let item = Item3D::from_dimensions("p", item, weight);
        let roomy = Container3D::new(container, high);
        let tight = Container3D::new(container, high * factor);
        let packer = GridPacker::new();

        prop_assert!(packer.pack(&item, &tight).max_units <= packer.pack(&item, &roomy).max_units);
        prop_assert!(
            StagePacker::new().pack(&item, &tight).count()
                <= StagePacker::new().pack(&item, &roomy).count()
        );
    }

    #[test]
    fn search_never_loses_to_upright(
        item in dims(extent()),
        container in dims(container_extent()),
    ) {
        let item = Item3D::from_dimensions("p", item, 0.0);
        let container = Container3D::unlimited(container);
        let packer = GridPacker::new();

        let upright = packer.evaluate(&item, &container)[0].units();
        prop_assert!(packer.pack(&item, &container).max_units >= upright);
    }

    #[test]
    fn placed_units_stay_inside_and_apart(
        item in dims((10u32..=40).prop_map(f64::from)),
        container in dims((0u32..=80).prop_map(f64::from)),
    ) {
        let unit = Item3D::from_dimensions("p", item, 1.0);
        let container = Container3D::unlimited(container);
        let packer = GridPacker::new();
        let result = packer.pack(&unit, &container);

        let Some(index) = result.orientation else {
            prop_assert_eq!(result.max_units, 0);
            return Ok(());
        };
        let extents = item.orientations()[index].extents();
        let bounds = AABB3D::new(Vector3::zeros(), container.dimensions().grid_extents());
        let boxes: Vec<AABB3D> = result.positions.iter().map(|p| p.bounding_box(&extents)).collect();

        for (i, a) in boxes.iter().enumerate() {
            prop_assert!(bounds.contains(a, 1e-9));
            for b in boxes.iter().skip(i + 1) {
                prop_assert!(!a.overlaps(b, 1e-9));
            }
        }
    }
}
