//! Integration tests for loadfit-core.

use loadfit_core::geometry::{Dimensions, ORIENTATION_COUNT};
use loadfit_core::placement::Position;
use loadfit_core::result::{ChainResult, PackingResult, PackingSummary};
use loadfit_core::solver::{Config, TarePolicy};
use loadfit_core::transform::AABB3D;
use nalgebra::Vector3;

mod orientation_tests {
    use super::*;

    #[test]
    fn test_orientations_are_permutations() {
        let dims = Dimensions::new(3.0, 5.0, 7.0);
        let orientations = dims.orientations();
        assert_eq!(orientations.len(), ORIENTATION_COUNT);

        for o in &orientations {
            let mut extents = o.dimensions.as_array();
            extents.sort_by(f64::total_cmp);
            assert_eq!(extents, [3.0, 5.0, 7.0]);
            assert!((o.dimensions.volume() - dims.volume()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_orientations_are_distinct_for_distinct_extents() {
        let orientations = Dimensions::new(3.0, 5.0, 7.0).orientations();
        for (i, a) in orientations.iter().enumerate() {
            for b in orientations.iter().skip(i + 1) {
                assert_ne!(a.dimensions, b.dimensions);
            }
        }
    }

    #[test]
    fn test_rotation_maps_extents() {
        // Rotating the un-rotated box by an orientation's rotation gives a box
        // with the same extents (up to sign) as that orientation.
        let dims = Dimensions::new(3.0, 5.0, 7.0);
        let base = Vector3::new(dims.length, dims.width, dims.height);

        for o in dims.orientations() {
            let rotated = o.rotation.to_rotation3() * base;
            let mut got = [rotated.x.abs(), rotated.y.abs(), rotated.z.abs()];
            got.sort_by(f64::total_cmp);
            assert!((got[0] - 3.0).abs() < 1e-9);
            assert!((got[2] - 7.0).abs() < 1e-9);
        }
    }
}

mod bounding_box_tests {
    use super::*;

    #[test]
    fn test_grid_cells_touch_without_overlap() {
        let extents = Vector3::new(10.0, 5.0, 2.0);
        let a = Position::new(0.0, 0.0, 0.0).bounding_box(&extents);
        let b = Position::new(10.0, 0.0, 0.0).bounding_box(&extents);
        let c = Position::new(5.0, 0.0, 0.0).bounding_box(&extents);

        assert!(!a.overlaps(&b, 1e-9));
        assert!(a.overlaps(&c, 1e-9));

        let container = AABB3D::new(Vector3::zeros(), Vector3::new(20.0, 5.0, 2.0));
        assert!(container.contains(&a, 1e-9));
        assert!(container.contains(&b, 1e-9));
        assert!((container.volume() - a.volume() - b.volume()).abs() < 1e-9);
    }
}

mod result_tests {
    use super::*;

    #[test]
    fn test_summary_of_empty_result() {
        let summary = PackingSummary::from(&PackingResult::new());
        assert_eq!(summary.units, 0);
        assert!(!summary.weight_bound);
    }

    #[test]
    fn test_chain_result_default() {
        let chain = ChainResult::default();
        assert_eq!(chain.items_per_pallet(), 0);
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = Config::new()
            .with_tare_policy(TarePolicy::CartonMaxWeight)
            .with_container_weight(true);
        assert_eq!(config.tare_policy.tare(1.5), 1.5);
        assert!(config.enforce_container_weight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_tare_rejected() {
        let config = Config::new().with_tare_policy(TarePolicy::Explicit(f64::NAN));
        assert!(config.validate().is_err());
    }
}
