//! Packing result representation.

use crate::placement::Position;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of packing one item type into one container.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackingResult {
    /// Number of units placed.
    pub max_units: usize,

    /// Weight of all placed units.
    pub total_weight: f64,

    /// Placed raw volume as a percentage of the container volume.
    pub space_utilization: f64,

    /// Placed weight as a percentage of the container weight capacity.
    pub weight_utilization: f64,

    /// One entry per placed unit, in generation order.
    pub positions: Vec<Position>,

    /// Index of the winning orientation, if any unit was placed.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub orientation: Option<usize>,
}

impl PackingResult {
    /// Creates an empty result (nothing fits).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no unit was placed.
    pub fn is_empty(&self) -> bool {
        self.max_units == 0
    }

    /// Returns the number of generated positions.
    pub fn placed_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns space utilization as a percentage string.
    pub fn space_utilization_percent(&self) -> String {
        format!("{:.1}%", self.space_utilization)
    }

    /// Returns weight utilization as a percentage string.
    pub fn weight_utilization_percent(&self) -> String {
        format!("{:.1}%", self.weight_utilization)
    }
}

/// How stacked units are arranged in a fixed-orientation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arrangement {
    /// Occupied cells along the length.
    pub rows: usize,
    /// Occupied cells along the width.
    pub columns: usize,
    /// Occupied layers along the height.
    pub layers: usize,
}

/// Result of a fixed-orientation stage (cartons on a pallet, pallets in a
/// container).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StageResult {
    /// Counts, weights, utilizations and positions.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub packing: PackingResult,

    /// Number of occupied layers.
    pub layers: usize,

    /// Occupied extent of the grid.
    pub arrangement: Arrangement,
}

impl StageResult {
    /// Returns the number of units placed.
    pub fn count(&self) -> usize {
        self.packing.max_units
    }
}

/// Downstream capacities of an item → carton → pallet → container chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ChainResult {
    /// Items per carton (best orientation, weight-capped).
    pub max_items_in_carton: usize,
    /// Cartons per pallet (upright, weight-capped).
    pub max_packs_in_pallet: usize,
    /// Pallets per 20ft container.
    #[cfg_attr(feature = "serde", serde(rename = "maxPalletsIn20ft"))]
    pub max_pallets_in_20ft: usize,
    /// Pallets per 40ft container.
    #[cfg_attr(feature = "serde", serde(rename = "maxPalletsIn40ft"))]
    pub max_pallets_in_40ft: usize,
}

impl ChainResult {
    /// Items that fit in one fully loaded pallet.
    pub fn items_per_pallet(&self) -> usize {
        self.max_items_in_carton
            .saturating_mul(self.max_packs_in_pallet)
    }
}

/// Summary numbers handed to advisory/reporting collaborators.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PackingSummary {
    /// Units placed.
    pub units: usize,
    /// Total weight placed.
    pub total_weight: f64,
    /// Space utilization percentage.
    pub space_utilization: f64,
    /// Weight utilization percentage.
    pub weight_utilization: f64,
    /// Whether weight, not space, is the tighter constraint.
    pub weight_bound: bool,
}

impl From<&PackingResult> for PackingSummary {
    fn from(result: &PackingResult) -> Self {
        Self {
            units: result.max_units,
            total_weight: result.total_weight,
            space_utilization: result.space_utilization,
            weight_utilization: result.weight_utilization,
            weight_bound: result.weight_utilization > result.space_utilization,
        }
    }
}
