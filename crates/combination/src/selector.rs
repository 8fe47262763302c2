//! Greedy product-mix selection.
//!
//! Products are ranked by [`Product::efficiency`]. A seed pass admits one
//! unit of every product that fits on its own, in rank order; fill passes
//! then add one unit of each admitted product per sweep until a sweep adds
//! nothing. A product that does not fit during the seed pass is never
//! reconsidered.

use crate::product::Product;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Quantity chosen for one product.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombinationResult {
    /// The product.
    pub product: Product,
    /// Units selected, at least 1.
    pub quantity: usize,
    /// Weight of all selected units.
    pub total_weight: f64,
    /// Volume of all selected units.
    pub total_volume: f64,
}

impl CombinationResult {
    fn seed(product: Product) -> Self {
        Self {
            quantity: 1,
            total_weight: product.unit_weight,
            total_volume: product.volume,
            product,
        }
    }

    fn add_unit(&mut self) {
        self.quantity += 1;
        self.total_weight += self.product.unit_weight;
        self.total_volume += self.product.volume;
    }
}

/// Remaining volume and weight of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Budget {
    /// Remaining volume.
    pub volume: f64,
    /// Remaining weight.
    pub weight: f64,
}

impl Budget {
    /// Creates a budget.
    pub fn new(volume: f64, weight: f64) -> Self {
        Self { volume, weight }
    }

    /// Returns true if one more unit of `product` fits.
    pub fn admits(&self, product: &Product) -> bool {
        product.volume <= self.volume && product.unit_weight <= self.weight
    }

    fn take(&mut self, product: &Product) {
        self.volume -= product.volume;
        self.weight -= product.unit_weight;
    }
}

/// Chooses how many units of each product to load into a container with
/// `container_volume` space and `max_weight` capacity.
///
/// Only products with at least one unit are returned, in efficiency order.
/// Equal efficiencies keep their input order. Products with no footprint
/// are skipped.
pub fn select_combination(
    products: &[Product],
    container_volume: f64,
    max_weight: f64,
) -> Vec<CombinationResult> {
    let mut ranked: Vec<&Product> = products
        .iter()
        .filter(|p| {
            let keep = p.has_footprint();
            if !keep {
                log::warn!("skipping '{}': it uses no volume or weight", p.name);
            }
            keep
        })
        .collect();
    ranked.sort_by(|a, b| b.efficiency().total_cmp(&a.efficiency()));

    let mut budget = Budget::new(container_volume, max_weight);
    let mut selected = Vec::new();

    for product in ranked {
        if budget.admits(product) {
            budget.take(product);
            selected.push(CombinationResult::seed(product.clone()));
        } else {
            log::debug!("'{}' does not fit on its own, excluded", product.name);
        }
    }

    let mut sweeps = 0usize;
    loop {
        let mut added = false;
        for entry in selected.iter_mut() {
            if budget.admits(&entry.product) {
                budget.take(&entry.product);
                entry.add_unit();
                added = true;
            }
        }
        if !added {
            break;
        }
        sweeps += 1;
    }

    log::debug!(
        "selected {} products after {} fill sweeps, {} volume and {} weight left",
        selected.len(),
        sweeps,
        budget.volume,
        budget.weight
    );

    selected
}

/// Totals of a selection against its container budget.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CombinationSummary {
    /// Units over all products.
    pub total_units: usize,
    /// Volume over all products.
    pub total_volume: f64,
    /// Weight over all products.
    pub total_weight: f64,
    /// Selected volume as a percentage of the container volume.
    pub volume_utilization: f64,
    /// Selected weight as a percentage of the weight capacity.
    pub weight_utilization: f64,
}

impl CombinationSummary {
    /// Sums `results` and relates them to the container budget.
    pub fn new(results: &[CombinationResult], container_volume: f64, max_weight: f64) -> Self {
        let total_volume: f64 = results.iter().map(|r| r.total_volume).sum();
        let total_weight: f64 = results.iter().map(|r| r.total_weight).sum();

        Self {
            total_units: results.iter().map(|r| r.quantity).sum(),
            total_volume,
            total_weight,
            volume_utilization: ratio_percent(total_volume, container_volume),
            weight_utilization: ratio_percent(total_weight, max_weight),
        }
    }
}

fn ratio_percent(part: f64, whole: f64) -> f64 {
    if whole.is_finite() && whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}
