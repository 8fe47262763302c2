//! Packer trait and configuration.

use crate::geometry::{Boundary, Geometry};
use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the weight of one loaded carton is computed when capping cartons
/// per pallet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TarePolicy {
    /// Contents only: `items × item weight`.
    #[default]
    ContentsOnly,
    /// Contents plus the carton's own weight field, as the spreadsheet
    /// import computes it.
    CartonMaxWeight,
    /// Contents plus an explicit tare weight.
    Explicit(f64),
}

impl TarePolicy {
    /// Returns the tare added to the contents weight.
    pub fn tare(&self, carton_max_weight: f64) -> f64 {
        match self {
            Self::ContentsOnly => 0.0,
            Self::CartonMaxWeight => carton_max_weight,
            Self::Explicit(w) => *w,
        }
    }
}

/// Configuration for the multi-stage packers.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Carton weight semantics for the pallet stage.
    pub tare_policy: TarePolicy,

    /// Whether pallets per container are capped by the container payload.
    pub enforce_container_weight: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tare policy.
    pub fn with_tare_policy(mut self, policy: TarePolicy) -> Self {
        self.tare_policy = policy;
        self
    }

    /// Enables or disables the container payload cap.
    pub fn with_container_weight(mut self, enforce: bool) -> Self {
        self.enforce_container_weight = enforce;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if let TarePolicy::Explicit(w) = self.tare_policy {
            if !w.is_finite() || w < 0.0 {
                return Err(Error::ConfigError(format!(
                    "tare weight must be finite and non-negative, got {}",
                    w
                )));
            }
        }
        Ok(())
    }
}

/// Trait for single-item, single-container packers.
///
/// Implementations are pure: the same inputs always produce the same
/// output and nothing is retained between calls.
pub trait Packer {
    /// The result type produced by this packer.
    type Output;

    /// Packs as many units of `item` into `container` as fit.
    fn pack<G: Geometry, B: Boundary>(&self, item: &G, container: &B) -> Self::Output;
}
