//! # loadfit
//!
//! Load calculator for identical boxes moving through a carton → pallet →
//! container chain, and for mixing several products in one container.
//!
//! This crate provides:
//! - **Grid packing**: how many units of one box fit in another, trying all
//!   six axis-aligned orientations under a weight limit
//! - **Chain capacities**: items per carton, cartons per pallet and pallets
//!   per 20ft / 40ft container
//! - **Product mix**: a greedy quantity selection for several products
//!   sharing one volume and weight budget
//!
//! ## Quick Start
//!
//! ```rust
//! use loadfit::d3::{Container3D, Dimensions, GridPacker, Item3D, Packer};
//!
//! let tile = Item3D::new("tile", 10.0, 10.0, 10.0).with_weight(1.0);
//! let carton = Container3D::new(Dimensions::new(100.0, 100.0, 100.0), 10_000.0);
//!
//! let result = GridPacker::new().pack(&tile, &carton);
//! assert_eq!(result.max_units, 1000);
//! assert_eq!(result.positions.len(), 1000);
//! ```
//!
//! ## Feature Flags
//!
//! - `d3` (default): grid, stage and chain packers
//! - `combination` (default): product-mix selection
//! - `serde`: Serialization support

/// Core types and traits.
pub use loadfit_core as core;

/// Grid, stage and chain packers.
#[cfg(feature = "d3")]
pub use loadfit_d3 as d3;

/// Product-mix selection.
#[cfg(feature = "combination")]
pub use loadfit_combination as combination;

// Re-export commonly used types at root level
pub use loadfit_core::{
    ChainResult, Config, Dimensions, Error, PackingResult, Packer, Result, StageResult, TarePolicy,
};
