//! # loadfit 3D
//!
//! Grid packing of identical boxes for the loadfit load calculator.
//!
//! This crate provides the orientation-searching [`GridPacker`], the
//! fixed-orientation [`StagePacker`] used for pallets and containers, and
//! the [`ChainPacker`] that combines them into item → carton → pallet →
//! container capacities.

pub mod boundary;
pub mod chain;
pub mod geometry;
pub mod packer;
pub mod packing_utils;
pub mod stage;

// Re-exports
pub use boundary::{ArchetypeSpec, Container3D, ContainerArchetype};
pub use chain::ChainPacker;
pub use geometry::Item3D;
pub use packer::{Candidate, GridPacker};
pub use stage::StagePacker;
pub use loadfit_core::{
    Boundary, ChainResult, Config, Dimensions, Error, Geometry, Packer, PackingResult, Position,
    Result, Rotation, StageResult, TarePolicy,
};
