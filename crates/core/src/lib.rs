//! # loadfit Core
//!
//! Core types shared by the loadfit packers.
//!
//! loadfit answers "how many identical boxes fit in this box" for the
//! unit → carton → pallet → container chain, under volume and weight
//! limits, and returns a layout that renderers can draw.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Dimensions`], the fixed six-entry [`Orientation`] table,
//!   and the [`Geometry`] / [`Boundary`] traits
//! - **Placement**: [`Position`] and [`Rotation`] of each placed unit
//! - **Results**: [`PackingResult`], [`StageResult`], [`ChainResult`]
//! - **Packer trait**: [`Packer`], implemented by the grid and stage packers
//! - **Configuration**: [`Config`] and [`TarePolicy`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;
pub mod transform;

// Re-exports
pub use error::{Error, Result};
pub use geometry::{Boundary, Dimensions, Geometry, GeometryId, Orientation, ORIENTATION_COUNT};
pub use placement::{Position, Rotation};
pub use result::{Arrangement, ChainResult, PackingResult, PackingSummary, StageResult};
pub use solver::{Config, Packer, TarePolicy};
pub use transform::AABB3D;
