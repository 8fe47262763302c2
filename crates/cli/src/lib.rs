//! Calling layer for the loadfit packers.
//!
//! This crate provides:
//! - Free-text dimension parsing ("60x40x30 cm")
//! - Request validation before any packer runs
//! - JSON product and spreadsheet-row input, JSON responses

mod parser;
mod request;
mod runner;

pub use parser::{parse_dimensions, parse_dimensions_strict, parse_leading_number, InputParser, ParseError};
pub use request::{
    ChainRequest, CombineRequest, ContainerRequest, ImportRecord, ImportRow, PackRequest,
    ProductRecord, RequestError, TareArg,
};
pub use runner::{to_json, ChainResponse, CombineResponse, PackResponse, Runner};
