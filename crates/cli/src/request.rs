//! Request types and the validation that runs before any packer is called.

use crate::parser::{parse_dimensions, parse_leading_number};
use loadfit_combination::Product;
use loadfit_core::{Dimensions, TarePolicy};
use loadfit_d3::ContainerArchetype;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A request rejected before reaching a packer.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("missing required dimensions: {0}")]
    MissingDimensions(String),

    #[error("invalid weight: {0}")]
    InvalidWeight(String),

    #[error("invalid input data: {0}")]
    InvalidInput(String),
}

fn require_dimensions(field: &str, dims: &Dimensions) -> Result<(), RequestError> {
    if dims.validate().is_err() {
        return Err(RequestError::MissingDimensions(format!("{} ({})", field, dims)));
    }
    Ok(())
}

fn require_weight(field: &str, weight: f64) -> Result<(), RequestError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(RequestError::InvalidWeight(format!(
            "{} must be finite and non-negative, got {}",
            field, weight
        )));
    }
    Ok(())
}

fn require_budget(field: &str, budget: f64) -> Result<(), RequestError> {
    if budget.is_nan() || budget <= 0.0 {
        return Err(RequestError::InvalidWeight(format!(
            "{} must be positive, got {}",
            field, budget
        )));
    }
    Ok(())
}

/// Single grid (or fixed-orientation) packing.
#[derive(Debug, Clone, PartialEq)]
pub struct PackRequest {
    pub item: Dimensions,
    pub item_weight: f64,
    pub container: Dimensions,
    pub max_weight: f64,
    /// Keep the item upright instead of searching orientations.
    pub fixed: bool,
}

impl PackRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        require_dimensions("item", &self.item)?;
        require_dimensions("container", &self.container)?;
        require_weight("item weight", self.item_weight)?;
        require_budget("max weight", self.max_weight)
    }
}

/// Item → carton → pallet → container chain.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainRequest {
    pub item: Dimensions,
    pub carton: Dimensions,
    pub pallet: Dimensions,
    pub item_weight: f64,
    pub carton_max_weight: f64,
    pub pallet_max_weight: f64,
    /// Include the item-in-carton positions in the response.
    pub layout: bool,
}

impl ChainRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        require_dimensions("item", &self.item)?;
        require_dimensions("carton", &self.carton)?;
        require_dimensions("pallet", &self.pallet)?;
        require_weight("item weight", self.item_weight)?;
        require_budget("carton weight", self.carton_max_weight)?;
        require_budget("pallet weight", self.pallet_max_weight)
    }
}

/// Pallets into a standard shipping container.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerRequest {
    pub pallet: Dimensions,
    pub pallet_weight: f64,
    pub archetype: ContainerArchetype,
}

impl ContainerRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        require_dimensions("pallet", &self.pallet)?;
        require_weight("pallet weight", self.pallet_weight)
    }
}

/// Product mix for one container.
#[derive(Debug, Clone, PartialEq)]
pub struct CombineRequest {
    pub products: Vec<Product>,
    pub container_volume: f64,
    pub max_weight: f64,
}

impl CombineRequest {
    pub fn validate(&self) -> Result<(), RequestError> {
        if !self.container_volume.is_finite() || self.container_volume <= 0.0 {
            return Err(RequestError::MissingDimensions(format!(
                "container volume {}",
                self.container_volume
            )));
        }
        require_budget("max weight", self.max_weight)?;
        for product in &self.products {
            product
                .validate()
                .map_err(|e| RequestError::InvalidInput(e.to_string()))?;
            // Ranking divides by volume × weight.
            if product.volume <= 0.0 || product.unit_weight <= 0.0 {
                return Err(RequestError::InvalidInput(format!(
                    "'{}' needs a positive volume and unit weight",
                    product.name
                )));
            }
        }
        Ok(())
    }
}

/// One product as written in a products file.
///
/// The unit volume comes from `volume` if given, else from
/// `length × width × height`, else from the `unitCartonDimensions` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    #[serde(alias = "productName")]
    pub name: String,
    pub unit_weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_carton_dimensions: Option<String>,
}

impl ProductRecord {
    /// Converts to a selector product, failing when the record has no
    /// volume source.
    pub fn into_product(self) -> Result<Product, RequestError> {
        let dims = match (self.length, self.width, self.height) {
            (Some(l), Some(w), Some(h)) => Some(Dimensions::new(l, w, h)),
            _ => self.unit_carton_dimensions.as_deref().map(parse_dimensions),
        };

        match (self.volume, dims) {
            (Some(volume), _) => Ok(Product::new(self.name, self.unit_weight, volume)),
            (None, Some(dims)) => Ok(Product::from_dimensions(self.name, self.unit_weight, dims)),
            (None, None) => Err(RequestError::MissingDimensions(format!(
                "product '{}' has no volume, dimensions or unitCartonDimensions",
                self.name
            ))),
        }
    }
}

/// A spreadsheet row as exported to JSON.
///
/// Rows keep every column they arrive with; packing results are added
/// alongside.
pub type ImportRecord = Map<String, Value>;

const TILE_DIMENSIONS: &[&str] = &["tileDimensions", "Tile dimensions"];
const CARTON_DIMENSIONS: &[&str] = &["masterCartonDimensions", "Master carton dimensions"];
const PALLET_DIMENSIONS: &[&str] = &["palletDimensions", "pallet dimensions"];
const TILE_WEIGHT: &[&str] = &["tileWeight", "tile weight"];
const CARTON_WEIGHT: &[&str] = &["masterCartonWeight", "master carton weight"];
const PALLET_WEIGHT: &[&str] = &["palletWeight", "pallet weight"];
const SKU_CODE: &[&str] = &["skuCode", "SKU Code"];
const PRODUCT_NAME: &[&str] = &["productName", "Product name"];

/// Typed view of one spreadsheet row.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRow {
    pub sku_code: Option<String>,
    pub product_name: Option<String>,
    pub tile: Dimensions,
    pub carton: Dimensions,
    pub pallet: Dimensions,
    pub tile_weight: f64,
    pub carton_weight: f64,
    pub pallet_weight: f64,
}

impl ImportRow {
    /// Reads the packing columns of `record`, accepting both the camelCase
    /// and the spreadsheet header spelling of each column.
    ///
    /// Unparseable weights read as 0.
    pub fn from_record(record: &ImportRecord) -> Self {
        let dims = |keys: &[&str]| text_field(record, keys).map_or(Dimensions::ZERO, |s| parse_dimensions(&s));
        let weight = |keys: &[&str]| number_field(record, keys).unwrap_or(0.0);

        Self {
            sku_code: text_field(record, SKU_CODE),
            product_name: text_field(record, PRODUCT_NAME),
            tile: dims(TILE_DIMENSIONS),
            carton: dims(CARTON_DIMENSIONS),
            pallet: dims(PALLET_DIMENSIONS),
            tile_weight: weight(TILE_WEIGHT),
            carton_weight: weight(CARTON_WEIGHT),
            pallet_weight: weight(PALLET_WEIGHT),
        }
    }

    /// Returns a label for log messages.
    pub fn label(&self) -> &str {
        self.sku_code
            .as_deref()
            .or(self.product_name.as_deref())
            .unwrap_or("<unnamed>")
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        require_dimensions("tile", &self.tile)?;
        require_dimensions("master carton", &self.carton)?;
        require_dimensions("pallet", &self.pallet)
    }
}

fn lookup<'a>(record: &'a ImportRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| match record.get(*key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.trim().is_empty() => None,
        Some(value) => Some(value),
    })
}

fn text_field(record: &ImportRecord, keys: &[&str]) -> Option<String> {
    match lookup(record, keys)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn number_field(record: &ImportRecord, keys: &[&str]) -> Option<f64> {
    let value = match lookup(record, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_leading_number(s),
        _ => None,
    }?;
    value.is_finite().then_some(value)
}

/// Tare choice for the pallet stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TareArg {
    /// Contents only.
    #[default]
    Contents,
    /// Contents plus the carton weight.
    Carton,
}

impl TareArg {
    /// Resolves the policy; an explicit tare weight overrides the choice.
    pub fn policy(self, explicit: Option<f64>) -> TarePolicy {
        match (explicit, self) {
            (Some(w), _) => TarePolicy::Explicit(w),
            (None, Self::Contents) => TarePolicy::ContentsOnly,
            (None, Self::Carton) => TarePolicy::CartonMaxWeight,
        }
    }
}
