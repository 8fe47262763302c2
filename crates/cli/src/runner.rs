//! Runs validated requests against the packers.

use crate::parser::ParseError;
use crate::request::{
    ChainRequest, CombineRequest, ContainerRequest, ImportRecord, ImportRow, PackRequest,
    RequestError,
};
use loadfit_combination::{select_combination, CombinationResult, CombinationSummary};
use loadfit_core::{
    Arrangement, ChainResult, Config, PackingResult, PackingSummary, StageResult,
};
use loadfit_d3::{ChainPacker, Container3D, GridPacker, Item3D, Packer, StagePacker};
use serde::Serialize;
use serde_json::Value;

/// Response to a single packing request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackResponse {
    #[serde(flatten)]
    pub packing: PackingResult,
    /// Rotation of the chosen orientation in whole degrees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_degrees: Option<[i32; 3]>,
    /// Occupied layers, for fixed-orientation packing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<usize>,
    /// Occupied grid extent, for fixed-orientation packing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrangement: Option<Arrangement>,
    pub summary: PackingSummary,
}

fn rotation_degrees(packing: &PackingResult) -> Option<[i32; 3]> {
    packing.positions.first().map(|p| p.rotation.degrees())
}

impl From<PackingResult> for PackResponse {
    fn from(packing: PackingResult) -> Self {
        Self {
            summary: PackingSummary::from(&packing),
            rotation_degrees: rotation_degrees(&packing),
            packing,
            layers: None,
            arrangement: None,
        }
    }
}

impl From<StageResult> for PackResponse {
    fn from(stage: StageResult) -> Self {
        Self {
            summary: PackingSummary::from(&stage.packing),
            rotation_degrees: rotation_degrees(&stage.packing),
            packing: stage.packing,
            layers: Some(stage.layers),
            arrangement: Some(stage.arrangement),
        }
    }
}

/// Response to a chain request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChainResponse {
    #[serde(flatten)]
    pub result: ChainResult,
    /// Item-in-carton layout, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PackingResult>,
}

/// Response to a product-mix request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombineResponse {
    pub combination: Vec<CombinationResult>,
    pub summary: CombinationSummary,
}

/// Executes requests with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    config: Config,
}

impl Runner {
    /// Creates a runner after validating `config`.
    pub fn new(config: Config) -> loadfit_core::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Packs one item type into one container.
    pub fn pack(&self, request: &PackRequest) -> Result<PackResponse, RequestError> {
        request.validate()?;

        let item = Item3D::from_dimensions("item", request.item, request.item_weight);
        let container = Container3D::new(request.container, request.max_weight);

        let response = if request.fixed {
            PackResponse::from(StagePacker::new().pack(&item, &container))
        } else {
            PackResponse::from(GridPacker::new().pack(&item, &container))
        };
        log::info!(
            "{} in {}: {} units, {} space",
            request.item,
            request.container,
            response.packing.max_units,
            response.packing.space_utilization_percent()
        );
        Ok(response)
    }

    /// Computes chain capacities.
    pub fn chain(&self, request: &ChainRequest) -> Result<ChainResponse, RequestError> {
        request.validate()?;

        let (result, layout) = ChainPacker::new(self.config.clone()).pack_chain_with_layout(
            request.item,
            request.carton,
            request.pallet,
            request.item_weight,
            request.carton_max_weight,
            request.pallet_max_weight,
        );

        Ok(ChainResponse {
            result,
            layout: request.layout.then_some(layout),
        })
    }

    /// Loads pallets into a standard container.
    pub fn container(&self, request: &ContainerRequest) -> Result<StageResult, RequestError> {
        request.validate()?;

        let pallet = Item3D::from_dimensions("pallet", request.pallet, request.pallet_weight);
        Ok(StagePacker::new().pack_into_archetype(&pallet, request.archetype))
    }

    /// Selects a product mix.
    pub fn combine(&self, request: &CombineRequest) -> Result<CombineResponse, RequestError> {
        request.validate()?;

        let combination =
            select_combination(&request.products, request.container_volume, request.max_weight);
        let summary =
            CombinationSummary::new(&combination, request.container_volume, request.max_weight);

        Ok(CombineResponse {
            combination,
            summary,
        })
    }

    /// Adds chain capacities to each spreadsheet row.
    ///
    /// Rows with missing dimensions are not packed; they get an `error`
    /// column instead.
    pub fn import(&self, records: Vec<ImportRecord>) -> Vec<ImportRecord> {
        let packer = ChainPacker::new(self.config.clone());

        records
            .into_iter()
            .map(|mut record| {
                let row = ImportRow::from_record(&record);
                match row.validate() {
                    Ok(()) => {
                        let result = packer.pack_chain(
                            row.tile,
                            row.carton,
                            row.pallet,
                            row.tile_weight,
                            row.carton_weight,
                            row.pallet_weight,
                        );
                        record.insert("maxTilesInCarton".into(), result.max_items_in_carton.into());
                        record.insert("maxPacksInPallet".into(), result.max_packs_in_pallet.into());
                        record.insert("maxPalletsIn20ft".into(), result.max_pallets_in_20ft.into());
                        record.insert("maxPalletsIn40ft".into(), result.max_pallets_in_40ft.into());
                    }
                    Err(e) => {
                        log::warn!("row '{}' skipped: {}", row.label(), e);
                        record.insert("error".into(), Value::String(e.to_string()));
                    }
                }
                record
            })
            .collect()
    }
}

/// Serializes a response as JSON.
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ParseError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
