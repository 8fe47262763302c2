//! loadfit command-line load calculator

use anyhow::Context;
use clap::{Parser, Subcommand};
use loadfit_cli::{
    parse_dimensions, parse_dimensions_strict, to_json, ChainRequest, CombineRequest,
    ContainerRequest, InputParser, PackRequest, ProductRecord, Runner, TareArg,
};
use loadfit_core::{Config, Dimensions};
use loadfit_d3::ContainerArchetype;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "loadfit")]
#[command(about = "Load calculator for cartons, pallets and shipping containers")]
#[command(version)]
struct Cli {
    /// Log packing decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Reject dimension strings with fewer than three numbers
    #[arg(long, global = true)]
    strict: bool,

    /// Write JSON on one line
    #[arg(long, global = true)]
    compact: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack one item type into one container
    Pack {
        /// Item dimensions, e.g. 30x30x1.2
        #[arg(short, long)]
        item: String,

        /// Weight of one item
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Container dimensions
        #[arg(short, long)]
        container: String,

        /// Container weight capacity
        #[arg(short, long)]
        max_weight: f64,

        /// Keep the item upright instead of trying all orientations
        #[arg(long)]
        fixed: bool,
    },

    /// Items per carton, cartons per pallet and pallets per container
    Chain {
        /// Item dimensions
        #[arg(long)]
        item: String,

        /// Master carton dimensions
        #[arg(long)]
        carton: String,

        /// Pallet dimensions
        #[arg(long)]
        pallet: String,

        /// Weight of one item
        #[arg(long)]
        item_weight: f64,

        /// Carton weight capacity
        #[arg(long)]
        carton_weight: f64,

        /// Pallet weight capacity
        #[arg(long)]
        pallet_weight: f64,

        /// What a loaded carton weighs for the pallet limit
        #[arg(long, value_enum, default_value = "contents")]
        tare: TareArg,

        /// Explicit empty-carton weight (overrides --tare)
        #[arg(long)]
        tare_weight: Option<f64>,

        /// Also cap pallets per container by the container payload
        #[arg(long)]
        container_weight: bool,

        /// Include the item-in-carton positions
        #[arg(long)]
        layout: bool,
    },

    /// Load pallets into a standard shipping container
    Container {
        /// Pallet dimensions
        #[arg(short, long)]
        pallet: String,

        /// Weight of one loaded pallet
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Container type (20ft or 40ft)
        #[arg(short, long, default_value = "20ft")]
        archetype: ContainerArchetype,
    },

    /// Choose a product mix for one carton
    Combine {
        /// JSON array of products
        products: PathBuf,

        /// Carton dimensions; the volume is length × width × height
        #[arg(long, conflicts_with = "volume", required_unless_present = "volume")]
        carton: Option<String>,

        /// Raw container volume
        #[arg(long)]
        volume: Option<f64>,

        /// Weight capacity
        #[arg(short, long)]
        max_weight: f64,
    },

    /// Add chain capacities to spreadsheet rows exported as JSON
    Import {
        /// JSON array of rows
        file: PathBuf,

        /// What a loaded carton weighs for the pallet limit
        #[arg(long, value_enum, default_value = "carton")]
        tare: TareArg,

        /// Also cap pallets per container by the container payload
        #[arg(long)]
        container_weight: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let dims = |text: &str| -> anyhow::Result<Dimensions> {
        if cli.strict {
            Ok(parse_dimensions_strict(text)?)
        } else {
            Ok(parse_dimensions(text))
        }
    };
    let pretty = !cli.compact;

    let json = match &cli.command {
        Commands::Pack {
            item,
            weight,
            container,
            max_weight,
            fixed,
        } => {
            let request = PackRequest {
                item: dims(item)?,
                item_weight: *weight,
                container: dims(container)?,
                max_weight: *max_weight,
                fixed: *fixed,
            };
            to_json(&Runner::default().pack(&request)?, pretty)?
        }

        Commands::Chain {
            item,
            carton,
            pallet,
            item_weight,
            carton_weight,
            pallet_weight,
            tare,
            tare_weight,
            container_weight,
            layout,
        } => {
            let config = Config::new()
                .with_tare_policy(tare.policy(*tare_weight))
                .with_container_weight(*container_weight);
            let request = ChainRequest {
                item: dims(item)?,
                carton: dims(carton)?,
                pallet: dims(pallet)?,
                item_weight: *item_weight,
                carton_max_weight: *carton_weight,
                pallet_max_weight: *pallet_weight,
                layout: *layout,
            };
            to_json(&Runner::new(config)?.chain(&request)?, pretty)?
        }

        Commands::Container {
            pallet,
            weight,
            archetype,
        } => {
            let request = ContainerRequest {
                pallet: dims(pallet)?,
                pallet_weight: *weight,
                archetype: *archetype,
            };
            to_json(&Runner::default().container(&request)?, pretty)?
        }

        Commands::Combine {
            products,
            carton,
            volume,
            max_weight,
        } => {
            let records: Vec<ProductRecord> = InputParser::new()
                .load_products(products)
                .with_context(|| format!("reading {}", products.display()))?;
            let container_volume = match (volume, carton) {
                (Some(v), _) => *v,
                (None, Some(text)) => dims(text)?.volume(),
                (None, None) => 0.0,
            };
            let request = CombineRequest {
                products: records
                    .into_iter()
                    .map(ProductRecord::into_product)
                    .collect::<Result<_, _>>()?,
                container_volume,
                max_weight: *max_weight,
            };
            to_json(&Runner::default().combine(&request)?, pretty)?
        }

        Commands::Import {
            file,
            tare,
            container_weight,
        } => {
            let rows = InputParser::new()
                .load_rows(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let config = Config::new()
                .with_tare_policy(tare.policy(None))
                .with_container_weight(*container_weight);
            let count = rows.len();
            let out = Runner::new(config)?.import(rows);
            log::info!("processed {} rows", count);
            to_json(&out, pretty)?
        }
    };

    write_output(&json, cli.output.as_deref())
}

fn write_output(json: &str, path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Results saved to: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
