//! Command implementations for the PSM CLI.
//!
//! Inspects the observations dataset and renders the choropleth map without
//! a browser. Sources are local paths or http(s) URLs.

use clap::Subcommand;
use psm_core::config::{DEFAULT_GEOJSON_SOURCE, DEFAULT_OBSERVATIONS_SOURCE};
use std::path::PathBuf;

pub mod inspect;
pub mod render;
pub mod source;

#[derive(Subcommand)]
pub enum Command {
    /// List every distinct country in the dataset
    Countries {
        /// Observations CSV (path or URL)
        #[arg(long, default_value = DEFAULT_OBSERVATIONS_SOURCE)]
        csv: String,
    },

    /// Print the arms and stability chart specs for one country as JSON
    Country {
        /// Exact country name as it appears in the dataset
        name: String,

        /// Observations CSV (path or URL)
        #[arg(long, default_value = DEFAULT_OBSERVATIONS_SOURCE)]
        csv: String,
    },

    /// Print the paired comparison chart specs for two countries as JSON
    Compare {
        first: String,
        second: String,

        /// Observations CSV (path or URL)
        #[arg(long, default_value = DEFAULT_OBSERVATIONS_SOURCE)]
        csv: String,
    },

    /// Render the choropleth map to a standalone SVG file
    Render {
        /// Observations CSV (path or URL)
        #[arg(long, default_value = DEFAULT_OBSERVATIONS_SOURCE)]
        csv: String,

        /// Country boundaries GeoJSON (path or URL)
        #[arg(long, default_value = DEFAULT_GEOJSON_SOURCE)]
        geojson: String,

        /// Output SVG path
        #[arg(short, long, default_value = "stability-map.svg")]
        out: PathBuf,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Countries { csv } => inspect::run_countries(&csv).await,
        Command::Country { name, csv } => inspect::run_country(&csv, &name).await,
        Command::Compare { first, second, csv } => {
            inspect::run_compare(&csv, &first, &second).await
        }
        Command::Render { csv, geojson, out } => render::run_render(&csv, &geojson, &out).await,
    }
}
