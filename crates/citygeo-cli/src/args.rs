use clap::{ArgAction, Parser, Subcommand};

/// CLI arguments for citygeo-cli
#[derive(Debug, Parser)]
#[command(
    name = "citygeo",
    version,
    about = "Fetch OSM cities, estimate their extent, and map them"
)]
pub struct CliArgs {
    /// Dataset to read (JSON or JSON.gz). Also the default output of `fetch`.
    #[arg(short = 'i', long = "input", global = true, default_value = "cities.json")]
    pub input: String,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Query Overpass for cities and write the dataset
    Fetch {
        /// Comma-separated ISO2 codes (default: the Middle East list)
        #[arg(short = 'c', long = "countries")]
        countries: Option<String>,

        /// Overpass interpreter URL
        #[arg(long = "endpoint")]
        endpoint: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long = "timeout", default_value_t = 180)]
        timeout: u64,

        /// Output path (defaults to --input)
        #[arg(short = 'o', long = "output")]
        output: Option<String>,
    },

    /// Show a summary of the dataset
    Stats,

    /// Search for cities containing a substring
    Cities {
        /// Substring to search (case- and accent-insensitive)
        query: String,
    },

    /// List cities whose center lies near a point
    Near {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Search radius in km
        #[arg(long = "km", default_value_t = 50.0)]
        km: f64,
    },

    /// Write an interactive HTML map
    Render {
        #[arg(short = 'o', long = "output", default_value = "cities_map.html")]
        output: String,
        #[arg(long = "zoom", default_value_t = 5)]
        zoom: u8,
        #[arg(long = "title", default_value = "Cities")]
        title: String,
    },

    /// Estimate the box and radius of a point-only city
    Estimate {
        #[arg(long = "lat", allow_negative_numbers = true)]
        lat: f64,
        #[arg(long = "lon", allow_negative_numbers = true)]
        lon: f64,
        /// Raw population text, e.g. "1,234,567"
        #[arg(long = "population", default_value = "")]
        population: String,
    },
}
