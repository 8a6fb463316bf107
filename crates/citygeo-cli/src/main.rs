//! citygeo — Command-line interface for citygeo-core
//!
//! Usage examples
//! --------------
//!
//! - Fetch the default country list into `cities.json`
//!   $ citygeo fetch
//!   $ citygeo fetch --countries EG,JO -o levant.json.gz
//!
//! - Inspect a dataset
//!   $ citygeo stats
//!   $ citygeo -i levant.json.gz cities amman
//!   $ citygeo near 30.04 31.24 --km 25
//!
//! - Render the map
//!   $ citygeo render -o cities_map.html
//!
//! - Try the estimator without any data
//!   $ citygeo estimate --lat 30 --lon 31 --population "50000"
//!
//! Logging goes to stderr and follows `RUST_LOG` when set.
mod args;

use crate::args::{CliArgs, Commands};
use anyhow::Context;
use citygeo_core::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &str) -> anyhow::Result<CityDataset> {
    CityDataset::load_cached(input).with_context(|| format!("loading dataset {input}"))
}

#[cfg(feature = "fetch")]
fn run_fetch(
    countries: Option<String>,
    endpoint: Option<String>,
    timeout: u64,
    output: &str,
) -> anyhow::Result<()> {
    let codes: Vec<String> = match countries {
        Some(list) => list
            .split(',')
            .map(|x| x.trim().to_ascii_uppercase())
            .filter(|x| !x.is_empty())
            .collect(),
        None => MIDDLE_EAST_COUNTRIES.iter().map(|c| c.to_string()).collect(),
    };
    let codes: Vec<&str> = codes.iter().map(String::as_str).collect();

    let mut config = FetchConfig {
        timeout: std::time::Duration::from_secs(timeout),
        ..FetchConfig::default()
    };
    if let Some(url) = endpoint {
        config.endpoint = url;
    }

    let client = OverpassClient::new(config)?;
    let mut collector = CityCollector::new();
    let failed = client.collect(&codes, &mut collector);

    let dataset = collector.finish();
    dataset
        .save_json(output)
        .with_context(|| format!("writing {output}"))?;

    println!(
        "Saved {} cities from {} countries to {output}",
        dataset.city_count(),
        dataset.country_count()
    );
    if failed > 0 {
        eprintln!("{failed} of {} countries failed, see log", codes.len());
    }
    Ok(())
}

#[cfg(not(feature = "fetch"))]
fn run_fetch(
    _countries: Option<String>,
    _endpoint: Option<String>,
    _timeout: u64,
    _output: &str,
) -> anyhow::Result<()> {
    anyhow::bail!("citygeo was built without the 'fetch' feature")
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);
    tracing::debug!(input = %args.input, command = ?args.command, "starting");

    match args.command {
        Commands::Fetch {
            countries,
            endpoint,
            timeout,
            output,
        } => {
            let output = output.unwrap_or(args.input);
            run_fetch(countries, endpoint, timeout, &output)?;
        }

        Commands::Stats => {
            let db = load(&args.input)?;
            let stats = db.stats();
            println!("Dataset statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Cities: {}", stats.cities);
            println!("  With population: {}", stats.with_population);
            for c in db.countries() {
                println!("  {}: {}", c.country_code, c.cities.len());
            }
        }

        Commands::Cities { query } => {
            let db = load(&args.input)?;
            let matches = db.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for (city, country) in matches {
                    println!(
                        "{} ({country}) — pop {}, radius {:.2} km, center {:.4}, {:.4}",
                        city.name,
                        city.population,
                        city.estimated_radius_km,
                        city.center.latitude,
                        city.center.longitude
                    );
                }
            }
        }

        Commands::Near { lat, lon, km } => {
            let db = load(&args.input)?;
            let hits = db.cities_within(GeoPoint::new(lat, lon), km);
            if hits.is_empty() {
                println!("No cities within {km} km of {lat}, {lon}");
            }
            for ((city, country), d) in hits {
                println!("{d:>8.2} km  {} ({country})", city.name);
            }
        }

        Commands::Render {
            output,
            zoom,
            title,
        } => {
            let db = load(&args.input)?;
            let options = MapOptions {
                zoom,
                title,
                ..MapOptions::default()
            };
            write_map(&db, &options, &output).with_context(|| format!("writing {output}"))?;
            println!("Map has been saved as {output}");
        }

        Commands::Estimate {
            lat,
            lon,
            population,
        } => {
            let population = parse_population(&population);
            let point = PlaceGeometry::Point(GeoPoint::new(lat, lon));
            let city = city_from_geometry("estimate", population, &point)
                .context("point geometry always yields a box")?;
            let bbox = city.bounding_box;
            println!("Population: {population}");
            println!(
                "Bounding box: lat {:.5}..{:.5}, lon {:.5}..{:.5}",
                bbox.min_lat, bbox.max_lat, bbox.min_lon, bbox.max_lon
            );
            println!("Covering radius: {:.3} km", city.estimated_radius_km);
        }
    }

    Ok(())
}
