//! Command-line front end for area place discovery.
//!
//! Prints results as JSON on stdout; logs go to stderr.

use std::fs;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use placegrid::grid::sample_points;
use placegrid::{BoundingBox, Category, Config, GoogleMapsClient, LatLng, Place, PlaceFinder};

#[derive(Parser, Debug)]
#[command(name = "placegrid")]
#[command(about = "Find the places of a category inside a named area")]
struct Args {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Response language (overrides the config file)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Abort the whole run after this many seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search an area for places
    Search {
        /// Area name, e.g. "Springfield"
        area: String,

        /// Place type to search for; "*" or "any" for every type
        #[arg(short = 't', long = "type", default_value = "*")]
        category: Category,

        /// Keep only places whose address names the area
        #[arg(long)]
        confirm: bool,
    },

    /// Confirm previously found places against an area name
    Confirm {
        /// Area name the places must belong to
        area: String,

        /// JSON file holding an array of places
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the sample points for a bounding box (no network access)
    Grid {
        #[arg(allow_hyphen_values = true)]
        sw_lat: f64,
        #[arg(allow_hyphen_values = true)]
        sw_lng: f64,
        #[arg(allow_hyphen_values = true)]
        ne_lat: f64,
        #[arg(allow_hyphen_values = true)]
        ne_lng: f64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(language) = args.language {
        config.language = language;
    }

    match args.command {
        Command::Grid {
            sw_lat,
            sw_lng,
            ne_lat,
            ne_lng,
        } => {
            let bbox = BoundingBox::new(LatLng::new(sw_lat, sw_lng), LatLng::new(ne_lat, ne_lng));
            print_json(&sample_points(&bbox))
        }
        Command::Search {
            area,
            category,
            confirm,
        } => {
            let finder = connect(&config)?;
            with_timeout(args.timeout, async {
                let places = finder
                    .places_by_type(&area, &category)
                    .await
                    .with_context(|| format!("Search in '{}' failed", area))?;

                if confirm {
                    let confirmed = finder
                        .confirm_places(places, &area)
                        .await
                        .context("Confirmation failed")?;
                    print_json(&confirmed)
                } else {
                    print_json(&places)
                }
            })
            .await
        }
        Command::Confirm { area, input } => {
            let content = fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let places: Vec<Place> =
                serde_json::from_str(&content).context("Failed to parse places file")?;
            info!("Loaded {} places from {}", places.len(), input.display());

            let finder = connect(&config)?;
            with_timeout(args.timeout, async {
                let confirmed = finder
                    .confirm_places(places, &area)
                    .await
                    .context("Confirmation failed")?;
                print_json(&confirmed)
            })
            .await
        }
    }
}

fn connect(config: &Config) -> Result<PlaceFinder<GoogleMapsClient>> {
    if config.has_placeholder_key() {
        warn!(
            "No API key configured (set {}); requests will be rejected",
            placegrid::config::API_KEY_ENV
        );
    }
    let client = GoogleMapsClient::new(config)?;
    Ok(PlaceFinder::new(client, &config.language))
}

async fn with_timeout<F>(secs: Option<u64>, run: F) -> Result<()>
where
    F: Future<Output = Result<()>>,
{
    match secs {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), run)
            .await
            .with_context(|| format!("Timed out after {}s", secs))?,
        None => run.await,
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
