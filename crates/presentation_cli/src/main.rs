//! FleetEmit CLI
//!
//! Resolves fleet trips from a CSV file into route distances and
//! well-to-wheel emissions, with debugging subcommands for each stage.

#![allow(clippy::print_stdout)]

mod csv_io;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use application::services::TripPipeline;
use clap::{Parser, Subcommand, ValueEnum};
use domain::entities::BatchSummary;
use domain::text::parse_coordinate;
use domain::value_objects::{Coordinate, TravelProfile};
use infrastructure::{AppConfig, build_pipeline, init_logging};
use tracing::info;

/// FleetEmit CLI
#[derive(Parser)]
#[command(name = "fleetemit-cli")]
#[command(author, version, about = "Fleet route distance and emission estimator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./fleetemit.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Flags taking precedence over loaded configuration
#[derive(clap::Args, Debug, Default)]
struct Overrides {
    /// Routing profile
    #[arg(long, global = true, value_parser = parse_profile)]
    profile: Option<TravelProfile>,

    /// ISO country code restricting geocoding ("" disables the bias)
    #[arg(long, global = true)]
    country: Option<String>,

    /// City hint used when none is detected in the row text
    #[arg(long, global = true)]
    city_hint: Option<String>,

    /// Rows processed concurrently
    #[arg(long, global = true)]
    concurrency: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a trip CSV
    ///
    /// Required columns: "Type of Asset", "Type of vehicle", "Location",
    /// "Type of fuel".
    /// Example: fleetemit-cli run trips.csv --output results.csv
    Run {
        /// Input CSV file
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },

    /// Resolve a place name to a coordinate
    Geocode {
        /// Place text
        text: String,
    },

    /// Route between two places or "lat, lon" pairs
    Route {
        /// Start place
        from: String,

        /// End place
        to: String,
    },

    /// Parse inline coordinates without contacting the backend
    Parse {
        /// Text to parse
        text: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

fn parse_profile(value: &str) -> Result<TravelProfile, String> {
    value.parse()
}

/// Determine log filter from verbosity count; `None` keeps the configured filter
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

impl Overrides {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(profile) = self.profile {
            config.routing.profile = profile;
        }
        if let Some(country) = &self.country {
            config.geocoding.country_bias.clone_from(country);
        }
        if let Some(hint) = &self.city_hint {
            config.geocoding.city_hint.clone_from(hint);
        }
        if let Some(concurrency) = self.concurrency {
            config.pipeline.concurrency = concurrency;
        }
    }
}

async fn run_batch(
    pipeline: &TripPipeline,
    input: &Path,
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("cannot open {}", input.display()))?;
    let rows = csv_io::read_trip_rows(BufReader::new(file))
        .with_context(|| format!("cannot read {}", input.display()))?;
    info!(rows = rows.len(), input = %input.display(), "Processing trips");

    let results = pipeline.resolve_batch(&rows).await;
    let summary = BatchSummary::from_results(&results);

    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("cannot create {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    match format {
        OutputFormat::Csv => csv_io::write_csv(&mut writer, &results)?,
        OutputFormat::Json => csv_io::write_json(&mut writer, &results, &summary)?,
    }
    writer.flush()?;

    info!(
        total = summary.total_rows,
        succeeded = summary.succeeded,
        geocoding_failures = summary.geocoding_failures,
        routing_failures = summary.routing_failures,
        total_emissions_kg = summary.total_emissions_kg(),
        "Batch finished"
    );

    if let Some(path) = output {
        print_summary(&summary);
        println!("📁 Results written to {}", path.display());
    }
    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    println!("🚚 Trips: {} ({} resolved)", summary.total_rows, summary.succeeded);
    if summary.geocoding_failures + summary.routing_failures > 0 {
        println!(
            "⚠️  Failures: {} geocoding, {} routing",
            summary.geocoding_failures, summary.routing_failures
        );
    }
    println!(
        "📏 Distance: {:.2} km short, {:.2} km long",
        summary.total_short_km, summary.total_long_km
    );
    println!("🌍 Emissions: {:.2} kg CO2e", summary.total_emissions_kg());
}

/// Resolve text to a coordinate, as the pipeline does for row endpoints
async fn locate(pipeline: &TripPipeline, text: &str) -> anyhow::Result<Coordinate> {
    let hint = pipeline.settings().city_hint.clone();
    pipeline
        .locate(text, hint.as_deref())
        .await
        .with_context(|| format!("could not resolve \"{text}\""))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    cli.overrides.apply(&mut config);

    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Parse { text } => match parse_coordinate(&text) {
            Some(pair) => match pair.to_coordinate() {
                Ok(coordinate) => println!("📍 {coordinate} (lon,lat)"),
                Err(e) => println!("❌ Out of range: {e}"),
            },
            None => println!("❌ Not a coordinate pair"),
        },

        Commands::Geocode { text } => {
            let pipeline = build_pipeline(&config)?;
            let hint = pipeline.settings().city_hint.clone();
            let query = pipeline.place_query(&text, hint.as_deref());
            let outcome = pipeline.geocoder().resolve(&query).await;
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        },

        Commands::Route { from, to } => {
            let pipeline = build_pipeline(&config)?;
            let start = locate(&pipeline, &from).await?;
            let end = locate(&pipeline, &to).await?;
            let resolution = pipeline
                .router()
                .route(start, end, config.routing.profile)
                .await;
            println!("{}", serde_json::to_string_pretty(&resolution)?);
        },

        Commands::Run {
            input,
            output,
            format,
        } => {
            let pipeline = build_pipeline(&config)?;
            run_batch(&pipeline, &input, output.as_deref(), format).await?;
        },
    }

    Ok(())
}
