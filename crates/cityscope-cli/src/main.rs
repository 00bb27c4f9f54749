//! Cityscope - city data and recipe lookup from the command line.

mod render;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cityscope_aggregator::{Aggregator, RecipeLookup};
use cityscope_core::Config;
use cityscope_geocode::GeocodeClient;
use cityscope_poi::OverpassClient;
use cityscope_recipes::MealDbClient;
use cityscope_weather::WeatherClient;

#[derive(Parser)]
#[command(name = "cityscope", about = "Look up weather, population and nearby places for a city")]
struct Cli {
    /// Path to a TOML config file (defaults to the public endpoints)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate weather, population and points of interest for a city
    City {
        /// Free-text place name
        name: String,
    },
    /// Look up a recipe by food name
    Recipe {
        /// Free-text food name
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    cityscope_core::init()?;

    let cli = Cli::parse();
    let config = Config::load_validated(cli.config.as_deref())?;

    match cli.command {
        Commands::City { name } => run_city(&config, &name).await,
        Commands::Recipe { name } => run_recipe(&config, &name).await,
    }
}

async fn run_city(config: &Config, name: &str) -> Result<()> {
    let geocoder = Arc::new(GeocodeClient::new(config)?);
    let weather = Arc::new(WeatherClient::new(config)?);
    let poi = Arc::new(OverpassClient::new(config)?);

    let aggregator = Aggregator::new(geocoder, weather, poi);

    let result = aggregator
        .aggregate(name)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    for line in render::render_city(&result) {
        println!("{}", line);
    }

    if result.failures.any() {
        tracing::warn!("Some sources were unavailable; output is partial");
    }

    Ok(())
}

async fn run_recipe(config: &Config, name: &str) -> Result<()> {
    let lookup = RecipeLookup::new(Arc::new(MealDbClient::new(config)?));

    let found = lookup
        .find_recipe(name)
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    match found {
        Some(recipe) => println!("{}", render::render_recipe(&recipe)),
        None => println!("No recipe found."),
    }

    Ok(())
}
