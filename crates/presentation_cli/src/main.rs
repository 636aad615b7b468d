//! Nearby restaurant CLI
//!
//! Fetches restaurants around a location from the Overpass API and filters
//! them by name.

#![allow(clippy::print_stdout)]

mod cli;
mod render;

use std::sync::Arc;

use anyhow::Context;
use application::{PoiPort, RefreshController, select_suggestion, suggestions, visible};
use clap::Parser;
use domain::{Coordinate, RadiusMiles};
use infrastructure::{AppConfig, FixedLocationAdapter, OverpassPoiAdapter, init_logging};
use integration_overpass::OverpassQuery;
use tracing::{debug, info};

use crate::cli::{Cli, Commands, SearchArgs, log_filter_from_verbosity};
use crate::render::SearchView;

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => AppConfig::load().context("failed to load configuration")?,
    };
    config.validate().map_err(anyhow::Error::msg)?;
    Ok(config)
}

/// Radius from the command line (snapped) or the configured default
fn resolve_radius(arg: Option<f64>, config: &AppConfig) -> anyhow::Result<RadiusMiles> {
    match arg {
        Some(miles) => Ok(RadiusMiles::snapped(miles)),
        None => Ok(config.search.default_radius()?),
    }
}

async fn run_search(args: SearchArgs, config: &AppConfig) -> anyhow::Result<()> {
    let radius = resolve_radius(args.radius, config)?;
    let location = match (args.lat, args.lon) {
        (Some(lat), Some(lon)) => FixedLocationAdapter::available(Coordinate::new(lat, lon)?),
        _ => FixedLocationAdapter::from_config(config.location.as_ref()),
    };

    let poi = OverpassPoiAdapter::with_config(&config.overpass)?;
    let controller = RefreshController::with_radius(Arc::new(poi), radius);

    if let Some(handle) = controller.acquire_location(&location).await {
        let committed = handle.await.context("fetch task failed")?;
        debug!(committed, "Fetch finished");
    }

    let snapshot = controller.snapshot();
    if let Some(error) = snapshot.last_error {
        anyhow::bail!(error);
    }
    let center = snapshot
        .location
        .context("no location available for the search")?;

    let limit = args.limit.unwrap_or(config.search.suggestion_limit);
    let suggested = suggestions(&args.search, &snapshot.results, limit);

    let pick = match args.pick {
        Some(n) => {
            let chosen = n
                .checked_sub(1)
                .and_then(|i| suggested.get(i))
                .with_context(|| format!("no suggestion number {n}"))?;
            Some(select_suggestion(chosen))
        },
        None => None,
    };
    let search = pick
        .as_ref()
        .map_or(args.search.as_str(), |p| p.search_text.as_str());

    let view = SearchView {
        center,
        radius: snapshot.radius,
        search,
        visible: visible(search, &snapshot.results),
        suggestions: suggested,
        pick: pick.clone(),
    };
    info!(
        total = snapshot.results.len(),
        shown = view.visible.len(),
        "Search complete"
    );

    if args.json {
        println!("{}", view.to_json()?);
    } else {
        print!("{}", view.to_text());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command {
        Commands::Search(args) => run_search(args, &config).await?,

        Commands::Query { lat, lon, radius } => {
            let center = Coordinate::new(lat, lon)?;
            let radius = resolve_radius(radius, &config)?;
            let query = OverpassQuery::new(center, radius.meters())
                .with_timeout_secs(config.overpass.query_timeout_secs);
            println!("{query}");
        },

        Commands::Status => {
            let poi = OverpassPoiAdapter::with_config(&config.overpass)?;
            if poi.is_available().await {
                println!("✅ Overpass API reachable at {}", config.overpass.base_url);
            } else {
                println!("❌ Overpass API unreachable at {}", config.overpass.base_url);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
