#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Terminal dashboard for the migration map analytics pipeline.
//!
//! Loads a point dataset through the record store's simulated deferred
//! load, computes the full aggregate set, and logs the report sections
//! a renderer would draw: the summary widget, the district leaderboard,
//! the state distribution, the trend momentum split, the scatter
//! sample, and the heat-layer feed.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use migration_map_analytics::{AggregateCache, compute_aggregates_seeded};
use migration_map_presentation::{chart, format, heat, theme};
use migration_map_store::RecordStore;

/// Bundled demonstration dataset.
const SAMPLE_DATASET: &str = include_str!("../data/sample_points.json");

const DEFAULT_LOAD_DELAY_MS: u64 = 500;

#[tokio::main]
async fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let records = match std::env::var("DATA_PATH") {
        Ok(path) => {
            let path = PathBuf::from(path);
            log::info!("Loading dataset from {}", path.display());
            migration_map_store::load_from_path(&path).expect("Failed to load dataset")
        }
        Err(_) => migration_map_store::parse_records(SAMPLE_DATASET)
            .expect("Bundled dataset is malformed"),
    };

    let delay_ms: u64 = std::env::var("LOAD_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_LOAD_DELAY_MS);
    let seed: Option<u64> = std::env::var("SCATTER_SEED")
        .ok()
        .and_then(|v| v.parse().ok());

    let store = RecordStore::new();
    log::info!("Loading {} records ({delay_ms}ms simulated delay)...", records.len());
    store
        .begin_simulated_load(records, Duration::from_millis(delay_ms))
        .wait()
        .await;

    let snapshot = store.records();
    let cache = AggregateCache::new();
    let aggregates = match seed {
        Some(seed) => {
            log::info!("Sampling scatter baseline with seed {seed}");
            Arc::new(compute_aggregates_seeded(&snapshot, Some(seed)))
        }
        None => cache.refresh(store.version(), Arc::clone(&snapshot)).await,
    };

    log::info!("=== Summary ===");
    log::info!(
        "Active hotspots: {}",
        format::format_count(aggregates.headline.total_hotspots)
    );
    log::info!(
        "Top district: {}",
        format::top_district_label(aggregates.headline.top_district.as_deref())
    );
    log::info!(
        "Flagged states: {}",
        format::format_count(aggregates.headline.flagged_states_count)
    );
    log::info!(
        "Anomaly rate: {}",
        format::format_anomaly_rate(aggregates.headline.anomaly_rate)
    );
    log::info!(
        "Critical zones: {}",
        format::format_count(aggregates.critical_zones)
    );

    log::info!("=== District leaderboard ===");
    for bar in chart::leaderboard_series(&aggregates.leaderboard) {
        log::info!("{:<28} {:>6}  {}", bar.label, bar.value_label, bar.fill);
    }

    log::info!("=== State distribution ===");
    let top_share = format::top_state_share(&aggregates.state_shares);
    log::info!(
        "Leading state: {} ({})",
        top_share.name_label(),
        top_share.percent_label()
    );
    for slice in chart::state_share_slices(&aggregates.state_shares) {
        log::info!(
            "{:<20} {:>10}  {}",
            slice.name,
            format::format_count(slice.value),
            slice.fill
        );
    }

    log::info!("=== Trend momentum ===");
    for bucket in chart::trend_buckets(&aggregates.trend) {
        log::info!("{:<14} {:>6}  {}", bucket.name, bucket.value, bucket.fill);
    }

    let scatter = chart::scatter_series(&aggregates.scatter);
    let hotspots = scatter.iter().filter(|p| p.point.is_hotspot).count();
    log::info!(
        "=== Scatter sample: {} points ({hotspots} drawn in {}) ===",
        scatter.len(),
        theme::NEON_ROSE
    );

    let feed = heat::heat_points(&snapshot);
    let renderer = heat::RendererConfig::default();
    log::info!(
        "=== Heat layer: {} visible points, center ({}, {}), zoom {} ===",
        feed.len(),
        renderer.center.0,
        renderer.center.1,
        renderer.zoom
    );
}
