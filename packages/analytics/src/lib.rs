#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation engine for the migration map dashboard.
//!
//! Pure, stateless transformation functions over the full record
//! sequence. None mutate their input, none fail: an empty dataset
//! degrades to defined empty/zero results rather than an error. All
//! functions are deterministic except the scatter baseline sampler,
//! which uses system entropy unless a seed is supplied.
//!
//! Two distinct thresholds over two distinct fields coexist here and
//! must not be conflated: the headline hotspot predicate is on
//! `intensity` (≥ 0.1), the critical-zone predicate is on
//! `migration_score` (> 20).

pub mod aggregate;
pub mod cache;
pub mod sample;

pub use aggregate::{
    compute_aggregates, compute_aggregates_seeded, critical_zone_count, headline_stats,
    leaderboard, state_share, trend_breakdown,
};
pub use cache::AggregateCache;
pub use sample::scatter_sample;

/// Headline hotspot predicate: minimum `intensity` for a record to
/// count as an active hotspot.
pub const HOTSPOT_INTENSITY_THRESHOLD: f64 = 0.1;

/// Critical-zone predicate: `migration_score` above this marks a
/// record as critical (and as a scatter hotspot).
pub const CRITICAL_SCORE_THRESHOLD: f64 = 20.0;

/// Scatter high-update band predicate: minimum `demo_updates` for a
/// low-score record to be plotted unconditionally.
pub const HIGH_UPDATE_THRESHOLD: u64 = 10_000;
