//! Deterministic aggregation functions: headline stats, leaderboard,
//! state shares, trend breakdown, and critical-zone counting.

use std::collections::{HashMap, HashSet};

use migration_map_analytics_models::{
    AggregateSet, HeadlineStats, LeaderboardEntry, StateShare, TrendBreakdown,
};
use migration_map_record_models::{PointRecord, Trend};

use crate::{CRITICAL_SCORE_THRESHOLD, HOTSPOT_INTENSITY_THRESHOLD, sample};

/// Maximum number of leaderboard rows.
pub const MAX_LEADERBOARD_ENTRIES: usize = 10;

/// Maximum number of state-share slices.
pub const MAX_STATE_SHARES: usize = 5;

/// Computes the summary-widget statistics.
///
/// The top district is the record with the strictly greatest migration
/// score; on ties the first occurrence wins. The anomaly rate is the
/// hotspot percentage rounded to one decimal, defined as 0 for an
/// empty dataset.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn headline_stats(records: &[PointRecord]) -> HeadlineStats {
    let hotspots: Vec<&PointRecord> = records
        .iter()
        .filter(|r| r.intensity >= HOTSPOT_INTENSITY_THRESHOLD)
        .collect();

    let flagged_states: HashSet<&str> = hotspots.iter().map(|r| r.state.as_str()).collect();

    let mut top: Option<&PointRecord> = None;
    for record in records {
        match top {
            Some(current) if record.migration_score <= current.migration_score => {}
            _ => top = Some(record),
        }
    }

    let anomaly_rate = if records.is_empty() {
        0.0
    } else {
        round_to_decimal(100.0 * hotspots.len() as f64 / records.len() as f64)
    };

    HeadlineStats {
        total_hotspots: hotspots.len() as u64,
        top_district: top.map(|r| r.district.clone()),
        flagged_states_count: flagged_states.len() as u64,
        anomaly_rate,
    }
}

/// Computes the top-districts leaderboard.
///
/// Records group by `district` alone (not district+state); within a
/// group the strictly highest-scoring record is retained, first-seen
/// winning ties. Groups sort descending by score (the sort is stable,
/// so tied districts keep first-seen order) and truncate to
/// [`MAX_LEADERBOARD_ENTRIES`].
#[must_use]
pub fn leaderboard(records: &[PointRecord]) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = Vec::new();
    let mut by_district: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if let Some(&idx) = by_district.get(record.district.as_str()) {
            if record.migration_score > entries[idx].score {
                entries[idx] = leaderboard_entry(record);
            }
        } else {
            by_district.insert(record.district.as_str(), entries.len());
            entries.push(leaderboard_entry(record));
        }
    }

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    entries.truncate(MAX_LEADERBOARD_ENTRIES);
    entries
}

fn leaderboard_entry(record: &PointRecord) -> LeaderboardEntry {
    LeaderboardEntry {
        district: record.district.clone(),
        state: record.state.clone(),
        display_name: format!(
            "{} [{}]",
            record.district,
            state_prefix(&record.state)
        ),
        score: record.migration_score,
    }
}

/// First two characters of the state name, uppercased. States sharing
/// a prefix collide in the label; acceptable for chart axes.
fn state_prefix(state: &str) -> String {
    state.chars().take(2).collect::<String>().to_uppercase()
}

/// Computes per-state summed migration scores, rounded to the nearest
/// integer, sorted descending, truncated to [`MAX_STATE_SHARES`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn state_share(records: &[PointRecord]) -> Vec<StateShare> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut by_state: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if let Some(&idx) = by_state.get(record.state.as_str()) {
            totals[idx].1 += record.migration_score;
        } else {
            by_state.insert(record.state.as_str(), totals.len());
            totals.push((record.state.as_str(), record.migration_score));
        }
    }

    let mut shares: Vec<StateShare> = totals
        .into_iter()
        .map(|(name, sum)| StateShare {
            name: name.to_string(),
            value: sum.round().max(0.0) as u64,
        })
        .collect();

    shares.sort_by(|a, b| b.value.cmp(&a.value));
    shares.truncate(MAX_STATE_SHARES);
    shares
}

/// Partitions the dataset into the three trend buckets. Every record
/// falls into exactly one bucket, so the counts always sum to the
/// dataset size.
#[must_use]
pub fn trend_breakdown(records: &[PointRecord]) -> TrendBreakdown {
    let mut breakdown = TrendBreakdown::default();
    for record in records {
        match record.trend {
            Trend::Up => breakdown.accelerating += 1,
            Trend::Down => breakdown.decelerating += 1,
            Trend::Stable => breakdown.stable += 1,
        }
    }
    breakdown
}

/// Counts records above the critical score threshold.
///
/// Independent from the headline hotspot count: this predicate is on
/// `migration_score`, the hotspot predicate is on `intensity`.
#[must_use]
pub fn critical_zone_count(records: &[PointRecord]) -> u64 {
    records
        .iter()
        .filter(|r| r.migration_score > CRITICAL_SCORE_THRESHOLD)
        .count() as u64
}

/// Computes the full aggregate set for one dataset version, using
/// system entropy for the scatter baseline band.
#[must_use]
pub fn compute_aggregates(records: &[PointRecord]) -> AggregateSet {
    compute_aggregates_seeded(records, None)
}

/// Computes the full aggregate set with an optional sampling seed for
/// reproducible scatter output in tests.
#[must_use]
pub fn compute_aggregates_seeded(records: &[PointRecord], seed: Option<u64>) -> AggregateSet {
    AggregateSet {
        headline: headline_stats(records),
        leaderboard: leaderboard(records),
        state_shares: state_share(records),
        trend: trend_breakdown(records),
        scatter: sample::scatter_sample(records, seed),
        critical_zones: critical_zone_count(records),
    }
}

fn round_to_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
