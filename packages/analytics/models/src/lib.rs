#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Derived aggregate types for the migration map dashboard.
//!
//! Every type here is a pure function of the current dataset: the
//! aggregation engine recomputes them whenever the record store's
//! version token changes, and they are never mutated independently.
//! Output models serialize camelCase for the renderer boundary.

use serde::{Deserialize, Serialize};

/// Headline statistics for the summary widget and navbar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlineStats {
    /// Number of records whose intensity meets the hotspot threshold.
    pub total_hotspots: u64,
    /// District of the record with the highest migration score.
    /// `None` when the dataset is empty.
    pub top_district: Option<String>,
    /// Number of distinct states containing at least one hotspot.
    pub flagged_states_count: u64,
    /// Percentage of records qualifying as hotspots, rounded to one
    /// decimal. 0 for an empty dataset, never NaN.
    pub anomaly_rate: f64,
}

/// One row of the top-districts leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// District identifier.
    pub district: String,
    /// State the retained record came from.
    pub state: String,
    /// Chart label: district plus a two-letter state prefix, e.g.
    /// `"Kolkata [WE]"`. Two states sharing a prefix are
    /// indistinguishable in the label.
    pub display_name: String,
    /// The district's highest migration score.
    pub score: f64,
}

/// One slice of the state-level score distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateShare {
    /// State name.
    pub name: String,
    /// Summed migration score for the state, rounded to the nearest
    /// integer.
    pub value: u64,
}

/// Total 3-way partition of the dataset by trend direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBreakdown {
    /// Records trending up.
    pub accelerating: u64,
    /// Records trending down.
    pub decelerating: u64,
    /// Everything else.
    pub stable: u64,
}

impl TrendBreakdown {
    /// Sum of all three buckets. Equals the dataset size by
    /// construction.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.accelerating + self.decelerating + self.stable
    }
}

/// One plotted point of the bounded scatter sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    /// X axis: enrolments (natural growth).
    pub x: u64,
    /// Y axis: demographic updates (migration inflow).
    pub y: u64,
    /// Migration score, used for point sizing.
    pub score: f64,
    /// District identifier for the tooltip.
    pub district: String,
    /// State identifier for the tooltip.
    pub state: String,
    /// `true` when the score exceeds the critical threshold.
    pub is_hotspot: bool,
}

/// The full derived view of one dataset version: everything the report
/// modal and summary widgets render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateSet {
    /// Summary widget statistics.
    pub headline: HeadlineStats,
    /// Top 10 districts by migration score, one entry per district.
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Top 5 states by summed migration score.
    pub state_shares: Vec<StateShare>,
    /// Trend direction partition.
    pub trend: TrendBreakdown,
    /// Bounded scatter plotting sample (at most 550 points).
    pub scatter: Vec<ScatterPoint>,
    /// Number of records above the critical score threshold.
    pub critical_zones: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_breakdown_total_sums_buckets() {
        let breakdown = TrendBreakdown {
            accelerating: 3,
            decelerating: 1,
            stable: 6,
        };
        assert_eq!(breakdown.total(), 10);
    }

    #[test]
    fn headline_stats_serialize_camel_case() {
        let stats = HeadlineStats {
            total_hotspots: 12,
            top_district: Some("Kolkata".to_string()),
            flagged_states_count: 3,
            anomaly_rate: 41.7,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["totalHotspots"], 12);
        assert_eq!(json["topDistrict"], "Kolkata");
        assert_eq!(json["flaggedStatesCount"], 3);
    }

    #[test]
    fn empty_aggregate_set_has_zero_defaults() {
        let set = AggregateSet::default();
        assert_eq!(set.headline.total_hotspots, 0);
        assert!(set.headline.top_district.is_none());
        assert!(set.leaderboard.is_empty());
        assert!(set.state_shares.is_empty());
        assert_eq!(set.trend.total(), 0);
        assert!(set.scatter.is_empty());
        assert_eq!(set.critical_zones, 0);
    }
}
