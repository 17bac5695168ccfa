//! Chart series shaping: pairs aggregate values with labels and fill
//! colors for the bar, pie, and scatter views.

use migration_map_analytics_models::{
    LeaderboardEntry, ScatterPoint, StateShare, TrendBreakdown,
};
use serde::Serialize;

use crate::theme;

/// One bar of the leaderboard chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    /// Axis label.
    pub label: String,
    /// Bar length.
    pub value: f64,
    /// Formatted value label drawn next to the bar.
    pub value_label: String,
    /// Fill color token.
    pub fill: &'static str,
}

/// One slice of the state-distribution pie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSlice {
    /// Legend name.
    pub name: String,
    /// Slice weight.
    pub value: u64,
    /// Fill color token.
    pub fill: &'static str,
}

/// One bucket of the trend momentum chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket {
    /// Bucket name.
    pub name: &'static str,
    /// Record count.
    pub value: u64,
    /// Fill color token.
    pub fill: &'static str,
}

/// One colored point of the scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterDatum {
    /// The underlying sampled point.
    #[serde(flatten)]
    pub point: ScatterPoint,
    /// Fill color token.
    pub fill: &'static str,
    /// Fill opacity.
    pub fill_opacity: f64,
}

/// Shapes the leaderboard into a bar series, preserving order.
#[must_use]
pub fn leaderboard_series(entries: &[LeaderboardEntry]) -> Vec<BarDatum> {
    entries
        .iter()
        .map(|entry| BarDatum {
            label: entry.display_name.clone(),
            value: entry.score,
            value_label: crate::format::format_score(entry.score),
            fill: theme::bar_color(entry.score),
        })
        .collect()
}

/// Shapes the state distribution into pie slices, cycling the palette.
#[must_use]
pub fn state_share_slices(shares: &[StateShare]) -> Vec<PieSlice> {
    shares
        .iter()
        .enumerate()
        .map(|(i, share)| PieSlice {
            name: share.name.clone(),
            value: share.value,
            fill: theme::pie_color(i),
        })
        .collect()
}

/// Shapes the trend partition into its three fixed buckets.
#[must_use]
pub const fn trend_buckets(trend: &TrendBreakdown) -> [TrendBucket; 3] {
    [
        TrendBucket {
            name: "Accelerating",
            value: trend.accelerating,
            fill: theme::RED,
        },
        TrendBucket {
            name: "Decelerating",
            value: trend.decelerating,
            fill: theme::GREEN,
        },
        TrendBucket {
            name: "Stable",
            value: trend.stable,
            fill: theme::CYAN,
        },
    ]
}

/// Colors the scatter sample for plotting, preserving band order.
#[must_use]
pub fn scatter_series(points: &[ScatterPoint]) -> Vec<ScatterDatum> {
    points
        .iter()
        .map(|point| ScatterDatum {
            fill: theme::scatter_color(point.is_hotspot),
            fill_opacity: theme::scatter_opacity(point.is_hotspot),
            point: point.clone(),
        })
        .collect()
}
