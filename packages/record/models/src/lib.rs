#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Point record data model for the migration map dashboard.
//!
//! This crate defines the canonical input unit of the system: one
//! geographic sample carrying migration and enrolment metrics. The
//! bundled dataset performs no schema validation upstream, so numeric
//! fields deserialize leniently: JSON numbers, numeric strings, and
//! `null` are all accepted, and anything unparseable coerces to zero.
//! Malformed string fields propagate as-is.

use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Month-over-month movement direction of a record's update volume.
///
/// Any serialized value other than `Up` or `Down` (including a missing
/// field) maps to [`Trend::Stable`], making the three variants a total
/// partition of every dataset.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Trend {
    /// Update volume increased in the latest period.
    Up,
    /// Update volume decreased in the latest period.
    Down,
    /// No movement detected, or the source carried no usable value.
    #[default]
    Stable,
}

impl Trend {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Up, Self::Down, Self::Stable]
    }
}

/// One geographic sample with migration and enrolment metrics.
///
/// Records are plain value types with no identity beyond field equality.
/// `district` names are not globally unique across states; callers that
/// need disambiguation pair `district` with `state`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    /// Postal code the sample was aggregated from.
    #[serde(default)]
    pub pincode: String,
    /// State identifier.
    #[serde(default)]
    pub state: String,
    /// District identifier. Not unique across states.
    #[serde(default)]
    pub district: String,
    /// Latitude in degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub lng: f64,
    /// Total new enrolments recorded for this sample.
    #[serde(rename = "Enrolments", default, deserialize_with = "lenient_u64")]
    pub enrolments: u64,
    /// Total demographic update events recorded for this sample.
    #[serde(rename = "Demo_Updates", default, deserialize_with = "lenient_u64")]
    pub demo_updates: u64,
    /// Anomaly magnitude: update volume relative to enrolment volume.
    /// Non-negative.
    #[serde(rename = "Migration_Score", default, deserialize_with = "lenient_f64")]
    pub migration_score: f64,
    /// Normalized heatmap weight in `[0, 1]`.
    #[serde(rename = "Intensity", default, deserialize_with = "lenient_f64")]
    pub intensity: f64,
    /// Latest movement direction for this sample's update volume.
    #[serde(rename = "Trend", default, deserialize_with = "lenient_trend")]
    pub trend: Trend,
}

/// Accepts a JSON number, a numeric string, or anything else (coerced
/// to the zero default). The upstream exporter stringifies numerics it
/// cannot natively serialize, so `"1234.5"` must parse like `1234.5`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(v) => v,
        LenientNumber::Text(s) => s.trim().parse().unwrap_or(0.0),
        LenientNumber::Other(_) => 0.0,
    };
    Ok(if value.is_finite() { value } else { 0.0 })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match LenientNumber::deserialize(deserializer)? {
        LenientNumber::Number(v) => v,
        LenientNumber::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        LenientNumber::Other(_) => 0.0,
    };
    // `as` saturates at the bounds, so negative or non-finite values
    // collapse to 0 or u64::MAX rather than wrapping.
    Ok(if value.is_finite() && value > 0.0 {
        value as u64
    } else {
        0
    })
}

/// Accepts the known trend strings and coerces anything else
/// (unrecognized strings, `null`, wrong types) to [`Trend::Stable`].
fn lenient_trend<'de, D>(deserializer: D) -> Result<Trend, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawTrend {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match RawTrend::deserialize(deserializer)? {
        RawTrend::Text(s) => s.trim().parse().unwrap_or_default(),
        RawTrend::Other(_) => Trend::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_record() {
        let json = r#"{
            "pincode": "700001",
            "state": "West Bengal",
            "district": "Kolkata",
            "lat": 22.57,
            "lng": 88.36,
            "Enrolments": 1200,
            "Demo_Updates": 45000,
            "Migration_Score": 36.0,
            "Intensity": 0.82,
            "Trend": "Up"
        }"#;
        let record: PointRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.district, "Kolkata");
        assert_eq!(record.enrolments, 1200);
        assert_eq!(record.demo_updates, 45_000);
        assert!((record.migration_score - 36.0).abs() < f64::EPSILON);
        assert_eq!(record.trend, Trend::Up);
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let record: PointRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.district, "");
        assert_eq!(record.enrolments, 0);
        assert_eq!(record.demo_updates, 0);
        assert!((record.migration_score - 0.0).abs() < f64::EPSILON);
        assert_eq!(record.trend, Trend::Stable);
    }

    #[test]
    fn stringified_numerics_parse() {
        let json = r#"{
            "district": "Patna",
            "Enrolments": "3500",
            "Demo_Updates": "12000.0",
            "Migration_Score": "18.25"
        }"#;
        let record: PointRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.enrolments, 3500);
        assert_eq!(record.demo_updates, 12_000);
        assert!((record.migration_score - 18.25).abs() < f64::EPSILON);
    }

    #[test]
    fn malformed_numerics_coerce_to_zero() {
        let json = r#"{
            "Enrolments": "not-a-number",
            "Demo_Updates": null,
            "Migration_Score": {"nested": true},
            "Intensity": -0.4
        }"#;
        let record: PointRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.enrolments, 0);
        assert_eq!(record.demo_updates, 0);
        assert!((record.migration_score - 0.0).abs() < f64::EPSILON);
        // negative floats are kept as-is: only integer counts clamp
        assert!((record.intensity - -0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_trend_maps_to_stable() {
        let json = r#"{"Trend": "Sideways"}"#;
        let record: PointRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.trend, Trend::Stable);

        let json = r#"{"Trend": null}"#;
        let record: PointRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.trend, Trend::Stable);
    }

    #[test]
    fn trend_display_matches_wire_values() {
        assert_eq!(Trend::Up.to_string(), "Up");
        assert_eq!(Trend::Down.to_string(), "Down");
        assert_eq!(Trend::Stable.to_string(), "Stable");
    }
}
