//! Heat-layer feed and renderer configuration.
//!
//! Only points with intensity at or above the visibility threshold make
//! it into the feed, and each visible point's weight is boosted with a
//! power curve so strong clusters dominate the blur.

use migration_map_record_models::PointRecord;
use serde::{Deserialize, Serialize};

/// Points below this intensity are dropped from the heat feed.
pub const HEAT_VISIBILITY_THRESHOLD: f64 = 0.15;

/// Exponent applied to intensity when deriving a point's heat weight.
pub const HEAT_WEIGHT_EXPONENT: f64 = 1.5;

/// Color ramp for the heat layer, keyed by normalized heat value.
pub const HEAT_GRADIENT: [(f64, &str); 9] = [
    (0.0, "transparent"),
    (0.15, "#1976d2"),
    (0.35, "#42a5f5"),
    (0.55, "#90caf9"),
    (0.72, "#ffed49"),
    (0.80, "#fd7045"),
    (0.88, "#e62c29"),
    (0.95, "#971414"),
    (1.0, "#640909"),
];

/// One weighted sample for the heat layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatPoint {
    pub lat: f64,
    pub lng: f64,
    /// Boosted intensity, `intensity^1.5`.
    pub weight: f64,
}

/// Heat-layer tuning handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatLayerConfig {
    pub radius: u32,
    pub blur: u32,
    pub max_zoom: u32,
    pub max: f64,
    pub min_opacity: f64,
}

impl Default for HeatLayerConfig {
    fn default() -> Self {
        Self {
            radius: 12,
            blur: 10,
            max_zoom: 10,
            max: 0.7,
            min_opacity: 0.275,
        }
    }
}

/// Marker icon asset locations, passed explicitly to the renderer
/// instead of patched into renderer-global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIconConfig {
    pub icon_url: String,
    pub icon_retina_url: String,
    pub shadow_url: String,
}

impl Default for MarkerIconConfig {
    fn default() -> Self {
        const CDN: &str = "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.7.1/images";
        Self {
            icon_url: format!("{CDN}/marker-icon.png"),
            icon_retina_url: format!("{CDN}/marker-icon-2x.png"),
            shadow_url: format!("{CDN}/marker-shadow.png"),
        }
    }
}

/// Complete map renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RendererConfig {
    /// Initial view center, `(lat, lng)`.
    pub center: (f64, f64),
    /// Initial zoom level.
    pub zoom: u32,
    pub heat: HeatLayerConfig,
    pub marker_icons: MarkerIconConfig,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            center: (22.5, 82.5),
            zoom: 5,
            heat: HeatLayerConfig::default(),
            marker_icons: MarkerIconConfig::default(),
        }
    }
}

/// Builds the heat feed: filters to visible intensity and boosts the
/// weight, preserving input order.
#[must_use]
pub fn heat_points(records: &[PointRecord]) -> Vec<HeatPoint> {
    records
        .iter()
        .filter(|r| r.intensity >= HEAT_VISIBILITY_THRESHOLD)
        .map(|r| HeatPoint {
            lat: r.lat,
            lng: r.lng,
            weight: r.intensity.powf(HEAT_WEIGHT_EXPONENT),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: f64, lng: f64, intensity: f64) -> PointRecord {
        PointRecord {
            lat,
            lng,
            intensity,
            ..PointRecord::default()
        }
    }

    #[test]
    fn filters_below_visibility_threshold() {
        let records = vec![
            record(22.0, 82.0, 0.149),
            record(23.0, 83.0, 0.15),
            record(24.0, 84.0, 0.5),
        ];
        let feed = heat_points(&records);
        assert_eq!(feed.len(), 2);
        assert!((feed[0].lat - 23.0).abs() < f64::EPSILON);
    }

    #[test]
    fn weight_is_power_boosted() {
        let feed = heat_points(&[record(22.0, 82.0, 0.25)]);
        assert!((feed[0].weight - 0.25f64.powf(1.5)).abs() < 1e-12);
    }

    #[test]
    fn preserves_input_order() {
        let records = vec![
            record(1.0, 1.0, 0.9),
            record(2.0, 2.0, 0.2),
            record(3.0, 3.0, 0.6),
        ];
        let feed = heat_points(&records);
        let lats: Vec<f64> = feed.iter().map(|p| p.lat).collect();
        assert_eq!(lats, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn gradient_covers_full_range() {
        assert!((HEAT_GRADIENT[0].0 - 0.0).abs() < f64::EPSILON);
        assert!((HEAT_GRADIENT[8].0 - 1.0).abs() < f64::EPSILON);
        for pair in HEAT_GRADIENT.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }

    #[test]
    fn renderer_config_defaults() {
        let config = RendererConfig::default();
        assert!((config.center.0 - 22.5).abs() < f64::EPSILON);
        assert!((config.center.1 - 82.5).abs() < f64::EPSILON);
        assert_eq!(config.zoom, 5);
        assert_eq!(config.heat.radius, 12);
        assert_eq!(config.heat.blur, 10);
        assert!((config.heat.max - 0.7).abs() < f64::EPSILON);
        assert!((config.heat.min_opacity - 0.275).abs() < f64::EPSILON);
    }

    #[test]
    fn heat_point_serializes_camel_case() {
        let json = serde_json::to_value(HeatPoint {
            lat: 22.5,
            lng: 82.5,
            weight: 0.3,
        })
        .unwrap();
        assert!(json.get("lat").is_some());
        assert!(json.get("weight").is_some());
    }
}
