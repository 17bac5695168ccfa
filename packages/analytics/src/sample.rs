//! Bounded scatter sampling.
//!
//! Large datasets are cut down to a plottable subset built from three
//! disjoint bands, each independently bounded, concatenated in band
//! order and never re-sorted. The total sample is at most 550 points
//! regardless of input size, which caps rendering cost.

use migration_map_analytics_models::ScatterPoint;
use migration_map_record_models::PointRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::{CRITICAL_SCORE_THRESHOLD, HIGH_UPDATE_THRESHOLD};

/// Cap for the hotspot band (`migration_score > 20`), highest scores
/// first.
pub const HOTSPOT_BAND_CAP: usize = 200;

/// Cap for the high-update band (`score <= 20`, `demo_updates >
/// 10_000`), highest update counts first.
pub const HIGH_UPDATE_BAND_CAP: usize = 150;

/// Cap for the uniformly sampled baseline band.
pub const BASELINE_BAND_CAP: usize = 200;

/// Builds the bounded scatter sample.
///
/// The three bands partition the input: a record lands in exactly one
/// of them, so no record can appear twice in the output. The hotspot
/// and high-update bands are deterministic; the baseline band is
/// sampled uniformly without replacement. Pass a `seed` for
/// reproducible output (tests), or `None` for system entropy
/// (production).
#[must_use]
pub fn scatter_sample(records: &[PointRecord], seed: Option<u64>) -> Vec<ScatterPoint> {
    if records.is_empty() {
        return Vec::new();
    }

    let mut hotspots: Vec<&PointRecord> = records
        .iter()
        .filter(|r| r.migration_score > CRITICAL_SCORE_THRESHOLD)
        .collect();
    hotspots.sort_by(|a, b| b.migration_score.total_cmp(&a.migration_score));
    hotspots.truncate(HOTSPOT_BAND_CAP);

    let mut high_updates: Vec<&PointRecord> = records
        .iter()
        .filter(|r| {
            r.migration_score <= CRITICAL_SCORE_THRESHOLD && r.demo_updates > HIGH_UPDATE_THRESHOLD
        })
        .collect();
    high_updates.sort_by(|a, b| b.demo_updates.cmp(&a.demo_updates));
    high_updates.truncate(HIGH_UPDATE_BAND_CAP);

    let baseline_pool: Vec<&PointRecord> = records
        .iter()
        .filter(|r| {
            r.migration_score <= CRITICAL_SCORE_THRESHOLD && r.demo_updates <= HIGH_UPDATE_THRESHOLD
        })
        .collect();

    let mut rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let amount = baseline_pool.len().min(BASELINE_BAND_CAP);
    let baseline = rand::seq::index::sample(&mut rng, baseline_pool.len(), amount)
        .into_iter()
        .map(|i| baseline_pool[i]);

    hotspots
        .into_iter()
        .chain(high_updates)
        .chain(baseline)
        .map(scatter_point)
        .collect()
}

fn scatter_point(record: &PointRecord) -> ScatterPoint {
    ScatterPoint {
        x: record.enrolments,
        y: record.demo_updates,
        score: record.migration_score,
        district: record.district.clone(),
        state: record.state.clone(),
        is_hotspot: record.migration_score > CRITICAL_SCORE_THRESHOLD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(district: &str, score: f64, demo_updates: u64) -> PointRecord {
        PointRecord {
            district: district.to_string(),
            state: "S".to_string(),
            migration_score: score,
            demo_updates,
            ..PointRecord::default()
        }
    }

    /// One record per band plus enough baseline bulk to overflow the
    /// caps.
    fn banded_dataset() -> Vec<PointRecord> {
        let mut records = Vec::new();
        for i in 0..300u32 {
            records.push(record(&format!("hot-{i}"), 20.1 + f64::from(i), 50));
        }
        for i in 0..200u32 {
            records.push(record(&format!("upd-{i}"), 5.0, 10_001 + u64::from(i)));
        }
        for i in 0..500u32 {
            records.push(record(&format!("base-{i}"), 1.0, u64::from(i)));
        }
        records
    }

    #[test]
    fn empty_dataset_yields_empty_sample() {
        assert!(scatter_sample(&[], Some(1)).is_empty());
    }

    #[test]
    fn band_caps_bound_total_sample_size() {
        let records = banded_dataset();
        let sample = scatter_sample(&records, Some(1));
        assert_eq!(
            sample.len(),
            HOTSPOT_BAND_CAP + HIGH_UPDATE_BAND_CAP + BASELINE_BAND_CAP
        );
        assert!(sample.len() <= 550);
    }

    #[test]
    fn hotspot_flag_matches_score_threshold() {
        let sample = scatter_sample(&banded_dataset(), Some(2));
        for point in &sample {
            assert_eq!(point.is_hotspot, point.score > CRITICAL_SCORE_THRESHOLD);
        }
    }

    #[test]
    fn bands_are_disjoint() {
        let sample = scatter_sample(&banded_dataset(), Some(3));
        let mut districts: Vec<&str> = sample.iter().map(|p| p.district.as_str()).collect();
        districts.sort_unstable();
        let before = districts.len();
        districts.dedup();
        assert_eq!(districts.len(), before);
    }

    #[test]
    fn hotspot_band_is_sorted_descending_by_score() {
        let sample = scatter_sample(&banded_dataset(), Some(4));
        let hotspots: Vec<&ScatterPoint> = sample.iter().filter(|p| p.is_hotspot).collect();
        assert_eq!(hotspots.len(), HOTSPOT_BAND_CAP);
        for pair in hotspots.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn high_update_band_is_sorted_descending_by_updates() {
        let sample = scatter_sample(&banded_dataset(), Some(5));
        let high: Vec<&ScatterPoint> = sample
            .iter()
            .filter(|p| !p.is_hotspot && p.y > HIGH_UPDATE_THRESHOLD)
            .collect();
        assert_eq!(high.len(), HIGH_UPDATE_BAND_CAP);
        for pair in high.windows(2) {
            assert!(pair[0].y >= pair[1].y);
        }
    }

    #[test]
    fn small_baseline_is_taken_whole() {
        let records = vec![record("a", 1.0, 10), record("b", 2.0, 20)];
        let sample = scatter_sample(&records, Some(6));
        assert_eq!(sample.len(), 2);
    }

    #[test]
    fn seeded_sampling_is_reproducible() {
        let records = banded_dataset();
        let first = scatter_sample(&records, Some(7));
        let second = scatter_sample(&records, Some(7));
        assert_eq!(first, second);
    }

    #[test]
    fn unseeded_sampling_still_honors_contract() {
        let records = banded_dataset();
        let sample = scatter_sample(&records, None);
        assert!(sample.len() <= 550);
        let baseline_count = sample
            .iter()
            .filter(|p| !p.is_hotspot && p.y <= HIGH_UPDATE_THRESHOLD)
            .count();
        assert_eq!(baseline_count, BASELINE_BAND_CAP);
    }

    #[test]
    fn boundary_scores_fall_in_lower_bands() {
        // exactly 20 is not a hotspot, exactly 10_000 updates is baseline
        let records = vec![record("edge", 20.0, 10_000)];
        let sample = scatter_sample(&records, Some(8));
        assert_eq!(sample.len(), 1);
        assert!(!sample[0].is_hotspot);
    }
}
