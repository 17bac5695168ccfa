//! Fixed color tokens and category-to-color assignment rules.

use migration_map_analytics::CRITICAL_SCORE_THRESHOLD;

/// Hotspot / high-risk accents.
pub const NEON_ROSE: &str = "#f43f5e";
/// Stable / baseline accents.
pub const CYAN: &str = "#06b6d4";
/// Elevated-but-not-critical accents.
pub const AMBER: &str = "#f59e0b";
/// Decelerating (cooling off) accents.
pub const GREEN: &str = "#22c55e";
/// Accelerating accents.
pub const RED: &str = "#ef4444";
/// Regional-distribution accents.
pub const PURPLE: &str = "#a855f7";
/// General chart accents.
pub const BLUE: &str = "#3b82f6";

/// Pie slice palette, cycled by slice index.
pub const PIE_PALETTE: [&str; 5] = [BLUE, CYAN, PURPLE, AMBER, GREEN];

/// Leaderboard bars go amber above this score, rose above the critical
/// threshold.
pub const ELEVATED_SCORE_THRESHOLD: f64 = 15.0;

/// Fill color for a leaderboard bar.
#[must_use]
pub fn bar_color(score: f64) -> &'static str {
    if score > CRITICAL_SCORE_THRESHOLD {
        NEON_ROSE
    } else if score > ELEVATED_SCORE_THRESHOLD {
        AMBER
    } else {
        CYAN
    }
}

/// Fill color for a scatter point.
#[must_use]
pub const fn scatter_color(is_hotspot: bool) -> &'static str {
    if is_hotspot { NEON_ROSE } else { CYAN }
}

/// Fill opacity for a scatter point: hotspots draw heavier.
#[must_use]
pub const fn scatter_opacity(is_hotspot: bool) -> f64 {
    if is_hotspot { 0.8 } else { 0.4 }
}

/// Fill color for a pie slice at the given index.
#[must_use]
pub const fn pie_color(index: usize) -> &'static str {
    PIE_PALETTE[index % PIE_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_color_boundaries() {
        assert_eq!(bar_color(25.0), NEON_ROSE);
        assert_eq!(bar_color(20.0), AMBER);
        assert_eq!(bar_color(15.0), CYAN);
        assert_eq!(bar_color(0.0), CYAN);
    }

    #[test]
    fn scatter_colors_split_on_hotspot_flag() {
        assert_eq!(scatter_color(true), NEON_ROSE);
        assert_eq!(scatter_color(false), CYAN);
        assert!(scatter_opacity(true) > scatter_opacity(false));
    }

    #[test]
    fn pie_palette_cycles() {
        assert_eq!(pie_color(0), PIE_PALETTE[0]);
        assert_eq!(pie_color(5), PIE_PALETTE[0]);
        assert_eq!(pie_color(7), PIE_PALETTE[2]);
    }
}
