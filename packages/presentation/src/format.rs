//! Numeric label formatting and the top-state share computation.

use migration_map_analytics_models::StateShare;

/// Placeholder for absent values in widget labels.
pub const EMPTY_LABEL: &str = "—";

/// Placeholder for an absent top state.
pub const NOT_AVAILABLE: &str = "N/A";

/// Formats a count with thousands separators: `1234567` → `"1,234,567"`.
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Formats a migration score with one fixed decimal.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

/// Formats the anomaly rate as a one-decimal percentage string.
#[must_use]
pub fn format_anomaly_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// Label for the top district, falling back to the em-dash placeholder.
#[must_use]
pub fn top_district_label(top_district: Option<&str>) -> &str {
    top_district.unwrap_or(EMPTY_LABEL)
}

/// Regional concentration summary: the leading state and its share of
/// the distributed total.
#[derive(Debug, Clone, PartialEq)]
pub struct TopStateShare {
    /// Leading state name, `None` when no shares exist.
    pub name: Option<String>,
    /// Whole-number percentage of the summed share values. 0 when the
    /// sum is 0.
    pub percent: f64,
}

impl TopStateShare {
    /// Display label for the leading state.
    #[must_use]
    pub fn name_label(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// Whole-number percentage string, e.g. `"62%"`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.percent)
    }
}

/// Computes the top state's share of the given distribution (the
/// truncated top-5 the aggregation engine produces). Defined as 0 when
/// the summed values are 0 or the sequence is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn top_state_share(shares: &[StateShare]) -> TopStateShare {
    let total: u64 = shares.iter().map(|s| s.value).sum();
    let Some(top) = shares.first() else {
        return TopStateShare {
            name: None,
            percent: 0.0,
        };
    };

    let percent = if total > 0 {
        (100.0 * top.value as f64 / total as f64).round()
    } else {
        0.0
    };

    TopStateShare {
        name: Some(top.name.clone()),
        percent,
    }
}
