//! Percentile and change-rate math used by the market analytics.

/// Percentile of a sorted slice with linear interpolation between order
/// statistics.
///
/// For percentile `p` over `n` sorted values, index `k = (n-1) * p / 100`;
/// the result interpolates between the floor and ceiling indices. An empty
/// slice yields 0.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn percentile(sorted: &[f64], pct: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let k = (sorted.len() - 1) as f64 * (pct / 100.0);
    let f = k.floor();
    let c = k.ceil();
    if (f - c).abs() < f64::EPSILON {
        sorted[k as usize]
    } else {
        sorted[f as usize] * (c - k) + sorted[c as usize] * (k - f)
    }
}

/// Trend percentage between two medians, rounded to one decimal place.
/// Returns 0 when the prior median is 0.
#[must_use]
pub fn trend_pct(recent_median: f64, prior_median: f64) -> f64 {
    if prior_median == 0.0 {
        return 0.0;
    }
    ((recent_median - prior_median) / prior_median * 1000.0).round() / 10.0
}

/// Week-over-week percentage change between two counts, rounded to the
/// nearest whole percent. Returns 0 when the prior count is 0.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn wow_pct(current: i64, prior: i64) -> i64 {
    if prior <= 0 {
        return 0;
    }
    ((current - prior) as f64 / prior as f64 * 100.0).round() as i64
}
