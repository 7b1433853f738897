//! Growth suggestion engine.
//!
//! Blends the full-history CAGR of a metric series with a short recent-trend
//! average, then clamps the result into the sector's growth bound. Every path
//! is total: missing, non-finite, or non-positive input degrades to a zero or
//! clamped result instead of failing the caller.

use crate::services::sectors::SectorLimits;
use crate::types::{GrowthBasis, GrowthSuggestion};
use std::sync::Arc;

/// Weight given to the full-history CAGR in the blend.
const CAGR_WEIGHT: f64 = 0.6;

/// Weight given to the recent-trend average in the blend.
const RECENT_WEIGHT: f64 = 0.4;

/// Minimum number of valid observations required to produce a suggestion.
const MIN_VALID_POINTS: usize = 4;

/// Number of trailing observations examined for the recent trend.
const RECENT_WINDOW: usize = 3;

/// Normalize a raw observation into a finite float.
///
/// Absent, NaN and infinite inputs all map to 0.0.
pub fn sanitize(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Compound annual growth rate between `start` and `end` over `years`
/// periods, in percent.
///
/// Growth is indeterminate when `start`, `end` or `years` is non-positive;
/// those cases return 0.0 rather than failing.
pub fn cagr(start: f64, end: f64, years: f64) -> f64 {
    if start <= 0.0 || end <= 0.0 || years <= 0.0 {
        return 0.0;
    }
    ((end / start).powf(1.0 / years) - 1.0) * 100.0
}

/// Average period-over-period growth over the tail of an oldest-to-latest
/// series, in percent.
///
/// Examines the last three observations (the two most recent transitions).
/// Pairs whose divisor is not strictly positive are skipped; with no valid
/// pair the trend is 0.0.
pub fn recent_trend(values: &[f64]) -> f64 {
    let tail = &values[values.len().saturating_sub(RECENT_WINDOW)..];
    let growths: Vec<f64> = tail
        .windows(2)
        .filter(|pair| pair[0] > 0.0)
        .map(|pair| (pair[1] / pair[0] - 1.0) * 100.0)
        .collect();

    if growths.is_empty() {
        return 0.0;
    }
    growths.iter().sum::<f64>() / growths.len() as f64
}

/// Round to `precision` decimal places.
fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Sector-aware growth suggestion engine.
///
/// Pure and stateless across calls; holds only the shared sector registry
/// and the rounding precision from configuration.
pub struct GrowthEngine {
    limits: Arc<SectorLimits>,
    precision: u32,
}

impl GrowthEngine {
    /// Create an engine over the shared sector registry.
    pub fn new(limits: Arc<SectorLimits>, precision: u32) -> Self {
        Self { limits, precision }
    }

    /// Suggest a bounded growth rate for one historical series with possible
    /// missing entries, oldest first.
    pub fn suggest(&self, series: &[Option<f64>], sector: &str) -> GrowthSuggestion {
        let values: Vec<f64> = series.iter().map(|v| sanitize(*v)).collect();
        self.suggest_values(&values, sector)
    }

    /// Suggest a bounded growth rate for one historical series, oldest first.
    ///
    /// Values are sanitized and non-positive entries dropped before any
    /// computation; they count as missing data points, not as zero growth.
    /// Fewer than four valid values yield the all-zero result.
    pub fn suggest_values(&self, values: &[f64], sector: &str) -> GrowthSuggestion {
        let valid: Vec<f64> = values
            .iter()
            .map(|v| sanitize(Some(*v)))
            .filter(|v| *v > 0.0)
            .collect();

        if valid.len() < MIN_VALID_POINTS {
            return GrowthSuggestion::zero();
        }

        let years = (valid.len() - 1) as f64;
        let cagr_pct = cagr(valid[0], valid[valid.len() - 1], years);
        let recent_pct = recent_trend(&valid);

        let raw = CAGR_WEIGHT * cagr_pct + RECENT_WEIGHT * recent_pct;
        let limit = self.limits.limits_for(sector);
        let suggested = raw.max(limit.min_pct).min(limit.max_pct);

        GrowthSuggestion {
            suggested_pct: round_to(suggested, self.precision),
            basis: GrowthBasis {
                cagr_pct: round_to(cagr_pct, self.precision),
                recent_trend_pct: round_to(recent_pct, self.precision),
            },
        }
    }
}
