//! Core growth-suggestion types.

use serde::{Deserialize, Serialize};

/// Growth-rate bound for a sector, in percent.
///
/// Invariant: `min_pct <= max_pct`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectorLimit {
    /// Floor for the suggested growth rate (%).
    pub min_pct: f64,
    /// Ceiling for the suggested growth rate (%).
    pub max_pct: f64,
}

/// The intermediate figures that justify a suggestion.
///
/// These reflect the raw computed values (rounded, but never clamped), so a
/// capped suggestion still shows what the history actually implied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthBasis {
    /// Compound annual growth rate over the full valid history (%).
    pub cagr_pct: f64,
    /// Average growth over the most recent transitions (%).
    pub recent_trend_pct: f64,
}

/// Final suggestion for one metric series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthSuggestion {
    /// Blended growth rate clamped into the sector bound (%).
    pub suggested_pct: f64,
    /// The figures the suggestion was blended from.
    pub basis: GrowthBasis,
}

impl GrowthSuggestion {
    /// The all-zero result used when history is too thin to trust a blend.
    pub fn zero() -> Self {
        Self {
            suggested_pct: 0.0,
            basis: GrowthBasis {
                cagr_pct: 0.0,
                recent_trend_pct: 0.0,
            },
        }
    }
}
