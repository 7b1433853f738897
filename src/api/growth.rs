//! Growth suggestion endpoints.
//!
//! Two request modes share one response shape: direct-data mode takes the
//! three metric histories in the request body, fetch mode resolves a ticker
//! through the Yahoo fundamentals client first. The engine itself never
//! fails; only upstream retrieval can produce an error response.

use crate::error::{AppError, Result};
use crate::types::{GrowthBasis, GrowthSuggestion};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

/// Fixed confidence label attached to every suggestion response.
const CONFIDENCE: &str = "MEDIUM";

/// Note attached to direct-data responses.
const DIRECT_NOTE: &str = "Suggested growth based on historical CAGR, recent trend and sector cap";

/// Note attached to fetch-then-compute responses.
const FETCHED_NOTE: &str = "Auto-calculated from cleaned historical financials";

/// Per-metric breakdown, used for both suggestions and analysis figures.
#[derive(Debug, Serialize)]
pub struct MetricBreakdown<T> {
    pub revenue: T,
    pub ebitda: T,
    pub pat: T,
}

/// Response shape shared by both request modes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthResponse {
    pub company: String,
    pub sector: String,
    pub suggested_growth_pct: MetricBreakdown<f64>,
    pub analysis: MetricBreakdown<GrowthBasis>,
    pub confidence: &'static str,
    pub note: &'static str,
}

/// Direct-data request body. Histories are oldest-to-latest; JSON nulls are
/// tolerated and treated as missing observations.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestGrowthRequest {
    pub company: String,
    pub sector: String,
    pub revenue_history: Vec<Option<f64>>,
    pub ebitda_history: Vec<Option<f64>>,
    pub pat_history: Vec<Option<f64>>,
}

/// Query parameters for the fetch-then-compute endpoint.
#[derive(Debug, Deserialize)]
pub struct TickerQuery {
    /// Sector tag for the growth bound; defaults to DEFAULT.
    pub sector: Option<String>,
}

/// Create the growth router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggest", post(suggest_direct))
        .route("/suggest/:ticker", get(suggest_for_ticker))
}

fn build_response(
    company: String,
    sector: String,
    revenue: GrowthSuggestion,
    ebitda: GrowthSuggestion,
    pat: GrowthSuggestion,
    note: &'static str,
) -> GrowthResponse {
    GrowthResponse {
        company,
        sector,
        suggested_growth_pct: MetricBreakdown {
            revenue: revenue.suggested_pct,
            ebitda: ebitda.suggested_pct,
            pat: pat.suggested_pct,
        },
        analysis: MetricBreakdown {
            revenue: revenue.basis,
            ebitda: ebitda.basis,
            pat: pat.basis,
        },
        confidence: CONFIDENCE,
        note,
    }
}

/// POST /api/growth/suggest
///
/// Direct-data mode: all three histories come from the caller. Total; every
/// degenerate input shape resolves to zeros or a clamped bound.
async fn suggest_direct(
    State(state): State<AppState>,
    Json(req): Json<SuggestGrowthRequest>,
) -> Json<GrowthResponse> {
    let revenue = state.engine.suggest(&req.revenue_history, &req.sector);
    let ebitda = state.engine.suggest(&req.ebitda_history, &req.sector);
    let pat = state.engine.suggest(&req.pat_history, &req.sector);

    Json(build_response(
        req.company,
        req.sector,
        revenue,
        ebitda,
        pat,
        DIRECT_NOTE,
    ))
}

/// GET /api/growth/suggest/:ticker
///
/// Fetch-then-compute mode: histories come from the fundamentals client.
/// Retrieval failure surfaces as a 400 with the upstream's message.
async fn suggest_for_ticker(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(query): Query<TickerQuery>,
) -> Result<Json<GrowthResponse>> {
    let sector = query.sector.unwrap_or_else(|| "DEFAULT".to_string());

    let history = state
        .fundamentals
        .get_financials(&ticker)
        .await
        .map_err(AppError::BadRequest)?;

    let revenue = state.engine.suggest_values(&history.revenue, &sector);
    let ebitda = state.engine.suggest_values(&history.ebitda, &sector);
    let pat = state.engine.suggest_values(&history.pat, &sector);

    Ok(Json(build_response(
        ticker, sector, revenue, ebitda, pat, FETCHED_NOTE,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization_with_nulls() {
        let json = r#"{
            "company": "Acme",
            "sector": "IT",
            "revenueHistory": [100.0, null, 121.0, 133.1],
            "ebitdaHistory": [15.0, 16.5, 18.15, 19.97],
            "patHistory": [10.0, 11.0, 12.1, 13.31]
        }"#;
        let req: SuggestGrowthRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.company, "Acme");
        assert_eq!(req.revenue_history[1], None);
        assert_eq!(req.revenue_history[3], Some(133.1));
    }

    #[test]
    fn test_response_serialization_is_camel_case() {
        let basis = GrowthBasis {
            cagr_pct: 10.0,
            recent_trend_pct: 10.0,
        };
        let suggestion = GrowthSuggestion {
            suggested_pct: 10.0,
            basis,
        };
        let response = build_response(
            "Acme".to_string(),
            "DEFAULT".to_string(),
            suggestion,
            suggestion,
            suggestion,
            DIRECT_NOTE,
        );

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"suggestedGrowthPct\""));
        assert!(json.contains("\"analysis\""));
        assert!(json.contains("\"cagrPct\":10.0"));
        assert!(json.contains("\"recentTrendPct\":10.0"));
        assert!(json.contains("\"confidence\":\"MEDIUM\""));
    }

    #[test]
    fn test_ticker_query_sector_optional() {
        let query: TickerQuery = serde_urlencoded::from_str("").unwrap();
        assert_eq!(query.sector, None);

        let query: TickerQuery = serde_urlencoded::from_str("sector=IT").unwrap();
        assert_eq!(query.sector, Some("IT".to_string()));
    }

    #[test]
    fn test_build_response_keeps_metrics_apart() {
        let make = |pct: f64| GrowthSuggestion {
            suggested_pct: pct,
            basis: GrowthBasis {
                cagr_pct: pct,
                recent_trend_pct: pct,
            },
        };
        let response = build_response(
            "Acme".to_string(),
            "FMCG".to_string(),
            make(8.0),
            make(9.0),
            make(10.0),
            FETCHED_NOTE,
        );
        assert_eq!(response.suggested_growth_pct.revenue, 8.0);
        assert_eq!(response.suggested_growth_pct.ebitda, 9.0);
        assert_eq!(response.suggested_growth_pct.pat, 10.0);
        assert_eq!(response.analysis.ebitda.cagr_pct, 9.0);
    }
}
