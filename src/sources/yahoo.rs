//! Yahoo Finance fundamentals client.
//!
//! Fetches annual income-statement lines from the unofficial
//! fundamentals-timeseries endpoint and shapes them into clean
//! oldest-to-latest series for the growth engine.

use crate::services::cache::FundamentalsCache;
use crate::services::growth::sanitize;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Annual line items requested from the timeseries endpoint.
const ANNUAL_TYPES: &str =
    "annualTotalRevenue,annualEBITDA,annualEBIT,annualOperatingIncome,annualNetIncome";

/// EBITDA proxy lines in preference order, tried before the revenue fallback.
const EBITDA_PROXY_LINES: [&str; 3] = ["annualEBITDA", "annualEBIT", "annualOperatingIncome"];

/// Share of revenue used as the EBITDA proxy when no operating line exists.
const EBITDA_REVENUE_SHARE: f64 = 0.15;

/// Earliest period requested (unix seconds; Yahoo serves no fundamentals
/// before mid-1985).
const EARLIEST_PERIOD: i64 = 493_590_046;

/// Yahoo fundamentals-timeseries response.
#[derive(Debug, Deserialize)]
struct TimeseriesResponse {
    timeseries: TimeseriesBody,
}

#[derive(Debug, Deserialize)]
struct TimeseriesBody {
    result: Option<Vec<TimeseriesResult>>,
    error: Option<TimeseriesError>,
}

#[derive(Debug, Deserialize)]
struct TimeseriesError {
    code: String,
    description: String,
}

/// One result block per requested line item; the data array sits under a key
/// named after the line item itself, so it is captured via `flatten`.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TimeseriesResult {
    meta: TimeseriesMeta,
    timestamp: Option<Vec<i64>>,
    #[serde(flatten)]
    lines: HashMap<String, Vec<Option<TimeseriesPoint>>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct TimeseriesMeta {
    #[serde(rename = "type")]
    kinds: Vec<String>,
    symbol: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeseriesPoint {
    reported_value: Option<ReportedValue>,
}

#[derive(Debug, Deserialize)]
struct ReportedValue {
    raw: Option<f64>,
}

/// Cleaned annual history for the three engine metrics, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialHistory {
    pub revenue: Vec<f64>,
    pub ebitda: Vec<f64>,
    pub pat: Vec<f64>,
}

/// Normalize symbol for Yahoo Finance API.
/// Yahoo uses hyphens instead of dots for share classes (e.g., BRK-B not BRK.B)
fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase().replace('.', "-")
}

/// Collapse one timeseries line into clean floats, oldest first.
///
/// Missing points survive as 0.0 so the series stays aligned; the engine
/// treats them as missing data.
fn extract_values(points: &[Option<TimeseriesPoint>]) -> Vec<f64> {
    points
        .iter()
        .map(|p| {
            sanitize(
                p.as_ref()
                    .and_then(|point| point.reported_value.as_ref())
                    .and_then(|value| value.raw),
            )
        })
        .collect()
}

/// Assemble the three metric series from the fetched line items.
///
/// Revenue and net income are required; the EBITDA proxy prefers a reported
/// EBITDA line, then EBIT, then operating income, then 15% of revenue.
fn assemble_history(
    lines: &HashMap<String, Vec<f64>>,
    symbol: &str,
) -> Result<FinancialHistory, String> {
    let revenue = lines
        .get("annualTotalRevenue")
        .filter(|values| !values.is_empty())
        .cloned()
        .ok_or_else(|| format!("Revenue data missing for {}", symbol))?;

    let pat = lines
        .get("annualNetIncome")
        .filter(|values| !values.is_empty())
        .cloned()
        .ok_or_else(|| format!("Net income data missing for {}", symbol))?;

    let ebitda = EBITDA_PROXY_LINES
        .iter()
        .find_map(|line| lines.get(*line).filter(|values| !values.is_empty()).cloned())
        .unwrap_or_else(|| revenue.iter().map(|r| r * EBITDA_REVENUE_SHARE).collect());

    Ok(FinancialHistory {
        revenue,
        ebitda,
        pat,
    })
}

/// Yahoo Finance fundamentals client with a per-ticker TTL cache.
pub struct YahooFundamentalsClient {
    client: Client,
    cache: FundamentalsCache,
}

impl YahooFundamentalsClient {
    /// Create a new fundamentals client.
    pub fn new(timeout: Duration, cache_ttl: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            cache: FundamentalsCache::new(cache_ttl),
        }
    }

    /// Fetch the annual financial history for a ticker, serving from the
    /// cache when a fresh entry exists.
    pub async fn get_financials(&self, ticker: &str) -> Result<FinancialHistory, String> {
        let symbol = normalize_symbol(ticker);

        if let Some(history) = self.cache.get(&symbol) {
            debug!("Fundamentals cache hit for {}", symbol);
            return Ok(history);
        }

        let history = self.fetch_financials(&symbol).await?;
        self.cache.insert(symbol, history.clone());
        Ok(history)
    }

    async fn fetch_financials(&self, symbol: &str) -> Result<FinancialHistory, String> {
        let period2 = chrono::Utc::now().timestamp();
        let url = format!(
            "https://query1.finance.yahoo.com/ws/fundamentals-timeseries/v1/finance/timeseries/{}?symbol={}&type={}&period1={}&period2={}",
            symbol, symbol, ANNUAL_TYPES, EARLIEST_PERIOD, period2
        );

        debug!("Fetching fundamentals: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API error: {}", response.status()));
        }

        let data: TimeseriesResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        if let Some(error) = data.timeseries.error {
            return Err(format!(
                "Yahoo API error: {} - {}",
                error.code, error.description
            ));
        }

        let results = data
            .timeseries
            .result
            .filter(|results| !results.is_empty())
            .ok_or_else(|| format!("Financial data not available for {}", symbol))?;

        // Collapse the per-line result blocks into one map of clean series.
        let mut lines: HashMap<String, Vec<f64>> = HashMap::new();
        for result in &results {
            for kind in &result.meta.kinds {
                if let Some(points) = result.lines.get(kind) {
                    lines.insert(kind.clone(), extract_values(points));
                }
            }
        }

        assemble_history(&lines, symbol)
    }
}
