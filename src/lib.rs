//! Augur - sector-aware growth suggestion server for company financials.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::GrowthEngine;
use sources::YahooFundamentalsClient;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub engine: Arc<GrowthEngine>,
    pub fundamentals: Arc<YahooFundamentalsClient>,
}

pub use types::{GrowthBasis, GrowthSuggestion, SectorLimit};
