use augur::config::Config;
use augur::services::{GrowthEngine, SectorLimits};
use augur::sources::YahooFundamentalsClient;
use augur::{api, AppState};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "augur=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env());
    info!("Starting Augur server on {}:{}", config.host, config.port);

    // The sector table is built once and shared immutably for the process
    // lifetime.
    let limits = Arc::new(SectorLimits::builtin());
    let engine = Arc::new(GrowthEngine::new(limits, config.growth_precision));

    let fundamentals = Arc::new(YahooFundamentalsClient::new(
        Duration::from_secs(config.fetch_timeout_secs),
        Duration::from_secs(config.fundamentals_cache_ttl_secs),
    ));

    let state = AppState {
        config: config.clone(),
        engine,
        fundamentals,
    };

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start the server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Augur server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
