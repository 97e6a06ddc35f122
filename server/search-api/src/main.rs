//! Binary entrypoint for the search API.

use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use fraud_engine::Config;
use risk_explainer::Explainer;
use search_api::AppState;
use search_gateway::{EbayProvider, GoogleShoppingProvider};

/// Upstream calls (SerpAPI, Groq) must finish inside this window.
const HTTP_TIMEOUT_SECS: u64 = 10;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let serpapi_key = std::env::var("SERPAPI_KEY").expect("SERPAPI_KEY must be set");
  let groq_key = std::env::var("GROQ_API_KEY").ok();
  let port: u16 = std::env::var("PORT")
    .unwrap_or_else(|_| "8000".into())
    .parse()
    .expect("PORT must be a valid u16");

  let http = reqwest::Client::builder()
    .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
    .build()?;

  let state = Arc::new(AppState {
    google: GoogleShoppingProvider::new(http.clone(), serpapi_key.clone()),
    ebay: EbayProvider::new(http.clone(), serpapi_key),
    explainer: Explainer::new(http, groq_key),
    config: Config::default(),
  });

  let app = Router::new()
    .route("/api/search/:query", get(search_api::search))
    .route("/api/platforms", get(search_api::platforms))
    .route("/api/health", get(search_api::health))
    .layer(CorsLayer::permissive())
    .with_state(state);

  let addr = SocketAddr::from(([127, 0, 0, 1], port));
  tracing::info!("search-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
