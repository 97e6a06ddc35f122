//! HTTP handlers for the search API.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use fraud_engine::types::{
  AnalysisInput, AnalysisOutput, Condition, ListingReport, Recommendations, RiskSummary,
};
use std::collections::BTreeMap;
use search_gateway::{SearchOptions, SearchProvider};

use crate::assemble::{self, EmptyResponse, SearchResult};
use crate::state::AppState;

const MAX_RESULTS: usize = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformChoice {
  #[default]
  Google,
  Ebay,
  All,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  #[serde(default = "default_num_results")]
  pub num_results: usize,
  #[serde(default)]
  pub platform: PlatformChoice,
  #[serde(default)]
  pub max_price: Option<u32>,
  #[serde(default)]
  pub condition: Option<Condition>,
  #[serde(default = "default_true")]
  pub analyze_fraud: bool,
  #[serde(default = "default_true")]
  pub filter_invalid: bool,
}

fn default_num_results() -> usize {
  10
}

fn default_true() -> bool {
  true
}

/// Universal product search with fraud scoring and AI explanations.
pub async fn search(
  State(state): State<Arc<AppState>>,
  Path(query): Path<String>,
  Query(params): Query<SearchParams>,
) -> Json<SearchResult> {
  let opts = SearchOptions {
    num_results: params.num_results.clamp(1, MAX_RESULTS),
    max_price: params.max_price,
    condition: params.condition,
    ..SearchOptions::default()
  };

  let providers: Vec<&dyn SearchProvider> = match params.platform {
    PlatformChoice::Google => vec![&state.google],
    PlatformChoice::Ebay => vec![&state.ebay],
    PlatformChoice::All => vec![&state.google, &state.ebay],
  };

  let (listings, platforms_searched) =
    search_gateway::search_all(&providers, &query, &opts).await;

  if listings.is_empty() {
    return Json(SearchResult::Empty(EmptyResponse::new(
      query,
      platforms_searched,
    )));
  }

  let input = AnalysisInput { query, listings };
  let output = if params.analyze_fraud {
    info!(query = %input.query, count = input.listings.len(), "scoring listings");
    let mut output = fraud_engine::analyze(&input, &state.config);
    state.explainer.explain_set(&mut output).await;
    output
  } else {
    unscored(input)
  };

  Json(SearchResult::Full(Box::new(assemble::assemble(
    output,
    platforms_searched,
    params.filter_invalid,
  ))))
}

/// `analyze_fraud=false` skips the scoring pipeline entirely: listings come
/// back unscored and nothing is filtered as invalid.
fn unscored(input: AnalysisInput) -> AnalysisOutput {
  AnalysisOutput {
    query: input.query,
    reports: input.listings.into_iter().map(ListingReport::new).collect(),
    price_statistics: None,
    risk_summary: RiskSummary::default(),
    recommendations: Recommendations::default(),
    filtered_reasons: BTreeMap::new(),
  }
}

/// Supported platforms and their capabilities.
pub async fn platforms() -> Json<Value> {
  Json(json!({
    "platforms": {
      "google_shopping": {
        "name": "Google Shopping",
        "description": "Retail products from major stores",
        "best_for": ["New products", "Electronics", "General retail"],
        "supports_used": false,
        "supports_condition_filter": false
      },
      "ebay": {
        "name": "eBay",
        "description": "New and used products, auctions and Buy It Now",
        "best_for": ["Used items", "Cars", "Electronics", "Collectibles"],
        "supports_used": true,
        "supports_condition_filter": true,
        "conditions": ["new", "used", "refurbished"]
      }
    }
  }))
}

/// Health check endpoint.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
  Json(json!({
    "status": "healthy",
    "version": env!("CARGO_PKG_VERSION"),
    "google_provider": "online",
    "ebay_provider": "online",
    "fraud_engine": "online",
    "llm_enabled": state.explainer.enabled(),
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use fraud_engine::types::{Listing, Platform, Seller};

  #[test]
  fn analyze_fraud_off_skips_scoring_and_filtering() {
    // Would be filtered as a toy under scoring; with scoring off it must
    // come back untouched.
    let input = AnalysisInput {
      query: "laptop".to_string(),
      listings: vec![Listing {
        title: "VTech Kids Learning Laptop".to_string(),
        price: 25.0,
        price_raw: "$25".to_string(),
        source: "ToyCo".to_string(),
        link: String::new(),
        product_link: String::new(),
        thumbnail: String::new(),
        rating: 4.1,
        reviews: 40,
        seller: Seller::default(),
        delivery: String::new(),
        product_id: String::new(),
        platform: Platform::GoogleShopping,
        condition: Condition::New,
      }],
    };
    let out = unscored(input);

    assert_eq!(out.reports.len(), 1);
    let r = &out.reports[0];
    assert!(r.is_valid_product);
    assert!(r.risk_score.is_none());
    assert!(r.risk_level.is_none());
    assert!(r.fraud_analysis.is_none());
    assert!(out.price_statistics.is_none());
    assert!(out.filtered_reasons.is_empty());
    assert!(out.recommendations.best_deal.is_none());
  }

  #[test]
  fn search_params_defaults() {
    let params: SearchParams = serde_json::from_str("{}").unwrap();
    assert_eq!(params.num_results, 10);
    assert_eq!(params.platform, PlatformChoice::Google);
    assert!(params.max_price.is_none());
    assert!(params.condition.is_none());
    assert!(params.analyze_fraud);
    assert!(params.filter_invalid);
  }

  #[test]
  fn search_params_parse_from_query_string() {
    let params: SearchParams = serde_urlencoded::from_str(
      "num_results=25&platform=all&max_price=500&condition=used&analyze_fraud=false",
    )
    .unwrap();
    assert_eq!(params.num_results, 25);
    assert_eq!(params.platform, PlatformChoice::All);
    assert_eq!(params.max_price, Some(500));
    assert_eq!(params.condition, Some(Condition::Used));
    assert!(!params.analyze_fraud);
    assert!(params.filter_invalid);
  }

  #[test]
  fn num_results_is_clamped() {
    assert_eq!(200usize.clamp(1, MAX_RESULTS), 50);
    assert_eq!(0usize.clamp(1, MAX_RESULTS), 1);
  }
}
