//! Final payload assembly: merge scores, explanations, and listing metadata.

use std::collections::BTreeMap;

use fraud_engine::types::{
  AnalysisOutput, ListingReport, PriceStats, Recommendations, RiskSummary,
};
use serde::Serialize;

/// Response for a search that found nothing.
#[derive(Debug, Serialize)]
pub struct EmptyResponse {
  pub query: String,
  pub platforms_searched: Vec<String>,
  pub total_results: usize,
  pub message: String,
}

impl EmptyResponse {
  pub fn new(query: String, platforms_searched: Vec<String>) -> Self {
    Self {
      query,
      platforms_searched,
      total_results: 0,
      message: "No products found".to_string(),
    }
  }
}

/// Full search response.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
  pub query: String,
  pub platforms_searched: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub category_warning: Option<String>,
  pub total_results: usize,
  pub valid_products: usize,
  pub filtered_out: usize,
  pub filtered_reasons: BTreeMap<String, usize>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price_statistics: Option<PriceStats>,
  pub risk_summary: RiskSummary,
  pub products: Vec<ListingReport>,
  /// Only populated when the caller asked for `filter_invalid=false`.
  pub invalid_products: Vec<ListingReport>,
  pub recommendations: Recommendations,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SearchResult {
  Empty(EmptyResponse),
  Full(Box<SearchResponse>),
}

/// Merge the engine output into the response payload.
pub fn assemble(
  output: AnalysisOutput,
  platforms_searched: Vec<String>,
  filter_invalid: bool,
) -> SearchResponse {
  let total_results = output.reports.len();
  let (valid, invalid): (Vec<ListingReport>, Vec<ListingReport>) = output
    .reports
    .into_iter()
    .partition(|r| r.is_valid_product);

  let category_warning = category_warning(&output.query, &invalid);

  SearchResponse {
    query: output.query,
    platforms_searched,
    category_warning,
    total_results,
    valid_products: valid.len(),
    filtered_out: invalid.len(),
    filtered_reasons: output.filtered_reasons,
    price_statistics: output.price_statistics,
    risk_summary: output.risk_summary,
    products: valid,
    invalid_products: if filter_invalid { Vec::new() } else { invalid },
    recommendations: output.recommendations,
  }
}

/// Caller-facing note about filtered listings and search limitations.
fn category_warning(query: &str, invalid: &[ListingReport]) -> Option<String> {
  let toy_count = invalid
    .iter()
    .filter(|r| {
      r.invalid_reason
        .as_deref()
        .is_some_and(|reason| reason.to_lowercase().contains("toy"))
    })
    .count();
  if toy_count == 0 {
    return None;
  }

  let mut warnings = vec![format!(
    "Filtered out {} toy product(s). To search for toys specifically, include 'toy' or 'kids' in your query.",
    toy_count
  )];

  let q = query.to_lowercase();
  if ["car", "cars", "vehicle", "auto"].iter().any(|w| q.contains(w)) {
    warnings.push(
      "Many toy cars were filtered. For real vehicles, try platform=ebay with condition=used."
        .to_string(),
    );
  }

  Some(warnings.join(" "))
}
