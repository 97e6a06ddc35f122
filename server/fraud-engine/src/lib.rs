//! Shopping Fraud Engine — rule-based listing scoring; no AI, no DB, no network.
//! Used by the binary for stdin/stdout; called as a library by the API server.
//!
//! Pipeline: validate listings -> set-level price statistics -> per-listing
//! risk score / percentile / tier / outlier flag -> canned analyses ->
//! recommendations. LLM explanations overlay the canned analyses upstream.

pub mod classify;
pub mod config;
pub mod recommend;
pub mod risk;
pub mod stats;
pub mod types;

pub use config::Config;
pub use types::{AnalysisInput, AnalysisOutput, Listing, ListingReport, RiskLevel};

use std::collections::BTreeMap;

/// Run the engine on parsed input and return the output (no I/O).
///
/// Deterministic: report order follows input order.
pub fn analyze(input: &AnalysisInput, config: &Config) -> AnalysisOutput {
  let mut reports: Vec<ListingReport> = Vec::with_capacity(input.listings.len());
  let mut filtered_reasons: BTreeMap<String, usize> = BTreeMap::new();

  for listing in &input.listings {
    let mut report = ListingReport::new(listing.clone());
    report.features = classify::extract_features(listing);
    report.specs = classify::extract_specs(listing);
    if let Some(reason) = classify::validate(listing, &input.query) {
      report.is_valid_product = false;
      *filtered_reasons.entry(reason.clone()).or_insert(0) += 1;
      report.invalid_reason = Some(reason);
    } else {
      report.validity_warning = classify::validity_warning(listing);
    }
    reports.push(report);
  }

  let valid_prices: Vec<f64> = reports
    .iter()
    .filter(|r| r.is_valid_product)
    .map(|r| r.listing.price)
    .collect();
  let price_statistics = stats::price_stats(&valid_prices);
  let valid_count = reports.iter().filter(|r| r.is_valid_product).count();

  let mut summary = types::RiskSummary::default();
  for report in reports.iter_mut().filter(|r| r.is_valid_product) {
    let (score, factors) =
      risk::assess(&report.listing, price_statistics.as_ref(), valid_count, config);
    let level = risk::level_for(score, config);
    match level {
      RiskLevel::High => summary.high_risk_count += 1,
      RiskLevel::Medium => summary.medium_risk_count += 1,
      RiskLevel::Low => summary.low_risk_count += 1,
    }
    report.fraud_analysis = Some(risk::default_analysis(level, score, &factors));
    report.risk_score = Some(score);
    report.risk_factors = factors;
    report.risk_level = Some(level);

    if let Some(ps) = &price_statistics {
      let pct = stats::percentile_of(&valid_prices, report.listing.price);
      report.price_percentile = Some(pct);
      report.price_tier = Some(stats::tier_for(pct, config));
      report.price_outlier = stats::is_outlier(report.listing.price, ps.median, config);
    }
  }

  let recommendations = recommend::recommendations(&reports);

  AnalysisOutput {
    query: input.query.clone(),
    reports,
    price_statistics,
    risk_summary: summary,
    recommendations,
    filtered_reasons,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Condition, Platform, Seller};

  fn listing(title: &str, price: f64, seller: &str) -> Listing {
    Listing {
      title: title.to_string(),
      price,
      price_raw: format!("${}", price),
      source: seller.to_string(),
      link: String::new(),
      product_link: String::new(),
      thumbnail: String::new(),
      rating: 4.2,
      reviews: 80,
      seller: Seller {
        name: seller.to_string(),
        rating: 4.2,
        link: String::new(),
      },
      delivery: String::new(),
      product_id: String::new(),
      platform: Platform::GoogleShopping,
      condition: Condition::New,
    }
  }

  #[test]
  fn analyze_returns_valid_output_shape() {
    let input = AnalysisInput {
      query: "gaming laptop".to_string(),
      listings: vec![
        listing("Dell G15 Gaming Laptop 16GB RAM", 899.0, "Dell"),
        listing("ASUS ROG Strix Gaming Laptop", 1299.0, "Best Buy"),
        listing("Lenovo Legion 5 Gaming Laptop", 1099.0, "Walmart"),
        listing("HP Victus Gaming Laptop", 949.0, "Target"),
        listing("Gaming Laptop BRAND NEW cheap", 150.0, "fastdeals123"),
      ],
    };
    let out = analyze(&input, &Config::default());

    assert_eq!(out.reports.len(), 5);
    assert!(out.price_statistics.is_some());
    let total = out.risk_summary.high_risk_count
      + out.risk_summary.medium_risk_count
      + out.risk_summary.low_risk_count;
    assert_eq!(total, 5);

    // The suspiciously cheap unknown seller carries the highest score.
    let cheap = out
      .reports
      .iter()
      .find(|r| r.listing.price == 150.0)
      .unwrap();
    let max_score = out
      .reports
      .iter()
      .filter_map(|r| r.risk_score)
      .fold(0.0f64, f64::max);
    assert_eq!(cheap.risk_score.unwrap(), max_score);
    assert!(cheap.risk_factors.iter().any(|f| f.contains("cheap")));

    // Every valid report has tier + percentile + analysis.
    for r in out.reports.iter().filter(|r| r.is_valid_product) {
      assert!(r.price_percentile.is_some());
      assert!(r.price_tier.is_some());
      assert!(r.fraud_analysis.is_some());
    }
  }

  #[test]
  fn filtered_reasons_are_summarized() {
    let input = AnalysisInput {
      query: "laptop".to_string(),
      listings: vec![
        listing("Kids Learning Laptop Toy", 25.0, "ToyCo"),
        listing("VTech toy laptop for toddlers", 30.0, "ToyCo"),
        listing("Dell XPS 13 Laptop", 999.0, "Dell"),
      ],
    };
    let out = analyze(&input, &Config::default());
    let filtered: usize = out.filtered_reasons.values().sum();
    assert_eq!(filtered, 2);
    assert_eq!(
      out.reports.iter().filter(|r| r.is_valid_product).count(),
      1
    );
  }

  #[test]
  fn deterministic_output_across_runs() {
    let input = AnalysisInput {
      query: "iphone".to_string(),
      listings: vec![
        listing("Apple iPhone 13 128GB", 599.0, "Apple Store"),
        listing("Apple iPhone 13 Pro 256GB", 799.0, "seller42"),
      ],
    };
    let config = Config::default();
    let a = serde_json::to_string(&analyze(&input, &config)).unwrap();
    let b = serde_json::to_string(&analyze(&input, &config)).unwrap();
    assert_eq!(a, b);
  }
}
