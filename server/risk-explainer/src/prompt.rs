//! Prompt templates for the fraud explanation calls.

use fraud_engine::types::{ListingReport, PriceStats};

pub const SYSTEM_PROMPT: &str = r#"You are an expert fraud detection system analyzing online shopping listings.

Focus on these scam indicators:
- Unrealistic pricing (too cheap)
- Fake/missing reviews
- Poor grammar or exaggerated claims ("AMAZING DEAL!!!")
- Suspicious seller patterns (no rating, new account)
- Stock photos vs real product photos
- Vague product descriptions
- Suspicious payment methods mentions

Return analysis as JSON with these exact fields:
{
  "scam_probability": <float 0.0-1.0>,
  "red_flags": [<list of specific red flags found>],
  "reasoning": "<2-3 sentence explanation>",
  "recommendation": "<AVOID/CAUTION/SAFE>"
}

Be specific, concise, and actionable."#;

/// Build the per-listing user prompt with the detected risk signals.
pub fn build_user_prompt(report: &ListingReport, price_stats: Option<&PriceStats>) -> String {
  let listing = &report.listing;
  let level = report
    .risk_level
    .map(|l| format!("{:?}", l).to_uppercase())
    .unwrap_or_else(|| "UNKNOWN".to_string());

  let price_context = match price_stats {
    Some(ps) if listing.price > 0.0 && ps.average > 0.0 => {
      let deviation = (((ps.average - listing.price) / ps.average) * 100.0) as i64;
      if deviation > 0 {
        format!(
          "Price is {}% below market average (${:.2})\n",
          deviation, ps.average
        )
      } else {
        format!(
          "Price is {}% above market average (${:.2})\n",
          deviation.abs(),
          ps.average
        )
      }
    }
    _ => String::new(),
  };

  let factors = report
    .risk_factors
    .iter()
    .map(|f| format!("- {}", f))
    .collect::<Vec<_>>()
    .join("\n");

  format!(
    "Analyze this product listing for fraud:\n\n\
     PRODUCT: {}\n\
     PRICE: ${}\n\
     PLATFORM: {}\n\
     RATING: {}/5 ({} reviews)\n\
     RISK LEVEL: {}\n\
     {}\n\
     DETECTED RISK FACTORS:\n{}\n\n\
     Analyze and return JSON with scam_probability, red_flags, reasoning, and recommendation.",
    listing.title,
    listing.price,
    listing.platform.as_str(),
    listing.rating,
    listing.reviews,
    level,
    price_context,
    factors
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use fraud_engine::types::{Condition, Listing, Platform, RiskLevel, Seller};

  fn report() -> ListingReport {
    let mut r = ListingReport::new(Listing {
      title: "iPhone 13 Pro - AMAZING DEAL!!!".to_string(),
      price: 50.0,
      price_raw: "$50".to_string(),
      source: "eBay".to_string(),
      link: String::new(),
      product_link: String::new(),
      thumbnail: String::new(),
      rating: 0.0,
      reviews: 0,
      seller: Seller::default(),
      delivery: String::new(),
      product_id: String::new(),
      platform: Platform::Ebay,
      condition: Condition::Unknown,
    });
    r.risk_level = Some(RiskLevel::High);
    r.risk_score = Some(0.9);
    r.risk_factors = vec![
      "Extremely cheap: 90% below market average".to_string(),
      "Very few reviews (0)".to_string(),
    ];
    r
  }

  fn stats() -> PriceStats {
    PriceStats {
      count: 8,
      min: 50.0,
      max: 700.0,
      average: 500.0,
      median: 520.0,
      std_dev: 150.0,
      range: 650.0,
    }
  }

  #[test]
  fn user_prompt_carries_listing_and_signals() {
    let prompt = build_user_prompt(&report(), Some(&stats()));
    assert!(prompt.contains("iPhone 13 Pro"));
    assert!(prompt.contains("PRICE: $50"));
    assert!(prompt.contains("PLATFORM: ebay"));
    assert!(prompt.contains("RISK LEVEL: HIGH"));
    assert!(prompt.contains("90% below market average ($500.00)"));
    assert!(prompt.contains("- Very few reviews (0)"));
  }

  #[test]
  fn overpriced_listing_reports_above_average() {
    let mut r = report();
    r.listing.price = 900.0;
    let prompt = build_user_prompt(&r, Some(&stats()));
    assert!(prompt.contains("above market average"));
  }

  #[test]
  fn missing_stats_omit_price_context() {
    let prompt = build_user_prompt(&report(), None);
    assert!(!prompt.contains("market average"));
  }

  #[test]
  fn system_prompt_demands_json_contract() {
    assert!(SYSTEM_PROMPT.contains("scam_probability"));
    assert!(SYSTEM_PROMPT.contains("AVOID/CAUTION/SAFE"));
  }
}
