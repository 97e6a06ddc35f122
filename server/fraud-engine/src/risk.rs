//! Per-listing risk scoring with trusted-seller adjustment.

use crate::config::Config;
use crate::stats;
use crate::types::{FraudAnalysis, Listing, Platform, PriceStats, RiskLevel, Verdict};

/// Score one listing against the set-level price statistics.
///
/// Returns the clamped score in [0,1] plus human-readable factor strings.
/// `set_size` is the number of valid listings in the result set; price
/// deviation only contributes when the set is big enough to be meaningful.
/// The >Nx-median outlier penalty is not gated on set size.
pub fn assess(
  listing: &Listing,
  price_stats: Option<&PriceStats>,
  set_size: usize,
  config: &Config,
) -> (f64, Vec<String>) {
  let mut score = 0.0;
  let mut factors = Vec::new();
  let trusted = is_trusted(listing, config);

  if let Some(ps) = price_stats {
    let price = listing.price;
    let avg = ps.average;
    if set_size > config.min_set_for_price_analysis && price > 0.0 && avg > 0.0 {
      let percent_below = (((avg - price) / avg) * 100.0) as i64;
      if price < avg * config.cheap_ratio {
        if trusted && listing.platform == Platform::GoogleShopping {
          score += config.trusted_clearance_penalty;
          factors.push("Low price (possible clearance sale)".to_string());
        } else {
          score += config.cheap_penalty;
          factors.push(format!(
            "Extremely cheap: {}% below market average",
            percent_below
          ));
        }
      } else if price < avg * config.discount_ratio {
        if trusted {
          score += config.trusted_discount_penalty;
        } else {
          score += config.discount_penalty;
          factors.push(format!("Price {}% below market average", percent_below));
        }
      }
    }

    // The outlier flag is surfaced on the report for any set size, so it
    // scores for any set size too.
    if stats::is_outlier(price, ps.median, config) {
      score += config.outlier_penalty;
      factors.push(format!(
        "Priced more than {:.0}x the result-set median",
        config.outlier_median_multiple
      ));
    }
  }

  if listing.rating == 0.0 {
    if trusted {
      score += config.trusted_reputation_penalty;
    } else {
      score += config.reputation_penalty;
      factors.push("No rating available".to_string());
    }
  }
  if listing.reviews == 0 {
    if trusted {
      score += config.trusted_reputation_penalty;
    } else {
      score += config.reputation_penalty;
      factors.push("Very few reviews (0)".to_string());
    }
  }

  (score.min(1.0), factors)
}

/// Whether the listing is attributed to a known major retailer.
pub fn is_trusted(listing: &Listing, config: &Config) -> bool {
  let seller = listing.seller.name.to_lowercase();
  let source = listing.source.to_lowercase();
  config
    .trusted_sellers
    .iter()
    .any(|t| seller.contains(t.as_str()) || source.contains(t.as_str()))
}

/// Map a score onto a coarse risk level.
pub fn level_for(score: f64, config: &Config) -> RiskLevel {
  if score >= config.high_threshold {
    RiskLevel::High
  } else if score >= config.medium_threshold {
    RiskLevel::Medium
  } else {
    RiskLevel::Low
  }
}

/// Canned analysis for listings the LLM never sees.
pub fn default_analysis(level: RiskLevel, score: f64, factors: &[String]) -> FraudAnalysis {
  match level {
    RiskLevel::Low => FraudAnalysis {
      scam_probability: score,
      red_flags: Vec::new(),
      reasoning:
        "This listing appears legitimate with reasonable pricing and good seller reputation."
          .to_string(),
      recommendation: Verdict::Safe,
    },
    RiskLevel::Medium => FraudAnalysis {
      scam_probability: score,
      red_flags: factors.to_vec(),
      reasoning: "This listing has some minor concerns. Verify seller details before purchasing."
        .to_string(),
      recommendation: Verdict::Caution,
    },
    RiskLevel::High => FraudAnalysis {
      scam_probability: score,
      red_flags: factors.to_vec(),
      reasoning: "This listing shows multiple warning signs. Exercise extreme caution or avoid."
        .to_string(),
      recommendation: Verdict::Avoid,
    },
  }
}
