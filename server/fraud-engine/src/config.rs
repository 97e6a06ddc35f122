//! Engine configuration with sane defaults.

/// Tunable thresholds for listing risk scoring.
#[derive(Debug, Clone)]
pub struct Config {
  /// Seller/source substrings treated as known major retailers.
  pub trusted_sellers: Vec<String>,
  /// Price-deviation scoring needs strictly more valid listings than this.
  pub min_set_for_price_analysis: usize,
  /// Below this fraction of the set mean a listing is "extremely cheap".
  pub cheap_ratio: f64,
  /// Below this fraction of the set mean a listing is merely discounted.
  pub discount_ratio: f64,
  pub cheap_penalty: f64,
  pub discount_penalty: f64,
  /// Penalty when a trusted Google Shopping seller is extremely cheap
  /// (reads as clearance, not fraud).
  pub trusted_clearance_penalty: f64,
  pub trusted_discount_penalty: f64,
  /// Penalty for zero rating or zero reviews on unknown sellers.
  pub reputation_penalty: f64,
  pub trusted_reputation_penalty: f64,
  /// A price above median * this multiple is flagged as an outlier.
  pub outlier_median_multiple: f64,
  pub outlier_penalty: f64,
  /// Risk level boundaries: score >= high is HIGH, >= medium is MEDIUM.
  pub high_threshold: f64,
  pub medium_threshold: f64,
  /// Price tier boundaries on the percentile (upper bounds, exclusive).
  pub tier_budget_max: f64,
  pub tier_mid_max: f64,
  pub tier_premium_max: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      trusted_sellers: [
        "target",
        "walmart",
        "best buy",
        "amazon",
        "ulta",
        "kohl",
        "dyson",
        "macy",
        "laifen",
        "ikea",
        "west elm",
        "crate & barrel",
      ]
      .iter()
      .map(|s| s.to_string())
      .collect(),
      min_set_for_price_analysis: 3,
      cheap_ratio: 0.5,
      discount_ratio: 0.7,
      cheap_penalty: 0.5,
      discount_penalty: 0.3,
      trusted_clearance_penalty: 0.1,
      trusted_discount_penalty: 0.05,
      reputation_penalty: 0.15,
      trusted_reputation_penalty: 0.05,
      outlier_median_multiple: 10.0,
      outlier_penalty: 0.2,
      high_threshold: 0.55,
      medium_threshold: 0.25,
      tier_budget_max: 0.25,
      tier_mid_max: 0.65,
      tier_premium_max: 0.90,
    }
  }
}
