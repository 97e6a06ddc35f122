//! Core types for the fraud engine (JSON contracts + analysis outputs).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Canonical listing schema (what the search gateway produces)
// ---------------------------------------------------------------------------

/// One normalized product listing. Unknown fields are silently ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
  pub title: String,
  /// Parsed price in dollars; 0.0 when the raw string was unparseable.
  #[serde(default)]
  pub price: f64,
  #[serde(default)]
  pub price_raw: String,
  /// Store or marketplace name as reported by the provider.
  #[serde(default)]
  pub source: String,
  #[serde(default)]
  pub link: String,
  #[serde(default)]
  pub product_link: String,
  #[serde(default)]
  pub thumbnail: String,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub reviews: u32,
  #[serde(default)]
  pub seller: Seller,
  #[serde(default)]
  pub delivery: String,
  #[serde(default)]
  pub product_id: String,
  pub platform: Platform,
  #[serde(default)]
  pub condition: Condition,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seller {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub rating: f64,
  #[serde(default)]
  pub link: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
  GoogleShopping,
  Ebay,
}

impl Platform {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::GoogleShopping => "google_shopping",
      Self::Ebay => "ebay",
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
  New,
  Used,
  Refurbished,
  #[default]
  Unknown,
}

impl Condition {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.to_ascii_lowercase().as_str() {
      "new" => Some(Self::New),
      "used" | "pre-owned" | "preowned" => Some(Self::Used),
      "refurbished" | "renewed" | "restored" => Some(Self::Refurbished),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Risk levels, tiers, verdicts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
  Low,
  Medium,
  High,
}

/// Coarse price bucket relative to the result set's price distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
  Budget,
  Mid,
  Premium,
  Luxury,
}

/// Buying recommendation label. Parses loosely so LLM output like
/// "SAFE TO BUY" or "PROCEED WITH CAUTION" maps onto the short forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
  Safe,
  Caution,
  Avoid,
}

impl Verdict {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Safe => "SAFE",
      Self::Caution => "CAUTION",
      Self::Avoid => "AVOID",
    }
  }

  pub fn from_str_loose(s: &str) -> Option<Self> {
    let s = s.trim().to_ascii_uppercase();
    if s.starts_with("SAFE") {
      Some(Self::Safe)
    } else if s.contains("CAUTION") {
      Some(Self::Caution)
    } else if s.starts_with("AVOID") {
      Some(Self::Avoid)
    } else {
      None
    }
  }
}

impl Serialize for Verdict {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for Verdict {
  fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    Self::from_str_loose(&s)
      .ok_or_else(|| serde::de::Error::custom(format!("unknown verdict: {}", s)))
  }
}

// ---------------------------------------------------------------------------
// Fraud analysis (LLM output shape; also produced as a canned default)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FraudAnalysis {
  /// Risk score in [0,1].
  pub scam_probability: f64,
  #[serde(default)]
  pub red_flags: Vec<String>,
  pub reasoning: String,
  pub recommendation: Verdict,
}

// ---------------------------------------------------------------------------
// Title-derived attributes
// ---------------------------------------------------------------------------

/// Numeric/spec fragments mined from the listing title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Specs {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub storage_gb: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ram_gb: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub screen_size_inches: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub year: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mileage: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weight: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub weight_unit: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dimensions: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub power: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub power_unit: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capacity: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub capacity_unit: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub brand: Option<String>,
  pub condition: Condition,
}

// ---------------------------------------------------------------------------
// Per-listing report
// ---------------------------------------------------------------------------

/// A listing plus everything the engine derived about it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingReport {
  #[serde(flatten)]
  pub listing: Listing,
  pub is_valid_product: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub invalid_reason: Option<String>,
  /// Non-fatal caveat (e.g. digital goods) on an otherwise valid listing.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub validity_warning: Option<String>,
  #[serde(default)]
  pub features: Vec<String>,
  #[serde(default)]
  pub specs: Specs,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub risk_score: Option<f64>,
  #[serde(default)]
  pub risk_factors: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub risk_level: Option<RiskLevel>,
  /// Fraction of in-set listings priced at or below this one.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price_percentile: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price_tier: Option<PriceTier>,
  /// True when priced above the outlier multiple of the set median.
  #[serde(default)]
  pub price_outlier: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fraud_analysis: Option<FraudAnalysis>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub risk_explanation: Option<String>,
}

impl ListingReport {
  pub fn new(listing: Listing) -> Self {
    Self {
      listing,
      is_valid_product: true,
      invalid_reason: None,
      validity_warning: None,
      features: Vec::new(),
      specs: Specs::default(),
      risk_score: None,
      risk_factors: Vec::new(),
      risk_level: None,
      price_percentile: None,
      price_tier: None,
      price_outlier: false,
      fraud_analysis: None,
      risk_explanation: None,
    }
  }
}

// ---------------------------------------------------------------------------
// Set-level outputs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
  pub count: usize,
  pub min: f64,
  pub max: f64,
  pub average: f64,
  pub median: f64,
  pub std_dev: f64,
  pub range: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskSummary {
  pub high_risk_count: usize,
  pub medium_risk_count: usize,
  pub low_risk_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestDeal {
  pub title: String,
  pub price: f64,
  pub link: String,
  pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recommendations {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub best_deal: Option<BestDeal>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub proceed_with_caution: Option<usize>,
}

// ---------------------------------------------------------------------------
// Engine I/O contract
// ---------------------------------------------------------------------------

/// Input: one JSON object (query + normalized listings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
  #[serde(default)]
  pub query: String,
  pub listings: Vec<Listing>,
}

/// Output: one JSON object with per-listing reports plus set-level results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
  pub query: String,
  pub reports: Vec<ListingReport>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub price_statistics: Option<PriceStats>,
  pub risk_summary: RiskSummary,
  pub recommendations: Recommendations,
  /// Rejection reason -> count for filtered listings.
  #[serde(default)]
  pub filtered_reasons: BTreeMap<String, usize>,
}
