//! Risk Explainer — LLM-generated fraud explanations for the riskiest
//! listings in a result set.
//!
//! Only the top handful of HIGH/MEDIUM listings are sent to the API so the
//! search stays within its latency budget; everything else keeps the
//! engine's canned analysis. Any explainer failure degrades the same way.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::GroqClient;
pub use error::{ExplainerError, Result};

use std::collections::HashMap;
use std::sync::Mutex;

use fraud_engine::types::{AnalysisOutput, FraudAnalysis, ListingReport, PriceStats, RiskLevel};
use tracing::{debug, warn};

/// Fast first-pass model (cheap, 300+ tokens/sec).
pub const FAST_MODEL: &str = "llama-3.1-8b-instant";
/// Escalation model for uncertain HIGH-risk answers.
pub const SMART_MODEL: &str = "llama-3.1-70b-versatile";

/// How many HIGH / MEDIUM listings get an LLM explanation per search.
const MAX_HIGH: usize = 3;
const MAX_MEDIUM: usize = 2;

/// Scam-probability band where the fast model counts as uncertain.
const UNCERTAIN_LOW: f64 = 0.4;
const UNCERTAIN_HIGH: f64 = 0.6;

pub struct Explainer {
  client: Option<GroqClient>,
  cache: Mutex<HashMap<String, FraudAnalysis>>,
}

impl Explainer {
  /// `api_key = None` builds a disabled explainer (canned analyses only).
  pub fn new(http: reqwest::Client, api_key: Option<String>) -> Self {
    let client = match api_key {
      Some(key) if !key.is_empty() => Some(GroqClient::new(http, key)),
      _ => {
        warn!("no LLM API key configured; fraud explanations disabled");
        None
      }
    };
    Self {
      client,
      cache: Mutex::new(HashMap::new()),
    }
  }

  pub fn enabled(&self) -> bool {
    self.client.is_some()
  }

  /// Attach LLM analyses to the top-N riskiest reports in place.
  ///
  /// Reports the LLM never sees (or where it fails) keep the engine's
  /// canned analysis.
  pub async fn explain_set(&self, output: &mut AnalysisOutput) {
    let client = match &self.client {
      Some(c) => c,
      None => return,
    };
    let price_stats = output.price_statistics.clone();

    let targets = select_targets(&output.reports);
    debug!(count = targets.len(), "generating LLM explanations");

    for idx in targets {
      let report = &output.reports[idx];
      match self.explain_report(client, report, price_stats.as_ref()).await {
        Ok(analysis) => {
          let report = &mut output.reports[idx];
          report.risk_explanation = Some(analysis.reasoning.clone());
          report.fraud_analysis = Some(analysis);
        }
        Err(e) => {
          warn!(title = %report.listing.title, error = %e, "LLM explanation failed");
        }
      }
    }
  }

  async fn explain_report(
    &self,
    client: &GroqClient,
    report: &ListingReport,
    price_stats: Option<&PriceStats>,
  ) -> Result<FraudAnalysis> {
    let key = cache_key(report);
    if let Ok(cache) = self.cache.lock() {
      if let Some(hit) = cache.get(&key) {
        return Ok(hit.clone());
      }
    }

    let user_prompt = prompt::build_user_prompt(report, price_stats);
    let content = client
      .chat_json(FAST_MODEL, prompt::SYSTEM_PROMPT, &user_prompt)
      .await?;
    let mut analysis: FraudAnalysis = serde_json::from_str(&content)?;

    // The fast model sitting on the fence about a HIGH listing is worth a
    // second opinion from the bigger model.
    if report.risk_level == Some(RiskLevel::High)
      && (UNCERTAIN_LOW..=UNCERTAIN_HIGH).contains(&analysis.scam_probability)
    {
      debug!(title = %report.listing.title, "escalating to smart model");
      if let Ok(content) = client
        .chat_json(SMART_MODEL, prompt::SYSTEM_PROMPT, &user_prompt)
        .await
      {
        if let Ok(smart) = serde_json::from_str(&content) {
          analysis = smart;
        }
      }
    }

    if let Ok(mut cache) = self.cache.lock() {
      cache.insert(key, analysis.clone());
    }
    Ok(analysis)
  }
}

/// Indexes of the reports worth an LLM call: up to 3 HIGH then 2 MEDIUM,
/// highest score first.
fn select_targets(reports: &[ListingReport]) -> Vec<usize> {
  let by_level = |level: RiskLevel, cap: usize| {
    let mut idx: Vec<usize> = reports
      .iter()
      .enumerate()
      .filter(|(_, r)| r.is_valid_product && r.risk_level == Some(level))
      .map(|(i, _)| i)
      .collect();
    idx.sort_by(|a, b| {
      let sa = reports[*a].risk_score.unwrap_or(0.0);
      let sb = reports[*b].risk_score.unwrap_or(0.0);
      sb.total_cmp(&sa)
    });
    idx.truncate(cap);
    idx
  };

  let mut targets = by_level(RiskLevel::High, MAX_HIGH);
  targets.extend(by_level(RiskLevel::Medium, MAX_MEDIUM));
  targets
}

/// Identical listings share one analysis: hash of title | price | level.
fn cache_key(report: &ListingReport) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(report.listing.title.as_bytes());
  hasher.update(b"|");
  hasher.update(report.listing.price.to_le_bytes().as_slice());
  hasher.update(b"|");
  if let Some(level) = report.risk_level {
    hasher.update(format!("{:?}", level).as_bytes());
  }
  hasher.finalize().to_hex().to_string()
}
