//! The provider seam: one async trait over every shopping-search backend.

use async_trait::async_trait;
use fraud_engine::types::{Condition, Listing, Platform};

use crate::error::Result;

/// Per-search options. Price and condition filters only apply on providers
/// that support them (eBay).
#[derive(Debug, Clone)]
pub struct SearchOptions {
  pub num_results: usize,
  pub max_price: Option<u32>,
  pub condition: Option<Condition>,
  /// eBay: restrict to Buy It Now listings (no auctions).
  pub buy_now_only: bool,
}

impl Default for SearchOptions {
  fn default() -> Self {
    Self {
      num_results: 10,
      max_price: None,
      condition: None,
      buy_now_only: true,
    }
  }
}

/// One external shopping-search backend.
#[async_trait]
pub trait SearchProvider: Send + Sync {
  fn platform(&self) -> Platform;

  /// Search and normalize. Individual unparseable items are skipped.
  async fn search(&self, query: &str, opts: &SearchOptions) -> Result<Vec<Listing>>;
}
