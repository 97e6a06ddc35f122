//! Search Gateway — normalizes external shopping-search providers into one
//! listing schema.
//!
//! Each provider implements [`SearchProvider`]; [`search_all`] fans a query
//! out to every selected provider concurrently and concatenates whatever
//! succeeds. A failing provider logs a warning and contributes nothing,
//! so partial results are still served.

pub mod ebay;
pub mod error;
pub mod google_shopping;
pub mod normalize;
pub mod provider;

pub use ebay::EbayProvider;
pub use error::{GatewayError, Result};
pub use google_shopping::GoogleShoppingProvider;
pub use provider::{SearchOptions, SearchProvider};

use fraud_engine::types::Listing;
use tracing::warn;

/// SerpAPI endpoint shared by both engines.
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Fire one search per provider, await all, keep the successes.
///
/// Returns the combined listings plus the platform names that answered.
pub async fn search_all(
  providers: &[&dyn SearchProvider],
  query: &str,
  opts: &SearchOptions,
) -> (Vec<Listing>, Vec<String>) {
  let searches = providers
    .iter()
    .map(|p| async move { (p.platform(), p.search(query, opts).await) });
  let results = futures::future::join_all(searches).await;

  let mut listings = Vec::new();
  let mut platforms_searched = Vec::new();
  for (platform, result) in results {
    match result {
      Ok(mut items) => {
        platforms_searched.push(platform.as_str().to_string());
        listings.append(&mut items);
      }
      Err(e) => {
        warn!(platform = platform.as_str(), error = %e, "provider search failed");
      }
    }
  }
  (listings, platforms_searched)
}
