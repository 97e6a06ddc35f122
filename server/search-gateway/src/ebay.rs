//! eBay provider (SerpAPI `engine=ebay`).

use async_trait::async_trait;
use fraud_engine::types::{Condition, Listing, Platform, Seller};
use serde::Deserialize;
use tracing::debug;

use crate::error::{GatewayError, Result};
use crate::normalize;
use crate::provider::{SearchOptions, SearchProvider};

/// SerpAPI `LH_ItemCondition` codes.
fn condition_code(condition: Condition) -> Option<&'static str> {
  match condition {
    Condition::New => Some("3"),
    Condition::Used => Some("4"),
    Condition::Refurbished => Some("2000"),
    Condition::Unknown => None,
  }
}

pub struct EbayProvider {
  client: reqwest::Client,
  api_key: String,
  base_url: String,
}

impl EbayProvider {
  pub fn new(client: reqwest::Client, api_key: String) -> Self {
    Self {
      client,
      api_key,
      base_url: crate::SERPAPI_URL.to_string(),
    }
  }

  pub fn with_base_url(mut self, url: &str) -> Self {
    self.base_url = url.to_string();
    self
  }
}

#[async_trait]
impl SearchProvider for EbayProvider {
  fn platform(&self) -> Platform {
    Platform::Ebay
  }

  async fn search(&self, query: &str, opts: &SearchOptions) -> Result<Vec<Listing>> {
    debug!(query, num = opts.num_results, "eBay search");

    let mut params: Vec<(&str, String)> = vec![
      ("engine", "ebay".to_string()),
      ("ebay_domain", "ebay.com".to_string()),
      ("_nkw", query.to_string()),
      ("api_key", self.api_key.clone()),
    ];
    if let Some(max_price) = opts.max_price {
      params.push(("_udhi", max_price.to_string()));
    }
    if opts.buy_now_only {
      params.push(("LH_BIN", "1".to_string()));
    }
    if let Some(code) = opts.condition.and_then(condition_code) {
      params.push(("LH_ItemCondition", code.to_string()));
    }

    let resp = self.client.get(&self.base_url).query(&params).send().await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(GatewayError::Api {
        status: status.as_u16(),
        message: body,
      });
    }

    let parsed: EbayResponse = resp.json().await?;
    Ok(
      parsed
        .organic_results
        .iter()
        .take(opts.num_results)
        .map(parse_listing)
        .collect(),
    )
  }
}

#[derive(Debug, Deserialize)]
struct EbayResponse {
  #[serde(default)]
  organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
  #[serde(default)]
  title: String,
  #[serde(default)]
  price: Option<EbayPrice>,
  #[serde(default)]
  link: String,
  #[serde(default)]
  thumbnail: String,
  #[serde(default)]
  condition: String,
  #[serde(default)]
  shipping: String,
  #[serde(default)]
  seller: Option<EbaySeller>,
  #[serde(default)]
  position: Option<u32>,
}

/// eBay prices arrive either as `{"raw": "$299.99", ...}` or a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EbayPrice {
  Object {
    #[serde(default)]
    raw: String,
  },
  Text(String),
}

impl EbayPrice {
  fn raw(&self) -> &str {
    match self {
      Self::Object { raw } => raw,
      Self::Text(s) => s,
    }
  }
}

#[derive(Debug, Deserialize)]
struct EbaySeller {
  #[serde(default)]
  name: String,
  #[serde(default)]
  rating: f64,
}

/// eBay results carry no aggregate product rating/reviews; seller info is
/// what reputation we get.
fn parse_listing(item: &OrganicResult) -> Listing {
  let price_raw = item.price.as_ref().map(|p| p.raw().to_string()).unwrap_or_default();
  let price = normalize::normalize_price(&price_raw);
  let seller_name = item
    .seller
    .as_ref()
    .filter(|s| !s.name.is_empty())
    .map(|s| s.name.clone())
    .unwrap_or_else(|| "eBay Seller".to_string());
  let seller_rating = item.seller.as_ref().map(|s| s.rating).unwrap_or(0.0);

  Listing {
    title: item.title.clone(),
    price,
    price_raw,
    source: "eBay".to_string(),
    link: item.link.clone(),
    product_link: item.link.clone(),
    thumbnail: item.thumbnail.clone(),
    rating: 0.0,
    reviews: 0,
    seller: Seller {
      name: seller_name,
      rating: seller_rating,
      link: item.link.clone(),
    },
    delivery: item.shipping.clone(),
    product_id: item.position.map(|p| p.to_string()).unwrap_or_default(),
    platform: Platform::Ebay,
    condition: normalize::detect_condition(&item.condition, &item.title),
  }
}
