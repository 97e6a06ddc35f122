//! Google Shopping provider (SerpAPI `engine=google_shopping`).

use async_trait::async_trait;
use fraud_engine::types::{Condition, Listing, Platform, Seller};
use serde::Deserialize;
use tracing::debug;

use crate::error::{GatewayError, Result};
use crate::normalize;
use crate::provider::{SearchOptions, SearchProvider};

pub struct GoogleShoppingProvider {
  client: reqwest::Client,
  api_key: String,
  base_url: String,
}

impl GoogleShoppingProvider {
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
impl SearchProvider for GoogleShoppingProvider {
  fn platform(&self) -> Platform {
    Platform::GoogleShopping
  }

  async fn search(&self, query: &str, opts: &SearchOptions) -> Result<Vec<Listing>> {
    debug!(query, num = opts.num_results, "Google Shopping search");

    let params: Vec<(&str, String)> = vec![
      ("engine", "google_shopping".to_string()),
      ("q", query.to_string()),
      ("num", opts.num_results.to_string()),
      ("gl", "us".to_string()),
      ("hl", "en".to_string()),
      ("api_key", self.api_key.clone()),
    ];

    let resp = self.client.get(&self.base_url).query(&params).send().await?;

    let status = resp.status();
    if !status.is_success() {
      let body = resp.text().await.unwrap_or_default();
      return Err(GatewayError::Api {
        status: status.as_u16(),
        message: body,
      });
    }

    let parsed: GoogleShoppingResponse = resp.json().await?;
    Ok(
      parsed
        .shopping_results
        .iter()
        .map(parse_listing)
        .collect(),
    )
  }
}

#[derive(Debug, Deserialize)]
struct GoogleShoppingResponse {
  #[serde(default)]
  shopping_results: Vec<ShoppingResult>,
}

#[derive(Debug, Deserialize)]
struct ShoppingResult {
  #[serde(default)]
  title: String,
  #[serde(default)]
  price: String,
  #[serde(default)]
  source: String,
  #[serde(default)]
  link: String,
  #[serde(default)]
  product_link: String,
  #[serde(default)]
  thumbnail: String,
  #[serde(default)]
  rating: f64,
  #[serde(default)]
  reviews: u32,
  #[serde(default)]
  delivery: String,
  #[serde(default)]
  product_id: String,
}

/// Google Shopping listings are retail inventory; condition is always new
/// and the store (`source`) doubles as the seller.
fn parse_listing(item: &ShoppingResult) -> Listing {
  Listing {
    title: item.title.clone(),
    price: normalize::normalize_price(&item.price),
    price_raw: item.price.clone(),
    source: item.source.clone(),
    link: item.link.clone(),
    product_link: item.product_link.clone(),
    thumbnail: item.thumbnail.clone(),
    rating: item.rating,
    reviews: item.reviews,
    seller: Seller {
      name: item.source.clone(),
      rating: item.rating,
      link: String::new(),
    },
    delivery: item.delivery.clone(),
    product_id: item.product_id.clone(),
    platform: Platform::GoogleShopping,
    condition: Condition::New,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_shopping_results_fixture() {
    let json = r#"{
      "search_metadata": {"status": "Success"},
      "shopping_results": [
        {
          "position": 1,
          "title": "Dyson Supersonic Hair Dryer",
          "price": "$429.99",
          "source": "Dyson",
          "link": "https://example.com/p/1",
          "product_link": "https://google.com/shopping/product/1",
          "thumbnail": "https://example.com/t/1.jpg",
          "rating": 4.7,
          "reviews": 8210,
          "delivery": "Free delivery",
          "product_id": "123456"
        },
        {
          "title": "Generic Hair Dryer 2000W",
          "price": "$24.99",
          "source": "bargainbin.example"
        }
      ]
    }"#;
    let resp: GoogleShoppingResponse = serde_json::from_str(json).unwrap();
    let listings: Vec<Listing> = resp.shopping_results.iter().map(parse_listing).collect();

    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0].price, 429.99);
    assert_eq!(listings[0].seller.name, "Dyson");
    assert_eq!(listings[0].condition, Condition::New);
    assert_eq!(listings[0].platform, Platform::GoogleShopping);

    // Sparse items fall back to defaults instead of failing the batch.
    assert_eq!(listings[1].rating, 0.0);
    assert_eq!(listings[1].reviews, 0);
    assert_eq!(listings[1].price, 24.99);
  }

  #[test]
  fn missing_results_block_is_empty() {
    let resp: GoogleShoppingResponse = serde_json::from_str(r#"{"search_metadata": {}}"#).unwrap();
    assert!(resp.shopping_results.is_empty());
  }
}
