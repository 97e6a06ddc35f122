//! Shared application state.

use fraud_engine::Config;
use risk_explainer::Explainer;
use search_gateway::{EbayProvider, GoogleShoppingProvider};

pub struct AppState {
  pub google: GoogleShoppingProvider,
  pub ebay: EbayProvider,
  pub explainer: Explainer,
  pub config: Config,
}
