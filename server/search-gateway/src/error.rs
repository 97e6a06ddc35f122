//! Structured error types for the search gateway.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
  #[error("network error: {0}")]
  Network(String),

  #[error("provider error (status {status}): {message}")]
  Api { status: u16, message: String },

  #[error("parse error: {0}")]
  Parse(String),
}

impl From<reqwest::Error> for GatewayError {
  fn from(err: reqwest::Error) -> Self {
    GatewayError::Network(err.to_string())
  }
}

impl From<serde_json::Error> for GatewayError {
  fn from(err: serde_json::Error) -> Self {
    GatewayError::Parse(err.to_string())
  }
}
