//! Structured error types for the explainer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExplainerError>;

#[derive(Debug, Error)]
pub enum ExplainerError {
  #[error("network error: {0}")]
  Network(String),

  #[error("LLM API error (status {status}): {message}")]
  Api { status: u16, message: String },

  #[error("parse error: {0}")]
  Parse(String),

  #[error("empty completion response")]
  Empty,
}

impl From<reqwest::Error> for ExplainerError {
  fn from(err: reqwest::Error) -> Self {
    ExplainerError::Network(err.to_string())
  }
}

impl From<serde_json::Error> for ExplainerError {
  fn from(err: serde_json::Error) -> Self {
    ExplainerError::Parse(err.to_string())
  }
}
