//! Groq chat-completions client (OpenAI-compatible API surface).

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::error::{ExplainerError, Result};
use crate::types::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

pub struct GroqClient {
  api_key: String,
  http: reqwest::Client,
  base_url: String,
}

impl GroqClient {
  pub fn new(http: reqwest::Client, api_key: String) -> Self {
    Self {
      api_key,
      http,
      base_url: GROQ_API_URL.to_string(),
    }
  }

  pub fn with_base_url(mut self, url: &str) -> Self {
    self.base_url = url.to_string();
    self
  }

  fn headers(&self) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", self.api_key))
      .map_err(|e| ExplainerError::Parse(e.to_string()))?;
    headers.insert(AUTHORIZATION, bearer);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
  }

  /// One structured chat completion; returns the first choice's content.
  pub async fn chat_json(&self, model: &str, system: &str, user: &str) -> Result<String> {
    let request = ChatRequest {
      model: model.to_string(),
      messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
      temperature: 0.3,
      max_tokens: 200,
      response_format: ResponseFormat::json_object(),
    };

    debug!(model, "Groq chat request");

    let url = format!("{}/chat/completions", self.base_url);
    let response = self
      .http
      .post(&url)
      .headers(self.headers()?)
      .json(&request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ExplainerError::Api {
        status: status.as_u16(),
        message: body,
      });
    }

    let chat_response: ChatResponse = response.json().await?;
    chat_response
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or(ExplainerError::Empty)
  }
}
