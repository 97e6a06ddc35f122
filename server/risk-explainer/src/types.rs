//! Chat-completions request/response types (OpenAI-compatible wire shape).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
  pub model: String,
  pub messages: Vec<ChatMessage>,
  pub temperature: f64,
  pub max_tokens: u32,
  pub response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
  pub role: String,
  pub content: String,
}

impl ChatMessage {
  pub fn system(content: impl Into<String>) -> Self {
    Self {
      role: "system".to_string(),
      content: content.into(),
    }
  }

  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: "user".to_string(),
      content: content.into(),
    }
  }
}

/// `{"type": "json_object"}` forces structured output.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat {
  #[serde(rename = "type")]
  pub format_type: String,
}

impl ResponseFormat {
  pub fn json_object() -> Self {
    Self {
      format_type: "json_object".to_string(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
  pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
  pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
  #[serde(default)]
  pub content: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chat_response_fixture_parses() {
    let json = r#"{
      "id": "chatcmpl-abc",
      "object": "chat.completion",
      "model": "llama-3.1-8b-instant",
      "choices": [
        {
          "index": 0,
          "message": {
            "role": "assistant",
            "content": "{\"scam_probability\": 0.85}"
          },
          "finish_reason": "stop"
        }
      ],
      "usage": {"prompt_tokens": 120, "completion_tokens": 40}
    }"#;
    let resp: ChatResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.choices.len(), 1);
    assert!(resp.choices[0].message.content.as_deref().unwrap().contains("0.85"));
  }

  #[test]
  fn request_serializes_with_response_format() {
    let req = ChatRequest {
      model: "llama-3.1-8b-instant".to_string(),
      messages: vec![ChatMessage::system("sys"), ChatMessage::user("usr")],
      temperature: 0.3,
      max_tokens: 200,
      response_format: ResponseFormat::json_object(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["response_format"]["type"], "json_object");
    assert_eq!(json["messages"][0]["role"], "system");
  }
}
