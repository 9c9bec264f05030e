//! Bedrock Runtime example: invoke an Anthropic Claude model with a single prompt.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::require;
use crate::errors::ExampleError;

pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";
pub const DEFAULT_MAX_TOKENS: u32 = 512;

#[derive(Debug, Serialize)]
pub struct ClaudeRequest<'a> {
    pub anthropic_version: &'a str,
    pub max_tokens: u32,
    pub messages: Vec<ClaudeMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ClaudeMessage<'a> {
    pub role: &'a str,
    pub content: Vec<ClaudeContent<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ClaudeContent<'a> {
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ClaudeResponse {
    #[serde(default)]
    pub content: Vec<ClaudeResponseBlock>,
    pub stop_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClaudeResponseBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BedrockApi: Send + Sync {
    /// Send a raw JSON body to the model and return the raw JSON reply.
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ExampleError>;
}

pub struct BedrockClient {
    inner: Client,
}

impl BedrockClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl BedrockApi for BedrockClient {
    async fn invoke_model(&self, model_id: &str, body: Vec<u8>) -> Result<Vec<u8>, ExampleError> {
        let resp = self
            .inner
            .invoke_model()
            .model_id(model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await?;
        Ok(resp.body().as_ref().to_vec())
    }
}

/// Serialize a single-turn user prompt in the Anthropic Messages format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn build_request_body(prompt: &str, max_tokens: u32) -> Result<Vec<u8>, ExampleError> {
    let request = ClaudeRequest {
        anthropic_version: ANTHROPIC_VERSION,
        max_tokens,
        messages: vec![ClaudeMessage {
            role: "user",
            content: vec![ClaudeContent {
                kind: "text",
                text: prompt,
            }],
        }],
    };
    Ok(serde_json::to_vec(&request)?)
}

/// Concatenate the text blocks of a model reply.
///
/// # Errors
///
/// Returns an error if the body is not a valid Messages response.
pub fn extract_text(body: &[u8]) -> Result<String, ExampleError> {
    let response: ClaudeResponse = serde_json::from_slice(body)?;
    if let Some(reason) = response.stop_reason.as_deref() {
        info!(stop_reason = reason, "Model finished");
    }
    Ok(response
        .content
        .into_iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text)
        .collect::<Vec<_>>()
        .join(""))
}

/// Send `prompt` to `model_id` and return the generated text.
///
/// An access-denied failure is logged with a permission hint and then returned
/// unchanged.
///
/// # Errors
///
/// Returns an error if an argument is empty, the call fails or the reply is not
/// valid JSON.
pub async fn invoke_model<C: BedrockApi + ?Sized>(
    bedrock: &C,
    model_id: &str,
    prompt: &str,
) -> Result<String, ExampleError> {
    require("model ID", model_id)?;
    require("prompt", prompt)?;
    let body = build_request_body(prompt, DEFAULT_MAX_TOKENS)?;

    let reply = match bedrock.invoke_model(model_id, body).await {
        Ok(reply) => reply,
        Err(e) => {
            if let Some(hint) = e.permission_hint() {
                warn!(model_id, "{hint}");
            }
            return Err(e);
        }
    };
    extract_text(&reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    const MODEL: &str = "anthropic.claude-3-haiku-20240307-v1:0";

    #[tokio::test]
    async fn test_invoke_model_sends_messages_body_and_returns_text() {
        let mut mock = MockBedrockApi::new();
        mock.expect_invoke_model()
            .withf(|model_id: &str, body: &Vec<u8>| {
                let sent: Value = serde_json::from_slice(body).unwrap();
                model_id == MODEL
                    && sent["anthropic_version"] == ANTHROPIC_VERSION
                    && sent["messages"][0]["role"] == "user"
                    && sent["messages"][0]["content"][0]["text"] == "Say hi"
            })
            .times(1)
            .returning(|_, _| {
                let reply = json!({
                    "content": [{ "type": "text", "text": "Hi there" }],
                    "stop_reason": "end_turn"
                });
                Ok(serde_json::to_vec(&reply).unwrap())
            });

        let text = invoke_model(&mock, MODEL, "Say hi").await.unwrap();
        assert_eq!(text, "Hi there");
    }

    #[tokio::test]
    async fn test_invoke_model_returns_access_denied_unchanged() {
        let mut mock = MockBedrockApi::new();
        mock.expect_invoke_model()
            .times(1)
            .returning(|_, _| Err(ExampleError::AccessDenied("model not enabled".to_string())));

        let err = invoke_model(&mock, MODEL, "Say hi").await.unwrap_err();
        match err {
            ExampleError::AccessDenied(msg) => assert_eq!(msg, "model not enabled"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_invoke_model_rejects_garbage_reply() {
        let mut mock = MockBedrockApi::new();
        mock.expect_invoke_model()
            .times(1)
            .returning(|_, _| Ok(b"not json".to_vec()));

        let err = invoke_model(&mock, MODEL, "Say hi").await.unwrap_err();
        assert!(matches!(err, ExampleError::Serialization(_)));
    }

    #[test]
    fn test_extract_text_skips_non_text_blocks() {
        let body = json!({
            "content": [
                { "type": "text", "text": "Hello" },
                { "type": "tool_use", "id": "t1" },
                { "type": "text", "text": ", world" }
            ]
        });
        let text = extract_text(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(text, "Hello, world");
    }
}
