//! Amazon SQS examples: send, list and receive.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sqs::Client;
use tracing::info;

use super::require;
use crate::errors::ExampleError;

/// The service caps a single receive at ten messages.
pub const MAX_RECEIVE_BATCH: i32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    pub message_id: String,
    pub receipt_handle: Option<String>,
    pub body: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SqsApi: Send + Sync {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, ExampleError>;

    async fn list_queues(&self, prefix: Option<String>) -> Result<Vec<String>, ExampleError>;

    async fn receive_message(
        &self,
        queue_url: &str,
        max_messages: i32,
    ) -> Result<Vec<ReceivedMessage>, ExampleError>;
}

pub struct SqsClient {
    inner: Client,
}

impl SqsClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl SqsApi for SqsClient {
    async fn send_message(&self, queue_url: &str, body: &str) -> Result<String, ExampleError> {
        let resp = self
            .inner
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await?;
        Ok(resp.message_id().unwrap_or_default().to_string())
    }

    async fn list_queues(&self, prefix: Option<String>) -> Result<Vec<String>, ExampleError> {
        let resp = self
            .inner
            .list_queues()
            .set_queue_name_prefix(prefix)
            .send()
            .await?;
        Ok(resp.queue_urls().to_vec())
    }

    async fn receive_message(
        &self,
        queue_url: &str,
        max_messages: i32,
    ) -> Result<Vec<ReceivedMessage>, ExampleError> {
        let resp = self
            .inner
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .send()
            .await?;
        Ok(resp
            .messages()
            .iter()
            .map(|m| ReceivedMessage {
                message_id: m.message_id().unwrap_or_default().to_string(),
                receipt_handle: m.receipt_handle().map(str::to_string),
                body: m.body().unwrap_or_default().to_string(),
            })
            .collect())
    }
}

/// Send `body` to the queue and return the message ID assigned by SQS.
///
/// # Errors
///
/// Returns an error if either argument is empty or the call fails.
pub async fn send_message<C: SqsApi + ?Sized>(
    sqs: &C,
    queue_url: &str,
    body: &str,
) -> Result<String, ExampleError> {
    require("queue URL", queue_url)?;
    require("message body", body)?;
    let message_id = sqs.send_message(queue_url, body).await?;
    info!(queue_url, message_id = %message_id, "Sent SQS message");
    Ok(message_id)
}

/// # Errors
///
/// Returns an error if the call fails.
pub async fn list_queues<C: SqsApi + ?Sized>(
    sqs: &C,
    prefix: Option<&str>,
) -> Result<Vec<String>, ExampleError> {
    let prefix = prefix.filter(|p| !p.is_empty()).map(str::to_string);
    sqs.list_queues(prefix).await
}

/// Receive up to `max_messages` messages; the count is clamped to what SQS accepts.
///
/// # Errors
///
/// Returns an error if the queue URL is empty or the call fails.
pub async fn receive_messages<C: SqsApi + ?Sized>(
    sqs: &C,
    queue_url: &str,
    max_messages: i32,
) -> Result<Vec<ReceivedMessage>, ExampleError> {
    require("queue URL", queue_url)?;
    let batch = max_messages.clamp(1, MAX_RECEIVE_BATCH);
    let messages = sqs.receive_message(queue_url, batch).await?;
    info!(queue_url, count = messages.len(), "Received SQS messages");
    Ok(messages)
}
