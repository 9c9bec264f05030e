//! Amazon Kendra example: create an index and wait until it leaves `CREATING`.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_kendra::Client;
use aws_sdk_kendra::types::{IndexEdition, IndexStatus};
use tracing::{info, warn};

use super::require;
use crate::core::config::PollSettings;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexState {
    Creating,
    Active,
    Failed(String),
    Other(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KendraApi: Send + Sync {
    async fn create_index(&self, name: &str, role_arn: &str) -> Result<String, ExampleError>;

    async fn describe_index(&self, index_id: &str) -> Result<IndexState, ExampleError>;
}

pub struct KendraClient {
    inner: Client,
}

impl KendraClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl KendraApi for KendraClient {
    async fn create_index(&self, name: &str, role_arn: &str) -> Result<String, ExampleError> {
        let resp = self
            .inner
            .create_index()
            .name(name)
            .role_arn(role_arn)
            .edition(IndexEdition::DeveloperEdition)
            .send()
            .await?;
        resp.id()
            .map(str::to_string)
            .ok_or_else(|| ExampleError::Aws("CreateIndex returned no index ID".to_string()))
    }

    async fn describe_index(&self, index_id: &str) -> Result<IndexState, ExampleError> {
        let resp = self.inner.describe_index().id(index_id).send().await?;
        let state = match resp.status() {
            Some(IndexStatus::Creating) => IndexState::Creating,
            Some(IndexStatus::Active) => IndexState::Active,
            Some(IndexStatus::Failed) => {
                IndexState::Failed(resp.error_message().unwrap_or("unknown reason").to_string())
            }
            Some(other) => IndexState::Other(other.as_str().to_string()),
            None => IndexState::Other("UNKNOWN".to_string()),
        };
        Ok(state)
    }
}

/// # Errors
///
/// Returns an error if an argument is empty or the call fails.
pub async fn create_index<C: KendraApi + ?Sized>(
    kendra: &C,
    name: &str,
    role_arn: &str,
) -> Result<String, ExampleError> {
    require("index name", name)?;
    require("role ARN", role_arn)?;
    let index_id = kendra.create_index(name, role_arn).await?;
    info!(name, index_id = %index_id, "Index creation started");
    Ok(index_id)
}

/// Poll `DescribeIndex` until the index is no longer creating.
///
/// # Errors
///
/// Returns an error if the index reports `FAILED`, a describe call fails, or the
/// attempt budget runs out while the index is still creating.
pub async fn wait_for_index<C: KendraApi + ?Sized>(
    kendra: &C,
    index_id: &str,
    poll: PollSettings,
) -> Result<IndexState, ExampleError> {
    require("index ID", index_id)?;
    for attempt in 1..=poll.max_attempts {
        match kendra.describe_index(index_id).await? {
            IndexState::Creating => {
                info!(index_id, attempt, "Index is still creating");
                if attempt < poll.max_attempts {
                    tokio::time::sleep(poll.interval).await;
                }
            }
            IndexState::Failed(reason) => {
                return Err(ExampleError::Aws(format!(
                    "index {index_id} failed to create: {reason}"
                )));
            }
            IndexState::Other(status) => {
                warn!(index_id, status = %status, "Index left CREATING in an unexpected state");
                return Ok(IndexState::Other(status));
            }
            IndexState::Active => return Ok(IndexState::Active),
        }
    }
    Err(ExampleError::Timeout {
        what: format!("Kendra index {index_id} to become active"),
        attempts: poll.max_attempts,
    })
}
