use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cognitoidentityprovider::Client;

use crate::errors::ExampleError;

/// `ListUserPools` accepts between 1 and 60 results per page.
pub const MAX_USER_POOLS: i32 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPoolSummary {
    pub id: String,
    pub name: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CognitoApi: Send + Sync {
    async fn list_user_pools(&self, max_results: i32) -> Result<Vec<UserPoolSummary>, ExampleError>;
}

pub struct CognitoClient {
    inner: Client,
}

impl CognitoClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl CognitoApi for CognitoClient {
    async fn list_user_pools(&self, max_results: i32) -> Result<Vec<UserPoolSummary>, ExampleError> {
        let resp = self
            .inner
            .list_user_pools()
            .max_results(max_results)
            .send()
            .await?;
        Ok(resp
            .user_pools()
            .iter()
            .map(|pool| UserPoolSummary {
                id: pool.id().unwrap_or_default().to_string(),
                name: pool.name().unwrap_or_default().to_string(),
            })
            .collect())
    }
}

/// List up to `max_results` user pools in the current region.
///
/// # Errors
///
/// Returns an error if the call fails.
pub async fn list_user_pools<C: CognitoApi + ?Sized>(
    cognito: &C,
    max_results: i32,
) -> Result<Vec<UserPoolSummary>, ExampleError> {
    cognito
        .list_user_pools(max_results.clamp(1, MAX_USER_POOLS))
        .await
}
