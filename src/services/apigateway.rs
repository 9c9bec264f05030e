use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_apigateway::Client;
use aws_smithy_types::DateTime;
use aws_smithy_types::date_time::Format;
use tracing::info;

use super::require;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub id: String,
    pub created: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestApiSummary {
    pub id: String,
    pub name: String,
    pub created: Option<String>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiGatewayApi: Send + Sync {
    async fn create_deployment(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<Deployment, ExampleError>;

    async fn get_rest_apis(&self) -> Result<Vec<RestApiSummary>, ExampleError>;
}

pub struct ApiGatewayClient {
    inner: Client,
}

impl ApiGatewayClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

fn format_date(date: Option<&DateTime>) -> Option<String> {
    date.and_then(|d| d.fmt(Format::DateTime).ok())
}

#[async_trait]
impl ApiGatewayApi for ApiGatewayClient {
    async fn create_deployment(
        &self,
        rest_api_id: &str,
        stage_name: &str,
    ) -> Result<Deployment, ExampleError> {
        let resp = self
            .inner
            .create_deployment()
            .rest_api_id(rest_api_id)
            .stage_name(stage_name)
            .send()
            .await?;
        Ok(Deployment {
            id: resp.id().unwrap_or_default().to_string(),
            created: format_date(resp.created_date()),
        })
    }

    async fn get_rest_apis(&self) -> Result<Vec<RestApiSummary>, ExampleError> {
        let resp = self.inner.get_rest_apis().send().await?;
        Ok(resp
            .items()
            .iter()
            .map(|api| RestApiSummary {
                id: api.id().unwrap_or_default().to_string(),
                name: api.name().unwrap_or_default().to_string(),
                created: format_date(api.created_date()),
            })
            .collect())
    }
}

/// Deploy the REST API to `stage_name`, creating the stage if needed.
///
/// # Errors
///
/// Returns an error if either argument is empty or the call fails.
pub async fn create_deployment<C: ApiGatewayApi + ?Sized>(
    apigw: &C,
    rest_api_id: &str,
    stage_name: &str,
) -> Result<Deployment, ExampleError> {
    require("REST API ID", rest_api_id)?;
    require("stage name", stage_name)?;
    let deployment = apigw.create_deployment(rest_api_id, stage_name).await?;
    info!(rest_api_id, stage_name, deployment_id = %deployment.id, "Created deployment");
    Ok(deployment)
}

/// # Errors
///
/// Returns an error if the call fails.
pub async fn list_rest_apis<C: ApiGatewayApi + ?Sized>(
    apigw: &C,
) -> Result<Vec<RestApiSummary>, ExampleError> {
    apigw.get_rest_apis().await
}

/// One line per API, the way the example prints them.
#[must_use]
pub fn format_rest_api(api: &RestApiSummary) -> String {
    match &api.created {
        Some(created) => format!("{}  {}  (created {created})", api.id, api.name),
        None => format!("{}  {}", api.id, api.name),
    }
}
