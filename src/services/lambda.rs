use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_lambda::Client;
use aws_sdk_lambda::primitives::Blob;
use tracing::info;

use super::require;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub status_code: i32,
    pub function_error: Option<String>,
    pub payload: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LambdaApi: Send + Sync {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Invocation, ExampleError>;
}

pub struct LambdaClient {
    inner: Client,
}

impl LambdaClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl LambdaApi for LambdaClient {
    async fn invoke(&self, function_name: &str, payload: Vec<u8>) -> Result<Invocation, ExampleError> {
        let resp = self
            .inner
            .invoke()
            .function_name(function_name)
            .payload(Blob::new(payload))
            .send()
            .await?;
        let payload = resp
            .payload()
            .map(|blob| String::from_utf8_lossy(blob.as_ref()).into_owned())
            .unwrap_or_default();
        Ok(Invocation {
            status_code: resp.status_code(),
            function_error: resp.function_error().map(str::to_string),
            payload,
        })
    }
}

/// Synchronously invoke `function_name` with a JSON payload.
///
/// # Errors
///
/// Returns an error if the payload is not JSON, the call fails, or the function
/// itself reports an error.
pub async fn invoke_function<C: LambdaApi + ?Sized>(
    lambda: &C,
    function_name: &str,
    payload_json: &str,
) -> Result<Invocation, ExampleError> {
    require("function name", function_name)?;
    let payload: serde_json::Value = serde_json::from_str(payload_json)
        .map_err(|e| ExampleError::InvalidInput(format!("payload is not JSON: {e}")))?;

    let invocation = lambda
        .invoke(function_name, serde_json::to_vec(&payload)?)
        .await?;
    info!(function_name, status_code = invocation.status_code, "Invoked function");

    if let Some(kind) = &invocation.function_error {
        return Err(ExampleError::Aws(format!(
            "function {function_name} returned {kind}: {}",
            invocation.payload
        )));
    }
    Ok(invocation)
}
