use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ssm::Client;
use aws_sdk_ssm::types::ParameterType;
use tracing::info;

use super::require;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    pub name: String,
    pub value: String,
    pub version: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SsmApi: Send + Sync {
    async fn put_parameter(&self, name: &str, value: &str) -> Result<i64, ExampleError>;

    async fn get_parameter(&self, name: &str) -> Result<Option<ParameterValue>, ExampleError>;
}

pub struct SsmClient {
    inner: Client,
}

impl SsmClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl SsmApi for SsmClient {
    async fn put_parameter(&self, name: &str, value: &str) -> Result<i64, ExampleError> {
        let resp = self
            .inner
            .put_parameter()
            .name(name)
            .value(value)
            .r#type(ParameterType::String)
            .overwrite(true)
            .send()
            .await?;
        Ok(resp.version())
    }

    async fn get_parameter(&self, name: &str) -> Result<Option<ParameterValue>, ExampleError> {
        match self
            .inner
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
        {
            Ok(resp) => {
                let Some(param) = resp.parameter() else {
                    return Ok(None);
                };
                Ok(Some(ParameterValue {
                    name: param.name().unwrap_or(name).to_string(),
                    value: param.value().unwrap_or_default().to_string(),
                    version: param.version(),
                }))
            }
            // A missing parameter is an answer, not a failure
            Err(e) if e
                .as_service_error()
                .is_some_and(|se| se.is_parameter_not_found()) =>
            {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Store `value` under `name`, overwriting any previous value.
///
/// # Errors
///
/// Returns an error if either argument is empty or the call fails.
pub async fn put_parameter<C: SsmApi + ?Sized>(
    ssm: &C,
    name: &str,
    value: &str,
) -> Result<i64, ExampleError> {
    require("parameter name", name)?;
    require("parameter value", value)?;
    let version = ssm.put_parameter(name, value).await?;
    info!(name, version, "Stored SSM parameter");
    Ok(version)
}

/// # Errors
///
/// Returns an error if the name is empty or the call fails for a reason other than
/// the parameter not existing.
pub async fn get_parameter<C: SsmApi + ?Sized>(
    ssm: &C,
    name: &str,
) -> Result<Option<ParameterValue>, ExampleError> {
    require("parameter name", name)?;
    ssm.get_parameter(name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_parameter_returns_new_version() {
        let mut mock = MockSsmApi::new();
        mock.expect_put_parameter()
            .withf(|name: &str, value: &str| name == "/app/db/host" && value == "db.internal")
            .times(1)
            .returning(|_, _| Ok(3));

        let version = put_parameter(&mock, "/app/db/host", "db.internal").await.unwrap();
        assert_eq!(version, 3);
    }

    #[tokio::test]
    async fn test_get_parameter_returns_mocked_value_unchanged() {
        let expected = ParameterValue {
            name: "/app/db/host".to_string(),
            value: "db.internal".to_string(),
            version: 3,
        };
        let returned = expected.clone();
        let mut mock = MockSsmApi::new();
        mock.expect_get_parameter()
            .withf(|name: &str| name == "/app/db/host")
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let got = get_parameter(&mock, "/app/db/host").await.unwrap();
        assert_eq!(got, Some(expected));
    }

    #[tokio::test]
    async fn test_get_parameter_missing_is_none() {
        let mut mock = MockSsmApi::new();
        mock.expect_get_parameter().times(1).returning(|_| Ok(None));

        assert!(get_parameter(&mock, "/nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_parameter_rejects_blank_name() {
        let mut mock = MockSsmApi::new();
        mock.expect_put_parameter().times(0);

        let err = put_parameter(&mock, "  ", "v").await.unwrap_err();
        assert!(matches!(err, ExampleError::InvalidInput(_)));
    }
}
