use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use tracing::debug;

use super::require;
use crate::errors::ExampleError;

/// Partition key of the labels table.
pub const LABEL_KEY: &str = "Label";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DynamoDbApi: Send + Sync {
    async fn list_tables(&self) -> Result<Vec<String>, ExampleError>;

    async fn add_image_to_label(
        &self,
        table: &str,
        label: &str,
        image_key: &str,
    ) -> Result<(), ExampleError>;
}

pub struct DynamoDbClient {
    inner: Client,
}

impl DynamoDbClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl DynamoDbApi for DynamoDbClient {
    async fn list_tables(&self) -> Result<Vec<String>, ExampleError> {
        let resp = self.inner.list_tables().send().await?;
        Ok(resp.table_names().to_vec())
    }

    async fn add_image_to_label(
        &self,
        table: &str,
        label: &str,
        image_key: &str,
    ) -> Result<(), ExampleError> {
        // `Count` is a reserved word, hence the placeholder
        self.inner
            .update_item()
            .table_name(table)
            .key(LABEL_KEY, AttributeValue::S(label.to_string()))
            .update_expression("ADD Images :image, #count :one")
            .expression_attribute_names("#count", "Count")
            .expression_attribute_values(":image", AttributeValue::Ss(vec![image_key.to_string()]))
            .expression_attribute_values(":one", AttributeValue::N("1".to_string()))
            .send()
            .await?;
        debug!(table, label, image_key, "Recorded label");
        Ok(())
    }
}

/// # Errors
///
/// Returns an error if the call fails.
pub async fn list_tables<C: DynamoDbApi + ?Sized>(dynamodb: &C) -> Result<Vec<String>, ExampleError> {
    dynamodb.list_tables().await
}

/// Add `image_key` to the set of images tagged with `label`.
///
/// # Errors
///
/// Returns an error if an argument is empty or the update fails.
pub async fn add_image_to_label<C: DynamoDbApi + ?Sized>(
    dynamodb: &C,
    table: &str,
    label: &str,
    image_key: &str,
) -> Result<(), ExampleError> {
    require("table", table)?;
    require("label", label)?;
    require("image key", image_key)?;
    dynamodb.add_image_to_label(table, label, image_key).await
}
