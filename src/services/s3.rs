use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::Client;
use tracing::{debug, info};

use super::require;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectSummary {
    pub key: String,
    pub size: i64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait S3Api: Send + Sync {
    /// Every object in the bucket, across all pages.
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>, ExampleError>;
}

pub struct S3Client {
    inner: Client,
}

impl S3Client {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl S3Api for S3Client {
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectSummary>, ExampleError> {
        let mut pages = self
            .inner
            .list_objects_v2()
            .bucket(bucket)
            .into_paginator()
            .send();

        let mut objects = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page?;
            debug!(bucket, key_count = ?page.key_count(), "Fetched page");
            objects.extend(page.contents().iter().map(|o| ObjectSummary {
                key: o.key().unwrap_or_default().to_string(),
                size: o.size().unwrap_or_default(),
            }));
        }
        Ok(objects)
    }
}

/// # Errors
///
/// Returns an error if the bucket name is empty or a page request fails.
pub async fn list_objects<C: S3Api + ?Sized>(
    s3: &C,
    bucket: &str,
) -> Result<Vec<ObjectSummary>, ExampleError> {
    require("bucket", bucket)?;
    let objects = s3.list_objects(bucket).await?;
    info!(bucket, count = objects.len(), "Listed objects");
    Ok(objects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_objects_returns_mocked_listing() {
        let mut mock = MockS3Api::new();
        mock.expect_list_objects()
            .withf(|bucket: &str| bucket == "photos")
            .times(1)
            .returning(|_| {
                Ok(vec![
                    ObjectSummary {
                        key: "a.jpg".to_string(),
                        size: 1024,
                    },
                    ObjectSummary {
                        key: "b.png".to_string(),
                        size: 2048,
                    },
                ])
            });

        let objects = list_objects(&mock, "photos").await.unwrap();
        assert_eq!(objects.len(), 2);
        assert_eq!(objects[1].key, "b.png");
    }

    #[tokio::test]
    async fn test_list_objects_requires_bucket() {
        let mut mock = MockS3Api::new();
        mock.expect_list_objects().times(0);

        assert!(list_objects(&mock, "").await.is_err());
    }
}
