use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::types::{Image, S3Object};
use tracing::info;

use super::require;
use crate::errors::ExampleError;

#[derive(Debug, Clone, PartialEq)]
pub struct DetectedLabel {
    pub name: String,
    pub confidence: f32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RekognitionApi: Send + Sync {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<DetectedLabel>, ExampleError>;
}

pub struct RekognitionClient {
    inner: Client,
}

impl RekognitionClient {
    #[must_use]
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            inner: Client::new(config),
        }
    }
}

#[async_trait]
impl RekognitionApi for RekognitionClient {
    async fn detect_labels(
        &self,
        bucket: &str,
        key: &str,
        max_labels: i32,
        min_confidence: f32,
    ) -> Result<Vec<DetectedLabel>, ExampleError> {
        let image = Image::builder()
            .s3_object(S3Object::builder().bucket(bucket).name(key).build())
            .build();
        let resp = self
            .inner
            .detect_labels()
            .image(image)
            .max_labels(max_labels)
            .min_confidence(min_confidence)
            .send()
            .await?;
        Ok(resp
            .labels()
            .iter()
            .filter_map(|label| {
                Some(DetectedLabel {
                    name: label.name()?.to_string(),
                    confidence: label.confidence().unwrap_or_default(),
                })
            })
            .collect())
    }
}

/// Detect up to `max_labels` labels in an image stored in S3.
///
/// # Errors
///
/// Returns an error if the bucket or key is empty or the call fails.
pub async fn detect_labels<C: RekognitionApi + ?Sized>(
    rekognition: &C,
    bucket: &str,
    key: &str,
    max_labels: i32,
    min_confidence: f32,
) -> Result<Vec<DetectedLabel>, ExampleError> {
    require("bucket", bucket)?;
    require("object key", key)?;
    let labels = rekognition
        .detect_labels(bucket, key, max_labels.max(1), min_confidence)
        .await?;
    info!(bucket, key, count = labels.len(), "Detected labels");
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detect_labels_passes_object_location() {
        let mut mock = MockRekognitionApi::new();
        mock.expect_detect_labels()
            .withf(|bucket: &str, key: &str, max: &i32, min: &f32| {
                bucket == "photos" && key == "cat.jpg" && *max == 10 && (*min - 75.0).abs() < f32::EPSILON
            })
            .times(1)
            .returning(|_, _, _, _| {
                Ok(vec![DetectedLabel {
                    name: "Cat".to_string(),
                    confidence: 99.1,
                }])
            });

        let labels = detect_labels(&mock, "photos", "cat.jpg", 10, 75.0).await.unwrap();
        assert_eq!(labels[0].name, "Cat");
    }

    #[tokio::test]
    async fn test_detect_labels_requires_key() {
        let mut mock = MockRekognitionApi::new();
        mock.expect_detect_labels().times(0);

        assert!(detect_labels(&mock, "photos", "", 10, 75.0).await.is_err());
    }
}
