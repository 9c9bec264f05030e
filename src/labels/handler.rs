use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use tracing::{error, info};

use super::{ImageRef, images_from_event};
use crate::core::config::LabelsConfig;
use crate::errors::ExampleError;
use crate::services::dynamodb::{self, DynamoDbApi};
use crate::services::rekognition::{self, RekognitionApi};

pub const MAX_LABELS: i32 = 10;
pub const MIN_CONFIDENCE: f32 = 75.0;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct LabelSummary {
    pub images_processed: usize,
    pub images_skipped: usize,
    pub labels_recorded: usize,
}

/// Label every image in the event, one call at a time. The first failure aborts.
///
/// # Errors
///
/// Returns the first Rekognition or DynamoDB error encountered.
pub async fn process_event<R, D>(
    rekognition: &R,
    dynamodb: &D,
    config: &LabelsConfig,
    event: &S3Event,
) -> Result<LabelSummary, ExampleError>
where
    R: RekognitionApi + ?Sized,
    D: DynamoDbApi + ?Sized,
{
    let mut summary = LabelSummary::default();

    for image in images_from_event(event) {
        let ImageRef { bucket, key } = match image {
            Ok(image) => image,
            Err(skipped) => {
                info!(reason = %skipped, "Skipping record");
                summary.images_skipped += 1;
                continue;
            }
        };

        let labels =
            rekognition::detect_labels(rekognition, &bucket, &key, MAX_LABELS, MIN_CONFIDENCE)
                .await?;
        for label in &labels {
            dynamodb::add_image_to_label(dynamodb, &config.labels_table_name, &label.name, &key)
                .await?;
        }

        info!(bucket = %bucket, key = %key, labels = labels.len(), "Labeled image");
        summary.images_processed += 1;
        summary.labels_recorded += labels.len();
    }

    Ok(summary)
}

/// Lambda entry point: wire real clients and delegate to [`process_event`].
///
/// # Errors
///
/// Returns an error if configuration is missing or processing fails.
pub async fn function_handler<R, D>(
    rekognition: &R,
    dynamodb: &D,
    event: LambdaEvent<S3Event>,
) -> Result<LabelSummary, Error>
where
    R: RekognitionApi + ?Sized,
    D: DynamoDbApi + ?Sized,
{
    handle_with_lookup(rekognition, dynamodb, |key| std::env::var(key).ok(), event).await
}

/// [`function_handler`] with the configuration read from `lookup` instead of the
/// process environment.
///
/// # Errors
///
/// Returns an error if `LABELS_TABLE_NAME` is missing or processing fails.
pub async fn handle_with_lookup<R, D, F>(
    rekognition: &R,
    dynamodb: &D,
    lookup: F,
    event: LambdaEvent<S3Event>,
) -> Result<LabelSummary, Error>
where
    R: RekognitionApi + ?Sized,
    D: DynamoDbApi + ?Sized,
    F: Fn(&str) -> Option<String>,
{
    let config = LabelsConfig::from_lookup(lookup).map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e.to_string())
    })?;
    info!(
        request_id = %event.context.request_id,
        records = event.payload.records.len(),
        "Photo label handler received S3 event"
    );

    process_event(rekognition, dynamodb, &config, &event.payload)
        .await
        .map_err(|e| {
            error!("Failed to label images: {}", e);
            Error::from(e.to_string())
        })
}
