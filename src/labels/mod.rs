//! Photo label Lambda: labels images uploaded to S3 and indexes them by label
//!
//! The S3 notification triggers the handler, Rekognition detects labels, and each
//! label gets the image key added to its item in the labels table.

pub mod handler;

use std::fmt;

use aws_lambda_events::event::s3::S3Event;
use percent_encoding::percent_decode_str;

pub use handler::function_handler as handler;

/// Extensions Rekognition accepts for `DetectLabels` on S3 objects.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Skipped {
    MissingLocation,
    UndecodableKey(String),
    NotAnImage(String),
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skipped::MissingLocation => write!(f, "record has no bucket or key"),
            Skipped::UndecodableKey(key) => write!(f, "object key {key} is not valid UTF-8"),
            Skipped::NotAnImage(key) => write!(f, "object {key} is not a supported image"),
        }
    }
}

/// Decode an object key as delivered in S3 notifications: form-urlencoded, so `+`
/// is a space and `%XX` escapes a byte.
#[must_use]
pub fn decode_object_key(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(|decoded| decoded.into_owned())
}

#[must_use]
pub fn is_supported_image(key: &str) -> bool {
    key.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|supported| ext.eq_ignore_ascii_case(supported))
    })
}

/// The images referenced by an S3 event, in record order. Records that cannot be
/// labeled come back as `Err` so the caller can count and log them.
#[must_use]
pub fn images_from_event(event: &S3Event) -> Vec<Result<ImageRef, Skipped>> {
    event
        .records
        .iter()
        .map(|record| {
            let (Some(bucket), Some(raw_key)) = (
                record.s3.bucket.name.as_deref(),
                record.s3.object.key.as_deref(),
            ) else {
                return Err(Skipped::MissingLocation);
            };
            let key = decode_object_key(raw_key)
                .ok_or_else(|| Skipped::UndecodableKey(raw_key.to_string()))?;
            if !is_supported_image(&key) {
                return Err(Skipped::NotAnImage(key));
            }
            Ok(ImageRef {
                bucket: bucket.to_string(),
                key,
            })
        })
        .collect()
}
